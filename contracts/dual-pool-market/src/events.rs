use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

// ===== EVENT TYPES =====
//
// Every event is published with a two-part topic `(name, id)` for
// prediction events, or `(name, address)` for admin events, and one of the
// payload structs below as data. Indexers subscribe on the first topic.

/// A prediction was registered by a resolver.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictionRegisteredEvent {
    pub id: u64,
    pub creator: Address,
    pub deadline: u64,
}

/// Stake added to one side of a prediction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BetPlacedEvent {
    pub id: u64,
    pub bettor: Address,
    pub is_yes: bool,
    pub amount: i128,
}

/// Part of a position was sold back before resolution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarlyExitEvent {
    pub id: u64,
    pub bettor: Address,
    pub is_yes: bool,
    pub amount: i128,
    pub net_value: i128,
    pub fee: i128,
}

/// Outcome fixed; carries the fee rates and the pools at resolution time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictionResolvedEvent {
    pub id: u64,
    pub outcome: bool,
    pub platform_fee_bps: i128,
    pub creator_fee_bps: i128,
    pub yes_pool: i128,
    pub no_pool: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictionCancelledEvent {
    pub id: u64,
    pub reason: String,
}

/// Payout of a winning claim or a refund.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimEvent {
    pub id: u64,
    pub user: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverUpdatedEvent {
    pub resolver: Address,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformFeesWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
}

// ===== EMITTER =====

/// Publishes contract events.
pub struct EventEmitter;

impl EventEmitter {
    pub fn emit_prediction_registered(env: &Env, id: u64, creator: &Address, deadline: u64) {
        let event = PredictionRegisteredEvent {
            id,
            creator: creator.clone(),
            deadline,
        };
        env.events().publish((symbol_short!("pred_reg"), id), event);
    }

    pub fn emit_bet_placed(env: &Env, id: u64, bettor: &Address, is_yes: bool, amount: i128) {
        let event = BetPlacedEvent {
            id,
            bettor: bettor.clone(),
            is_yes,
            amount,
        };
        env.events().publish((symbol_short!("bet_plc"), id), event);
    }

    pub fn emit_early_exit(
        env: &Env,
        id: u64,
        bettor: &Address,
        is_yes: bool,
        amount: i128,
        net_value: i128,
        fee: i128,
    ) {
        let event = EarlyExitEvent {
            id,
            bettor: bettor.clone(),
            is_yes,
            amount,
            net_value,
            fee,
        };
        env.events().publish((symbol_short!("early_ex"), id), event);
    }

    pub fn emit_prediction_resolved(
        env: &Env,
        id: u64,
        outcome: bool,
        platform_fee_bps: i128,
        creator_fee_bps: i128,
        yes_pool: i128,
        no_pool: i128,
    ) {
        let event = PredictionResolvedEvent {
            id,
            outcome,
            platform_fee_bps,
            creator_fee_bps,
            yes_pool,
            no_pool,
        };
        env.events().publish((symbol_short!("resolved"), id), event);
    }

    pub fn emit_prediction_cancelled(env: &Env, id: u64, reason: &String) {
        let event = PredictionCancelledEvent {
            id,
            reason: reason.clone(),
        };
        env.events().publish((symbol_short!("cancelled"), id), event);
    }

    pub fn emit_winnings_claimed(env: &Env, id: u64, user: &Address, amount: i128) {
        let event = ClaimEvent {
            id,
            user: user.clone(),
            amount,
        };
        env.events().publish((symbol_short!("win_clm"), id), event);
    }

    pub fn emit_refund_claimed(env: &Env, id: u64, user: &Address, amount: i128) {
        let event = ClaimEvent {
            id,
            user: user.clone(),
            amount,
        };
        env.events().publish((symbol_short!("refund"), id), event);
    }

    pub fn emit_resolver_updated(env: &Env, resolver: &Address, enabled: bool) {
        let event = ResolverUpdatedEvent {
            resolver: resolver.clone(),
            enabled,
        };
        env.events()
            .publish((symbol_short!("resolver"), resolver.clone()), event);
    }

    pub fn emit_ownership_transfer_started(env: &Env, previous: &Address, pending: &Address) {
        let event = OwnershipEvent {
            previous_owner: previous.clone(),
            new_owner: pending.clone(),
        };
        env.events()
            .publish((symbol_short!("own_start"), pending.clone()), event);
    }

    pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
        let event = OwnershipEvent {
            previous_owner: previous.clone(),
            new_owner: new_owner.clone(),
        };
        env.events()
            .publish((symbol_short!("own_xfer"), new_owner.clone()), event);
    }

    pub fn emit_platform_fees_withdrawn(env: &Env, to: &Address, amount: i128) {
        let event = PlatformFeesWithdrawnEvent {
            to: to.clone(),
            amount,
        };
        env.events().publish((symbol_short!("fee_wd"), to.clone()), event);
    }
}
