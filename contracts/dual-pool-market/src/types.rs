use soroban_sdk::{contracttype, Address};

// ===== PREDICTION =====

/// One dual-pool prediction market, keyed by its externally assigned id.
///
/// Pools hold principal only: `yes_pool` and `no_pool` are the sums of the
/// current YES and NO positions. Value forfeited by early exits is kept apart
/// in `exit_surplus` so the pools always match the positions behind them.
///
/// # State Machine
///
/// `registered` (active) moves to exactly one of `resolved` or `cancelled`;
/// both are terminal and never both set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prediction {
    pub registered: bool,
    /// Receives the creator fee at resolution
    pub creator: Address,
    /// Advisory close time (ledger timestamp, seconds)
    pub deadline: u64,
    pub yes_pool: i128,
    pub no_pool: i128,
    pub resolved: bool,
    pub outcome: bool,
    pub cancelled: bool,
    /// Addresses currently holding a nonzero position
    pub participant_count: u32,
    /// Stake forfeited by early exits, paid to winners at resolution
    pub exit_surplus: i128,
    /// Amount shared pro rata among winners, fixed at resolution
    pub distributable: i128,
}

impl Prediction {
    /// A freshly registered prediction with empty pools.
    pub fn new(creator: Address, deadline: u64) -> Self {
        Self {
            registered: true,
            creator,
            deadline,
            yes_pool: 0,
            no_pool: 0,
            resolved: false,
            outcome: false,
            cancelled: false,
            participant_count: 0,
            exit_surplus: 0,
            distributable: 0,
        }
    }

    /// Betting and early exit are only legal while active.
    pub fn is_open(&self) -> bool {
        self.registered && !self.resolved && !self.cancelled
    }

    pub fn pool(&self, is_yes: bool) -> i128 {
        if is_yes {
            self.yes_pool
        } else {
            self.no_pool
        }
    }

    pub fn set_pool(&mut self, is_yes: bool, amount: i128) {
        if is_yes {
            self.yes_pool = amount;
        } else {
            self.no_pool = amount;
        }
    }

    /// (winning pool, losing pool) for a resolved outcome.
    pub fn split_pools(&self, outcome: bool) -> (i128, i128) {
        if outcome {
            (self.yes_pool, self.no_pool)
        } else {
            (self.no_pool, self.yes_pool)
        }
    }
}

// ===== POSITION =====

/// A single bettor's stake on one prediction.
///
/// Stakes on both sides are independent. Positions are never deleted; after a
/// claim the amounts are kept for audit and `claimed` blocks further claims.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub yes_amount: i128,
    pub no_amount: i128,
    /// Cumulative amount ever staked
    pub total_deposited: i128,
    /// Cumulative net value received from early exits
    pub total_exited: i128,
    pub claimed: bool,
}

impl Position {
    pub fn amount(&self, is_yes: bool) -> i128 {
        if is_yes {
            self.yes_amount
        } else {
            self.no_amount
        }
    }

    pub fn set_amount(&mut self, is_yes: bool, amount: i128) {
        if is_yes {
            self.yes_amount = amount;
        } else {
            self.no_amount = amount;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.yes_amount == 0 && self.no_amount == 0
    }
}

// ===== QUOTES =====

/// Side prices in basis points; always sum to 10_000.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Prices {
    pub yes_price: u32,
    pub no_price: u32,
}

/// Valuation of an early exit at current pool ratios.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExitQuote {
    pub gross_value: i128,
    pub fee: i128,
    pub net_value: i128,
}

/// Fee split of the losing pool at resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolutionSplit {
    pub platform_fee: i128,
    pub creator_fee: i128,
    pub net_losing_pool: i128,
}

// ===== CONFIG =====

/// Contract-wide settings and balances.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    pub owner: Address,
    pub pending_owner: Option<Address>,
    /// Stablecoin held in escrow
    pub token: Address,
    pub platform_fee_balance: i128,
}
