//! # Betting and Early Exit
//!
//! Bettors stake stablecoin on either side of an open prediction and may
//! sell part or all of a side back before resolution.
//!
//! ## Exit bookkeeping
//!
//! An exit of `amount` on one side is valued at the AMM price (see
//! [`PoolMath::exit_value`]). The exiting side's pool drops by `amount`, the
//! principal leaving it. Out of that principal the bettor receives
//! `net_value`, the platform keeps `fee`, and the remainder
//! (`amount - gross_value`) is forfeited into `exit_surplus`, which is paid
//! to winners at resolution. Escrow held for a prediction therefore always
//! equals `yes_pool + no_pool + exit_surplus`.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::fees::FeeManager;
use crate::markets::MarketRegistry;
use crate::pool_math::PoolMath;
use crate::reentrancy_guard::ReentrancyGuard;
use crate::storage::Storage;
use crate::types::{ExitQuote, Position, Prices};

/// Minimum stake per bet: one stablecoin unit at 6 decimals.
pub const MIN_BET: i128 = 1_000_000;

// ===== TOKEN CUSTODY =====

/// Moves stablecoin in and out of the contract's custody.
pub struct TokenEscrow;

impl TokenEscrow {
    fn client(env: &Env) -> Result<token::Client<'_>, Error> {
        let token_id = Storage::get_token(env)?;
        Ok(token::Client::new(env, &token_id))
    }

    /// Pulls `amount` from `from` into escrow. Fails the invocation when the
    /// bettor cannot cover it.
    pub fn lock(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        let client = Self::client(env)?;
        client.transfer(from, &env.current_contract_address(), &amount);
        Ok(())
    }

    /// Pays `amount` out of escrow to `to`.
    pub fn release(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let client = Self::client(env)?;
        client.transfer(&env.current_contract_address(), to, &amount);
        Ok(())
    }
}

// ===== BET MANAGER =====

pub struct BetManager;

impl BetManager {
    /// Stakes `amount` on one side of an open prediction.
    ///
    /// A bettor may add to either side any number of times; the first nonzero
    /// stake counts them as a participant.
    pub fn place_bet(
        env: &Env,
        bettor: &Address,
        id: u64,
        is_yes: bool,
        amount: i128,
    ) -> Result<Position, Error> {
        bettor.require_auth();
        ReentrancyGuard::check(env)?;

        if amount < MIN_BET {
            return Err(Error::BelowMinimumBet);
        }

        let mut prediction = MarketRegistry::get_open(env, id)?;
        let mut position = Storage::get_position(env, id, bettor);

        TokenEscrow::lock(env, bettor, amount)?;

        if position.is_empty() {
            prediction.participant_count = prediction
                .participant_count
                .checked_add(1)
                .ok_or(Error::ArithmeticOverflow)?;
        }
        position.set_amount(is_yes, PoolMath::add(position.amount(is_yes), amount)?);
        position.total_deposited = PoolMath::add(position.total_deposited, amount)?;
        prediction.set_pool(is_yes, PoolMath::add(prediction.pool(is_yes), amount)?);

        Storage::set_prediction(env, id, &prediction);
        Storage::set_position(env, id, bettor, &position);

        EventEmitter::emit_bet_placed(env, id, bettor, is_yes, amount);
        Ok(position)
    }

    /// Current side prices in basis points.
    pub fn prices(env: &Env, id: u64) -> Result<Prices, Error> {
        let prediction = MarketRegistry::get(env, id)?;
        PoolMath::prices(prediction.yes_pool, prediction.no_pool)
    }

    /// What exiting `amount` of a side would pay right now.
    pub fn quote_exit(env: &Env, id: u64, is_yes: bool, amount: i128) -> Result<ExitQuote, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let prediction = MarketRegistry::get(env, id)?;
        PoolMath::exit_value(prediction.yes_pool, prediction.no_pool, is_yes, amount)
    }

    /// Sells `amount` of the bettor's stake on one side back at the AMM price.
    ///
    /// State is committed before the payout leaves escrow.
    pub fn exit_early(
        env: &Env,
        bettor: &Address,
        id: u64,
        is_yes: bool,
        amount: i128,
    ) -> Result<ExitQuote, Error> {
        bettor.require_auth();
        ReentrancyGuard::check(env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut prediction = MarketRegistry::get_open(env, id)?;
        let mut position = Storage::get_position(env, id, bettor);

        let held = position.amount(is_yes);
        if held < amount {
            return Err(Error::InsufficientPosition);
        }

        let quote = PoolMath::exit_value(prediction.yes_pool, prediction.no_pool, is_yes, amount)?;
        if quote.net_value == 0 {
            return Err(Error::ExitValueTooLow);
        }

        position.set_amount(is_yes, PoolMath::sub(held, amount)?);
        position.total_exited = PoolMath::add(position.total_exited, quote.net_value)?;

        let forfeited = PoolMath::sub(amount, quote.gross_value)?;
        prediction.set_pool(is_yes, PoolMath::sub(prediction.pool(is_yes), amount)?);
        prediction.exit_surplus = PoolMath::add(prediction.exit_surplus, forfeited)?;
        if position.is_empty() {
            prediction.participant_count = prediction.participant_count.saturating_sub(1);
        }

        Storage::set_prediction(env, id, &prediction);
        Storage::set_position(env, id, bettor, &position);
        FeeManager::accrue(env, quote.fee)?;

        ReentrancyGuard::run(env, || TokenEscrow::release(env, bettor, quote.net_value))??;

        log!(
            env,
            "early exit on {}: amount {}, net {}, fee {}",
            id,
            amount,
            quote.net_value,
            quote.fee
        );
        EventEmitter::emit_early_exit(env, id, bettor, is_yes, amount, quote.net_value, quote.fee);
        Ok(quote)
    }
}
