use soroban_sdk::{Address, Env};

use crate::bets::TokenEscrow;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::markets::MarketRegistry;
use crate::pool_math::PoolMath;
use crate::reentrancy_guard::ReentrancyGuard;
use crate::storage::Storage;
use crate::types::{Position, Prediction};

/// Pull-based payouts after a prediction reaches a terminal state.
///
/// Each (prediction, user) pair can claim once. The `claimed` flag is written
/// before the transfer, and the transfer runs under the reentrancy lock, so a
/// recipient contract cannot claim twice.
pub struct ClaimManager;

impl ClaimManager {
    fn winning_payout(prediction: &Prediction, position: &Position) -> Result<i128, Error> {
        let win_stake = position.amount(prediction.outcome);
        let (winning_pool, _) = prediction.split_pools(prediction.outcome);
        PoolMath::winner_payout(win_stake, winning_pool, prediction.distributable)
    }

    /// Pays the winning stake plus its pro-rata share of the winners' pot.
    pub fn claim_winnings(env: &Env, user: &Address, id: u64) -> Result<i128, Error> {
        user.require_auth();
        ReentrancyGuard::check(env)?;

        let prediction = MarketRegistry::get(env, id)?;
        if prediction.cancelled {
            return Err(Error::AlreadyCancelled);
        }
        if !prediction.resolved {
            return Err(Error::NotResolved);
        }

        let mut position = Storage::get_position(env, id, user);
        if position.claimed {
            return Err(Error::AlreadyClaimed);
        }
        if position.amount(prediction.outcome) == 0 {
            return Err(Error::NoWinningPosition);
        }

        let payout = Self::winning_payout(&prediction, &position)?;

        position.claimed = true;
        Storage::set_position(env, id, user, &position);
        ReentrancyGuard::run(env, || TokenEscrow::release(env, user, payout))??;

        EventEmitter::emit_winnings_claimed(env, id, user, payout);
        Ok(payout)
    }

    /// Returns both sides of the user's stake on a cancelled prediction.
    pub fn claim_refund(env: &Env, user: &Address, id: u64) -> Result<i128, Error> {
        user.require_auth();
        ReentrancyGuard::check(env)?;

        let prediction = MarketRegistry::get(env, id)?;
        if !prediction.cancelled {
            return Err(Error::NotCancelled);
        }

        let mut position = Storage::get_position(env, id, user);
        if position.claimed {
            return Err(Error::AlreadyClaimed);
        }
        let refund = PoolMath::add(position.yes_amount, position.no_amount)?;
        if refund == 0 {
            return Err(Error::NothingToRefund);
        }

        position.claimed = true;
        Storage::set_position(env, id, user, &position);
        ReentrancyGuard::run(env, || TokenEscrow::release(env, user, refund))??;

        EventEmitter::emit_refund_claimed(env, id, user, refund);
        Ok(refund)
    }

    /// Preview of `claim_winnings`; zero whenever a claim would not pay.
    pub fn preview_payout(env: &Env, id: u64, user: &Address) -> Result<i128, Error> {
        let prediction = MarketRegistry::get(env, id)?;
        if !prediction.resolved {
            return Ok(0);
        }
        let position = Storage::get_position(env, id, user);
        if position.claimed {
            return Ok(0);
        }
        Self::winning_payout(&prediction, &position)
    }
}
