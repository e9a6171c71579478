use soroban_sdk::{log, Address, Env, String};

use crate::admin::AccessControl;
use crate::bets::TokenEscrow;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::fees::{FeeManager, CREATOR_FEE_BPS, PLATFORM_FEE_BPS};
use crate::markets::MarketRegistry;
use crate::pool_math::PoolMath;
use crate::reentrancy_guard::ReentrancyGuard;
use crate::storage::Storage;
use crate::types::Prediction;

/// Terminal transitions of a prediction: resolution and cancellation.
pub struct ResolutionManager;

impl ResolutionManager {
    fn require_open(prediction: &Prediction) -> Result<(), Error> {
        if prediction.resolved {
            return Err(Error::AlreadyResolved);
        }
        if prediction.cancelled {
            return Err(Error::AlreadyCancelled);
        }
        Ok(())
    }

    /// Fixes the outcome and settles fees out of the losing pool.
    ///
    /// The platform fee is credited to the fee ledger and the creator fee is
    /// paid to the creator immediately. What remains of the losing pool, plus
    /// any stake forfeited by early exits, is left in escrow for winners.
    /// With nobody on the winning side that amount goes to the platform.
    pub fn resolve(env: &Env, resolver: &Address, id: u64, outcome: bool) -> Result<(), Error> {
        AccessControl::require_resolver(env, resolver)?;
        ReentrancyGuard::check(env)?;

        let mut prediction = MarketRegistry::get(env, id)?;
        Self::require_open(&prediction)?;

        let (winning_pool, losing_pool) = prediction.split_pools(outcome);
        let split = PoolMath::resolution_split(losing_pool)?;
        let distributable = PoolMath::add(split.net_losing_pool, prediction.exit_surplus)?;

        let platform_share = if winning_pool == 0 {
            prediction.distributable = 0;
            PoolMath::add(split.platform_fee, distributable)?
        } else {
            prediction.distributable = distributable;
            split.platform_fee
        };

        prediction.resolved = true;
        prediction.outcome = outcome;
        Storage::set_prediction(env, id, &prediction);
        FeeManager::accrue(env, platform_share)?;

        ReentrancyGuard::run(env, || {
            TokenEscrow::release(env, &prediction.creator, split.creator_fee)
        })??;

        log!(
            env,
            "prediction {} resolved {}: losing pool {}, platform fee {}, creator fee {}",
            id,
            outcome,
            losing_pool,
            split.platform_fee,
            split.creator_fee
        );
        EventEmitter::emit_prediction_resolved(
            env,
            id,
            outcome,
            PLATFORM_FEE_BPS,
            CREATOR_FEE_BPS,
            prediction.yes_pool,
            prediction.no_pool,
        );
        Ok(())
    }

    /// Cancels an open prediction. No funds move; bettors pull refunds.
    ///
    /// Stake forfeited by earlier exits cannot be refunded to anyone, so it is
    /// credited to the platform fee ledger.
    pub fn cancel(env: &Env, caller: &Address, id: u64, reason: &String) -> Result<(), Error> {
        AccessControl::require_resolver_or_owner(env, caller)?;

        let mut prediction = MarketRegistry::get(env, id)?;
        Self::require_open(&prediction)?;

        prediction.cancelled = true;
        Storage::set_prediction(env, id, &prediction);
        FeeManager::accrue(env, prediction.exit_surplus)?;

        log!(env, "prediction {} cancelled", id);
        EventEmitter::emit_prediction_cancelled(env, id, reason);
        Ok(())
    }
}
