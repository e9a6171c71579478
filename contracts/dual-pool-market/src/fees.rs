use soroban_sdk::{log, Address, Env};

use crate::admin::AccessControl;
use crate::bets::TokenEscrow;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::pool_math::PoolMath;
use crate::reentrancy_guard::ReentrancyGuard;
use crate::storage::Storage;

// ===== FEE CONSTANTS =====

/// 100% in basis points
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Cut of the losing pool kept by the platform at resolution (1%)
pub const PLATFORM_FEE_BPS: i128 = 100;

/// Cut of the losing pool paid to the prediction creator at resolution (0.5%)
pub const CREATOR_FEE_BPS: i128 = 50;

/// Fee charged on the gross value of an early exit (5%)
pub const EXIT_FEE_BPS: i128 = 500;

/// Platform fee ledger.
///
/// Fees are virtual until withdrawn: they stay in the contract's token
/// balance and are tracked here, separately from every prediction's escrow.
pub struct FeeManager;

impl FeeManager {
    pub fn balance(env: &Env) -> i128 {
        Storage::get_platform_fee_balance(env)
    }

    /// Adds to the platform fee balance. The balance only grows until withdrawn.
    pub fn accrue(env: &Env, amount: i128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let balance = PoolMath::add(Self::balance(env), amount)?;
        Storage::set_platform_fee_balance(env, balance);
        Ok(())
    }

    /// Sends the whole platform fee balance to `to` and zeroes it.
    pub fn withdraw(env: &Env, owner: &Address, to: &Address) -> Result<i128, Error> {
        AccessControl::require_owner(env, owner)?;
        ReentrancyGuard::check(env)?;

        let amount = Self::balance(env);
        if amount == 0 {
            return Err(Error::NoFeesToWithdraw);
        }

        Storage::set_platform_fee_balance(env, 0);
        ReentrancyGuard::run(env, || TokenEscrow::release(env, to, amount))??;

        log!(env, "platform fees withdrawn: {} to {}", amount, to.clone());
        EventEmitter::emit_platform_fees_withdrawn(env, to, amount);
        Ok(amount)
    }
}
