//! # Pool Math
//!
//! Pricing and settlement arithmetic for the dual-pool AMM.
//!
//! The price of a side is the opposing pool's share of the total, so money
//! piling onto one side makes that side more expensive and the thin side
//! cheap and payout-rich. Prices are quoted in basis points.
//!
//! All functions are pure and use checked `i128` arithmetic; any overflow
//! surfaces as `Error::ArithmeticOverflow` rather than being clamped.
//! Division rounds toward zero, so payouts never exceed escrow.

use crate::errors::Error;
use crate::fees::{BPS_DENOMINATOR, CREATOR_FEE_BPS, EXIT_FEE_BPS, PLATFORM_FEE_BPS};
use crate::types::{ExitQuote, Prices, ResolutionSplit};

/// Default price of each side when both pools are empty.
pub const EVEN_PRICE_BPS: u32 = 5_000;

pub struct PoolMath;

impl PoolMath {
    /// `amount * numerator / denominator`, rounded toward zero.
    pub fn mul_div(amount: i128, numerator: i128, denominator: i128) -> Result<i128, Error> {
        if denominator == 0 {
            return Err(Error::ArithmeticOverflow);
        }
        amount
            .checked_mul(numerator)
            .and_then(|v| v.checked_div(denominator))
            .ok_or(Error::ArithmeticOverflow)
    }

    /// `amount * bps / 10_000`.
    pub fn apply_bps(amount: i128, bps: i128) -> Result<i128, Error> {
        Self::mul_div(amount, bps, BPS_DENOMINATOR)
    }

    pub fn add(a: i128, b: i128) -> Result<i128, Error> {
        a.checked_add(b).ok_or(Error::ArithmeticOverflow)
    }

    /// Subtraction that refuses to go below zero.
    pub fn sub(a: i128, b: i128) -> Result<i128, Error> {
        match a.checked_sub(b) {
            Some(v) if v >= 0 => Ok(v),
            _ => Err(Error::ArithmeticOverflow),
        }
    }

    /// `(yes_price, no_price)` in basis points.
    ///
    /// `yes_price = no_pool * 10_000 / (yes_pool + no_pool)` and the NO price
    /// is its complement, so the pair always sums to exactly 10_000. Empty
    /// pools quote 5_000 / 5_000.
    pub fn prices(yes_pool: i128, no_pool: i128) -> Result<Prices, Error> {
        let total = Self::add(yes_pool, no_pool)?;
        if total == 0 {
            return Ok(Prices {
                yes_price: EVEN_PRICE_BPS,
                no_price: EVEN_PRICE_BPS,
            });
        }
        let yes_price = Self::mul_div(no_pool, BPS_DENOMINATOR, total)?;
        let yes_price = u32::try_from(yes_price).map_err(|_| Error::ArithmeticOverflow)?;
        Ok(Prices {
            yes_price,
            no_price: BPS_DENOMINATOR as u32 - yes_price,
        })
    }

    /// Market value of `amount` staked on one side, net of the exit fee.
    ///
    /// `gross = amount * opposing_pool / (yes_pool + no_pool)`; with empty
    /// pools the even price applies.
    pub fn exit_value(
        yes_pool: i128,
        no_pool: i128,
        is_yes: bool,
        amount: i128,
    ) -> Result<ExitQuote, Error> {
        let total = Self::add(yes_pool, no_pool)?;
        let gross_value = if total == 0 {
            Self::apply_bps(amount, EVEN_PRICE_BPS as i128)?
        } else {
            let opposing = if is_yes { no_pool } else { yes_pool };
            Self::mul_div(amount, opposing, total)?
        };
        let fee = Self::apply_bps(gross_value, EXIT_FEE_BPS)?;
        let net_value = Self::sub(gross_value, fee)?;
        Ok(ExitQuote {
            gross_value,
            fee,
            net_value,
        })
    }

    /// Platform and creator cuts of the losing pool.
    ///
    /// `platform_fee + creator_fee + net_losing_pool == losing_pool` exactly.
    pub fn resolution_split(losing_pool: i128) -> Result<ResolutionSplit, Error> {
        let platform_fee = Self::apply_bps(losing_pool, PLATFORM_FEE_BPS)?;
        let creator_fee = Self::apply_bps(losing_pool, CREATOR_FEE_BPS)?;
        let net_losing_pool = Self::sub(Self::sub(losing_pool, platform_fee)?, creator_fee)?;
        Ok(ResolutionSplit {
            platform_fee,
            creator_fee,
            net_losing_pool,
        })
    }

    /// `win_stake + win_stake * distributable / winning_pool`.
    pub fn winner_payout(
        win_stake: i128,
        winning_pool: i128,
        distributable: i128,
    ) -> Result<i128, Error> {
        if winning_pool == 0 {
            return Ok(0);
        }
        let share = Self::mul_div(win_stake, distributable, winning_pool)?;
        Self::add(win_stake, share)
    }
}
