#![no_std]
#![allow(clippy::too_many_arguments)]

//! # Dual-Pool Prediction Market
//!
//! Escrow and settlement for yes/no prediction markets backed by a stablecoin.
//! Each prediction keeps a YES pool and a NO pool; prices come from the pool
//! ratio, bettors may exit early at that price minus a fee, and at resolution
//! winners split the losing pool after platform and creator fees.
//!
//! Resolvers register, resolve and cancel predictions. The owner manages
//! resolvers and withdraws platform fees.

pub mod admin;
pub mod bets;
pub mod claims;
pub mod errors;
pub mod events;
pub mod fees;
pub mod markets;
pub mod pool_math;
pub mod reentrancy_guard;
pub mod resolution;
pub mod storage;
pub mod types;

#[cfg(test)]
mod admin_tests;
#[cfg(test)]
mod exit_tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use crate::admin::AccessControl;
use crate::bets::BetManager;
use crate::claims::ClaimManager;
use crate::fees::FeeManager;
use crate::markets::MarketRegistry;
use crate::resolution::ResolutionManager;
use crate::storage::Storage;

pub use crate::errors::Error;
pub use crate::types::{ExitQuote, PlatformConfig, Position, Prediction, Prices};

#[contract]
pub struct DualPoolMarket;

#[contractimpl]
impl DualPoolMarket {
    // ===== SETUP & ADMIN =====

    /// One-time setup. `token` is the stablecoin held in escrow; the owner
    /// becomes the first resolver.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        AccessControl::initialize(&env, &owner, &token)
    }

    /// Grants or revokes the resolver role. Owner only.
    pub fn set_resolver(
        env: Env,
        owner: Address,
        resolver: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessControl::set_resolver(&env, &owner, &resolver, enabled)
    }

    /// Nominates a new owner, who must call `accept_ownership`.
    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessControl::transfer_ownership(&env, &owner, &new_owner)
    }

    pub fn accept_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessControl::accept_ownership(&env, &new_owner)
    }

    /// Sends the accumulated platform fees to `to`. Owner only.
    pub fn withdraw_platform_fees(env: Env, owner: Address, to: Address) -> Result<i128, Error> {
        Storage::bump_instance(&env);
        FeeManager::withdraw(&env, &owner, &to)
    }

    // ===== REGISTRATION =====

    pub fn register_prediction(
        env: Env,
        resolver: Address,
        id: u64,
        creator: Address,
        deadline: u64,
    ) -> Result<(), Error> {
        Storage::bump_instance(&env);
        MarketRegistry::register(&env, &resolver, id, &creator, deadline)
    }

    /// Registers several predictions atomically; returns how many.
    pub fn register_predictions_batch(
        env: Env,
        resolver: Address,
        ids: Vec<u64>,
        creators: Vec<Address>,
        deadlines: Vec<u64>,
    ) -> Result<u32, Error> {
        Storage::bump_instance(&env);
        MarketRegistry::register_batch(&env, &resolver, &ids, &creators, &deadlines)
    }

    // ===== TRADING =====

    pub fn place_bet(
        env: Env,
        bettor: Address,
        id: u64,
        is_yes: bool,
        amount: i128,
    ) -> Result<Position, Error> {
        Storage::bump_instance(&env);
        BetManager::place_bet(&env, &bettor, id, is_yes, amount)
    }

    pub fn exit_early(
        env: Env,
        bettor: Address,
        id: u64,
        is_yes: bool,
        amount: i128,
    ) -> Result<ExitQuote, Error> {
        Storage::bump_instance(&env);
        BetManager::exit_early(&env, &bettor, id, is_yes, amount)
    }

    // ===== SETTLEMENT =====

    pub fn resolve_prediction(
        env: Env,
        resolver: Address,
        id: u64,
        outcome: bool,
    ) -> Result<(), Error> {
        Storage::bump_instance(&env);
        ResolutionManager::resolve(&env, &resolver, id, outcome)
    }

    pub fn cancel_prediction(
        env: Env,
        caller: Address,
        id: u64,
        reason: String,
    ) -> Result<(), Error> {
        Storage::bump_instance(&env);
        ResolutionManager::cancel(&env, &caller, id, &reason)
    }

    pub fn claim_winnings(env: Env, user: Address, id: u64) -> Result<i128, Error> {
        Storage::bump_instance(&env);
        ClaimManager::claim_winnings(&env, &user, id)
    }

    pub fn claim_refund(env: Env, user: Address, id: u64) -> Result<i128, Error> {
        Storage::bump_instance(&env);
        ClaimManager::claim_refund(&env, &user, id)
    }

    // ===== QUERIES =====

    pub fn get_prediction(env: Env, id: u64) -> Result<Prediction, Error> {
        MarketRegistry::get(&env, id)
    }

    /// Zeroed for users who never bet.
    pub fn get_position(env: Env, id: u64, user: Address) -> Position {
        Storage::get_position(&env, id, &user)
    }

    /// `(yes, no)` prices in basis points; 5000/5000 for empty pools.
    pub fn get_prices(env: Env, id: u64) -> Result<Prices, Error> {
        BetManager::prices(&env, id)
    }

    pub fn calculate_exit_value(
        env: Env,
        id: u64,
        is_yes: bool,
        amount: i128,
    ) -> Result<ExitQuote, Error> {
        BetManager::quote_exit(&env, id, is_yes, amount)
    }

    /// What `claim_winnings` would currently pay `user`.
    pub fn calculate_payout(env: Env, id: u64, user: Address) -> Result<i128, Error> {
        ClaimManager::preview_payout(&env, id, &user)
    }

    pub fn get_participant_count(env: Env, id: u64) -> Result<u32, Error> {
        MarketRegistry::participant_count(&env, id)
    }

    pub fn is_prediction_active(env: Env, id: u64) -> bool {
        MarketRegistry::is_active(&env, id)
    }

    pub fn platform_fee_balance(env: Env) -> i128 {
        FeeManager::balance(&env)
    }

    pub fn is_resolver(env: Env, addr: Address) -> bool {
        Storage::is_resolver(&env, &addr)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        AccessControl::owner(&env)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        Storage::get_pending_owner(&env)
    }

    pub fn get_config(env: Env) -> Result<PlatformConfig, Error> {
        AccessControl::config(&env)
    }
}
