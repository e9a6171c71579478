//! # Access Control
//!
//! Two roles guard the contract:
//!
//! - **Owner**: a single address. Manages resolvers and withdraws platform
//!   fees. Ownership moves in two steps: the owner nominates a pending owner,
//!   and only that exact address can accept, so a mistyped target can never
//!   lock the contract out.
//! - **Resolvers**: a set of addresses allowed to register, resolve and
//!   cancel predictions. The owner is granted the role at initialization.
//!
//! Every check first calls `require_auth()` on the claimed caller, then
//! compares it against stored roles.

use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::Storage;
use crate::types::PlatformConfig;

pub struct AccessControl;

impl AccessControl {
    /// One-time setup: owner, escrow token, owner as first resolver.
    pub fn initialize(env: &Env, owner: &Address, token: &Address) -> Result<(), Error> {
        if Storage::is_initialized(env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        Storage::set_owner(env, owner);
        Storage::set_token(env, token);
        Storage::set_platform_fee_balance(env, 0);
        Storage::set_resolver(env, owner, true);
        Storage::bump_instance(env);

        log!(env, "initialized with owner {}", owner.clone());
        EventEmitter::emit_resolver_updated(env, owner, true);
        Ok(())
    }

    pub fn owner(env: &Env) -> Result<Address, Error> {
        Storage::get_owner(env)
    }

    pub fn is_owner(env: &Env, addr: &Address) -> Result<bool, Error> {
        Ok(Self::owner(env)? == *addr)
    }

    pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if !Self::is_owner(env, caller)? {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    pub fn require_resolver(env: &Env, caller: &Address) -> Result<(), Error> {
        Self::owner(env)?;
        caller.require_auth();
        if !Storage::is_resolver(env, caller) {
            return Err(Error::NotResolver);
        }
        Ok(())
    }

    /// Resolvers, plus the owner even after it revoked its own resolver role.
    pub fn require_resolver_or_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if Self::is_owner(env, caller)? || Storage::is_resolver(env, caller) {
            return Ok(());
        }
        Err(Error::NotResolver)
    }

    pub fn set_resolver(
        env: &Env,
        owner: &Address,
        resolver: &Address,
        enabled: bool,
    ) -> Result<(), Error> {
        Self::require_owner(env, owner)?;
        Storage::set_resolver(env, resolver, enabled);
        EventEmitter::emit_resolver_updated(env, resolver, enabled);
        Ok(())
    }

    /// Nominates `new_owner`; replaces any earlier nomination.
    pub fn transfer_ownership(env: &Env, owner: &Address, new_owner: &Address) -> Result<(), Error> {
        Self::require_owner(env, owner)?;
        Storage::set_pending_owner(env, new_owner);
        EventEmitter::emit_ownership_transfer_started(env, owner, new_owner);
        Ok(())
    }

    pub fn accept_ownership(env: &Env, caller: &Address) -> Result<(), Error> {
        let previous = Self::owner(env)?;
        caller.require_auth();
        match Storage::get_pending_owner(env) {
            Some(pending) if pending == *caller => {}
            _ => return Err(Error::NotPendingOwner),
        }

        Storage::set_owner(env, caller);
        Storage::clear_pending_owner(env);

        log!(env, "ownership accepted by {}", caller.clone());
        EventEmitter::emit_ownership_transferred(env, &previous, caller);
        Ok(())
    }

    pub fn config(env: &Env) -> Result<PlatformConfig, Error> {
        Ok(PlatformConfig {
            owner: Self::owner(env)?,
            pending_owner: Storage::get_pending_owner(env),
            token: Storage::get_token(env)?,
            platform_fee_balance: Storage::get_platform_fee_balance(env),
        })
    }
}
