use soroban_sdk::Env;

use crate::errors::Error;
use crate::storage::DataKey;

/// Cross-function lock held while escrowed funds leave the contract.
///
/// Claims, exits and fee withdrawals commit their state change first, then
/// take the lock around the outbound token transfer. Any guarded entry point
/// reached while the lock is held fails with `Error::ReentrantCall`. A failed
/// invocation rolls the flag back together with everything else.
pub struct ReentrancyGuard;

impl ReentrancyGuard {
    pub fn is_locked(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::ReentrancyLock)
            .unwrap_or(false)
    }

    /// Fails if an outbound transfer is currently in flight.
    pub fn check(env: &Env) -> Result<(), Error> {
        if Self::is_locked(env) {
            return Err(Error::ReentrantCall);
        }
        Ok(())
    }

    /// Sets the lock before an external call.
    pub fn enter(env: &Env) -> Result<(), Error> {
        Self::check(env)?;
        env.storage()
            .instance()
            .set(&DataKey::ReentrancyLock, &true);
        Ok(())
    }

    /// Clears the lock after the external call returns.
    pub fn exit(env: &Env) {
        env.storage().instance().remove(&DataKey::ReentrancyLock);
    }

    /// Runs `f` with the lock held.
    pub fn run<T, F: FnOnce() -> T>(env: &Env, f: F) -> Result<T, Error> {
        Self::enter(env)?;
        let out = f();
        Self::exit(env);
        Ok(out)
    }
}
