use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;
use crate::types::{Position, Prediction};

const DAY_IN_LEDGERS: u32 = 17280;
const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Storage keys for the contract.
///
/// Roles, configuration and the fee ledger live in instance storage;
/// predictions and positions live in persistent storage, one entry each.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PendingOwner,
    Token,
    PlatformFeeBalance,
    Resolver(Address),
    ReentrancyLock,
    Prediction(u64),
    Position(u64, Address),
}

/// Typed accessors over contract storage.
pub struct Storage;

impl Storage {
    // ===== INSTANCE =====

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Owner)
    }

    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    pub fn get_pending_owner(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::PendingOwner)
    }

    pub fn set_pending_owner(env: &Env, pending: &Address) {
        env.storage().instance().set(&DataKey::PendingOwner, pending);
    }

    pub fn clear_pending_owner(env: &Env) {
        env.storage().instance().remove(&DataKey::PendingOwner);
    }

    pub fn get_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::Token, token);
    }

    pub fn get_platform_fee_balance(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::PlatformFeeBalance)
            .unwrap_or(0)
    }

    pub fn set_platform_fee_balance(env: &Env, balance: i128) {
        env.storage()
            .instance()
            .set(&DataKey::PlatformFeeBalance, &balance);
    }

    pub fn is_resolver(env: &Env, addr: &Address) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Resolver(addr.clone()))
            .unwrap_or(false)
    }

    pub fn set_resolver(env: &Env, addr: &Address, enabled: bool) {
        let key = DataKey::Resolver(addr.clone());
        if enabled {
            env.storage().instance().set(&key, &true);
        } else {
            env.storage().instance().remove(&key);
        }
    }

    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    // ===== PERSISTENT =====

    pub fn has_prediction(env: &Env, id: u64) -> bool {
        env.storage().persistent().has(&DataKey::Prediction(id))
    }

    pub fn get_prediction(env: &Env, id: u64) -> Result<Prediction, Error> {
        let key = DataKey::Prediction(id);
        let prediction: Prediction = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::NotRegistered)?;
        env.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
        Ok(prediction)
    }

    pub fn set_prediction(env: &Env, id: u64, prediction: &Prediction) {
        let key = DataKey::Prediction(id);
        env.storage().persistent().set(&key, prediction);
        env.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    /// Positions are zero-initialized until the first bet.
    pub fn get_position(env: &Env, id: u64, user: &Address) -> Position {
        env.storage()
            .persistent()
            .get(&DataKey::Position(id, user.clone()))
            .unwrap_or_default()
    }

    pub fn set_position(env: &Env, id: u64, user: &Address, position: &Position) {
        let key = DataKey::Position(id, user.clone());
        env.storage().persistent().set(&key, position);
        env.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }
}
