use soroban_sdk::{log, Address, Env, Vec};

use crate::admin::AccessControl;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::Storage;
use crate::types::Prediction;

/// Largest number of predictions one batch call may register.
pub const MAX_BATCH_SIZE: u32 = 50;

/// Registration and lookup of predictions.
pub struct MarketRegistry;

impl MarketRegistry {
    /// Registers a single prediction id. Ids can never be reused.
    pub fn register(
        env: &Env,
        resolver: &Address,
        id: u64,
        creator: &Address,
        deadline: u64,
    ) -> Result<(), Error> {
        AccessControl::require_resolver(env, resolver)?;
        Self::insert(env, id, creator, deadline)
    }

    /// Registers many predictions in one invocation.
    ///
    /// All-or-nothing: an invalid element (already registered, including a
    /// duplicate earlier in the same batch) fails the call and rolls back
    /// every registration made by it.
    pub fn register_batch(
        env: &Env,
        resolver: &Address,
        ids: &Vec<u64>,
        creators: &Vec<Address>,
        deadlines: &Vec<u64>,
    ) -> Result<u32, Error> {
        AccessControl::require_resolver(env, resolver)?;

        let count = ids.len();
        if creators.len() != count || deadlines.len() != count {
            return Err(Error::BatchLengthMismatch);
        }
        if count == 0 || count > MAX_BATCH_SIZE {
            return Err(Error::InvalidBatchSize);
        }

        for i in 0..count {
            let id = ids.get_unchecked(i);
            let creator = creators.get_unchecked(i);
            let deadline = deadlines.get_unchecked(i);
            Self::insert(env, id, &creator, deadline)?;
        }

        log!(env, "registered batch of {} predictions", count);
        Ok(count)
    }

    fn insert(env: &Env, id: u64, creator: &Address, deadline: u64) -> Result<(), Error> {
        if Storage::has_prediction(env, id) {
            return Err(Error::AlreadyRegistered);
        }

        Storage::set_prediction(env, id, &Prediction::new(creator.clone(), deadline));

        log!(env, "prediction {} registered, deadline {}", id, deadline);
        EventEmitter::emit_prediction_registered(env, id, creator, deadline);
        Ok(())
    }

    pub fn get(env: &Env, id: u64) -> Result<Prediction, Error> {
        Storage::get_prediction(env, id)
    }

    /// Fetches a prediction that is still open for betting and exits.
    pub fn get_open(env: &Env, id: u64) -> Result<Prediction, Error> {
        let prediction = Self::get(env, id)?;
        if prediction.resolved {
            return Err(Error::AlreadyResolved);
        }
        if prediction.cancelled {
            return Err(Error::AlreadyCancelled);
        }
        Ok(prediction)
    }

    /// Client-side gate: open and before the advisory deadline.
    pub fn is_active(env: &Env, id: u64) -> bool {
        match Storage::get_prediction(env, id) {
            Ok(prediction) => prediction.is_open() && env.ledger().timestamp() < prediction.deadline,
            Err(_) => false,
        }
    }

    pub fn participant_count(env: &Env, id: u64) -> Result<u32, Error> {
        Ok(Self::get(env, id)?.participant_count)
    }
}
