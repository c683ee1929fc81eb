use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env, Vec};

/// Per-funder totals and the append-only funder list.
///
/// The list lives in indexed persistent entries (`Funder(i)`) with its
/// length kept in instance storage, so every element access is a separate
/// storage read. Duplicates are kept: a funder appears once per contribution.
pub struct TrackingManager;

impl TrackingManager {
    pub fn init(env: &Env) {
        env.storage().instance().set(&DataKey::FunderCount, &0u32);
    }

    pub fn amount_funded(env: &Env, funder: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::AmountFunded(funder.clone()))
            .unwrap_or(0)
    }

    pub fn set_amount_funded(env: &Env, funder: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::AmountFunded(funder.clone()), &amount);
    }

    pub fn reset_amount_funded(env: &Env, funder: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::AmountFunded(funder.clone()));
    }

    pub fn funders_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::FunderCount)
            .unwrap_or(0)
    }

    /// Append a funder to the end of the list
    pub fn record_funder(env: &Env, funder: &Address) {
        let count = Self::funders_count(env);
        env.storage()
            .persistent()
            .set(&DataKey::Funder(count), funder);
        env.storage()
            .instance()
            .set(&DataKey::FunderCount, &(count + 1));
    }

    pub fn get_funder(env: &Env, index: u32) -> Result<Address, Error> {
        if index >= Self::funders_count(env) {
            return Err(Error::IndexOutOfRange);
        }

        env.storage()
            .persistent()
            .get(&DataKey::Funder(index))
            .ok_or(Error::IndexOutOfRange)
    }

    /// Copy the whole list into memory with a single length read
    pub fn snapshot(env: &Env) -> Result<Vec<Address>, Error> {
        let count = Self::funders_count(env);
        let mut funders: Vec<Address> = Vec::new(env);

        for index in 0..count {
            let funder: Address = env
                .storage()
                .persistent()
                .get(&DataKey::Funder(index))
                .ok_or(Error::IndexOutOfRange)?;
            funders.push_back(funder);
        }

        Ok(funders)
    }

    /// Drop the first `count` entries and reset the length
    pub fn clear_funders(env: &Env, count: u32) {
        for index in 0..count {
            env.storage().persistent().remove(&DataKey::Funder(index));
        }
        env.storage().instance().set(&DataKey::FunderCount, &0u32);
    }
}
