use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env};

pub struct AccessManager;

impl AccessManager {
    /// Record the owner and start unlocked
    pub fn init(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
        env.storage().instance().set(&DataKey::WithdrawLock, &false);
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Owner)
    }

    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Verify the caller is the owner
    pub fn verify_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
        let owner = Self::get_owner(env)?;

        if caller != &owner {
            return Err(Error::NotOwner);
        }

        Ok(owner)
    }

    pub fn is_locked(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::WithdrawLock)
            .unwrap_or(false)
    }

    /// Fail while a withdrawal holds the ledger
    pub fn ensure_unlocked(env: &Env) -> Result<(), Error> {
        if Self::is_locked(env) {
            return Err(Error::WithdrawalInProgress);
        }
        Ok(())
    }

    pub fn acquire_lock(env: &Env) -> Result<(), Error> {
        Self::ensure_unlocked(env)?;
        env.storage().instance().set(&DataKey::WithdrawLock, &true);
        Ok(())
    }

    pub fn release_lock(env: &Env) {
        env.storage().instance().set(&DataKey::WithdrawLock, &false);
    }
}
