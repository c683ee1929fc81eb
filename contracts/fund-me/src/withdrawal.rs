use crate::access::AccessManager;
use crate::config::ConfigManager;
use crate::tracking::TrackingManager;
use crate::types::Error;
use soroban_sdk::{log, token::TokenClient, Address, Env, Symbol};

/// Owner-only payout of the whole ledger.
///
/// Both variants zero every recorded balance and clear the funder list
/// before the outbound transfer is attempted, and hold the withdrawal lock
/// until it returns. They differ only in how the list is read.
pub struct WithdrawalManager;

impl WithdrawalManager {
    /// Walks the list straight out of storage, re-reading its length and
    /// each entry on every step.
    pub fn withdraw(env: &Env, caller: &Address) -> Result<i128, Error> {
        let owner = Self::begin(env, caller)?;

        let mut index = 0;
        while index < TrackingManager::funders_count(env) {
            let funder = TrackingManager::get_funder(env, index)?;
            TrackingManager::reset_amount_funded(env, &funder);
            index += 1;
        }

        let cleared = TrackingManager::funders_count(env);
        TrackingManager::clear_funders(env, cleared);

        Self::payout(env, &owner, cleared)
    }

    /// Snapshots the list once and iterates the in-memory copy.
    pub fn cheaper_withdraw(env: &Env, caller: &Address) -> Result<i128, Error> {
        let owner = Self::begin(env, caller)?;

        let funders = TrackingManager::snapshot(env)?;
        for funder in funders.iter() {
            TrackingManager::reset_amount_funded(env, &funder);
        }

        let cleared = funders.len();
        TrackingManager::clear_funders(env, cleared);

        Self::payout(env, &owner, cleared)
    }

    fn begin(env: &Env, caller: &Address) -> Result<Address, Error> {
        caller.require_auth();
        let owner = AccessManager::verify_owner(env, caller)?;
        AccessManager::acquire_lock(env)?;
        Ok(owner)
    }

    /// Send the contract's entire balance to the owner. Any failure is
    /// returned as an error so the host discards every write of the call.
    fn payout(env: &Env, owner: &Address, cleared: u32) -> Result<i128, Error> {
        let token = TokenClient::new(env, &ConfigManager::native_token(env)?);
        let contract = env.current_contract_address();
        let amount = token.balance(&contract);

        if amount > 0 {
            match token.try_transfer(&contract, owner, &amount) {
                Ok(Ok(())) => {}
                _ => {
                    log!(env, "payout of {} failed", amount);
                    return Err(Error::TransferFailed);
                }
            }
        }

        AccessManager::release_lock(env);

        env.events().publish(
            (Symbol::new(env, "withdrawn"), owner.clone()),
            (amount, cleared),
        );
        Ok(amount)
    }
}
