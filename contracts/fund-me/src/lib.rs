#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

mod access;
mod config;
mod funding;
mod price_feed;
mod tracking;
mod types;
mod withdrawal;

use crate::access::AccessManager;
use crate::config::ConfigManager;
use crate::funding::FundingManager;
use crate::tracking::TrackingManager;
use crate::withdrawal::WithdrawalManager;

pub use crate::price_feed::{PriceConverter, PriceFeed, PriceFeedClient};
pub use crate::types::{DataKey, Error, RoundData, MINIMUM_USD, USD_DECIMALS};

/// Crowdfunding ledger with a price-feed backed minimum and a single owner.
#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Initialize the ledger. `owner` must authorize and becomes the only
    /// address able to withdraw.
    ///
    /// # Arguments
    /// * `owner` - The address that will receive withdrawals
    /// * `price_feed` - Feed quoting the native asset in the unit of account
    /// * `native_token` - Token contract of the accepted asset
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
    ) -> Result<(), Error> {
        if AccessManager::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();
        AccessManager::init(&env, &owner);
        ConfigManager::init(&env, &price_feed, &native_token);
        TrackingManager::init(&env);

        env.events().publish(
            (Symbol::new(&env, "init"),),
            (owner, price_feed, native_token),
        );
        Ok(())
    }

    /// Contribute `amount` of the native asset.
    ///
    /// # Errors
    /// * `InsufficientContribution` - If the amount is worth less than `MINIMUM_USD`
    /// * `WithdrawalInProgress` - If a withdrawal holds the ledger
    /// * `InvalidPrice` / `PriceFeedUnavailable` - If the feed cannot value it
    pub fn fund(env: Env, sender: Address, amount: i128) -> Result<(), Error> {
        FundingManager::fund(&env, &sender, amount)
    }

    /// Pay the whole balance to the owner and reset every funder.
    /// Returns the amount paid out.
    ///
    /// # Errors
    /// * `NotOwner` - If `caller` is not the owner
    /// * `TransferFailed` - If the payout cannot be delivered
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        WithdrawalManager::withdraw(&env, &caller)
    }

    /// Same effect as `withdraw`, reading the funder list only once.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        WithdrawalManager::cheaper_withdraw(&env, &caller)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        AccessManager::get_owner(&env)
    }

    /// Version of the bound price feed
    pub fn get_version(env: Env) -> Result<u32, Error> {
        PriceConverter::get_version(&env)
    }

    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        TrackingManager::amount_funded(&env, &funder)
    }

    /// Funder at `index`, in contribution order
    pub fn get_funder(env: Env, index: u32) -> Result<Address, Error> {
        TrackingManager::get_funder(&env, index)
    }

    pub fn get_funders_count(env: Env) -> u32 {
        TrackingManager::funders_count(&env)
    }

    pub fn get_price_feed(env: Env) -> Result<Address, Error> {
        ConfigManager::price_feed(&env)
    }

    pub fn get_native_token(env: Env) -> Result<Address, Error> {
        ConfigManager::native_token(&env)
    }

    pub fn get_minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// Latest feed answer, in the feed's own decimals
    pub fn get_price(env: Env) -> Result<i128, Error> {
        PriceConverter::get_rate(&env).map(|(price, _)| price)
    }

    /// Value of `amount` in the unit of account, with `USD_DECIMALS` decimals
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, Error> {
        PriceConverter::convert(&env, amount)
    }
}
