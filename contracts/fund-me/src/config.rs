use crate::types::{DataKey, Error};
use soroban_sdk::{token::TokenClient, Address, Env};

pub struct ConfigManager;

impl ConfigManager {
    /// Bind the oracle and the contributed asset. Written once.
    pub fn init(env: &Env, price_feed: &Address, native_token: &Address) {
        let native_decimals = TokenClient::new(env, native_token).decimals();

        env.storage().instance().set(&DataKey::PriceFeed, price_feed);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, native_token);
        env.storage()
            .instance()
            .set(&DataKey::NativeDecimals, &native_decimals);
    }

    pub fn price_feed(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PriceFeed)
            .ok_or(Error::NotInitialized)
    }

    pub fn native_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::NativeToken)
            .ok_or(Error::NotInitialized)
    }

    pub fn native_decimals(env: &Env) -> Result<u32, Error> {
        env.storage()
            .instance()
            .get(&DataKey::NativeDecimals)
            .ok_or(Error::NotInitialized)
    }
}
