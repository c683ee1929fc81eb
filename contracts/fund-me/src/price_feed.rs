use crate::config::ConfigManager;
use crate::types::{Error, RoundData, USD_DECIMALS};
use soroban_sdk::{contractclient, Env, String};

/// Interface of a versioned price feed (e.g. an XLM/USD aggregator).
///
#[allow(dead_code)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Most recent round, with `answer` scaled by `10^decimals()`.
    fn latest_round_data() -> RoundData;

    /// Number of decimals in every answer.
    fn decimals() -> u32;

    /// Version of the feed interface.
    fn version() -> u32;

    /// Human readable pair description.
    fn description() -> String;
}

/// Values native-asset amounts in the stable unit of account.
pub struct PriceConverter;

impl PriceConverter {
    /// Latest answer together with its decimals
    pub fn get_rate(env: &Env) -> Result<(i128, u32), Error> {
        let feed = PriceFeedClient::new(env, &ConfigManager::price_feed(env)?);

        let round = match feed.try_latest_round_data() {
            Ok(Ok(round)) => round,
            _ => return Err(Error::PriceFeedUnavailable),
        };
        if round.answer <= 0 || round.updated_at == 0 {
            return Err(Error::InvalidPrice);
        }

        let decimals = match feed.try_decimals() {
            Ok(Ok(decimals)) => decimals,
            _ => return Err(Error::PriceFeedUnavailable),
        };

        Ok((round.answer, decimals))
    }

    pub fn get_version(env: &Env) -> Result<u32, Error> {
        let feed = PriceFeedClient::new(env, &ConfigManager::price_feed(env)?);

        match feed.try_version() {
            Ok(Ok(version)) => Ok(version),
            _ => Err(Error::PriceFeedUnavailable),
        }
    }

    /// Value of `native_amount` in the stable unit, with `USD_DECIMALS` decimals
    pub fn convert(env: &Env, native_amount: i128) -> Result<i128, Error> {
        let (price, feed_decimals) = Self::get_rate(env)?;
        let native_decimals = ConfigManager::native_decimals(env)?;

        Self::scale(native_amount, price, feed_decimals, native_decimals)
    }

    /// `amount * price` rescaled from `feed_decimals + native_decimals` to
    /// `USD_DECIMALS`. The product is always formed first.
    pub fn scale(
        amount: i128,
        price: i128,
        feed_decimals: u32,
        native_decimals: u32,
    ) -> Result<i128, Error> {
        let value = amount
            .checked_mul(price)
            .ok_or(Error::ArithmeticOverflow)?;
        let source_decimals = feed_decimals
            .checked_add(native_decimals)
            .ok_or(Error::ArithmeticOverflow)?;

        if source_decimals <= USD_DECIMALS {
            let factor = 10i128
                .checked_pow(USD_DECIMALS - source_decimals)
                .ok_or(Error::ArithmeticOverflow)?;
            value.checked_mul(factor).ok_or(Error::ArithmeticOverflow)
        } else {
            let divisor = 10i128
                .checked_pow(source_decimals - USD_DECIMALS)
                .ok_or(Error::ArithmeticOverflow)?;
            Ok(value / divisor)
        }
    }
}
