#![no_std]
use soroban_sdk::{contract, contractimpl, log, Env, String, Symbol};

mod types;

pub use types::*;

/// Settable price feed for local networks and tests.
///
/// Exposes the same read surface as a versioned aggregator
/// (`latest_round_data`, `decimals`, `version`, `description`), so a
/// consumer bound to its address cannot tell it apart from a live feed.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Initialize the feed with its precision and a first answer
    pub fn initialize(env: Env, decimals: u32, initial_answer: i128) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Decimals) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Decimals, &decimals);
        Self::update_answer(env, initial_answer)
    }

    /// Publish a new answer as the next round. The round is stamped with the
    /// ledger timestamp, never lower than 1 so it always reads as complete.
    pub fn update_answer(env: Env, answer: i128) -> Result<(), Error> {
        Self::decimals(env.clone())?;

        let latest: u64 = env
            .storage()
            .instance()
            .get(&DataKey::LatestRound)
            .unwrap_or(0);
        let round_id = latest + 1;
        let now = env.ledger().timestamp().max(1);

        store_round(
            &env,
            RoundData {
                round_id,
                answer,
                started_at: now,
                updated_at: now,
                answered_in_round: round_id,
            },
        );
        Ok(())
    }

    /// Overwrite a specific round and make it the latest one
    pub fn update_round_data(
        env: Env,
        round_id: u64,
        answer: i128,
        timestamp: u64,
        started_at: u64,
    ) -> Result<(), Error> {
        Self::decimals(env.clone())?;

        store_round(
            &env,
            RoundData {
                round_id,
                answer,
                started_at,
                updated_at: timestamp,
                answered_in_round: round_id,
            },
        );
        Ok(())
    }

    pub fn latest_round_data(env: Env) -> Result<RoundData, Error> {
        let round_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::LatestRound)
            .ok_or(Error::NotInitialized)?;
        Self::get_round_data(env, round_id)
    }

    pub fn get_round_data(env: Env, round_id: u64) -> Result<RoundData, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Round(round_id))
            .ok_or(Error::RoundNotFound)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Decimals)
            .ok_or(Error::NotInitialized)
    }

    pub fn version(_env: Env) -> u32 {
        FEED_VERSION
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, "mock price feed")
    }
}

fn store_round(env: &Env, round: RoundData) {
    env.storage()
        .persistent()
        .set(&DataKey::Round(round.round_id), &round);
    env.storage()
        .instance()
        .set(&DataKey::LatestRound, &round.round_id);

    log!(env, "round {} answer {}", round.round_id, round.answer);
    env.events().publish(
        (Symbol::new(env, "answer_updated"), round.round_id),
        round.answer,
    );
}
