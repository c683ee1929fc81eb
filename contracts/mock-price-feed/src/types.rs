use soroban_sdk::{contracterror, contracttype};

/// Version reported by the feed, matching the aggregator interface it stands in for
pub const FEED_VERSION: u32 = 4;

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Decimals,    // Precision of every answer
    LatestRound, // Round ID of the most recent answer
    Round(u64),  // Round ID -> RoundData
}

/// A single price observation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,          // Price scaled by 10^decimals
    pub started_at: u64,       // Ledger timestamp the round opened
    pub updated_at: u64,       // Ledger timestamp of the answer, 0 if incomplete
    pub answered_in_round: u64,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,     // Feed not initialized
    AlreadyInitialized = 2, // Feed already setup
    RoundNotFound = 3,      // No data for the requested round
}
