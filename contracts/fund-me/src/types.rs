use soroban_sdk::{contracterror, contracttype, Address};

/// Fixed-point precision of every stable-unit value
pub const USD_DECIMALS: u32 = 18;

/// Smallest accepted contribution, 5 units of account
pub const MINIMUM_USD: i128 = 5 * 10i128.pow(USD_DECIMALS);

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Owner,                 // Sole identity allowed to withdraw
    PriceFeed,             // Oracle contract address
    NativeToken,           // Token contract of the contributed asset
    NativeDecimals,        // Precision of the contributed asset
    FunderCount,           // Length of the funder list
    Funder(u32),           // Index -> funder address
    AmountFunded(Address), // Funder -> cumulative contribution
    WithdrawLock,          // Set while a withdrawal is running
}

/// Latest answer published by a price feed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,           // Contract not initialized
    AlreadyInitialized = 2,       // Contract already setup
    InsufficientContribution = 3, // Contribution worth less than MINIMUM_USD
    NotOwner = 4,                 // Caller is not the owner
    TransferFailed = 5,           // Payout to the owner failed
    IndexOutOfRange = 6,          // No funder at that index
    InvalidPrice = 7,             // Feed answer is non-positive or incomplete
    PriceFeedUnavailable = 8,     // Feed call failed
    ArithmeticOverflow = 9,       // Value does not fit in i128
    WithdrawalInProgress = 10,    // Ledger is locked by a withdrawal
}
