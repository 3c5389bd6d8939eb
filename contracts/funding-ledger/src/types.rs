use soroban_sdk::{contracterror, contracttype, Address};

/// Minimum contribution, in reference units scaled by `10^REFERENCE_DECIMALS` (50 USD).
pub const MINIMUM_USD: i128 = 50 * 10i128.pow(REFERENCE_DECIMALS);

/// Precision of every converted amount.
pub const REFERENCE_DECIMALS: u32 = 18;

#[contracttype]
pub enum DataKey {
    Owner,                 // Address allowed to withdraw
    PriceFeed,             // Price feed contract address
    NativeToken,           // Token contract holding contributions
    MaxPriceAge,           // Seconds before a quote is considered stale
    Funders,               // Vec<Address>, one entry per contribution
    AmountFunded(Address), // Funder -> cumulative amount not yet withdrawn
}

/// A quote as reported by the price feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Reference units per native unit, scaled by `10^decimals`.
    pub price: i128,
    pub decimals: u32,
    /// Ledger timestamp of the last update.
    pub updated_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    BelowMinimumContribution = 4,
    StaleOrInvalidPrice = 5,
    TransferFailed = 6,
    IndexOutOfRange = 7,
    ArithmeticOverflow = 8,
    InvalidConfig = 9,
}
