use crate::funding::native_token;
use crate::types::{DataKey, FundingError, PriceData, REFERENCE_DECIMALS};
use soroban_sdk::{contractclient, log, token::TokenClient, Address, Env, U256};

/// Precisions beyond what an `i128` can represent are rejected.
const MAX_DECIMALS: u32 = 38;

/// Interface of the price feed contract quoting the native token in reference units.
#[allow(dead_code)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Most recent quote.
    fn latest_price() -> PriceData;
    /// Implementation version reported by the feed.
    fn version() -> u32;
}

pub fn price_feed(env: &Env) -> Result<Address, FundingError> {
    env.storage()
        .instance()
        .get(&DataKey::PriceFeed)
        .ok_or(FundingError::NotInitialized)
}

/// Fetches the latest quote and rejects it when non-positive or older than the configured age.
pub fn latest_price(env: &Env) -> Result<PriceData, FundingError> {
    let feed = price_feed(env)?;
    let max_age: u64 = env
        .storage()
        .instance()
        .get(&DataKey::MaxPriceAge)
        .ok_or(FundingError::NotInitialized)?;

    let quote = match PriceFeedClient::new(env, &feed).try_latest_price() {
        Ok(Ok(quote)) => quote,
        _ => return Err(FundingError::StaleOrInvalidPrice),
    };

    check_quote(env.ledger().timestamp(), max_age, &quote)?;
    Ok(quote)
}

pub fn version(env: &Env) -> Result<u32, FundingError> {
    let feed = price_feed(env)?;
    match PriceFeedClient::new(env, &feed).try_version() {
        Ok(Ok(version)) => Ok(version),
        _ => Err(FundingError::StaleOrInvalidPrice),
    }
}

fn check_quote(now: u64, max_age: u64, quote: &PriceData) -> Result<(), FundingError> {
    if quote.price <= 0 || quote.updated_at > now {
        return Err(FundingError::StaleOrInvalidPrice);
    }
    if now - quote.updated_at > max_age {
        return Err(FundingError::StaleOrInvalidPrice);
    }
    Ok(())
}

/// Converts `amount` (in native base units) to reference units scaled by `10^REFERENCE_DECIMALS`.
pub fn get_conversion_rate(env: &Env, amount: i128) -> Result<i128, FundingError> {
    let quote = latest_price(env)?;
    let token = native_token(env)?;
    let native_decimals = TokenClient::new(env, &token).decimals();

    let converted = convert(env, amount, &quote, native_decimals)?;
    log!(
        env,
        "converted {} at price {} ({} decimals) to {}",
        amount,
        quote.price,
        quote.decimals,
        converted
    );
    Ok(converted)
}

/// `amount * price * 10^REFERENCE_DECIMALS / (10^native_decimals * 10^quote.decimals)`,
/// computed in 256 bits and truncated towards zero.
pub fn convert(
    env: &Env,
    amount: i128,
    quote: &PriceData,
    native_decimals: u32,
) -> Result<i128, FundingError> {
    if amount <= 0 {
        return Ok(0);
    }
    if quote.price <= 0 || quote.decimals > MAX_DECIMALS {
        return Err(FundingError::StaleOrInvalidPrice);
    }
    if native_decimals > MAX_DECIMALS {
        return Err(FundingError::InvalidConfig);
    }

    let product =
        U256::from_u128(env, amount as u128).mul(&U256::from_u128(env, quote.price as u128));

    // Apply the decimal difference as a single power of ten so the scaling stays exact.
    let source_decimals = native_decimals + quote.decimals;
    let scaled = if REFERENCE_DECIMALS >= source_decimals {
        // Scaling up never shrinks the value, so the product alone must already fit.
        if product.to_u128().map_or(true, |value| value > i128::MAX as u128) {
            return Err(FundingError::ArithmeticOverflow);
        }
        product.mul(&pow10(env, REFERENCE_DECIMALS - source_decimals))
    } else {
        product.div(&pow10(env, source_decimals - REFERENCE_DECIMALS))
    };

    scaled
        .to_u128()
        .and_then(|value| i128::try_from(value).ok())
        .ok_or(FundingError::ArithmeticOverflow)
}

fn pow10(env: &Env, exp: u32) -> U256 {
    U256::from_u32(env, 10).pow(exp)
}
