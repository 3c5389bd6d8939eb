#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

mod access;
mod funding;
mod price;
mod types;
mod withdraw;

pub use price::{PriceFeed, PriceFeedClient};
pub use types::*;

#[contract]
pub struct FundingLedger;

#[contractimpl]
impl FundingLedger {
    /// Binds the owner, the price feed and the token contributions are paid in.
    /// Quotes older than `max_price_age` seconds are refused.
    pub fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
        max_price_age: u64,
    ) -> Result<(), FundingError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(FundingError::AlreadyInitialized);
        }
        if max_price_age == 0 {
            return Err(FundingError::InvalidConfig);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::PriceFeed, &price_feed);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        env.storage()
            .instance()
            .set(&DataKey::MaxPriceAge, &max_price_age);

        env.events().publish(
            (Symbol::new(&env, "initialized"), owner),
            (price_feed, native_token, max_price_age),
        );
        Ok(())
    }

    // Funding functions
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundingError> {
        funding::fund(env, funder, amount)
    }

    pub fn withdraw(env: Env, caller: Address) -> Result<(), FundingError> {
        withdraw::withdraw(env, caller)
    }

    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), FundingError> {
        withdraw::cheaper_withdraw(env, caller)
    }

    // Queries
    pub fn get_owner(env: Env) -> Result<Address, FundingError> {
        access::get_owner(&env)
    }

    pub fn get_price_feed(env: Env) -> Result<Address, FundingError> {
        price::price_feed(&env)
    }

    pub fn get_native_token(env: Env) -> Result<Address, FundingError> {
        funding::native_token(&env)
    }

    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        funding::get_amount_funded(&env, &funder)
    }

    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundingError> {
        funding::get_funder(&env, index)
    }

    pub fn get_funder_count(env: Env) -> u32 {
        funding::get_funders(&env).len()
    }

    pub fn get_balance(env: Env) -> Result<i128, FundingError> {
        funding::get_balance(&env)
    }

    pub fn get_minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    pub fn get_max_price_age(env: Env) -> Result<u64, FundingError> {
        env.storage()
            .instance()
            .get(&DataKey::MaxPriceAge)
            .ok_or(FundingError::NotInitialized)
    }

    /// Value of `amount` native units in reference units, scaled by `10^REFERENCE_DECIMALS`.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, FundingError> {
        price::get_conversion_rate(&env, amount)
    }

    pub fn get_version(env: Env) -> Result<u32, FundingError> {
        price::version(&env)
    }
}
