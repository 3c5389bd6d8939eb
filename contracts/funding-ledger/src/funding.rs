use crate::price;
use crate::types::*;
use soroban_sdk::{log, token::TokenClient, Address, Env, Symbol, Vec};

pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundingError> {
    let token = native_token(&env)?;
    funder.require_auth();

    if amount <= 0 {
        return Err(FundingError::BelowMinimumContribution);
    }
    let value = price::get_conversion_rate(&env, amount)?;
    if value < MINIMUM_USD {
        return Err(FundingError::BelowMinimumContribution);
    }

    let funded = get_amount_funded(&env, &funder)
        .checked_add(amount)
        .ok_or(FundingError::ArithmeticOverflow)?;

    let client = TokenClient::new(&env, &token);
    match client.try_transfer(&funder, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => return Err(FundingError::TransferFailed),
    }

    env.storage()
        .persistent()
        .set(&DataKey::AmountFunded(funder.clone()), &funded);

    // Registry is a contribution log: repeat funders are appended again.
    let mut funders = get_funders(&env);
    funders.push_back(funder.clone());
    env.storage().persistent().set(&DataKey::Funders, &funders);

    log!(&env, "funder {} now holds {}", funder, funded);
    env.events()
        .publish((Symbol::new(&env, "funded"), funder), (amount, value));

    Ok(())
}

pub fn native_token(env: &Env) -> Result<Address, FundingError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(FundingError::NotInitialized)
}

/// Contract balance in the native token.
pub fn get_balance(env: &Env) -> Result<i128, FundingError> {
    let token = native_token(env)?;
    Ok(TokenClient::new(env, &token).balance(&env.current_contract_address()))
}

pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AmountFunded(funder.clone()))
        .unwrap_or(0)
}

pub fn get_funders(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Funders)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_funder(env: &Env, index: u32) -> Result<Address, FundingError> {
    get_funders(env)
        .get(index)
        .ok_or(FundingError::IndexOutOfRange)
}
