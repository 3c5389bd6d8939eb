use crate::access::require_owner;
use crate::funding::{get_funders, native_token};
use crate::types::*;
use soroban_sdk::{log, token::TokenClient, Address, Env, Symbol, Vec};

/// How the funder registry is walked while zeroing balances.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClearStrategy {
    /// Reads the stored registry again for every index.
    Direct,
    /// Reads the registry once and walks the in-memory copy.
    Cached,
}

pub fn withdraw(env: Env, caller: Address) -> Result<(), FundingError> {
    withdraw_with(&env, &caller, ClearStrategy::Direct)
}

pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), FundingError> {
    withdraw_with(&env, &caller, ClearStrategy::Cached)
}

fn withdraw_with(
    env: &Env,
    caller: &Address,
    strategy: ClearStrategy,
) -> Result<(), FundingError> {
    let owner = require_owner(env, caller)?;

    let token = TokenClient::new(env, &native_token(env)?);
    let contract = env.current_contract_address();
    let balance = token.balance(&contract);

    // Funds move first; nothing below runs unless the transfer went through.
    if balance > 0 {
        match token.try_transfer(&contract, &owner, &balance) {
            Ok(Ok(())) => {}
            _ => return Err(FundingError::TransferFailed),
        }
    }

    let cleared = clear_contributors(env, strategy);

    log!(env, "withdrew {} and cleared {} registry entries", balance, cleared);
    env.events()
        .publish((Symbol::new(env, "withdrawn"), owner), (balance, cleared));

    Ok(())
}

/// Zeroes the amount of every registered funder and empties the registry.
/// Returns the number of registry entries visited, duplicates included.
fn clear_contributors(env: &Env, strategy: ClearStrategy) -> u32 {
    let visited = match strategy {
        ClearStrategy::Direct => {
            let count = get_funders(env).len();
            for index in 0..count {
                clear_amount(env, get_funders(env).get_unchecked(index));
            }
            count
        }
        ClearStrategy::Cached => {
            let funders = get_funders(env);
            for funder in funders.iter() {
                clear_amount(env, funder);
            }
            funders.len()
        }
    };

    env.storage()
        .persistent()
        .set(&DataKey::Funders, &Vec::<Address>::new(env));

    visited
}

fn clear_amount(env: &Env, funder: Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder));
}
