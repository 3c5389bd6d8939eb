use crate::types::{DataKey, FundingError};
use soroban_sdk::{Address, Env};

pub fn get_owner(env: &Env) -> Result<Address, FundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(FundingError::NotInitialized)
}

/// Verifies that `caller` signed the invocation and is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, FundingError> {
    caller.require_auth();

    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(FundingError::NotOwner);
    }
    Ok(owner)
}
