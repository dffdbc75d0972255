//! Token custody for the pool.
//!
//! Both the stake asset and the reward asset are plain Soroban token
//! contracts. A transfer that the token rejects (missing balance, missing
//! authorization, frozen trustline, ...) surfaces as `TransferFailed` so the
//! calling operation can abort before committing anything.

use soroban_sdk::{log, token, Address, Env};

use crate::ContractError;

/// Move `amount` of `asset` from `from` into the pool's custody.
pub fn transfer_in(
    env: &Env,
    asset: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let pool = env.current_contract_address();
    match token::Client::new(env, asset).try_transfer(from, &pool, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer in rejected", asset.clone(), from.clone(), amount);
            Err(ContractError::TransferFailed)
        }
    }
}

/// Move `amount` of `asset` out of the pool's custody to `to`.
pub fn transfer_out(
    env: &Env,
    asset: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let pool = env.current_contract_address();
    match token::Client::new(env, asset).try_transfer(&pool, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer out rejected", asset.clone(), to.clone(), amount);
            Err(ContractError::TransferFailed)
        }
    }
}

pub fn balance_of(env: &Env, asset: &Address, account: &Address) -> i128 {
    token::Client::new(env, asset).balance(account)
}
