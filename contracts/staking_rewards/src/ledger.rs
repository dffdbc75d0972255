//! Per-account stake ledger: deposits, the single outstanding unstake
//! request and its cooldown, withdrawals, and reward take-out.

use soroban_sdk::contracttype;

use crate::{ContractError, PoolState, StakerPosition};

// ── Types ───────────────────────────────────────────────────────────────────

/// Where an account's single outstanding unstake request stands.
///
/// `PendingCooldown` turns into `Withdrawable` purely by the clock passing
/// `unstake_time + cooldown_period`; there is no transition call.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum UnstakeStatus {
    NoRequest = 0,
    PendingCooldown = 1,
    Withdrawable = 2,
}

/// Earliest timestamp at which a request filed at `request_time` may be
/// withdrawn.
pub fn cooldown_end(request_time: u64, cooldown_period: u64) -> u64 {
    request_time.saturating_add(cooldown_period)
}

pub fn unstake_status(position: &StakerPosition, now: u64, cooldown_period: u64) -> UnstakeStatus {
    if position.unstake_amount <= 0 {
        UnstakeStatus::NoRequest
    } else if now < cooldown_end(position.unstake_time, cooldown_period) {
        UnstakeStatus::PendingCooldown
    } else {
        UnstakeStatus::Withdrawable
    }
}

// ── Transitions ─────────────────────────────────────────────────────────────
// Callers settle rewards for the account before any of these run.

/// Add `amount` to the account and to the pool total.
pub fn deposit(
    pool: &mut PoolState,
    position: &mut StakerPosition,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::ZeroAmount);
    }

    let staked = position
        .staked
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    position.staked = staked;
    pool.total_staked = total_staked;
    Ok(())
}

/// File an unstake request, replacing any request still outstanding.
///
/// The stake keeps earning until it is actually withdrawn.
pub fn request_unstake(
    position: &mut StakerPosition,
    amount: i128,
    now: u64,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::ZeroAmount);
    }
    if amount > position.staked {
        return Err(ContractError::InsufficientStake);
    }

    position.unstake_amount = amount;
    position.unstake_time = now;
    Ok(())
}

/// Complete the outstanding request once its cooldown has elapsed.
///
/// Returns the amount that leaves the pool.
pub fn withdraw(
    pool: &mut PoolState,
    position: &mut StakerPosition,
    now: u64,
    cooldown_period: u64,
) -> Result<i128, ContractError> {
    match unstake_status(position, now, cooldown_period) {
        UnstakeStatus::NoRequest => return Err(ContractError::NoRequest),
        UnstakeStatus::PendingCooldown => return Err(ContractError::CooldownActive),
        UnstakeStatus::Withdrawable => {}
    }

    let amount = position.unstake_amount;
    if position.staked < amount || pool.total_staked < amount {
        return Err(ContractError::InsufficientStake);
    }

    position.staked = position
        .staked
        .checked_sub(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    position.unstake_amount = 0;
    position.unstake_time = 0;
    Ok(amount)
}

/// Zero the account's accrued reward and return what it was.
pub fn take_reward(position: &mut StakerPosition) -> Result<i128, ContractError> {
    let reward = position.accrued_reward;
    if reward <= 0 {
        return Err(ContractError::NoReward);
    }

    position.accrued_reward = 0;
    Ok(reward)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
