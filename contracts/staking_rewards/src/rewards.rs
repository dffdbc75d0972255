//! Lazy reward-per-token accounting.
//!
//! The pool keeps a single cumulative accumulator, `reward_per_token_stored`,
//! valid through `last_update_time`. Every account snapshots the accumulator
//! when it is settled and is owed `staked × (current − snapshot) / PRECISION`
//! on top of whatever it had already accrued. Nothing here iterates over
//! accounts; every projection is O(1).
//!
//! The accumulator and both products that feed or consume it are 256-bit.
//! One settlement step adds at most `elapsed × rate × PRECISION / total`,
//! below 2^251 for any `i128` rate, and an account's share of the
//! accumulator delta never exceeds what was streamed while it was staked.
//! Narrowing back to `i128` can therefore only fail when an account is owed
//! more than the reward token can represent.
//!
//! All functions are pure over `PoolState` / `StakerPosition` so the contract
//! can stage changes in locals and commit them only once every step of an
//! operation (including the token transfer) has succeeded.

use soroban_sdk::{Env, I256};

use crate::{ContractError, PoolState, StakerPosition};

/// Fixed-point scaling factor applied to the accumulator.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

fn wide(env: &Env, value: i128) -> I256 {
    I256::from_i128(env, value)
}

// ── Projections ─────────────────────────────────────────────────────────────

/// `min(now, period_finish)`: accrual freezes once the period ends.
pub fn last_time_reward_applicable(pool: &PoolState, now: u64) -> u64 {
    now.min(pool.period_finish)
}

/// Project the accumulator forward to `now` without touching state.
///
/// ```text
/// rpt = stored + (applicable − last_update) × rate × PRECISION / total_staked
/// ```
///
/// With nothing staked the stored value is returned unchanged: the interval
/// is attributed to no one rather than retroactively to the next staker.
pub fn reward_per_token(env: &Env, pool: &PoolState, now: u64) -> I256 {
    if pool.total_staked <= 0 {
        return pool.reward_per_token_stored.clone();
    }

    let elapsed = last_time_reward_applicable(pool, now).saturating_sub(pool.last_update_time);
    let step = wide(env, i128::from(elapsed))
        .mul(&wide(env, pool.reward_rate))
        .mul(&wide(env, PRECISION))
        .div(&wide(env, pool.total_staked));

    pool.reward_per_token_stored.add(&step)
}

/// Unclaimed reward owed to `position` as of `now`, settled or not.
pub fn earned(
    env: &Env,
    pool: &PoolState,
    position: &StakerPosition,
    now: u64,
) -> Result<i128, ContractError> {
    let current_rpt = reward_per_token(env, pool, now);
    accrue(env, position, &current_rpt)
}

/// Reward streamed over a full period at the current rate.
pub fn reward_for_duration(pool: &PoolState) -> Result<i128, ContractError> {
    pool.reward_rate
        .checked_mul(i128::from(pool.reward_duration))
        .ok_or(ContractError::ArithmeticOverflow)
}

fn accrue(
    env: &Env,
    position: &StakerPosition,
    current_rpt: &I256,
) -> Result<i128, ContractError> {
    // Settlement keeps the snapshot at or below the accumulator.
    let fresh = current_rpt
        .sub(&position.reward_per_token_paid)
        .mul(&wide(env, position.staked))
        .div(&wide(env, PRECISION))
        .to_i128()
        .ok_or(ContractError::ArithmeticOverflow)?;

    position
        .accrued_reward
        .checked_add(fresh)
        .ok_or(ContractError::ArithmeticOverflow)
}

// ── Mutations ───────────────────────────────────────────────────────────────

/// Fold elapsed time into the accumulator and, when `position` is given,
/// into that account's accrued reward.
///
/// Must run before any change to `total_staked`, an account's stake, or the
/// reward rate. Calling it twice at the same `now` is a no-op the second time.
pub fn settle(
    env: &Env,
    pool: &mut PoolState,
    position: Option<&mut StakerPosition>,
    now: u64,
) -> Result<(), ContractError> {
    let current_rpt = reward_per_token(env, pool, now);
    let applicable = last_time_reward_applicable(pool, now);

    if let Some(position) = position {
        position.accrued_reward = accrue(env, position, &current_rpt)?;
        position.reward_per_token_paid = current_rpt.clone();
    }

    pool.reward_per_token_stored = current_rpt;
    pool.last_update_time = applicable;
    Ok(())
}

/// Start a new reward period of `duration` seconds funded with `amount`.
///
/// If a period is still running, its unstreamed remainder
/// (`(period_finish − now) × rate`) is rolled into the new one. The rate is
/// truncated; the remainder of that division is never distributed.
///
/// The pool must already be settled at `now`.
pub fn schedule_reward(
    pool: &mut PoolState,
    amount: i128,
    duration: u64,
    now: u64,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::ZeroAmount);
    }
    if duration == 0 {
        return Err(ContractError::ZeroDuration);
    }

    let remaining = i128::from(pool.period_finish.saturating_sub(now));
    let leftover = remaining
        .checked_mul(pool.reward_rate)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let reward_rate = amount
        .checked_add(leftover)
        .and_then(|funded| funded.checked_div(i128::from(duration)))
        .ok_or(ContractError::ArithmeticOverflow)?;

    if reward_rate == 0 {
        return Err(ContractError::RateTooLow);
    }

    let period_finish = now
        .checked_add(duration)
        .ok_or(ContractError::ArithmeticOverflow)?;

    pool.reward_rate = reward_rate;
    pool.reward_duration = duration;
    pool.last_update_time = now;
    pool.period_finish = period_finish;
    Ok(())
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure arithmetic; the environment only backs the 256-bit values.
