#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub cooldown_period: u64,
    pub timestamp: u64,
}

/// Fired when an account deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when an account files (or replaces) its unstake request.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeRequestedEvent {
    pub staker: Address,
    pub amount: i128,
    pub withdrawable_at: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the owner funds a new reward period.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAddedEvent {
    pub amount: i128,
    pub duration: u64,
    pub reward_rate: i128,
    pub period_finish: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CooldownSetEvent {
    pub old_period: u64,
    pub new_period: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    stake_token: Address,
    reward_token: Address,
    cooldown_period: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            stake_token,
            reward_token,
            cooldown_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstake_requested(env: &Env, staker: Address, amount: i128, withdrawable_at: u64) {
    env.events().publish(
        (symbol_short!("UNSTK_REQ"), staker.clone()),
        UnstakeRequestedEvent {
            staker,
            amount,
            withdrawable_at,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), staker.clone()),
        WithdrawnEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), staker.clone()),
        RewardClaimedEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_added(
    env: &Env,
    amount: i128,
    duration: u64,
    reward_rate: i128,
    period_finish: u64,
) {
    env.events().publish(
        (symbol_short!("RWD_ADDED"),),
        RewardAddedEvent {
            amount,
            duration,
            reward_rate,
            period_finish,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_cooldown_set(env: &Env, old_period: u64, new_period: u64) {
    env.events().publish(
        (symbol_short!("CD_SET"),),
        CooldownSetEvent {
            old_period,
            new_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_transferred(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_XFER"), old_owner.clone()),
        OwnershipTransferredEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}
