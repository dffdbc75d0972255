#![no_std]

pub mod assets;
pub mod events;
pub mod ledger;
pub mod rewards;
pub mod storage;

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, I256};

pub use ledger::UnstakeStatus;
pub use rewards::PRECISION;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    ZeroAmount = 3,
    InsufficientStake = 4,
    NoRequest = 5,
    CooldownActive = 6,
    NoReward = 7,
    RateTooLow = 8,
    NotOwner = 9,
    ZeroAddress = 10,
    ZeroStakingToken = 11,
    ZeroRewardToken = 12,
    TransferFailed = 13,
    ZeroDuration = 14,
    ArithmeticOverflow = 15,
}

// ── State ────────────────────────────────────────────────────────────────────

/// Pool-wide accounting: the reward schedule, the accumulator, and the
/// total stake it is spread over.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Reward-asset units streamed per second until `period_finish`.
    pub reward_rate: i128,
    pub reward_duration: u64,
    pub period_finish: u64,
    /// Time through which `reward_per_token_stored` is valid.
    pub last_update_time: u64,
    /// Cumulative reward per staked unit, scaled by `PRECISION`.
    pub reward_per_token_stored: I256,
    pub total_staked: i128,
}

impl PoolState {
    /// No schedule, nothing staked, accumulator at zero.
    pub fn new(env: &Env) -> Self {
        Self {
            reward_rate: 0,
            reward_duration: 0,
            period_finish: 0,
            last_update_time: 0,
            reward_per_token_stored: I256::from_i128(env, 0),
            total_staked: 0,
        }
    }
}

/// Per-account record, created zeroed on first use and never removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerPosition {
    pub staked: i128,
    /// Accumulator value at the account's last settlement.
    pub reward_per_token_paid: I256,
    pub accrued_reward: i128,
    /// Outstanding unstake request; `0`/`0` when there is none.
    pub unstake_amount: i128,
    pub unstake_time: u64,
}

impl StakerPosition {
    pub fn new(env: &Env) -> Self {
        Self {
            staked: 0,
            reward_per_token_paid: I256::from_i128(env, 0),
            accrued_reward: 0,
            unstake_amount: 0,
            unstake_time: 0,
        }
    }
}

/// Snapshot of an account's position returned by `get_stake_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeInfo {
    pub staked: i128,
    pub earned: i128,
    pub request_amount: i128,
    pub request_time: u64,
    pub withdrawable: bool,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `owner`           – identity allowed to fund rewards and administer the pool.
    /// * `stake_token`     – token accounts deposit; `None` is rejected.
    /// * `reward_token`    – token paid out as rewards; may equal `stake_token`.
    /// * `cooldown_period` – seconds between `request_unstake` and `withdraw`.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Option<Address>,
        reward_token: Option<Address>,
        cooldown_period: u64,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        let stake_token = stake_token.ok_or(ContractError::ZeroStakingToken)?;
        let reward_token = reward_token.ok_or(ContractError::ZeroRewardToken)?;

        storage::init_config(&env, &owner, &stake_token, &reward_token, cooldown_period);

        events::publish_initialized(&env, owner, stake_token, reward_token, cooldown_period);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    ///
    /// Rewards are settled first so the new tokens only earn from now on.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env);
        let mut position = storage::load_position(&env, &staker);

        rewards::settle(&env, &mut pool, Some(&mut position), now)?;
        ledger::deposit(&mut pool, &mut position, amount)?;

        let stake_token = storage::stake_token(&env)?;
        assets::transfer_in(&env, &stake_token, &staker, amount)?;

        storage::save_pool(&env, &pool);
        storage::save_position(&env, &staker, &position);

        events::publish_staked(&env, staker, amount, pool.total_staked);

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Declare intent to withdraw `amount` after the cooldown.
    ///
    /// Replaces any request that has not been withdrawn yet and restarts the
    /// timer. The stake keeps earning rewards until `withdraw`.
    pub fn request_unstake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env);
        let mut position = storage::load_position(&env, &staker);

        rewards::settle(&env, &mut pool, Some(&mut position), now)?;
        if position.unstake_amount > 0 {
            log!(&env, "replacing unstake request", staker.clone(), position.unstake_amount);
        }
        ledger::request_unstake(&mut position, amount, now)?;

        storage::save_pool(&env, &pool);
        storage::save_position(&env, &staker, &position);

        let withdrawable_at = ledger::cooldown_end(now, storage::cooldown_period(&env));
        events::publish_unstake_requested(&env, staker, amount, withdrawable_at);

        Ok(())
    }

    /// Withdraw the requested amount once the cooldown has elapsed.
    ///
    /// The cooldown in force at call time applies, not the one at request time.
    pub fn withdraw(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env);
        let mut position = storage::load_position(&env, &staker);

        rewards::settle(&env, &mut pool, Some(&mut position), now)?;
        let amount = ledger::withdraw(
            &mut pool,
            &mut position,
            now,
            storage::cooldown_period(&env),
        )?;

        let stake_token = storage::stake_token(&env)?;
        assets::transfer_out(&env, &stake_token, &staker, amount)?;

        storage::save_pool(&env, &pool);
        storage::save_position(&env, &staker, &position);

        events::publish_withdrawn(&env, staker, amount, pool.total_staked);

        Ok(amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `staker` has earned so far.
    ///
    /// The pool must hold enough reward tokens; if the payout transfer fails
    /// the accrued balance is left untouched.
    pub fn claim_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env);
        let mut position = storage::load_position(&env, &staker);

        rewards::settle(&env, &mut pool, Some(&mut position), now)?;
        let reward = ledger::take_reward(&mut position)?;

        let reward_token = storage::reward_token(&env)?;
        assets::transfer_out(&env, &reward_token, &staker, reward)?;

        storage::save_pool(&env, &pool);
        storage::save_position(&env, &staker, &position);

        events::publish_reward_claimed(&env, staker, reward);

        Ok(reward)
    }

    /// Fund a new reward period of `duration` seconds with `amount` tokens
    /// pulled from the owner.
    ///
    /// Whatever the running period has not streamed yet is folded into the
    /// new rate.
    pub fn add_reward(
        env: Env,
        caller: Address,
        amount: i128,
        duration: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env);

        rewards::settle(&env, &mut pool, None, now)?;
        rewards::schedule_reward(&mut pool, amount, duration, now)?;

        let reward_token = storage::reward_token(&env)?;
        assets::transfer_in(&env, &reward_token, &caller, amount)?;

        storage::save_pool(&env, &pool);

        events::publish_reward_added(&env, amount, duration, pool.reward_rate, pool.period_finish);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        storage::owner(&env)
    }

    pub fn get_stake_token(env: Env) -> Result<Address, ContractError> {
        storage::stake_token(&env)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        storage::reward_token(&env)
    }

    /// Return the current cooldown period in seconds.
    pub fn get_cooldown_period(env: Env) -> u64 {
        storage::cooldown_period(&env)
    }

    /// Return the sum of all staked balances.
    pub fn get_total_staked(env: Env) -> i128 {
        storage::load_pool(&env).total_staked
    }

    pub fn get_staked(env: Env, account: Address) -> i128 {
        storage::load_position(&env, &account).staked
    }

    /// Return the reward emitted per second during the current period.
    pub fn get_reward_rate(env: Env) -> i128 {
        storage::load_pool(&env).reward_rate
    }

    pub fn get_reward_duration(env: Env) -> u64 {
        storage::load_pool(&env).reward_duration
    }

    pub fn get_period_finish(env: Env) -> u64 {
        storage::load_pool(&env).period_finish
    }

    /// Reward streamed over one full period at the current rate.
    pub fn get_reward_for_duration(env: Env) -> Result<i128, ContractError> {
        rewards::reward_for_duration(&storage::load_pool(&env))
    }

    /// Return the stored global accounting, as of its last settlement.
    pub fn get_pool_state(env: Env) -> PoolState {
        storage::load_pool(&env)
    }

    pub fn last_time_reward_applicable(env: Env) -> u64 {
        rewards::last_time_reward_applicable(&storage::load_pool(&env), env.ledger().timestamp())
    }

    /// Accumulator projected to the current ledger time (scaled by `PRECISION`).
    pub fn reward_per_token(env: Env) -> I256 {
        rewards::reward_per_token(&env, &storage::load_pool(&env), env.ledger().timestamp())
    }

    /// Real-time claimable reward for `account`, without settling anything.
    pub fn earned(env: Env, account: Address) -> Result<i128, ContractError> {
        let pool = storage::load_pool(&env);
        let position = storage::load_position(&env, &account);
        rewards::earned(&env, &pool, &position, env.ledger().timestamp())
    }

    /// Return the combined staking position for an account.
    pub fn get_stake_info(env: Env, account: Address) -> Result<StakeInfo, ContractError> {
        let now = env.ledger().timestamp();
        let pool = storage::load_pool(&env);
        let position = storage::load_position(&env, &account);
        let status = ledger::unstake_status(&position, now, storage::cooldown_period(&env));

        Ok(StakeInfo {
            staked: position.staked,
            earned: rewards::earned(&env, &pool, &position, now)?,
            request_amount: position.unstake_amount,
            request_time: position.unstake_time,
            withdrawable: status == UnstakeStatus::Withdrawable,
        })
    }

    pub fn get_unstake_status(env: Env, account: Address) -> UnstakeStatus {
        let position = storage::load_position(&env, &account);
        ledger::unstake_status(
            &position,
            env.ledger().timestamp(),
            storage::cooldown_period(&env),
        )
    }

    /// Reward tokens currently held by the pool.
    ///
    /// When the stake and reward tokens are the same asset this includes
    /// staked principal.
    pub fn get_reward_reserve(env: Env) -> Result<i128, ContractError> {
        let reward_token = storage::reward_token(&env)?;
        Ok(assets::balance_of(
            &env,
            &reward_token,
            &env.current_contract_address(),
        ))
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Change the cooldown period. Zero disables the wait entirely.
    ///
    /// Pending requests are judged against the new value.
    pub fn set_cooldown(env: Env, caller: Address, period: u64) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let old_period = storage::cooldown_period(&env);
        storage::set_cooldown_period(&env, period);

        events::publish_cooldown_set(&env, old_period, period);

        Ok(())
    }

    /// Hand ownership to `new_owner` in a single step.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Option<Address>,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let new_owner = new_owner.ok_or(ContractError::ZeroAddress)?;
        storage::set_owner(&env, &new_owner);

        events::publish_ownership_transferred(&env, caller, new_owner);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the pool is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the current owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let owner = storage::owner(env)?;
        if *caller != owner {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
