use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{ContractError, PoolState, StakerPosition};

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const COOLDOWN: Symbol = symbol_short!("COOLDOWN");
const POOL: Symbol = symbol_short!("POOL");

// Per-account persistent storage uses tuple keys: (prefix, account)
const POSITION: Symbol = symbol_short!("POS");

const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 1_036_800;

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn position_key(account: &Address) -> (Symbol, Address) {
    (POSITION, account.clone())
}

// ── Configuration ────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn init_config(
    env: &Env,
    owner: &Address,
    stake_token: &Address,
    reward_token: &Address,
    cooldown_period: u64,
) {
    let instance = env.storage().instance();
    instance.set(&OWNER, owner);
    instance.set(&STAKE_TOKEN, stake_token);
    instance.set(&REWARD_TOKEN, reward_token);
    instance.set(&COOLDOWN, &cooldown_period);
    instance.set(&POOL, &PoolState::new(env));
    instance.set(&INITIALIZED, &true);
    extend_ttl_instance(env);
}

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    extend_ttl_instance(env);
}

pub fn stake_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&STAKE_TOKEN)
        .ok_or(ContractError::NotInitialized)
}

pub fn reward_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&REWARD_TOKEN)
        .ok_or(ContractError::NotInitialized)
}

pub fn cooldown_period(env: &Env) -> u64 {
    env.storage().instance().get(&COOLDOWN).unwrap_or(0)
}

pub fn set_cooldown_period(env: &Env, period: u64) {
    env.storage().instance().set(&COOLDOWN, &period);
    extend_ttl_instance(env);
}

// ── Pool and positions ───────────────────────────────────────────────────────

pub fn load_pool(env: &Env) -> PoolState {
    env.storage()
        .instance()
        .get(&POOL)
        .unwrap_or_else(|| PoolState::new(env))
}

pub fn save_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&POOL, pool);
    extend_ttl_instance(env);
}

/// Accounts without a record read as all-zero.
pub fn load_position(env: &Env, account: &Address) -> StakerPosition {
    env.storage()
        .persistent()
        .get(&position_key(account))
        .unwrap_or_else(|| StakerPosition::new(env))
}

pub fn save_position(env: &Env, account: &Address, position: &StakerPosition) {
    let key = position_key(account);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
