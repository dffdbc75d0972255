use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

use crate::{ContractError, StakingRewardsContract, StakingRewardsContractClient, UnstakeStatus};

const HOUR: u64 = 3_600;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingRewardsContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(10_000);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &Some(stake_token.clone()), &Some(reward_token), &HOUR);

    (env, client, owner, stake_token)
}

// ── Cooldown ─────────────────────────────────────────────────────────────────

#[test]
fn test_owner_sets_cooldown() {
    let (_env, client, owner, _) = setup();

    client.set_cooldown(&owner, &(2 * HOUR));
    assert_eq!(client.get_cooldown_period(), 2 * HOUR);

    client.set_cooldown(&owner, &0);
    assert_eq!(client.get_cooldown_period(), 0);
}

#[test]
fn test_non_owner_cannot_set_cooldown() {
    let (env, client, _owner, _) = setup();
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_set_cooldown(&stranger, &0),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(client.get_cooldown_period(), HOUR);
}

#[test]
fn test_cooldown_change_applies_to_pending_requests() {
    let (env, client, owner, stake_token) = setup();
    let staker = Address::generate(&env);
    StellarAssetClient::new(&env, &stake_token).mint(&staker, &500);

    client.stake(&staker, &500);
    client.request_unstake(&staker, &200);
    assert_eq!(client.get_unstake_status(&staker), UnstakeStatus::PendingCooldown);

    client.set_cooldown(&owner, &0);
    assert_eq!(client.get_unstake_status(&staker), UnstakeStatus::Withdrawable);
    assert_eq!(client.withdraw(&staker), 200);

    client.request_unstake(&staker, &100);
    client.set_cooldown(&owner, &(10 * HOUR));
    assert_eq!(client.try_withdraw(&staker), Err(Ok(ContractError::CooldownActive)));
}

// ── Ownership ────────────────────────────────────────────────────────────────

#[test]
fn test_transfer_ownership() {
    let (env, client, owner, _) = setup();
    let new_owner = Address::generate(&env);

    client.transfer_ownership(&owner, &Some(new_owner.clone()));
    assert_eq!(client.get_owner(), new_owner);

    // The previous owner has lost its rights; the new one has them.
    assert_eq!(
        client.try_set_cooldown(&owner, &0),
        Err(Ok(ContractError::NotOwner))
    );
    client.set_cooldown(&new_owner, &0);
    assert_eq!(client.get_cooldown_period(), 0);
}

#[test]
fn test_transfer_ownership_to_nobody_fails() {
    let (_env, client, owner, _) = setup();

    assert_eq!(
        client.try_transfer_ownership(&owner, &None),
        Err(Ok(ContractError::ZeroAddress))
    );
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_non_owner_cannot_transfer_ownership() {
    let (env, client, owner, _) = setup();
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_transfer_ownership(&stranger, &Some(stranger.clone())),
        Err(Ok(ContractError::NotOwner))
    );
    // Ownership check comes before the null check.
    assert_eq!(
        client.try_transfer_ownership(&stranger, &None),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(client.get_owner(), owner);
}
