#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: u64 },
    RequestUnstake { who: u8, amount: u64 },
    Withdraw { who: u8 },
    ClaimReward { who: u8 },
    AddReward { amount: u64, duration: u32 },
    SetCooldown { period: u32 },
    Advance { seconds: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(
        &owner,
        &Some(stake_token.clone()),
        &Some(reward_token.clone()),
        &3_600u64,
    );
    StellarAssetClient::new(&env, &reward_token).mint(&owner, &(i64::MAX as i128));

    let mut users = vec![];
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &stake_token).mint(&user, &(i64::MAX as i128));
        users.push(user);
    }
    let custody = TokenClient::new(&env, &stake_token);

    // Errors are expected; panics and broken accounting are not.
    for action in actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_stake(user, &(amount as i128));
            }
            FuzzAction::RequestUnstake { who, amount } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_request_unstake(user, &(amount as i128));
            }
            FuzzAction::Withdraw { who } => {
                let _ = client.try_withdraw(&users[who as usize % users.len()]);
            }
            FuzzAction::ClaimReward { who } => {
                let _ = client.try_claim_reward(&users[who as usize % users.len()]);
            }
            FuzzAction::AddReward { amount, duration } => {
                let _ = client.try_add_reward(&owner, &(amount as i128), &(duration as u64));
            }
            FuzzAction::SetCooldown { period } => {
                let _ = client.try_set_cooldown(&owner, &(period as u64));
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + seconds as u64);
            }
        }

        let total = client.get_total_staked();
        let sum: i128 = users.iter().map(|user| client.get_staked(user)).sum();
        assert_eq!(total, sum);
        assert_eq!(custody.balance(&client.address), total);
        for user in &users {
            assert!(client.try_earned(user).is_ok());
        }
    }
});
