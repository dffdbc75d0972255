#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for reward accrual.
//!
//! Invariants tested:
//! - Co-stakers are paid in proportion to their stake, up to rounding
//! - Nothing accrues while the pool is empty, and accrual resumes from the
//!   first stake rather than retroactively
//! - A sole staker claiming at arbitrary times never receives more than
//!   was injected

use proptest::prelude::*;
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::I256;

use crate::common::{Pool, DAY};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_rewards_split_by_stake(
        alice_stake in 1i128..1_000_000_000_000,
        bob_stake in 1i128..1_000_000_000_000,
        reward in 10_000_000i128..1_000_000_000_000,
        duration in DAY..(30 * DAY),
    ) {
        let pool = Pool::new(DAY, reward);
        let alice = pool.staker(alice_stake);
        let bob = pool.staker(bob_stake);

        pool.client.stake(&alice, &alice_stake);
        pool.client.stake(&bob, &bob_stake);
        pool.client.add_reward(&pool.owner, &reward, &duration);
        pool.advance(duration);

        let alice_earned = pool.client.earned(&alice);
        let bob_earned = pool.client.earned(&bob);

        let skew = (alice_earned * bob_stake - bob_earned * alice_stake).abs();
        prop_assert!(skew <= alice_stake.max(bob_stake));
        prop_assert!(alice_earned + bob_earned <= reward);
    }

    #[test]
    fn prop_empty_pool_does_not_accrue(
        idle in 0u64..(5 * DAY),
        active in 0u64..(5 * DAY),
        stake in 1i128..1_000_000_000_000,
    ) {
        let reward = 10_000_000_000i128;
        let duration = 10 * DAY;
        let pool = Pool::new(DAY, reward);

        pool.client.add_reward(&pool.owner, &reward, &duration);
        let rate = pool.client.get_reward_rate();

        let zero = I256::from_i128(&pool.env, 0);
        pool.advance(idle);
        prop_assert_eq!(pool.client.reward_per_token(), zero.clone());

        let staker = pool.staker(stake);
        pool.client.stake(&staker, &stake);
        prop_assert_eq!(pool.client.get_pool_state().reward_per_token_stored, zero);

        pool.advance(active);
        let streamed = rate * i128::from(active);
        let earned = pool.client.earned(&staker);
        prop_assert!(earned <= streamed);
        prop_assert!(streamed - earned <= 1);
    }

    #[test]
    fn prop_claims_bounded_by_injection(
        stake in 1i128..1_000_000_000_000,
        reward in 10_000_000i128..1_000_000_000_000,
        gaps in proptest::collection::vec(1u64..(3 * DAY), 1..8),
    ) {
        let duration = 10 * DAY;
        let pool = Pool::new(0, reward);
        let staker = pool.staker(stake);

        pool.client.stake(&staker, &stake);
        pool.client.add_reward(&pool.owner, &reward, &duration);

        let mut claimed = 0i128;
        for gap in gaps {
            pool.advance(gap);
            if let Ok(Ok(amount)) = pool.client.try_claim_reward(&staker) {
                claimed += amount;
            }
        }

        let reward_balance = TokenClient::new(&pool.env, &pool.reward_token).balance(&staker);
        prop_assert_eq!(reward_balance, claimed);
        prop_assert!(claimed + pool.client.earned(&staker) <= reward);
        prop_assert_eq!(pool.client.get_reward_reserve(), reward - claimed);
    }
}
