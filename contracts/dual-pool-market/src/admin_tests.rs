#![cfg(test)]

use crate::test::{MarketTest, USDC};
use crate::{DualPoolMarket, DualPoolMarketClient, Error};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[test]
fn test_initialize_once() {
    let t = MarketTest::setup();
    let other_token = Address::generate(&t.env);
    assert_eq!(
        t.client.try_initialize(&t.user1, &other_token),
        Err(Ok(Error::AlreadyInitialized))
    );
    assert_eq!(t.client.owner(), t.owner);
}

#[test]
fn test_calls_before_initialize_fail() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(DualPoolMarket, ());
    let client = DualPoolMarketClient::new(&env, &contract_id);
    let resolver = Address::generate(&env);

    assert_eq!(
        client.try_register_prediction(&resolver, &1, &resolver, &100),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(client.try_owner(), Err(Ok(Error::NotInitialized)));
}

#[test]
fn test_owner_is_default_resolver() {
    let t = MarketTest::setup();
    assert!(t.client.is_resolver(&t.owner));
    assert!(!t.client.is_resolver(&t.user1));

    let config = t.client.get_config();
    assert_eq!(config.owner, t.owner);
    assert_eq!(config.pending_owner, None);
    assert_eq!(config.platform_fee_balance, 0);
}

#[test]
fn test_granted_resolver_can_settle() {
    let t = MarketTest::setup();
    let resolver = Address::generate(&t.env);
    t.client.set_resolver(&t.owner, &resolver, &true);
    assert!(t.client.is_resolver(&resolver));

    t.client
        .register_prediction(&resolver, &1, &t.creator, &t.deadline());
    t.bet(&t.user1, 1, true, 10 * USDC);
    t.client.resolve_prediction(&resolver, &1, &true);
    assert!(t.client.get_prediction(&1).resolved);
}

#[test]
fn test_revoked_resolver_is_rejected() {
    let t = MarketTest::setup();
    let resolver = Address::generate(&t.env);
    t.client.set_resolver(&t.owner, &resolver, &true);
    t.client.set_resolver(&t.owner, &resolver, &false);

    assert_eq!(
        t.client
            .try_register_prediction(&resolver, &1, &t.creator, &t.deadline()),
        Err(Ok(Error::NotResolver))
    );
}

#[test]
fn test_only_owner_manages_resolvers() {
    let t = MarketTest::setup();
    assert_eq!(
        t.client.try_set_resolver(&t.user1, &t.user1, &true),
        Err(Ok(Error::NotOwner))
    );
    assert!(!t.client.is_resolver(&t.user1));
}

#[test]
fn test_owner_can_cancel_without_resolver_role() {
    let t = MarketTest::setup();
    t.register(1);
    t.client.set_resolver(&t.owner, &t.owner, &false);

    t.client
        .cancel_prediction(&t.owner, &1, &String::from_str(&t.env, "owner override"));
    assert!(t.client.get_prediction(&1).cancelled);
}

// ===== OWNERSHIP =====

#[test]
fn test_two_step_ownership_transfer() {
    let t = MarketTest::setup();
    let next_owner = Address::generate(&t.env);

    t.client.transfer_ownership(&t.owner, &next_owner);
    assert_eq!(t.client.owner(), t.owner);
    assert_eq!(t.client.pending_owner(), Some(next_owner.clone()));

    assert_eq!(
        t.client.try_accept_ownership(&t.user1),
        Err(Ok(Error::NotPendingOwner))
    );

    t.client.accept_ownership(&next_owner);
    assert_eq!(t.client.owner(), next_owner);
    assert_eq!(t.client.pending_owner(), None);

    assert_eq!(
        t.client.try_set_resolver(&t.owner, &t.user1, &true),
        Err(Ok(Error::NotOwner))
    );
    t.client.set_resolver(&next_owner, &t.user1, &true);
    assert!(t.client.is_resolver(&t.user1));
}

#[test]
fn test_accept_without_nomination() {
    let t = MarketTest::setup();
    assert_eq!(
        t.client.try_accept_ownership(&t.owner),
        Err(Ok(Error::NotPendingOwner))
    );
}

#[test]
fn test_renomination_replaces_pending_owner() {
    let t = MarketTest::setup();
    let typo = Address::generate(&t.env);
    let intended = Address::generate(&t.env);

    t.client.transfer_ownership(&t.owner, &typo);
    t.client.transfer_ownership(&t.owner, &intended);

    assert_eq!(
        t.client.try_accept_ownership(&typo),
        Err(Ok(Error::NotPendingOwner))
    );
    t.client.accept_ownership(&intended);
    assert_eq!(t.client.owner(), intended);
}

#[test]
fn test_only_owner_transfers_ownership() {
    let t = MarketTest::setup();
    assert_eq!(
        t.client.try_transfer_ownership(&t.user1, &t.user1),
        Err(Ok(Error::NotOwner))
    );
}

// ===== PLATFORM FEES =====

#[test]
fn test_withdraw_platform_fees() {
    let t = MarketTest::setup();
    t.register(1);
    t.bet(&t.user1, 1, true, 100 * USDC);
    t.bet(&t.user2, 1, false, 100 * USDC);
    t.client.resolve_prediction(&t.owner, &1, &true);

    let treasury = Address::generate(&t.env);
    assert_eq!(
        t.client.try_withdraw_platform_fees(&t.user1, &treasury),
        Err(Ok(Error::NotOwner))
    );

    let withdrawn = t.client.withdraw_platform_fees(&t.owner, &treasury);
    assert_eq!(withdrawn, USDC);
    assert_eq!(t.balance(&treasury), USDC);
    assert_eq!(t.client.platform_fee_balance(), 0);

    assert_eq!(
        t.client.try_withdraw_platform_fees(&t.owner, &treasury),
        Err(Ok(Error::NoFeesToWithdraw))
    );

    // Winner funds stay claimable after the withdrawal.
    assert_eq!(t.client.claim_winnings(&t.user1, &1), 198_500_000);
    assert_eq!(t.escrow(), 0);
}
