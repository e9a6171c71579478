#![cfg(test)]

use crate::test::{MarketTest, USDC};
use crate::Error;
use soroban_sdk::String;

fn balanced(t: &MarketTest) {
    t.register(1);
    t.bet(&t.user1, 1, true, 100 * USDC);
    t.bet(&t.user2, 1, false, 100 * USDC);
}

#[test]
fn test_calculate_exit_value_on_balanced_pool() {
    let t = MarketTest::setup();
    balanced(&t);

    let quote = t.client.calculate_exit_value(&1, &true, &(100 * USDC));
    assert_eq!(quote.gross_value, 50 * USDC);
    assert_eq!(quote.fee, 2_500_000);
    assert_eq!(quote.net_value, 47_500_000);

    // Read-only: nothing moved.
    assert_eq!(t.client.get_prediction(&1).yes_pool, 100 * USDC);
    assert_eq!(t.client.platform_fee_balance(), 0);
}

#[test]
fn test_calculate_exit_value_rejects_non_positive_amount() {
    let t = MarketTest::setup();
    balanced(&t);
    assert_eq!(
        t.client.try_calculate_exit_value(&1, &true, &0),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_partial_exit_updates_position_and_pools() {
    let t = MarketTest::setup();
    balanced(&t);

    let quote = t.client.exit_early(&t.user1, &1, &true, &(60 * USDC));
    assert_eq!(quote.gross_value, 30 * USDC);
    assert_eq!(quote.fee, 1_500_000);
    assert_eq!(quote.net_value, 28_500_000);

    let position = t.client.get_position(&1, &t.user1);
    assert_eq!(position.yes_amount, 40 * USDC);
    assert_eq!(position.total_deposited, 100 * USDC);
    assert_eq!(position.total_exited, 28_500_000);

    let prediction = t.client.get_prediction(&1);
    assert_eq!(prediction.yes_pool, 40 * USDC);
    assert_eq!(prediction.no_pool, 100 * USDC);
    assert_eq!(prediction.exit_surplus, 30 * USDC);
    assert_eq!(prediction.participant_count, 2);
    assert_eq!(t.client.platform_fee_balance(), 1_500_000);
}

#[test]
fn test_full_exit_drops_participant() {
    let t = MarketTest::setup();
    balanced(&t);

    t.client.exit_early(&t.user1, &1, &true, &(100 * USDC));
    assert_eq!(t.client.get_participant_count(&1), 1);

    // Betting again counts the bettor again.
    t.bet(&t.user1, 1, false, 10 * USDC);
    assert_eq!(t.client.get_participant_count(&1), 2);
}

#[test]
fn test_exit_more_than_held() {
    let t = MarketTest::setup();
    balanced(&t);

    assert_eq!(
        t.client.try_exit_early(&t.user1, &1, &true, &(100 * USDC + 1)),
        Err(Ok(Error::InsufficientPosition))
    );
    // The NO side of user1 is empty.
    assert_eq!(
        t.client.try_exit_early(&t.user1, &1, &false, &USDC),
        Err(Ok(Error::InsufficientPosition))
    );
    assert_eq!(
        t.client.try_exit_early(&t.user1, &1, &true, &0),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_exit_without_counterparty_is_rejected() {
    let t = MarketTest::setup();
    t.register(1);
    t.bet(&t.user1, 1, true, 100 * USDC);

    assert_eq!(
        t.client.try_exit_early(&t.user1, &1, &true, &(50 * USDC)),
        Err(Ok(Error::ExitValueTooLow))
    );
    assert_eq!(t.client.get_position(&1, &t.user1).yes_amount, 100 * USDC);
}

#[test]
fn test_exit_after_resolution_or_cancellation() {
    let t = MarketTest::setup();
    balanced(&t);
    t.register(2);
    t.bet(&t.user1, 2, true, 10 * USDC);
    t.bet(&t.user2, 2, false, 10 * USDC);

    t.client.resolve_prediction(&t.owner, &1, &true);
    assert_eq!(
        t.client.try_exit_early(&t.user1, &1, &true, &(10 * USDC)),
        Err(Ok(Error::AlreadyResolved))
    );

    t.client
        .cancel_prediction(&t.owner, &2, &String::from_str(&t.env, "void"));
    assert_eq!(
        t.client.try_exit_early(&t.user1, &2, &true, &(10 * USDC)),
        Err(Ok(Error::AlreadyCancelled))
    );
}

#[test]
fn test_forfeited_stake_goes_to_opposing_winners() {
    let t = MarketTest::setup();
    balanced(&t);
    t.client.exit_early(&t.user1, &1, &true, &(100 * USDC));

    t.client.resolve_prediction(&t.owner, &1, &false);
    assert_eq!(t.client.claim_winnings(&t.user2, &1), 150 * USDC);
    assert_eq!(t.escrow(), t.client.platform_fee_balance());
    assert_eq!(t.client.platform_fee_balance(), 2_500_000);
}

#[test]
fn test_forfeited_stake_goes_to_same_side_winners() {
    let t = MarketTest::setup();
    t.register(1);
    t.bet(&t.user1, 1, true, 100 * USDC);
    t.bet(&t.user3, 1, true, 100 * USDC);
    t.bet(&t.user2, 1, false, 100 * USDC);

    let quote = t.client.exit_early(&t.user1, &1, &true, &(100 * USDC));
    assert_eq!(quote.gross_value, 33_333_333);
    assert_eq!(quote.fee, 1_666_666);
    assert_eq!(quote.net_value, 31_666_667);

    t.client.resolve_prediction(&t.owner, &1, &true);
    let prediction = t.client.get_prediction(&1);
    assert_eq!(prediction.distributable, 98_500_000 + 66_666_667);

    assert_eq!(t.client.claim_winnings(&t.user3, &1), 265_166_667);
    assert_eq!(
        t.client.try_claim_winnings(&t.user1, &1),
        Err(Ok(Error::NoWinningPosition))
    );
    assert_eq!(t.escrow(), t.client.platform_fee_balance());
}

#[test]
fn test_exit_then_cancel_refunds_remaining_stake() {
    let t = MarketTest::setup();
    balanced(&t);

    let quote = t.client.exit_early(&t.user1, &1, &true, &(50 * USDC));
    assert_eq!(quote.net_value, 23_750_000);

    t.client
        .cancel_prediction(&t.owner, &1, &String::from_str(&t.env, "void"));
    assert_eq!(t.client.platform_fee_balance(), 1_250_000 + 25 * USDC);

    assert_eq!(t.client.claim_refund(&t.user1, &1), 50 * USDC);
    assert_eq!(t.client.claim_refund(&t.user2, &1), 100 * USDC);
    assert_eq!(t.escrow(), t.client.platform_fee_balance());
}

#[test]
fn test_pools_never_underflow_under_repeated_exits() {
    let t = MarketTest::setup();
    t.register(1);
    t.bet(&t.user1, 1, true, 10 * USDC);
    t.bet(&t.user2, 1, false, 40 * USDC);
    t.bet(&t.user3, 1, true, 25 * USDC);

    for _ in 0..5 {
        t.client.exit_early(&t.user1, &1, &true, &(2 * USDC));
        t.client.exit_early(&t.user2, &1, &false, &(3 * USDC));
    }

    let prediction = t.client.get_prediction(&1);
    assert_eq!(prediction.yes_pool, 25 * USDC);
    assert_eq!(prediction.no_pool, 25 * USDC);
    assert!(prediction.exit_surplus >= 0);
    assert_eq!(
        t.escrow(),
        prediction.yes_pool
            + prediction.no_pool
            + prediction.exit_surplus
            + t.client.platform_fee_balance()
    );
    assert_eq!(
        t.client.try_exit_early(&t.user1, &1, &true, &USDC),
        Err(Ok(Error::InsufficientPosition))
    );
}
