//! Integration tests exercising the full flow from service records to
//! transaction parameters.
//!
//! These tests parse JSON payloads shaped like the pool service's, build a
//! snapshot, and check the plans produced for deposits, withdrawals and
//! swaps against hand-derived integers.

#![cfg(feature = "serde")]
#![allow(clippy::panic)]

use dlmm_liquidity::config::LiquidityConfig;
use dlmm_liquidity::domain::{
    Amount, BinId, DepositIntent, Position, Shares, SwapDirection, SwapQuote, WithdrawalIntent,
};
use dlmm_liquidity::error::DlmmError;
use dlmm_liquidity::prepare::{
    BinRecord, FeeRecord, PoolSnapshot, PositionRecord, plan_add_liquidity, plan_swap,
    plan_withdrawal,
};
use dlmm_liquidity::traits::FromRecord;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const BINS: &str = r#"[
    {"binId": -1, "price": 99000000, "reserve_x": 0, "reserve_y": 1000, "liquidity": 1000},
    {"binId": 0, "price": "100000000", "reserve_x": 100, "reserve_y": 1900, "liquidity": 2000},
    {"bin_id": 1, "price": "101000000", "reserve_x": "1000", "reserve_y": 0, "liquidity": 1010}
]"#;

const FEES: &str = r#"{
    "x_protocol_fee": 40, "x_provider_fee": 50, "x_variable_fee": 10,
    "y_protocol_fee": 40, "y_provider_fee": 50, "y_variable_fee": 10
}"#;

const POSITIONS: &str = r#"[
    {"bin_id": 0, "userLiquidity": "400"},
    {"binId": -1, "userLiquidity": 1000, "has_held": true}
]"#;

fn snapshot() -> PoolSnapshot {
    let Ok(bins) = serde_json::from_str::<Vec<BinRecord>>(BINS) else {
        panic!("valid bin records");
    };
    let Ok(fees) = serde_json::from_str::<FeeRecord>(FEES) else {
        panic!("valid fee record");
    };
    let Ok(snapshot) = PoolSnapshot::from_records(0, &bins, &fees) else {
        panic!("valid snapshot");
    };
    snapshot
}

fn positions() -> Vec<Position> {
    let Ok(records) = serde_json::from_str::<Vec<PositionRecord>>(POSITIONS) else {
        panic!("valid position records");
    };
    let Ok(positions) = records
        .iter()
        .map(Position::from_record)
        .collect::<Result<Vec<_>, _>>()
    else {
        panic!("valid positions");
    };
    positions
}

fn config(json: &str) -> LiquidityConfig {
    let Ok(config) = serde_json::from_str::<LiquidityConfig>(json) else {
        panic!("valid config");
    };
    config
}

fn withdraw(bin: i32, percent: u32) -> WithdrawalIntent {
    let Ok(intent) = WithdrawalIntent::new(BinId::new(bin), percent, None) else {
        panic!("valid withdrawal intent");
    };
    intent
}

// ---------------------------------------------------------------------------
// Add liquidity
// ---------------------------------------------------------------------------

#[test]
fn multi_bin_deposit() {
    let intents = [
        DepositIntent::x_only(BinId::new(0), Amount::new(1_000)),
        DepositIntent::x_only(BinId::new(1), Amount::new(500)),
        DepositIntent::y_only(BinId::new(-1), Amount::new(300)),
    ];
    let Ok(plan) = plan_add_liquidity(&snapshot(), &intents, &config("{}")) else {
        panic!("expected Ok");
    };

    // active bin: x-heavy deposit pays ceil(1% of 634) = 7, mints 993
    let active = plan.bins[0];
    assert_eq!(active.max_x_fee, Amount::new(7));
    assert_eq!(active.max_y_fee, Amount::ZERO);
    assert_eq!(active.min_dlp, Shares::new(983));

    // above: 1010 * 505e8 / 1010e8 = 505
    assert_eq!(plan.bins[1].min_dlp, Shares::new(499));
    assert_eq!(plan.bins[1].max_x_fee, Amount::ZERO);

    // below: 300 of 1000
    assert_eq!(plan.bins[2].min_dlp, Shares::new(297));

    assert_eq!(plan.total_x, Amount::new(1_500));
    assert_eq!(plan.total_y, Amount::new(300));
}

#[test]
fn deposit_on_wrong_side_aborts_plan() {
    let intents = [
        DepositIntent::x_only(BinId::new(1), Amount::new(500)),
        DepositIntent::y_only(BinId::new(1), Amount::new(500)),
    ];
    let Err(err) = plan_add_liquidity(&snapshot(), &intents, &config("{}")) else {
        panic!("expected Err");
    };
    assert!(matches!(err, DlmmError::InvalidDeposit { bin_id: 1, .. }));
    assert!(err.is_validation());
}

#[test]
fn deposit_into_unfetched_bin() {
    let intents = [DepositIntent::x_only(BinId::new(7), Amount::new(500))];
    assert_eq!(
        plan_add_liquidity(&snapshot(), &intents, &config("{}")),
        Err(DlmmError::BinNotFound(7))
    );
}

// ---------------------------------------------------------------------------
// Withdraw liquidity
// ---------------------------------------------------------------------------

#[test]
fn withdrawal_with_enforced_minimums() {
    let intents = [withdraw(0, 50), withdraw(-1, 100)];
    let Ok(plan) = plan_withdrawal(&snapshot(), &positions(), &intents, &config("{}")) else {
        panic!("expected Ok");
    };

    let active = plan.bins[0];
    assert_eq!(active.shares_to_burn, Shares::new(200));
    assert_eq!(active.min_x_amount, Amount::new(9));
    assert_eq!(active.min_y_amount, Amount::new(188));

    let below = plan.bins[1];
    assert_eq!(below.shares_to_burn, Shares::new(1_000));
    assert_eq!(below.min_x_amount, Amount::ZERO);
    assert_eq!(below.min_y_amount, Amount::new(990));
    assert!(below.requires_ownership_condition);

    assert_eq!(plan.total_shares, Shares::new(1_200));
    assert_eq!(plan.total_min_x, Amount::new(9));
    assert_eq!(plan.total_min_y, Amount::new(1_178));
}

#[test]
fn withdrawal_fallback_minimums() {
    let intents = [withdraw(0, 50), withdraw(-1, 100)];
    let config = config(r#"{"enforce_minimum_received": false}"#);
    let Ok(plan) = plan_withdrawal(&snapshot(), &positions(), &intents, &config) else {
        panic!("expected Ok");
    };

    // active bin holds more Y; the bin below is Y-only
    for params in &plan.bins {
        assert_eq!(params.min_x_amount, Amount::ZERO);
        assert_eq!(params.min_y_amount, Amount::new(1));
    }
    assert_eq!(plan.total_min_y, Amount::new(2));
}

#[test]
fn withdrawal_without_position_is_empty() {
    let intents = [withdraw(1, 100), withdraw(0, 0)];
    let Ok(plan) = plan_withdrawal(&snapshot(), &positions(), &intents, &config("{}")) else {
        panic!("expected Ok");
    };
    assert!(plan.is_empty());
    assert_eq!(plan.total_shares, Shares::ZERO);
}

#[test]
fn withdrawal_percentage_out_of_range() {
    assert_eq!(
        WithdrawalIntent::new(BinId::new(0), 101, None),
        Err(DlmmError::InvalidWithdrawalPercentage(101))
    );
}

// ---------------------------------------------------------------------------
// Swap and records
// ---------------------------------------------------------------------------

#[test]
fn swap_with_configured_tolerance() {
    let (amount_in, amount_out) = (Amount::new(2_000), Amount::new(2_017));
    let Ok(quote) = SwapQuote::new(SwapDirection::YForX, amount_in, amount_out) else {
        panic!("valid quote");
    };
    let Ok(params) = plan_swap(&quote, &config(r#"{"slippage_tolerance_bps": 50}"#)) else {
        panic!("expected Ok");
    };
    assert_eq!(params.direction(), SwapDirection::YForX);
    assert_eq!(params.amount_in(), Amount::new(2_000));
    assert_eq!(params.min_amount_out(), Amount::new(2_006));
}

#[test]
fn duplicate_bin_records_rejected() {
    let json = r#"[
        {"binId": 3, "price": 100000000, "reserve_x": 1, "reserve_y": 0, "liquidity": 1},
        {"binId": 3, "price": 100000000, "reserve_x": 2, "reserve_y": 0, "liquidity": 2}
    ]"#;
    let Ok(bins) = serde_json::from_str::<Vec<BinRecord>>(json) else {
        panic!("valid bin records");
    };
    assert_eq!(
        PoolSnapshot::from_records(0, &bins, &FeeRecord::default()),
        Err(DlmmError::DuplicateBin(3))
    );
}
