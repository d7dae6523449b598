//! Withdrawal planning example.
//!
//! Walks pool service records through a snapshot into per-bin burn
//! parameters, first with enforced minimums and then with the nominal
//! fallback used when enforcement is off.
//!
//! # Run
//!
//! ```bash
//! cargo run --example withdraw
//! ```

use dlmm_liquidity::config::LiquidityConfig;
use dlmm_liquidity::domain::{BinId, Position, WithdrawalIntent};
use dlmm_liquidity::prepare::{
    BinRecord, FeeRecord, PoolSnapshot, PositionRecord, WithdrawalPlan, plan_withdrawal,
};
use dlmm_liquidity::traits::FromRecord;

const BINS: &str = r#"[
    {"binId": -1, "price": 99000000, "reserve_x": 0, "reserve_y": 1000, "liquidity": 1000},
    {"binId": 0, "price": "100000000", "reserve_x": 100, "reserve_y": 1900, "liquidity": 2000},
    {"bin_id": 1, "price": "101000000", "reserve_x": "1000", "reserve_y": 0, "liquidity": 1010}
]"#;

const POSITIONS: &str = r#"[
    {"binId": -1, "userLiquidity": 1000, "has_held": true},
    {"bin_id": 0, "userLiquidity": "400"},
    {"bin_id": 1, "userLiquidity": "5"}
]"#;

fn print_plan(label: &str, plan: &WithdrawalPlan) {
    println!("\n{label}:");
    for params in &plan.bins {
        println!(
            "  bin {}: burn={} min_x={} min_y={} ownership_check={}",
            params.bin_id,
            params.shares_to_burn,
            params.min_x_amount,
            params.min_y_amount,
            params.requires_ownership_condition
        );
    }
    println!(
        "  totals: shares={} min_x={} min_y={}",
        plan.total_shares,
        plan.total_min_x,
        plan.total_min_y
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DLMM withdraw liquidity ===\n");

    // ── 1. Normalize service records ────────────────────────────────────
    let bins: Vec<BinRecord> = serde_json::from_str(BINS)?;
    let snapshot = PoolSnapshot::from_records(0, &bins, &FeeRecord::default())?;

    let records: Vec<PositionRecord> = serde_json::from_str(POSITIONS)?;
    let positions = records
        .iter()
        .map(Position::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    for position in &positions {
        println!("  {position}");
    }

    // ── 2. Withdraw half of every position ──────────────────────────────
    //    Intents leave the active bin unset; the plan fills it in from the
    //    snapshot.
    let intents = [-1, 0, 1]
        .into_iter()
        .map(|bin| WithdrawalIntent::new(BinId::new(bin), 50, None))
        .collect::<Result<Vec<_>, _>>()?;

    // ── 3. Enforced minimums at the default 1% tolerance ────────────────
    let enforced = LiquidityConfig::default();
    let plan = plan_withdrawal(&snapshot, &positions, &intents, &enforced)?;
    print_plan("Enforced minimums", &plan);

    // ── 4. Nominal minimums with enforcement off ────────────────────────
    //    Each bin asks for one unit of the side it holds most of.
    let relaxed_json = r#"{"enforce_minimum_received": false}"#;
    let relaxed: LiquidityConfig = serde_json::from_str(relaxed_json)?;
    let plan = plan_withdrawal(&snapshot, &positions, &intents, &relaxed)?;
    print_plan("Fallback minimums", &plan);

    Ok(())
}
