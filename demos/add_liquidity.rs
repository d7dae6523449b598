//! Add-liquidity planning example.
//!
//! Parses pool service records, builds a snapshot around the active bin and
//! plans a three-bin deposit: Y below the active bin, both tokens at it and
//! X above it.
//!
//! # Run
//!
//! ```bash
//! cargo run --example add_liquidity
//! ```

use dlmm_liquidity::config::LiquidityConfig;
use dlmm_liquidity::domain::{Amount, BinId, DepositIntent};
use dlmm_liquidity::prepare::{BinRecord, FeeRecord, PoolSnapshot, plan_add_liquidity};

const BINS: &str = r#"[
    {"binId": -1, "price": 99000000, "reserve_x": 0, "reserve_y": 1000, "liquidity": 1000},
    {"binId": 0, "price": "100000000", "reserve_x": 100, "reserve_y": 1900, "liquidity": 2000},
    {"bin_id": 1, "price": "101000000", "reserve_x": "1000", "reserve_y": 0, "liquidity": 1010},
    {"bin_id": 2, "price": "102010000", "reserve_x": 0, "reserve_y": 0, "liquidity": 0}
]"#;

const FEES: &str = r#"{
    "x_protocol_fee": 40, "x_provider_fee": 50, "x_variable_fee": 10,
    "y_protocol_fee": 40, "y_provider_fee": 50, "y_variable_fee": 10
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DLMM add liquidity ===\n");

    // ── 1. Normalize service records ────────────────────────────────────
    let bins: Vec<BinRecord> = serde_json::from_str(BINS)?;
    let fees: FeeRecord = serde_json::from_str(FEES)?;
    let snapshot = PoolSnapshot::from_records(0, &bins, &fees)?;

    println!("Active bin: {}", snapshot.active_bin_id());
    println!("Fees:       {}", snapshot.fees());
    for bin in snapshot.bins() {
        println!("  {bin}");
    }

    // ── 2. Describe the deposit ─────────────────────────────────────────
    //    The active bin is short on X, so an X-heavy deposit there pays
    //    the imbalance fee on the excess.
    let intents = [
        DepositIntent::y_only(BinId::new(-1), Amount::new(500)),
        DepositIntent::new(BinId::new(0), Amount::new(1_000), Amount::ZERO),
        DepositIntent::x_only(BinId::new(1), Amount::new(2_000)),
        DepositIntent::x_only(BinId::new(2), Amount::new(200_000_000)),
    ];

    // ── 3. Plan with the default 1% tolerance ───────────────────────────
    let config = LiquidityConfig::default();
    let plan = plan_add_liquidity(&snapshot, &intents, &config)?;

    println!("\nPlan (slippage {}):", config.slippage_tolerance());
    for params in &plan.bins {
        println!(
            "  bin {}: x={} y={} min_dlp={} max_fee=({}, {})",
            params.bin_id,
            params.x_amount,
            params.y_amount,
            params.min_dlp,
            params.max_x_fee,
            params.max_y_fee
        );
    }
    println!("Totals: x={} y={}", plan.total_x, plan.total_y);

    // ── 4. Out-of-side deposits abort the whole plan ────────────────────
    let wrong_side = [DepositIntent::x_only(BinId::new(-1), Amount::new(1))];
    match plan_add_liquidity(&snapshot, &wrong_side, &config) {
        Ok(_) => println!("\nUnexpected plan for X below the active bin"),
        Err(err) => println!("\nRejected: {err}"),
    }

    Ok(())
}
