//! Per-bin transaction parameters for whole add, withdraw and swap
//! operations.
//!
//! A plan is computed in one pass over the caller's intents.  The first
//! invalid intent aborts the whole plan; no partial plan is ever returned.

use std::collections::{BTreeMap, BTreeSet};

use super::pool_snapshot::PoolSnapshot;
use super::validation::validate_deposit;
use crate::config::LiquidityConfig;
use crate::domain::{
    Amount, BinId, DepositIntent, Position, Shares, SwapParams, SwapQuote, WithdrawalIntent,
};
use crate::engine::{compute_minted_shares, compute_swap_params, compute_withdrawal};
use crate::error::{DlmmError, Result};
use crate::math::CheckedArithmetic;

/// Add-liquidity parameters for one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinMintParams {
    /// Target bin.
    pub bin_id: BinId,
    /// X deposited.
    pub x_amount: Amount,
    /// Y deposited.
    pub y_amount: Amount,
    /// Minimum DLP shares the contract must mint.
    pub min_dlp: Shares,
    /// X charged as active-bin fee liquidity.
    pub max_x_fee: Amount,
    /// Y charged as active-bin fee liquidity.
    pub max_y_fee: Amount,
}

/// Add-liquidity parameters for every bin plus the deposit totals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddLiquidityPlan {
    /// Per-bin parameters in intent order.
    pub bins: Vec<BinMintParams>,
    /// Sum of X deposited across bins.
    pub total_x: Amount,
    /// Sum of Y deposited across bins.
    pub total_y: Amount,
}

/// Withdrawal parameters for one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinBurnParams {
    /// Source bin.
    pub bin_id: BinId,
    /// DLP shares to burn.
    pub shares_to_burn: Shares,
    /// Minimum X to receive.
    pub min_x_amount: Amount,
    /// Minimum Y to receive.
    pub min_y_amount: Amount,
    /// Whether the transaction must carry an ownership-transfer condition
    /// for this bin.
    pub requires_ownership_condition: bool,
}

/// Withdrawal parameters for every bin that burns something, plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WithdrawalPlan {
    /// Per-bin parameters in intent order; no-op bins are left out.
    pub bins: Vec<BinBurnParams>,
    /// Sum of shares burned.
    pub total_shares: Shares,
    /// Sum of minimum X.
    pub total_min_x: Amount,
    /// Sum of minimum Y.
    pub total_min_y: Amount,
}

impl WithdrawalPlan {
    /// Returns `true` if no bin burns any shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Plans a multi-bin deposit.
///
/// Each intent is checked against its bin's token side, priced against
/// the snapshot bin and the pool fees, and bounded by the configured
/// slippage tolerance.
///
/// # Errors
///
/// - [`DlmmError::InvalidDeposit`] for a side violation or empty deposit.
/// - [`DlmmError::DuplicateBin`] if two intents target the same bin.
/// - [`DlmmError::BinNotFound`] if a bin is missing from the snapshot.
/// - Arithmetic errors from the calculator.
pub fn plan_add_liquidity(
    snapshot: &PoolSnapshot,
    intents: &[DepositIntent],
    config: &LiquidityConfig,
) -> Result<AddLiquidityPlan> {
    let mut seen = BTreeSet::new();
    let mut plan = AddLiquidityPlan::default();

    for intent in intents {
        let position = validate_deposit(intent, snapshot.active_bin_id())?;
        if !seen.insert(intent.bin_id()) {
            return Err(DlmmError::DuplicateBin(intent.bin_id().get()));
        }
        let bin = snapshot.bin(intent.bin_id())?;
        let quote = compute_minted_shares(
            bin,
            intent,
            position.is_active(),
            snapshot.fees(),
            config.slippage_tolerance(),
        )?;

        plan.total_x = plan.total_x.safe_add(&intent.x_amount())?;
        plan.total_y = plan.total_y.safe_add(&intent.y_amount())?;
        plan.bins.push(BinMintParams {
            bin_id: intent.bin_id(),
            x_amount: intent.x_amount(),
            y_amount: intent.y_amount(),
            min_dlp: quote.min_shares(),
            max_x_fee: quote.x_fee_liquidity(),
            max_y_fee: quote.y_fee_liquidity(),
        });
    }

    log::debug!(
        "add liquidity plan: {} bins, total x={}, total y={}",
        plan.bins.len(),
        plan.total_x,
        plan.total_y
    );
    Ok(plan)
}

/// Plans a multi-bin withdrawal.
///
/// Intents without an active bin inherit the snapshot's.  A bin where the
/// user holds nothing, or where the burn rounds to zero, is left out of
/// the plan.
///
/// # Errors
///
/// - [`DlmmError::DuplicateBin`] if two positions or two intents name the
///   same bin.
/// - [`DlmmError::BinNotFound`] if a bin is missing from the snapshot.
/// - [`DlmmError::InvalidPosition`] if a balance exceeds its bin's shares.
/// - Arithmetic errors from the calculator.
pub fn plan_withdrawal(
    snapshot: &PoolSnapshot,
    positions: &[Position],
    intents: &[WithdrawalIntent],
    config: &LiquidityConfig,
) -> Result<WithdrawalPlan> {
    let mut by_bin = BTreeMap::new();
    for position in positions {
        if by_bin.insert(position.bin_id(), *position).is_some() {
            return Err(DlmmError::DuplicateBin(position.bin_id().get()));
        }
    }

    let mut seen = BTreeSet::new();
    let mut plan = WithdrawalPlan::default();

    for intent in intents {
        if !seen.insert(intent.bin_id()) {
            return Err(DlmmError::DuplicateBin(intent.bin_id().get()));
        }
        let bin = snapshot.bin(intent.bin_id())?;
        let intent = match intent.active_bin_id() {
            Some(_) => *intent,
            None => intent.with_active_bin(snapshot.active_bin_id()),
        };
        let Some(position) = by_bin.get(&intent.bin_id()) else {
            log::trace!("Bin {}: no position, skipped", intent.bin_id());
            continue;
        };

        let quote = compute_withdrawal(
            bin,
            position.user_liquidity(),
            &intent,
            config.slippage_tolerance(),
            config.enforce_minimum_received(),
        )?;
        if quote.is_noop() {
            log::trace!("Bin {}: nothing to burn, skipped", intent.bin_id());
            continue;
        }

        plan.total_shares = plan.total_shares.safe_add(&quote.shares_to_burn())?;
        plan.total_min_x = plan.total_min_x.safe_add(&quote.min_x_amount())?;
        plan.total_min_y = plan.total_min_y.safe_add(&quote.min_y_amount())?;
        plan.bins.push(BinBurnParams {
            bin_id: intent.bin_id(),
            shares_to_burn: quote.shares_to_burn(),
            min_x_amount: quote.min_x_amount(),
            min_y_amount: quote.min_y_amount(),
            requires_ownership_condition: position.requires_ownership_condition(),
        });
    }

    log::debug!(
        "withdrawal plan: {} bins, shares={}, min x={}, min y={}",
        plan.bins.len(),
        plan.total_shares,
        plan.total_min_x,
        plan.total_min_y
    );
    Ok(plan)
}

/// Derives swap parameters from a routing quote with the configured
/// tolerance.
///
/// # Errors
///
/// Same as [`compute_swap_params`].
pub fn plan_swap(quote: &SwapQuote, config: &LiquidityConfig) -> Result<SwapParams> {
    compute_swap_params(quote, config.slippage_tolerance())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{BinPrice, BinSnapshot, PoolFeeSet, SlippageTolerance, SwapDirection};

    fn bin(id: i32, x: u128, y: u128, shares: u128) -> BinSnapshot {
        BinSnapshot::new(
            BinId::new(id),
            BinPrice::PARITY,
            Amount::new(x),
            Amount::new(y),
            Shares::new(shares),
        )
    }

    fn snapshot() -> PoolSnapshot {
        let mut snapshot = PoolSnapshot::new(BinId::new(0), PoolFeeSet::ZERO);
        let bins = [
            bin(-1, 0, 1_000, 1_000),
            bin(0, 0, 0, 0),
            bin(1, 1_000, 0, 1_000),
            bin(2, 500, 500, 1_000),
        ];
        for bin in bins {
            let Ok(()) = snapshot.insert(bin) else {
                panic!("expected unique bins");
            };
        }
        snapshot
    }

    #[test]
    fn add_plan_sums_and_bounds() {
        let intents = [
            DepositIntent::x_only(BinId::new(0), Amount::new(10_000)),
            DepositIntent::x_only(BinId::new(1), Amount::new(500)),
            DepositIntent::y_only(BinId::new(-1), Amount::new(200)),
        ];
        let Ok(plan) = plan_add_liquidity(&snapshot(), &intents, &LiquidityConfig::default()) else {
            panic!("expected Ok");
        };
        assert_eq!(plan.bins.len(), 3);
        assert_eq!(plan.bins[0].min_dlp, Shares::new(989_010));
        assert_eq!(plan.bins[1].min_dlp, Shares::new(495));
        assert_eq!(plan.bins[2].min_dlp, Shares::new(198));
        assert_eq!(plan.total_x, Amount::new(10_500));
        assert_eq!(plan.total_y, Amount::new(200));
    }

    #[test]
    fn add_plan_fails_fast() {
        let config = LiquidityConfig::default();
        let wrong_side = [
            DepositIntent::x_only(BinId::new(1), Amount::new(500)),
            DepositIntent::x_only(BinId::new(-1), Amount::new(500)),
        ];
        let result = plan_add_liquidity(&snapshot(), &wrong_side, &config);
        let Err(DlmmError::InvalidDeposit { bin_id: -1, .. }) = result else {
            panic!("expected InvalidDeposit");
        };

        let missing = [DepositIntent::x_only(BinId::new(9), Amount::new(500))];
        let result = plan_add_liquidity(&snapshot(), &missing, &config);
        assert_eq!(result, Err(DlmmError::BinNotFound(9)));

        let twice = [
            DepositIntent::x_only(BinId::new(1), Amount::new(1)),
            DepositIntent::x_only(BinId::new(1), Amount::new(2)),
        ];
        let result = plan_add_liquidity(&snapshot(), &twice, &config);
        assert_eq!(result, Err(DlmmError::DuplicateBin(1)));
    }

    #[test]
    fn withdrawal_plan_skips_noops() {
        let positions = [
            Position::new(BinId::new(2), Shares::new(200), true),
            Position::new(BinId::new(1), Shares::ZERO, true),
        ];
        let intents = [
            WithdrawalIntent::new(BinId::new(2), 50, None),
            WithdrawalIntent::new(BinId::new(1), 100, None),
            WithdrawalIntent::new(BinId::new(-1), 100, None),
        ];
        let Ok(intents) = intents.into_iter().collect::<Result<Vec<_>>>() else {
            panic!("expected valid intents");
        };
        let config = LiquidityConfig::default();
        let Ok(plan) = plan_withdrawal(&snapshot(), &positions, &intents, &config) else {
            panic!("expected Ok");
        };
        assert_eq!(plan.bins.len(), 1);
        let params = plan.bins[0];
        assert_eq!(params.shares_to_burn, Shares::new(100));
        assert_eq!(params.min_x_amount, Amount::new(49));
        assert_eq!(params.min_y_amount, Amount::new(49));
        assert!(params.requires_ownership_condition);
        assert_eq!(plan.total_shares, Shares::new(100));
    }

    #[test]
    fn withdrawal_plan_fallback_uses_snapshot_active_bin() {
        let Ok(config) = LiquidityConfig::new(SlippageTolerance::DEFAULT, false) else {
            panic!("expected valid config");
        };
        let positions = [Position::new(BinId::new(1), Shares::new(400), true)];
        let Ok(intent) = WithdrawalIntent::new(BinId::new(1), 25, None) else {
            panic!("expected valid intent");
        };
        let Ok(plan) = plan_withdrawal(&snapshot(), &positions, &[intent], &config) else {
            panic!("expected Ok");
        };
        assert_eq!(plan.bins[0].shares_to_burn, Shares::new(100));
        assert_eq!(plan.total_min_x, Amount::new(1));
        assert_eq!(plan.total_min_y, Amount::ZERO);
    }

    #[test]
    fn withdrawal_plan_rejects_duplicate_positions() {
        let positions = [
            Position::new(BinId::new(2), Shares::new(1), true),
            Position::new(BinId::new(2), Shares::new(2), true),
        ];
        let result = plan_withdrawal(&snapshot(), &positions, &[], &LiquidityConfig::default());
        assert_eq!(result, Err(DlmmError::DuplicateBin(2)));
    }

    #[test]
    fn swap_plan_applies_tolerance() {
        let (amount_in, amount_out) = (Amount::new(2_000), Amount::new(2_017));
        let Ok(quote) = SwapQuote::new(SwapDirection::XForY, amount_in, amount_out) else {
            panic!("expected valid quote");
        };
        let Ok(params) = plan_swap(&quote, &LiquidityConfig::default()) else {
            panic!("expected Ok");
        };
        assert_eq!(params.min_amount_out(), Amount::new(1_996));
    }
}
