//! Point-in-time view of a pool's bins and fee rates.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::records::{BinRecord, FeeRecord};
use crate::domain::{BinId, BinSnapshot, PoolFeeSet};
use crate::error::{DlmmError, Result};
use crate::traits::FromRecord;

/// Bins of one pool keyed by id, with the active bin and fee set observed
/// at the same moment.
///
/// The snapshot is rebuilt for every operation; nothing here is cached
/// between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    active_bin_id: BinId,
    bins: BTreeMap<BinId, BinSnapshot>,
    fees: PoolFeeSet,
}

impl PoolSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new(active_bin_id: BinId, fees: PoolFeeSet) -> Self {
        Self {
            active_bin_id,
            bins: BTreeMap::new(),
            fees,
        }
    }

    /// Builds a snapshot from raw service records.
    ///
    /// # Errors
    ///
    /// - [`DlmmError::DuplicateBin`] if two records share a bin id.
    /// - Any error from [`FromRecord`] for bins or fees.
    pub fn from_records(active_bin_id: i32, bins: &[BinRecord], fees: &FeeRecord) -> Result<Self> {
        let mut snapshot = Self::new(BinId::new(active_bin_id), PoolFeeSet::from_record(fees)?);
        for record in bins {
            snapshot.insert(BinSnapshot::from_record(record)?)?;
        }
        log::debug!(
            "pool snapshot: active bin {}, {} bins, fees {}",
            snapshot.active_bin_id,
            snapshot.bins.len(),
            snapshot.fees
        );
        Ok(snapshot)
    }

    /// Adds a bin.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::DuplicateBin`] if the id is already present.
    pub fn insert(&mut self, bin: BinSnapshot) -> Result<()> {
        match self.bins.entry(bin.bin_id()) {
            Entry::Occupied(_) => Err(DlmmError::DuplicateBin(bin.bin_id().get())),
            Entry::Vacant(slot) => {
                slot.insert(bin);
                Ok(())
            }
        }
    }

    /// Returns the active bin id.
    #[must_use]
    pub const fn active_bin_id(&self) -> BinId {
        self.active_bin_id
    }

    /// Returns the fee set.
    #[must_use]
    pub const fn fees(&self) -> &PoolFeeSet {
        &self.fees
    }

    /// Looks up a bin.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::BinNotFound`] if the bin was not fetched.
    pub fn bin(&self, bin_id: BinId) -> Result<&BinSnapshot> {
        self.bins
            .get(&bin_id)
            .ok_or(DlmmError::BinNotFound(bin_id.get()))
    }

    /// Iterates bins in ascending id order.
    pub fn bins(&self) -> impl Iterator<Item = &BinSnapshot> {
        self.bins.values()
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns `true` if no bins were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
