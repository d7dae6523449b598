//! Raw records as fetched from the pool service.
//!
//! Records mirror the wire payloads field for field and carry no
//! invariants.  They become domain values through [`FromRecord`].

use crate::domain::{BasisPoints, BinId, BinPrice, BinSnapshot, PoolFeeSet, Position, Shares};
use crate::error::Result;
use crate::traits::FromRecord;

/// One bin as reported by the pool service.
///
/// ```json
/// {"binId": -3, "price": "99700449", "reserve_x": 0, "reserve_y": 5000, "liquidity": 4985}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct BinRecord {
    /// Bin id.
    #[cfg_attr(feature = "serde", serde(alias = "binId"))]
    pub bin_id: i32,
    /// Price of X in Y, scaled by 1e8.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "super::deserialization::from_number_or_string")
    )]
    pub price: u128,
    /// X reserve.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "super::deserialization::from_number_or_string")
    )]
    pub reserve_x: u128,
    /// Y reserve.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "super::deserialization::from_number_or_string")
    )]
    pub reserve_y: u128,
    /// Total DLP shares outstanding.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "super::deserialization::from_number_or_string")
    )]
    pub liquidity: u128,
}

/// A user's share balance in one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PositionRecord {
    /// Bin id.
    #[cfg_attr(feature = "serde", serde(alias = "binId"))]
    pub bin_id: i32,
    /// DLP shares held.
    #[cfg_attr(
        feature = "serde",
        serde(
            alias = "userLiquidity",
            deserialize_with = "super::deserialization::from_number_or_string"
        )
    )]
    pub user_liquidity: u128,
    /// Whether the user ever held shares here, when the service knows.
    #[cfg_attr(feature = "serde", serde(default, alias = "hasHeld"))]
    pub has_held: bool,
}

/// Per-token fee rates in basis points.  Absent fields read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeeRecord {
    /// Protocol fee on X.
    pub x_protocol_fee: u32,
    /// Provider fee on X.
    pub x_provider_fee: u32,
    /// Variable fee on X.
    pub x_variable_fee: u32,
    /// Protocol fee on Y.
    pub y_protocol_fee: u32,
    /// Provider fee on Y.
    pub y_provider_fee: u32,
    /// Variable fee on Y.
    pub y_variable_fee: u32,
}

impl FromRecord<BinRecord> for BinSnapshot {
    fn from_record(record: &BinRecord) -> Result<Self> {
        let price = BinPrice::new(record.price)?;
        Ok(Self::new(
            BinId::new(record.bin_id),
            price,
            record.reserve_x.into(),
            record.reserve_y.into(),
            Shares::new(record.liquidity),
        ))
    }
}

impl FromRecord<PositionRecord> for Position {
    fn from_record(record: &PositionRecord) -> Result<Self> {
        Ok(Self::new(
            BinId::new(record.bin_id),
            Shares::new(record.user_liquidity),
            record.has_held,
        ))
    }
}

impl FromRecord<FeeRecord> for PoolFeeSet {
    fn from_record(record: &FeeRecord) -> Result<Self> {
        Self::new(
            BasisPoints::new(record.x_protocol_fee),
            BasisPoints::new(record.x_provider_fee),
            BasisPoints::new(record.x_variable_fee),
            BasisPoints::new(record.y_protocol_fee),
            BasisPoints::new(record.y_provider_fee),
            BasisPoints::new(record.y_variable_fee),
        )
    }
}
