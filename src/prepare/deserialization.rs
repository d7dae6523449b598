//! Lenient numeric deserializers for pool service payloads.
//!
//! On-chain integers routinely exceed what JSON numbers carry exactly, so
//! the pool service sends some of them as decimal strings.  Both forms are
//! accepted here.

use core::fmt;

use serde::{
    Deserializer,
    de::{Error, Unexpected, Visitor},
};

struct U128Visitor;

impl Visitor<'_> for U128Visitor {
    type Value = u128;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or a decimal string")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(u128::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        u128::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        value
            .trim()
            .parse::<u128>()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// Deserializes a `u128` from a JSON number or a decimal string.
pub(crate) fn from_number_or_string<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(U128Visitor)
}
