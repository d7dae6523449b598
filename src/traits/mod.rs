//! Construction seams between raw snapshots and the typed domain.
//!
//! [`FromRecord`] turns the loosely-typed records fetched from the pool
//! service into validated domain values before any math runs.

mod from_record;

pub use from_record::FromRecord;
