//! Supporting utilities used across the crate.
//!
//! - [`constraint`]: Type-level numeric constraints checked at construction.
//! - [`units`]: Extensions for working with [`uom`] quantities.

pub mod constraint;
pub mod units;
