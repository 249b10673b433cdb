//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints checked at construction.
//! - [`units`]: Quantities missing from [`uom`].

pub mod constraint;
pub mod units;
