//! Domain rules for the DVD storefront data model.
//!
//! Pure validation and lifecycle logic with no I/O. The `storedvd-db`
//! crate wires these rules into its repositories at write time.

pub mod catalog;
pub mod discount;
pub mod error;
pub mod orders;
pub mod types;
