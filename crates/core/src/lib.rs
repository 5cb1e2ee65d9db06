//! Domain primitives shared by the racing and sports catalogs.
//!
//! Everything in this crate is pure: no I/O, no clocks read implicitly.

pub mod error;
pub mod ordering;
pub mod sports;
pub mod status;
pub mod types;
