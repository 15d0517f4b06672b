//! Supporting utilities shared by the models in this crate.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`hx`]: Heat exchanger stream quantities.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod hx;
pub mod units;
