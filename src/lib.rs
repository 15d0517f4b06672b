//! # Twine Pinch
//!
//! Heat-exchanger network (HEN) synthesis models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given hot streams that must be cooled and cold streams that must be
//! heated, the models in this crate find a set of hot/cold matches plus any
//! external heaters and coolers so every stream reaches its target, every
//! match respects a minimum approach temperature, and utility use approaches
//! the thermodynamic minimum.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations
//!   ([`GreedyMatching`](models::thermal::hen::GreedyMatching) and
//!   [`PinchCascade`](models::thermal::hen::PinchCascade)).
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
