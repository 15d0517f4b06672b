//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; only the types a caller needs are re-exported.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model-specific core API. A single `core` is exposed through multiple
//! adapters (one per synthesis strategy).

pub mod thermal;
