//! Checked numeric values.
//!
//! Stream rates, loads, temperatures, and the minimum approach temperature
//! all have sign requirements, and none of them may be infinite or `NaN`.
//! A [`Constrained<T, C>`] holds a value that passed the check for marker `C`
//! once, at construction, so code receiving it never re-checks.
//!
//! Markers:
//!
//! - [`NonNegative`]: finite and `>= 0`
//! - [`StrictlyPositive`]: finite and `> 0`

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{Dimension, Quantity, Units};

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A check applied to a value of type `T`.
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the reason `value` is rejected.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value must be finite")]
    Infinite,
    #[error("value is not a number")]
    NotANumber,
}

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// Scalars that can be infinite.
///
/// Implemented for `f64` and every `f64`-backed [`uom`] quantity.
pub trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<D, U> Finite for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// A value known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use twine_pinch::support::constraint::{Constrained, ConstraintError, StrictlyPositive};
/// use uom::si::{f64::Power, power::watt};
///
/// let load = Constrained::<_, StrictlyPositive>::new(Power::new::<watt>(200.0)).unwrap();
/// assert_eq!(load.into_inner().get::<watt>(), 200.0);
///
/// let empty = Constrained::<_, StrictlyPositive>::new(Power::new::<watt>(0.0));
/// assert_eq!(empty, Err(ConstraintError::Zero));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Rejects infinite values; markers call this once the sign check passes.
fn require_finite<T: Finite>(value: &T) -> ConstraintResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConstraintError::Infinite)
    }
}
