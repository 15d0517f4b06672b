use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, Finite, require_finite};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Absolute temperatures and the minimum approach temperature carry this
/// constraint.
///
/// # Examples
///
/// ```
/// use twine_pinch::support::constraint::NonNegative;
///
/// let dt = NonNegative::new(0.0).unwrap();
/// assert_eq!(dt.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-7.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, infinite, or `NaN`.
    pub fn new<T: PartialOrd + Zero + Finite>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero + Finite> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => require_finite(value),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
