use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{Power, TemperatureInterval, ThermalConductance};

/// Heat-capacity flow rate of a process stream.
///
/// This is the slope of a stream's temperature versus cumulative duty line.
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = ThermalConductance::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a stream's total load and the
    /// temperature span it covers.
    ///
    /// The sign of `span` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `span` is zero or the resulting rate is not strictly
    /// positive.
    pub fn from_load_and_span(load: Power, span: TemperatureInterval) -> ConstraintResult<Self> {
        let span = StrictlyPositive::new(span.abs())?;
        Self::from_quantity(load / span.into_inner())
    }

    /// Returns the heat exchanged over a temperature change of `span`.
    #[must_use]
    pub fn heat_over(self, span: TemperatureInterval) -> Power {
        *self * span
    }

    /// Returns the temperature change caused by exchanging `heat`.
    #[must_use]
    pub fn span_for(self, heat: Power) -> TemperatureInterval {
        heat / *self
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
