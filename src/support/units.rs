//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, heat rate,
//! heat-capacity flow rate). This module provides extensions that are useful
//! for network synthesis but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_pinch::support::units::TemperatureDifference;
//!
//! let hot = ThermodynamicTemperature::new::<kelvin>(500.0);
//! let cold = ThermodynamicTemperature::new::<kelvin>(350.0);
//! let driving_force = hot.minus(cold);
//! // driving_force is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
