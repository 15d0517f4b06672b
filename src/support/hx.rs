//! Heat exchanger stream quantities.
//!
//! Process streams in a heat-exchanger network are characterised by a
//! heat-capacity flow rate, the product of mass flow and specific heat, which
//! relates the heat a stream exchanges to its temperature change:
//! `Q = C · ΔT`.
//!
//! # Example
//!
//! ```
//! use twine_pinch::support::constraint::ConstraintResult;
//! use twine_pinch::support::hx::CapacitanceRate;
//! use uom::si::{
//!     f64::{Power, TemperatureInterval},
//!     power::kilowatt,
//!     temperature_interval::kelvin,
//!     thermal_conductance::kilowatt_per_kelvin,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let rate = CapacitanceRate::from_load_and_span(
//!         Power::new::<kilowatt>(200.0),
//!         TemperatureInterval::new::<kelvin>(100.0),
//!     )?;
//!     assert_eq!(rate.get::<kilowatt_per_kelvin>(), 2.0);
//!     Ok(())
//! }
//! ```

mod capacitance_rate;

pub use capacitance_rate::CapacitanceRate;
