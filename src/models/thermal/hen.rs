//! Heat-exchanger network synthesis models.
//!
//! This module provides [`twine_core::Model`] implementations that turn a
//! [`Problem`] into a [`Network`]:
//!
//! - [`GreedyMatching`] pairs streams round by round in temperature order.
//!   It always finds a network but may use more utility than necessary.
//! - [`PinchCascade`] targets the minimum utility with a heat cascade and
//!   allocates heat to reach it.
//!
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_pinch::models::thermal::hen::{PinchCascade, Problem, Stream};
//! use uom::si::{
//!     f64::{ThermalConductance, ThermodynamicTemperature},
//!     power::watt,
//!     thermal_conductance::watt_per_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let t = |value| ThermodynamicTemperature::new::<kelvin>(value);
//! let rate = ThermalConductance::new::<watt_per_kelvin>(2.0);
//!
//! let problem = Problem::new(
//!     vec![Stream::glide(t(500.0), t(400.0), rate)],
//!     vec![Stream::glide(t(350.0), t(450.0), rate)],
//! );
//!
//! let network = PinchCascade.call(&problem)?;
//!
//! assert_eq!(network.exchangers.len(), 1);
//! assert!((network.recovered_heat().get::<watt>() - 200.0).abs() < 1e-9);
//! assert!(network.total_utility().get::<watt>() < 1e-9);
//! # Ok::<(), twine_pinch::models::thermal::hen::Infeasible>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    DEFAULT_MIN_APPROACH_KELVIN, EPS, Exchanger, GreedyConfig, INFEASIBLE_EPS, Infeasible,
    Network, Pinch, Placement, Problem, ResidualClosing, Side, Stream, StreamDefect, Targets,
    compact,
};

use twine_core::Model;

/// Greedy temperature-ordered matching.
///
/// Each round pairs the hottest cold stream that still has a feasible partner
/// with its coolest feasible hot partner. Cold streams left without a partner
/// get a heater and remaining hot duty is closed with coolers according to
/// [`GreedyConfig::residual_closing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyMatching {
    pub config: GreedyConfig,
}

impl GreedyMatching {
    #[must_use]
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    /// Synthesizes a network for `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`Infeasible`] if any stream or the approach temperature is
    /// invalid.
    pub fn synthesize(&self, problem: &Problem) -> Result<Network, Infeasible> {
        self::core::synthesize_greedy(problem, self.config)
    }
}

impl Model for GreedyMatching {
    type Input = Problem;
    type Output = Network;
    type Error = Infeasible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.synthesize(input)
    }
}

/// Pinch analysis by heat cascade.
///
/// Reaches the minimum hot and cold utility for the problem's approach
/// temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinchCascade;

impl PinchCascade {
    /// Synthesizes a network for `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`Infeasible`] if any stream or the approach temperature is
    /// invalid, or if allocation cannot reach the computed targets.
    pub fn synthesize(&self, problem: &Problem) -> Result<Network, Infeasible> {
        self::core::synthesize_cascade(problem)
    }

    /// Minimum utility targets and pinch location, without building a network.
    ///
    /// # Errors
    ///
    /// Returns [`Infeasible`] if any stream or the approach temperature is
    /// invalid.
    pub fn targets(&self, problem: &Problem) -> Result<Targets, Infeasible> {
        self::core::targets(problem)
    }
}

impl Model for PinchCascade {
    type Input = Problem;
    type Output = Network;
    type Error = Infeasible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.synthesize(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::watt;

    use crate::support::constraint::ConstraintError;

    use crate::models::thermal::hen::core::test_support::{glide, isothermal};

    fn scenario_a() -> Problem {
        Problem::new(vec![glide(500.0, 400.0, 2.0)], vec![glide(350.0, 450.0, 2.0)])
    }

    fn scenario_b() -> Problem {
        Problem::new(vec![glide(320.0, 310.0, 5.0)], vec![glide(315.0, 325.0, 5.0)])
    }

    fn scenario_c() -> Problem {
        Problem::new(vec![isothermal(400.0, 100.0)], vec![isothermal(370.0, 100.0)])
    }

    #[test]
    fn cascade_recovers_all_heat_in_scenario_a() {
        let network = PinchCascade.call(&scenario_a()).unwrap();

        assert_eq!(network.exchangers.len(), 1);
        assert_eq!(
            network.exchangers[0].placement,
            Placement::Cell { hot: 0, cold: 0 }
        );
        assert_relative_eq!(network.recovered_heat().get::<watt>(), 200.0);
        assert_relative_eq!(network.total_utility().get::<watt>(), 0.0);
    }

    #[test]
    fn greedy_is_limited_by_parallel_contact_in_scenario_a() {
        let network = GreedyMatching::default().call(&scenario_a()).unwrap();

        assert_relative_eq!(network.recovered_heat().get::<watt>(), 130.0);
        assert_relative_eq!(network.heating_utility().get::<watt>(), 70.0);
        assert_relative_eq!(network.cooling_utility().get::<watt>(), 70.0);
    }

    #[test]
    fn both_engines_fall_back_to_utilities_in_scenario_b() {
        let greedy = GreedyMatching::default().call(&scenario_b()).unwrap();
        let cascade = PinchCascade.call(&scenario_b()).unwrap();

        for network in [greedy, cascade] {
            let placements: Vec<Placement> =
                network.exchangers.iter().map(|x| x.placement).collect();
            assert_eq!(
                placements,
                vec![Placement::Cooler { hot: 0 }, Placement::Heater { cold: 0 }]
            );
            assert_relative_eq!(network.cooling_utility().get::<watt>(), 50.0);
            assert_relative_eq!(network.heating_utility().get::<watt>(), 50.0);
            assert_eq!(network.cells().count(), 0);
        }
    }

    #[test]
    fn both_engines_match_isothermal_pair_in_scenario_c() {
        let greedy = GreedyMatching::default().call(&scenario_c()).unwrap();
        let cascade = PinchCascade.call(&scenario_c()).unwrap();

        assert_eq!(greedy, cascade);
        assert_eq!(cascade.exchangers.len(), 1);
        assert_relative_eq!(cascade.recovered_heat().get::<watt>(), 100.0);
    }

    #[test]
    fn zero_rate_is_rejected_before_synthesis() {
        let problem = Problem::new(vec![glide(500.0, 400.0, 2.0)], vec![glide(350.0, 450.0, 0.0)]);
        let expected = Infeasible::InvalidStream {
            side: Side::Cold,
            index: 0,
            defect: StreamDefect::Rate(ConstraintError::Zero),
        };

        assert_eq!(PinchCascade.call(&problem), Err(expected.clone()));
        assert_eq!(GreedyMatching::default().call(&problem), Err(expected.clone()));
        assert_eq!(PinchCascade.targets(&problem), Err(expected));
    }

    #[test]
    fn targets_report_pinch() {
        let targets = PinchCascade.targets(&scenario_b()).unwrap();

        assert_relative_eq!(targets.hot_utility.get::<watt>(), 50.0);
        assert_relative_eq!(targets.cold_utility.get::<watt>(), 50.0);
        assert!(targets.pinch.is_some());
    }

    #[test]
    fn per_stream_closing_is_configurable() {
        let problem = Problem::new(
            vec![glide(500.0, 450.0, 2.0), glide(420.0, 400.0, 5.0)],
            vec![glide(300.0, 400.0, 1.0)],
        );

        let consolidated = GreedyMatching::default().call(&problem).unwrap();
        let per_stream = GreedyMatching::new(GreedyConfig {
            residual_closing: ResidualClosing::PerStream,
        })
        .call(&problem)
        .unwrap();

        assert_eq!(consolidated.utilities().count(), 1);
        assert_eq!(per_stream.utilities().count(), 2);
        assert_relative_eq!(
            consolidated.total_utility().get::<watt>(),
            per_stream.total_utility().get::<watt>(),
            epsilon = 1e-9
        );
    }
}
