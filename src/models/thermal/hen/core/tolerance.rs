//! Fixed numeric tolerances.
//!
//! Both values are in SI base units: kelvin for temperatures and watts for
//! heat. They must stay distinct; [`EPS`] separates "effectively zero or equal"
//! while [`INFEASIBLE_EPS`] separates floating-point noise from a genuine
//! allocation deficit in the cascade.

use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin,
};

/// Tolerance for zero and equality comparisons.
pub const EPS: f64 = 1e-6;

/// Tolerance above which an unreconciled cascade deficit is an error.
pub const INFEASIBLE_EPS: f64 = 1e-4;

/// Heat below which a duty or load counts as zero.
pub(crate) fn heat_eps() -> Power {
    Power::new::<watt>(EPS)
}

/// Temperature difference below which two temperatures count as equal.
pub(crate) fn temp_eps() -> TemperatureInterval {
    TemperatureInterval::new::<kelvin>(EPS)
}

/// Slack allowed when drawing on the cascade's hot-utility budget.
pub(crate) fn deficit_eps() -> Power {
    Power::new::<watt>(INFEASIBLE_EPS)
}
