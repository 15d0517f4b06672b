use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermodynamicTemperature},
        power::watt,
        thermodynamic_temperature::kelvin,
    },
};

use super::{
    super::tolerance::heat_eps,
    segments::Cascade,
};

/// Minimum utility targets for a problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Targets {
    /// Minimum external heating.
    pub hot_utility: Power,
    /// Minimum external cooling.
    pub cold_utility: Power,
    /// Where heat stops cascading, or `None` for a problem needing at most
    /// one kind of utility.
    pub pinch: Option<Pinch>,
}

impl Targets {
    /// Heating plus cooling.
    #[must_use]
    pub fn total_utility(&self) -> Power {
        self.hot_utility + self.cold_utility
    }
}

/// The pinch as a pair of real stream temperatures one approach apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pinch {
    /// Hot-side pinch temperature.
    pub hot: ThermodynamicTemperature,
    /// Cold-side pinch temperature, one minimum approach below `hot`.
    pub cold: ThermodynamicTemperature,
}

/// Runs the heat balance down the cascade.
///
/// Each segment adds its surplus to a running balance. A negative balance is
/// a deficit that only external heating can cover, so it is added to the hot
/// utility and the balance restarts at zero. Whatever remains at the bottom
/// must be rejected to cooling.
pub(crate) fn targets(cascade: &Cascade) -> Targets {
    let mut balance = Power::ZERO;
    let mut hot_utility = Power::ZERO;
    let mut pinch_at: Option<ThermodynamicTemperature> = None;

    for segment in &cascade.segments {
        balance += segment.surplus();
        if balance < Power::ZERO {
            let deficit = -balance;
            hot_utility += deficit;
            balance = Power::ZERO;

            if deficit > heat_eps() {
                debug!(
                    at_k = segment.bottom.get::<kelvin>(),
                    deficit_w = deficit.get::<watt>(),
                    "cascade deficit"
                );
                pinch_at = Some(segment.bottom);
            }
        }
    }

    let cold_utility = balance;
    let pinch = pinch_at
        .filter(|_| cold_utility > heat_eps())
        .map(|hot| Pinch {
            hot,
            cold: hot - cascade.min_approach,
        });

    Targets {
        hot_utility,
        cold_utility,
        pinch,
    }
}
