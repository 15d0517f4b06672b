//! Synthesis problem definition and its validated form.

use crate::support::constraint::NonNegative;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

use super::{Infeasible, ProcessStream, Side, Stream};

/// Minimum approach temperature used by [`Problem::new`], in kelvin.
pub const DEFAULT_MIN_APPROACH_KELVIN: f64 = 20.0;

/// Hot and cold streams plus the minimum approach temperature for one solve.
///
/// Stream indices in the resulting network refer to positions in `hot` and
/// `cold`.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Streams that must be cooled.
    pub hot: Vec<Stream>,
    /// Streams that must be heated.
    pub cold: Vec<Stream>,
    /// Minimum hot-to-cold temperature difference (ΔTmin) for every match.
    pub min_approach: TemperatureInterval,
}

impl Problem {
    /// Creates a problem with the default minimum approach temperature.
    #[must_use]
    pub fn new(hot: Vec<Stream>, cold: Vec<Stream>) -> Self {
        Self {
            hot,
            cold,
            min_approach: TemperatureInterval::new::<kelvin>(DEFAULT_MIN_APPROACH_KELVIN),
        }
    }

    /// Replaces the minimum approach temperature.
    #[must_use]
    pub fn with_min_approach(self, min_approach: TemperatureInterval) -> Self {
        Self {
            min_approach,
            ..self
        }
    }

    /// Validates every stream and the approach temperature.
    ///
    /// # Errors
    ///
    /// Returns [`Infeasible::InvalidMinApproach`] or the first
    /// [`Infeasible::InvalidStream`] found, hot streams before cold.
    pub(crate) fn resolve(&self) -> Result<Resolved, Infeasible> {
        let min_approach = NonNegative::new(self.min_approach)
            .map_err(Infeasible::InvalidMinApproach)?
            .into_inner();

        Ok(Resolved {
            hot: resolve_side(Side::Hot, &self.hot)?,
            cold: resolve_side(Side::Cold, &self.cold)?,
            min_approach,
        })
    }
}

/// A validated problem: canonical streams in input order.
#[derive(Debug, Clone)]
pub(crate) struct Resolved {
    pub(crate) hot: Vec<ProcessStream>,
    pub(crate) cold: Vec<ProcessStream>,
    pub(crate) min_approach: TemperatureInterval,
}

fn resolve_side(side: Side, streams: &[Stream]) -> Result<Vec<ProcessStream>, Infeasible> {
    streams
        .iter()
        .enumerate()
        .map(|(index, stream)| {
            ProcessStream::new(side, stream).map_err(|defect| Infeasible::InvalidStream {
                side,
                index,
                defect,
            })
        })
        .collect()
}
