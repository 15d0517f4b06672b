//! Heat-cascade targeting and allocation.
//!
//! Streams are placed on a shared temperature axis with cold streams shifted
//! up by the minimum approach. Walking the axis top-down in segments gives the
//! minimum utility targets, and a second walk allocates hot heat to cold
//! demand segment by segment.

mod allocation;
mod segments;
mod targeting;

pub use targeting::{Pinch, Targets};

use tracing::debug;
use uom::si::power::watt;

use self::segments::Cascade;
use super::{Exchanger, Infeasible, Resolved};

/// Runs the cascade and returns the raw, uncompacted exchanger list.
///
/// # Errors
///
/// Returns [`Infeasible::UnreconciledDeficit`] if allocation cannot cover a
/// cold demand from process heat or the targeted hot utility.
pub(crate) fn cascade(resolved: &Resolved) -> Result<Vec<Exchanger>, Infeasible> {
    let cascade = Cascade::build(resolved);
    let targets = targeting::targets(&cascade);

    debug!(
        segments = cascade.segments.len(),
        hot_utility_w = targets.hot_utility.get::<watt>(),
        cold_utility_w = targets.cold_utility.get::<watt>(),
        "cascade targets"
    );

    allocation::allocate(&cascade, targets.hot_utility)
}

/// Minimum utility targets without allocating exchangers.
pub(crate) fn targets(resolved: &Resolved) -> Targets {
    targeting::targets(&Cascade::build(resolved))
}
