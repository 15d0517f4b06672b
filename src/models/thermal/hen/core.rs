//! Heat-exchanger network synthesis.
//!
//! Streams are validated into a canonical form, handed to one of two engines,
//! and the raw exchangers the engine emits are compacted into a [`Network`].
//! The greedy engine matches streams round by round in temperature order.
//! The cascade engine computes minimum utility targets along a shifted
//! temperature axis and then allocates heat segment by segment.

mod cascade;
mod compact;
mod error;
mod exchanger;
mod feasibility;
mod greedy;
mod network;
mod problem;
mod state;
mod stream;
mod tolerance;

#[cfg(test)]
pub(crate) mod test_support;

pub use cascade::{Pinch, Targets};
pub use compact::compact;
pub use error::{Infeasible, StreamDefect};
pub use exchanger::{Exchanger, Placement};
pub use greedy::{GreedyConfig, ResidualClosing};
pub use network::Network;
pub use problem::{DEFAULT_MIN_APPROACH_KELVIN, Problem};
pub use stream::{Side, Stream};
pub use tolerance::{EPS, INFEASIBLE_EPS};

pub(crate) use problem::Resolved;
pub(crate) use stream::{ProcessStream, StreamKind};

/// Synthesizes a network with greedy matching.
///
/// # Errors
///
/// Returns [`Infeasible`] if the problem fails validation.
pub(crate) fn synthesize_greedy(problem: &Problem, config: GreedyConfig) -> Result<Network, Infeasible> {
    let resolved = problem.resolve()?;
    Ok(Network::new(compact(greedy::greedy(&resolved, config))))
}

/// Synthesizes a network from the heat cascade.
///
/// # Errors
///
/// Returns [`Infeasible`] if the problem fails validation or the allocation
/// cannot be reconciled with the targets.
pub(crate) fn synthesize_cascade(problem: &Problem) -> Result<Network, Infeasible> {
    let resolved = problem.resolve()?;
    Ok(Network::new(compact(cascade::cascade(&resolved)?)))
}

/// Minimum utility targets for a problem.
///
/// # Errors
///
/// Returns [`Infeasible`] if the problem fails validation.
pub(crate) fn targets(problem: &Problem) -> Result<Targets, Infeasible> {
    Ok(cascade::targets(&problem.resolve()?))
}
