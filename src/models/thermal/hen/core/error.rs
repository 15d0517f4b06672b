use thiserror::Error;
use uom::si::{f64::Power, power::watt};

use crate::support::constraint::ConstraintError;

use super::Side;

/// Errors raised while synthesizing a heat-exchanger network.
///
/// Every variant means no network was produced; models never return a
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Infeasible {
    /// The minimum approach temperature is negative or not a number.
    #[error("invalid minimum approach temperature: {0}")]
    InvalidMinApproach(#[source] ConstraintError),

    /// A stream record failed validation.
    ///
    /// Raised before any matching begins.
    #[error("invalid {side} stream {index}: {defect}")]
    InvalidStream {
        /// Side of the offending stream.
        side: Side,
        /// Position of the stream within its side's input sequence.
        index: usize,
        /// What is wrong with the record.
        #[source]
        defect: StreamDefect,
    },

    /// The cascade allocation could not cover a cold demand from process heat
    /// or the targeted hot utility.
    ///
    /// Only the cascade model raises this. For well-formed input it indicates
    /// an internal inconsistency between targeting and allocation.
    #[error(
        "unreconciled heat deficit at cold stream {cold}: {deficit_w} W",
        deficit_w = .deficit.get::<watt>()
    )]
    UnreconciledDeficit {
        /// Cold stream whose demand could not be covered.
        cold: usize,
        /// Heat beyond the remaining utility budget.
        deficit: Power,
    },
}

/// Reasons a stream record is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamDefect {
    #[error("temperature {0}")]
    Temperature(#[source] ConstraintError),
    #[error("heat-capacity flow rate {0}")]
    Rate(#[source] ConstraintError),
    #[error("load {0}")]
    Load(#[source] ConstraintError),
    #[error("inlet and outlet temperatures are equal")]
    ZeroGlide,
    #[error("outlet temperature is on the wrong side of the inlet")]
    WrongDirection,
}
