//! Per-pair heat transfer limits under the minimum approach temperature.

use crate::support::units::TemperatureDifference;
use uom::{
    ConstZero,
    si::f64::{Power, TemperatureInterval, ThermalConductance},
};

use super::{
    StreamKind,
    state::StreamState,
    tolerance::{heat_eps, temp_eps},
};

/// Upper limit on heat a hot/cold pair can exchange from their current states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Transferable {
    /// At most this much heat.
    Bounded(Power),
    /// No thermal limit; the caller caps by remaining duty.
    Unbounded,
}

impl Transferable {
    /// Resolves the limit against a caller-supplied cap.
    pub(crate) fn cap(self, limit: Power) -> Power {
        match self {
            Self::Bounded(heat) => heat.min(limit),
            Self::Unbounded => limit,
        }
    }

    /// Whether more than a negligible amount of heat can move.
    pub(crate) fn is_significant(self) -> bool {
        match self {
            Self::Bounded(heat) => heat > heat_eps(),
            Self::Unbounded => true,
        }
    }
}

/// Maximum heat transferable from `hot` to `cold` without the driving force
/// dropping below `min_approach` or either stream overshooting its outlet.
///
/// Both streams move concurrently: a glide hot stream cools while a glide cold
/// stream heats, so the driving force shrinks at `1/C_hot + 1/C_cold` per unit
/// of heat. Returns `None` when the pair is infeasible.
pub(crate) fn max_transferable(
    hot: &StreamState,
    cold: &StreamState,
    min_approach: TemperatureInterval,
) -> Option<Transferable> {
    let driving_force = hot.temperature.minus(cold.temperature);
    if driving_force < min_approach - temp_eps() {
        return None;
    }
    let excess = driving_force - min_approach;

    let heat = match (hot.stream.kind, cold.stream.kind) {
        (StreamKind::Isothermal { .. }, StreamKind::Isothermal { .. }) => {
            return Some(Transferable::Unbounded);
        }
        (StreamKind::Glide { rate: hot_rate, .. }, StreamKind::Glide { rate: cold_rate, .. }) => {
            let series: ThermalConductance =
                *hot_rate * *cold_rate / (*hot_rate + *cold_rate);
            (series * excess)
                .min(hot.headroom())
                .min(cold.headroom())
        }
        (StreamKind::Isothermal { .. }, StreamKind::Glide { rate: cold_rate, .. }) => {
            cold_rate.heat_over(excess).min(cold.headroom())
        }
        (StreamKind::Glide { rate: hot_rate, .. }, StreamKind::Isothermal { .. }) => {
            hot_rate.heat_over(excess).min(hot.headroom())
        }
    };

    (heat > Power::ZERO).then_some(Transferable::Bounded(heat))
}
