//! Greedy temperature-ordered matching.
//!
//! Each round picks the hottest cold stream that still has a feasible hot
//! partner and pairs it with the coolest such partner, transferring as much
//! heat as the minimum approach temperature and both remaining duties allow.
//! Cold streams without any feasible partner are closed with a heater.
//! Leftover hot duty is closed with coolers once no more matches are possible.
//!
//! The engine never fails: it always returns a balanced, if possibly
//! utility-heavy, set of exchangers.

mod config;

pub use config::{GreedyConfig, ResidualClosing};

use tracing::{debug, trace};
use uom::{
    ConstZero,
    si::{f64::Power, power::watt, thermodynamic_temperature::kelvin},
};

use super::{
    Exchanger, Resolved, Side,
    feasibility::{Transferable, max_transferable},
    state::StreamState,
    tolerance::heat_eps,
};

/// Runs greedy matching and returns the raw, uncompacted exchanger list in
/// emission order.
pub(crate) fn greedy(resolved: &Resolved, config: GreedyConfig) -> Vec<Exchanger> {
    let mut hot: Vec<StreamState> = resolved.hot.iter().copied().map(StreamState::new).collect();
    let mut cold: Vec<StreamState> = resolved.cold.iter().copied().map(StreamState::new).collect();
    let mut exchangers = Vec::new();

    loop {
        let Some(Selection {
            cold: c,
            hot: h,
            transferable,
        }) = select(&hot, &cold, resolved)
        else {
            let Some(c) = hottest_unsatisfied(&cold) else {
                break;
            };
            exchangers.push(close_with_heater(&mut cold[c], c));
            continue;
        };

        let heat = transferable.cap(hot[h].remaining.min(cold[c].remaining));
        if heat <= heat_eps() {
            exchangers.push(close_with_heater(&mut cold[c], c));
            continue;
        }

        debug!(hot = h, cold = c, load_w = heat.get::<watt>(), "greedy cell");
        hot[h].exchange(heat);
        cold[c].exchange(heat);
        exchangers.push(Exchanger::cell(h, c, heat));
    }

    close_residuals(Side::Hot, &mut hot, config.residual_closing, &mut exchangers);
    close_residuals(Side::Cold, &mut cold, config.residual_closing, &mut exchangers);

    exchangers
}

struct Selection {
    cold: usize,
    hot: usize,
    transferable: Transferable,
}

/// Picks the hottest cold stream with a feasible partner, and its coolest
/// feasible hot partner. Ties go to the lower input index.
fn select(hot: &[StreamState], cold: &[StreamState], resolved: &Resolved) -> Option<Selection> {
    let mut best: Option<Selection> = None;

    for (c, cold_state) in cold.iter().enumerate() {
        if cold_state.is_satisfied() {
            continue;
        }
        if let Some(current) = &best
            && cold_state.temperature <= cold[current.cold].temperature
        {
            continue;
        }

        let partner = hot
            .iter()
            .enumerate()
            .filter(|(_, hot_state)| !hot_state.is_satisfied())
            .filter_map(|(h, hot_state)| {
                max_transferable(hot_state, cold_state, resolved.min_approach)
                    .filter(|transferable| transferable.is_significant())
                    .map(|transferable| (h, transferable))
            })
            .fold(None, |coolest: Option<(usize, Transferable)>, (h, transferable)| {
                match coolest {
                    Some((k, _)) if hot[k].temperature <= hot[h].temperature => coolest,
                    _ => Some((h, transferable)),
                }
            });

        if let Some((h, transferable)) = partner {
            trace!(
                cold = c,
                hot = h,
                cold_k = cold_state.temperature.get::<kelvin>(),
                "greedy candidate"
            );
            best = Some(Selection {
                cold: c,
                hot: h,
                transferable,
            });
        }
    }

    best
}

fn hottest_unsatisfied(states: &[StreamState]) -> Option<usize> {
    states
        .iter()
        .enumerate()
        .filter(|(_, state)| !state.is_satisfied())
        .fold(None, |hottest: Option<usize>, (i, state)| match hottest {
            Some(k) if states[k].temperature >= state.temperature => hottest,
            _ => Some(i),
        })
}

fn close_with_heater(state: &mut StreamState, index: usize) -> Exchanger {
    let load = state.close();
    debug!(cold = index, load_w = load.get::<watt>(), "greedy heater");
    Exchanger::heater(index, load)
}

/// Closes every stream on `side` that still has duty left.
fn close_residuals(
    side: Side,
    states: &mut [StreamState],
    closing: ResidualClosing,
    exchangers: &mut Vec<Exchanger>,
) {
    let residuals: Vec<(usize, Power)> = states
        .iter_mut()
        .enumerate()
        .filter(|(_, state)| !state.is_satisfied())
        .map(|(i, state)| (i, state.close()))
        .collect();

    match closing {
        ResidualClosing::PerStream => {
            for (i, load) in residuals {
                debug!(%side, stream = i, load_w = load.get::<watt>(), "greedy residual utility");
                exchangers.push(Exchanger::utility(side, i, load));
            }
        }
        ResidualClosing::Consolidated => {
            let total = residuals
                .iter()
                .fold(Power::ZERO, |sum, &(_, load)| sum + load);
            let largest = residuals
                .iter()
                .fold(None, |largest: Option<(usize, Power)>, &(i, load)| match largest {
                    Some((_, max)) if max >= load => largest,
                    _ => Some((i, load)),
                });

            if let Some((i, _)) = largest {
                debug!(
                    %side,
                    stream = i,
                    streams = residuals.len(),
                    load_w = total.get::<watt>(),
                    "greedy consolidated utility"
                );
                exchangers.push(Exchanger::utility(side, i, total));
            }
        }
    }
}
