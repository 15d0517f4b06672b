use tracing::{debug, warn};
use uom::{
    ConstZero,
    si::{f64::Power, power::watt},
};

use super::{
    super::{
        Exchanger, Infeasible,
        tolerance::{deficit_eps, heat_eps},
    },
    segments::Cascade,
};

/// Turns the cascade into concrete exchangers.
///
/// Heat released by each hot stream accumulates in that stream's pool as the
/// walk descends. Each cold demand in a segment draws from the pools in hot
/// input order, emitting one cell per draw; any shortfall is charged to the
/// hot-utility budget and later becomes a heater. Pools left over at the
/// bottom become coolers.
///
/// # Errors
///
/// Returns [`Infeasible::UnreconciledDeficit`] if a shortfall exceeds the
/// remaining budget by more than [`INFEASIBLE_EPS`](super::super::INFEASIBLE_EPS).
pub(crate) fn allocate(cascade: &Cascade, hot_utility: Power) -> Result<Vec<Exchanger>, Infeasible> {
    let mut pool = vec![Power::ZERO; cascade.hot_count];
    let mut shortfall = vec![Power::ZERO; cascade.cold_count];
    let mut budget = hot_utility;
    let mut cells = Vec::new();

    for segment in &cascade.segments {
        for &(h, heat) in &segment.supply {
            pool[h] += heat;
        }

        let mut next_hot = 0;
        for &(c, demand) in &segment.demand {
            let mut needed = demand;

            while needed > Power::ZERO {
                let Some(h) = (next_hot..pool.len()).find(|&h| pool[h] > Power::ZERO) else {
                    break;
                };
                next_hot = h;

                let draw = pool[h].min(needed);
                pool[h] -= draw;
                needed -= draw;
                debug!(hot = h, cold = c, load_w = draw.get::<watt>(), "cascade cell");
                cells.push(Exchanger::cell(h, c, draw));
            }

            if needed > Power::ZERO {
                charge(&mut budget, c, needed)?;
                shortfall[c] += needed;
            }
        }
    }

    let heaters = shortfall
        .into_iter()
        .enumerate()
        .filter(|&(_, load)| load > heat_eps())
        .map(|(c, load)| {
            debug!(cold = c, load_w = load.get::<watt>(), "cascade heater");
            Exchanger::heater(c, load)
        });
    let coolers = pool
        .into_iter()
        .enumerate()
        .filter(|&(_, load)| load > heat_eps())
        .map(|(h, load)| {
            debug!(hot = h, load_w = load.get::<watt>(), "cascade cooler");
            Exchanger::cooler(h, load)
        });

    Ok(cells.into_iter().chain(heaters).chain(coolers).collect())
}

/// Draws a cold shortfall from the hot-utility budget.
fn charge(budget: &mut Power, cold: usize, shortfall: Power) -> Result<(), Infeasible> {
    if shortfall > *budget + deficit_eps() {
        return Err(Infeasible::UnreconciledDeficit {
            cold,
            deficit: shortfall - *budget,
        });
    }
    if shortfall > *budget {
        warn!(
            cold,
            overdraw_w = (shortfall - *budget).get::<watt>(),
            "cascade budget overdrawn within tolerance"
        );
    }

    *budget = (*budget - shortfall).max(Power::ZERO);
    Ok(())
}
