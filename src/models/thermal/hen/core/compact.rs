//! Merging and pruning of raw exchanger lists.

use super::{Exchanger, tolerance::heat_eps};

/// Canonicalizes a raw exchanger list.
///
/// Exchangers are stably sorted by `(hot, cold)` with utilities last on each
/// axis, exchangers with the same placement are merged by summing their loads,
/// and merged results carrying no more than [`EPS`](super::EPS) are dropped.
/// Compacting an already compacted list returns it unchanged.
#[must_use]
pub fn compact(exchangers: impl IntoIterator<Item = Exchanger>) -> Vec<Exchanger> {
    let mut sorted: Vec<Exchanger> = exchangers.into_iter().collect();
    sorted.sort_by_key(|exchanger| exchanger.placement.sort_key());

    let mut merged: Vec<Exchanger> = Vec::with_capacity(sorted.len());
    for exchanger in sorted {
        match merged.last_mut() {
            Some(last) if last.placement == exchanger.placement => last.load += exchanger.load,
            _ => merged.push(exchanger),
        }
    }

    merged.retain(|exchanger| exchanger.load > heat_eps());
    merged
}
