use std::cmp::Ordering;

use uom::{
    ConstZero,
    si::{
        f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::units::TemperatureDifference;

use super::super::{ProcessStream, Resolved, tolerance::temp_eps};

/// One step of the top-down walk along the shifted temperature axis.
///
/// A segment is either a level at a single breakpoint, carrying the duty of
/// streams that collapse onto it, or the interval between two consecutive
/// breakpoints, carrying the glide heat released or absorbed inside it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Segment {
    /// Heat released by hot streams, in hot input order.
    pub(crate) supply: Vec<(usize, Power)>,
    /// Heat absorbed by cold streams, in cold input order.
    pub(crate) demand: Vec<(usize, Power)>,
    /// Lowest axis temperature the segment reaches.
    pub(crate) bottom: ThermodynamicTemperature,
}

impl Segment {
    /// Supply minus demand.
    pub(crate) fn surplus(&self) -> Power {
        let supplied = self.supply.iter().fold(Power::ZERO, |sum, &(_, q)| sum + q);
        let demanded = self.demand.iter().fold(Power::ZERO, |sum, &(_, q)| sum + q);
        supplied - demanded
    }
}

/// The problem laid out along the shifted axis.
///
/// Hot streams sit at their real temperatures and cold streams are shifted up
/// by the minimum approach, so any hot heat above a cold demand on this axis
/// can legally reach it.
#[derive(Debug, Clone)]
pub(crate) struct Cascade {
    pub(crate) segments: Vec<Segment>,
    pub(crate) hot_count: usize,
    pub(crate) cold_count: usize,
    pub(crate) min_approach: TemperatureInterval,
}

impl Cascade {
    pub(crate) fn build(resolved: &Resolved) -> Self {
        let shift = resolved.min_approach;
        let breakpoints = breakpoints(resolved);

        let locate = |stream: &ProcessStream| Reach::locate(stream, shift, &breakpoints);
        let hot: Vec<Reach> = resolved.hot.iter().map(locate).collect();
        let cold: Vec<Reach> = resolved.cold.iter().map(locate).collect();

        let mut segments = Vec::with_capacity(breakpoints.len() * 2);
        for (i, &top) in breakpoints.iter().enumerate() {
            segments.push(Segment {
                supply: collect(&hot, |reach| reach.load_at(i)),
                demand: collect(&cold, |reach| reach.load_at(i)),
                bottom: top,
            });

            if let Some(&bottom) = breakpoints.get(i + 1) {
                segments.push(Segment {
                    supply: collect(&hot, |reach| reach.heat_below(&breakpoints, i)),
                    demand: collect(&cold, |reach| reach.heat_below(&breakpoints, i)),
                    bottom,
                });
            }
        }

        Self {
            segments,
            hot_count: resolved.hot.len(),
            cold_count: resolved.cold.len(),
            min_approach: shift,
        }
    }
}

fn collect(reaches: &[Reach], heat: impl Fn(&Reach) -> Option<Power>) -> Vec<(usize, Power)> {
    reaches
        .iter()
        .enumerate()
        .filter_map(|(index, reach)| heat(reach).map(|q| (index, q)))
        .collect()
}

/// The breakpoints a stream's axis range snaps to, with its full duty.
///
/// A stream snapping to a single breakpoint (every isothermal stream, and any
/// glide narrower than the merge tolerance) holds its whole duty at that
/// level. Any other stream spreads its duty over the intervals it spans in
/// proportion to their width, so the pieces always add up to the duty.
#[derive(Debug, Clone, Copy)]
struct Reach {
    top: usize,
    bottom: usize,
    duty: Power,
}

impl Reach {
    fn locate(
        stream: &ProcessStream,
        shift: TemperatureInterval,
        breakpoints: &[ThermodynamicTemperature],
    ) -> Self {
        let (upper, lower) = stream.axis_range(shift);
        Self {
            top: level_of(breakpoints, upper),
            bottom: level_of(breakpoints, lower),
            duty: stream.required_duty(),
        }
    }

    fn load_at(&self, level: usize) -> Option<Power> {
        (self.top == level && self.bottom == level).then_some(self.duty)
    }

    /// Heat exchanged between breakpoints `i` and `i + 1`.
    fn heat_below(&self, breakpoints: &[ThermodynamicTemperature], i: usize) -> Option<Power> {
        if !(self.top..self.bottom).contains(&i) {
            return None;
        }
        let rate: ThermalConductance =
            self.duty / breakpoints[self.top].minus(breakpoints[self.bottom]);
        Some(rate * breakpoints[i].minus(breakpoints[i + 1]))
    }
}

/// Every stream endpoint on the shifted axis, sorted descending, with values
/// within tolerance of a higher one dropped.
fn breakpoints(resolved: &Resolved) -> Vec<ThermodynamicTemperature> {
    let mut points: Vec<ThermodynamicTemperature> = resolved
        .hot
        .iter()
        .chain(&resolved.cold)
        .flat_map(|stream| {
            let (upper, lower) = stream.axis_range(resolved.min_approach);
            [upper, lower]
        })
        .collect();

    points.sort_by(|a, b| descending(*a, *b));
    points.dedup_by(|lower, kept| kept.minus(*lower) <= temp_eps());
    points
}

fn descending(a: ThermodynamicTemperature, b: ThermodynamicTemperature) -> Ordering {
    b.get::<kelvin>().total_cmp(&a.get::<kelvin>())
}

/// Index of the breakpoint nearest `at`, the higher one on a tie.
///
/// Every stream endpoint lies within tolerance of a breakpoint, since
/// deduplication only drops points that close to a kept one.
fn level_of(breakpoints: &[ThermodynamicTemperature], at: ThermodynamicTemperature) -> usize {
    breakpoints
        .iter()
        .map(|&point| point.minus(at).abs().get::<delta_kelvin>())
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or(0, |(i, _)| i)
}
