//! Shared fixtures for unit tests.

use proptest::prelude::*;
use uom::si::{
    f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::TemperatureDifference;

use super::{Exchanger, Placement, ProcessStream, Problem, Resolved, Side, Stream, state::StreamState};

pub(crate) fn temp(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value)
}

pub(crate) fn glide(inlet: f64, outlet: f64, rate: f64) -> Stream {
    Stream::glide(
        temp(inlet),
        temp(outlet),
        ThermalConductance::new::<watt_per_kelvin>(rate),
    )
}

pub(crate) fn isothermal(temperature: f64, load: f64) -> Stream {
    Stream::isothermal(temp(temperature), Power::new::<watt>(load))
}

pub(crate) fn process(side: Side, stream: Stream) -> ProcessStream {
    ProcessStream::new(side, &stream).unwrap()
}

pub(crate) fn resolve(hot: Vec<Stream>, cold: Vec<Stream>, min_approach: f64) -> Resolved {
    Problem::new(hot, cold)
        .with_min_approach(TemperatureInterval::new::<delta_kelvin>(min_approach))
        .resolve()
        .unwrap()
}

fn arb_hot() -> impl Strategy<Value = Stream> {
    prop_oneof![
        3 => (300.0..600.0_f64, 5.0..200.0_f64, 0.5..10.0_f64)
            .prop_map(|(inlet, drop, rate)| glide(inlet, inlet - drop, rate)),
        1 => (300.0..600.0_f64, 10.0..500.0_f64)
            .prop_map(|(temperature, load)| isothermal(temperature, load)),
    ]
}

fn arb_cold() -> impl Strategy<Value = Stream> {
    prop_oneof![
        3 => (250.0..550.0_f64, 5.0..200.0_f64, 0.5..10.0_f64)
            .prop_map(|(inlet, rise, rate)| glide(inlet, inlet + rise, rate)),
        1 => (250.0..550.0_f64, 10.0..500.0_f64)
            .prop_map(|(temperature, load)| isothermal(temperature, load)),
    ]
}

/// Valid problems with up to four streams per side.
pub(crate) fn arb_problem() -> impl Strategy<Value = Problem> {
    (
        prop::collection::vec(arb_hot(), 0..=4),
        prop::collection::vec(arb_cold(), 0..=4),
        0.0..40.0_f64,
    )
        .prop_map(|(hot, cold, min_approach)| {
            Problem::new(hot, cold)
                .with_min_approach(TemperatureInterval::new::<delta_kelvin>(min_approach))
        })
}

/// Replays a raw exchanger list in order and returns the hot-to-cold
/// temperature difference, in kelvin, before and after every cell.
pub(crate) fn min_driving_forces(resolved: &Resolved, raw: &[Exchanger]) -> Vec<(f64, f64)> {
    let mut hot: Vec<StreamState> = resolved.hot.iter().copied().map(StreamState::new).collect();
    let mut cold: Vec<StreamState> = resolved.cold.iter().copied().map(StreamState::new).collect();
    let mut forces = Vec::new();

    for exchanger in raw {
        match exchanger.placement {
            Placement::Cell { hot: h, cold: c } => {
                let before = hot[h].temperature.minus(cold[c].temperature);
                hot[h].exchange(exchanger.load);
                cold[c].exchange(exchanger.load);
                let after = hot[h].temperature.minus(cold[c].temperature);
                forces.push((before.get::<delta_kelvin>(), after.get::<delta_kelvin>()));
            }
            Placement::Heater { cold: c } => cold[c].exchange(exchanger.load),
            Placement::Cooler { hot: h } => hot[h].exchange(exchanger.load),
        }
    }

    forces
}

/// Total load carried by exchangers on `side` and the total duty required
/// there, both in watts.
pub(crate) fn total_by_side(resolved: &Resolved, exchangers: &[Exchanger], side: Side) -> (f64, f64) {
    let streams = match side {
        Side::Hot => &resolved.hot,
        Side::Cold => &resolved.cold,
    };

    let carried: f64 = (0..streams.len())
        .flat_map(|i| exchangers.iter().filter(move |x| x.references(side, i)))
        .map(|x| x.load.get::<watt>())
        .sum();
    let required: f64 = streams
        .iter()
        .map(|stream| stream.required_duty().get::<watt>())
        .sum();

    (carried, required)
}
