use crate::support::units::TemperatureDifference;
use uom::{
    ConstZero,
    si::f64::{Power, ThermodynamicTemperature},
};

use super::{ProcessStream, Side, StreamKind, tolerance::heat_eps};

/// Mutable per-solve view of a stream.
///
/// `temperature` starts at the inlet and moves toward the outlet as heat is
/// exchanged; `remaining` starts at the required duty and decreases toward
/// zero. Isothermal streams keep their temperature.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StreamState {
    pub(crate) stream: ProcessStream,
    pub(crate) temperature: ThermodynamicTemperature,
    pub(crate) remaining: Power,
}

impl StreamState {
    pub(crate) fn new(stream: ProcessStream) -> Self {
        Self {
            stream,
            temperature: stream.inlet(),
            remaining: stream.required_duty(),
        }
    }

    pub(crate) fn is_satisfied(&self) -> bool {
        self.remaining <= heat_eps()
    }

    /// Heat the stream can still exchange before reaching its outlet.
    ///
    /// For glide streams this follows from the current temperature; for
    /// isothermal streams it is the remaining duty.
    pub(crate) fn headroom(&self) -> Power {
        match self.stream.kind {
            StreamKind::Isothermal { .. } => self.remaining,
            StreamKind::Glide { outlet, rate, .. } => {
                let distance = match self.stream.side {
                    Side::Hot => self.temperature.minus(outlet),
                    Side::Cold => outlet.minus(self.temperature),
                };
                rate.heat_over(distance).max(Power::ZERO)
            }
        }
    }

    /// Applies an exchange of `heat` with another stream or a utility.
    pub(crate) fn exchange(&mut self, heat: Power) {
        self.remaining -= heat;

        if let StreamKind::Glide { rate, .. } = self.stream.kind {
            let change = rate.span_for(heat);
            self.temperature = match self.stream.side {
                Side::Hot => self.temperature - change,
                Side::Cold => self.temperature + change,
            };
        }
    }

    /// Closes the remaining duty, returning the heat taken.
    pub(crate) fn close(&mut self) -> Power {
        let heat = self.remaining;
        self.exchange(heat);
        self.remaining = Power::ZERO;
        heat
    }
}
