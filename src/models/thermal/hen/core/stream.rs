//! Stream records and their validated canonical form.

use std::fmt;

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    hx::CapacitanceRate,
    units::TemperatureDifference,
};
use uom::{
    ConstZero,
    si::{
        f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
        thermodynamic_temperature::kelvin,
    },
};

use super::StreamDefect;

/// Which side of the network a stream sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// A stream that must be cooled.
    Hot,
    /// A stream that must be heated.
    Cold,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hot => f.write_str("hot"),
            Self::Cold => f.write_str("cold"),
        }
    }
}

/// A process stream as supplied by the caller.
///
/// Records are not validated on construction; each model validates the whole
/// problem before matching begins and reports the first defect it finds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stream {
    /// A stream exchanging its whole load at one temperature (phase change).
    Isothermal {
        temperature: ThermodynamicTemperature,
        load: Power,
    },
    /// A stream moving linearly from `inlet` to `outlet` at a constant rate.
    Glide {
        inlet: ThermodynamicTemperature,
        outlet: ThermodynamicTemperature,
        rate: ThermalConductance,
    },
    /// A glide stream given by its total load; the rate is `load / |outlet - inlet|`.
    GlideWithLoad {
        inlet: ThermodynamicTemperature,
        outlet: ThermodynamicTemperature,
        load: Power,
    },
}

impl Stream {
    /// Creates an [`Stream::Isothermal`] record.
    #[must_use]
    pub fn isothermal(temperature: ThermodynamicTemperature, load: Power) -> Self {
        Self::Isothermal { temperature, load }
    }

    /// Creates a [`Stream::Glide`] record.
    #[must_use]
    pub fn glide(
        inlet: ThermodynamicTemperature,
        outlet: ThermodynamicTemperature,
        rate: ThermalConductance,
    ) -> Self {
        Self::Glide {
            inlet,
            outlet,
            rate,
        }
    }

    /// Creates a [`Stream::GlideWithLoad`] record.
    #[must_use]
    pub fn glide_with_load(
        inlet: ThermodynamicTemperature,
        outlet: ThermodynamicTemperature,
        load: Power,
    ) -> Self {
        Self::GlideWithLoad {
            inlet,
            outlet,
            load,
        }
    }
}

/// Temperature profile of a validated stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StreamKind {
    Isothermal {
        temperature: ThermodynamicTemperature,
        load: Power,
    },
    Glide {
        inlet: ThermodynamicTemperature,
        outlet: ThermodynamicTemperature,
        rate: CapacitanceRate,
    },
}

/// A validated stream in canonical form.
///
/// Glide streams always move in the direction their side requires (hot
/// streams cool, cold streams heat) and every stream has a strictly positive
/// required duty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProcessStream {
    pub(crate) side: Side,
    pub(crate) kind: StreamKind,
}

impl ProcessStream {
    /// Validates and normalizes a caller-supplied record.
    pub(crate) fn new(side: Side, stream: &Stream) -> Result<Self, StreamDefect> {
        let kind = match *stream {
            Stream::Isothermal { temperature, load } => StreamKind::Isothermal {
                temperature: checked_temperature(temperature)?,
                load: StrictlyPositive::new(load)
                    .map_err(StreamDefect::Load)?
                    .into_inner(),
            },
            Stream::Glide {
                inlet,
                outlet,
                rate,
            } => {
                checked_span(side, inlet, outlet)?;
                let rate = CapacitanceRate::from_quantity(rate).map_err(StreamDefect::Rate)?;
                StreamKind::Glide {
                    inlet,
                    outlet,
                    rate,
                }
            }
            Stream::GlideWithLoad {
                inlet,
                outlet,
                load,
            } => {
                let span = checked_span(side, inlet, outlet)?;
                let load = StrictlyPositive::new(load).map_err(StreamDefect::Load)?;
                let rate = CapacitanceRate::from_load_and_span(load.into_inner(), span)
                    .map_err(StreamDefect::Rate)?;
                StreamKind::Glide {
                    inlet,
                    outlet,
                    rate,
                }
            }
        };

        Ok(Self { side, kind })
    }

    /// Total heat the stream must shed (hot) or absorb (cold).
    pub(crate) fn required_duty(&self) -> Power {
        match self.kind {
            StreamKind::Isothermal { load, .. } => load,
            StreamKind::Glide {
                inlet,
                outlet,
                rate,
            } => rate.heat_over(outlet.minus(inlet).abs()),
        }
    }

    pub(crate) fn inlet(&self) -> ThermodynamicTemperature {
        match self.kind {
            StreamKind::Isothermal { temperature, .. } => temperature,
            StreamKind::Glide { inlet, .. } => inlet,
        }
    }

    /// Upper and lower temperatures of the stream on the cascade axis.
    ///
    /// Hot streams sit at their real temperatures; cold streams are shifted
    /// up by `shift`.
    pub(crate) fn axis_range(
        &self,
        shift: TemperatureInterval,
    ) -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        let (upper, lower) = match (self.kind, self.side) {
            (StreamKind::Isothermal { temperature, .. }, _) => (temperature, temperature),
            (StreamKind::Glide { inlet, outlet, .. }, Side::Hot) => (inlet, outlet),
            (StreamKind::Glide { inlet, outlet, .. }, Side::Cold) => (outlet, inlet),
        };

        match self.side {
            Side::Hot => (upper, lower),
            Side::Cold => (upper + shift, lower + shift),
        }
    }
}

fn checked_temperature(
    temperature: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, StreamDefect> {
    NonNegative::new(temperature.get::<kelvin>()).map_err(StreamDefect::Temperature)?;
    Ok(temperature)
}

/// Checks glide endpoints and returns the signed span `outlet - inlet`.
fn checked_span(
    side: Side,
    inlet: ThermodynamicTemperature,
    outlet: ThermodynamicTemperature,
) -> Result<TemperatureInterval, StreamDefect> {
    let span = checked_temperature(outlet)?.minus(checked_temperature(inlet)?);

    if span == TemperatureInterval::ZERO {
        return Err(StreamDefect::ZeroGlide);
    }

    let heats_up = span > TemperatureInterval::ZERO;
    match (side, heats_up) {
        (Side::Hot, false) | (Side::Cold, true) => Ok(span),
        (Side::Hot, true) | (Side::Cold, false) => Err(StreamDefect::WrongDirection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;
    use approx::assert_relative_eq;
    use uom::si::{
        power::watt, temperature_interval::kelvin as delta_kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    use crate::models::thermal::hen::core::test_support::{glide, isothermal, temp};

    #[test]
    fn glide_duty_is_rate_times_span() {
        let hot = ProcessStream::new(Side::Hot, &glide(500.0, 400.0, 2.0)).unwrap();
        let cold = ProcessStream::new(Side::Cold, &glide(350.0, 450.0, 2.0)).unwrap();

        assert_relative_eq!(hot.required_duty().get::<watt>(), 200.0);
        assert_relative_eq!(cold.required_duty().get::<watt>(), 200.0);
    }

    #[test]
    fn glide_with_load_derives_rate() {
        let record = Stream::glide_with_load(temp(300.0), temp(340.0), Power::new::<watt>(80.0));
        let stream = ProcessStream::new(Side::Cold, &record).unwrap();

        let StreamKind::Glide { rate, .. } = stream.kind else {
            panic!("expected a glide stream, got {stream:?}");
        };
        assert_relative_eq!(rate.get::<watt_per_kelvin>(), 2.0);
        assert_relative_eq!(stream.required_duty().get::<watt>(), 80.0);
    }

    #[test]
    fn isothermal_duty_is_load() {
        let stream = ProcessStream::new(Side::Hot, &isothermal(400.0, 100.0)).unwrap();

        assert!(matches!(stream.kind, StreamKind::Isothermal { .. }));
        assert_relative_eq!(stream.required_duty().get::<watt>(), 100.0);
        assert_eq!(stream.inlet(), temp(400.0));
    }

    #[test]
    fn rejects_bad_records() {
        assert_eq!(
            ProcessStream::new(Side::Hot, &glide(500.0, 400.0, 0.0)),
            Err(StreamDefect::Rate(ConstraintError::Zero))
        );
        assert_eq!(
            ProcessStream::new(Side::Hot, &glide(500.0, 400.0, f64::INFINITY)),
            Err(StreamDefect::Rate(ConstraintError::Infinite))
        );
        assert_eq!(
            ProcessStream::new(Side::Hot, &glide(f64::INFINITY, 400.0, 2.0)),
            Err(StreamDefect::Temperature(ConstraintError::Infinite))
        );
        assert_eq!(
            ProcessStream::new(Side::Hot, &glide(400.0, 400.0, 2.0)),
            Err(StreamDefect::ZeroGlide)
        );
        assert_eq!(
            ProcessStream::new(Side::Hot, &glide(400.0, 500.0, 2.0)),
            Err(StreamDefect::WrongDirection)
        );
        assert_eq!(
            ProcessStream::new(Side::Cold, &glide(500.0, 400.0, 2.0)),
            Err(StreamDefect::WrongDirection)
        );
        assert_eq!(
            ProcessStream::new(Side::Cold, &isothermal(370.0, 0.0)),
            Err(StreamDefect::Load(ConstraintError::Zero))
        );
        assert_eq!(
            ProcessStream::new(Side::Cold, &isothermal(-1.0, 10.0)),
            Err(StreamDefect::Temperature(ConstraintError::Negative))
        );
        assert_eq!(
            ProcessStream::new(
                Side::Cold,
                &Stream::glide_with_load(temp(300.0), temp(340.0), Power::new::<watt>(-5.0))
            ),
            Err(StreamDefect::Load(ConstraintError::Negative))
        );
    }

    #[test]
    fn cold_streams_are_shifted_on_the_axis() {
        let shift = TemperatureInterval::new::<delta_kelvin>(20.0);

        let hot = ProcessStream::new(Side::Hot, &glide(500.0, 400.0, 2.0)).unwrap();
        assert_eq!(hot.axis_range(shift), (temp(500.0), temp(400.0)));

        let cold = ProcessStream::new(Side::Cold, &glide(350.0, 450.0, 2.0)).unwrap();
        let (upper, lower) = cold.axis_range(shift);
        assert_relative_eq!(upper.get::<kelvin>(), 470.0);
        assert_relative_eq!(lower.get::<kelvin>(), 370.0);

        let cold = ProcessStream::new(Side::Cold, &isothermal(370.0, 100.0)).unwrap();
        let (upper, lower) = cold.axis_range(shift);
        assert_relative_eq!(upper.get::<kelvin>(), 390.0);
        assert_eq!(upper, lower);
    }
}
