use uom::{ConstZero, si::f64::Power};

use super::{Exchanger, Placement, Side};

/// A synthesized heat-exchanger network.
///
/// Exchangers are in canonical order: sorted by hot stream then cold stream,
/// with utilities after the cells on each axis, one exchanger per placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    pub exchangers: Vec<Exchanger>,
}

impl Network {
    pub(crate) fn new(exchangers: Vec<Exchanger>) -> Self {
        Self { exchangers }
    }

    /// Internal hot/cold matches.
    pub fn cells(&self) -> impl Iterator<Item = &Exchanger> {
        self.exchangers
            .iter()
            .filter(|exchanger| !exchanger.placement.is_utility())
    }

    /// Heaters and coolers.
    pub fn utilities(&self) -> impl Iterator<Item = &Exchanger> {
        self.exchangers
            .iter()
            .filter(|exchanger| exchanger.placement.is_utility())
    }

    /// Total external heating.
    #[must_use]
    pub fn heating_utility(&self) -> Power {
        self.total(|placement| matches!(placement, Placement::Heater { .. }))
    }

    /// Total external cooling.
    #[must_use]
    pub fn cooling_utility(&self) -> Power {
        self.total(|placement| matches!(placement, Placement::Cooler { .. }))
    }

    /// Heating plus cooling utility.
    #[must_use]
    pub fn total_utility(&self) -> Power {
        self.heating_utility() + self.cooling_utility()
    }

    /// Heat moved between process streams.
    #[must_use]
    pub fn recovered_heat(&self) -> Power {
        self.total(|placement| matches!(placement, Placement::Cell { .. }))
    }

    /// Sum of the loads of every exchanger touching stream `index` on `side`.
    #[must_use]
    pub fn load_on(&self, side: Side, index: usize) -> Power {
        self.exchangers
            .iter()
            .filter(|exchanger| exchanger.references(side, index))
            .fold(Power::ZERO, |sum, exchanger| sum + exchanger.load)
    }

    fn total(&self, include: impl Fn(&Placement) -> bool) -> Power {
        self.exchangers
            .iter()
            .filter(|exchanger| include(&exchanger.placement))
            .fold(Power::ZERO, |sum, exchanger| sum + exchanger.load)
    }
}
