use uom::si::f64::Power;

use super::Side;

/// Where an exchanger sits in the network.
///
/// Stream indices refer to positions in [`Problem::hot`](super::Problem::hot)
/// and [`Problem::cold`](super::Problem::cold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// An internal match between a hot and a cold stream.
    Cell { hot: usize, cold: usize },
    /// External heating of a cold stream.
    Heater { cold: usize },
    /// External cooling of a hot stream.
    Cooler { hot: usize },
}

impl Placement {
    /// The hot stream index, or `None` for a heater.
    #[must_use]
    pub fn hot(&self) -> Option<usize> {
        match *self {
            Self::Cell { hot, .. } | Self::Cooler { hot } => Some(hot),
            Self::Heater { .. } => None,
        }
    }

    /// The cold stream index, or `None` for a cooler.
    #[must_use]
    pub fn cold(&self) -> Option<usize> {
        match *self {
            Self::Cell { cold, .. } | Self::Heater { cold } => Some(cold),
            Self::Cooler { .. } => None,
        }
    }

    /// Whether this is a heater or cooler.
    #[must_use]
    pub fn is_utility(&self) -> bool {
        !matches!(self, Self::Cell { .. })
    }

    /// Ordering key with missing indices sorted last on each axis.
    pub(crate) fn sort_key(&self) -> (usize, usize) {
        (
            self.hot().unwrap_or(usize::MAX),
            self.cold().unwrap_or(usize::MAX),
        )
    }
}

/// A heat exchanger and the heat it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exchanger {
    pub placement: Placement,
    pub load: Power,
}

impl Exchanger {
    pub(crate) fn cell(hot: usize, cold: usize, load: Power) -> Self {
        Self {
            placement: Placement::Cell { hot, cold },
            load,
        }
    }

    pub(crate) fn heater(cold: usize, load: Power) -> Self {
        Self {
            placement: Placement::Heater { cold },
            load,
        }
    }

    pub(crate) fn cooler(hot: usize, load: Power) -> Self {
        Self {
            placement: Placement::Cooler { hot },
            load,
        }
    }

    /// A utility closing a stream on `side`: a cooler for hot, a heater for cold.
    pub(crate) fn utility(side: Side, index: usize, load: Power) -> Self {
        match side {
            Side::Hot => Self::cooler(index, load),
            Side::Cold => Self::heater(index, load),
        }
    }

    #[must_use]
    pub fn hot(&self) -> Option<usize> {
        self.placement.hot()
    }

    #[must_use]
    pub fn cold(&self) -> Option<usize> {
        self.placement.cold()
    }

    /// Whether this exchanger touches stream `index` on `side`.
    #[must_use]
    pub fn references(&self, side: Side, index: usize) -> bool {
        let end = match side {
            Side::Hot => self.hot(),
            Side::Cold => self.cold(),
        };
        end == Some(index)
    }
}
