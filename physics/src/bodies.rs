//! Catalogue of central bodies the lander can fall towards or orbit.
use crate::error::{SimResult, SimulationError};

/// Mass and mean radius of an attracting body. The radius is only used for altitude display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    /// Display name.
    pub name: &'static str,
    /// Mass in kg.
    pub mass: f64,
    /// Mean radius in m.
    pub radius: f64,
}

/// Mars. Default body for every scenario.
pub const MARS: CentralBody = CentralBody {
    name: "Mars",
    mass: 6.42e23,
    radius: 3.39e6,
};

/// Earth.
pub const EARTH: CentralBody = CentralBody {
    name: "Earth",
    mass: 5.972e24,
    radius: 6.371e6,
};

/// Earth's moon.
pub const MOON: CentralBody = CentralBody {
    name: "Moon",
    mass: 7.342e22,
    radius: 1.7374e6,
};

/// Every body known to `CentralBody::by_name`.
pub const BODIES: [CentralBody; 3] = [MARS, EARTH, MOON];

impl CentralBody {
    pub fn by_name(name: &str) -> SimResult<Self> {
        //! case-insensitive lookup in `BODIES`.
        BODIES
            .iter()
            .find(|body| body.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| SimulationError::UnknownBody(name.to_string()))
    }
}

impl Default for CentralBody {
    fn default() -> Self {
        MARS
    }
}
