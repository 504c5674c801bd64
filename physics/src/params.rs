//! Physical constants for one simulation run.
use crate::bodies::{CentralBody, MARS};
use crate::error::{positive, SimResult};

/// Gravitational constant (m³·kg⁻¹·s⁻²).
pub const G: f64 = 6.67430e-11;

/// Masses and the gravitational constant for a two-body run. Never mutated once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    mass_body: f64,
    mass_point: f64,
    gravitational_constant: f64,
}

impl PhysicalParameters {
    /// Validated constructor using the standard value of `G`.
    pub fn new(mass_body: f64, mass_point: f64) -> SimResult<Self> {
        Self::with_constant(mass_body, mass_point, G)
    }

    /// Validated constructor with an explicit gravitational constant.
    pub fn with_constant(
        mass_body: f64,
        mass_point: f64,
        gravitational_constant: f64,
    ) -> SimResult<Self> {
        Ok(Self {
            mass_body: positive("mass_body", mass_body)?,
            mass_point: positive("mass_point", mass_point)?,
            gravitational_constant: positive("gravitational_constant", gravitational_constant)?,
        })
    }

    /// A lander of `mass_point` kg around `body`.
    pub fn around(body: &CentralBody, mass_point: f64) -> SimResult<Self> {
        Self::new(body.mass, mass_point)
    }

    /// Mass of the attracting body in kg.
    pub fn mass_body(&self) -> f64 {
        self.mass_body
    }

    /// Mass of the lander in kg.
    pub fn mass_point(&self) -> f64 {
        self.mass_point
    }

    /// G used for this run.
    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// Standard gravitational parameter μ = G·M.
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.mass_body
    }
}

impl Default for PhysicalParameters {
    /// A 1 kg lander around Mars.
    fn default() -> Self {
        Self {
            mass_body: MARS.mass,
            mass_point: 1.0,
            gravitational_constant: G,
        }
    }
}
