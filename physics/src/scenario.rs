//! Initial conditions for the four lander scenarios.
//!
//! Every recipe places the lander on the +y axis at its reference radius and, when it
//! moves at all, sends it along +x, tangential to the radius vector.
use std::fmt;
use std::str::FromStr;

use marslander_utils::Vec3D;
use serde::{Deserialize, Serialize};

use crate::error::{SimResult, SimulationError};
use crate::params::PhysicalParameters;
use crate::runner::RunSettings;
use crate::state::State;

/// Speed of a circular orbit of radius `r` around a body with parameter `mu`.
pub fn circular_velocity(mu: f64, r: f64) -> f64 {
    (mu / r).sqrt()
}

/// Speed needed to escape from radius `r`.
pub fn escape_velocity(mu: f64, r: f64) -> f64 {
    (2.0 * mu / r).sqrt()
}

/// Vis-viva speed at periapsis `r_p` of an ellipse with eccentricity `e`.
pub fn periapsis_velocity(mu: f64, r_p: f64, e: f64) -> SimResult<f64> {
    if !(0.0..1.0).contains(&e) {
        return Err(SimulationError::BadEccentricity(e));
    }
    let a = r_p / (1.0 - e);
    Ok((mu * (2.0 / r_p - 1.0 / a)).sqrt())
}

/// Named initial-condition recipe, consumed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scenario {
    /// Released at rest.
    FreeFall {
        /// Distance from the body centre in m.
        radius: f64,
    },
    /// Circular orbit speed, tangential.
    CircularOrbit {
        /// Orbit radius in m.
        radius: f64,
    },
    /// Started at periapsis of an ellipse.
    EllipticalOrbit {
        /// Periapsis distance in m.
        periapsis: f64,
        /// Eccentricity, `0 <= e < 1`.
        eccentricity: f64,
    },
    /// Faster than escape speed, tangential.
    HyperbolicEscape {
        /// Starting distance in m.
        radius: f64,
        /// Multiple of the local escape speed, above 1.
        escape_factor: f64,
    },
}

impl Scenario {
    pub fn initial_state(&self, params: &PhysicalParameters) -> SimResult<State<Vec3D>> {
        //! derives the t = 0 state. Validates radius, eccentricity and escape factor.
        let mu = params.mu();
        let (radius, speed) = match *self {
            Scenario::FreeFall { radius } => (checked_radius(radius)?, 0.0),
            Scenario::CircularOrbit { radius } => {
                let r = checked_radius(radius)?;
                (r, circular_velocity(mu, r))
            }
            Scenario::EllipticalOrbit {
                periapsis,
                eccentricity,
            } => {
                let r = checked_radius(periapsis)?;
                (r, periapsis_velocity(mu, r, eccentricity)?)
            }
            Scenario::HyperbolicEscape {
                radius,
                escape_factor,
            } => {
                let r = checked_radius(radius)?;
                if !(escape_factor.is_finite() && escape_factor > 1.0) {
                    return Err(SimulationError::BadEscapeFactor(escape_factor));
                }
                (r, escape_factor * escape_velocity(mu, r))
            }
        };

        Ok(State::new(Vec3D(0.0, radius, 0.0), Vec3D(speed, 0.0, 0.0)))
    }

    /// Which recipe this is.
    pub fn kind(&self) -> ScenarioKind {
        match self {
            Scenario::FreeFall { .. } => ScenarioKind::FreeFall,
            Scenario::CircularOrbit { .. } => ScenarioKind::Circular,
            Scenario::EllipticalOrbit { .. } => ScenarioKind::Elliptical,
            Scenario::HyperbolicEscape { .. } => ScenarioKind::Escape,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        ScenarioKind::FreeFall.preset()
    }
}

fn checked_radius(radius: f64) -> SimResult<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(SimulationError::BadRadius(radius))
    }
}

/// Scenario names with their stock parameters and run lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    /// 10 000 km drop, 1000 s at 1 s.
    FreeFall,
    /// 8000 km circular orbit, 1000 s at 1 s.
    Circular,
    /// e = 0.5 with 8000 km periapsis, 20 000 s at 10 s.
    Elliptical,
    /// 1.1 × escape speed from 5000 km, 20 000 s at 1 s.
    Escape,
}

impl ScenarioKind {
    /// All kinds, in presentation order.
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::FreeFall,
        ScenarioKind::Circular,
        ScenarioKind::Elliptical,
        ScenarioKind::Escape,
    ];

    /// The stock recipe for this kind.
    pub fn preset(&self) -> Scenario {
        match self {
            ScenarioKind::FreeFall => Scenario::FreeFall { radius: 10e6 },
            ScenarioKind::Circular => Scenario::CircularOrbit { radius: 8e6 },
            ScenarioKind::Elliptical => Scenario::EllipticalOrbit {
                periapsis: 8e6,
                eccentricity: 0.5,
            },
            ScenarioKind::Escape => Scenario::HyperbolicEscape {
                radius: 5e6,
                escape_factor: 1.1,
            },
        }
    }

    /// Step and duration the stock recipe is run with.
    pub fn default_run(&self) -> RunSettings {
        match self {
            ScenarioKind::FreeFall | ScenarioKind::Circular => RunSettings::new(1.0, 1000.0),
            ScenarioKind::Elliptical => RunSettings::new(10.0, 20_000.0),
            ScenarioKind::Escape => RunSettings::new(1.0, 20_000.0),
        }
    }

    /// Command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FreeFall => "free-fall",
            ScenarioKind::Circular => "circular",
            ScenarioKind::Elliptical => "elliptical",
            ScenarioKind::Escape => "escape",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ScenarioKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| SimulationError::UnknownScenario(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::params::G;

    const MU_MARS: f64 = G * 6.42e23;

    #[test]
    fn free_fall_starts_at_rest_on_y_axis() {
        let state = ScenarioKind::FreeFall
            .preset()
            .initial_state(&PhysicalParameters::default())
            .unwrap();
        assert_eq!(state.position, Vec3D(0.0, 10e6, 0.0));
        assert_eq!(state.velocity, Vec3D::ZERO);
    }

    #[test]
    fn circular_speed_is_tangential() {
        let state = Scenario::CircularOrbit { radius: 8e6 }
            .initial_state(&PhysicalParameters::default())
            .unwrap();
        assert_eq!(state.position.dot(&state.velocity), 0.0);
        assert_relative_eq!(state.velocity.0, (MU_MARS / 8e6).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn elliptical_with_zero_eccentricity_is_circular() {
        for r in [3.5e6, 8e6, 2.2e7] {
            let circular = circular_velocity(MU_MARS, r);
            let elliptical = periapsis_velocity(MU_MARS, r, 0.0).unwrap();
            assert_relative_eq!(elliptical, circular, max_relative = 1e-12);
        }
    }

    #[test]
    fn periapsis_speed_is_between_circular_and_escape() {
        let r = 8e6;
        let v = periapsis_velocity(MU_MARS, r, 0.5).unwrap();
        assert!(v > circular_velocity(MU_MARS, r));
        assert!(v < escape_velocity(MU_MARS, r));
        // vis-viva at periapsis reduces to sqrt(mu (1 + e) / r_p)
        assert_relative_eq!(v, (MU_MARS * 1.5 / r).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn eccentricity_outside_unit_interval_rejected() {
        for e in [1.0, 1.5, -0.1, f64::NAN] {
            let result = Scenario::EllipticalOrbit {
                periapsis: 8e6,
                eccentricity: e,
            }
            .initial_state(&PhysicalParameters::default());
            assert!(
                matches!(result, Err(SimulationError::BadEccentricity(_))),
                "e = {e} gave {result:?}"
            );
        }
    }

    #[test]
    fn escape_speed_scaled_by_factor() {
        let state = ScenarioKind::Escape
            .preset()
            .initial_state(&PhysicalParameters::default())
            .unwrap();
        let expected = 1.1 * (2.0 * MU_MARS / 5e6).sqrt();
        assert_relative_eq!(state.velocity.magnitude(), expected, max_relative = 1e-12);
        assert_eq!(state.position, Vec3D(0.0, 5e6, 0.0));
    }

    #[test]
    fn escape_factor_must_exceed_one() {
        for factor in [1.0, 0.5, f64::INFINITY] {
            let result = Scenario::HyperbolicEscape {
                radius: 5e6,
                escape_factor: factor,
            }
            .initial_state(&PhysicalParameters::default());
            assert_eq!(result, Err(SimulationError::BadEscapeFactor(factor)));
        }
    }

    #[test]
    fn non_positive_radius_rejected() {
        let params = PhysicalParameters::default();
        let result = Scenario::FreeFall { radius: 0.0 }.initial_state(&params);
        assert_eq!(result, Err(SimulationError::BadRadius(0.0)));
        let result = Scenario::CircularOrbit { radius: -8e6 }.initial_state(&params);
        assert_eq!(result, Err(SimulationError::BadRadius(-8e6)));
    }

    #[test]
    fn kinds_parse_and_round_trip() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.name().parse::<ScenarioKind>(), Ok(kind));
            assert_eq!(kind.preset().kind(), kind);
        }
        assert_eq!("FREE_FALL".parse::<ScenarioKind>(), Ok(ScenarioKind::FreeFall));
        assert!("parabolic".parse::<ScenarioKind>().is_err());
    }

    #[test]
    fn stock_run_lengths() {
        assert_eq!(ScenarioKind::Elliptical.default_run(), RunSettings::new(10.0, 20_000.0));
        assert_eq!(ScenarioKind::FreeFall.default_run(), RunSettings::new(1.0, 1000.0));
    }
}
