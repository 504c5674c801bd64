//! Shared interface for the fixed-step integrators and a runtime selector over them.
use std::fmt;
use std::str::FromStr;

use marslander_utils::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::{SimResult, SimulationError};
use crate::euler::Euler;
use crate::force::ForceModel;
use crate::state::State;
use crate::verlet::Verlet;

/// A fixed-step scheme that fills pre-allocated trajectory buffers.
///
/// Implementations hold no state between calls. Sample `i` of the output is the
/// state at `t = i·dt`, as far as the scheme can tell.
pub trait Integrator {
    /// Short lowercase name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fewest samples the scheme can produce.
    fn min_samples(&self) -> usize;

    /// Integrates from `initial`, writing one sample per buffer slot.
    ///
    /// Both buffers must have the same length, at least `min_samples()`.
    fn integrate<C, F>(
        &self,
        force: &F,
        initial: State<C>,
        dt: f64,
        positions: &mut [C],
        velocities: &mut [C],
    ) -> SimResult<()>
    where
        C: Coordinate,
        F: ForceModel<C>;
}

pub(crate) fn check_buffers<C>(
    method: &'static str,
    required: usize,
    positions: &[C],
    velocities: &[C],
) -> SimResult<usize> {
    if positions.len() != velocities.len() {
        return Err(SimulationError::MismatchedBuffers {
            positions: positions.len(),
            velocities: velocities.len(),
        });
    }
    if positions.len() < required {
        return Err(SimulationError::TooFewSamples {
            method,
            required,
            found: positions.len(),
        });
    }
    Ok(positions.len())
}

/// Integrator picked at runtime (config file, command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Forward Euler.
    Euler,
    /// Position (Störmer) Verlet.
    Verlet,
}

impl Method {
    /// Both methods, Euler first.
    pub const ALL: [Method; 2] = [Method::Euler, Method::Verlet];

    /// Three-letter tag used in printed output.
    pub fn tag(&self) -> &'static str {
        match self {
            Method::Euler => "EUL",
            Method::Verlet => "VER",
        }
    }
}

impl Integrator for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Euler => Euler.name(),
            Method::Verlet => Verlet.name(),
        }
    }

    fn min_samples(&self) -> usize {
        match self {
            Method::Euler => Euler.min_samples(),
            Method::Verlet => Verlet.min_samples(),
        }
    }

    fn integrate<C, F>(
        &self,
        force: &F,
        initial: State<C>,
        dt: f64,
        positions: &mut [C],
        velocities: &mut [C],
    ) -> SimResult<()>
    where
        C: Coordinate,
        F: ForceModel<C>,
    {
        match self {
            Method::Euler => Euler.integrate(force, initial, dt, positions, velocities),
            Method::Verlet => Verlet.integrate(force, initial, dt, positions, velocities),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "verlet" => Ok(Method::Verlet),
            _ => Err(SimulationError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("euler".parse::<Method>(), Ok(Method::Euler));
        assert_eq!(" Verlet".parse::<Method>(), Ok(Method::Verlet));
        assert_eq!(
            "rk4".parse::<Method>(),
            Err(SimulationError::UnknownMethod("rk4".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn dispatch_matches_concrete_integrators() {
        assert_eq!(Method::Euler.min_samples(), 1);
        assert_eq!(Method::Verlet.min_samples(), 3);
        assert_eq!(Method::Verlet.tag(), "VER");
    }

    #[test]
    fn buffer_check_reports_mismatch_before_length() {
        let positions = [0.0; 4];
        let velocities = [0.0; 2];
        assert_eq!(
            check_buffers("verlet", 3, &positions, &velocities),
            Err(SimulationError::MismatchedBuffers {
                positions: 4,
                velocities: 2
            })
        );
        assert_eq!(
            check_buffers("verlet", 3, &positions[..2], &velocities),
            Err(SimulationError::TooFewSamples {
                method: "verlet",
                required: 3,
                found: 2
            })
        );
    }
}
