//! Input-validation failures. Numerical divergence during stepping is not an error
//! and never shows up here; NaN and infinity flow into the trajectory instead.

use thiserror::Error;

/// Errors surfaced before any stepping starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// `dt` was zero, negative, NaN or infinite.
    #[error("time step must be finite and positive, got {0}")]
    BadTimeStep(f64),

    /// `t_max` was zero, negative, NaN or infinite.
    #[error("simulation duration must be finite and positive, got {0}")]
    BadDuration(f64),

    /// `t_max / dt` asks for more samples than the runner will allocate.
    #[error("{t_max} s at dt = {dt} s exceeds the limit of {limit} samples")]
    TooManySamples {
        /// Requested step.
        dt: f64,
        /// Requested duration.
        t_max: f64,
        /// Sample ceiling.
        limit: usize,
    },

    /// The integrator needs a longer time grid than was requested.
    #[error("{method} needs at least {required} samples, the time grid has {found}")]
    TooFewSamples {
        /// Integrator name.
        method: &'static str,
        /// Minimum sample count for that integrator.
        required: usize,
        /// Samples in the requested grid.
        found: usize,
    },

    /// Output buffers handed to an integrator differ in length.
    #[error("position buffer has {positions} samples but velocity buffer has {velocities}")]
    MismatchedBuffers {
        /// Position buffer length.
        positions: usize,
        /// Velocity buffer length.
        velocities: usize,
    },

    /// A mass (or the oscillator stiffness) was not finite and positive.
    #[error("{name} must be finite and positive, got {value}")]
    BadParameter {
        /// Which parameter.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Reference radius not finite and positive.
    #[error("radius must be finite and positive, got {0} m")]
    BadRadius(f64),

    /// Eccentricity outside `[0, 1)`; parabolic and hyperbolic orbits need another recipe.
    #[error("eccentricity must lie in [0, 1), got {0}")]
    BadEccentricity(f64),

    /// Escape factor not strictly above 1.
    #[error("escape factor must be greater than 1, got {0}")]
    BadEscapeFactor(f64),

    /// Unknown integrator name.
    #[error("unknown integration method '{0}' (expected euler or verlet)")]
    UnknownMethod(String),

    /// Unknown central body name.
    #[error("unknown central body '{0}'")]
    UnknownBody(String),

    /// Unknown scenario name.
    #[error("unknown scenario '{0}' (expected free-fall, circular, elliptical or escape)")]
    UnknownScenario(String),
}

/// Result alias for the physics crate.
pub type SimResult<T> = Result<T, SimulationError>;

pub(crate) fn positive(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::BadParameter { name, value })
    }
}
