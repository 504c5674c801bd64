//! Conservation checks and display quantities computed from finished trajectories.
use marslander_utils::Vec3D;

use crate::state::{State, Trajectory};

/// Specific orbital energy ‖v‖²/2 − μ/‖x‖ in J/kg.
pub fn specific_energy(state: &State<Vec3D>, mu: f64) -> f64 {
    0.5 * state.velocity.magnitude_squared() - mu / state.position.magnitude()
}

/// Specific angular momentum x × v.
pub fn angular_momentum(state: &State<Vec3D>) -> Vec3D {
    state.position.cross(&state.velocity)
}

/// Height above a spherical surface, floored at zero. NaN stays NaN.
pub fn altitude(position: &Vec3D, body_radius: f64) -> f64 {
    let height = position.magnitude() - body_radius;
    if height < 0.0 {
        0.0
    } else {
        height
    }
}

/// `altitude` for every sample of a trajectory.
pub fn altitudes(trajectory: &Trajectory<Vec3D>, body_radius: f64) -> Vec<f64> {
    trajectory
        .positions()
        .iter()
        .map(|position| altitude(position, body_radius))
        .collect()
}

/// How far the energy proxy wandered over a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyDrift {
    /// Energy at the first sample.
    pub initial: f64,
    /// Energy at the last sample.
    pub last: f64,
    /// Largest |E_i − E_0| / |E_0| over all samples.
    pub max_relative: f64,
}

impl EnergyDrift {
    pub fn measure(trajectory: &Trajectory<Vec3D>, mu: f64) -> Option<Self> {
        //! None for an empty trajectory. NaN samples make `max_relative` NaN.
        let mut energies = trajectory
            .iter()
            .map(|(_, state)| specific_energy(&state, mu));
        let initial = energies.next()?;

        let mut last = initial;
        let mut max_relative: f64 = 0.0;
        for energy in energies {
            let relative = ((energy - initial) / initial).abs();
            if relative.is_nan() || relative > max_relative {
                max_relative = relative;
            }
            last = energy;
            if max_relative.is_nan() {
                break;
            }
        }

        Some(Self {
            initial,
            last,
            max_relative,
        })
    }

    pub fn final_relative(&self) -> f64 {
        //! signed (E_last − E_0) / |E_0|.
        (self.last - self.initial) / self.initial.abs()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::params::PhysicalParameters;
    use crate::runner::{RunSettings, SimulationRunner};
    use crate::scenario::Scenario;
    use crate::verlet::Verlet;

    #[test]
    fn circular_energy_is_minus_half_v_squared() {
        let mu = PhysicalParameters::default().mu();
        let r = 8e6;
        let v = (mu / r).sqrt();
        let state = State::new(Vec3D(0.0, r, 0.0), Vec3D(v, 0.0, 0.0));
        assert_relative_eq!(specific_energy(&state, mu), -0.5 * v * v, max_relative = 1e-12);
    }

    #[test]
    fn angular_momentum_of_prograde_start_points_down_z() {
        let state = State::new(Vec3D(0.0, 2.0, 0.0), Vec3D(3.0, 0.0, 0.0));
        assert_eq!(angular_momentum(&state), Vec3D(0.0, 0.0, -6.0));
    }

    #[test]
    fn altitude_clips_below_surface() {
        assert_eq!(altitude(&Vec3D(0.0, 4e6, 0.0), 3.39e6), 4e6 - 3.39e6);
        assert_eq!(altitude(&Vec3D(0.0, 1e6, 0.0), 3.39e6), 0.0);
        assert!(altitude(&Vec3D(f64::NAN, 0.0, 0.0), 3.39e6).is_nan());
    }

    #[test]
    fn drift_of_short_orbit_is_small() {
        let runner = SimulationRunner::new(PhysicalParameters::default());
        let trajectory = runner
            .run_scenario(
                &Verlet,
                &Scenario::CircularOrbit { radius: 8e6 },
                RunSettings::new(1.0, 1000.0),
            )
            .unwrap();
        let drift = EnergyDrift::measure(&trajectory, runner.params().mu()).unwrap();
        assert!(drift.max_relative < 1e-5, "{drift:?}");
        assert!(drift.final_relative().abs() <= drift.max_relative);
        assert_eq!(altitudes(&trajectory, 3.39e6).len(), trajectory.len());
    }
}
