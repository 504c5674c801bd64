//! Force laws, always handed to the integrators as accelerations.
use marslander_utils::{Coordinate, Vec3D};

use crate::error::{positive, SimResult};
use crate::params::PhysicalParameters;

/// Acceleration as a pure function of position.
pub trait ForceModel<C: Coordinate> {
    /// Acceleration of the moving mass at `position`.
    fn acceleration(&self, position: C) -> C;
}

/// Inverse-square attraction towards a body fixed at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    params: PhysicalParameters,
}

impl Gravity {
    /// Gravity for the masses in `params`.
    pub fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }

    /// Parameters this model was built from.
    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn force(&self, position: Vec3D) -> Vec3D {
        //! force on the lander: -G·M·m·x / r³.
        //! Zero at the origin rather than a division by zero.
        let r = position.magnitude();
        if r == 0.0 {
            return Vec3D::ZERO;
        }
        let p = &self.params;
        position.scale(-p.gravitational_constant() * p.mass_body() * p.mass_point() / r.powi(3))
    }
}

impl ForceModel<Vec3D> for Gravity {
    fn acceleration(&self, position: Vec3D) -> Vec3D {
        self.force(position) / self.params.mass_point()
    }
}

/// Linear restoring force `-k·x` on a mass `m`, the 1-D oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    stiffness: f64,
    mass: f64,
}

impl Spring {
    /// Validated spring; both values must be finite and positive.
    pub fn new(stiffness: f64, mass: f64) -> SimResult<Self> {
        Ok(Self {
            stiffness: positive("stiffness", stiffness)?,
            mass: positive("mass", mass)?,
        })
    }

    /// Angular frequency sqrt(k/m) in rad/s.
    pub fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Total energy per unit mass at `(x, v)`; conserved by the exact motion.
    pub fn specific_energy(&self, x: f64, v: f64) -> f64 {
        0.5 * v * v + 0.5 * self.stiffness / self.mass * x * x
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 1.0,
            mass: 1.0,
        }
    }
}

impl ForceModel<f64> for Spring {
    fn acceleration(&self, position: f64) -> f64 {
        -self.stiffness * position / self.mass
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::params::G;

    #[test]
    fn zero_position_gives_exact_zero() {
        let gravity = Gravity::new(PhysicalParameters::default());
        let accel = gravity.acceleration(Vec3D::ZERO);
        assert_eq!(accel, Vec3D::ZERO);
        assert!(accel.is_finite());
    }

    #[test]
    fn points_towards_origin_with_inverse_square_magnitude() {
        let params = PhysicalParameters::default();
        let gravity = Gravity::new(params);
        let r = 1e7;
        let accel = gravity.acceleration(Vec3D(0.0, r, 0.0));

        assert_eq!(accel.0, 0.0);
        assert_eq!(accel.2, 0.0);
        assert!(accel.1 < 0.0, "expected pull towards -y, got {accel:?}");
        assert_relative_eq!(accel.magnitude(), G * 6.42e23 / (r * r), max_relative = 1e-12);
    }

    #[test]
    fn acceleration_does_not_depend_on_lander_mass() {
        let light = Gravity::new(PhysicalParameters::new(6.42e23, 1.0).unwrap());
        let heavy = Gravity::new(PhysicalParameters::new(6.42e23, 2500.0).unwrap());
        let x = Vec3D(3e6, -4e6, 1e6);

        let a_light = light.acceleration(x);
        let a_heavy = heavy.acceleration(x);
        assert_relative_eq!(a_light.0, a_heavy.0, max_relative = 1e-12);
        assert_relative_eq!(a_light.1, a_heavy.1, max_relative = 1e-12);
        assert_relative_eq!(a_light.2, a_heavy.2, max_relative = 1e-12);

        // force scales with the lander mass though
        assert_relative_eq!(
            heavy.force(x).magnitude(),
            2500.0 * light.force(x).magnitude(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn spring_restores_towards_zero() {
        let spring = Spring::new(4.0, 2.0).unwrap();
        assert_eq!(spring.acceleration(1.5), -3.0);
        assert_eq!(spring.acceleration(0.0), 0.0);
        assert_relative_eq!(spring.angular_frequency(), 2.0f64.sqrt());
    }

    #[test]
    fn spring_rejects_bad_parameters() {
        assert!(Spring::new(0.0, 1.0).is_err());
        assert!(Spring::new(1.0, f64::NAN).is_err());
    }
}
