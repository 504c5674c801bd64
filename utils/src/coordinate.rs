//! Arithmetic the integrators need from a position or velocity value.
//! Implemented for `Vec3D` (orbital scenarios) and `f64` (the 1-D oscillator).
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Vec3D;

/// A point in configuration space that can be stepped through time.
pub trait Coordinate:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Euclidean length.
    fn norm(&self) -> f64;

    /// True when no component is NaN or infinite.
    fn all_finite(&self) -> bool;
}

impl Coordinate for Vec3D {
    fn zero() -> Self {
        Vec3D::ZERO
    }

    fn norm(&self) -> f64 {
        self.magnitude()
    }

    fn all_finite(&self) -> bool {
        self.is_finite()
    }
}

impl Coordinate for f64 {
    fn zero() -> Self {
        0.0
    }

    fn norm(&self) -> f64 {
        self.abs()
    }

    fn all_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubled<C: Coordinate>(c: C) -> C {
        c + c
    }

    #[test]
    fn scalar_and_vector_share_interface() {
        assert_eq!(doubled(1.5), 3.0);
        assert_eq!(doubled(Vec3D(1.0, -2.0, 0.5)), Vec3D(2.0, -4.0, 1.0));
        assert_eq!(<f64 as Coordinate>::zero(), 0.0);
        assert_eq!(<Vec3D as Coordinate>::zero(), Vec3D::ZERO);
    }

    #[test]
    fn norm_is_length() {
        assert_eq!((-4.0f64).norm(), 4.0);
        assert_eq!(Vec3D(0.0, 3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn finiteness() {
        assert!(!f64::NAN.all_finite());
        assert!(2.0f64.all_finite());
        assert!(!Vec3D(0.0, f64::NEG_INFINITY, 0.0).all_finite());
    }
}
