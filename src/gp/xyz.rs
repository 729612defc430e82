//! 3D coordinate triplet.
//!
//! Storage type behind [`Pnt`](super::Pnt), [`Vec3`](super::Vec3) and
//! [`Dir`](super::Dir). All the algebra the extrema solvers need lives here.

use std::ops::{Add, Mul, Neg, Sub};
use crate::precision;

/// 3D cartesian coordinate entity {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XYZ {
    x: f64,
    y: f64,
    z: f64,
}

impl XYZ {
    /// Creates an XYZ with zero coordinates.
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates an XYZ with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all three coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Length of the triplet seen as a vector.
    #[inline]
    pub fn modulus(&self) -> f64 {
        self.square_modulus().sqrt()
    }

    #[inline]
    pub fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn dot(&self, other: &XYZ) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product `self ^ other`.
    #[inline]
    pub fn crossed(&self, other: &XYZ) -> XYZ {
        XYZ {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the normalized triplet, or None when the modulus is below
    /// [`precision::CONFUSION`].
    pub fn normalized(&self) -> Option<XYZ> {
        let d = self.modulus();
        if d <= precision::CONFUSION {
            return None;
        }
        Some(*self * (1.0 / d))
    }

    /// True when every coordinate is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for XYZ {
    type Output = XYZ;
    #[inline]
    fn add(self, other: XYZ) -> XYZ {
        XYZ::from_coords(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for XYZ {
    type Output = XYZ;
    #[inline]
    fn sub(self, other: XYZ) -> XYZ {
        XYZ::from_coords(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn mul(self, scalar: f64) -> XYZ {
        XYZ::from_coords(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<XYZ> for f64 {
    type Output = XYZ;
    #[inline]
    fn mul(self, xyz: XYZ) -> XYZ {
        xyz * self
    }
}

impl Neg for XYZ {
    type Output = XYZ;
    #[inline]
    fn neg(self) -> XYZ {
        XYZ::from_coords(-self.x, -self.y, -self.z)
    }
}
