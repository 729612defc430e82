//! 3D vector.

use std::ops::{Add, Mul, Neg, Sub};
use super::{Dir, Pnt, XYZ};

/// A 3D vector in cartesian space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    coord: XYZ,
}

impl Vec3 {
    /// Creates a null vector.
    #[inline]
    pub const fn new() -> Self {
        Self { coord: XYZ::new() }
    }

    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    /// Creates a vector from two points (P1 -> P2).
    #[inline]
    pub fn from_points(p1: &Pnt, p2: &Pnt) -> Self {
        Self {
            coord: *p2.xyz() - *p1.xyz(),
        }
    }

    /// Unit vector along a direction.
    #[inline]
    pub fn from_dir(d: &Dir) -> Self {
        Self { coord: *d.xyz() }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.coord.y()
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.coord.z()
    }

    #[inline]
    pub const fn xyz(&self) -> &XYZ {
        &self.coord
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.coord.modulus()
    }

    #[inline]
    pub fn square_magnitude(&self) -> f64 {
        self.coord.square_modulus()
    }

    #[inline]
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.coord.dot(&other.coord)
    }

    #[inline]
    pub fn crossed(&self, other: &Vec3) -> Vec3 {
        Vec3::from_xyz(self.coord.crossed(&other.coord))
    }

    #[inline]
    pub fn multiplied(&self, scalar: f64) -> Vec3 {
        Vec3::from_xyz(self.coord * scalar)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::from_xyz(self.coord + other.coord)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::from_xyz(self.coord - other.coord)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, scalar: f64) -> Vec3 {
        self.multiplied(scalar)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::from_xyz(-self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let v = Vec3::from_points(&Pnt::from_coords(1.0, 1.0, 1.0), &Pnt::from_coords(2.0, 3.0, 4.0));
        assert_eq!(v, Vec3::from_coords(1.0, 2.0, 3.0));
        assert_eq!(v.square_magnitude(), 14.0);
    }

    #[test]
    fn test_dot_cross() {
        let a = Vec3::from_coords(1.0, 0.0, 0.0);
        let b = Vec3::from_coords(0.0, 2.0, 0.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.crossed(&b), Vec3::from_coords(0.0, 0.0, 2.0));
        assert_eq!((a + b) * 2.0, Vec3::from_coords(2.0, 4.0, 0.0));
    }
}
