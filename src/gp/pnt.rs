//! 3D point.

use super::{Vec3, XYZ};

/// A 3D cartesian point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pnt {
    coord: XYZ,
}

impl Pnt {
    /// Creates a point at origin (0, 0, 0).
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

    /// Returns true if distance to other <= linear_tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Pnt, linear_tolerance: f64) -> bool {
        self.distance(other) <= linear_tolerance
    }

    #[inline]
    pub fn distance(&self, other: &Pnt) -> f64 {
        self.square_distance(other).sqrt()
    }

    /// Square distance, the quantity every extremum reports.
    #[inline]
    pub fn square_distance(&self, other: &Pnt) -> f64 {
        (self.coord - other.coord).square_modulus()
    }

    /// Returns this point moved by `v`.
    #[inline]
    pub fn translated(&self, v: &Vec3) -> Pnt {
        Pnt::from_xyz(self.coord + *v.xyz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_distance() {
        let a = Pnt::from_coords(1.0, 2.0, 3.0);
        let b = Pnt::from_coords(4.0, 6.0, 3.0);
        assert_eq!(a.square_distance(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
        assert!(a.is_equal(&Pnt::from_coords(1.0, 2.0, 3.0 + 1e-9), 1e-7));
    }

    #[test]
    fn test_translated() {
        let p = Pnt::new().translated(&Vec3::from_coords(0.0, 0.0, 5.0));
        assert_eq!(p, Pnt::from_coords(0.0, 0.0, 5.0));
    }
}
