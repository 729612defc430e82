//! Unit direction vector.

use super::XYZ;

/// A unit vector (direction) in 3D space.
/// Always normalized (magnitude = 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dir {
    coord: XYZ,
}

impl Default for Dir {
    fn default() -> Self {
        Self::dz()
    }
}

impl Dir {
    /// X direction (1, 0, 0).
    pub const fn dx() -> Self {
        Self { coord: XYZ::from_coords(1.0, 0.0, 0.0) }
    }

    /// Y direction (0, 1, 0).
    pub const fn dy() -> Self {
        Self { coord: XYZ::from_coords(0.0, 1.0, 0.0) }
    }

    /// Z direction (0, 0, 1).
    pub const fn dz() -> Self {
        Self { coord: XYZ::from_coords(0.0, 0.0, 1.0) }
    }

    /// Creates a direction from XYZ (normalizes).
    /// Returns None if vector is too small.
    pub fn from_xyz(xyz: XYZ) -> Option<Self> {
        xyz.normalized().map(|coord| Self { coord })
    }

    /// Creates a direction from coordinates (normalizes).
    /// Returns None if vector is too small.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Option<Self> {
        Self::from_xyz(XYZ::from_coords(x, y, z))
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
    pub fn dot(&self, other: &Dir) -> f64 {
        self.coord.dot(&other.coord)
    }

    /// Cross product, None when the directions are parallel.
    pub fn crossed(&self, other: &Dir) -> Option<Dir> {
        Dir::from_xyz(self.coord.crossed(&other.coord))
    }

    /// True when the angle to `other` (or its opposite) is below the tolerance.
    pub fn is_parallel(&self, other: &Dir, angular_tolerance: f64) -> bool {
        self.coord.crossed(&other.coord).modulus() <= angular_tolerance
    }

    pub fn reversed(&self) -> Dir {
        Self { coord: -self.coord }
    }
}

impl std::ops::Neg for Dir {
    type Output = Dir;
    fn neg(self) -> Dir {
        self.reversed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords_normalizes() {
        let d = Dir::from_coords(0.0, 3.0, 4.0).unwrap();
        assert!((d.y() - 0.6).abs() < 1e-15);
        assert!((d.z() - 0.8).abs() < 1e-15);
        assert!(Dir::from_coords(0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_parallel_and_cross() {
        assert!(Dir::dz().is_parallel(&Dir::dz().reversed(), 1e-12));
        assert!(!Dir::dz().is_parallel(&Dir::dx(), 1e-6));
        assert_eq!(Dir::dx().crossed(&Dir::dy()), Some(Dir::dz()));
        assert!(Dir::dx().crossed(&-Dir::dx()).is_none());
    }
}
