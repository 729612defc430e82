//! Line in 3D space.

use super::{Ax1, Dir, Pnt, Vec3};

/// An infinite line in 3D space, `P(u) = O + u * D`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lin {
    pos: Ax1,
}

impl Lin {
    /// Creates a line from an axis.
    #[inline]
    pub const fn from_ax1(a1: Ax1) -> Self {
        Self { pos: a1 }
    }

    /// Creates a line passing through `p` with direction `v`.
    #[inline]
    pub const fn from_pnt_dir(p: Pnt, v: Dir) -> Self {
        Self { pos: Ax1::new(p, v) }
    }

    #[inline]
    pub const fn position(&self) -> &Ax1 {
        &self.pos
    }

    #[inline]
    pub const fn location(&self) -> &Pnt {
        self.pos.location()
    }

    #[inline]
    pub const fn direction(&self) -> &Dir {
        self.pos.direction()
    }

    pub fn value(&self, u: f64) -> Pnt {
        Pnt::from_xyz(*self.location().xyz() + *self.direction().xyz() * u)
    }

    pub fn d1(&self, u: f64) -> (Pnt, Vec3) {
        (self.value(u), Vec3::from_dir(self.direction()))
    }

    pub fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        let (p, d1) = self.d1(u);
        (p, d1, Vec3::new())
    }

    /// Parameter of the orthogonal projection of `p` onto the line.
    pub fn parameter(&self, p: &Pnt) -> f64 {
        Vec3::from_points(self.location(), p).dot(&Vec3::from_dir(self.direction()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_value_and_parameter() {
        let lin = Lin::from_pnt_dir(Pnt::from_coords(-10.0, 0.0, 0.0), Dir::dx());
        let p = lin.value(10.0);
        assert!(p.distance(&Pnt::new()) < 1e-15);
        assert!((lin.parameter(&Pnt::from_coords(2.0, 7.0, 1.0)) - 12.0).abs() < 1e-12);
        let (_, d1, d2) = lin.d2(3.0);
        assert_eq!(d1.magnitude(), 1.0);
        assert_eq!(d2.magnitude(), 0.0);
    }
}
