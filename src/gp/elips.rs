//! Ellipse in 3D space.

use super::{Ax3, Pnt, Vec3};
use crate::{ExtremaError, Result};

/// An ellipse in 3D space, `P(u) = C + a cos u X + b sin u Y` with `a >= b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elips {
    pos: Ax3,
    major_radius: f64,
    minor_radius: f64,
}

impl Elips {
    /// Creates an ellipse. The major axis lies along the frame's X direction.
    pub fn from_ax3(ax3: Ax3, major_radius: f64, minor_radius: f64) -> Result<Self> {
        if !(minor_radius.is_finite() && minor_radius >= 0.0 && major_radius >= minor_radius) {
            return Err(ExtremaError::InvalidGeometry(format!(
                "Elips: need 0 <= minor <= major, got major {} minor {}",
                major_radius, minor_radius
            )));
        }
        if !major_radius.is_finite() {
            return Err(ExtremaError::InvalidGeometry(
                "Elips: major radius must be finite".to_string(),
            ));
        }
        Ok(Self {
            pos: ax3,
            major_radius,
            minor_radius,
        })
    }

    #[inline]
    pub const fn major_radius(&self) -> f64 {
        self.major_radius
    }

    #[inline]
    pub const fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    #[inline]
    pub const fn location(&self) -> &Pnt {
        self.pos.location()
    }

    #[inline]
    pub const fn position(&self) -> &Ax3 {
        &self.pos
    }

    fn planar(&self, a: f64, b: f64) -> Vec3 {
        Vec3::from_dir(self.pos.xdirection()) * a + Vec3::from_dir(self.pos.ydirection()) * b
    }

    pub fn value(&self, u: f64) -> Pnt {
        let (s, c) = u.sin_cos();
        self.location()
            .translated(&self.planar(self.major_radius * c, self.minor_radius * s))
    }

    pub fn d1(&self, u: f64) -> (Pnt, Vec3) {
        let (s, c) = u.sin_cos();
        (
            self.value(u),
            self.planar(-self.major_radius * s, self.minor_radius * c),
        )
    }

    pub fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        let (s, c) = u.sin_cos();
        let (p, d1) = self.d1(u);
        (p, d1, self.planar(-self.major_radius * c, -self.minor_radius * s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_ellipse_vertices() {
        let elips = Elips::from_ax3(Ax3::standard(), 3.0, 1.0).unwrap();
        assert!(elips.value(0.0).distance(&Pnt::from_coords(3.0, 0.0, 0.0)) < 1e-12);
        assert!(elips.value(PI / 2.0).distance(&Pnt::from_coords(0.0, 1.0, 0.0)) < 1e-12);
    }

    #[test]
    fn test_ellipse_rejects_swapped_radii() {
        assert!(Elips::from_ax3(Ax3::standard(), 1.0, 3.0).is_err());
    }
}
