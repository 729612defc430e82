//! Circle in 3D space.

use super::{Ax3, Pnt, Vec3};
use crate::{ExtremaError, Result};

/// A circle in 3D space, `P(u) = C + r (cos u X + sin u Y)`, periodic on `[0, 2π]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circ {
    pos: Ax3,
    radius: f64,
}

impl Circ {
    /// Creates a circle from its local frame and radius.
    pub fn from_ax3(ax3: Ax3, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(ExtremaError::InvalidGeometry(format!(
                "Circ: radius must be finite and non-negative, got {}",
                radius
            )));
        }
        Ok(Self { pos: ax3, radius })
    }

    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
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
        self.location().translated(&self.planar(self.radius * c, self.radius * s))
    }

    pub fn d1(&self, u: f64) -> (Pnt, Vec3) {
        let (s, c) = u.sin_cos();
        (self.value(u), self.planar(-self.radius * s, self.radius * c))
    }

    pub fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        let (s, c) = u.sin_cos();
        let (p, d1) = self.d1(u);
        (p, d1, self.planar(-self.radius * c, -self.radius * s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_circle_derivatives() {
        let circ = Circ::from_ax3(Ax3::standard(), 2.0).unwrap();
        let (p, d1, d2) = circ.d2(PI / 2.0);
        assert!(p.distance(&Pnt::from_coords(0.0, 2.0, 0.0)) < 1e-12);
        assert!((d1 - Vec3::from_coords(-2.0, 0.0, 0.0)).magnitude() < 1e-12);
        assert!((d2 - Vec3::from_coords(0.0, -2.0, 0.0)).magnitude() < 1e-12);
    }

    #[test]
    fn test_circle_rejects_negative_radius() {
        assert!(Circ::from_ax3(Ax3::standard(), -0.5).is_err());
    }
}
