//! Sphere in 3D space.

use super::{Ax3, Pnt, Vec3};
use crate::{ExtremaError, Result};

/// A spherical surface in 3D space.
///
/// U is the longitude in `[0, 2π)`, V the latitude in `[-π/2, π/2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pos: Ax3,
    radius: f64,
}

impl Sphere {
    /// Creates a sphere from coordinate system and radius.
    pub fn from_ax3(ax3: Ax3, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(ExtremaError::InvalidGeometry(format!(
                "Sphere: radius must be finite and non-negative, got {}",
                radius
            )));
        }
        Ok(Self { pos: ax3, radius })
    }

    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the center.
    #[inline]
    pub const fn location(&self) -> &Pnt {
        self.pos.location()
    }

    #[inline]
    pub const fn position(&self) -> &Ax3 {
        &self.pos
    }

    pub fn value(&self, u: f64, v: f64) -> Pnt {
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let xyz = *self.location().xyz()
            + *self.pos.xdirection().xyz() * (self.radius * cv * cu)
            + *self.pos.ydirection().xyz() * (self.radius * cv * su)
            + *self.pos.direction().xyz() * (self.radius * sv);
        Pnt::from_xyz(xyz)
    }

    /// Parameters of the point of the sphere seen from the center in the
    /// direction of `p`. U is 0 at the poles.
    pub fn parameters(&self, p: &Pnt) -> (f64, f64) {
        let d = Vec3::from_points(self.location(), p);
        let x = d.dot(&Vec3::from_dir(self.pos.xdirection()));
        let y = d.dot(&Vec3::from_dir(self.pos.ydirection()));
        let z = d.dot(&Vec3::from_dir(self.pos.direction()));
        let planar = x.hypot(y);
        let v = z.atan2(planar);
        let u = if planar <= crate::precision::RESOLUTION {
            0.0
        } else {
            let u = y.atan2(x);
            if u < 0.0 { u + 2.0 * std::f64::consts::PI } else { u }
        };
        (u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sphere_parameters_roundtrip() {
        let sphere = Sphere::from_ax3(Ax3::new(Pnt::from_coords(1.0, 2.0, 3.0), crate::gp::Dir::dz()), 2.0).unwrap();
        let p = sphere.value(4.0, -0.3);
        let (u, v) = sphere.parameters(&p);
        assert!((u - 4.0).abs() < 1e-12);
        assert!((v + 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_poles() {
        let sphere = Sphere::from_ax3(Ax3::standard(), 1.0).unwrap();
        let (u, v) = sphere.parameters(&Pnt::from_coords(0.0, 0.0, 5.0));
        assert_eq!(u, 0.0);
        assert!((v - PI / 2.0).abs() < 1e-15);
        assert!(Sphere::from_ax3(Ax3::standard(), -1.0).is_err());
    }
}
