//! Torus in 3D space.

use super::{Ax1, Ax3, Pnt};
use crate::{ExtremaError, Result};

/// A toroidal surface in 3D space.
///
/// U runs around the main axis, V around the tube:
/// `P(u, v) = C + (R + r cos v)(cos u X + sin u Y) + r sin v N`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torus {
    pos: Ax3,
    major_radius: f64,
    minor_radius: f64,
}

impl Torus {
    /// Creates a torus from coordinate system and radii.
    pub fn from_ax3(ax3: Ax3, major_radius: f64, minor_radius: f64) -> Result<Self> {
        if !(major_radius.is_finite() && major_radius >= 0.0) {
            return Err(ExtremaError::InvalidGeometry(format!(
                "Torus: major radius must be finite and non-negative, got {}",
                major_radius
            )));
        }
        if !(minor_radius.is_finite() && minor_radius >= 0.0) {
            return Err(ExtremaError::InvalidGeometry(format!(
                "Torus: minor radius must be finite and non-negative, got {}",
                minor_radius
            )));
        }
        Ok(Self {
            pos: ax3,
            major_radius,
            minor_radius,
        })
    }

    /// Returns the major radius (distance from center to tube center).
    #[inline]
    pub const fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Returns the minor radius (tube radius).
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

    /// Returns the axis of revolution.
    #[inline]
    pub const fn axis(&self) -> &Ax1 {
        self.pos.axis()
    }

    pub fn value(&self, u: f64, v: f64) -> Pnt {
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let ring = self.major_radius + self.minor_radius * cv;
        let xyz = *self.location().xyz()
            + *self.pos.xdirection().xyz() * (ring * cu)
            + *self.pos.ydirection().xyz() * (ring * su)
            + *self.pos.direction().xyz() * (self.minor_radius * sv);
        Pnt::from_xyz(xyz)
    }
}
