//! Evaluation interfaces consumed by the extrema solvers.
//!
//! A curve is anything that can report its parameter range and evaluate
//! position with first and second derivatives. Surfaces only need
//! position for now; the analytic surface-pair solvers work on the
//! underlying gp primitives directly.

mod bezier;

pub use bezier::BezierCurve;

use crate::gp::{Circ, Elips, Lin, Pln, Pnt, Sphere, Torus, Vec3};
use crate::precision;

/// Step used by the default second derivative.
const D2_STEP: f64 = 1e-5;

/// A parametric 3D curve.
pub trait Curve3d {
    fn first_parameter(&self) -> f64;

    fn last_parameter(&self) -> f64;

    fn value(&self, u: f64) -> Pnt;

    /// Point and first derivative at `u`.
    fn d1(&self, u: f64) -> (Pnt, Vec3);

    /// Point, first and second derivatives at `u`.
    ///
    /// The default is a central difference of `d1`; analytic curves
    /// override it.
    fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        let (p, v1) = self.d1(u);
        let (_, ahead) = self.d1(u + D2_STEP);
        let (_, behind) = self.d1(u - D2_STEP);
        let v2 = (ahead - behind) * (0.5 / D2_STEP);
        (p, v1, v2)
    }
}

/// A parametric 3D surface.
pub trait Surface3d {
    fn value(&self, u: f64, v: f64) -> Pnt;
}

impl Curve3d for Lin {
    fn first_parameter(&self) -> f64 {
        -precision::INFINITE
    }

    fn last_parameter(&self) -> f64 {
        precision::INFINITE
    }

    fn value(&self, u: f64) -> Pnt {
        Lin::value(self, u)
    }

    fn d1(&self, u: f64) -> (Pnt, Vec3) {
        Lin::d1(self, u)
    }

    fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        Lin::d2(self, u)
    }
}

impl Curve3d for Circ {
    fn first_parameter(&self) -> f64 {
        0.0
    }

    fn last_parameter(&self) -> f64 {
        2.0 * std::f64::consts::PI
    }

    fn value(&self, u: f64) -> Pnt {
        Circ::value(self, u)
    }

    fn d1(&self, u: f64) -> (Pnt, Vec3) {
        Circ::d1(self, u)
    }

    fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        Circ::d2(self, u)
    }
}

impl Curve3d for Elips {
    fn first_parameter(&self) -> f64 {
        0.0
    }

    fn last_parameter(&self) -> f64 {
        2.0 * std::f64::consts::PI
    }

    fn value(&self, u: f64) -> Pnt {
        Elips::value(self, u)
    }

    fn d1(&self, u: f64) -> (Pnt, Vec3) {
        Elips::d1(self, u)
    }

    fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        Elips::d2(self, u)
    }
}

impl Surface3d for Pln {
    fn value(&self, u: f64, v: f64) -> Pnt {
        Pln::value(self, u, v)
    }
}

impl Surface3d for Torus {
    fn value(&self, u: f64, v: f64) -> Pnt {
        Torus::value(self, u, v)
    }
}

impl Surface3d for Sphere {
    fn value(&self, u: f64, v: f64) -> Pnt {
        Sphere::value(self, u, v)
    }
}
