//! Surface to surface extrema for pairs of analytic surfaces.
//!
//! Each pair has its own closed-form solver with the same shape:
//! construct from the two surfaces (in either order, optionally with a
//! parameter domain), then `perform(tol, mode)`. Parameters are always
//! reported in the order the solver was constructed with.

mod plane_sphere;
mod plane_torus;

pub use plane_sphere::PlaneSphere;
pub use plane_torus::PlaneTorus;

use crate::extrema::{Domain4D, SearchMode, Status};
use crate::gp::{Pln, Pnt, Sphere, Torus};
use crate::{ExtremaError, Result};

/// One extremum of the distance between two surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SsExtremum {
    pub u1: f64,
    pub v1: f64,
    pub u2: f64,
    pub v2: f64,
    /// Point on the first surface.
    pub point1: Pnt,
    /// Point on the second surface.
    pub point2: Pnt,
    pub square_distance: f64,
    pub is_minimum: bool,
}

impl SsExtremum {
    /// The same extremum with the two surfaces exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            u1: self.u2,
            v1: self.v2,
            u2: self.u1,
            v2: self.v1,
            point1: self.point2,
            point2: self.point1,
            ..*self
        }
    }
}

/// Outcome of a surface-pair query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SsResult {
    pub status: Status,
    pub extrema: Vec<SsExtremum>,
    /// Squared distance of the extremal family when `status` is
    /// [`Status::InfiniteSolutions`].
    pub infinite_square_distance: Option<f64>,
}

impl SsResult {
    pub fn clear(&mut self) {
        self.status = Status::NoSolution;
        self.extrema.clear();
        self.infinite_square_distance = None;
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.status != Status::NoSolution
    }

    #[inline]
    pub fn nb_ext(&self) -> usize {
        self.extrema.len()
    }

    pub fn min_index(&self) -> Option<usize> {
        self.extrema
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.square_distance.total_cmp(&b.1.square_distance))
            .map(|(i, _)| i)
    }

    pub fn max_index(&self) -> Option<usize> {
        self.extrema
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.square_distance.total_cmp(&b.1.square_distance))
            .map(|(i, _)| i)
    }

    /// Smallest squared distance, including an infinite family's.
    pub fn min_square_distance(&self) -> Option<f64> {
        let discrete = self.min_index().map(|i| self.extrema[i].square_distance);
        match (discrete, self.infinite_square_distance) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Largest squared distance, including an infinite family's.
    pub fn max_square_distance(&self) -> Option<f64> {
        let discrete = self.max_index().map(|i| self.extrema[i].square_distance);
        match (discrete, self.infinite_square_distance) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    /// Record an extremum given in the solver's canonical surface order.
    ///
    /// The extremum is swapped into construction order, dropped when it
    /// falls outside `domain` (with `tol` slack) or when both of its points
    /// coincide with an already recorded extremum.
    pub(crate) fn add_extremum(&mut self, extremum: SsExtremum, swapped: bool, domain: &Domain4D, tol: f64) -> bool {
        let extremum = if swapped { extremum.swapped() } else { extremum };
        if !domain.contains(extremum.u1, extremum.v1, extremum.u2, extremum.v2, tol) {
            log::trace!(
                "add_extremum: ({}, {}, {}, {}) outside domain",
                extremum.u1,
                extremum.v1,
                extremum.u2,
                extremum.v2
            );
            return false;
        }
        let duplicate = self.extrema.iter().any(|e| {
            e.point1.distance(&extremum.point1) < tol && e.point2.distance(&extremum.point2) < tol
        });
        if duplicate {
            return false;
        }
        self.extrema.push(extremum);
        true
    }
}

/// A surface kind with a closed-form pair solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyticSurface {
    Plane(Pln),
    Torus(Torus),
    Sphere(Sphere),
}

impl AnalyticSurface {
    pub fn type_name(&self) -> &'static str {
        match self {
            AnalyticSurface::Plane(_) => "plane",
            AnalyticSurface::Torus(_) => "torus",
            AnalyticSurface::Sphere(_) => "sphere",
        }
    }
}

impl From<Pln> for AnalyticSurface {
    fn from(p: Pln) -> Self {
        AnalyticSurface::Plane(p)
    }
}

impl From<Torus> for AnalyticSurface {
    fn from(t: Torus) -> Self {
        AnalyticSurface::Torus(t)
    }
}

impl From<Sphere> for AnalyticSurface {
    fn from(s: Sphere) -> Self {
        AnalyticSurface::Sphere(s)
    }
}

/// Solver selected by the kinds of the two surfaces.
#[derive(Debug, Clone)]
pub enum SurfacePairSolver {
    PlaneTorus(PlaneTorus),
    PlaneSphere(PlaneSphere),
}

impl SurfacePairSolver {
    /// Pick the solver for `(s1, s2)` in either order.
    pub fn new(s1: &AnalyticSurface, s2: &AnalyticSurface) -> Result<Self> {
        Self::with_domain(s1, s2, Domain4D::default())
    }

    /// Same as [`SurfacePairSolver::new`], restricted to `domain` given in
    /// argument order.
    pub fn with_domain(s1: &AnalyticSurface, s2: &AnalyticSurface, domain: Domain4D) -> Result<Self> {
        let solver = match (s1, s2) {
            (AnalyticSurface::Plane(p), AnalyticSurface::Torus(t)) => {
                Self::PlaneTorus(PlaneTorus::with_domain(p, t, domain))
            }
            (AnalyticSurface::Torus(t), AnalyticSurface::Plane(p)) => {
                Self::PlaneTorus(PlaneTorus::from_torus_plane_with_domain(t, p, domain))
            }
            (AnalyticSurface::Plane(p), AnalyticSurface::Sphere(s)) => {
                Self::PlaneSphere(PlaneSphere::with_domain(p, s, domain))
            }
            (AnalyticSurface::Sphere(s), AnalyticSurface::Plane(p)) => {
                Self::PlaneSphere(PlaneSphere::from_sphere_plane_with_domain(s, p, domain))
            }
            _ => {
                return Err(ExtremaError::UnsupportedSurfacePair(format!(
                    "{} / {}",
                    s1.type_name(),
                    s2.type_name()
                )))
            }
        };
        Ok(solver)
    }

    pub fn perform(&mut self, tol: f64, mode: SearchMode) -> &SsResult {
        match self {
            Self::PlaneTorus(solver) => solver.perform(tol, mode),
            Self::PlaneSphere(solver) => solver.perform(tol, mode),
        }
    }

    pub fn result(&self) -> &SsResult {
        match self {
            Self::PlaneTorus(solver) => solver.result(),
            Self::PlaneSphere(solver) => solver.result(),
        }
    }

    pub fn is_swapped(&self) -> bool {
        match self {
            Self::PlaneTorus(solver) => solver.is_swapped(),
            Self::PlaneSphere(solver) => solver.is_swapped(),
        }
    }
}
