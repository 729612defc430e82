//! Closed-form extrema between a plane and a sphere.

use crate::adaptor::Surface3d;
use crate::extrema::ss::{SsExtremum, SsResult};
use crate::extrema::{shift_periodic, Domain4D, ExtremaConfig, SearchMode, Status};
use crate::gp::{Pln, Pnt, Sphere, Vec3};
use crate::{precision, Result};

/// Extrema of the distance between a plane and a sphere.
///
/// The near and far points lie on the perpendicular from the plane through
/// the sphere centre.
#[derive(Debug, Clone)]
pub struct PlaneSphere {
    plane: Pln,
    sphere: Sphere,
    swapped: bool,
    domain: Domain4D,
    config: ExtremaConfig,
    normal: Vec3,
    center_distance: f64,
    result: SsResult,
}

impl PlaneSphere {
    pub fn new(plane: &Pln, sphere: &Sphere) -> Self {
        Self::build(plane, sphere, false, Domain4D::default())
    }

    pub fn with_domain(plane: &Pln, sphere: &Sphere, domain: Domain4D) -> Self {
        Self::build(plane, sphere, false, domain)
    }

    pub fn from_sphere_plane(sphere: &Sphere, plane: &Pln) -> Self {
        Self::build(plane, sphere, true, Domain4D::default())
    }

    pub fn from_sphere_plane_with_domain(sphere: &Sphere, plane: &Pln, domain: Domain4D) -> Self {
        Self::build(plane, sphere, true, domain)
    }

    fn build(plane: &Pln, sphere: &Sphere, swapped: bool, domain: Domain4D) -> Self {
        Self {
            plane: *plane,
            sphere: *sphere,
            swapped,
            domain,
            config: ExtremaConfig::default(),
            normal: Vec3::from_dir(plane.position().direction()),
            center_distance: plane.signed_distance(sphere.location()),
            result: SsResult::default(),
        }
    }

    pub fn with_config(mut self, config: ExtremaConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[inline]
    pub fn plane(&self) -> &Pln {
        &self.plane
    }

    #[inline]
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    #[inline]
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    #[inline]
    pub fn domain(&self) -> &Domain4D {
        &self.domain
    }

    #[inline]
    pub fn config(&self) -> &ExtremaConfig {
        &self.config
    }

    #[inline]
    pub fn result(&self) -> &SsResult {
        &self.result
    }

    pub fn perform(&mut self, tol: f64, mode: SearchMode) -> &SsResult {
        self.result.clear();
        let tol = if tol.is_finite() && tol > 0.0 {
            tol
        } else {
            precision::CONFUSION
        };
        let radius = self.sphere.radius();
        let side = if self.center_distance >= 0.0 { 1.0 } else { -1.0 };

        let intersecting = self.center_distance.abs() - radius < -tol;

        if mode.includes_min() {
            if intersecting {
                log::debug!("PlaneSphere: surfaces intersect");
                self.result.status = Status::InfiniteSolutions;
                self.result.infinite_square_distance = Some(0.0);
            } else {
                self.add_point(-side * radius, true, tol);
            }
        }
        if mode.includes_max() {
            self.add_point(side * radius, false, tol);
            // The cap on the far side of the plane peaks at its pole.
            if intersecting {
                self.add_point(-side * radius, false, tol);
            }
        }

        if self.result.status == Status::NoSolution {
            self.result.status = Status::Ok;
        }
        &self.result
    }

    /// Add the sphere point at signed `offset` from the centre along the normal.
    fn add_point(&mut self, offset: f64, is_minimum: bool, tol: f64) {
        let on_sphere = self.sphere.location().translated(&(self.normal * offset));
        let (pu, pv) = self.plane.parameters(&on_sphere);
        let on_plane = Surface3d::value(&self.plane, pu, pv);
        let (su, sv) = self.sphere.parameters(&on_sphere);
        let sphere_u_min = if self.swapped {
            self.domain.domain1.u_min
        } else {
            self.domain.domain2.u_min
        };
        let su = shift_periodic(su, sphere_u_min, tol);
        let extremum = SsExtremum {
            u1: pu,
            v1: pv,
            u2: su,
            v2: sv,
            point1: on_plane,
            point2: on_sphere,
            square_distance: Pnt::square_distance(&on_plane, &on_sphere),
            is_minimum,
        };
        self.result.add_extremum(extremum, self.swapped, &self.domain, tol);
    }
}
