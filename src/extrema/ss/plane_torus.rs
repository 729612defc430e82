//! Closed-form extrema between a plane and a torus.
//!
//! With `N` the plane normal and `X, Y, Z` the torus frame, the signed
//! height of the torus point `T(u, v)` above the plane is
//!
//! ```text
//! h(u, v) = d0 + (R + r cos v) (nx cos u + ny sin u) + r a sin v
//! ```
//!
//! where `d0` is the height of the torus centre, `a = Z·N`, `nx = X·N` and
//! `ny = Y·N`. Writing `nx cos u + ny sin u = s cos(u - φ)`, the critical
//! revolution angles are `φ` and `φ + π`, and on each of those generating
//! circles the critical tube angles are `atan2(a, ±s)` and that plus `π`.
//! When the axis is perpendicular to the plane (`s = 0`) every generating
//! circle is extremal and the extrema come as rings.

use std::f64::consts::PI;

use crate::adaptor::Surface3d;
use crate::extrema::ss::{SsExtremum, SsResult};
use crate::extrema::{normalize_angle, shift_periodic, Domain2D, Domain4D, ExtremaConfig, SearchMode, Status};
use crate::gp::{Pln, Torus, Vec3};
use crate::{precision, Result};

/// Frame relationship between the two surfaces, fixed at construction.
#[derive(Debug, Clone, Copy)]
struct Cache {
    normal: Vec3,
    /// Signed distance from the torus centre to the plane.
    center_distance: f64,
    /// Torus axis · plane normal.
    axis_dot_normal: f64,
    /// Length of the normal's component in the torus XY plane.
    normal_perp: f64,
    /// Revolution angle of that component.
    normal_angle: f64,
}

impl Cache {
    fn new(plane: &Pln, torus: &Torus) -> Self {
        let normal = Vec3::from_dir(plane.position().direction());
        let frame = torus.position();
        let nx = normal.dot(&Vec3::from_dir(frame.xdirection()));
        let ny = normal.dot(&Vec3::from_dir(frame.ydirection()));
        Self {
            normal,
            center_distance: plane.signed_distance(torus.location()),
            axis_dot_normal: normal.dot(&Vec3::from_dir(frame.direction())),
            normal_perp: nx.hypot(ny),
            normal_angle: ny.atan2(nx),
        }
    }
}

/// Extrema of the distance between a plane and a torus.
///
/// The result is overwritten by each [`PlaneTorus::perform`].
#[derive(Debug, Clone)]
pub struct PlaneTorus {
    plane: Pln,
    torus: Torus,
    swapped: bool,
    domain: Domain4D,
    config: ExtremaConfig,
    cache: Cache,
    result: SsResult,
}

impl PlaneTorus {
    pub fn new(plane: &Pln, torus: &Torus) -> Self {
        Self::build(plane, torus, false, Domain4D::default())
    }

    /// Restrict reported extrema to `domain` (plane rectangle first).
    pub fn with_domain(plane: &Pln, torus: &Torus, domain: Domain4D) -> Self {
        Self::build(plane, torus, false, domain)
    }

    /// Torus first: parameters and points are reported torus first.
    pub fn from_torus_plane(torus: &Torus, plane: &Pln) -> Self {
        Self::build(plane, torus, true, Domain4D::default())
    }

    /// Torus first, with `domain` given torus rectangle first.
    pub fn from_torus_plane_with_domain(torus: &Torus, plane: &Pln, domain: Domain4D) -> Self {
        Self::build(plane, torus, true, domain)
    }

    fn build(plane: &Pln, torus: &Torus, swapped: bool, domain: Domain4D) -> Self {
        Self {
            plane: *plane,
            torus: *torus,
            swapped,
            domain,
            config: ExtremaConfig::default(),
            cache: Cache::new(plane, torus),
            result: SsResult::default(),
        }
    }

    /// Replace the configuration after validating it.
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
    pub fn torus(&self) -> &Torus {
        &self.torus
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

    /// The torus rectangle of the domain.
    fn torus_domain(&self) -> &Domain2D {
        if self.swapped {
            &self.domain.domain1
        } else {
            &self.domain.domain2
        }
    }

    pub fn perform(&mut self, tol: f64, mode: SearchMode) -> &SsResult {
        self.result.clear();
        let tol = if tol.is_finite() && tol > 0.0 {
            tol
        } else {
            precision::CONFUSION
        };
        let a = self.cache.axis_dot_normal.abs();
        let eps = self.config.angular_tolerance;

        if a > 1.0 - eps {
            log::debug!("PlaneTorus: axis perpendicular to plane");
            self.perform_perpendicular(tol, mode);
        } else {
            let parallel = a < eps;
            log::debug!(
                "PlaneTorus: {} configuration",
                if parallel { "parallel" } else { "oblique" }
            );
            self.perform_critical_points(tol, mode, parallel);
        }

        if self.result.status == Status::NoSolution {
            self.result.status = Status::Ok;
        }
        &self.result
    }

    /// Every generating circle is at the same height: extrema are rings.
    fn perform_perpendicular(&mut self, tol: f64, mode: SearchMode) {
        let c = self.cache;
        let r = self.torus.minor_radius();
        let min_distance = c.center_distance.abs() - r;
        let max_distance = c.center_distance.abs() + r;

        // The near ring is on the side of the tube facing the plane.
        let v_near = if c.center_distance * c.axis_dot_normal > 0.0 {
            1.5 * PI
        } else {
            0.5 * PI
        };
        let v_far = normalize_angle(v_near + PI);
        // Any generating circle will do; take one inside the domain.
        let u_ring = match self.torus_domain().u_min {
            u if precision::is_infinite(u) => 0.0,
            u => u,
        };

        self.result.status = Status::InfiniteSolutions;
        if mode.includes_min() {
            if min_distance < tol {
                self.result.infinite_square_distance = Some(0.0);
                return;
            }
            self.result.infinite_square_distance = Some(min_distance * min_distance);
            self.add_point(u_ring, v_near, true, tol);
        }
        if mode.includes_max() {
            if self.result.infinite_square_distance.is_none() {
                self.result.infinite_square_distance = Some(max_distance * max_distance);
            }
            self.add_point(u_ring, v_far, false, tol);
        }
    }

    /// Discrete extrema at the critical generating circles.
    fn perform_critical_points(&mut self, tol: f64, mode: SearchMode, parallel: bool) {
        let c = self.cache;
        let big_r = self.torus.major_radius();
        let r = self.torus.minor_radius();
        let s = c.normal_perp;
        let a = c.axis_dot_normal;

        let reach = big_r * s + r;
        let intersecting = c.center_distance - reach < -tol && c.center_distance + reach > tol;
        if intersecting && mode.includes_min() {
            log::debug!("PlaneTorus: surfaces intersect");
            self.result.status = Status::InfiniteSolutions;
            self.result.infinite_square_distance = Some(0.0);
        }

        let degenerate = f64::EPSILON * (big_r + r).max(1.0);
        for k in [1.0, -1.0] {
            let u = if k > 0.0 { c.normal_angle } else { c.normal_angle + PI };
            let dn = k * s;
            let v0 = if parallel { 0.0 } else { a.atan2(dn) };

            for v in [v0, v0 + PI] {
                let (sv, cv) = v.sin_cos();
                let ring = big_r + r * cv;
                let h = c.center_distance + ring * dn + r * a * sv;
                // A touching point is the global minimum of |h|.
                let is_minimum = if h.abs() <= tol {
                    true
                } else {
                    let sign = h.signum();
                    // Second derivatives of |h|; the mixed term vanishes here.
                    let g_uu = -sign * ring * dn;
                    let g_vv = -sign * r * (cv * dn + a * sv);
                    match hessian_kind(g_uu, g_vv, degenerate) {
                        Some(is_minimum) => is_minimum,
                        None if mode == SearchMode::MinMax => g_vv > 0.0,
                        None => continue,
                    }
                };
                if !mode.accepts(is_minimum) || (intersecting && is_minimum) {
                    continue;
                }
                self.add_point(u, v, is_minimum, tol);
            }
        }
    }

    /// Record the torus point `(u, v)` and its foot on the plane. Torus
    /// angles are reported in the period starting at the domain's lower
    /// bounds.
    fn add_point(&mut self, u: f64, v: f64, is_minimum: bool, tol: f64) {
        let torus_domain = *self.torus_domain();
        let u = shift_periodic(u, torus_domain.u_min, tol);
        let v = shift_periodic(v, torus_domain.v_min, tol);
        let on_torus = Surface3d::value(&self.torus, u, v);
        let (pu, pv) = self.plane.parameters(&on_torus);
        let on_plane = Surface3d::value(&self.plane, pu, pv);
        let h = self.plane.signed_distance(&on_torus);
        let extremum = SsExtremum {
            u1: pu,
            v1: pv,
            u2: u,
            v2: v,
            point1: on_plane,
            point2: on_torus,
            square_distance: h * h,
            is_minimum,
        };
        self.result.add_extremum(extremum, self.swapped, &self.domain, tol);
    }
}

/// `Some(true)` for a minimum, `Some(false)` for a maximum, `None` for a
/// saddle. A vanishing second derivative defers to the other one.
fn hessian_kind(g_uu: f64, g_vv: f64, degenerate: f64) -> Option<bool> {
    if g_uu.abs() <= degenerate {
        return Some(g_vv >= 0.0);
    }
    if g_vv.abs() <= degenerate {
        return Some(g_uu > 0.0);
    }
    match (g_uu > 0.0, g_vv > 0.0) {
        (true, true) => Some(true),
        (false, false) => Some(false),
        _ => None,
    }
}
