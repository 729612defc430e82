//! Grid-based point to curve extrema.
//!
//! The squared distance from a point `P` to a curve `C` is stationary where
//! `F(u) = (C(u) - P) · C'(u)` vanishes. The evaluator caches
//! `(u, C(u), C'(u))` on a caller-supplied grid, then for each query:
//!
//! 1. scans the grid for sign changes of `F`, near-zero `F` values and
//!    3-point local extrema of the distance, each grid index seeding at most
//!    one candidate;
//! 2. refines candidates in order of estimated distance with bounded Newton
//!    on `F`, falling back to a shrinking local grid when Newton fails;
//! 3. classifies, filters by mode and de-duplicates the accepted roots.
//!
//! Extrema at the domain ends are not searched for here, see
//! [`super::CurveExtrema::perform_with_endpoints`].

use crate::adaptor::Curve3d;
use crate::extrema::pc::{PcExtremum, PcResult};
use crate::extrema::{Domain1D, ExtremaConfig, SearchMode, Status};
use crate::gp::{Pnt, Vec3};
use crate::math::newton_bounded;
use crate::{precision, ExtremaError, Result};

/// One cached curve sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridPoint {
    pub parameter: f64,
    pub point: Pnt,
    pub first_derivative: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateKind {
    /// `F` changes sign between `index_low` and `index_high`.
    SignChange,
    /// The grid point between `index_low` and `index_high` is already close
    /// to an extremum.
    NearZero,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    kind: CandidateKind,
    index_low: usize,
    index_high: usize,
    start_parameter: f64,
    /// Squared distance used to order refinement.
    estimated_distance: f64,
}

/// `F` and squared distance at one grid point, for the current query point.
#[derive(Debug, Clone, Copy, Default)]
struct Sample {
    f: f64,
    square_distance: f64,
}

/// Reusable point to curve extrema search over a cached sample grid.
///
/// All buffers, including the returned result, are overwritten by the next
/// [`GridEvaluator::perform`]. Use one instance per thread.
#[derive(Debug, Clone, Default)]
pub struct GridEvaluator {
    config: ExtremaConfig,
    grid: Vec<GridPoint>,
    samples: Vec<Sample>,
    claimed: Vec<bool>,
    candidates: Vec<Candidate>,
    order: Vec<usize>,
    /// Accepted `(parameter, point)` pairs of the current query.
    roots: Vec<(f64, Pnt)>,
    result: PcResult,
}

impl GridEvaluator {
    /// Evaluator with the default configuration and an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtremaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &ExtremaConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &[GridPoint] {
        &self.grid
    }

    /// Result of the last [`GridEvaluator::perform`].
    #[inline]
    pub fn result(&self) -> &PcResult {
        &self.result
    }

    pub(crate) fn result_mut(&mut self) -> &mut PcResult {
        &mut self.result
    }

    /// `n` evenly spaced parameters on `[min, max]`; the last one is exactly `max`.
    pub fn build_uniform_params(min: f64, max: f64, n: usize) -> Result<Vec<f64>> {
        if n < 2 {
            return Err(ExtremaError::InvalidSampleCount(n));
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ExtremaError::InvalidDomain(format!(
                "cannot sample [{}, {}]",
                min, max
            )));
        }
        let step = (max - min) / (n - 1) as f64;
        let mut params: Vec<f64> = (0..n).map(|i| min + step * i as f64).collect();
        params[n - 1] = max;
        Ok(params)
    }

    /// Sample position and first derivative of `curve` at every parameter.
    ///
    /// The buffer is only reallocated when the number of parameters changes.
    pub fn build_grid<C: Curve3d + ?Sized>(&mut self, curve: &C, parameters: &[f64]) {
        if self.grid.len() != parameters.len() {
            self.grid = vec![GridPoint::default(); parameters.len()];
        }
        for (slot, &parameter) in self.grid.iter_mut().zip(parameters) {
            let (point, first_derivative) = curve.d1(parameter);
            *slot = GridPoint {
                parameter,
                point,
                first_derivative,
            };
        }
        log::trace!("GridEvaluator: built grid of {} samples", self.grid.len());
    }

    /// Find the interior extrema of the distance from `p` to `curve`.
    ///
    /// `curve` must be the curve the grid was built from. A non-positive
    /// `tol` is replaced by [`precision::CONFUSION`].
    pub fn perform<C: Curve3d + ?Sized>(
        &mut self,
        curve: &C,
        p: &Pnt,
        domain: Domain1D,
        tol: f64,
        mode: SearchMode,
    ) -> &PcResult {
        self.result.clear();
        self.roots.clear();
        let tol = if tol.is_finite() && tol > 0.0 {
            tol
        } else {
            precision::CONFUSION
        };

        if self.grid.len() < 2 {
            log::debug!("GridEvaluator: grid has {} samples, nothing to search", self.grid.len());
            return &self.result;
        }

        self.evaluate_samples(p);
        if let Some(square_distance) = self.constant_distance(tol) {
            log::debug!("GridEvaluator: distance constant over the grid ({})", square_distance);
            self.result.status = Status::InfiniteSolutions;
            self.result.infinite_square_distance = Some(square_distance);
            return &self.result;
        }
        self.scan_grid(tol, mode);
        if self.candidates.is_empty() {
            log::debug!("GridEvaluator: no candidates on {} samples", self.grid.len());
            return &self.result;
        }

        self.result.status = Status::Ok;
        self.refine_candidates(curve, p, domain, tol, mode);
        log::debug!(
            "GridEvaluator: {} candidates, {} extrema ({:?})",
            self.candidates.len(),
            self.result.extrema.len(),
            mode
        );
        &self.result
    }

    fn evaluate_samples(&mut self, p: &Pnt) {
        self.samples.clear();
        self.samples.extend(self.grid.iter().map(|g| {
            let d = Vec3::from_points(p, &g.point);
            Sample {
                f: d.dot(&g.first_derivative),
                square_distance: d.square_magnitude(),
            }
        }));
    }

    /// Squared distance shared by every sample when `F` vanishes on the whole
    /// grid and the distance does not vary by more than `tol`, e.g. the
    /// centre of a circle.
    fn constant_distance(&self, tol: f64) -> Option<f64> {
        let near_zero = tol * self.config.near_zero_factor;
        let first = self.samples.first()?.square_distance.sqrt();
        let flat = self
            .samples
            .iter()
            .all(|s| s.f.abs() <= near_zero && (s.square_distance.sqrt() - first).abs() <= tol);
        flat.then_some(first * first)
    }

    fn scan_grid(&mut self, tol: f64, mode: SearchMode) {
        let n = self.grid.len();
        self.candidates.clear();
        self.claimed.clear();
        self.claimed.resize(n, false);
        let near_zero = tol * self.config.near_zero_factor;

        for i in 0..n {
            if i + 1 < n && !self.claimed[i] && !self.claimed[i + 1] {
                let (lo, hi) = (self.samples[i], self.samples[i + 1]);
                if lo.f * hi.f < 0.0 {
                    let u_lo = self.grid[i].parameter;
                    let u_hi = self.grid[i + 1].parameter;
                    let start_parameter = u_lo - lo.f * (u_hi - u_lo) / (hi.f - lo.f);
                    let estimated_distance = if mode == SearchMode::Max {
                        lo.square_distance.max(hi.square_distance)
                    } else {
                        lo.square_distance.min(hi.square_distance)
                    };
                    self.candidates.push(Candidate {
                        kind: CandidateKind::SignChange,
                        index_low: i,
                        index_high: i + 1,
                        start_parameter,
                        estimated_distance,
                    });
                    self.claimed[i] = true;
                    self.claimed[i + 1] = true;
                    continue;
                }
            }
            if self.claimed[i] {
                continue;
            }

            let here = self.samples[i];
            let local_extremum = i > 0 && i + 1 < n && {
                let before = self.samples[i - 1].square_distance;
                let after = self.samples[i + 1].square_distance;
                let d = here.square_distance;
                (d < before && d < after) || (mode.includes_max() && d > before && d > after)
            };
            if here.f.abs() < near_zero || local_extremum {
                self.candidates.push(Candidate {
                    kind: CandidateKind::NearZero,
                    index_low: i.saturating_sub(1),
                    index_high: (i + 1).min(n - 1),
                    start_parameter: self.grid[i].parameter,
                    estimated_distance: here.square_distance,
                });
                self.claimed[i] = true;
            }
        }
    }

    fn refine_candidates<C: Curve3d + ?Sized>(
        &mut self,
        curve: &C,
        p: &Pnt,
        domain: Domain1D,
        tol: f64,
        mode: SearchMode,
    ) {
        self.order.clear();
        self.order.extend(0..self.candidates.len());
        match mode {
            SearchMode::Min => {
                let candidates = &self.candidates;
                self.order.sort_by(|&a, &b| {
                    candidates[a]
                        .estimated_distance
                        .total_cmp(&candidates[b].estimated_distance)
                });
            }
            SearchMode::Max => {
                let candidates = &self.candidates;
                self.order.sort_by(|&a, &b| {
                    candidates[b]
                        .estimated_distance
                        .total_cmp(&candidates[a].estimated_distance)
                });
            }
            SearchMode::MinMax => {}
        }

        let config = self.config;
        let span = self.grid_span().min(domain.width());
        let f = |u: f64| {
            let (point, d1, d2) = curve.d2(u);
            let d = Vec3::from_points(p, &point);
            (d.dot(&d1), d1.square_magnitude() + d.dot(&d2))
        };
        let mut best: Option<f64> = None;

        for k in 0..self.order.len() {
            let candidate = self.candidates[self.order[k]];

            if let Some(best) = best {
                let exhausted = match mode {
                    SearchMode::Min => candidate.estimated_distance > best * config.min_skip_ratio,
                    SearchMode::Max => candidate.estimated_distance < best * config.max_skip_ratio,
                    SearchMode::MinMax => false,
                };
                if exhausted {
                    log::trace!(
                        "GridEvaluator: stopping after {} of {} candidates",
                        k,
                        self.order.len()
                    );
                    break;
                }
            }

            let seed = domain.clamp(candidate.start_parameter);
            if self.roots.iter().any(|(u, _)| (u - seed).abs() < tol) {
                continue;
            }

            let lo = self.grid[candidate.index_low].parameter.max(domain.min);
            let hi = self.grid[candidate.index_high].parameter.min(domain.max);
            if lo > hi {
                continue;
            }
            let seed = seed.clamp(lo, hi);

            let root = match newton_bounded(&f, seed, lo, hi, &config.newton) {
                Some(root) => Some(root.root),
                None => {
                    log::trace!(
                        "GridEvaluator: Newton failed on {:?} seed {}, refining locally",
                        candidate.kind,
                        seed
                    );
                    fallback_refine(&f, seed, lo, hi, tol, &config)
                }
            };
            let Some(u) = root else {
                log::trace!("GridEvaluator: rejected {:?} seed {}", candidate.kind, seed);
                continue;
            };
            let u = domain.clamp(u);

            let point = curve.value(u);
            let square_distance = point.square_distance(p);
            let duplicate = self
                .roots
                .iter()
                .any(|(r, q)| (r - u).abs() < tol || q.distance(&point) < tol);
            if duplicate {
                continue;
            }

            let is_minimum = classify(curve, p, u, square_distance, domain, span, &config);
            if !mode.accepts(is_minimum) {
                continue;
            }

            self.result.extrema.push(PcExtremum {
                parameter: u,
                point,
                square_distance,
                is_minimum,
            });
            self.roots.push((u, point));
            best = Some(match (mode, best) {
                (SearchMode::Max, Some(b)) => b.max(square_distance),
                (_, Some(b)) => b.min(square_distance),
                (_, None) => square_distance,
            });
        }
    }

    fn grid_span(&self) -> f64 {
        match (self.grid.first(), self.grid.last()) {
            (Some(first), Some(last)) => (last.parameter - first.parameter).abs(),
            _ => 0.0,
        }
    }
}

/// Multi-pass local sampling around `seed` within `[lo, hi]`.
///
/// Each pass samples `|F|` across the window, recentres on the best sample,
/// shrinks the window and retries Newton there. When every retry fails, the
/// best sample is accepted only below the looser fallback threshold.
fn fallback_refine<F>(f: &F, seed: f64, lo: f64, hi: f64, tol: f64, config: &ExtremaConfig) -> Option<f64>
where
    F: Fn(f64) -> (f64, f64),
{
    let mut best_u = seed;
    let mut best_f = f(seed).0.abs();
    let mut half_width = 0.5 * (hi - lo);
    let last = config.fallback_samples.saturating_sub(1).max(1);

    for _ in 0..config.fallback_passes {
        let a = (best_u - half_width).max(lo);
        let b = (best_u + half_width).min(hi);
        for k in 0..=last {
            let u = if k == last {
                b
            } else {
                a + (b - a) * k as f64 / last as f64
            };
            let value = f(u).0.abs();
            if value < best_f {
                best_u = u;
                best_f = value;
            }
        }

        half_width *= config.fallback_shrink_ratio;
        let a = (best_u - half_width).max(lo);
        let b = (best_u + half_width).min(hi);
        if let Some(root) = newton_bounded(f, best_u, a, b, &config.newton) {
            return Some(root.root);
        }
    }

    (best_f < tol * config.fallback_factor).then_some(best_u)
}

/// Classify the stationary point `u` by sampling the squared distance a
/// small step to each side. At a domain end only the inward side is used.
pub(crate) fn classify<C: Curve3d + ?Sized>(
    curve: &C,
    p: &Pnt,
    u: f64,
    square_distance: f64,
    domain: Domain1D,
    span: f64,
    config: &ExtremaConfig,
) -> bool {
    let step = (span * config.classify_step_ratio).max(precision::CONFUSION * 1e-3);
    let below = (u - step >= domain.min).then(|| curve.value(u - step).square_distance(p));
    let above = (u + step <= domain.max).then(|| curve.value(u + step).square_distance(p));
    match (below, above) {
        (Some(lo), Some(hi)) => lo + hi >= 2.0 * square_distance,
        (Some(side), None) | (None, Some(side)) => side >= square_distance,
        (None, None) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::{Ax3, Circ, Dir, Lin};
    use std::f64::consts::PI;

    fn evaluator_for<C: Curve3d>(curve: &C, min: f64, max: f64, n: usize) -> GridEvaluator {
        let mut evaluator = GridEvaluator::new();
        let params = GridEvaluator::build_uniform_params(min, max, n).unwrap();
        evaluator.build_grid(curve, &params);
        evaluator
    }

    #[test]
    fn test_uniform_params_exact_endpoint() {
        let params = GridEvaluator::build_uniform_params(0.0, 2.0 * PI, 32).unwrap();
        assert_eq!(params.len(), 32);
        assert_eq!(params[0], 0.0);
        assert_eq!(params[31], 2.0 * PI);
        assert!(params.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_uniform_params_errors() {
        assert_eq!(
            GridEvaluator::build_uniform_params(0.0, 1.0, 1),
            Err(ExtremaError::InvalidSampleCount(1))
        );
        assert!(matches!(
            GridEvaluator::build_uniform_params(1.0, 0.0, 4),
            Err(ExtremaError::InvalidDomain(_))
        ));
        assert!(GridEvaluator::build_uniform_params(0.0, f64::INFINITY, 4).is_err());
    }

    #[test]
    fn test_line_single_minimum() {
        let line = Lin::from_pnt_dir(Pnt::from_coords(-10.0, 0.0, 0.0), Dir::dx());
        let mut evaluator = evaluator_for(&line, 0.0, 20.0, 32);
        let domain = Domain1D::new(0.0, 20.0).unwrap();
        let result = evaluator.perform(&line, &Pnt::from_coords(0.0, 0.0, 5.0), domain, 1e-9, SearchMode::MinMax);
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.nb_ext(), 1);
        let ext = result.extrema[0];
        assert!((ext.parameter - 10.0).abs() < 1e-8, "parameter = {}", ext.parameter);
        assert!((ext.square_distance - 25.0).abs() < 1e-8);
        assert!(ext.is_minimum);
    }

    #[test]
    fn test_circle_min_and_max() {
        let circle = Circ::from_ax3(Ax3::standard(), 1.0).unwrap();
        let mut evaluator = evaluator_for(&circle, 0.0, 2.0 * PI, 32);
        let domain = Domain1D::new(0.0, 2.0 * PI).unwrap();
        let result = evaluator.perform(&circle, &Pnt::from_coords(3.0, 0.0, 0.0), domain, 1e-9, SearchMode::MinMax);
        assert_eq!(result.nb_ext(), 2, "extrema: {:?}", result.extrema);
        let min = result.extrema[result.min_index().unwrap()];
        let max = result.extrema[result.max_index().unwrap()];
        assert!(min.is_minimum && !max.is_minimum);
        assert!((min.square_distance - 4.0).abs() < 1e-8);
        assert!((max.square_distance - 16.0).abs() < 1e-8);
        assert!(min.point.distance(&Pnt::from_coords(1.0, 0.0, 0.0)) < 1e-8);
        assert!(max.point.distance(&Pnt::from_coords(-1.0, 0.0, 0.0)) < 1e-8);
    }

    #[test]
    fn test_mode_filtering() {
        let circle = Circ::from_ax3(Ax3::standard(), 10.0).unwrap();
        let mut evaluator = evaluator_for(&circle, 0.0, 2.0 * PI, 32);
        let domain = Domain1D::new(0.0, 2.0 * PI).unwrap();
        let p = Pnt::from_coords(20.0, 0.0, 0.0);

        let result = evaluator.perform(&circle, &p, domain, 1e-9, SearchMode::Min);
        assert_eq!(result.nb_ext(), 1);
        assert!(result.extrema[0].is_minimum);
        assert!((result.extrema[0].square_distance.sqrt() - 10.0).abs() < 1e-8);

        let result = evaluator.perform(&circle, &p, domain, 1e-9, SearchMode::Max);
        assert_eq!(result.nb_ext(), 1);
        assert!(!result.extrema[0].is_minimum);
        assert!((result.extrema[0].square_distance.sqrt() - 30.0).abs() < 1e-8);
    }

    #[test]
    fn test_circle_centre_is_infinite_family() {
        let circle = Circ::from_ax3(Ax3::standard(), 10.0).unwrap();
        let mut evaluator = evaluator_for(&circle, 0.0, 2.0 * PI, 32);
        let domain = Domain1D::new(0.0, 2.0 * PI).unwrap();
        for mode in [SearchMode::Min, SearchMode::Max, SearchMode::MinMax] {
            let result = evaluator.perform(&circle, &Pnt::new(), domain, 1e-9, mode);
            assert_eq!(result.status, Status::InfiniteSolutions);
            assert_eq!(result.nb_ext(), 0);
            assert!((result.infinite_square_distance.unwrap() - 100.0).abs() < 1e-9);
        }

        // Off the axis the family breaks up again.
        let result = evaluator.perform(&circle, &Pnt::from_coords(1.0, 0.0, 0.0), domain, 1e-9, SearchMode::Min);
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.infinite_square_distance, None);
        assert_eq!(result.nb_ext(), 1);
    }

    #[test]
    fn test_empty_grid_is_no_solution() {
        let line = Lin::from_pnt_dir(Pnt::new(), Dir::dx());
        let mut evaluator = GridEvaluator::new();
        let domain = Domain1D::new(0.0, 1.0).unwrap();
        let result = evaluator.perform(&line, &Pnt::new(), domain, 1e-9, SearchMode::MinMax);
        assert_eq!(result.status, Status::NoSolution);
    }

    #[test]
    fn test_monotone_distance_has_no_candidates() {
        // The point lies far beyond the start of the segment; F never vanishes.
        let line = Lin::from_pnt_dir(Pnt::new(), Dir::dx());
        let mut evaluator = evaluator_for(&line, 0.0, 1.0, 8);
        let domain = Domain1D::new(0.0, 1.0).unwrap();
        let result = evaluator.perform(&line, &Pnt::from_coords(-5.0, 1.0, 0.0), domain, 1e-9, SearchMode::MinMax);
        assert_eq!(result.status, Status::NoSolution);
        assert_eq!(result.nb_ext(), 0);
    }

    #[test]
    fn test_rebuild_grid_same_size() {
        let circle = Circ::from_ax3(Ax3::standard(), 1.0).unwrap();
        let params = GridEvaluator::build_uniform_params(0.0, 2.0 * PI, 16).unwrap();
        let mut evaluator = GridEvaluator::new();
        evaluator.build_grid(&circle, &params);
        let first = evaluator.grid().to_vec();
        evaluator.build_grid(&circle, &params);
        assert_eq!(evaluator.grid(), first.as_slice());

        let bigger = GridEvaluator::build_uniform_params(0.0, 2.0 * PI, 24).unwrap();
        evaluator.build_grid(&circle, &bigger);
        assert_eq!(evaluator.grid().len(), 24);
    }

    #[test]
    fn test_fallback_accepts_flat_root() {
        // F(u) = u^3 has a triple root: Newton from a bracket still converges,
        // but the fallback must also find it from a poor seed.
        let f = |u: f64| (u * u * u, 3.0 * u * u);
        let config = ExtremaConfig::default();
        let root = fallback_refine(&f, 0.9, -1.0, 1.0, 1e-9, &config).expect("fallback failed");
        assert!(root.abs() < 1e-3, "root = {}", root);
    }

    #[test]
    fn test_classify_endpoint_one_sided() {
        let line = Lin::from_pnt_dir(Pnt::new(), Dir::dx());
        let domain = Domain1D::new(0.0, 1.0).unwrap();
        let config = ExtremaConfig::default();
        let p = Pnt::from_coords(-1.0, 0.0, 0.0);
        assert!(classify(&line, &p, 0.0, 1.0, domain, 1.0, &config));
        assert!(!classify(&line, &p, 1.0, 4.0, domain, 1.0, &config));
    }
}
