//! Point to curve extrema bound to one curve.

use crate::adaptor::Curve3d;
use crate::extrema::pc::grid_evaluator::classify;
use crate::extrema::pc::{GridEvaluator, PcExtremum, PcResult};
use crate::extrema::{Domain1D, ExtremaConfig, SearchMode, Status};
use crate::gp::Pnt;
use crate::{precision, ExtremaError, Result};

/// Extrema of the distance from points to a fixed curve.
///
/// The sample grid is built once at construction; every query reuses it.
pub struct CurveExtrema<'a, C: Curve3d + ?Sized> {
    curve: &'a C,
    domain: Domain1D,
    evaluator: GridEvaluator,
}

impl<'a, C: Curve3d + ?Sized> CurveExtrema<'a, C> {
    /// Search over the curve's own parameter range.
    pub fn new(curve: &'a C) -> Result<Self> {
        Self::with_config(curve, None, ExtremaConfig::default())
    }

    /// Search over `domain` instead of the curve's range.
    pub fn with_domain(curve: &'a C, domain: Domain1D) -> Result<Self> {
        Self::with_config(curve, Some(domain), ExtremaConfig::default())
    }

    pub fn with_config(curve: &'a C, domain: Option<Domain1D>, config: ExtremaConfig) -> Result<Self> {
        let domain = match domain {
            Some(domain) => domain,
            None => Domain1D::new(curve.first_parameter(), curve.last_parameter())?,
        };
        if domain.is_infinite() {
            return Err(ExtremaError::InvalidDomain(format!(
                "curve range [{}, {}] is unbounded, an explicit domain is required",
                domain.min, domain.max
            )));
        }
        let mut evaluator = GridEvaluator::with_config(config)?;
        let params = GridEvaluator::build_uniform_params(domain.min, domain.max, config.nb_samples)?;
        evaluator.build_grid(curve, &params);
        Ok(Self {
            curve,
            domain,
            evaluator,
        })
    }

    #[inline]
    pub fn domain(&self) -> Domain1D {
        self.domain
    }

    #[inline]
    pub fn curve(&self) -> &C {
        self.curve
    }

    /// Interior extrema only.
    pub fn perform(&mut self, p: &Pnt, tol: f64, mode: SearchMode) -> &PcResult {
        self.evaluator.perform(self.curve, p, self.domain, tol, mode)
    }

    /// Interior extrema plus the domain ends.
    ///
    /// Each end is reported as a minimum when the distance grows inwards and
    /// as a maximum otherwise, unless it coincides with an interior extremum.
    pub fn perform_with_endpoints(&mut self, p: &Pnt, tol: f64, mode: SearchMode) -> &PcResult {
        let tol = if tol.is_finite() && tol > 0.0 {
            tol
        } else {
            precision::CONFUSION
        };
        if self.evaluator.perform(self.curve, p, self.domain, tol, mode).status == Status::InfiniteSolutions {
            return self.evaluator.result();
        }

        let config = *self.evaluator.config();
        let ends = if self.domain.width() > 0.0 {
            vec![self.domain.min, self.domain.max]
        } else {
            vec![self.domain.min]
        };

        for u in ends {
            let point = self.curve.value(u);
            let square_distance = point.square_distance(p);
            let result = self.evaluator.result_mut();
            let known = result
                .extrema
                .iter()
                .any(|e| (e.parameter - u).abs() < tol || e.point.distance(&point) < tol);
            if known {
                continue;
            }
            let is_minimum = classify(
                self.curve,
                p,
                u,
                square_distance,
                self.domain,
                self.domain.width(),
                &config,
            );
            if !mode.accepts(is_minimum) {
                continue;
            }
            let result = self.evaluator.result_mut();
            result.extrema.push(PcExtremum {
                parameter: u,
                point,
                square_distance,
                is_minimum,
            });
            if result.status == Status::NoSolution {
                result.status = Status::Ok;
            }
            log::trace!("CurveExtrema: endpoint {} accepted (minimum: {})", u, is_minimum);
        }
        self.evaluator.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::{Ax3, Circ, Dir, Lin};
    use std::f64::consts::PI;

    #[test]
    fn test_infinite_line_needs_domain() {
        let line = Lin::from_pnt_dir(Pnt::new(), Dir::dx());
        assert!(matches!(CurveExtrema::new(&line), Err(ExtremaError::InvalidDomain(_))));
        assert!(CurveExtrema::with_domain(&line, Domain1D::new(-1.0, 1.0).unwrap()).is_ok());
    }

    #[test]
    fn test_endpoints_of_segment() {
        let line = Lin::from_pnt_dir(Pnt::new(), Dir::dx());
        let mut extrema = CurveExtrema::with_domain(&line, Domain1D::new(0.0, 1.0).unwrap()).unwrap();
        let p = Pnt::from_coords(-2.0, 0.0, 0.0);

        assert_eq!(extrema.perform(&p, 1e-9, SearchMode::MinMax).status, Status::NoSolution);

        let result = extrema.perform_with_endpoints(&p, 1e-9, SearchMode::MinMax);
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.nb_ext(), 2);
        let min = result.extrema[result.min_index().unwrap()];
        let max = result.extrema[result.max_index().unwrap()];
        assert!(min.is_minimum && min.parameter == 0.0 && (min.square_distance - 4.0).abs() < 1e-12);
        assert!(!max.is_minimum && max.parameter == 1.0 && (max.square_distance - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_closed_curve_endpoints_not_duplicated() {
        let circle = Circ::from_ax3(Ax3::standard(), 1.0).unwrap();
        let mut extrema = CurveExtrema::new(&circle).unwrap();
        let result = extrema.perform_with_endpoints(&Pnt::from_coords(3.0, 0.0, 0.0), 1e-9, SearchMode::MinMax);
        assert_eq!(result.nb_ext(), 2, "extrema: {:?}", result.extrema);
    }

    #[test]
    fn test_circle_centre_skips_endpoints() {
        let circle = Circ::from_ax3(Ax3::standard(), 2.0).unwrap();
        let mut extrema = CurveExtrema::new(&circle).unwrap();
        let result = extrema.perform_with_endpoints(&Pnt::new(), 1e-9, SearchMode::MinMax);
        assert_eq!(result.status, Status::InfiniteSolutions);
        assert_eq!(result.nb_ext(), 0);
        assert!((result.min_square_distance().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_arc_max_mode_stays_in_domain() {
        let circle = Circ::from_ax3(Ax3::standard(), 10.0).unwrap();
        let domain = Domain1D::new(0.0, PI / 2.0).unwrap();
        let mut extrema = CurveExtrema::with_domain(&circle, domain).unwrap();
        let result = extrema.perform_with_endpoints(&Pnt::from_coords(20.0, 0.0, 0.0), 1e-9, SearchMode::Max);
        assert!(result.nb_ext() >= 1);
        for ext in &result.extrema {
            assert!(domain.contains(ext.parameter, 1e-9));
            assert!(!ext.is_minimum);
        }
    }
}
