//! Distance extrema between geometric entities.
//!
//! - [`pc`]: point to curve, by grid sampling and Newton refinement.
//! - [`ss`]: surface to surface, by closed-form analytic solvers.
//!
//! Both families report through the same [`Status`] vocabulary. Solvers keep
//! their scratch buffers and result between calls, so a single instance must
//! not be shared between threads without external locking.

pub mod pc;
pub mod ss;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::math::NewtonConfig;
use crate::{precision, ExtremaError, Result};

/// Which kind of extrema a search reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    Min,
    Max,
    #[default]
    MinMax,
}

impl SearchMode {
    #[inline]
    pub fn includes_min(self) -> bool {
        matches!(self, SearchMode::Min | SearchMode::MinMax)
    }

    #[inline]
    pub fn includes_max(self) -> bool {
        matches!(self, SearchMode::Max | SearchMode::MinMax)
    }

    /// Whether an extremum of the given kind passes this mode's filter.
    #[inline]
    pub fn accepts(self, is_minimum: bool) -> bool {
        if is_minimum {
            self.includes_min()
        } else {
            self.includes_max()
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The search completed. The extrema list may legitimately be empty.
    Ok,
    /// There was nothing to search.
    #[default]
    NoSolution,
    /// A continuum of equally extremal points exists; the result carries
    /// the representative squared distance.
    InfiniteSolutions,
}

/// Closed parameter interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain1D {
    pub min: f64,
    pub max: f64,
}

impl Domain1D {
    /// Create a domain, rejecting NaN bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ExtremaError::InvalidDomain(format!(
                "[{}, {}] is not a valid parameter interval",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, t: f64, tol: f64) -> bool {
        t >= self.min - tol && t <= self.max + tol
    }

    #[inline]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.min, self.max)
    }

    /// True when either bound is at or beyond [`precision::INFINITE`].
    pub fn is_infinite(&self) -> bool {
        precision::is_infinite(self.min) || precision::is_infinite(self.max)
    }
}

/// Parameter rectangle of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain2D {
    pub u_min: f64,
    pub u_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

impl Domain2D {
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Result<Self> {
        Domain1D::new(u_min, u_max)?;
        Domain1D::new(v_min, v_max)?;
        Ok(Self {
            u_min,
            u_max,
            v_min,
            v_max,
        })
    }

    /// The unbounded rectangle.
    pub const fn unbounded() -> Self {
        Self {
            u_min: -precision::INFINITE,
            u_max: precision::INFINITE,
            v_min: -precision::INFINITE,
            v_max: precision::INFINITE,
        }
    }

    #[inline]
    pub fn contains(&self, u: f64, v: f64, tol: f64) -> bool {
        u >= self.u_min - tol && u <= self.u_max + tol && v >= self.v_min - tol && v <= self.v_max + tol
    }
}

impl Default for Domain2D {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Parameter domains of a surface pair, in the solver's argument order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain4D {
    pub domain1: Domain2D,
    pub domain2: Domain2D,
}

impl Domain4D {
    pub const fn new(domain1: Domain2D, domain2: Domain2D) -> Self {
        Self { domain1, domain2 }
    }

    pub fn contains(&self, u1: f64, v1: f64, u2: f64, v2: f64, tol: f64) -> bool {
        self.domain1.contains(u1, v1, tol) && self.domain2.contains(u2, v2, tol)
    }

    /// Same domains with the two surfaces exchanged.
    pub const fn swapped(&self) -> Self {
        Self {
            domain1: self.domain2,
            domain2: self.domain1,
        }
    }
}

/// Tuned constants of the extrema searches.
///
/// Every field has a default, so partial documents deserialize:
///
/// ```
/// let config: cascade_extrema::ExtremaConfig =
///     serde_json::from_str(r#"{ "nb_samples": 64 }"#).unwrap();
/// assert_eq!(config.nb_samples, 64);
/// assert_eq!(config.min_skip_ratio, 1.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtremaConfig {
    /// Grid size used by [`pc::CurveExtrema`].
    pub nb_samples: usize,
    /// A grid point is a NearZero seed when `|F| < tol * near_zero_factor`.
    pub near_zero_factor: f64,
    /// Min mode stops once a seed estimate exceeds `best * min_skip_ratio`.
    pub min_skip_ratio: f64,
    /// Max mode stops once a seed estimate falls below `best * max_skip_ratio`.
    pub max_skip_ratio: f64,
    pub fallback_passes: usize,
    pub fallback_samples: usize,
    /// Window scale applied after each fallback pass.
    pub fallback_shrink_ratio: f64,
    /// Fallback acceptance threshold is `tol * fallback_factor`.
    pub fallback_factor: f64,
    /// Classification offset relative to the domain width.
    pub classify_step_ratio: f64,
    pub angular_tolerance: f64,
    pub newton: NewtonConfig,
}

impl Default for ExtremaConfig {
    fn default() -> Self {
        Self {
            nb_samples: 32,
            near_zero_factor: 10.0,
            min_skip_ratio: 1.1,
            max_skip_ratio: 0.9,
            fallback_passes: 5,
            fallback_samples: 11,
            fallback_shrink_ratio: 0.25,
            fallback_factor: 100.0,
            classify_step_ratio: 1e-4,
            angular_tolerance: precision::ANGULAR,
            newton: NewtonConfig::default(),
        }
    }
}

impl ExtremaConfig {
    /// Check that every constant is usable.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f64) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ExtremaError::InvalidConfig(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )))
            }
        }

        if self.nb_samples < 2 {
            return Err(ExtremaError::InvalidSampleCount(self.nb_samples));
        }
        if self.fallback_samples < 2 {
            return Err(ExtremaError::InvalidConfig(format!(
                "fallback_samples must be at least 2, got {}",
                self.fallback_samples
            )));
        }
        if self.newton.max_iterations == 0 {
            return Err(ExtremaError::InvalidConfig(
                "newton.max_iterations must be at least 1".to_string(),
            ));
        }
        positive("near_zero_factor", self.near_zero_factor)?;
        positive("fallback_factor", self.fallback_factor)?;
        positive("classify_step_ratio", self.classify_step_ratio)?;
        positive("angular_tolerance", self.angular_tolerance)?;
        positive("newton.x_tolerance", self.newton.x_tolerance)?;
        positive("newton.f_tolerance", self.newton.f_tolerance)?;
        positive("min_skip_ratio", self.min_skip_ratio)?;
        positive("max_skip_ratio", self.max_skip_ratio)?;
        if self.min_skip_ratio < 1.0 {
            return Err(ExtremaError::InvalidConfig(format!(
                "min_skip_ratio must be >= 1, got {}",
                self.min_skip_ratio
            )));
        }
        if self.max_skip_ratio > 1.0 {
            return Err(ExtremaError::InvalidConfig(format!(
                "max_skip_ratio must be <= 1, got {}",
                self.max_skip_ratio
            )));
        }
        if !(self.fallback_shrink_ratio > 0.0 && self.fallback_shrink_ratio < 1.0) {
            return Err(ExtremaError::InvalidConfig(format!(
                "fallback_shrink_ratio must lie in (0, 1), got {}",
                self.fallback_shrink_ratio
            )));
        }
        Ok(())
    }
}

/// Map an angle to `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let a = angle.rem_euclid(two_pi);
    // rem_euclid may round up to exactly 2π for tiny negative inputs.
    if a >= two_pi {
        0.0
    } else {
        a
    }
}

/// Shift a periodic angle by a multiple of 2π into `[lower, lower + 2π)`.
///
/// Values within `tol` below `lower + 2π` wrap to just below `lower`, so an
/// angle on the lower bound is not pushed to the far end by rounding. An
/// unbounded `lower` falls back to [`normalize_angle`].
pub fn shift_periodic(angle: f64, lower: f64, tol: f64) -> f64 {
    if precision::is_infinite(lower) {
        return normalize_angle(angle);
    }
    let two_pi = 2.0 * PI;
    let shifted = lower + (angle - lower).rem_euclid(two_pi);
    if shifted - lower >= two_pi - tol {
        shifted - two_pi
    } else {
        shifted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_filters() {
        assert!(SearchMode::Min.accepts(true));
        assert!(!SearchMode::Min.accepts(false));
        assert!(SearchMode::Max.accepts(false));
        assert!(!SearchMode::Max.accepts(true));
        assert!(SearchMode::MinMax.accepts(true) && SearchMode::MinMax.accepts(false));
        assert_eq!(SearchMode::default(), SearchMode::MinMax);
    }

    #[test]
    fn test_domain_validation() {
        assert!(Domain1D::new(1.0, 0.0).is_err());
        assert!(Domain1D::new(f64::NAN, 0.0).is_err());
        let d = Domain1D::new(0.0, 2.0).unwrap();
        assert_eq!(d.width(), 2.0);
        assert!(d.contains(2.0 + 1e-9, 1e-8));
        assert!(!d.contains(-0.1, 1e-8));
        assert!(Domain2D::new(0.0, 1.0, 3.0, 2.0).is_err());
    }

    #[test]
    fn test_domain4d_swapped() {
        let a = Domain2D::new(0.0, 1.0, 0.0, 1.0).unwrap();
        let b = Domain2D::new(-5.0, 5.0, -5.0, 5.0).unwrap();
        let d = Domain4D::new(a, b);
        assert!(d.contains(0.5, 0.5, 4.0, -4.0, 0.0));
        assert!(!d.swapped().contains(0.5, 0.5, 4.0, -4.0, 0.0));
        assert!(Domain4D::default().contains(1e50, -1e50, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_shift_periodic() {
        assert!((shift_periodic(1.5 * PI, -PI, 1e-9) + 0.5 * PI).abs() < 1e-14);
        assert!((shift_periodic(0.5 * PI, -PI, 1e-9) - 0.5 * PI).abs() < 1e-14);
        assert!((shift_periodic(-0.5 * PI, 0.0, 1e-9) - 1.5 * PI).abs() < 1e-14);
        assert!((shift_periodic(9.0, 2.0, 1e-9) - (9.0 - 2.0 * PI)).abs() < 1e-14);
        // Rounding just under the lower bound stays on it.
        assert!((shift_periodic(1.0 - 1e-13, 1.0, 1e-9) - 1.0).abs() < 1e-12);
        assert!((shift_periodic(-0.5 * PI, -precision::INFINITE, 1e-9) - 1.5 * PI).abs() < 1e-14);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-15);
        assert_eq!(normalize_angle(2.0 * PI), 0.0);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-14);
        let tiny = normalize_angle(-1e-18);
        assert!((0.0..2.0 * PI).contains(&tiny));
    }

    #[test]
    fn test_config_validation() {
        assert!(ExtremaConfig::default().validate().is_ok());
        let bad = ExtremaConfig {
            nb_samples: 1,
            ..ExtremaConfig::default()
        };
        assert_eq!(bad.validate(), Err(ExtremaError::InvalidSampleCount(1)));
        let bad = ExtremaConfig {
            fallback_shrink_ratio: 1.5,
            ..ExtremaConfig::default()
        };
        assert!(matches!(bad.validate(), Err(ExtremaError::InvalidConfig(_))));
        let bad = ExtremaConfig {
            near_zero_factor: f64::NAN,
            ..ExtremaConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
