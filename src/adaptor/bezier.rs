//! Bezier curve evaluated with De Casteljau's algorithm.

use super::Curve3d;
use crate::gp::{Pnt, Vec3, XYZ};
use crate::{ExtremaError, Result};

/// A polynomial Bezier curve on `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    poles: Vec<XYZ>,
    /// First hodograph: `n (P_{i+1} - P_i)`.
    d1_poles: Vec<XYZ>,
    /// Second hodograph.
    d2_poles: Vec<XYZ>,
}

impl BezierCurve {
    /// Create a Bezier curve from its control points.
    ///
    /// # Returns
    /// An error if fewer than two poles are given or a pole is not finite.
    pub fn new(poles: Vec<Pnt>) -> Result<Self> {
        if poles.len() < 2 {
            return Err(ExtremaError::InvalidGeometry(format!(
                "Bezier curve requires at least two poles, got {}",
                poles.len()
            )));
        }
        if poles.iter().any(|p| !p.xyz().is_finite()) {
            return Err(ExtremaError::InvalidGeometry(
                "Bezier curve poles must be finite".to_string(),
            ));
        }
        let poles: Vec<XYZ> = poles.iter().map(|p| *p.xyz()).collect();
        let d1_poles = hodograph(&poles);
        let d2_poles = hodograph(&d1_poles);
        Ok(Self {
            poles,
            d1_poles,
            d2_poles,
        })
    }

    pub fn degree(&self) -> usize {
        self.poles.len() - 1
    }

    pub fn nb_poles(&self) -> usize {
        self.poles.len()
    }

    pub fn pole(&self, index: usize) -> Option<Pnt> {
        self.poles.get(index).map(|xyz| Pnt::from_xyz(*xyz))
    }
}

fn hodograph(poles: &[XYZ]) -> Vec<XYZ> {
    let n = poles.len().saturating_sub(1) as f64;
    poles.windows(2).map(|w| (w[1] - w[0]) * n).collect()
}

fn de_casteljau(poles: &[XYZ], t: f64) -> XYZ {
    if poles.is_empty() {
        return XYZ::new();
    }
    let mut points = poles.to_vec();
    for level in (1..points.len()).rev() {
        for i in 0..level {
            points[i] = points[i] * (1.0 - t) + points[i + 1] * t;
        }
    }
    points[0]
}

impl Curve3d for BezierCurve {
    fn first_parameter(&self) -> f64 {
        0.0
    }

    fn last_parameter(&self) -> f64 {
        1.0
    }

    fn value(&self, u: f64) -> Pnt {
        Pnt::from_xyz(de_casteljau(&self.poles, u))
    }

    fn d1(&self, u: f64) -> (Pnt, Vec3) {
        (
            self.value(u),
            Vec3::from_xyz(de_casteljau(&self.d1_poles, u)),
        )
    }

    fn d2(&self, u: f64) -> (Pnt, Vec3, Vec3) {
        let (p, v1) = self.d1(u);
        (p, v1, Vec3::from_xyz(de_casteljau(&self.d2_poles, u)))
    }
}
