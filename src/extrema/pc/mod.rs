//! Point to curve extrema.
//!
//! [`GridEvaluator`] is the reusable numeric core: it samples a curve once
//! and answers repeated queries against the cached grid. [`CurveExtrema`]
//! binds it to one curve and domain and adds the endpoint checks.

mod curve;
mod grid_evaluator;

pub use curve::CurveExtrema;
pub use grid_evaluator::{GridEvaluator, GridPoint};

use crate::extrema::Status;
use crate::gp::Pnt;

/// One extremum of the distance from a point to a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcExtremum {
    /// Curve parameter.
    pub parameter: f64,
    /// Curve point at `parameter`.
    pub point: Pnt,
    pub square_distance: f64,
    pub is_minimum: bool,
}

/// Outcome of a point-curve query.
///
/// Extrema are kept in the order they were accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PcResult {
    pub status: Status,
    pub extrema: Vec<PcExtremum>,
    /// Set only when `status` is [`Status::InfiniteSolutions`]: every curve
    /// point is at this squared distance and `extrema` is empty.
    pub infinite_square_distance: Option<f64>,
}

impl PcResult {
    /// Reset to an empty `NoSolution` result, keeping the allocation.
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

    /// Index of the extremum with the smallest squared distance.
    pub fn min_index(&self) -> Option<usize> {
        self.extrema
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.square_distance.total_cmp(&b.1.square_distance))
            .map(|(i, _)| i)
    }

    /// Index of the extremum with the largest squared distance.
    pub fn max_index(&self) -> Option<usize> {
        self.extrema
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.square_distance.total_cmp(&b.1.square_distance))
            .map(|(i, _)| i)
    }

    /// Smallest squared distance, or the constant distance of an infinite
    /// family.
    pub fn min_square_distance(&self) -> Option<f64> {
        self.min_index()
            .map(|i| self.extrema[i].square_distance)
            .or(self.infinite_square_distance)
    }

    pub fn max_square_distance(&self) -> Option<f64> {
        self.max_index()
            .map(|i| self.extrema[i].square_distance)
            .or(self.infinite_square_distance)
    }
}
