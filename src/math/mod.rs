//! Scalar numerics used by the iterative solvers.

mod newton;

pub use newton::{newton_bounded, NewtonConfig, NewtonRoot};
