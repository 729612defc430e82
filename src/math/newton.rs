//! Safeguarded Newton iteration on a bounded interval.
//!
//! When the interval brackets a sign change the iteration never leaves the
//! bracket: a Newton step that would land outside it is replaced by
//! bisection. Without a bracket, steps are clamped to the interval and the
//! iteration gives up once it is pinned against a bound.

use serde::{Deserialize, Serialize};

/// Stopping criteria for [`newton_bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonConfig {
    /// Step (or bracket width) below which the iteration stops.
    pub x_tolerance: f64,
    /// Residual below which the iteration stops.
    pub f_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            x_tolerance: 1e-12,
            f_tolerance: 1e-14,
            max_iterations: 100,
        }
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRoot {
    pub root: f64,
    /// Function value at `root`.
    pub value: f64,
    pub iterations: usize,
}

/// Find a root of `f` in `[lower, upper]` starting from `seed`.
///
/// `f` returns the function value and its derivative. Returns `None` when
/// the iteration diverges, stalls on a bound, or runs out of iterations.
pub fn newton_bounded<F>(
    f: F,
    seed: f64,
    lower: f64,
    upper: f64,
    config: &NewtonConfig,
) -> Option<NewtonRoot>
where
    F: Fn(f64) -> (f64, f64),
{
    if !(lower <= upper) || !seed.is_finite() {
        return None;
    }

    // Never ask for more digits than the parameter magnitude allows.
    let scale = lower.abs().max(upper.abs()).max(1.0);
    let x_tol = config.x_tolerance.max(4.0 * f64::EPSILON * scale);

    let (f_lower, _) = f(lower);
    let (f_upper, _) = f(upper);
    // (negative side, positive side)
    let mut bracket = if f_lower * f_upper < 0.0 {
        if f_lower < 0.0 {
            Some((lower, upper))
        } else {
            Some((upper, lower))
        }
    } else {
        None
    };

    let mut x = seed.clamp(lower, upper);
    for iteration in 0..config.max_iterations {
        let (fx, dfx) = f(x);
        if !fx.is_finite() {
            return None;
        }
        if fx.abs() <= config.f_tolerance {
            return Some(NewtonRoot {
                root: x,
                value: fx,
                iterations: iteration,
            });
        }

        let newton = if dfx != 0.0 && dfx.is_finite() {
            x - fx / dfx
        } else {
            f64::NAN
        };

        let next = match bracket.as_mut() {
            Some((negative, positive)) => {
                if fx < 0.0 {
                    *negative = x;
                } else {
                    *positive = x;
                }
                let lo = negative.min(*positive);
                let hi = negative.max(*positive);
                if hi - lo <= x_tol {
                    return Some(NewtonRoot {
                        root: x,
                        value: fx,
                        iterations: iteration + 1,
                    });
                }
                if newton.is_finite() && newton > lo && newton < hi {
                    newton
                } else {
                    0.5 * (lo + hi)
                }
            }
            None => {
                if !newton.is_finite() {
                    return None;
                }
                let clamped = newton.clamp(lower, upper);
                if clamped == x && (newton - x).abs() > x_tol {
                    // Pinned against a bound and still pushed outwards.
                    return None;
                }
                clamped
            }
        };

        if (next - x).abs() <= x_tol {
            let (value, _) = f(next);
            return Some(NewtonRoot {
                root: next,
                value,
                iterations: iteration + 1,
            });
        }
        x = next;
    }

    log::trace!(
        "newton_bounded: no convergence after {} iterations from seed {}",
        config.max_iterations,
        seed
    );
    None
}
