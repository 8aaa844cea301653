//! Discretization of parametric plane curves.
//!
//! A curve is any function mapping a parameter `t` to a point `(x, z)`.
//! Sampling evaluates it on an evenly spaced grid of parameters.

use crate::error::{PlotError, Result};
use nalgebra::Point2;
use num::ToPrimitive;

/// A parametric plane curve `t -> (x, z)`.
///
/// Implemented by the named curves in [`CurveKind`](crate::curve::CurveKind)
/// and by every closure `Fn(f64) -> Point2<f64>`.
pub trait Parametric {
    /// Evaluates the curve at parameter `t`.
    ///
    /// Singularities are not guarded, they yield NaN or infinite coordinates.
    fn eval(&self, t: f64) -> Point2<f64>;
}

impl<F: Fn(f64) -> Point2<f64>> Parametric for F {
    fn eval(&self, t: f64) -> Point2<f64> {
        self(t)
    }
}

/// Number of parameters `t0 + i * step` lying in `[t0, t1)`.
///
/// Fails if `step` isn't strictly positive or a bound isn't finite,
/// since either would never stop producing parameters.
pub fn sample_count(t0: f64, t1: f64, step: f64) -> Result<usize> {
    if !(step > 0.0) {
        return Err(PlotError::InvalidStep { step });
    }
    if !t0.is_finite() || !t1.is_finite() {
        return Err(PlotError::UnboundedInterval { t0, t1 });
    }
    if t0 >= t1 {
        return Ok(0);
    }
    ((t1 - t0) / step)
        .ceil()
        .to_usize()
        .ok_or(PlotError::UnboundedInterval { t0, t1 })
}

/// Iterator over the parameters `t0, t0 + step, t0 + 2 * step, ...` below `t1`.
///
/// Each parameter is computed from its index so rounding errors don't add up.
pub fn parameters(t0: f64, t1: f64, step: f64) -> Result<impl ExactSizeIterator<Item = f64>> {
    let n = sample_count(t0, t1, step)?;
    Ok((0..n).map(move |i| t0 + i as f64 * step))
}

/// Samples `curve` at every parameter of [`parameters`], preserving parameter order.
///
/// ```
/// use nalgebra::Point2;
/// use projplot::sample::sample;
///
/// let points = sample(&|t: f64| Point2::new(t, t * t), 0.0, 2.0, 1.0).unwrap();
/// assert_eq!(points, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
/// ```
pub fn sample<C: Parametric + ?Sized>(
    curve: &C,
    t0: f64,
    t1: f64,
    step: f64,
) -> Result<Vec<Point2<f64>>> {
    Ok(parameters(t0, t1, step)?.map(|t| curve.eval(t)).collect())
}
