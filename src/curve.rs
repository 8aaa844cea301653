//! Named plane curves and their sampled form.

use crate::color::Rgb;
use crate::error::Result;
use crate::sample::{sample, Parametric};
use nalgebra::Point2;
use tracing::debug;

/// The parametrizations the plotter knows by name.
///
/// Every variant maps a parameter `t` to a point `(x, z)` on its curve.
/// Rational forms of the conics are singular at some `t`, the trigonometric
/// forms at odd multiples of `pi / 2` for the hyperbola.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CurveKind {
    /// The line `z = slope * x + offset` parametrized by `x = t`
    Line {
        /// Rise per unit of `x`
        slope: f64,
        /// Value at `x = 0`
        offset: f64,
    },

    /// The vertical line `x = x` parametrized by `z = t`
    Vertical {
        /// Constant abscissa
        x: f64,
    },

    /// The parabola `z = x^2`
    Parabola,

    /// Upper branch of the cubic `z^2 = x^3 - 3x^2 + 2x + 1`
    ///
    /// Real for `t` above the cubic's only root, about `-0.324717957`.
    Cubic,

    /// The unit circle as `((1 - t^2) / (1 + t^2), 2t / (1 + t^2))`
    ///
    /// Covers every point but `(-1, 0)` which is approached for `|t| -> inf`.
    RationalCircle,

    /// The unit circle as `(cos t, sin t)`
    TrigCircle,

    /// The graph `z = tan x`
    Tangent,

    /// The hyperbola `x^2 - z^2 = 1` as `((1 + t^2) / 2t, (1 - t^2) / 2t)`
    ///
    /// Singular at `t = 0`, where it switches branches.
    RationalHyperbola,

    /// The right branch of `x^2 - z^2 = 1` as `(sec t, tan t)`
    TrigHyperbola,
}

impl Parametric for CurveKind {
    fn eval(&self, t: f64) -> Point2<f64> {
        match *self {
            CurveKind::Line { slope, offset } => Point2::new(t, slope * t + offset),
            CurveKind::Vertical { x } => Point2::new(x, t),
            CurveKind::Parabola => Point2::new(t, t * t),
            CurveKind::Cubic => {
                let u = t - 1.0;
                Point2::new(t, (u * u * u - t + 2.0).sqrt())
            }
            CurveKind::RationalCircle => {
                let d = 1.0 + t * t;
                Point2::new((1.0 - t * t) / d, 2.0 * t / d)
            }
            CurveKind::TrigCircle => {
                let (sin, cos) = t.sin_cos();
                Point2::new(cos, sin)
            }
            CurveKind::Tangent => Point2::new(t, t.tan()),
            CurveKind::RationalHyperbola => {
                let d = 2.0 * t;
                Point2::new((1.0 + t * t) / d, (1.0 - t * t) / d)
            }
            CurveKind::TrigHyperbola => {
                let (sin, cos) = t.sin_cos();
                Point2::new(1.0 / cos, sin / cos)
            }
        }
    }
}

/// A curve sampled into an ordered sequence of points, ready to be drawn.
///
/// The points keep the order of their parameters.
/// Consecutive points are considered connected.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    color: Rgb,
    points: Vec<Point2<f64>>,
}

impl Curve {
    /// Samples `function` over `[t0, t1)` every `step`.
    ///
    /// Fails only for a step or interval which would never finish sampling.
    pub fn sample<F: Parametric + ?Sized>(
        color: Rgb,
        function: &F,
        t0: f64,
        t1: f64,
        step: f64,
    ) -> Result<Self> {
        let points = sample(function, t0, t1, step)?;
        debug!(%color, t0, t1, step, points = points.len(), "sampled curve");
        Ok(Curve { color, points })
    }

    /// Wraps already sampled points.
    pub fn from_points(color: Rgb, points: Vec<Point2<f64>>) -> Self {
        Curve { color, points }
    }

    /// Color the curve is drawn with
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Sampled points in parameter order
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Pairs of consecutive points, i.e. the curve's segments before culling.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2<f64>, &Point2<f64>)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}
