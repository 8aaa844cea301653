//! Curve tables of the two stock scenes.
//!
//! Both show the same collection of curves and only differ in how the conics are
//! parametrized and in how dense the grid is drawn.

use crate::curve::CurveKind;
use crate::scene::CurveSpec;
use std::f64::consts::{FRAC_PI_2, TAU};

/// First parameter of the cubic's upper branch, its only real root
pub const CUBIC_ROOT: f64 = -0.324717957;

/// First parameter of the rational hyperbola
///
/// Offset by half a step so no sample lands on its singularity at `t = 0`.
pub const HYPERBOLA_T0: f64 = -200.005;

/// Conics in rational parametrization
pub const RATIONAL: [CurveSpec; 8] = [
    CurveSpec::new(0xff0000, CurveKind::Line { slope: 1.0, offset: 0.0 }, -2.0, 200.0, 0.04),
    CurveSpec::new(0x00ff00, CurveKind::Line { slope: 1.0, offset: -1.0 }, -2.0, 200.0, 0.04),
    CurveSpec::new(0x66aaff, CurveKind::Parabola, -200.0, 200.0, 0.04),
    CurveSpec::new(0xffee00, CurveKind::Vertical { x: 1.0 }, -2.0, 200.0, 0.04),
    CurveSpec::new(0xff99ff, CurveKind::Cubic, CUBIC_ROOT, 200.0, 0.01),
    CurveSpec::new(0x00ffff, CurveKind::RationalCircle, -100.0, 100.0, 0.05),
    CurveSpec::new(0xff57f29, CurveKind::Tangent, -FRAC_PI_2, FRAC_PI_2, 0.005),
    CurveSpec::new(0xcc00cc, CurveKind::RationalHyperbola, HYPERBOLA_T0, 200.0, 0.01),
];

/// Conics in trigonometric parametrization
pub const TRIGONOMETRIC: [CurveSpec; 8] = [
    CurveSpec::new(0xff0000, CurveKind::Line { slope: 1.0, offset: 0.0 }, -2.0, 200.0, 0.04),
    CurveSpec::new(0x00ff00, CurveKind::Line { slope: 1.0, offset: -1.0 }, -2.0, 200.0, 0.04),
    CurveSpec::new(0x66aaff, CurveKind::Parabola, -200.0, 200.0, 0.04),
    CurveSpec::new(0xffee00, CurveKind::Vertical { x: 1.0 }, -2.0, 200.0, 0.04),
    CurveSpec::new(0xff99ff, CurveKind::Cubic, CUBIC_ROOT, 200.0, 0.01),
    CurveSpec::new(0x00ffff, CurveKind::TrigCircle, 0.0, TAU, 0.01),
    CurveSpec::new(0xff57f29, CurveKind::Tangent, -FRAC_PI_2, FRAC_PI_2, 0.005),
    CurveSpec::new(0xcc00cc, CurveKind::TrigHyperbola, -FRAC_PI_2, FRAC_PI_2, 0.005),
];

/// Grid steps drawn with [`TRIGONOMETRIC`]
pub const TRIGONOMETRIC_GRID_LINES: u32 = 6;
