//! The "divide by z + 1" perspective mapping plane points to screen pixels.
//!
//! A point `(x, z)` is treated as the homogeneous point `(x, 1, z + 1)`:
//! ```text
//! screen_x = x / (z + 1) * scale + center_x
//! screen_y = 1 / (z + 1) * scale + horizon_y
//! ```
//! Lines of constant `z` become horizontal rows which approach the horizon as `z` grows,
//! lines through the origin become rays meeting in the vanishing point `(center_x, horizon_y)`.

use nalgebra::Point2;

/// Screen placement of the projected plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Pixels per projected unit, i.e. the distance between horizon and zero line
    pub scale: f64,

    /// Column of the vanishing point
    pub center_x: f64,

    /// Row of the horizon
    pub horizon_y: f64,
}

impl Projection {
    /// Whether `point` lies in front of the viewer, i.e. `z + 1 > 0`.
    ///
    /// The boundary `z = -1` is excluded as well as NaN.
    pub fn is_visible(point: &Point2<f64>) -> bool {
        point.y + 1.0 > 0.0
    }

    /// Maps `point` to screen coordinates without checking visibility.
    ///
    /// Points close to `z = -1` diverge to huge coordinates, points behind it are mirrored.
    pub fn project_unchecked(&self, point: &Point2<f64>) -> Point2<f64> {
        let w = point.y + 1.0;
        Point2::new(
            point.x / w * self.scale + self.center_x,
            1.0 / w * self.scale + self.horizon_y,
        )
    }

    /// Maps `point` to screen coordinates or `None` if it isn't [visible].
    ///
    /// [visible]: Projection::is_visible
    pub fn project(&self, point: &Point2<f64>) -> Option<Point2<f64>> {
        if Projection::is_visible(point) {
            Some(self.project_unchecked(point))
        } else {
            None
        }
    }

    /// The point every line `x = c * z` converges to, where `z` reaches infinity.
    pub fn vanishing_point(&self) -> Point2<f64> {
        Point2::new(self.center_x, self.horizon_y)
    }

    /// Screen row of the line `z = const`.
    pub fn row(&self, z: f64) -> f64 {
        self.scale / (z + 1.0) + self.horizon_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTION: Projection = Projection {
        scale: 600.0,
        center_x: 700.0,
        horizon_y: 100.0,
    };

    #[test]
    fn zero_line() {
        for x in [-3.0, 0.0, 2.5] {
            let p = PROJECTION.project(&Point2::new(x, 0.0)).unwrap();
            assert_eq!(p.y, PROJECTION.scale + PROJECTION.horizon_y);
            assert_eq!(p.x, x * PROJECTION.scale + PROJECTION.center_x);
        }
        assert_eq!(PROJECTION.row(0.0), 700.0);
    }

    #[test]
    fn visibility_boundary() {
        assert!(PROJECTION.project(&Point2::new(1.0, -1.0)).is_none());
        assert!(PROJECTION.project(&Point2::new(1.0, -2.0)).is_none());
        assert!(PROJECTION.project(&Point2::new(1.0, f64::NAN)).is_none());
        assert!(PROJECTION.project(&Point2::new(1.0, -0.999)).is_some());
    }

    #[test]
    fn diverges_near_boundary() {
        let p = PROJECTION.project(&Point2::new(1.0, -1.0 + 1e-12)).unwrap();
        assert!(p.x > 1e14 && p.y > 1e14);
    }

    #[test]
    fn approaches_horizon() {
        let p = PROJECTION.project(&Point2::new(5.0, 1e9)).unwrap();
        assert!((p - PROJECTION.vanishing_point()).norm() < 1e-3);
    }
}
