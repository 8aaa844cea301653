//! Paints a scene through the projection onto a [`Canvas`].
//!
//! Painting order is background, guides, then every curve's points followed by its segments.

use crate::color::{BLACK, WHITE};
use crate::config::SceneConfig;
use crate::curve::Curve;
use crate::draw::Canvas;
use crate::projection::Projection;
use crate::scene::Scene;
use nalgebra::Point2;
use smallvec::SmallVec;
use std::ops::AddAssign;
use tracing::{debug, trace};

/// A line segment in screen coordinates
pub type Segment = (Point2<f64>, Point2<f64>);

/// Counts of what a render call drew and dropped
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Visible points drawn as disks
    pub points: usize,
    /// Segments drawn between two visible points
    pub segments: usize,
    /// Points dropped for lying at or behind `z = -1`
    pub culled: usize,
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.points += rhs.points;
        self.segments += rhs.segments;
        self.culled += rhs.culled;
    }
}

/// Computes the horizon line and the grid for `config`.
///
/// The grid is the image of the unit lattice's first `grid_lines` steps:
/// - the zero line `z = 0` and the center axis `x = 0`,
/// - for `i` in `1..grid_lines` the rays `x = +-i` running into the vanishing point,
/// - for `i` in `2..grid_lines` the rows of `z = i - 1`.
///
/// Without grid lines only the horizon remains.
pub fn guides(config: &SceneConfig) -> SmallVec<[Segment; 8]> {
    let projection = config.projection();
    let width = f64::from(config.width);
    let horizon = projection.horizon_y;
    let vanishing = projection.vanishing_point();

    let mut lines = SmallVec::new();
    lines.push((Point2::new(0.0, horizon), Point2::new(width, horizon)));
    if config.grid_lines == 0 {
        return lines;
    }

    let zero = projection.row(0.0);
    lines.push((Point2::new(0.0, zero), Point2::new(width, zero)));
    lines.push((projection.project_unchecked(&Point2::new(0.0, 0.0)), vanishing));
    for i in 1..config.grid_lines {
        let i = f64::from(i);
        lines.push((projection.project_unchecked(&Point2::new(i, 0.0)), vanishing));
        lines.push((projection.project_unchecked(&Point2::new(-i, 0.0)), vanishing));
    }
    for i in 2..config.grid_lines {
        let row = projection.row(f64::from(i) - 1.0);
        lines.push((Point2::new(0.0, row), Point2::new(width, row)));
    }
    trace!(grid_lines = config.grid_lines, guides = lines.len(), "computed guides");
    lines
}

/// Draws a single curve's visible points and the segments between them.
///
/// A segment is drawn only if both its ends are visible,
/// otherwise it is dropped as a whole without clipping.
pub fn render_curve<C: Canvas + ?Sized>(
    curve: &Curve,
    projection: &Projection,
    point_size: f64,
    canvas: &mut C,
) -> RenderStats {
    let mut stats = RenderStats::default();
    let color = curve.color();

    for point in curve.points() {
        match projection.project(point) {
            Some(screen) => {
                canvas.disk(screen, point_size, color);
                stats.points += 1;
            }
            None => stats.culled += 1,
        }
    }

    for (from, to) in curve.segments() {
        if let (Some(from), Some(to)) = (projection.project(from), projection.project(to)) {
            canvas.line(from, to, color);
            stats.segments += 1;
        }
    }
    stats
}

/// Paints the whole `scene` onto `canvas`.
///
/// Never fails: coordinates far off the surface are handed to the canvas as they are.
pub fn render<C: Canvas + ?Sized>(scene: &Scene, canvas: &mut C) -> RenderStats {
    let config = scene.config();
    let projection = config.projection();

    canvas.fill(config.width, config.height, BLACK);
    for (from, to) in guides(config) {
        canvas.line(from, to, WHITE);
    }

    let mut stats = RenderStats::default();
    for curve in scene.curves() {
        stats += render_curve(curve, &projection, f64::from(config.point_size), canvas);
    }
    debug!(
        curves = scene.curves().len(),
        points = stats.points,
        segments = stats.segments,
        culled = stats.culled,
        "rendered scene"
    );
    stats
}
