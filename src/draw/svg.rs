//! Draw a scene into a svg document

use crate::color::Rgb;
use crate::draw::Canvas;
use crate::svg::{Circle, Line, Rectangle, SVG};
use nalgebra::Point2;

/// Snaps a coordinate onto the integer pixel grid.
///
/// Truncates towards zero and saturates at the bounds of `i32`, NaN becomes `0`.
/// This keeps diverging points near the vanishing line representable in the document.
pub fn pixel(point: Point2<f64>) -> Point2<i32> {
    Point2::new(point.x as i32, point.y as i32)
}

/// This type wraps a mutable [`SVG`] reference and implements [`Canvas`] on it.
///
/// Every primitive is appended as a new element.
///
/// ```
/// use projplot::draw::svg::SvgCanvas;
/// use projplot::svg::SVG;
/// use projplot::{render, Scene};
///
/// let scene = Scene::rational().unwrap();
/// let mut svg = SVG::new(scene.config().width, scene.config().height);
/// render(&scene, &mut SvgCanvas::from(&mut svg));
/// assert!(svg.to_string().starts_with("<svg"));
/// ```
pub struct SvgCanvas<'s>(&'s mut SVG);

impl<'s> From<&'s mut SVG> for SvgCanvas<'s> {
    fn from(svg: &'s mut SVG) -> Self {
        SvgCanvas(svg)
    }
}

impl<'s> Canvas for SvgCanvas<'s> {
    fn fill(&mut self, width: u32, height: u32, color: Rgb) {
        self.0.add_elem(Rectangle {
            origin: Point2::new(0, 0),
            width,
            height,
            color,
        });
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb) {
        self.0.add_elem(Line {
            from: pixel(from),
            to: pixel(to),
            width: None,
            color,
        });
    }

    fn disk(&mut self, center: Point2<f64>, diameter: f64, color: Rgb) {
        // Place the disk's bounding square on the pixel grid, not its center
        let radius = diameter / 2.0;
        let corner = pixel(Point2::new(center.x - radius, center.y - radius));
        self.0.add_elem(Circle {
            center: Point2::new(f64::from(corner.x) + radius, f64::from(corner.y) + radius),
            radius,
            color,
        });
    }
}
