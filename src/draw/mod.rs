//! Drawing surfaces the renderer paints on.
//!
//! The renderer only knows three primitives: filling the whole surface,
//! straight lines and small filled disks.
//! Coordinates are pixels and may lie far outside the surface,
//! clipping them is up to the implementation.
use crate::color::Rgb;
use nalgebra::Point2;

/// A surface accepting the renderer's primitives.
pub trait Canvas {
    /// Fill the whole surface of `width` x `height` pixels.
    fn fill(&mut self, width: u32, height: u32, color: Rgb);

    /// Draw a straight line between two pixels.
    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb);

    /// Draw a filled disk of `diameter` pixels around `center`.
    fn disk(&mut self, center: Point2<f64>, diameter: f64, color: Rgb);
}

/// A single primitive as recorded by `Vec<DrawCommand>`
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// See [`Canvas::fill`]
    Fill {
        /// Surface width
        width: u32,
        /// Surface height
        height: u32,
        /// Fill color
        color: Rgb,
    },

    /// See [`Canvas::line`]
    Line {
        /// Start pixel
        from: Point2<f64>,
        /// End pixel
        to: Point2<f64>,
        /// Stroke color
        color: Rgb,
    },

    /// See [`Canvas::disk`]
    Disk {
        /// Center pixel
        center: Point2<f64>,
        /// Diameter in pixels
        diameter: f64,
        /// Fill color
        color: Rgb,
    },
}

/// Records every primitive in order instead of drawing it.
impl Canvas for Vec<DrawCommand> {
    fn fill(&mut self, width: u32, height: u32, color: Rgb) {
        self.push(DrawCommand::Fill {
            width,
            height,
            color,
        });
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb) {
        self.push(DrawCommand::Line { from, to, color });
    }

    fn disk(&mut self, center: Point2<f64>, diameter: f64, color: Rgb) {
        self.push(DrawCommand::Disk {
            center,
            diameter,
            color,
        });
    }
}

pub mod svg;
