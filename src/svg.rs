//! Small document model to write drawings as svg.
//!
//! Only the handful of elements the renderer needs are supported.

use crate::color::Rgb;
use nalgebra::Point2;
use std::fmt::{Display, Formatter};

type Rect = (f64, f64, f64, f64);

/// An svg document: a view box and its elements in painting order
pub struct SVG {
    /// `(min_x, min_y, width, height)`
    pub view_box: Rect,
    /// Elements painted in order
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    /// Creates an empty document showing `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        SVG {
            view_box: (0.0, 0.0, f64::from(width), f64::from(height)),
            elements: Vec::new(),
        }
    }

    /// Appends an element on top of the existing ones.
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0,
            self.view_box.1,
            self.view_box.2,
            self.view_box.3,
            self.view_box.2,
            self.view_box.3
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

/// A filled, axis aligned rectangle
pub struct Rectangle {
    /// Top left corner
    pub origin: Point2<i32>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Fill color
    pub color: Rgb,
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.origin.x, self.origin.y, self.width, self.height, self.color
        )
    }
}

/// A straight stroke between two pixels
pub struct Line {
    /// Start pixel
    pub from: Point2<i32>,
    /// End pixel
    pub to: Point2<i32>,
    /// Stroke width, the svg default of `1` if `None`
    pub width: Option<f64>,
    /// Stroke color
    pub color: Rgb,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"",
            self.from.x, self.from.y, self.to.x, self.to.y, self.color
        )?;
        if let Some(width) = self.width {
            write!(f, " stroke-width=\"{}\"", width)?;
        }
        writeln!(f, "/>")?;
        return Ok(());
    }
}

/// A filled disk
pub struct Circle {
    /// Center
    pub center: Point2<f64>,
    /// Radius
    pub radius: f64,
    /// Fill color
    pub color: Rgb,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
            self.center.x, self.center.y, self.radius, self.color
        )?;
        writeln!(f, "/>")?;
        return Ok(());
    }
}
