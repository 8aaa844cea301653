//! Software rasterizer drawing into a `0RGB` pixel buffer, the format window surfaces expect.

use crate::color::Rgb;
use crate::draw::Canvas;
use nalgebra::Point2;

/// A row-major buffer of `0x00RRGGBB` pixels
pub struct Framebuffer {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Framebuffer {
    /// Creates a black buffer of `width` x `height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer {
            width,
            height,
            buffer: vec![0; width * height],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixels, row by row
    pub fn pixels(&self) -> &[u32] {
        &self.buffer
    }

    /// Color of a single pixel, `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgb::from_hex(self.buffer[y * self.width + x]))
    }

    /// Changes the size, discarding the content.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.buffer.clear();
        self.buffer.resize(width * height, 0);
    }

    /// Sets every pixel to `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.buffer.fill(color.hex());
    }

    /// Sets a pixel, ignoring coordinates outside the buffer.
    #[inline]
    pub fn point(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.buffer[idx] = color.hex();
    }

    /// Bresenham line between two pixels, both ends included.
    ///
    /// The ends should already lie in or near the buffer, see [`clip_line`].
    pub fn draw_line(&mut self, from: Point2<i64>, to: Point2<i64>, color: Rgb) {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - x).abs();
        let dy = -(to.y - y).abs();
        let sx = if x < to.x { 1 } else { -1 };
        let sy = if y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.point(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Clips the segment to the rectangle `[0, width] x [0, height]` (Liang-Barsky).
///
/// Returns `None` if nothing of it is inside or a coordinate isn't finite.
pub fn clip_line(
    from: Point2<f64>,
    to: Point2<f64>,
    width: f64,
    height: f64,
) -> Option<(Point2<f64>, Point2<f64>)> {
    if ![from.x, from.y, to.x, to.y].iter().all(|c| c.is_finite()) {
        return None;
    }
    let d = to - from;
    if !d.x.is_finite() || !d.y.is_finite() {
        return None;
    }
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-d.x, from.x),
        (d.x, width - from.x),
        (-d.y, from.y),
        (d.y, height - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    Some((from + d * t0, from + d * t1))
}

impl Canvas for Framebuffer {
    fn fill(&mut self, _width: u32, _height: u32, color: Rgb) {
        // The surface's own size wins, the window may have been resized
        self.clear(color);
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb) {
        if let Some((from, to)) = clip_line(from, to, self.width as f64, self.height as f64) {
            let snap = |p: Point2<f64>| Point2::new(p.x as i64, p.y as i64);
            self.draw_line(snap(from), snap(to), color);
        }
    }

    fn disk(&mut self, center: Point2<f64>, diameter: f64, color: Rgb) {
        if !center.x.is_finite() || !center.y.is_finite() {
            return;
        }
        // Snap the bounding square onto the grid and fill the pixels whose centers are inside
        let radius = diameter / 2.0;
        let left = (center.x - radius).floor();
        let top = (center.y - radius).floor();
        let (cx, cy) = (left + radius, top + radius);
        let size = diameter.ceil().max(1.0);

        let x_range = left.max(0.0)..(left + size).min(self.width as f64);
        let y_range = top.max(0.0)..(top + size).min(self.height as f64);
        let mut y = y_range.start;
        while y < y_range.end {
            let mut x = x_range.start;
            while x < x_range.end {
                let (px, py) = (x + 0.5 - cx, y + 0.5 - cy);
                if px * px + py * py <= radius * radius {
                    self.point(x as i64, y as i64, color);
                }
                x += 1.0;
            }
            y += 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::from_hex(0xff0000);

    #[test]
    fn clipping() {
        let (from, to) = clip_line(Point2::new(-10.0, 5.0), Point2::new(30.0, 5.0), 20.0, 10.0).unwrap();
        assert_eq!(from, Point2::new(0.0, 5.0));
        assert_eq!(to, Point2::new(20.0, 5.0));

        assert!(clip_line(Point2::new(-10.0, -5.0), Point2::new(30.0, -5.0), 20.0, 10.0).is_none());
        assert!(clip_line(Point2::new(f64::NAN, 5.0), Point2::new(3.0, 5.0), 20.0, 10.0).is_none());

        // Diverging ends near the vanishing line stay cheap to draw
        let (from, to) = clip_line(Point2::new(5.0, 5.0), Point2::new(1e300, 1e300), 20.0, 10.0).unwrap();
        assert_eq!(from, Point2::new(5.0, 5.0));
        assert!(to.x <= 20.0 && to.y <= 10.0);
    }

    #[test]
    fn lines() {
        let mut buffer = Framebuffer::new(8, 4);
        buffer.line(Point2::new(-100.0, 1.0), Point2::new(100.0, 1.0), RED);
        for x in 0..8 {
            assert_eq!(buffer.pixel(x, 1), Some(RED));
            assert_eq!(buffer.pixel(x, 0), Some(Rgb::from_hex(0)));
        }

        let mut buffer = Framebuffer::new(4, 4);
        buffer.line(Point2::new(0.0, 0.0), Point2::new(3.0, 3.0), RED);
        for i in 0..4 {
            assert_eq!(buffer.pixel(i, i), Some(RED));
        }
        assert_eq!(buffer.pixel(1, 0), Some(Rgb::from_hex(0)));
    }

    #[test]
    fn disks() {
        let mut buffer = Framebuffer::new(10, 10);
        buffer.disk(Point2::new(4.0, 4.0), 1.0, RED);
        let lit: Vec<_> = (0..100).filter(|i| buffer.pixels()[*i] != 0).collect();
        assert_eq!(lit, vec![3 * 10 + 3]);

        // Off screen and NaN centers draw nothing
        let mut buffer = Framebuffer::new(10, 10);
        buffer.disk(Point2::new(1e12, 4.0), 3.0, RED);
        buffer.disk(Point2::new(f64::NAN, 4.0), 3.0, RED);
        assert!(buffer.pixels().iter().all(|p| *p == 0));
    }

    #[test]
    fn fill_and_resize() {
        let mut buffer = Framebuffer::new(3, 2);
        buffer.fill(1400, 1000, RED);
        assert!(buffer.pixels().iter().all(|p| *p == 0xff0000));
        buffer.resize(5, 5);
        assert_eq!(buffer.pixels().len(), 25);
        assert_eq!(buffer.pixel(4, 4), Some(Rgb::from_hex(0)));
        assert_eq!(buffer.pixel(5, 0), None);
    }
}
