//! Scene constants: surface size, guide rows and grid density.

use crate::projection::Projection;

/// Constants of a scene, fixed once the scene is built.
///
/// The defaults describe a 1400x1000 surface with the horizon at row 100 and the
/// zero line at row 700, giving a scale of 600 pixels per unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Row where `z -> inf` projects
    pub horizon: u32,
    /// Row where `z = 0` projects
    pub zero: u32,
    /// Number of grid steps, `0` draws the horizon only
    pub grid_lines: u32,
    /// Diameter of the disk drawn at each visible point
    pub point_size: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            width: 1400,
            height: 1000,
            horizon: 100,
            zero: 700,
            grid_lines: 1,
            point_size: 1,
        }
    }
}

impl SceneConfig {
    /// Sets the surface size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the rows of horizon and zero line.
    pub fn with_guides(mut self, horizon: u32, zero: u32) -> Self {
        self.horizon = horizon;
        self.zero = zero;
        self
    }

    /// Sets the number of grid steps.
    pub fn with_grid_lines(mut self, grid_lines: u32) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    /// Sets the point diameter.
    pub fn with_point_size(mut self, point_size: u32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Pixels per projected unit
    ///
    /// Negative if the zero line is placed above the horizon, which flips the picture.
    pub fn scale(&self) -> f64 {
        f64::from(self.zero) - f64::from(self.horizon)
    }

    /// Column of the vanishing point
    pub fn center_x(&self) -> f64 {
        f64::from(self.width / 2)
    }

    /// The projection placing the plane on this surface.
    pub fn projection(&self) -> Projection {
        Projection {
            scale: self.scale(),
            center_x: self.center_x(),
            horizon_y: f64::from(self.horizon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.scale(), 600.0);
        assert_eq!(
            config.projection(),
            Projection {
                scale: 600.0,
                center_x: 700.0,
                horizon_y: 100.0
            }
        );
    }

    #[test]
    fn builders() {
        let config = SceneConfig::default()
            .with_size(800, 600)
            .with_guides(50, 450)
            .with_grid_lines(4)
            .with_point_size(3);
        assert_eq!(config.center_x(), 400.0);
        assert_eq!(config.scale(), 400.0);
        assert_eq!(config.grid_lines, 4);
        assert_eq!(config.point_size, 3);
    }
}
