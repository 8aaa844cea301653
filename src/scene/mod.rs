//! A fixed collection of sampled curves together with the constants to draw them.
use crate::color::Rgb;
use crate::config::SceneConfig;
use crate::curve::{Curve, CurveKind};
use crate::error::{PlotError, Result};
use smallvec::SmallVec;
use tracing::debug;

pub mod presets;

/// One row of a curve table: which curve to sample, where and how densely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveSpec {
    /// Color to draw with
    pub color: Rgb,
    /// Curve to sample
    pub kind: CurveKind,
    /// First parameter
    pub t0: f64,
    /// Parameters stay below this bound
    pub t1: f64,
    /// Distance between two parameters
    pub step: f64,
}

impl CurveSpec {
    /// Shorthand constructor taking the color as hex integer
    pub const fn new(color: u32, kind: CurveKind, t0: f64, t1: f64, step: f64) -> Self {
        CurveSpec {
            color: Rgb::from_hex(color),
            kind,
            t0,
            t1,
            step,
        }
    }

    /// Samples the described curve.
    pub fn sample(&self) -> Result<Curve> {
        Curve::sample(self.color, &self.kind, self.t0, self.t1, self.step)
    }
}

/// Sampled curves and the constants to render them, immutable once built.
#[derive(Clone, Debug)]
pub struct Scene {
    config: SceneConfig,
    curves: SmallVec<[Curve; 8]>,
}

impl Scene {
    /// Creates a scene from already sampled curves.
    pub fn new<I: IntoIterator<Item = Curve>>(config: SceneConfig, curves: I) -> Self {
        Scene {
            config,
            curves: curves.into_iter().collect(),
        }
    }

    /// Samples every row of `table` in order.
    ///
    /// Fails on the first row whose step or interval is unusable, naming its index.
    pub fn from_table(config: SceneConfig, table: &[CurveSpec]) -> Result<Self> {
        let curves = table
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.sample().map_err(|source| PlotError::Curve {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<SmallVec<[Curve; 8]>>>()?;
        debug!(curves = curves.len(), "built scene");
        Ok(Scene { config, curves })
    }

    /// The eight curves of [`presets::RATIONAL`] with the default constants
    pub fn rational() -> Result<Self> {
        Scene::from_table(SceneConfig::default(), &presets::RATIONAL)
    }

    /// The curves of [`presets::TRIGONOMETRIC`] on a denser grid
    pub fn trigonometric() -> Result<Self> {
        Scene::from_table(
            SceneConfig::default().with_grid_lines(presets::TRIGONOMETRIC_GRID_LINES),
            &presets::TRIGONOMETRIC,
        )
    }

    /// Constants the scene is drawn with
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Curves in drawing order
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_bad_row() {
        let table = [
            CurveSpec::new(0xff0000, CurveKind::Parabola, 0.0, 1.0, 0.5),
            CurveSpec::new(0x00ff00, CurveKind::Parabola, 0.0, 1.0, 0.0),
        ];
        match Scene::from_table(SceneConfig::default(), &table) {
            Err(PlotError::Curve { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, PlotError::InvalidStep { .. }));
            }
            other => panic!("expected a curve error, got {:?}", other.map(|s| s.curves().len())),
        }
    }

    #[test]
    fn keeps_table_order() {
        let table = [
            CurveSpec::new(0x000001, CurveKind::Parabola, 0.0, 1.0, 0.5),
            CurveSpec::new(0x000002, CurveKind::Tangent, 0.0, 1.0, 0.25),
        ];
        let scene = Scene::from_table(SceneConfig::default(), &table).unwrap();
        let colors: Vec<_> = scene.curves().iter().map(|c| c.color().hex()).collect();
        assert_eq!(colors, vec![1, 2]);
        assert_eq!(scene.curves()[1].points().len(), 4);
    }
}
