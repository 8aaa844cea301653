#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod curve;
pub mod draw;
pub mod error;
pub mod projection;
pub mod raster;
pub mod render;
pub mod sample;
pub mod scene;
pub mod svg;
#[cfg(feature = "window")]
pub mod window;

pub use crate::config::SceneConfig;
pub use crate::curve::{Curve, CurveKind};
pub use crate::error::{PlotError, Result};
pub use crate::projection::Projection;
pub use crate::render::render;
pub use crate::scene::Scene;
