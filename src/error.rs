//! Errors reported while building a scene or showing its drawing.
use thiserror::Error;

/// Top-level error type of the plotter.
///
/// Arithmetic never fails: NaN and infinite coordinates flow through sampling and
/// rendering untouched. Only inputs that would make sampling run forever are rejected.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The step is zero, negative or NaN.
    #[error("sampling step must be positive, got {step}")]
    InvalidStep {
        /// The rejected step
        step: f64,
    },

    /// An interval bound is infinite or NaN.
    #[error("sampling interval [{t0}, {t1}) is unbounded")]
    UnboundedInterval {
        /// First parameter
        t0: f64,
        /// Exclusive upper bound
        t1: f64,
    },

    /// An entry of a curve table failed to sample.
    #[error("curve #{index} is misconfigured")]
    Curve {
        /// Position of the entry in its table
        index: usize,
        /// Why sampling the entry failed
        #[source]
        source: Box<PlotError>,
    },

    /// Writing the rendered document failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Opening or updating the window failed.
    #[cfg(feature = "window")]
    #[error(transparent)]
    Window(#[from] minifb::Error),
}

/// Convenience type alias for results using [`PlotError`].
pub type Result<T> = std::result::Result<T, PlotError>;
