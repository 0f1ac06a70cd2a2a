//! Error kinds shared by every component of the numerical core.
//!
//! Every public slice-producing operation in the core returns
//! [`CoreResult`]. Recoverable numeric conditions (a query point outside
//! the input grid, a target level outside a column's physical range) are
//! *not* represented here — they surface as `f64::NAN` in the output,
//! never as an `Err`.

use thiserror::Error;

/// Errors that can occur while planning or evaluating a slice request.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A descriptor or axis pairing is internally inconsistent (e.g. a
    /// longitude axis paired with a projected-grid projection descriptor).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A variable or field referenced by a transform or request is absent.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// A slice's shape does not match the shape declared for its field.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A non-recoverable numeric domain violation (non-positive argument to
    /// a log kernel, non-monotone axis, negative spacing where positive is
    /// required).
    #[error("domain error: {0}")]
    Domain(String),

    /// The projection library failed to initialize a descriptor or to
    /// transform a batch of points.
    #[error("projection failure: {0}")]
    ProjectionFailure(String),

    /// The units collaborator could not produce a linear conversion between
    /// two unit strings.
    #[error("unit conversion failure: from {from:?} to {to:?}")]
    UnitConversionFailure { from: String, to: String },

    /// The slice request was cancelled at a reader-callback boundary.
    #[error("request cancelled")]
    Cancelled,

    /// An invariant internal to the core was violated; always a bug.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput(name.into())
    }

    pub fn shape_mismatch(expected: Vec<usize>, actual: Vec<usize>) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn projection_failure(msg: impl Into<String>) -> Self {
        Self::ProjectionFailure(msg.into())
    }

    pub fn unit_conversion_failure(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnitConversionFailure {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type used throughout the numerical core.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
