//! Ground-truth pooling oracle
//!
//! The generator never computes expected values itself. It asks a
//! [`PoolingOracle`] and treats the answer as ground truth, checking only that
//! the result is safe to serialize.
//!
//! # Modules
//!
//! - `reference`: portable `f64` NHWC pooling with SAME/VALID semantics
//! - `sequence`: deterministic synthetic input data
//! - `adapter`: per-case orchestration and the input magnitude search

pub mod adapter;
pub mod reference;
pub mod sequence;

pub use adapter::{OracleAdapter, OracleResult};
pub use reference::ReferencePooling;

use thiserror::Error;

use crate::params::{InputShape, Padding, ParameterCase, PoolingOp};

/// Errors reported by an oracle
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The oracle cannot pool with this configuration
    #[error("Invalid pooling configuration: {0}")]
    InvalidConfiguration(String),

    /// Input length does not match the requested shape
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    InputLength {
        /// Elements implied by the shape
        expected: usize,
        /// Elements supplied
        actual: usize,
    },
}

/// A single pooling invocation, square window and stride, NHWC layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolRequest {
    /// Reduction
    pub op: PoolingOp,
    /// Input shape
    pub shape: InputShape,
    /// Window extent along both spatial axes
    pub window: usize,
    /// Stride along both spatial axes
    pub stride: usize,
    /// Boundary handling
    pub padding: Padding,
}

impl From<&ParameterCase> for PoolRequest {
    fn from(case: &ParameterCase) -> Self {
        Self {
            op: case.group.op,
            shape: case.shape,
            window: case.group.window,
            stride: case.group.stride,
            padding: case.padding,
        }
    }
}

/// Trusted pooling implementation used for expected values
pub trait PoolingOracle {
    /// Pool `input` (NHWC, `request.shape`) and return the flat NHWC output
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be pooled or `input`
    /// does not match the shape.
    fn pool(&self, request: &PoolRequest, input: &[f64]) -> Result<Vec<f64>, OracleError>;
}

impl<T: PoolingOracle + ?Sized> PoolingOracle for &T {
    fn pool(&self, request: &PoolRequest, input: &[f64]) -> Result<Vec<f64>, OracleError> {
        (**self).pool(request, input)
    }
}

/// Output extent and leading padding along one spatial axis
///
/// VALID yields `(input - window) / stride + 1` with no padding. SAME yields
/// `ceil(input / stride)` and splits the required padding with the smaller
/// half before the data.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if window or stride is zero, or if a VALID
/// window does not fit in the input.
pub fn output_extent(
    input: usize,
    window: usize,
    stride: usize,
    padding: Padding,
) -> Result<(usize, usize), OracleError> {
    if window == 0 || stride == 0 {
        return Err(OracleError::InvalidConfiguration(format!(
            "window {window} and stride {stride} must be positive"
        )));
    }
    if input == 0 {
        return Err(OracleError::InvalidConfiguration(
            "input extent must be positive".to_string(),
        ));
    }

    match padding {
        Padding::Valid => {
            if input < window {
                return Err(OracleError::InvalidConfiguration(format!(
                    "VALID window {window} larger than input extent {input}"
                )));
            }
            Ok(((input - window) / stride + 1, 0))
        }
        Padding::Same => {
            let out = input.div_ceil(stride);
            let needed = (out - 1) * stride + window;
            let pad_total = needed.saturating_sub(input);
            Ok((out, pad_total / 2))
        }
    }
}

/// Output shape of a pooling request
///
/// # Errors
///
/// Propagates [`output_extent`] errors for either spatial axis.
pub fn output_shape(request: &PoolRequest) -> Result<InputShape, OracleError> {
    let (out_h, _) = output_extent(
        request.shape.height,
        request.window,
        request.stride,
        request.padding,
    )?;
    let (out_w, _) = output_extent(
        request.shape.width,
        request.window,
        request.stride,
        request.padding,
    )?;
    Ok(InputShape::new(
        request.shape.batch,
        out_h,
        out_w,
        request.shape.channels,
    ))
}
