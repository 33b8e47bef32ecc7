//! Reference pooling oracle
//!
//! Straightforward nested loops in `f64`. Window positions outside the input
//! (SAME padding) are skipped: they never win a max, and they are not counted
//! in an average.

use super::{output_extent, OracleError, PoolRequest, PoolingOracle};
use crate::params::PoolingOp;

/// Portable `f64` pooling over NHWC tensors
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePooling;

impl ReferencePooling {
    /// Create the oracle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PoolingOracle for ReferencePooling {
    fn pool(&self, request: &PoolRequest, input: &[f64]) -> Result<Vec<f64>, OracleError> {
        let shape = request.shape;
        let expected = shape.element_count();
        if input.len() != expected {
            return Err(OracleError::InputLength {
                expected,
                actual: input.len(),
            });
        }

        let (out_h, pad_top) =
            output_extent(shape.height, request.window, request.stride, request.padding)?;
        let (out_w, pad_left) =
            output_extent(shape.width, request.window, request.stride, request.padding)?;

        let mut output = Vec::with_capacity(shape.batch * out_h * out_w * shape.channels);

        for n in 0..shape.batch {
            for oh in 0..out_h {
                // window rows as a half-open range clipped to the input
                let start_h = (oh * request.stride) as isize - pad_top as isize;
                let (h0, h1) = clip(start_h, request.window, shape.height);
                for ow in 0..out_w {
                    let start_w = (ow * request.stride) as isize - pad_left as isize;
                    let (w0, w1) = clip(start_w, request.window, shape.width);
                    for c in 0..shape.channels {
                        let mut acc = match request.op {
                            PoolingOp::Max => f64::NEG_INFINITY,
                            PoolingOp::Average => 0.0,
                        };
                        let mut count = 0usize;
                        for h in h0..h1 {
                            for w in w0..w1 {
                                let idx = ((n * shape.height + h) * shape.width + w)
                                    * shape.channels
                                    + c;
                                let val = input[idx];
                                match request.op {
                                    PoolingOp::Max => {
                                        if val > acc {
                                            acc = val;
                                        }
                                    }
                                    PoolingOp::Average => acc += val,
                                }
                                count += 1;
                            }
                        }
                        if count == 0 {
                            return Err(OracleError::InvalidConfiguration(format!(
                                "window at output ({oh}, {ow}) covers no input elements"
                            )));
                        }
                        if request.op == PoolingOp::Average {
                            acc /= count as f64;
                        }
                        output.push(acc);
                    }
                }
            }
        }

        Ok(output)
    }
}

/// Clip the window `[start, start + window)` to `[0, extent)`
fn clip(start: isize, window: usize, extent: usize) -> (usize, usize) {
    let end = start + window as isize;
    let lo = start.max(0) as usize;
    let hi = end.clamp(0, extent as isize) as usize;
    (lo.min(hi), hi)
}
