//! Oracle orchestration for one parameter case
//!
//! Pooling can only keep or average input values, but the largest trial
//! magnitude is deliberately above the serialization bound. The adapter halves
//! the magnitude until every output value is within the bound, up to a fixed
//! number of halvings.

use tracing::debug;

use super::sequence::tensor_data;
use super::{output_shape, PoolRequest, PoolingOracle};
use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::params::{InputShape, ParameterCase};

/// Expected output for one case
#[derive(Debug, Clone, PartialEq)]
pub struct OracleResult {
    /// Flat NHWC output values
    pub output: Vec<f64>,
    /// NHWC output shape
    pub output_shape: InputShape,
    /// Magnitude the input sequence was generated with
    pub max_input_val: f64,
    /// Oracle invocations made before this result was accepted
    pub attempts: u32,
}

impl OracleResult {
    /// Largest absolute output value, `0.0` for an empty output
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        max_abs(&self.output)
    }
}

/// Wraps a [`PoolingOracle`] with policy checks and the magnitude search
#[derive(Debug, Clone)]
pub struct OracleAdapter<O> {
    oracle: O,
    initial_max_input_val: f64,
    required_max: f64,
    max_halvings: u32,
}

impl<O: PoolingOracle> OracleAdapter<O> {
    /// Create an adapter using the search bounds from `config`
    #[must_use]
    pub fn new(oracle: O, config: &GeneratorConfig) -> Self {
        Self {
            oracle,
            initial_max_input_val: config.initial_max_input_val,
            required_max: config.required_max,
            max_halvings: config.max_halvings,
        }
    }

    /// The wrapped oracle
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Compute the expected output for an enumerated case
    ///
    /// # Errors
    ///
    /// - `Configuration` if the case is excluded by the coverage policy or
    ///   the oracle rejects it
    /// - `MagnitudeSearchExhausted` if no trial magnitude within the cap
    ///   produces a serializable output
    pub fn compute(&self, case: &ParameterCase) -> Result<OracleResult> {
        if case.group.is_excluded() {
            return Err(GenError::Configuration {
                case: *case,
                reason: "combination is excluded from coverage".to_string(),
            });
        }
        self.search(case)
    }

    /// Run the magnitude search without the coverage policy check
    ///
    /// # Errors
    ///
    /// Same as [`compute`](Self::compute), minus the exclusion check.
    pub fn search(&self, case: &ParameterCase) -> Result<OracleResult> {
        let request = PoolRequest::from(case);
        let out_shape = output_shape(&request).map_err(|err| GenError::Configuration {
            case: *case,
            reason: err.to_string(),
        })?;
        let count = case.shape.element_count();

        let mut max_input_val = self.initial_max_input_val;
        let mut attempts = 0u32;

        while attempts <= self.max_halvings {
            attempts += 1;

            let input = tensor_data(count, max_input_val);
            let output = self
                .oracle
                .pool(&request, &input)
                .map_err(|err| GenError::Configuration {
                    case: *case,
                    reason: err.to_string(),
                })?;

            if output.len() != out_shape.element_count() {
                return Err(GenError::Configuration {
                    case: *case,
                    reason: format!(
                        "oracle returned {} values, expected {}",
                        output.len(),
                        out_shape.element_count()
                    ),
                });
            }

            if is_serializable(&output, self.required_max) {
                return Ok(OracleResult {
                    output,
                    output_shape: out_shape,
                    max_input_val,
                    attempts,
                });
            }

            debug!(
                case = %case,
                max_input_val,
                output_max = max_abs(&output),
                "output exceeds serialization bound, halving input magnitude"
            );
            max_input_val /= 2.0;
        }

        Err(GenError::MagnitudeSearchExhausted {
            case: *case,
            attempts,
            last_max_input_val: max_input_val * 2.0,
        })
    }
}

/// Every value finite and no larger in magnitude than `bound`
fn is_serializable(values: &[f64], bound: f64) -> bool {
    values.iter().all(|v| v.is_finite() && v.abs() <= bound)
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}
