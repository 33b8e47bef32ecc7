//! pooling-testgen: Deterministic Pooling Test Fixture Generator
//!
//! Generates GoogleTest sources exercising a max/average pooling operator.
//! Every `(operation, window, stride)` group becomes one file holding one
//! `TYPED_TEST` per input shape and padding mode, with expected values taken
//! from a trusted pooling oracle.
//!
//! # Pipeline
//!
//! 1. [`params::ParameterSpace`] enumerates groups and cases from fixed tables
//! 2. [`oracle::OracleAdapter`] computes expected outputs, shrinking the input
//!    magnitude until the output is safe to serialize
//! 3. [`emit::render`] turns each result into an assertion block
//! 4. [`writer::GroupWriter`] writes one file per group
//!
//! # Quick Start
//!
//! ```rust
//! use pooling_testgen::{generate, GeneratorConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let report = generate(GeneratorConfig::new().with_output_root(dir.path())).unwrap();
//! assert_eq!(report.groups.len(), 15);
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // element counts are far below 2^52
#![allow(clippy::cast_possible_wrap)] // window offsets fit in isize

pub mod config;
pub mod emit;
pub mod error;
pub mod format;
pub mod generator;
pub mod oracle;
pub mod params;
pub mod shape;
pub mod writer;

pub use config::GeneratorConfig;
pub use emit::{render, AssertionBlock};
pub use error::{GenError, Result};
pub use generator::{generate, GenerationReport, Generator, GroupReport};
pub use oracle::{OracleAdapter, OracleResult, PoolingOracle, ReferencePooling};
pub use params::{InputShape, Padding, ParameterCase, ParameterSpace, PoolingOp, TestCaseGroup};
pub use shape::candidate_extents;
pub use writer::GroupWriter;
