//! End-to-end fixture generation
//!
//! Groups are processed one at a time: every case of a group is sent through
//! the oracle and rendered before the group's file is written. The first
//! error stops the run.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::GeneratorConfig;
use crate::emit::{render, AssertionBlock};
use crate::error::Result;
use crate::oracle::{OracleAdapter, PoolingOracle, ReferencePooling};
use crate::params::{ParameterSpace, TestCaseGroup};
use crate::writer::GroupWriter;

/// One written group file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    /// Group the file belongs to
    pub group: TestCaseGroup,
    /// Path relative to the test root
    pub path: PathBuf,
    /// Number of test cases in the file
    pub case_count: usize,
    /// Cases whose input magnitude had to be reduced
    pub reduced_cases: usize,
}

/// Summary of a complete run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    /// Test root the files were written under
    pub output_root: PathBuf,
    /// Configuration used for the run
    pub config: GeneratorConfig,
    /// Written files in generation order
    pub groups: Vec<GroupReport>,
}

impl GenerationReport {
    /// Total test cases across all files
    #[must_use]
    pub fn total_cases(&self) -> usize {
        self.groups.iter().map(|g| g.case_count).sum()
    }

    /// Serialize as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Drives enumeration, oracle, rendering and writing
#[derive(Debug)]
pub struct Generator<O> {
    space: ParameterSpace,
    adapter: OracleAdapter<O>,
    writer: GroupWriter,
    config: GeneratorConfig,
}

impl Generator<ReferencePooling> {
    /// Generator backed by the reference oracle
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_oracle(ReferencePooling::new(), config)
    }
}

impl<O: PoolingOracle> Generator<O> {
    /// Generator backed by a custom oracle
    #[must_use]
    pub fn with_oracle(oracle: O, config: GeneratorConfig) -> Self {
        Self {
            space: ParameterSpace::new(),
            adapter: OracleAdapter::new(oracle, &config),
            writer: GroupWriter::new(config.resolve_output_dir()),
            config,
        }
    }

    /// Render every case of `group`
    ///
    /// # Errors
    ///
    /// Propagates the first oracle error for the group.
    pub fn render_group(&self, group: TestCaseGroup) -> Result<(Vec<AssertionBlock>, usize)> {
        let mut blocks = Vec::new();
        let mut reduced = 0;
        for case in self.space.cases(group) {
            let result = self.adapter.compute(&case)?;
            if result.max_input_val < self.config.initial_max_input_val {
                reduced += 1;
            }
            blocks.push(render(&case, &result));
        }
        Ok((blocks, reduced))
    }

    /// Generate and write the file for one group
    ///
    /// # Errors
    ///
    /// Propagates oracle and filesystem errors.
    #[instrument(skip_all, fields(group = %group))]
    pub fn generate_group(&self, group: TestCaseGroup) -> Result<GroupReport> {
        let (blocks, reduced_cases) = self.render_group(group)?;
        let path = self.writer.write(&group, &blocks)?;
        info!(path = %path.display(), cases = blocks.len(), reduced_cases, "wrote group");
        Ok(GroupReport {
            group,
            path,
            case_count: blocks.len(),
            reduced_cases,
        })
    }

    /// Generate every group, calling `on_written` after each file
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error.
    pub fn run_with<F>(&self, mut on_written: F) -> Result<GenerationReport>
    where
        F: FnMut(&GroupReport),
    {
        let mut groups = Vec::new();
        for group in self.space.groups() {
            let report = self.generate_group(group)?;
            on_written(&report);
            groups.push(report);
        }
        Ok(GenerationReport {
            output_root: self.writer.root().to_path_buf(),
            config: self.config.clone(),
            groups,
        })
    }

    /// Generate every group
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error.
    pub fn run(&self) -> Result<GenerationReport> {
        self.run_with(|_| {})
    }
}

/// Generate the full fixture set with the reference oracle
///
/// # Errors
///
/// Stops at and returns the first error.
pub fn generate(config: GeneratorConfig) -> Result<GenerationReport> {
    Generator::new(config).run()
}
