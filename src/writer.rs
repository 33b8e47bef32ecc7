//! Output file assembly
//!
//! Each group becomes one GoogleTest source under `<root>/pooling/`. Files are
//! always rewritten from scratch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::AssertionBlock;
use crate::error::{GenError, Result};
use crate::params::TestCaseGroup;

/// Name of the generator, recorded in every generated file
pub const GENERATOR_NAME: &str = "generate-pooling-tests";

/// Extension of the generated sources
pub const FILE_EXTENSION: &str = "cc";

const LICENSE_HEADER: &str = r"/*
 * Licensed under the Apache License, Version 2.0 (the 'License');
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an 'AS IS' BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */";

const INCLUDES: &str = r#"
#include <gtest/gtest.h>

#include "sycldnn/pooling/launch.h"
#include "sycldnn/pooling/operators.h"
#include "sycldnn/pooling/params.h"

#include "test/pooling/pooling_fixture.h"
#include "test/types/kernel_data_types.h"

#include <CL/sycl.hpp>

#include <vector>"#;

/// Notice forbidding manual edits, naming the generator
#[must_use]
pub fn do_not_modify_notice() -> String {
    format!(
        "// DO NOT MODIFY BY HAND\n\
         // This file was automatically generated by {GENERATOR_NAME}.\n\
         // Results calculated using a reference pooling implementation."
    )
}

/// Typed test suite declaration for a group
#[must_use]
pub fn typed_test_suite_decl(group: &TestCaseGroup) -> String {
    let name = group.test_case_name();
    format!(
        "\nusing namespace sycldnn;\n\
         template <typename DataType>\n\
         using {name} = PoolingFixture<DataType>;\n\
         TYPED_TEST_SUITE({name}, types::GTestKernelDataTypes);"
    )
}

/// Path of a group's file relative to the test root
#[must_use]
pub fn relative_path(group: &TestCaseGroup) -> PathBuf {
    Path::new(crate::config::POOLING_SUBDIR)
        .join(format!("{}.{FILE_EXTENSION}", group.file_stem()))
}

/// Full file contents for a group
#[must_use]
pub fn render_file(group: &TestCaseGroup, blocks: &[AssertionBlock]) -> String {
    let mut parts = vec![
        LICENSE_HEADER.to_string(),
        do_not_modify_notice(),
        INCLUDES.to_string(),
        typed_test_suite_decl(group),
    ];
    for block in blocks {
        parts.extend(block.lines().iter().cloned());
    }
    parts.push("\n".to_string());
    parts.join("\n")
}

/// Writes group files under a test root
#[derive(Debug, Clone)]
pub struct GroupWriter {
    root: PathBuf,
}

impl GroupWriter {
    /// Writer rooted at `root`; files go to `root/pooling/`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Test source root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the file for `group`, replacing any previous contents
    ///
    /// Returns the path relative to the root.
    ///
    /// # Errors
    ///
    /// Returns `Filesystem` if the directory cannot be created or the file
    /// cannot be written.
    pub fn write(&self, group: &TestCaseGroup, blocks: &[AssertionBlock]) -> Result<PathBuf> {
        let relative = relative_path(group);
        let path = self.root.join(&relative);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| GenError::Filesystem {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, render_file(group, blocks))
            .map_err(|source| GenError::Filesystem { path, source })?;

        Ok(relative)
    }
}
