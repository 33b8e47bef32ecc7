//! Test assertion rendering
//!
//! One [`AssertionBlock`] per parameter case, as a GoogleTest `TYPED_TEST`
//! calling into the pooling fixture.

use crate::format::{format_max_input, format_tensor};
use crate::oracle::OracleResult;
use crate::params::ParameterCase;

/// Lines of one generated test case
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssertionBlock {
    lines: Vec<String>,
}

impl AssertionBlock {
    /// Rendered lines, without trailing newlines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the block and return its lines
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Render the test for `case` with the oracle's expected values
#[must_use]
pub fn render(case: &ParameterCase, result: &OracleResult) -> AssertionBlock {
    let group = &case.group;
    let [batch, height, width, channels] = case.shape.dims();

    let lines = vec![
        format!(
            "TYPED_TEST({}, {}) {{",
            group.test_case_name(),
            case.test_name()
        ),
        "  using DataType = typename TestFixture::DataType;".to_string(),
        format!(
            "  const std::vector<DataType> exp_out = {};",
            format_tensor(&result.output)
        ),
        format!("  const std::array<int, 4> in_shape = {{{{ {batch}, {height}, {width}, {channels} }}}};"),
        format!("  const auto padding = PaddingMode::{};", case.padding),
        format!(
            "  const auto params = getPoolingParams<{}, {}>(in_shape, padding);",
            group.window, group.stride
        ),
        format!(
            "  const DataType max_input_val = {};",
            format_max_input(result.max_input_val)
        ),
        format!(
            "  this->template test_pool<pooling::Forward, {}>(",
            group.op.operator_tag()
        ),
        "      exp_out, params, max_input_val);".to_string(),
        "}".to_string(),
    ];

    AssertionBlock { lines }
}
