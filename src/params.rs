//! Pooling parameter space
//!
//! The coverage tables are literal data. The window/stride table pairs entries
//! positionally and repeats windows on purpose, and the average pooling
//! exclusions are a lookup, not a rule derived from the table.

use std::fmt;

use serde::Serialize;

use crate::shape::candidate_extents;

/// Window sizes, paired positionally with [`STRIDE_LIST`]
pub const WINDOW_LIST: [usize; 9] = [1, 3, 3, 5, 5, 7, 7, 11, 11];

/// Stride sizes, paired positionally with [`WINDOW_LIST`]
pub const STRIDE_LIST: [usize; 9] = [1, 1, 2, 1, 2, 1, 4, 1, 4];

/// Batch counts tested for every group
pub const BATCHES: [usize; 2] = [1, 3];

/// Channel counts tested for every group
pub const CHANNELS: [usize; 3] = [1, 2, 4];

/// Padding modes, in emission order
pub const PADDINGS: [Padding; 2] = [Padding::Same, Padding::Valid];

/// Pooling operations, in emission order
pub const OPERATIONS: [PoolingOp; 2] = [PoolingOp::Max, PoolingOp::Average];

/// `(window, stride)` pairs for which average pooling is not generated.
/// `None` matches any stride.
const AVERAGE_EXCLUSIONS: [(usize, Option<usize>); 2] = [(11, None), (7, Some(4))];

/// Pooling reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PoolingOp {
    /// Maximum over the window
    #[serde(rename = "max")]
    Max,
    /// Mean over the window
    #[serde(rename = "avg")]
    Average,
}

impl PoolingOp {
    /// Lowercase name used in file names
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Average => "avg",
        }
    }

    /// Capitalized name used in test identifiers
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Max => "Max",
            Self::Average => "Avg",
        }
    }

    /// Operator tag passed to the test fixture
    #[must_use]
    pub const fn operator_tag(self) -> &'static str {
        match self {
            Self::Max => "pooling::Max",
            Self::Average => "pooling::Average",
        }
    }
}

impl fmt::Display for PoolingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Boundary handling for window placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Padding {
    /// Pad so the output extent is `ceil(input / stride)`
    #[serde(rename = "SAME")]
    Same,
    /// No padding, windows must fit entirely inside the input
    #[serde(rename = "VALID")]
    Valid,
}

impl Padding {
    /// Name of the `PaddingMode` enumerator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Same => "SAME",
            Self::Valid => "VALID",
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// NHWC input shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct InputShape {
    /// Batch count
    pub batch: usize,
    /// Spatial rows
    pub height: usize,
    /// Spatial columns
    pub width: usize,
    /// Channel count
    pub channels: usize,
}

impl InputShape {
    /// Create a shape from its four dimensions
    #[must_use]
    pub const fn new(batch: usize, height: usize, width: usize, channels: usize) -> Self {
        Self {
            batch,
            height,
            width,
            channels,
        }
    }

    /// Total number of elements
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.batch * self.height * self.width * self.channels
    }

    /// Dimensions in NHWC order
    #[must_use]
    pub const fn dims(&self) -> [usize; 4] {
        [self.batch, self.height, self.width, self.channels]
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}x{}",
            self.batch, self.height, self.width, self.channels
        )
    }
}

/// One `(operation, window, stride)` triple, emitted as one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TestCaseGroup {
    /// Pooling operation
    pub op: PoolingOp,
    /// Square window extent
    pub window: usize,
    /// Stride along both spatial axes
    pub stride: usize,
}

impl TestCaseGroup {
    /// Create a group
    #[must_use]
    pub const fn new(op: PoolingOp, window: usize, stride: usize) -> Self {
        Self { op, window, stride }
    }

    /// Whether the coverage policy leaves this group out
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        is_excluded(self.op, self.window, self.stride)
    }

    /// Test suite identifier, e.g. `AvgWindow3Stride2`
    #[must_use]
    pub fn test_case_name(&self) -> String {
        format!(
            "{}Window{}Stride{}",
            self.op.display_name(),
            self.window,
            self.stride
        )
    }

    /// File stem, e.g. `avg_window3_stride2`
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!(
            "{}_window{}_stride{}",
            self.op.short_name(),
            self.window,
            self.stride
        )
    }

    /// Spatial extents tested for this group
    #[must_use]
    pub const fn extents(&self) -> [usize; 3] {
        candidate_extents(self.window, self.stride)
    }
}

impl fmt::Display for TestCaseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} window={} stride={}", self.op, self.window, self.stride)
    }
}

/// A fully concrete test: group plus input shape and padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ParameterCase {
    /// Owning group
    pub group: TestCaseGroup,
    /// NHWC input shape
    pub shape: InputShape,
    /// Padding mode
    pub padding: Padding,
}

impl ParameterCase {
    /// Test identifier within the group, e.g. `SAME1x5x6x1`
    #[must_use]
    pub fn test_name(&self) -> String {
        format!("{}{}", self.padding, self.shape)
    }
}

impl fmt::Display for ParameterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shape={} padding={}",
            self.group, self.shape, self.padding
        )
    }
}

/// Coverage exclusion lookup
///
/// Max pooling is never excluded. Average pooling is excluded for the
/// `(window, stride)` entries in the exclusion table.
#[must_use]
pub fn is_excluded(op: PoolingOp, window: usize, stride: usize) -> bool {
    match op {
        PoolingOp::Max => false,
        PoolingOp::Average => AVERAGE_EXCLUSIONS
            .iter()
            .any(|&(w, s)| w == window && s.map_or(true, |s| s == stride)),
    }
}

/// Lazy enumeration over the coverage tables
///
/// Holds no iteration state; every call starts from the beginning of the
/// tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterSpace;

impl ParameterSpace {
    /// Create the parameter space
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Groups in table order, operations innermost, exclusions removed
    pub fn groups(&self) -> impl Iterator<Item = TestCaseGroup> {
        WINDOW_LIST
            .into_iter()
            .zip(STRIDE_LIST)
            .flat_map(|(window, stride)| {
                OPERATIONS
                    .into_iter()
                    .map(move |op| TestCaseGroup::new(op, window, stride))
            })
            .filter(|group| !group.is_excluded())
    }

    /// Cases of one group, nested batch, height, width, channels, then padding
    pub fn cases(&self, group: TestCaseGroup) -> impl Iterator<Item = ParameterCase> {
        let extents = group.extents();
        BATCHES.into_iter().flat_map(move |batch| {
            extents.into_iter().flat_map(move |height| {
                extents.into_iter().flat_map(move |width| {
                    CHANNELS.into_iter().flat_map(move |channels| {
                        PADDINGS.into_iter().map(move |padding| ParameterCase {
                            group,
                            shape: InputShape::new(batch, height, width, channels),
                            padding,
                        })
                    })
                })
            })
        })
    }

    /// Every case of every group, in emission order
    pub fn enumerate(&self) -> impl Iterator<Item = ParameterCase> {
        let space = *self;
        self.groups().flat_map(move |group| space.cases(group))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_max_never_excluded(window in 1usize..32, stride in 1usize..8) {
            prop_assert!(!is_excluded(PoolingOp::Max, window, stride));
        }

        #[test]
        fn test_average_exclusion_is_literal(window in 1usize..32, stride in 1usize..8) {
            let expected = window == 11 || (window == 7 && stride == 4);
            prop_assert_eq!(is_excluded(PoolingOp::Average, window, stride), expected);
        }
    }
}
