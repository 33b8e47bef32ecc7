//! Generator configuration

use std::path::PathBuf;

use serde::Serialize;

/// Largest output magnitude that survives serialization exactly, `2^24`
pub const REQUIRED_MAX: f64 = 16_777_216.0;

/// First trial input magnitude, `2^25`
pub const DEFAULT_MAX_INPUT_VAL: f64 = 33_554_432.0;

/// Halvings of the trial magnitude before giving up on a case
pub const MAX_HALVINGS: u32 = 8;

/// Subdirectory of the test root that receives the generated files
pub const POOLING_SUBDIR: &str = "pooling";

/// Generator configuration
///
/// Defaults reproduce the canonical fixture set. Overriding the search bounds
/// changes the generated `max_input_val` literals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorConfig {
    /// Test source root, `None` resolves to the crate's `test/` directory
    pub output_root: Option<PathBuf>,
    /// Trial magnitude for the first oracle call of every case
    pub initial_max_input_val: f64,
    /// Bound every output value must respect
    pub required_max: f64,
    /// Maximum number of halvings in the magnitude search
    pub max_halvings: u32,
}

impl GeneratorConfig {
    /// Create the default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output_root: None,
            initial_max_input_val: DEFAULT_MAX_INPUT_VAL,
            required_max: REQUIRED_MAX,
            max_halvings: MAX_HALVINGS,
        }
    }

    /// Write under `root` instead of the default test directory
    #[must_use]
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = Some(root.into());
        self
    }

    /// Start the magnitude search at `value`
    #[must_use]
    pub fn with_initial_max_input_val(mut self, value: f64) -> Self {
        self.initial_max_input_val = value;
        self
    }

    /// Change the output magnitude bound
    #[must_use]
    pub fn with_required_max(mut self, value: f64) -> Self {
        self.required_max = value;
        self
    }

    /// Change the halving cap
    #[must_use]
    pub fn with_max_halvings(mut self, halvings: u32) -> Self {
        self.max_halvings = halvings;
        self
    }

    /// Test source root the generated files are written under
    #[must_use]
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.output_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test"))
    }

    /// Directory receiving the pooling test files
    #[must_use]
    pub fn pooling_dir(&self) -> PathBuf {
        self.resolve_output_dir().join(POOLING_SUBDIR)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new();
        assert_eq!(config.initial_max_input_val, 2f64.powi(25));
        assert_eq!(config.required_max, 2f64.powi(24));
        assert_eq!(config.max_halvings, 8);
        assert!(config.output_root.is_none());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .with_output_root("/tmp/out")
            .with_initial_max_input_val(1024.0)
            .with_required_max(512.0)
            .with_max_halvings(2);
        assert_eq!(config.resolve_output_dir(), PathBuf::from("/tmp/out"));
        assert_eq!(config.pooling_dir(), PathBuf::from("/tmp/out/pooling"));
        assert_eq!(config.initial_max_input_val, 1024.0);
        assert_eq!(config.required_max, 512.0);
        assert_eq!(config.max_halvings, 2);
    }

    #[test]
    fn test_default_output_dir() {
        let dir = GeneratorConfig::new().resolve_output_dir();
        assert!(dir.ends_with("test"));
        assert!(dir.starts_with(env!("CARGO_MANIFEST_DIR")));
    }
}
