//! Configuration for normalization runs.

use std::path::PathBuf;

/// Configuration for a normalization run
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Adapt records across the rayon pool instead of sequentially
    pub parallel: bool,
    /// Pretty-print the serialized output
    pub pretty_output: bool,
    /// Directory the parsed collections are written to
    pub output_dir: PathBuf,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            pretty_output: false,
            output_dir: PathBuf::from("data"),
        }
    }
}
