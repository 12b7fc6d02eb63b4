//! Module scan pipeline configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the module scan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Verify endpoints in parallel. Default: true.
    pub parallel: Option<bool>,
    /// Worker threads for parallel verification. Default: rayon's global pool.
    pub threads: Option<usize>,
}

impl PipelineConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
