//! Configuration system for trackguard.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod pipeline_config;
pub mod trackguard_config;
pub mod verifier_config;

pub use pipeline_config::PipelineConfig;
pub use trackguard_config::{CliOverrides, TrackguardConfig};
pub use verifier_config::{EntityDetection, NecessitySeverity, VerifierConfig};
