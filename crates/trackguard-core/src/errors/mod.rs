//! Error handling for trackguard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod discovery_error;
pub mod error_code;
pub mod model_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use discovery_error::DiscoveryError;
pub use error_code::TrackguardErrorCode;
pub use model_error::ModelError;
pub use pipeline_error::{PipelineError, PipelineResult};
