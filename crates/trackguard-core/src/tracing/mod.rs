//! Observability for trackguard.
//! `tracing` crate with `EnvFilter`, per-target log levels.

pub mod setup;

pub use setup::init_tracing;
