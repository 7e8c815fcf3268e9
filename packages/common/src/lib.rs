//! Common infrastructure shared by the canvas crates
//!
//! Currently this is the structured logging layer: `env_logger` setup and
//! helpers that log authentication outcomes without exposing identifiers
//! or credentials.

pub mod logging;

pub use logging::LoggingTransformer;
