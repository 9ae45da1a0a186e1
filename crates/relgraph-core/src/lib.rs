//! RelGraph Core — shared error types and configuration.

pub mod config;
pub mod error;

pub use config::RelGraphConfig;
pub use error::{Error, Result};
