//! Shared errors, configuration, and typed IDs for the PUC account engine.
//!
//! This crate provides common pieces used by the core and the binaries:
//! - Typed IDs for account and user references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ImportSettings, LoggingConfig};
pub use error::{AppError, AppResult};
