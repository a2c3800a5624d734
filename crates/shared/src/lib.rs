//! Shared types, errors, and configuration for Spendscope.
//!
//! This crate provides common types used across all other crates:
//! - Whole-unit amount type (no floats)
//! - Typed IDs for transaction references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
