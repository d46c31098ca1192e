//! Shared utilities for cash-bot
//!
//! This crate provides common functionality used across the cash-bot workspace,
//! including logging setup, the user-facing locale, and environment-variable
//! configuration helpers.

pub mod config;
pub mod locale;
pub mod logging;

pub use config::{ConfigError, env_or, env_required, env_var};
pub use locale::Locale;
pub use logging::{LogFormat, init_tracing_with};
