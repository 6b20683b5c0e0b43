//! Shared configuration, errors, and money formatting for the cash flow client.
//!
//! This crate provides common pieces used by every other crate:
//! - Client configuration loading
//! - The tagged client error type
//! - Minor-unit money formatting

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ClientConfig};
pub use error::{ClientError, ClientResult};
