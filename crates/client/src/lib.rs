//! Typed HTTP client for the cash flow backend.
//!
//! This crate provides:
//! - `ApiClient`, the single choke point for backend I/O
//! - Resource handles for payments, cash flow, copilot, inventory and system
//! - Query string construction that omits unsupplied parameters
//!
//! ```no_run
//! # async fn run() -> cashflow_shared::ClientResult<()> {
//! use cashflow_client::{ApiClient, PaymentQuery};
//! use cashflow_core::Direction;
//! use cashflow_shared::ClientConfig;
//!
//! let client = ApiClient::new(&ClientConfig::default())?;
//! let inbound = client
//!     .payments()
//!     .list(PaymentQuery::new().direction(Direction::Inbound))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod query;
pub mod resources;

pub use client::{ApiClient, RequestOptions};
pub use query::QueryParams;
pub use resources::PaymentQuery;

pub use reqwest::Method;
