//! Common types used across the workspace.

pub mod money;

pub use money::{Cents, format_cents, format_cents_exact};
