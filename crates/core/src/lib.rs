//! Wire records and screen state for the cash flow client.
//!
//! This crate contains the request/response shapes of the backend contract and
//! the per-screen load state machine, with ZERO HTTP dependencies.
//!
//! # Modules
//!
//! - `payment` - Payments, directions, statuses, regeneration summaries
//! - `cashflow` - Cash flow summaries and period buckets
//! - `copilot` - Copilot questions, answers and status
//! - `inventory` - Inventory items and recorded sales
//! - `system` - Health and public settings
//! - `screen` - Idle/loading/loaded/failed state per screen

pub mod cashflow;
pub mod copilot;
pub mod inventory;
pub mod payment;
pub mod screen;
pub mod system;

pub use cashflow::{CashFlowPeriod, CashFlowSummary};
pub use copilot::{CopilotAskRequest, CopilotContext, CopilotResponse, CopilotStatus};
pub use inventory::{
    InventoryItem, InventoryTransactionRequest, InventoryTransactionResponse, LowStockAlert,
};
pub use payment::{Direction, Payment, PaymentId, PaymentStatus, RegenerateResponse, Timestamp};
pub use screen::{LoadPhase, LoadState};
pub use system::{AppSettings, HealthStatus};
