//! Resource groups of the backend API.
//!
//! Each handle is a `Copy` view of the client and each method issues exactly
//! one request. Methods take the handle by value, so their futures borrow only
//! the client and can be held across statements.

pub mod cashflow;
pub mod copilot;
pub mod inventory;
pub mod payments;
pub mod system;

pub use cashflow::CashflowApi;
pub use copilot::CopilotApi;
pub use inventory::InventoryApi;
pub use payments::{PaymentQuery, PaymentsApi};
pub use system::SystemApi;
