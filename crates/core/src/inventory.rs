//! Inventory records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item ID.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Category, e.g. "Shirts" or "Paddles".
    pub category: String,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Units on hand.
    pub quantity: i64,
    /// Quantity at or below which the item counts as low stock.
    pub low_stock_threshold: i64,
}

impl InventoryItem {
    /// True when the quantity is at or below the low-stock threshold.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }
}

/// Body of a recorded sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTransactionRequest {
    /// Item sold.
    pub item_id: Uuid,
    /// Units sold.
    pub quantity: i64,
}

/// Raised when a sale leaves an item at or below its threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    /// Item name.
    pub item_name: String,
    /// Units left.
    pub quantity: i64,
}

/// Outcome of a recorded sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTransactionResponse {
    /// Item sold.
    pub item_id: Uuid,
    /// Item name.
    pub item_name: String,
    /// Units sold.
    pub quantity_sold: i64,
    /// Units left after the sale.
    pub new_quantity: i64,
    /// Present only when `new_quantity` is at or below the threshold.
    #[serde(default)]
    pub low_stock_alert: Option<LowStockAlert>,
}

/// Applies a recorded sale to a locally held item list.
///
/// Returns `false` when the item is not in the list.
pub fn apply_sale(items: &mut [InventoryItem], sale: &InventoryTransactionResponse) -> bool {
    match items.iter_mut().find(|item| item.id == sale.item_id) {
        Some(item) => {
            item.quantity = sale.new_quantity;
            true
        }
        None => false,
    }
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn categories(items: &[InventoryItem]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item.category.as_str()) {
            seen.push(&item.category);
        }
    }
    seen
}
