//! Inventory endpoints.

use cashflow_core::{InventoryItem, InventoryTransactionRequest, InventoryTransactionResponse};
use cashflow_shared::ClientResult;
use reqwest::Method;
use uuid::Uuid;

use crate::client::{ApiClient, RequestOptions};
use crate::query::QueryParams;

/// `/inventory` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct InventoryApi<'a> {
    client: &'a ApiClient,
}

impl<'a> InventoryApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET `/inventory`, optionally filtered to one category.
    pub async fn list(self, category: Option<&str>) -> ClientResult<Vec<InventoryItem>> {
        self.client
            .request(Method::GET, &list_path(category), RequestOptions::new())
            .await
    }

    /// POST `/inventory/transaction` recording a sale of `quantity` units.
    pub async fn record_transaction(
        self,
        item_id: Uuid,
        quantity: i64,
    ) -> ClientResult<InventoryTransactionResponse> {
        let body = InventoryTransactionRequest { item_id, quantity };
        self.client
            .request(
                Method::POST,
                "/inventory/transaction",
                RequestOptions::new().json(&body)?,
            )
            .await
    }
}

fn list_path(category: Option<&str>) -> String {
    QueryParams::new()
        .optional("category", category)
        .apply("/inventory")
}
