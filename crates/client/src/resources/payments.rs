//! Payment endpoints.

use cashflow_core::{Direction, Payment, PaymentStatus, RegenerateResponse};
use cashflow_shared::ClientResult;
use reqwest::Method;

use crate::client::{ApiClient, RequestOptions};
use crate::query::QueryParams;

/// Filters for listing payments. Unset fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentQuery {
    /// Maximum number of payments. Zero counts as unset.
    pub limit: Option<u32>,
    /// Only payments in this direction.
    pub direction: Option<Direction>,
    /// Only payments with this status.
    pub status: Option<PaymentStatus>,
}

impl PaymentQuery {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the direction.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn to_query(self) -> QueryParams {
        QueryParams::new()
            .optional("limit", self.limit.filter(|n| *n > 0))
            .optional("direction", self.direction)
            .optional("status", self.status)
    }
}

/// `/payments` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PaymentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET `/payments`, in backend order.
    pub async fn list(self, query: PaymentQuery) -> ClientResult<Vec<Payment>> {
        self.client
            .request(Method::GET, &list_path(query), RequestOptions::new())
            .await
    }

    /// POST `/payments/regenerate`. The backend picks the count when `None`.
    pub async fn regenerate(self, count: Option<u32>) -> ClientResult<RegenerateResponse> {
        self.client
            .request(Method::POST, &regenerate_path(count), RequestOptions::new())
            .await
    }
}

fn list_path(query: PaymentQuery) -> String {
    query.to_query().apply("/payments")
}

fn regenerate_path(count: Option<u32>) -> String {
    QueryParams::new()
        .optional("count", count.filter(|n| *n > 0))
        .apply("/payments/regenerate")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PaymentQuery::new(), "/payments")]
    #[case(PaymentQuery::new().limit(100), "/payments?limit=100")]
    #[case(PaymentQuery::new().limit(0), "/payments")]
    #[case(PaymentQuery::new().direction(Direction::Inbound), "/payments?direction=inbound")]
    #[case(PaymentQuery::new().status(PaymentStatus::Refunded), "/payments?status=refunded")]
    #[case(
        PaymentQuery::new().status(PaymentStatus::Pending).direction(Direction::Outbound).limit(5),
        "/payments?limit=5&direction=outbound&status=pending"
    )]
    fn test_list_path(#[case] query: PaymentQuery, #[case] expected: &str) {
        assert_eq!(list_path(query), expected);
    }

    #[rstest]
    #[case(None, "/payments/regenerate")]
    #[case(Some(0), "/payments/regenerate")]
    #[case(Some(40), "/payments/regenerate?count=40")]
    fn test_regenerate_path(#[case] count: Option<u32>, #[case] expected: &str) {
        assert_eq!(regenerate_path(count), expected);
    }
}
