//! Cash flow endpoints.

use cashflow_core::CashFlowSummary;
use cashflow_shared::ClientResult;
use chrono::NaiveDate;
use reqwest::Method;

use crate::client::{ApiClient, RequestOptions};
use crate::query::QueryParams;

/// `/cashflow` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CashflowApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CashflowApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET `/cashflow/summary`. The backend picks the range when a bound is
    /// omitted.
    pub async fn summary(
        self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> ClientResult<CashFlowSummary> {
        self.client
            .request(
                Method::GET,
                &summary_path(start_date, end_date),
                RequestOptions::new(),
            )
            .await
    }
}

fn summary_path(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> String {
    QueryParams::new()
        .optional("start_date", start_date)
        .optional("end_date", end_date)
        .apply("/cashflow/summary")
}
