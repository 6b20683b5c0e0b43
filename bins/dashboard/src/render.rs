//! Text rendering of backend records.

use cashflow_core::{
    AppSettings, CashFlowSummary, Direction, InventoryItem, InventoryTransactionResponse, Payment,
    RegenerateResponse,
};
use cashflow_shared::types::{format_cents, format_cents_exact};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

/// Periods shown under a summary.
const SUMMARY_PERIODS: usize = 14;

const EMPTY: &str = "—";

fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// Totals plus the first periods of a cash flow summary.
pub fn summary(summary: &CashFlowSummary) -> String {
    let mut out = format!(
        "Cash flow summary  {} → {}\n\nInflows   {}\nOutflows  {}\nNet       {}\n",
        summary.start_date,
        summary.end_date,
        format_cents(summary.total_inflow_cents),
        format_cents(summary.total_outflow_cents),
        format_cents(summary.net_cents),
    );

    let periods = summary.leading_periods(SUMMARY_PERIODS);
    if !periods.is_empty() {
        let mut table = table(&["Date", "In", "Out", "Net", "# Txns"]);
        for p in periods {
            table.add_row(vec![
                p.period_start.to_string(),
                format_cents(p.inflow_cents),
                format_cents(p.outflow_cents),
                format_cents(p.net_cents),
                p.transaction_count.to_string(),
            ]);
        }
        out.push_str(&format!("\nBy period\n{table}\n"));
    }
    out
}

/// Outbound amounts carry a leading minus.
pub fn payment_amount(payment: &Payment) -> String {
    let amount = format_cents_exact(payment.amount_cents);
    if payment.direction == Direction::Outbound && payment.amount_cents > 0 {
        format!("-{amount}")
    } else {
        amount
    }
}

fn payment_date(payment: &Payment) -> String {
    payment.created_at.parse().map_or_else(
        |_| payment.created_at.to_string(),
        |dt| dt.format("%b %-d, %Y, %H:%M").to_string(),
    )
}

/// Payment table.
pub fn payments(payments: &[Payment]) -> String {
    if payments.is_empty() {
        return "No payments found.".to_string();
    }
    let mut table = table(&[
        "Date",
        "Counterparty",
        "Description",
        "Direction",
        "Amount",
        "Status",
    ]);
    for p in payments {
        table.add_row(vec![
            payment_date(p),
            p.counterparty().unwrap_or(EMPTY).to_string(),
            p.description().unwrap_or(EMPTY).to_string(),
            p.direction.to_string(),
            payment_amount(p),
            p.status.clone(),
        ]);
    }
    format!("{table}\n{} payments", payments.len())
}

/// Result of regenerating test payments.
pub fn regenerated(response: &RegenerateResponse) -> String {
    format!(
        "{}\nInflows {}  Outflows {}  Net {}",
        response.message,
        format_cents(response.total_inflow_cents),
        format_cents(response.total_outflow_cents),
        format_cents(response.net_cents),
    )
}

/// Inventory table with low-stock rows flagged.
pub fn inventory(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "No inventory items found.".to_string();
    }
    let mut table = table(&["ID", "Name", "Category", "SKU", "Qty", "Status"]);
    for item in items {
        table.add_row(vec![
            item.id.to_string(),
            item.name.clone(),
            item.category.clone(),
            item.sku.clone().unwrap_or_else(|| EMPTY.to_string()),
            item.quantity.to_string(),
            if item.is_low_stock() { "Low stock" } else { "OK" }.to_string(),
        ]);
    }
    let categories = cashflow_core::inventory::categories(items).join(", ");
    format!("{table}\nCategories: {categories}")
}

/// Result of a recorded sale, including any low-stock alert.
pub fn sale(sale: &InventoryTransactionResponse) -> String {
    let mut out = format!(
        "Sold {} × {}. {} left.",
        sale.quantity_sold, sale.item_name, sale.new_quantity
    );
    if let Some(alert) = &sale.low_stock_alert {
        out.push_str(&format!(
            "\nLow stock: {} has {} left.",
            alert.item_name, alert.quantity
        ));
    }
    out
}

/// Copilot answer and its sources.
pub fn answer(answer: &str, sources: &[String]) -> String {
    if sources.is_empty() {
        answer.to_string()
    } else {
        format!("{answer}\n\nSources: {}", sources.join(", "))
    }
}

/// Backend settings.
pub fn settings(settings: &AppSettings) -> String {
    let mut table = table(&["Setting", "Value"]);
    let rows = [
        ("App", settings.app_name.clone()),
        ("Version", settings.version.clone()),
        ("Datasource", settings.datasource.clone()),
        (
            "Stripe mock",
            settings.stripe_mock_url.clone().unwrap_or_else(|| EMPTY.to_string()),
        ),
        ("Copilot configured", settings.copilot_configured.to_string()),
        (
            "Copilot model",
            settings.copilot_model.clone().unwrap_or_else(|| EMPTY.to_string()),
        ),
        ("API docs", settings.api_docs_url.clone()),
    ];
    for (name, value) in rows {
        table.add_row(vec![name.to_string(), value]);
    }
    format!("{}\n{table}", settings.description)
}
