//! Screens: each one loads through a `LoadState` and renders the outcome.

use anyhow::{Result, anyhow};
use cashflow_client::ApiClient;
use cashflow_core::{LoadState, inventory::apply_sale};
use cashflow_shared::{ClientError, ClientResult};
use tracing::{info, warn};

use crate::cli::Command;
use crate::render;

const UNREACHABLE_HINT: &str = "could not reach the backend, is it running?";

/// Message shown for a failed call. Unreachable backends get a hint.
fn describe(err: &ClientError) -> String {
    if err.is_unreachable() {
        format!("{} ({UNREACHABLE_HINT})", err.message())
    } else {
        err.message().to_string()
    }
}

/// Drives one screen from idle to loaded or failed.
async fn load<T>(
    screen: &'static str,
    call: impl Future<Output = ClientResult<T>>,
) -> Result<LoadState<T>> {
    let mut state = LoadState::default();
    state.start()?;
    info!(screen, "Loading");
    let outcome = call.await.map_err(|e| {
        warn!(screen, code = e.error_code(), error = %e, "Load failed");
        describe(&e)
    });
    state.finish(outcome)?;
    Ok(state)
}

/// Renders a settled state, turning a failure into an error.
fn show<T>(state: &LoadState<T>, placeholder: &str, render: impl Fn(&T) -> String) -> Result<String> {
    match state {
        LoadState::Loaded(data) => Ok(render(data)),
        LoadState::Failed(message) => Err(anyhow!("{message}")),
        LoadState::Idle | LoadState::Loading => Ok(placeholder.to_string()),
    }
}

/// Like `show`, but keeps a failure inline so other sections still render.
fn section<T>(title: &str, state: &LoadState<T>, render: impl Fn(&T) -> String) -> String {
    let body = match show(state, "", render) {
        Ok(body) => body,
        Err(e) => format!("Error: {e}"),
    };
    format!("== {title} ==\n{body}")
}

/// Runs a command and returns its rendered output.
pub async fn dispatch(client: &ApiClient, command: Command) -> Result<String> {
    match command {
        Command::Overview => overview(client).await,
        Command::Summary { start, end } => {
            let state = load("summary", client.cashflow().summary(start, end)).await?;
            show(&state, "Loading cash flow…", render::summary)
        }
        Command::Payments(query) => {
            let state = load("payments", client.payments().list(query)).await?;
            show(&state, "Loading payments…", |p| render::payments(p))
        }
        Command::Regenerate { count } => {
            let state = load("regenerate", client.payments().regenerate(count)).await?;
            show(&state, "Regenerating…", render::regenerated)
        }
        Command::Inventory { category } => {
            let state = load("inventory", client.inventory().list(category.as_deref())).await?;
            show(&state, "Loading inventory…", |items| render::inventory(items))
        }
        Command::Sell { item_id, quantity } => sell(client, item_id, quantity).await,
        Command::Ask { question } => {
            let state = load("copilot", client.copilot().ask(&question, None)).await?;
            show(&state, "Thinking…", |r| render::answer(&r.answer, &r.sources_used))
        }
        Command::CopilotStatus => {
            let state = load("copilot-status", client.copilot().status()).await?;
            show(&state, "Checking copilot…", |s| {
                s.unavailable_reason()
                    .map_or_else(|| "Copilot is configured.".to_string(), str::to_string)
            })
        }
        Command::Health => {
            let state = load("health", client.system().health()).await?;
            show(&state, "Checking backend…", |h| {
                format!("{}: {}", h.service, h.status)
            })
        }
        Command::Settings => {
            let state = load("settings", client.system().settings()).await?;
            show(&state, "Loading settings…", render::settings)
        }
        Command::Help => Ok(crate::cli::USAGE.to_string()),
    }
}

/// Summary, payments and inventory, loaded concurrently.
async fn overview(client: &ApiClient) -> Result<String> {
    let payments_query = cashflow_client::PaymentQuery::new().limit(10);
    let (summary, payments, inventory) = futures::join!(
        load("summary", client.cashflow().summary(None, None)),
        load("payments", client.payments().list(payments_query)),
        load("inventory", client.inventory().list(None)),
    );
    Ok([
        section("Cash flow", &summary?, render::summary),
        section("Recent payments", &payments?, |p| render::payments(p)),
        section("Inventory", &inventory?, |items| render::inventory(items)),
    ]
    .join("\n\n"))
}

/// Records a sale and shows the inventory with the new quantity applied.
async fn sell(client: &ApiClient, item_id: uuid::Uuid, quantity: i64) -> Result<String> {
    let mut items = load("inventory", client.inventory().list(None)).await?;
    let sale = load(
        "sale",
        client.inventory().record_transaction(item_id, quantity),
    )
    .await?;
    let sale_text = show(&sale, "Recording sale…", render::sale)?;

    if let (Some(list), Some(done)) = (items.data_mut(), sale.data()) {
        if !apply_sale(list, done) {
            warn!(%item_id, "Sold item missing from local inventory list");
        }
    }
    let inventory_text = section("Inventory", &items, |items| render::inventory(items));
    Ok(format!("{sale_text}\n\n{inventory_text}"))
}
