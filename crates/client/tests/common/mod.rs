//! In-process fake backend for client integration tests.
//!
//! Serves the `/api/v1` contract from in-memory data and records every
//! request it receives so tests can assert on the exact wire traffic.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cashflow_client::ApiClient;
use cashflow_shared::ClientConfig;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
}

/// Shared backend state.
#[derive(Clone, Default)]
pub struct Backend {
    pub payments: Arc<Vec<Value>>,
    pub inventory: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
    pub bodies: Arc<Mutex<Vec<Value>>>,
}

impl Backend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().last().cloned().expect("no request recorded")
    }

    pub fn last_body(&self) -> Value {
        self.bodies.lock().unwrap().last().cloned().expect("no body recorded")
    }
}

pub const PADDLE_ID: &str = "7b1e4a52-0c3d-4f9e-8a6b-2d5c9e1f3a70";
pub const SHIRT_ID: &str = "0d9c3b8a-6f1e-4a2d-b5c7-8e9f0a1b2c3d";

/// Five payments: three inbound and two outbound, interleaved.
pub fn sample_payments() -> Vec<Value> {
    vec![
        payment("11111111-1111-4111-8111-111111111111", 120_000, "inbound", "completed", "2025-01-10T10:00:00"),
        payment("22222222-2222-4222-8222-222222222222", 45_000, "outbound", "completed", "2025-01-11T11:30:00"),
        payment("33333333-3333-4333-8333-333333333333", 87_500, "inbound", "pending", "2025-01-12T09:15:00"),
        payment("44444444-4444-4444-8444-444444444444", 9_900, "outbound", "failed", "2025-01-13T16:45:00"),
        payment("55555555-5555-4555-8555-555555555555", 300_000, "inbound", "completed", "2025-01-14T08:00:00.250000"),
    ]
}

fn payment(id: &str, amount: i64, direction: &str, status: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "amount_cents": amount,
        "currency": "USD",
        "direction": direction,
        "counterparty": if direction == "inbound" { json!("Dink Club") } else { Value::Null },
        "description": null,
        "status": status,
        "created_at": created_at,
        "updated_at": null,
        "external_id": null
    })
}

/// Two items with the default threshold of ten.
pub fn sample_inventory() -> Vec<Value> {
    vec![
        json!({
            "id": PADDLE_ID,
            "name": "Carbon Pro Paddle",
            "category": "Paddles",
            "sku": "PAD-001",
            "quantity": 12,
            "low_stock_threshold": 10
        }),
        json!({
            "id": SHIRT_ID,
            "name": "Dri-Fit Tee",
            "category": "Shirts",
            "sku": null,
            "quantity": 40,
            "low_stock_threshold": 10
        }),
    ]
}

#[derive(Deserialize)]
struct PaymentParams {
    limit: Option<usize>,
    direction: Option<String>,
    status: Option<String>,
}

async fn list_payments(
    State(backend): State<Backend>,
    Query(params): Query<PaymentParams>,
) -> Json<Vec<Value>> {
    let limit = params.limit.unwrap_or(50);
    let out = backend
        .payments
        .iter()
        .filter(|p| params.direction.as_deref().is_none_or(|d| p["direction"] == d))
        .filter(|p| params.status.as_deref().is_none_or(|s| p["status"] == s))
        .take(limit)
        .cloned()
        .collect();
    Json(out)
}

#[derive(Deserialize)]
struct RegenerateParams {
    count: Option<i64>,
}

async fn regenerate(Query(params): Query<RegenerateParams>) -> Json<Value> {
    let count = params.count.unwrap_or(28);
    Json(json!({
        "message": format!("Regenerated {count} test payments"),
        "count": count,
        "total_inflow_cents": count * 1_000,
        "total_outflow_cents": count * 400,
        "net_cents": count * 600
    }))
}

async fn cashflow_summary() -> Json<Value> {
    Json(json!({
        "start_date": "2025-01-01",
        "end_date": "2025-01-31",
        "total_inflow_cents": 507_500,
        "total_outflow_cents": 54_900,
        "net_cents": 452_600,
        "periods": [
            {
                "period_start": "2025-01-10",
                "period_end": "2025-01-10",
                "inflow_cents": 120_000,
                "outflow_cents": 0,
                "net_cents": 120_000,
                "transaction_count": 1
            }
        ]
    }))
}

async fn copilot_status() -> Json<Value> {
    Json(json!({
        "configured": false,
        "message": "Set OPENAI_API_KEY in backend/.env to enable the copilot."
    }))
}

async fn copilot_ask(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    backend.bodies.lock().unwrap().push(body.clone());
    Json(json!({
        "answer": format!("You asked: {}", body["question"].as_str().unwrap_or_default()),
        "sources_used": ["payments", "cashflow_summary"]
    }))
}

#[derive(Deserialize)]
struct CategoryParams {
    category: Option<String>,
}

async fn list_inventory(
    State(backend): State<Backend>,
    Query(params): Query<CategoryParams>,
) -> Json<Vec<Value>> {
    let items = backend.inventory.lock().unwrap();
    let out = items
        .iter()
        .filter(|i| {
            params.category.as_deref().is_none_or(|c| {
                i["category"]
                    .as_str()
                    .is_some_and(|have| have.eq_ignore_ascii_case(c))
            })
        })
        .cloned()
        .collect();
    Json(out)
}

async fn record_transaction(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> Response {
    backend.bodies.lock().unwrap().push(body.clone());
    let item_id = body["item_id"].as_str().unwrap_or_default().to_string();
    let sold = body["quantity"].as_i64().unwrap_or_default();

    let mut items = backend.inventory.lock().unwrap();
    let Some(item) = items.iter_mut().find(|i| i["id"] == item_id.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": format!("Item {item_id} not found") })),
        )
            .into_response();
    };

    let new_quantity = (item["quantity"].as_i64().unwrap_or_default() - sold).max(0);
    item["quantity"] = json!(new_quantity);
    let threshold = item["low_stock_threshold"].as_i64().unwrap_or_default();
    let alert = if new_quantity <= threshold {
        json!({ "item_name": item["name"], "quantity": new_quantity })
    } else {
        Value::Null
    };

    Json(json!({
        "item_id": item["id"],
        "item_name": item["name"],
        "quantity_sold": sold,
        "new_quantity": new_quantity,
        "low_stock_alert": alert
    }))
    .into_response()
}

async fn settings() -> Json<Value> {
    Json(json!({
        "app_name": "Cash Flow Copilot",
        "version": "0.1.0",
        "description": "AI-powered cash flow visibility and Q&A for payments systems",
        "datasource": "sample",
        "stripe_mock_url": null,
        "copilot_configured": false,
        "copilot_model": null,
        "api_docs_url": "/docs"
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "cash-flow-copilot" }))
}

async fn record(State(backend): State<Backend>, request: Request, next: Next) -> Response {
    let recorded = Recorded {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        content_type: request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    backend.requests.lock().unwrap().push(recorded);
    next.run(request).await
}

/// The full `/api/v1` contract plus `/health`.
pub fn router(backend: Backend) -> Router {
    let api = Router::new()
        .route("/payments", get(list_payments))
        .route("/payments/regenerate", post(regenerate))
        .route("/cashflow/summary", get(cashflow_summary))
        .route("/copilot/status", get(copilot_status))
        .route("/copilot/ask", post(copilot_ask))
        .route("/inventory", get(list_inventory))
        .route("/inventory/transaction", post(record_transaction))
        .route("/settings", get(settings));

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(backend.clone(), record))
        .with_state(backend)
}

/// Serves `app` on an ephemeral port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts the standard fake backend and a client pointed at it.
pub async fn start() -> (ApiClient, Backend) {
    let backend = Backend {
        payments: Arc::new(sample_payments()),
        inventory: Arc::new(Mutex::new(sample_inventory())),
        ..Backend::default()
    };
    let base_url = serve(router(backend.clone())).await;
    let client = ApiClient::new(&ClientConfig::new(base_url)).unwrap();
    (client, backend)
}

/// Starts a client against an arbitrary router.
pub async fn start_with(app: Router) -> ApiClient {
    let base_url = serve(app).await;
    ApiClient::new(&ClientConfig::new(base_url)).unwrap()
}
