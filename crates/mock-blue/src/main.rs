//! Mock Blue platform for local development.
//!
//! Serves the login endpoint plus a small slice of the Blue API so
//! `bluectl` can be exercised without real credentials:
//!
//! ```text
//! mock-blue &
//! bluectl --auth-url http://localhost:8060/access_token \
//!         --api-url  http://localhost:8060 \
//!         --client-id dev --client-secret dev \
//!         ops wait operations/calc-1
//! ```
//!
//! Operations are held in memory; each wait call counts down a
//! per-operation poll budget and flips `done` when it reaches zero, so
//! the waiter's poll loop gets real multi-round traffic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use blue_models::{Operation, UserIdentity};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

struct AppState {
    /// Operation name → remaining unfinished polls + payload.
    operations: Mutex<HashMap<String, PendingOperation>>,
}

struct PendingOperation {
    polls_remaining: u32,
    operation: Operation,
}

fn seed_operations() -> HashMap<String, PendingOperation> {
    let mut table = HashMap::new();
    table.insert(
        "operations/calc-1".to_string(),
        PendingOperation {
            polls_remaining: 3,
            operation: Operation {
                name: "operations/calc-1".into(),
                done: false,
                metadata: Some(json!({"stage": "aggregating"})),
                response: Some(json!({"rows": 120_000})),
                error: None,
            },
        },
    );
    table.insert(
        "operations/export-7".to_string(),
        PendingOperation {
            polls_remaining: 0,
            operation: Operation {
                name: "operations/export-7".into(),
                done: true,
                metadata: None,
                response: Some(json!({"uri": "s3://exports/7.csv.gz"})),
                error: None,
            },
        },
    );
    table
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /access_token` — lenient OAuth2 token endpoint.
///
/// Any non-empty client id/secret pair is accepted; the token encodes the
/// client id so traffic is easy to eyeball in logs.
#[derive(Deserialize)]
struct TokenRequest {
    #[serde(default)]
    client_id: String,
    #[serde(default)]
    client_secret: String,
    #[serde(default)]
    grant_type: String,
}

async fn access_token(
    Form(req): Form<TokenRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if req.client_id.is_empty() || req.client_secret.is_empty() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid_client"})),
        ));
    }

    info!(client_id = %req.client_id, grant_type = %req.grant_type, "token issued");
    Ok(Json(json!({
        "access_token": format!("mock_{}", req.client_id),
        "token_type": "Bearer",
        "expires_in": 3600,
    })))
}

/// `GET /iam/v1/whoami` — fixed identity payload.
async fn whoami() -> Json<UserIdentity> {
    Json(UserIdentity {
        id: "dev-user".into(),
        parent: "dev-org".into(),
        email: "dev@example.com".into(),
        metadata: None,
    })
}

/// `GET /ops/v1` — all operations, current state.
async fn list_operations(State(state): State<Arc<AppState>>) -> Json<Vec<Operation>> {
    let table = state.operations.lock().expect("operations lock");
    let mut ops: Vec<Operation> = table.values().map(|p| visible(p)).collect();
    ops.sort_by(|a, b| a.name.cmp(&b.name));
    Json(ops)
}

/// `GET /ops/v1/{name}`, `POST /ops/v1/{name}:wait`, `DELETE /ops/v1/{name}`.
///
/// Operation names contain slashes, so the route captures the full
/// remaining path and the wait marker is split off here.
async fn get_operation(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Operation>, StatusCode> {
    let table = state.operations.lock().expect("operations lock");
    table
        .get(&name)
        .map(|p| Json(visible(p)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn wait_or_reject(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Operation>, StatusCode> {
    let Some(name) = name.strip_suffix(":wait") else {
        return Err(StatusCode::NOT_FOUND);
    };

    let mut table = state.operations.lock().expect("operations lock");
    let pending = table.get_mut(name).ok_or(StatusCode::NOT_FOUND)?;

    if pending.polls_remaining > 0 {
        pending.polls_remaining -= 1;
        info!(%name, remaining = pending.polls_remaining, "wait poll");
    }
    Ok(Json(visible(pending)))
}

async fn delete_operation(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut table = state.operations.lock().expect("operations lock");
    match table.remove(&name) {
        Some(_) => Ok(Json(json!({}))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Project the externally visible state: `done` and the result union only
/// appear once the poll budget is spent.
fn visible(pending: &PendingOperation) -> Operation {
    if pending.polls_remaining == 0 {
        Operation {
            done: true,
            ..pending.operation.clone()
        }
    } else {
        Operation {
            done: false,
            response: None,
            error: None,
            ..pending.operation.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/access_token", post(access_token))
        .route("/iam/v1/whoami", get(whoami))
        .route("/ops/v1", get(list_operations))
        .route(
            "/ops/v1/{*name}",
            get(get_operation)
                .post(wait_or_reject)
                .delete(delete_operation),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let listen_port: u16 = std::env::var("MOCK_BLUE_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8060);

    let state = Arc::new(AppState {
        operations: Mutex::new(seed_operations()),
    });

    let addr = format!("0.0.0.0:{listen_port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");

    info!(address = %addr, "mock Blue platform listening");
    axum::serve(listener, router(state)).await.expect("server error");
}
