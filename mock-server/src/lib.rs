use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

mod seed;

pub use seed::seed_records;

/// Records are kept as raw JSON so a catalog can hold entries that do not
/// match the actress schema.
pub type Db = Arc<BTreeMap<i64, Value>>;

/// Router serving the seed catalog.
pub fn app() -> Router {
    app_with(seed_records())
}

/// Router serving `records`, keyed by the given id regardless of the
/// record's own `id` field.
pub fn app_with(records: impl IntoIterator<Item = (i64, Value)>) -> Router {
    let db: Db = Arc::new(records.into_iter().collect());
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.values().cloned().collect())
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    db.get(&id).cloned().map(Json).ok_or_else(|| {
        tracing::debug!(id, "no such user");
        StatusCode::NOT_FOUND
    })
}
