use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use crate::db;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

// GET / - Banner
pub async fn index() -> Html<&'static str> {
    Html("<h1>Pizza Restaurant API</h1>")
}

// GET /health - Service is up and the database answers
pub async fn health_check(
    State(pool): State<SqlitePool>,
) -> (StatusCode, Json<HealthResponse>) {
    match db::ping(&pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse { status: "ok", database: "ok" }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { status: "degraded", database: "unavailable" }),
            )
        }
    }
}
