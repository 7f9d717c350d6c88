use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::Pizza;

// GET /pizzas - List all pizzas
pub async fn get_pizzas(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Pizza>>, ApiError> {
    let pizzas = db::get_all_pizzas(&pool).await?;

    Ok(Json(pizzas))
}
