use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Restaurant, RestaurantDetail};

const RESTAURANT_NOT_FOUND: ApiError = ApiError::NotFound("Restaurant not found");

// Ids that are not integers can never name a restaurant
fn restaurant_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|_| RESTAURANT_NOT_FOUND)
}

// GET /restaurants - List all restaurants
pub async fn get_restaurants(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Restaurant>>, ApiError> {
    let restaurants = db::get_all_restaurants(&pool).await?;

    Ok(Json(restaurants))
}

// GET /restaurants/{id} - Get restaurant with the pizzas it serves
pub async fn get_restaurant_by_id(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let restaurant_id = restaurant_id(path)?;

    let Some(restaurant) = db::get_restaurant_by_id(&pool, restaurant_id).await? else {
        tracing::debug!(restaurant_id, "restaurant not found");
        return Err(RESTAURANT_NOT_FOUND);
    };

    let pizzas = db::get_restaurant_pizzas(&pool, restaurant_id).await?;

    Ok(Json(RestaurantDetail::new(restaurant, pizzas)))
}

// DELETE /restaurants/{id} - Delete restaurant and its menu entries
pub async fn delete_restaurant(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let restaurant_id = restaurant_id(path)?;

    if !db::delete_restaurant(&pool, restaurant_id).await? {
        tracing::debug!(restaurant_id, "restaurant not found");
        return Err(RESTAURANT_NOT_FOUND);
    }

    tracing::info!(restaurant_id, "restaurant deleted");

    Ok(StatusCode::NO_CONTENT)
}
