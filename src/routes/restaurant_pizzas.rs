use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{CreateRestaurantPizza, NewRestaurantPizza, Pizza};

// POST /restaurant_pizzas - Put a pizza on a restaurant's menu at a price
//
// Checks run in order: required fields, referenced rows, price range.
pub async fn create_restaurant_pizza(
    State(pool): State<SqlitePool>,
    body: Result<Json<CreateRestaurantPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<Pizza>), ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let fields = body.require_fields()?;

    let restaurant = db::get_restaurant_by_id(&pool, fields.restaurant_id).await?;
    let pizza = db::get_pizza_by_id(&pool, fields.pizza_id).await?;
    let (Some(_), Some(pizza)) = (restaurant, pizza) else {
        return Err(ApiError::validation("Restaurant or Pizza not found"));
    };

    let new = NewRestaurantPizza::new(fields)?;
    let created = db::create_restaurant_pizza(&pool, &new).await?;

    tracing::info!(
        restaurant_pizza_id = created.id,
        restaurant_id = created.restaurant_id,
        pizza_id = created.pizza_id,
        price = created.price,
        "restaurant pizza created"
    );

    Ok((StatusCode::CREATED, Json(pizza)))
}
