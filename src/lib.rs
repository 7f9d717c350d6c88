use axum::{
    routing::{get, post},
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

/// Build the application router over a migrated pool.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::health::index))
        .route("/health", get(routes::health::health_check))

        // Restaurant endpoints
        .route("/restaurants", get(routes::restaurants::get_restaurants))
        .route(
            "/restaurants/{id}",
            get(routes::restaurants::get_restaurant_by_id)
                .delete(routes::restaurants::delete_restaurant),
        )

        // Pizza endpoints
        .route("/pizzas", get(routes::pizzas::get_pizzas))

        // Association endpoints
        .route("/restaurant_pizzas", post(routes::restaurant_pizzas::create_restaurant_pizza))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(pool)
}
