use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pizza_restaurant_api::{config::Config, db};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let pool = db::connect(&config.database_url).await?;
    db::migrate(&pool).await?;

    tracing::info!("Seeding {}...", config.database_url);
    db::seed(&pool).await?;

    let restaurants = db::get_all_restaurants(&pool).await?;
    let pizzas = db::get_all_pizzas(&pool).await?;
    let associations = db::count_restaurant_pizzas(&pool).await?;
    tracing::info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        associations,
        "Seeding done."
    );

    pool.close().await;

    Ok(())
}
