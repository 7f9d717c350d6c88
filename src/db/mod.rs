use std::str::FromStr;

use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;

use crate::models::*;

/// Open a pool with foreign key enforcement on every connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(r#"SELECT 1"#).execute(pool).await?;
    Ok(())
}

// Restaurant queries
pub async fn get_all_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(
        r#"SELECT id, name, address FROM restaurants ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_restaurant_by_id(pool: &SqlitePool, restaurant_id: i64) -> Result<Option<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(
        r#"SELECT id, name, address FROM restaurants WHERE id = ?"#
    )
    .bind(restaurant_id)
    .fetch_optional(pool)
    .await
}

/// Every pizza a restaurant serves, with the price it charges
pub async fn get_restaurant_pizzas(pool: &SqlitePool, restaurant_id: i64) -> Result<Vec<PricedPizza>, sqlx::Error> {
    sqlx::query_as::<_, PricedPizza>(
        r#"SELECT
               p.id,
               p.name,
               p.ingredients,
               rp.price
           FROM restaurant_pizzas rp
           JOIN pizzas p ON p.id = rp.pizza_id
           WHERE rp.restaurant_id = ?
           ORDER BY rp.id"#
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await
}

/// Delete a restaurant together with its association rows.
///
/// Returns `false` when no restaurant had that id.
pub async fn delete_restaurant(pool: &SqlitePool, restaurant_id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(r#"DELETE FROM restaurant_pizzas WHERE restaurant_id = ?"#)
        .bind(restaurant_id)
        .execute(&mut *tx)
        .await?;

    let deleted = sqlx::query(r#"DELETE FROM restaurants WHERE id = ?"#)
        .bind(restaurant_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    Ok(deleted > 0)
}

// Pizza queries
pub async fn get_all_pizzas(pool: &SqlitePool) -> Result<Vec<Pizza>, sqlx::Error> {
    sqlx::query_as::<_, Pizza>(
        r#"SELECT id, name, ingredients FROM pizzas ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_pizza_by_id(pool: &SqlitePool, pizza_id: i64) -> Result<Option<Pizza>, sqlx::Error> {
    sqlx::query_as::<_, Pizza>(
        r#"SELECT id, name, ingredients FROM pizzas WHERE id = ?"#
    )
    .bind(pizza_id)
    .fetch_optional(pool)
    .await
}

// Association queries
pub async fn create_restaurant_pizza(pool: &SqlitePool, new: &NewRestaurantPizza) -> Result<RestaurantPizza, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(
        r#"INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id)
           VALUES (?, ?, ?)
           RETURNING id, price, restaurant_id, pizza_id"#
    )
    .bind(new.price.value())
    .bind(new.restaurant_id)
    .bind(new.pizza_id)
    .fetch_one(pool)
    .await
}

pub async fn count_restaurant_pizzas(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM restaurant_pizzas"#)
        .fetch_one(pool)
        .await
}

// Seeding
pub async fn insert_restaurant<'e, E>(executor: E, name: &str, address: &str) -> Result<Restaurant, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Restaurant>(
        r#"INSERT INTO restaurants (name, address) VALUES (?, ?)
           RETURNING id, name, address"#
    )
    .bind(name)
    .bind(address)
    .fetch_one(executor)
    .await
}

pub async fn insert_pizza<'e, E>(executor: E, name: &str, ingredients: &str) -> Result<Pizza, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Pizza>(
        r#"INSERT INTO pizzas (name, ingredients) VALUES (?, ?)
           RETURNING id, name, ingredients"#
    )
    .bind(name)
    .bind(ingredients)
    .fetch_one(executor)
    .await
}

/// Empty every table and restart id generation at 1
pub async fn reset(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    clear_tables(&mut *tx).await?;
    tx.commit().await
}

async fn clear_tables(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for statement in [
        "DELETE FROM restaurant_pizzas",
        "DELETE FROM restaurants",
        "DELETE FROM pizzas",
        "DELETE FROM sqlite_sequence WHERE name IN ('restaurant_pizzas', 'restaurants', 'pizzas')",
    ] {
        sqlx::query(statement).execute(&mut *conn).await?;
    }

    Ok(())
}

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

const PRICES: [i64; 3] = [10, 12, 15];

/// Reset the tables and load the sample menu in one transaction.
///
/// Each restaurant serves the pizza at the same position. On error the
/// previous contents are left untouched.
pub async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    clear_tables(&mut *tx).await?;

    for (((name, address), (pizza_name, ingredients)), price) in
        RESTAURANTS.into_iter().zip(PIZZAS).zip(PRICES)
    {
        let restaurant = insert_restaurant(&mut *tx, name, address).await?;
        let pizza = insert_pizza(&mut *tx, pizza_name, ingredients).await?;

        sqlx::query(r#"INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)"#)
            .bind(price)
            .bind(restaurant.id)
            .bind(pizza.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}
