use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ApiError;

/// Restaurant row, also the list representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Pizza row, also the list representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

/// Pizza served by a restaurant, annotated with the association price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PricedPizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub price: i64,
}

/// Response for GET /restaurants/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub pizzas: Vec<PricedPizza>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, pizzas: Vec<PricedPizza>) -> Self {
        RestaurantDetail {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            pizzas,
        }
    }
}

/// Association price, always within `Price::MIN..=Price::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(i64);

impl Price {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 30;

    pub fn new(value: i64) -> Result<Self, ApiError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Price(value))
        } else {
            Err(ApiError::validation(format!(
                "Price must be between {} and {}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Accept any JSON number that is a whole value, so `10.0` reads as `10`
    pub fn from_number(number: &Number) -> Result<Self, ApiError> {
        if let Some(value) = number.as_i64() {
            return Self::new(value);
        }

        match number.as_f64() {
            Some(value) if value.fract() == 0.0 => Self::new(value as i64),
            _ => Err(ApiError::validation("Price must be a whole number")),
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// Body of POST /restaurant_pizzas as received.
///
/// Every field is optional so that absent fields can be reported with a
/// single "missing required fields" error instead of a parser message.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRestaurantPizza {
    pub price: Option<Number>,
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

/// Body of POST /restaurant_pizzas once every required field is present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaFields {
    pub price: Number,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl CreateRestaurantPizza {
    pub fn require_fields(self) -> Result<RestaurantPizzaFields, ApiError> {
        match (self.price, self.pizza_id, self.restaurant_id) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) => Ok(RestaurantPizzaFields {
                price,
                pizza_id,
                restaurant_id,
            }),
            _ => Err(ApiError::validation("Missing required fields")),
        }
    }
}

/// Association ready to insert: references checked, price in range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl NewRestaurantPizza {
    pub fn new(fields: RestaurantPizzaFields) -> Result<Self, ApiError> {
        Ok(NewRestaurantPizza {
            price: Price::from_number(&fields.price)?,
            pizza_id: fields.pizza_id,
            restaurant_id: fields.restaurant_id,
        })
    }
}
