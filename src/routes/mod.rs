pub mod health;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;
