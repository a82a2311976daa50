pub mod fulfillment;
pub mod health;
