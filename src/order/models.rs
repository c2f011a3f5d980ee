use axum_orders::schema::{cancelled_orders, order_items, orders, payments};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub total_amount: f64,
    pub status: String,
    pub shipping_address: String,
}

#[derive(Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub user_id: Uuid,
    pub total_amount: f64,
    pub status: String,
    pub shipping_address: String,
}

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal: f64,
}

#[derive(Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal: f64,
}

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub method: String,
    pub amount_paid: f64,
    pub paid_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Insertable)]
#[diesel(table_name = payments)]
pub struct NewPayment {
    pub order_id: i32,
    pub method: String,
    pub amount_paid: f64,
    pub status: String,
}

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = cancelled_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CancelledOrder {
    pub id: i32,
    pub order_id: i32,
    pub reason: String,
    pub cancelled_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = cancelled_orders)]
pub struct NewCancelledOrder {
    pub order_id: i32,
    pub reason: String,
}

#[derive(Deserialize)]
pub struct PlaceOrder {
    pub user_id: Uuid,
    pub product_id: i32,
    // string-or-number, coerced in the handler
    #[serde(default)]
    pub quantity: serde_json::Value,
}

#[derive(Deserialize)]
pub struct CancelOrder {
    #[serde(default)]
    pub reason: String,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatus {
    pub status: String,
}

/// One row per order item, flattened across orders/products/users for the
/// order listing.
#[derive(Debug, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: String,
    pub customer_name: String,
}

#[derive(Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub payment: Option<Payment>,
    pub cancellation: Option<CancelledOrder>,
}
