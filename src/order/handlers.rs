use super::lifecycle::{self, OrderStatus, PaymentStatus};
use super::models::{
    CancelOrder, CancelledOrder, NewCancelledOrder, NewOrder, NewOrderItem, NewPayment, Order,
    OrderDetail, OrderItem, OrderSummary, Payment, PlaceOrder, UpdateOrderStatus,
};
use crate::product::models::Product;
use crate::user::models::User;
use crate::utils::coerce::coerce_i32;
use crate::utils::error::AppError;
use crate::utils::types::Pool;
use axum::extract::{Json, Path, State};
use axum_orders::schema::{cancelled_orders, order_items, orders, payments, products, users};
use diesel::prelude::*;

/// Place an order: one transaction covering the order, its item, the stock
/// decrement and the pending payment. The product row is locked for the
/// duration so two concurrent placements cannot both pass the stock check.
pub async fn place_order(
    State(pool): State<Pool>,
    Json(payload): Json<PlaceOrder>,
) -> Result<Json<Order>, AppError> {
    let quantity = coerce_i32(&payload.quantity, "quantity")?;
    let conn = pool.get().await.map_err(AppError::store)?;

    let order = conn
        .interact(move |conn| {
            conn.transaction::<Order, AppError, _>(|conn| {
                let user = users::table
                    .find(payload.user_id)
                    .select(User::as_select())
                    .first(conn)
                    .optional()?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("user {} not found", payload.user_id))
                    })?;

                let product: Product = products::table
                    .find(payload.product_id)
                    .for_update()
                    .first(conn)
                    .optional()?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("product {} not found", payload.product_id))
                    })?;

                let plan = lifecycle::plan_placement(product.price, product.stock, quantity)?;

                let order: Order = diesel::insert_into(orders::table)
                    .values(&NewOrder {
                        user_id: user.id,
                        total_amount: plan.total_amount,
                        status: OrderStatus::Pending.as_str().to_owned(),
                        shipping_address: user.address.clone(),
                    })
                    .returning(Order::as_returning())
                    .get_result(conn)?;

                diesel::insert_into(order_items::table)
                    .values(&NewOrderItem {
                        order_id: order.id,
                        product_id: product.id,
                        quantity,
                        subtotal: plan.total_amount,
                    })
                    .execute(conn)?;

                diesel::update(products::table.find(product.id))
                    .set(products::stock.eq(plan.stock_after))
                    .execute(conn)?;

                diesel::insert_into(payments::table)
                    .values(&NewPayment {
                        order_id: order.id,
                        method: "unspecified".to_owned(),
                        amount_paid: plan.total_amount,
                        status: PaymentStatus::Pending.as_str().to_owned(),
                    })
                    .execute(conn)?;

                Ok(order)
            })
        })
        .await
        .map_err(AppError::store)??;

    tracing::info!(order_id = order.id, user_id = %order.user_id, "order placed");

    Ok(Json(order))
}

/// Cancel an order: flips the status, records the cancellation, restocks
/// every item and cancels the payment if there is one, all in one
/// transaction.
pub async fn cancel_order(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
    Json(payload): Json<CancelOrder>,
) -> Result<Json<Order>, AppError> {
    let conn = pool.get().await.map_err(AppError::store)?;
    let reason = payload.reason;
    let logged_reason = reason.clone();

    let order = conn
        .interact(move |conn| {
            conn.transaction::<Order, AppError, _>(|conn| {
                let order: Order = orders::table
                    .find(id)
                    .for_update()
                    .first(conn)
                    .optional()?
                    .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

                let status = OrderStatus::parse(&order.status).ok_or_else(|| {
                    AppError::StoreFailure(format!(
                        "order {} has unrecognized status {}",
                        order.id, order.status
                    ))
                })?;
                lifecycle::ensure_cancellable(status)?;

                let cancelled: Order = diesel::update(orders::table.find(order.id))
                    .set(orders::status.eq(OrderStatus::Cancelled.as_str()))
                    .returning(Order::as_returning())
                    .get_result(conn)?;

                diesel::insert_into(cancelled_orders::table)
                    .values(&NewCancelledOrder {
                        order_id: order.id,
                        reason,
                    })
                    .execute(conn)?;

                let items: Vec<OrderItem> = order_items::table
                    .filter(order_items::order_id.eq(order.id))
                    .select(OrderItem::as_select())
                    .load(conn)?;
                for item in &items {
                    diesel::update(products::table.find(item.product_id))
                        .set(products::stock.eq(products::stock + item.quantity))
                        .execute(conn)?;
                }

                diesel::update(payments::table.filter(payments::order_id.eq(order.id)))
                    .set(payments::status.eq(PaymentStatus::Cancelled.as_str()))
                    .execute(conn)?;

                Ok(cancelled)
            })
        })
        .await
        .map_err(AppError::store)??;

    tracing::info!(order_id = order.id, reason = %logged_reason, "order cancelled");

    Ok(Json(order))
}

/// Move an order one step along Pending -> Paid -> Shipped -> Delivered.
/// Marking an order Paid completes its payment in the same transaction.
pub async fn update_order_status(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatus>,
) -> Result<Json<Order>, AppError> {
    let next = OrderStatus::parse(&payload.status).ok_or_else(|| {
        AppError::InvalidInput(format!("unknown order status: {}", payload.status))
    })?;
    let conn = pool.get().await.map_err(AppError::store)?;

    let order = conn
        .interact(move |conn| {
            conn.transaction::<Order, AppError, _>(|conn| {
                let order: Order = orders::table
                    .find(id)
                    .for_update()
                    .first(conn)
                    .optional()?
                    .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

                let current = OrderStatus::parse(&order.status).ok_or_else(|| {
                    AppError::StoreFailure(format!(
                        "order {} has unrecognized status {}",
                        order.id, order.status
                    ))
                })?;
                lifecycle::ensure_step(current, next)?;

                let updated: Order = diesel::update(orders::table.find(order.id))
                    .set(orders::status.eq(next.as_str()))
                    .returning(Order::as_returning())
                    .get_result(conn)?;

                if next == OrderStatus::Paid {
                    diesel::update(payments::table.filter(payments::order_id.eq(order.id)))
                        .set(payments::status.eq(PaymentStatus::Completed.as_str()))
                        .execute(conn)?;
                }

                Ok(updated)
            })
        })
        .await
        .map_err(AppError::store)??;

    tracing::info!(order_id = order.id, status = %order.status, "order status updated");

    Ok(Json(order))
}

/// Flattened listing: one row per order item with product and customer names
/// joined in.
pub async fn get_orders(State(pool): State<Pool>) -> Result<Json<Vec<OrderSummary>>, AppError> {
    let conn = pool.get().await.map_err(AppError::store)?;

    let rows = conn
        .interact(|conn| {
            orders::table
                .inner_join(users::table)
                .inner_join(order_items::table.inner_join(products::table))
                .select((
                    orders::id,
                    products::name,
                    order_items::quantity,
                    products::price,
                    orders::status,
                    users::name,
                ))
                .order(orders::id.asc())
                .load::<(i32, String, i32, f64, String, String)>(conn)
        })
        .await
        .map_err(AppError::store)??;

    let res = rows
        .into_iter()
        .map(
            |(id, product_name, quantity, price, status, customer_name)| OrderSummary {
                id,
                product_name,
                quantity,
                price,
                status,
                customer_name,
            },
        )
        .collect();

    Ok(Json(res))
}

pub async fn get_order_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<OrderDetail>, AppError> {
    let conn = pool.get().await.map_err(AppError::store)?;

    let detail = conn
        .interact(move |conn| -> Result<OrderDetail, AppError> {
            let order = orders::table
                .find(id)
                .select(Order::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

            let items = order_items::table
                .filter(order_items::order_id.eq(id))
                .select(OrderItem::as_select())
                .load(conn)?;

            let payment = payments::table
                .filter(payments::order_id.eq(id))
                .select(Payment::as_select())
                .first(conn)
                .optional()?;

            let cancellation = cancelled_orders::table
                .filter(cancelled_orders::order_id.eq(id))
                .select(CancelledOrder::as_select())
                .first(conn)
                .optional()?;

            Ok(OrderDetail {
                order,
                items,
                payment,
                cancellation,
            })
        })
        .await
        .map_err(AppError::store)??;

    Ok(Json(detail))
}
