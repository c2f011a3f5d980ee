use super::models::{CustomerSummary, NewCustomer, User};
use crate::utils::error::AppError;
use crate::utils::types::Pool;
use axum::extract::{Json, State};
use axum_orders::schema::users;
use diesel::prelude::*;
use uuid::Uuid;

/// Administrative/seed creation of a customer record.
pub async fn create_customer(
    State(pool): State<Pool>,
    Json(payload): Json<NewCustomer>,
) -> Result<Json<CustomerSummary>, AppError> {
    for (field, value) in [
        ("name", &payload.name),
        ("email", &payload.email),
        ("phone", &payload.phone),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::InvalidInput(format!("{field} is required")));
        }
    }

    let user = User {
        id: Uuid::new_v4(),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        address: payload.address,
        is_admin: payload.is_admin,
    };

    let conn = pool.get().await.map_err(AppError::store)?;
    let res: CustomerSummary = conn
        .interact(move |conn| {
            diesel::insert_into(users::table)
                .values(&user)
                .returning(CustomerSummary::as_returning())
                .get_result(conn)
        })
        .await
        .map_err(AppError::store)??;

    tracing::info!(user_id = %res.id, "customer created");

    Ok(Json(res))
}

pub async fn get_customers(
    State(pool): State<Pool>,
) -> Result<Json<Vec<CustomerSummary>>, AppError> {
    let conn = pool.get().await.map_err(AppError::store)?;

    let res = conn
        .interact(|conn| {
            users::table
                .select(CustomerSummary::as_select())
                .order(users::name.asc())
                .load(conn)
        })
        .await
        .map_err(AppError::store)??;

    Ok(Json(res))
}
