use super::models::{NewProductPayload, Product};
use crate::utils::error::AppError;
use crate::utils::types::Pool;
use axum::extract::{Json, Path, State};
use axum_orders::schema::products;
use diesel::prelude::*;

pub async fn create_product(
    State(pool): State<Pool>,
    Json(payload): Json<NewProductPayload>,
) -> Result<Json<Product>, AppError> {
    let record = payload.into_record()?;
    let conn = pool.get().await.map_err(AppError::store)?;

    let res: Product = conn
        .interact(move |conn| {
            diesel::insert_into(products::table)
                .values(&record)
                .returning(Product::as_returning())
                .get_result(conn)
        })
        .await
        .map_err(AppError::store)??;

    tracing::info!(product_id = res.id, name = %res.name, "product added");

    Ok(Json(res))
}

pub async fn get_products(State(pool): State<Pool>) -> Result<Json<Vec<Product>>, AppError> {
    let conn = pool.get().await.map_err(AppError::store)?;

    let res = conn
        .interact(|conn| {
            products::table
                .select(Product::as_select())
                .order(products::id.asc())
                .load(conn)
        })
        .await
        .map_err(AppError::store)??;

    Ok(Json(res))
}

pub async fn get_product_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    let conn = pool.get().await.map_err(AppError::store)?;

    let res = conn
        .interact(move |conn| {
            products::table
                .find(id)
                .select(Product::as_select())
                .first(conn)
                .optional()
        })
        .await
        .map_err(AppError::store)??
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))?;

    Ok(Json(res))
}
