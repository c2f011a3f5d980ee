use axum_orders::schema::products;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::coerce::{coerce_f64, coerce_i32};
use crate::utils::error::AppError;

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
}

/// Incoming payload for add_product. Price and stock arrive as numbers or
/// numeric strings and are coerced; nothing is written until the whole
/// payload is valid.
#[derive(Deserialize)]
pub struct NewProductPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: serde_json::Value,
    #[serde(default)]
    pub stock: serde_json::Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewProductPayload {
    pub fn into_record(self) -> Result<NewProduct, AppError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(AppError::InvalidInput("name is required".to_owned())),
        };

        let price = coerce_f64(&self.price, "price")?;
        if price < 0.0 {
            return Err(AppError::InvalidInput(
                "price must not be negative".to_owned(),
            ));
        }

        let stock = coerce_i32(&self.stock, "stock")?;
        if stock < 0 {
            return Err(AppError::InvalidInput(
                "stock must not be negative".to_owned(),
            ));
        }

        Ok(NewProduct {
            name,
            description: self.description.unwrap_or_default(),
            price,
            stock,
            category: self
                .category
                .unwrap_or_else(|| "Uncategorized".to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(name: Option<&str>, price: serde_json::Value, stock: serde_json::Value) -> NewProductPayload {
        NewProductPayload {
            name: name.map(str::to_owned),
            price,
            stock,
            description: None,
            category: None,
        }
    }

    #[test]
    fn defaults_category_and_description() {
        let record = payload(Some("Mouse"), json!("19.99"), json!(5))
            .into_record()
            .unwrap();
        assert_eq!(record.price, 19.99);
        assert_eq!(record.stock, 5);
        assert_eq!(record.category, "Uncategorized");
        assert_eq!(record.description, "");
    }

    #[test]
    fn rejects_non_numeric_price() {
        let err = payload(Some("Mouse"), json!("abc"), json!(5))
            .into_record()
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(payload(None, json!(1.0), json!(1)).into_record().is_err());
        assert!(payload(Some("  "), json!(1.0), json!(1)).into_record().is_err());
        assert!(
            payload(Some("Mouse"), serde_json::Value::Null, json!(1))
                .into_record()
                .is_err()
        );
    }

    #[test]
    fn rejects_negative_price_and_stock() {
        assert!(payload(Some("Mouse"), json!(-1.0), json!(1)).into_record().is_err());
        assert!(payload(Some("Mouse"), json!(1.0), json!(-1)).into_record().is_err());
    }
}
