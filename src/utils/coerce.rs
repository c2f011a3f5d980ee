use serde_json::Value;

use super::error::AppError;

/// Form-style payloads send numbers as strings as often as not, so numeric
/// fields are accepted as either and coerced here.
pub fn coerce_f64(value: &Value, field: &str) -> Result<f64, AppError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| not_numeric(field)),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| not_numeric(field)),
        Value::Null => Err(missing(field)),
        _ => Err(not_numeric(field)),
    }
}

pub fn coerce_i32(value: &Value, field: &str) -> Result<i32, AppError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| not_numeric(field)),
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| not_numeric(field)),
        Value::Null => Err(missing(field)),
        _ => Err(not_numeric(field)),
    }
}

fn missing(field: &str) -> AppError {
    AppError::InvalidInput(format!("{field} is required"))
}

fn not_numeric(field: &str) -> AppError {
    AppError::InvalidInput(format!("{field} must be a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_f64(&json!(19.99), "price").unwrap(), 19.99);
        assert_eq!(coerce_f64(&json!("19.99"), "price").unwrap(), 19.99);
        assert_eq!(coerce_i32(&json!(5), "stock").unwrap(), 5);
        assert_eq!(coerce_i32(&json!(" 5 "), "stock").unwrap(), 5);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            coerce_f64(&json!("abc"), "price"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            coerce_i32(&json!(true), "stock"),
            Err(AppError::InvalidInput(_))
        ));
        // fractional values are not a valid integer quantity
        assert!(coerce_i32(&json!(2.5), "quantity").is_err());
        assert!(coerce_i32(&json!("2.5"), "quantity").is_err());
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = coerce_i32(&Value::Null, "quantity").unwrap_err();
        assert_eq!(err.to_string(), "quantity is required");
    }
}
