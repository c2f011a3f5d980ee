use std::fmt;

use crate::utils::error::AppError;

/// Order lifecycle: `Pending -> {Cancelled, Paid -> Shipped -> Delivered}`.
/// `Cancelled` and `Delivered` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "Pending" => Some(OrderStatus::Pending),
            "Paid" => Some(OrderStatus::Paid),
            "Shipped" => Some(OrderStatus::Shipped),
            "Delivered" => Some(OrderStatus::Delivered),
            "Cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Single forward step in the fulfilment chain.
    pub fn can_step_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::Paid, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }
}

/// Derived numbers for a placement: both are computed once here and written
/// as-is inside the transaction, so the stock check and the decrement cannot
/// disagree.
#[derive(Debug, PartialEq)]
pub struct PlacementPlan {
    pub total_amount: f64,
    pub stock_after: i32,
}

pub fn plan_placement(
    unit_price: f64,
    available_stock: i32,
    quantity: i32,
) -> Result<PlacementPlan, AppError> {
    if quantity <= 0 {
        return Err(AppError::InvalidInput(
            "quantity must be a positive integer".to_owned(),
        ));
    }
    if available_stock < quantity {
        return Err(AppError::InsufficientStock {
            available: available_stock,
        });
    }
    Ok(PlacementPlan {
        total_amount: unit_price * f64::from(quantity),
        stock_after: available_stock - quantity,
    })
}

pub fn ensure_cancellable(status: OrderStatus) -> Result<(), AppError> {
    if status.is_terminal() {
        return Err(AppError::InvalidState(format!(
            "order is {status} and cannot be cancelled"
        )));
    }
    Ok(())
}

pub fn ensure_step(current: OrderStatus, next: OrderStatus) -> Result<(), AppError> {
    if next == OrderStatus::Cancelled {
        // Cancellation has compensating writes; it only happens through the
        // cancel operation.
        return Err(AppError::InvalidState(
            "orders are cancelled through the cancel operation".to_owned(),
        ));
    }
    if !current.can_step_to(next) {
        return Err(AppError::InvalidState(format!(
            "cannot move a {current} order to {next}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_computes_total_and_remaining_stock() {
        let plan = plan_placement(100.0, 10, 3).unwrap();
        assert_eq!(plan.total_amount, 300.0);
        assert_eq!(plan.stock_after, 7);
    }

    #[test]
    fn placement_may_exhaust_stock_exactly() {
        let plan = plan_placement(2.5, 4, 4).unwrap();
        assert_eq!(plan.stock_after, 0);
    }

    #[test]
    fn placement_rejects_non_positive_quantity() {
        assert!(matches!(
            plan_placement(100.0, 10, 0),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            plan_placement(100.0, 10, -2),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn insufficient_stock_reports_what_is_available() {
        let err = plan_placement(5.0, 7, 8).unwrap_err();
        match err {
            AppError::InsufficientStock { available } => assert_eq!(available, 7),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(
            plan_placement(5.0, 7, 8)
                .unwrap_err()
                .to_string()
                .contains("7")
        );
    }

    #[test]
    fn pending_paid_and_shipped_orders_are_cancellable() {
        assert!(ensure_cancellable(OrderStatus::Pending).is_ok());
        assert!(ensure_cancellable(OrderStatus::Paid).is_ok());
        assert!(ensure_cancellable(OrderStatus::Shipped).is_ok());
    }

    #[test]
    fn terminal_orders_cannot_be_cancelled_again() {
        let err = ensure_cancellable(OrderStatus::Cancelled).unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert!(err.to_string().contains("Cancelled"));

        let err = ensure_cancellable(OrderStatus::Delivered).unwrap_err();
        assert!(err.to_string().contains("Delivered"));
    }

    #[test]
    fn status_updates_move_one_step_forward() {
        assert!(ensure_step(OrderStatus::Pending, OrderStatus::Paid).is_ok());
        assert!(ensure_step(OrderStatus::Paid, OrderStatus::Shipped).is_ok());
        assert!(ensure_step(OrderStatus::Shipped, OrderStatus::Delivered).is_ok());

        assert!(ensure_step(OrderStatus::Pending, OrderStatus::Shipped).is_err());
        assert!(ensure_step(OrderStatus::Delivered, OrderStatus::Paid).is_err());
        assert!(ensure_step(OrderStatus::Paid, OrderStatus::Pending).is_err());
    }

    #[test]
    fn cancellation_is_not_a_status_update() {
        assert!(matches!(
            ensure_step(OrderStatus::Pending, OrderStatus::Cancelled),
            Err(AppError::InvalidState(_))
        ));
    }

    #[test]
    fn status_text_round_trips() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("Refunded"), None);
    }
}
