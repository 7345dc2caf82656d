//! Order Model
//!
//! Orders move through a fixed status lifecycle driven by admin actions
//! (`POST /orders/{id}/{action}/`). Illegal transitions are rejected
//! client-side before any network call.

use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Dispatched,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Dispatched => "dispatched",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "dispatched" => Some(OrderStatus::Dispatched),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Actions an admin may apply in this status
    pub fn allowed_actions(&self) -> &'static [OrderAction] {
        match self {
            OrderStatus::Pending => &[OrderAction::Confirm, OrderAction::Cancel],
            OrderStatus::Confirmed => &[OrderAction::Dispatch, OrderAction::Cancel],
            OrderStatus::Dispatched => &[OrderAction::Deliver],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_apply(&self, action: OrderAction) -> bool {
        self.allowed_actions().contains(&action)
    }
}

/// Admin action on an order, mapped to a URL path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    Confirm,
    Dispatch,
    Deliver,
    Cancel,
}

impl OrderAction {
    /// URL path segment for `POST /orders/{id}/{action}/`
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Confirm => "confirm",
            OrderAction::Dispatch => "dispatch",
            OrderAction::Deliver => "deliver",
            OrderAction::Cancel => "cancel",
        }
    }

    /// Status the order enters when the action succeeds
    pub fn resulting_status(&self) -> OrderStatus {
        match self {
            OrderAction::Confirm => OrderStatus::Confirmed,
            OrderAction::Dispatch => OrderStatus::Dispatched,
            OrderAction::Deliver => OrderStatus::Delivered,
            OrderAction::Cancel => OrderStatus::Cancelled,
        }
    }
}

/// Variant choices recorded on an order line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemSelection {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    /// Chosen style option per style group name
    #[serde(default)]
    pub styles: std::collections::BTreeMap<String, String>,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: i64,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub selection: OrderItemSelection,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_charge: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
