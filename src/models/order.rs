// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::BadgeStyle;

// O status vem como texto do banco; valores desconhecidos não quebram a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Processing => "Procesando",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregado",
            OrderStatus::Cancelled => "Cancelado",
            OrderStatus::Unknown => "Desconocido",
        }
    }

    pub fn badge(&self) -> BadgeStyle {
        match self {
            OrderStatus::Pending => BadgeStyle::new("bg-yellow-100", "text-yellow-800"),
            OrderStatus::Processing => BadgeStyle::new("bg-blue-100", "text-blue-800"),
            OrderStatus::Shipped => BadgeStyle::new("bg-indigo-100", "text-indigo-800"),
            OrderStatus::Delivered => BadgeStyle::new("bg-green-100", "text-green-800"),
            OrderStatus::Cancelled => BadgeStyle::new("bg-red-100", "text-red-800"),
            OrderStatus::Unknown => BadgeStyle::default(),
        }
    }
}

// Linha da tabela `orders`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    #[schema(example = "María Quispe")]
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    #[schema(example = "150.50")]
    pub total: Decimal,
    #[schema(example = "pending")]
    pub status: String,
}

// Campos prontos para a tabela de pedidos
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: Uuid,
    #[schema(example = "#A1B2C3D4")]
    pub code: String,
    pub customer_name: String,
    #[schema(example = "16 oct, 2026")]
    pub date_label: String,
    #[schema(example = "Bs. 150.50")]
    pub total_label: String,
    pub status: OrderStatus,
    pub status_label: String,
    pub badge: BadgeStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_total_over_any_input() {
        assert_eq!(OrderStatus::parse("Delivered"), OrderStatus::Delivered);
        assert_eq!(OrderStatus::parse("canceled"), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::parse("refunded"), OrderStatus::Unknown);
        assert_eq!(OrderStatus::parse(""), OrderStatus::Unknown);
    }

    #[test]
    fn unknown_status_gets_default_badge() {
        assert_eq!(OrderStatus::Unknown.badge(), BadgeStyle::default());
        for status in OrderStatus::ALL {
            assert_ne!(status.badge(), BadgeStyle::default());
            assert_eq!(OrderStatus::parse(status.as_str()), status);
        }
    }
}
