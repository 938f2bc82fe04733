// src/models/customer.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::BadgeStyle;

// Tier é gravado no registro, nunca calculado aqui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    New,
    Recurring,
    Vip,
    #[serde(other)]
    Unknown,
}

impl CustomerTier {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "new" => CustomerTier::New,
            "recurring" => CustomerTier::Recurring,
            "vip" => CustomerTier::Vip,
            _ => CustomerTier::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerTier::New => "Nuevo",
            CustomerTier::Recurring => "Recurrente",
            CustomerTier::Vip => "VIP",
            CustomerTier::Unknown => "Sin clasificar",
        }
    }

    pub fn badge(&self) -> BadgeStyle {
        match self {
            CustomerTier::New => BadgeStyle::new("bg-blue-100", "text-blue-800"),
            CustomerTier::Recurring => BadgeStyle::new("bg-green-100", "text-green-800"),
            CustomerTier::Vip => BadgeStyle::new("bg-purple-100", "text-purple-800"),
            CustomerTier::Unknown => BadgeStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    #[schema(example = "Juan Mamani")]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "vip")]
    pub tier: String,
    pub registered_at: DateTime<Utc>,
    pub order_count: i32,
    pub total_spent: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "JM")]
    pub initials: String,
    pub contact: String,
    pub tier: CustomerTier,
    pub tier_label: String,
    pub badge: BadgeStyle,
    pub registered_label: String,
    pub order_count: i32,
    #[schema(example = "Bs. 2450.00")]
    pub total_spent_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parse_falls_back_to_unknown() {
        assert_eq!(CustomerTier::parse("VIP"), CustomerTier::Vip);
        assert_eq!(CustomerTier::parse(" recurring "), CustomerTier::Recurring);
        assert_eq!(CustomerTier::parse("gold"), CustomerTier::Unknown);
        assert_eq!(CustomerTier::Unknown.badge(), BadgeStyle::default());
    }
}
