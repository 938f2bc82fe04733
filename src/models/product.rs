// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::BadgeStyle;

pub const LOW_STOCK_THRESHOLD: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    // Limites fixos: 0 e 10.
    pub fn from_stock(stock: i32) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn badge(&self) -> BadgeStyle {
        match self {
            StockStatus::InStock => BadgeStyle::new("bg-green-100", "text-green-800"),
            StockStatus::LowStock => BadgeStyle::new("bg-yellow-100", "text-yellow-800"),
            StockStatus::OutOfStock => BadgeStyle::new("bg-red-100", "text-red-800"),
        }
    }
}

// Linha de `products` já com o nome da categoria (LEFT JOIN)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "Polera básica")]
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    #[schema(example = 25)]
    pub stock: i32,
    #[schema(example = "89.90")]
    pub price: Decimal,
    // Percentual de desconto (0-100)
    #[schema(example = "10")]
    pub discount: Decimal,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "Poleras")]
    pub category: String,
    pub stock: i32,
    pub stock_status: StockStatus,
    #[schema(example = "In Stock")]
    pub stock_label: String,
    pub badge: BadgeStyle,
    #[schema(example = "Bs. 89.90")]
    pub price_label: String,
    #[schema(example = "10%")]
    pub discount_label: Option<String>,
    #[schema(example = "Bs. 80.91")]
    pub final_price_label: String,
    pub thumbnail: Option<String>,
}

fn validate_discount(discount: &Decimal) -> Result<(), ValidationError> {
    if discount.is_sign_negative() || *discount > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("range");
        err.message = Some("El descuento debe estar entre 0 y 100.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("El precio no puede ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// Payload de criação/edição (o mesmo para os dois)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    #[schema(example = "Polera básica")]
    pub name: String,

    pub description: Option<String>,

    pub category_id: Option<Uuid>,

    #[validate(range(min = 0, message = "El stock no puede ser negativo."))]
    #[schema(example = 25)]
    pub stock: i32,

    #[validate(custom(function = "validate_price"))]
    #[schema(example = "89.90")]
    pub price: Decimal,

    #[validate(custom(function = "validate_discount"))]
    #[serde(default)]
    pub discount: Decimal,

    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_label_boundaries_are_exact() {
        assert_eq!(StockStatus::from_stock(0).label(), "Out of Stock");
        assert_eq!(StockStatus::from_stock(-3).label(), "Out of Stock");
        assert_eq!(StockStatus::from_stock(1).label(), "Low Stock");
        assert_eq!(StockStatus::from_stock(9).label(), "Low Stock");
        assert_eq!(StockStatus::from_stock(10).label(), "In Stock");
        assert_eq!(StockStatus::from_stock(500).label(), "In Stock");
    }

    #[test]
    fn payload_rejects_out_of_range_discount() {
        let payload = ProductPayload {
            name: "Gorra".into(),
            description: None,
            category_id: None,
            stock: 3,
            price: Decimal::new(5000, 2),
            discount: Decimal::new(150, 0),
            images: vec![],
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("discount"));
    }

    #[test]
    fn payload_requires_name_and_non_negative_stock() {
        let payload = ProductPayload {
            name: String::new(),
            description: None,
            category_id: None,
            stock: -1,
            price: Decimal::ONE,
            discount: Decimal::ZERO,
            images: vec![],
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("stock"));
    }
}
