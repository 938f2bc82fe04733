pub mod auth;
pub mod catalog;
pub mod category;
pub mod customer;
pub mod dashboard;
pub mod list;
pub mod order;
pub mod product;

use serde::Serialize;
use utoipa::ToSchema;

// Classes do badge colorido (fundo + texto)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStyle {
    #[schema(example = "bg-green-100")]
    pub background: String,
    #[schema(example = "text-green-800")]
    pub text: String,
}

impl BadgeStyle {
    pub fn new(background: &str, text: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text.to_string(),
        }
    }
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self::new("bg-gray-100", "text-gray-800")
    }
}
