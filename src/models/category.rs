// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

const NAME_MAX_CHARS: usize = 80;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    #[schema(example = "Poleras")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "shirt")]
    pub icon: Option<String>,
    pub display_order: i32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    // Nome do ícone já resolvido pelo mapa fixo
    #[schema(example = "shirt")]
    pub icon: String,
    pub display_order: i32,
    pub active: bool,
}

// Vazio e longo demais têm mensagens diferentes.
fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("El nombre es obligatorio.".into());
        return Err(err);
    }
    if name.chars().count() > NAME_MAX_CHARS {
        let mut err = ValidationError::new("length");
        err.message = Some(format!("El nombre admite como máximo {NAME_MAX_CHARS} caracteres.").into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[validate(custom(function = "validate_category_name"))]
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "El orden no puede ser negativo."))]
    pub display_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
