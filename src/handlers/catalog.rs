// src/handlers/catalog.rs

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::catalog::{attribute_groups, AttributeGroup};

// GET /api/catalog/attributes
#[utoipa::path(
    get,
    path = "/api/catalog/attributes",
    tag = "Catalog",
    responses(
        (status = 200, description = "Listas fixas de atributos (tamanho, cor, material, gênero)", body = Vec<AttributeGroup>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_attributes() -> impl IntoResponse {
    (StatusCode::OK, Json(attribute_groups()))
}
