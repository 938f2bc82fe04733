// src/handlers/categories.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        alert::{ActionResponse, Alert},
        error::AppError,
    },
    config::AppState,
    handlers::ConfirmParams,
    middleware::auth::AdminUser,
    models::category::{CategoryPayload, CategoryRow},
    services::formatter::format_category,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    /// Só categorias ativas (vitrine)
    #[serde(default)]
    pub only_active: bool,
}

// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    params(CategoryListParams),
    responses(
        (status = 200, description = "Categorias na ordem de exibição", body = Vec<CategoryRow>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
    Query(params): Query<CategoryListParams>,
) -> impl IntoResponse {
    let rows: Vec<CategoryRow> = app_state
        .categories
        .list(params.only_active)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Falha ao carregar categorias; exibindo vazia");
            Vec::new()
        })
        .into_iter()
        .map(format_category)
        .collect();

    (StatusCode::OK, Json(rows))
}

// POST /api/categories
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Categoria criada + alerta"),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<CategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let category = app_state.categories.create(&payload).await?;
    tracing::info!(admin = %admin.0.sub, category = %category.id, "Categoria criada");

    let alert = Alert::success("Categoría creada", format!("\"{}\" se guardó correctamente.", category.name));
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(format_category(category), alert)),
    ))
}

// PUT /api/categories/{id}
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    request_body = CategoryPayload,
    params(("id" = Uuid, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria atualizada + alerta"),
        (status = 404, description = "Categoria não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_category(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let category = app_state
        .categories
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found("Categoría", "/categories"))?;
    tracing::info!(admin = %admin.0.sub, category = %id, "Categoria atualizada");

    let alert = Alert::success("Categoría actualizada", "Los cambios se guardaron correctamente.");
    Ok((
        StatusCode::OK,
        Json(ActionResponse::new(format_category(category), alert)),
    ))
}

// DELETE /api/categories/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "ID da categoria"),
        ConfirmParams
    ),
    responses(
        (status = 200, description = "Categoria removida + alerta"),
        (status = 404, description = "Categoria não encontrada"),
        (status = 409, description = "Falta confirmação (devolve o diálogo)")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_category(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Query(confirm): Query<ConfirmParams>,
) -> Result<impl IntoResponse, AppError> {
    confirm.require("la categoría")?;

    if !app_state.categories.delete(id).await? {
        return Err(AppError::not_found("Categoría", "/categories"));
    }
    tracing::info!(admin = %admin.0.sub, category = %id, "Categoria removida");

    let alert = Alert::success("Categoría eliminada", "La categoría fue eliminada.");
    Ok((StatusCode::OK, Json(ActionResponse::new(id, alert))))
}
