// src/handlers/customers.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::{
        alert::{ActionResponse, Alert},
        error::AppError,
        pagination::WindowConfig,
    },
    config::AppState,
    handlers::{list_filters, ConfirmParams},
    middleware::{auth::AdminUser, i18n::Locale},
    models::customer::CustomerRow,
    services::{formatter::format_customer, list_service::load_list},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerListParams {
    /// Nome, e-mail ou telefone
    pub search: Option<String>,
    /// `new`, `recurring`, `vip` ou `all`
    pub tier: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    params(CustomerListParams),
    responses(
        (status = 200, description = "Página de clientes formatados + paginação"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<CustomerListParams>,
) -> impl IntoResponse {
    let filters = list_filters(params.search, params.tier, params.page, params.page_size);
    let months = locale.months();

    let page = load_list(&app_state.customers, &filters, WindowConfig::COMPACT)
        .await
        .map(|customer| format_customer(customer, months));

    (StatusCode::OK, Json(page))
}

// GET /api/customers/{id}
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente", body = CustomerRow),
        (status = 404, description = "Cliente não encontrado (redirect para a listagem)")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_customer(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = app_state
        .customers
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cliente", "/customers"))?;

    Ok((StatusCode::OK, Json(format_customer(customer, locale.months()))))
}

// DELETE /api/customers/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "ID do cliente"),
        ConfirmParams
    ),
    responses(
        (status = 200, description = "Cliente removido + alerta"),
        (status = 404, description = "Cliente não encontrado"),
        (status = 409, description = "Falta confirmação (devolve o diálogo)")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Query(confirm): Query<ConfirmParams>,
) -> Result<impl IntoResponse, AppError> {
    confirm.require("el cliente")?;

    if !app_state.customers.delete(id).await? {
        return Err(AppError::not_found("Cliente", "/customers"));
    }
    tracing::info!(admin = %admin.0.sub, customer = %id, "Cliente removido");

    let alert = Alert::success("Cliente eliminado", "El cliente fue eliminado.");
    Ok((StatusCode::OK, Json(ActionResponse::new(id, alert))))
}
