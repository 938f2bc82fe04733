// src/handlers/orders.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::{
    common::{
        alert::{ActionResponse, Alert},
        error::AppError,
        pagination::WindowConfig,
    },
    config::AppState,
    handlers::list_filters,
    middleware::{auth::AdminUser, i18n::Locale},
    models::order::{OrderRow, OrderStatus},
    services::{formatter::format_order, list_service::load_list},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderListParams {
    /// Cliente ou código do pedido
    pub search: Option<String>,
    /// `pending`, `processing`, `shipped`, `delivered`, `cancelled` ou `all`
    pub status: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusPayload {
    pub status: OrderStatus,
}

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    params(OrderListParams),
    responses(
        (status = 200, description = "Página de pedidos formatados + paginação"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<OrderListParams>,
) -> impl IntoResponse {
    let filters = list_filters(params.search, params.status, params.page, params.page_size);
    let months = locale.months();

    let page = load_list(&app_state.orders, &filters, WindowConfig::COMPACT)
        .await
        .map(|order| format_order(order, months));

    (StatusCode::OK, Json(page))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido", body = OrderRow),
        (status = 404, description = "Pedido não encontrado (redirect para a listagem)")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .orders
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Pedido", "/orders"))?;

    Ok((StatusCode::OK, Json(format_order(order, locale.months()))))
}

// PATCH /api/orders/{id}/status
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = "Orders",
    request_body = UpdateStatusPayload,
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Status atualizado + alerta"),
        (status = 400, description = "Status inválido"),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    locale: Locale,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    if payload.status == OrderStatus::Unknown {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("status");
        err.message = Some("Estado de pedido desconocido.".into());
        errors.add("status", err);
        return Err(AppError::ValidationError(errors));
    }

    let order = app_state
        .orders
        .update_status(id, &payload.status)
        .await?
        .ok_or_else(|| AppError::not_found("Pedido", "/orders"))?;

    tracing::info!(admin = %admin.0.sub, order = %id, status = payload.status.as_str(), "Status do pedido atualizado");

    let alert = Alert::success(
        "Pedido actualizado",
        format!("El pedido ahora está {}.", payload.status.label().to_lowercase()),
    );
    Ok((
        StatusCode::OK,
        Json(ActionResponse::new(format_order(order, locale.months()), alert)),
    ))
}
