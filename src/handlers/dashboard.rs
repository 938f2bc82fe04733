// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::{AnalyticsReport, DashboardOverview, PeriodParams},
};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "KPIs de hoje, últimos pedidos e estoque baixo", body = DashboardOverview),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_overview(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, AppError> {
    let overview = app_state.analytics.overview(locale.months()).await?;
    Ok((StatusCode::OK, Json(overview)))
}

// GET /api/analytics?period=last7_days
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = "Dashboard",
    params(PeriodParams),
    responses(
        (status = 200, description = "KPIs com variação, série diária, participação por categoria e top produtos", body = AnalyticsReport),
        (status = 400, description = "Período inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_analytics(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.analytics.report(&params, locale.months()).await?;
    Ok((StatusCode::OK, Json(report)))
}
