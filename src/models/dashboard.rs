// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::{order::OrderRow, product::ProductRow};

// --- Filtro de período ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    #[default]
    Today,
    Last7Days,
    ThisMonth,
    Custom,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PeriodParams {
    #[serde(default)]
    pub period: PeriodKind,
    /// Início do intervalo (só para `custom`), inclusivo
    #[param(value_type = Option<String>, format = Date)]
    pub from: Option<NaiveDate>,
    /// Fim do intervalo (só para `custom`), inclusivo
    #[param(value_type = Option<String>, format = Date)]
    pub to: Option<NaiveDate>,
}

/// Intervalo meio-aberto `[start, end)` em dias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[schema(value_type = String, format = Date)]
    pub start: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub end: NaiveDate,
}

// --- Agregados vindos do banco ---

#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct PeriodTotals {
    pub total_sales: Decimal,
    pub order_count: i64,
    pub visits: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    #[schema(value_type = String, format = Date)]
    pub day: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category_name: String,
    pub total: Decimal,
}

// Curva ABC (top produtos por receita)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    pub product_name: String,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

// --- KPIs ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
    Unknown,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiValue {
    pub value: Decimal,
    #[schema(example = "Bs. 12500.00")]
    pub display: String,
    /// `null` quando o período anterior é zero e o atual não
    pub delta_percent: Option<Decimal>,
    #[schema(example = "+12.5%")]
    pub delta_label: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    pub period: PeriodKind,
    pub range: DateRange,
    pub previous_range: DateRange,
    pub total_sales: KpiValue,
    pub order_count: KpiValue,
    pub average_order_value: KpiValue,
    pub conversion_rate: KpiValue,
}

// --- Gráficos ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    #[schema(example = "M 0.00,200.00 L 100.00,50.00")]
    pub path: String,
    pub labels: Vec<String>,
    pub max_value: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonutSegment {
    pub label: String,
    pub percent: f64,
    /// Comprimento do arco sobre a circunferência
    pub length: f64,
    /// Deslocamento acumulado dos segmentos anteriores
    pub offset: f64,
    #[schema(example = "#6366f1")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonutChart {
    pub radius: f64,
    pub circumference: f64,
    pub segments: Vec<DonutSegment>,
}

// --- Respostas ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub kpis: KpiSnapshot,
    pub recent_orders: Vec<OrderRow>,
    pub low_stock: Vec<ProductRow>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub kpis: KpiSnapshot,
    pub sales_chart: LineChart,
    pub category_chart: DonutChart,
    pub top_products: Vec<TopProductEntry>,
}
