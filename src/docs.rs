// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::common;
use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Orders ---
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_order_status,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::products::upload_image,

        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::get_customer,
        handlers::customers::delete_customer,

        // --- Categories ---
        handlers::categories::list_categories,
        handlers::categories::create_category,
        handlers::categories::update_category,
        handlers::categories::delete_category,

        // --- Catalog ---
        handlers::catalog::get_attributes,

        // --- Dashboard ---
        handlers::dashboard::get_overview,
        handlers::dashboard::get_analytics,
    ),
    components(
        schemas(
            // --- Comuns ---
            common::alert::Alert,
            common::alert::AlertKind,
            common::pagination::Pagination,
            common::pagination::PageMarker,
            models::BadgeStyle,

            // --- Orders ---
            models::order::OrderStatus,
            models::order::OrderRow,
            handlers::orders::UpdateStatusPayload,

            // --- Products ---
            models::product::StockStatus,
            models::product::ProductRow,
            models::product::ProductPayload,
            services::storage_service::UploadedImage,

            // --- Customers ---
            models::customer::CustomerTier,
            models::customer::CustomerRow,

            // --- Categories / Catalog ---
            models::category::CategoryRow,
            models::category::CategoryPayload,
            models::catalog::AttributeGroup,
            models::catalog::AttributeOption,

            // --- DASHBOARD ---
            models::dashboard::PeriodKind,
            models::dashboard::DateRange,
            models::dashboard::Trend,
            models::dashboard::KpiValue,
            models::dashboard::KpiSnapshot,
            models::dashboard::LineChart,
            models::dashboard::DonutSegment,
            models::dashboard::DonutChart,
            models::dashboard::TopProductEntry,
            models::dashboard::DashboardOverview,
            models::dashboard::AnalyticsReport,
        )
    ),
    tags(
        (name = "Orders", description = "Pedidos da loja"),
        (name = "Products", description = "Catálogo de produtos e imagens"),
        (name = "Customers", description = "Clientes cadastrados"),
        (name = "Categories", description = "Categorias do catálogo"),
        (name = "Catalog", description = "Atributos fixos do catálogo"),
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
