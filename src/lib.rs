pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::AppState, docs::ApiDoc, middleware::auth::admin_guard,
    services::storage_service::MAX_IMAGE_BYTES,
};

// Folga para o envelope multipart; o limite real é checado na validação.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES * 2;

/// Monta o router completo (API protegida + docs + health).
pub fn app(app_state: AppState) -> Router {
    let order_routes = Router::new()
        .route("/", get(handlers::orders::list_orders))
        .route("/{id}", get(handlers::orders::get_order))
        .route("/{id}/status", patch(handlers::orders::update_order_status));

    let product_routes = Router::new()
        .route(
            "/",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/images",
            post(handlers::products::upload_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    let customer_routes = Router::new()
        .route("/", get(handlers::customers::list_customers))
        .route(
            "/{id}",
            get(handlers::customers::get_customer).delete(handlers::customers::delete_customer),
        );

    let category_routes = Router::new()
        .route(
            "/",
            get(handlers::categories::list_categories).post(handlers::categories::create_category),
        )
        .route(
            "/{id}",
            put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        );

    // Tudo em /api (menos o health) passa pelo guard de administrador
    let admin_api = Router::new()
        .nest("/api/orders", order_routes)
        .nest("/api/products", product_routes)
        .nest("/api/customers", customer_routes)
        .nest("/api/categories", category_routes)
        .route("/api/catalog/attributes", get(handlers::catalog::get_attributes))
        .route("/api/dashboard", get(handlers::dashboard::get_overview))
        .route("/api/analytics", get(handlers::dashboard::get_analytics))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .merge(admin_api)
        .with_state(app_state)
}
