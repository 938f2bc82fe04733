// src/handlers/products.rs

use axum::{
    extract::{
        multipart::{Field, MultipartError},
        Multipart, Path, Query, State,
    },
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
        pagination::WindowConfig,
    },
    config::AppState,
    handlers::{list_filters, ConfirmParams},
    middleware::auth::AdminUser,
    models::product::{ProductPayload, ProductRow},
    services::{
        formatter::format_product,
        list_service::load_list,
        storage_service::{check_image_size, image_kind, UploadedImage, MAX_IMAGE_BYTES},
    },
};

const IMAGE_FIELD: &str = "file";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Nome ou descrição
    pub search: Option<String>,
    /// ID da categoria ou `all`
    pub category: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Página de produtos formatados + paginação"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> impl IntoResponse {
    let filters = list_filters(params.search, params.category, params.page, params.page_size);

    let page = load_list(&app_state.products, &filters, WindowConfig::WIDE)
        .await
        .map(format_product);

    (StatusCode::OK, Json(page))
}

// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto", body = ProductRow),
        (status = 404, description = "Produto não encontrado (redirect para a listagem)")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Producto", "/products"))?;

    Ok((StatusCode::OK, Json(format_product(product))))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Produto criado + alerta"),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state.products.create(&payload).await?;
    tracing::info!(admin = %admin.0.sub, product = %product.id, "Produto criado");

    let alert = Alert::success("Producto creado", format!("\"{}\" se guardó correctamente.", product.name));
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(format_product(product), alert)),
    ))
}

// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    request_body = ProductPayload,
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado + alerta"),
        (status = 400, description = "Campos inválidos"),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .products
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found("Producto", "/products"))?;
    tracing::info!(admin = %admin.0.sub, product = %id, "Produto atualizado");

    let alert = Alert::success("Producto actualizado", "Los cambios se guardaron correctamente.");
    Ok((
        StatusCode::OK,
        Json(ActionResponse::new(format_product(product), alert)),
    ))
}

// DELETE /api/products/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "ID do produto"),
        ConfirmParams
    ),
    responses(
        (status = 200, description = "Produto removido + alerta"),
        (status = 404, description = "Produto não encontrado"),
        (status = 409, description = "Falta confirmação (devolve o diálogo)")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Query(confirm): Query<ConfirmParams>,
) -> Result<impl IntoResponse, AppError> {
    confirm.require("el producto")?;

    if !app_state.products.delete(id).await? {
        return Err(AppError::not_found("Producto", "/products"));
    }
    tracing::info!(admin = %admin.0.sub, product = %id, "Produto removido");

    let alert = Alert::success("Producto eliminado", "El producto fue eliminado.");
    Ok((StatusCode::OK, Json(ActionResponse::new(id, alert))))
}

// POST /api/products/images (multipart, campo "file")
#[utoipa::path(
    post,
    path = "/api/products/images",
    tag = "Products",
    request_body(content_type = "multipart/form-data", description = "Campo `file` com a imagem"),
    responses(
        (status = 201, description = "Imagem enviada; devolve a URL pública", body = UploadedImage),
        (status = 400, description = "Tipo de arquivo não permitido"),
        (status = 413, description = "Imagem acima de 5 MB")
    ),
    security(("api_jwt" = []))
)]
pub async fn upload_image(
    State(app_state): State<AppState>,
    admin: AdminUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, 0))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        // Tipo checado antes de ler o corpo; tamanho checado a cada chunk
        let kind = image_kind(field.content_type(), field.file_name().unwrap_or_default())?;
        let bytes = read_image(field).await?;

        let uploaded = app_state.storage.upload(bytes, kind).await?;
        tracing::info!(admin = %admin.0.sub, path = %uploaded.path, "Imagem de produto enviada");

        let alert = Alert::success("Imagen subida", "La imagen se cargó correctamente.");
        return Ok((StatusCode::CREATED, Json(ActionResponse::new(uploaded, alert))));
    }

    Err(AppError::InvalidUpload(format!("campo '{IMAGE_FIELD}' ausente")))
}

/// Lê o campo em chunks e para assim que passar de `MAX_IMAGE_BYTES`.
async fn read_image(mut field: Field<'_>) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, bytes.len()))?
    {
        bytes.extend_from_slice(&chunk);
        check_image_size(bytes.len())?;
    }
    Ok(bytes)
}

/// Corpo cortado pelo limite da rota vira o mesmo 413 da imagem grande.
fn multipart_error(err: MultipartError, read: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::ImageTooLarge {
            size: read.max(MAX_IMAGE_BYTES + 1),
            max: MAX_IMAGE_BYTES,
        }
    } else {
        AppError::InvalidUpload(err.body_text())
    }
}
