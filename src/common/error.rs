// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::alert::Alert;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Tipo de imagem não permitido: {0}")]
    InvalidImageType(String),

    #[error("Imagem de {size} bytes excede o limite de {max} bytes")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Upload inválido: {0}")]
    InvalidUpload(String),

    #[error("Período inválido: {0}")]
    InvalidPeriod(String),

    #[error("{entity} não encontrado")]
    NotFound {
        entity: &'static str,
        redirect: &'static str,
    },

    // A remoção só acontece com `?confirm=true`; sem isso devolvemos o diálogo.
    #[error("Confirmação necessária para remover {0}")]
    ConfirmationRequired(String),

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso restrito a administradores")]
    Forbidden,

    // Variante para erros do banco hospedado
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro no serviço de storage: {0}")]
    StorageError(#[from] reqwest::Error),

    #[error("Storage recusou o upload ({status}): {body}")]
    StorageRejected { status: u16, body: String },

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, redirect: &'static str) -> Self {
        AppError::NotFound { entity, redirect }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidImageType(_)
            | AppError::InvalidUpload(_)
            | AppError::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            AppError::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ConfirmationRequired(_) => StatusCode::CONFLICT,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_)
            | AppError::StorageError(_)
            | AppError::StorageRejected { .. }
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            // Todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                json!({
                    "error": "Uno o más campos son inválidos.",
                    "details": details,
                    "alert": Alert::error("Datos inválidos", "Revisa los campos marcados."),
                })
            }
            AppError::InvalidImageType(mime) => json!({
                "error": format!("Tipo de archivo no permitido: {mime}"),
                "alert": Alert::error(
                    "Archivo no válido",
                    "Solo se permiten imágenes JPEG, PNG, WEBP o GIF.",
                ),
            }),
            AppError::ImageTooLarge { max, .. } => json!({
                "error": "La imagen supera el tamaño máximo.",
                "alert": Alert::error(
                    "Archivo demasiado grande",
                    format!("El tamaño máximo es {} MB.", max / (1024 * 1024)),
                ),
            }),
            AppError::InvalidUpload(reason) => json!({
                "error": format!("Archivo inválido: {reason}"),
                "alert": Alert::error("Archivo no válido", "No se pudo leer la imagen enviada."),
            }),
            AppError::InvalidPeriod(reason) => json!({
                "error": format!("Periodo inválido: {reason}"),
            }),
            // A view de detalhe/edição volta para a listagem.
            AppError::NotFound { entity, redirect } => json!({
                "error": format!("{entity} no encontrado."),
                "redirect": redirect,
            }),
            AppError::ConfirmationRequired(what) => json!({
                "error": "Se requiere confirmación.",
                "alert": Alert::confirm(
                    format!("¿Eliminar {what}?"),
                    "Esta acción no se puede deshacer.",
                ),
            }),
            AppError::InvalidToken => json!({
                "error": "Token de autenticación inválido o ausente.",
            }),
            AppError::Forbidden => json!({
                "error": "Acceso restringido a administradores.",
            }),
            // Erros remotos: loga o detalhe, devolve só a mensagem genérica.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                json!({
                    "error": "Ocurrió un error inesperado.",
                    "alert": Alert::error("Error", "No se pudo completar la operación."),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
