// src/common/alert.rs

use serde::Serialize;
use utoipa::ToSchema;

// Cores e textos padrão dos diálogos do painel.
const SUCCESS_COLOR: &str = "#16a34a";
const ERROR_COLOR: &str = "#dc2626";
const DANGER_COLOR: &str = "#dc2626";
const CANCEL_COLOR: &str = "#6b7280";

const OK_TEXT: &str = "Aceptar";
const CONFIRM_TEXT: &str = "Sí, continuar";
const CANCEL_TEXT: &str = "Cancelar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Confirm,
}

/// Payload de diálogo que o frontend exibe depois de cada criação,
/// atualização ou remoção.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    #[schema(example = "Producto creado")]
    pub title: String,
    pub text: String,
    #[schema(example = "Aceptar")]
    pub confirm_button_text: String,
    #[schema(example = "#16a34a")]
    pub confirm_button_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_button_color: Option<String>,
}

impl Alert {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.into(),
            text: text.into(),
            confirm_button_text: OK_TEXT.to_string(),
            confirm_button_color: SUCCESS_COLOR.to_string(),
            cancel_button_text: None,
            cancel_button_color: None,
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title: title.into(),
            text: text.into(),
            confirm_button_text: OK_TEXT.to_string(),
            confirm_button_color: ERROR_COLOR.to_string(),
            cancel_button_text: None,
            cancel_button_color: None,
        }
    }

    /// Diálogo de confirmação com dois botões (confirmar / cancelar).
    pub fn confirm(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Confirm,
            title: title.into(),
            text: text.into(),
            confirm_button_text: CONFIRM_TEXT.to_string(),
            confirm_button_color: DANGER_COLOR.to_string(),
            cancel_button_text: Some(CANCEL_TEXT.to_string()),
            cancel_button_color: Some(CANCEL_COLOR.to_string()),
        }
    }
}

/// Resposta padrão das mutações: o registro afetado + o alerta a exibir.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse<T: Serialize> {
    pub data: T,
    pub alert: Alert,
}

impl<T: Serialize> ActionResponse<T> {
    pub fn new(data: T, alert: Alert) -> Self {
        Self { data, alert }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_confirmation_has_two_buttons() {
        assert!(Alert::success("a", "b").cancel_button_text.is_none());
        assert!(Alert::error("a", "b").cancel_button_text.is_none());

        let confirm = Alert::confirm("¿Eliminar?", "No se puede deshacer");
        assert_eq!(confirm.kind, AlertKind::Confirm);
        assert_eq!(confirm.cancel_button_text.as_deref(), Some("Cancelar"));
        assert_eq!(confirm.cancel_button_color.as_deref(), Some("#6b7280"));
    }

    #[test]
    fn serializes_in_camel_case_without_empty_buttons() {
        let json = serde_json::to_value(Alert::success("Listo", "Guardado")).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["confirmButtonColor"], "#16a34a");
        assert!(json.get("cancelButtonText").is_none());
    }
}
