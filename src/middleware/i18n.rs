// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::format::MonthTable;

// Extrator de idioma (só o idioma primário: "es-BO" -> "es")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Locale {
    pub const DEFAULT: &'static str = "es";

    pub fn from_header(value: Option<&str>) -> Self {
        let lang = value
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first()
                    .map(|tag| tag.split('-').next().unwrap_or(tag).to_ascii_lowercase())
            })
            .unwrap_or_else(|| Self::DEFAULT.to_string());
        Locale(lang)
    }

    pub fn months(&self) -> MonthTable {
        MonthTable::for_lang(&self.0)
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());
        Ok(Locale::from_header(header_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::format::{MONTHS_EN, MONTHS_ES};

    #[test]
    fn picks_primary_language_of_best_match() {
        let locale = Locale::from_header(Some("en-US,en;q=0.9,es;q=0.8"));
        assert_eq!(locale, Locale("en".into()));
        assert_eq!(locale.months(), MONTHS_EN);
    }

    #[test]
    fn missing_header_defaults_to_spanish() {
        assert_eq!(Locale::from_header(None).months(), MONTHS_ES);
        assert_eq!(Locale::from_header(Some("")).0, "es");
    }
}
