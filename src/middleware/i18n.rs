// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::{I18nStore, IDIOMA_PADRAO};

// Extrator de idioma a partir do Accept-Language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale(IDIOMA_PADRAO.to_string())
    }
}

impl Locale {
    /// Escolhe o primeiro idioma do cabeçalho que temos traduzido.
    pub fn from_header(header_str: &str, store: &I18nStore) -> Self {
        accept_language::parse(header_str)
            .iter()
            // "pt-BR" -> "pt", "en" -> "en"
            .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            .find(|lang| store.suporta(lang))
            .map(Locale)
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .map(|header_str| Locale::from_header(header_str, I18nStore::global()))
            .unwrap_or_default();

        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_supported_language() {
        let store = I18nStore::default();
        assert_eq!(Locale::from_header("en-US,pt;q=0.5", &store).0, "en");
        assert_eq!(Locale::from_header("de-DE,pt-BR;q=0.8", &store).0, "pt");
    }

    #[test]
    fn unsupported_header_uses_default() {
        let store = I18nStore::default();
        assert_eq!(Locale::from_header("fr", &store), Locale::default());
    }
}
