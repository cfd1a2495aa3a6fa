// src/common/error.rs

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

// --- Qual entidade o erro se refere ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurso {
    Pessoa,
    Conta,
    Categoria,
    Transacao,
    Pagamento,
}

impl Recurso {
    /// Chave de tradução do nome do recurso.
    pub fn chave(self) -> &'static str {
        match self {
            Recurso::Pessoa => "recurso.pessoa",
            Recurso::Conta => "recurso.conta",
            Recurso::Categoria => "recurso.categoria",
            Recurso::Transacao => "recurso.transacao",
            Recurso::Pagamento => "recurso.pagamento",
        }
    }
}

impl fmt::Display for Recurso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nome = match self {
            Recurso::Pessoa => "Pessoa",
            Recurso::Conta => "Conta",
            Recurso::Categoria => "Categoria",
            Recurso::Transacao => "Transação",
            Recurso::Pagamento => "Pagamento",
        };
        f.write_str(nome)
    }
}

// --- Por que um argumento foi recusado ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivo {
    ValorNegativo,
    ValorNaoPositivo,
    OpcaoInvalida,
    DataInvalida,
    PeriodoInvertido,
    PagamentoAnteriorATransacao,
    PosteriorAPagamento,
    CasasDecimais,
}

impl Motivo {
    pub fn chave(self) -> &'static str {
        match self {
            Motivo::ValorNegativo => "motivo.valor_negativo",
            Motivo::ValorNaoPositivo => "motivo.valor_nao_positivo",
            Motivo::OpcaoInvalida => "motivo.opcao_invalida",
            Motivo::DataInvalida => "motivo.data_invalida",
            Motivo::PeriodoInvertido => "motivo.periodo_invertido",
            Motivo::PagamentoAnteriorATransacao => "motivo.pagamento_anterior",
            Motivo::PosteriorAPagamento => "motivo.posterior_a_pagamento",
            Motivo::CasasDecimais => "motivo.casas_decimais",
        }
    }
}

impl fmt::Display for Motivo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texto = match self {
            Motivo::ValorNegativo => "não pode ser negativo",
            Motivo::ValorNaoPositivo => "deve ser maior que zero",
            Motivo::OpcaoInvalida => "não é uma opção válida",
            Motivo::DataInvalida => "não é uma data válida (use dd/mm/aaaa)",
            Motivo::PeriodoInvertido => "é anterior à data inicial",
            Motivo::PagamentoAnteriorATransacao => "é anterior à data da transação",
            Motivo::PosteriorAPagamento => "é posterior a um pagamento já registrado",
            Motivo::CasasDecimais => "tem mais de duas casas decimais",
        };
        f.write_str(texto)
    }
}

/// As quatro classes de falha que o núcleo devolve ao chamador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    InvalidState,
    ConflictUnderlying,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::ConflictUnderlying => "conflict",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{recurso} {id} não encontrado(a)")]
    ResourceNotFound { recurso: Recurso, id: i32 },

    #[error("{recurso} {id} está desativado(a)")]
    InactiveReference { recurso: Recurso, id: i32 },

    #[error("Campo '{campo}' {motivo}")]
    InvalidArgument { campo: &'static str, motivo: Motivo },

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{recurso} {id} ainda é referenciado(a) por outros registros")]
    ForeignKeyViolation { recurso: Recurso, id: i32 },

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(recurso: Recurso, id: i32) -> Self {
        AppError::ResourceNotFound { recurso, id }
    }

    pub fn invalid_argument(campo: &'static str, motivo: Motivo) -> Self {
        AppError::InvalidArgument { campo, motivo }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ResourceNotFound { .. } => ErrorKind::NotFound,
            AppError::InvalidArgument { .. } | AppError::ValidationError(_) => {
                ErrorKind::InvalidArgument
            }
            AppError::InactiveReference { .. } => ErrorKind::InvalidState,
            AppError::ForeignKeyViolation { .. }
            | AppError::DatabaseError(_)
            | AppError::InternalServerError(_) => ErrorKind::ConflictUnderlying,
        }
    }

    /// Converte o erro de domínio na resposta HTTP, com a mensagem no idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let idioma = locale.0.as_str();
        let code = match self {
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => "internal",
            _ => self.kind().code(),
        };

        let (status, message) = match self {
            AppError::ResourceNotFound { recurso, id } => (
                StatusCode::NOT_FOUND,
                mensagem_recurso(store, idioma, "erro.nao_encontrado", *recurso, *id),
            ),
            AppError::InactiveReference { recurso, id } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                mensagem_recurso(store, idioma, "erro.referencia_inativa", *recurso, *id),
            ),
            AppError::InvalidArgument { campo, motivo } => (
                StatusCode::BAD_REQUEST,
                store.traduzir(idioma, motivo.chave(), &[("campo", *campo)]),
            ),
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
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    code,
                    message: store.traduzir(idioma, "erro.validacao", &[]),
                    details: Some(json!(details)),
                };
            }
            AppError::ForeignKeyViolation { recurso, id } => (
                StatusCode::CONFLICT,
                mensagem_recurso(store, idioma, "erro.em_uso", *recurso, *id),
            ),
            // O detalhe vai para o log; o cliente só recebe a mensagem genérica.
            e @ (AppError::DatabaseError(_) | AppError::InternalServerError(_)) => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    store.traduzir(idioma, "erro.interno", &[]),
                )
            }
        };

        ApiError {
            status,
            code,
            message,
            details: None,
        }
    }
}

fn mensagem_recurso(
    store: &I18nStore,
    idioma: &str,
    chave: &str,
    recurso: Recurso,
    id: i32,
) -> String {
    let nome = store.traduzir(idioma, recurso.chave(), &[]);
    let id = id.to_string();
    store.traduzir(idioma, chave, &[("recurso", nome.as_str()), ("id", id.as_str())])
}

/// Mapeia a violação de chave estrangeira de um DELETE para o erro de domínio.
pub fn mapear_violacao_fk(e: sqlx::Error, recurso: Recurso, id: i32) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return AppError::ForeignKeyViolation { recurso, id };
        }
    }
    AppError::DatabaseError(e)
}

// A resposta de erro já traduzida, pronta para sair pelo axum.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "code": self.code, "details": details }),
            None => json!({ "error": self.message, "code": self.code }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), I18nStore::global())
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_status_codes() {
        let store = I18nStore::default();
        let locale = Locale::default();

        let not_found = AppError::not_found(Recurso::Conta, 7).to_api_error(&locale, &store);
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.code, "not_found");

        let inactive = AppError::InactiveReference { recurso: Recurso::Categoria, id: 2 }
            .to_api_error(&locale, &store);
        assert_eq!(inactive.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(inactive.code, "invalid_state");

        let invalid = AppError::invalid_argument("saldoInicial", Motivo::ValorNegativo)
            .to_api_error(&locale, &store);
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code, "invalid_argument");

        let fk = AppError::ForeignKeyViolation { recurso: Recurso::Conta, id: 1 }
            .to_api_error(&locale, &store);
        assert_eq!(fk.status, StatusCode::CONFLICT);
        assert_eq!(fk.code, "conflict");
    }

    #[test]
    fn database_errors_hide_details_from_the_client() {
        let api = AppError::DatabaseError(sqlx::Error::RowNotFound)
            .to_api_error(&Locale::default(), &I18nStore::default());
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.code, "internal");
        assert!(!api.message.contains("RowNotFound"));
    }

    #[test]
    fn message_names_the_field_and_resource() {
        let store = I18nStore::default();
        let pt = Locale("pt".to_string());
        let en = Locale("en".to_string());

        let msg = AppError::invalid_argument("dataIni", Motivo::DataInvalida)
            .to_api_error(&pt, &store)
            .message;
        assert!(msg.contains("dataIni"));

        let msg = AppError::not_found(Recurso::Transacao, 42)
            .to_api_error(&en, &store)
            .message;
        assert_eq!(msg, "Transaction 42 not found.");
    }
}
