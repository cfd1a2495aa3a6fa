// src/handlers/pagamentos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    common::{
        datas::{deserialize_data_hora_opcional, Periodo},
        db_utils::get_connection,
        error::{ApiError, AppError},
    },
    config::AppState,
    handlers::IdResposta,
    middleware::i18n::Locale,
    models::pagamento::{
        AlteracaoPagamento, NovoPagamento, Pagamento, PagamentoFiltro, StatusPagamento,
    },
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarPagamentoPayload {
    #[schema(example = 1)]
    pub transacao_id: i32,

    /// pendente | pago | cancelado
    #[schema(example = "pendente")]
    pub status: String,

    #[serde(default, deserialize_with = "deserialize_data_hora_opcional")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2024-01-15T10:00:00Z")]
    pub data_pagamento: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarPagamentoPayload {
    pub transacao_id: Option<i32>,

    #[schema(example = "pago")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "deserialize_data_hora_opcional")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub data_pagamento: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PagamentoQuery {
    pub transacao_id: Option<i32>,
    /// pendente | pago | cancelado
    pub status: Option<String>,
    /// dd/mm/aaaa, aplicado sobre a data de pagamento
    pub data_ini: Option<String>,
    /// dd/mm/aaaa (inclusivo)
    pub data_fim: Option<String>,
    pub ativo: Option<bool>,
}

// "" só é ignorado nos filtros de query; no payload é recusado.
fn parse_status(status: Option<&str>) -> Result<Option<StatusPagamento>, AppError> {
    status.map(str::parse).transpose()
}

impl PagamentoQuery {
    fn into_filtro(self) -> Result<PagamentoFiltro, AppError> {
        Ok(PagamentoFiltro {
            status: parse_status(self.status.as_deref().filter(|s| !s.is_empty()))?,
            periodo: Periodo::from_query(self.data_ini.as_deref(), self.data_fim.as_deref())?,
            transacao_id: self.transacao_id,
            ativo: self.ativo,
        })
    }
}

// GET /api/pagamentos
#[utoipa::path(
    get,
    path = "/api/pagamentos",
    tag = "Pagamentos",
    params(PagamentoQuery),
    responses(
        (status = 200, description = "Lista de pagamentos", body = Vec<Pagamento>),
        (status = 400, description = "Status, data ou período inválido")
    )
)]
pub async fn listar_pagamentos(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<PagamentoQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filtro = query
        .into_filtro()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pagamentos = app_state
        .pagamento_service
        .listar(&mut *conn, &filtro)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamentos)))
}

// GET /api/pagamentos/{id}
#[utoipa::path(
    get,
    path = "/api/pagamentos/{id}",
    tag = "Pagamentos",
    params(("id" = i32, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Pagamento encontrado", body = Pagamento),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn buscar_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .pagamento_service
        .buscar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamento)))
}

// POST /api/pagamentos
#[utoipa::path(
    post,
    path = "/api/pagamentos",
    tag = "Pagamentos",
    request_body = CriarPagamentoPayload,
    responses(
        (status = 201, description = "Pagamento criado", body = Pagamento),
        (status = 400, description = "Status inválido ou data anterior à transação"),
        (status = 404, description = "Transação inexistente"),
        (status = 422, description = "Transação desativada")
    )
)]
pub async fn criar_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CriarPagamentoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let status = payload
        .status
        .parse::<StatusPagamento>()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let novo = NovoPagamento {
        transacao_id: payload.transacao_id,
        status,
        data_pagamento: payload.data_pagamento,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .pagamento_service
        .criar(&mut *conn, novo)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(pagamento)))
}

// PUT /api/pagamentos/{id}
#[utoipa::path(
    put,
    path = "/api/pagamentos/{id}",
    tag = "Pagamentos",
    params(("id" = i32, Path, description = "ID do pagamento")),
    request_body = AtualizarPagamentoPayload,
    responses(
        (status = 200, description = "Pagamento atualizado", body = Pagamento),
        (status = 400, description = "Status inválido ou data anterior à transação"),
        (status = 404, description = "Pagamento ou transação inexistente"),
        (status = 422, description = "Transação desativada")
    )
)]
pub async fn atualizar_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarPagamentoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let alteracao = AlteracaoPagamento {
        status: parse_status(payload.status.as_deref())
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?,
        transacao_id: payload.transacao_id,
        data_pagamento: payload.data_pagamento,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .pagamento_service
        .atualizar(&mut *conn, id, alteracao)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamento)))
}

// PATCH /api/pagamentos/{id}/desativar
#[utoipa::path(
    patch,
    path = "/api/pagamentos/{id}/desativar",
    tag = "Pagamentos",
    params(("id" = i32, Path, description = "ID do pagamento")),
    responses(
        (status = 204, description = "Pagamento desativado"),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn desativar_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .pagamento_service
        .desativar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/pagamentos/{id}
#[utoipa::path(
    delete,
    path = "/api/pagamentos/{id}",
    tag = "Pagamentos",
    params(("id" = i32, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Pagamento excluído", body = IdResposta),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn excluir_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .pagamento_service
        .excluir(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(IdResposta { id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parses_status_and_period() {
        let query = PagamentoQuery {
            status: Some("pago".to_string()),
            data_ini: Some("01/02/2024".to_string()),
            ..Default::default()
        };
        let filtro = query.into_filtro().unwrap();
        assert_eq!(filtro.status, Some(StatusPagamento::Pago));
        assert!(filtro.periodo.inicio.is_some());
        assert!(filtro.periodo.fim.is_none());
    }

    #[test]
    fn query_rejects_unknown_status() {
        let query = PagamentoQuery {
            status: Some("estornado".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_filtro(),
            Err(AppError::InvalidArgument { campo: "status", .. })
        ));
    }

    #[test]
    fn empty_status_is_ignored_in_filter_but_rejected_in_payload() {
        let query = PagamentoQuery { status: Some(String::new()), ..Default::default() };
        assert_eq!(query.into_filtro().unwrap().status, None);

        assert!(matches!(
            parse_status(Some("")),
            Err(AppError::InvalidArgument { campo: "status", .. })
        ));
    }

    #[test]
    fn payment_date_is_optional() {
        let payload: CriarPagamentoPayload =
            serde_json::from_value(serde_json::json!({ "transacaoId": 4, "status": "pendente" }))
                .unwrap();
        assert_eq!(payload.transacao_id, 4);
        assert!(payload.data_pagamento.is_none());
    }
}
