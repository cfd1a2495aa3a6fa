// src/handlers/transacoes.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    common::{
        datas::{deserialize_data_hora, deserialize_data_hora_opcional, Periodo},
        db_utils::get_connection,
        error::{ApiError, AppError},
    },
    config::AppState,
    handlers::IdResposta,
    middleware::i18n::Locale,
    models::transacao::{AlteracaoTransacao, NovaTransacao, TransacaoDetalhe, TransacaoFiltro},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarTransacaoPayload {
    #[schema(example = 1)]
    pub conta_id: i32,

    #[schema(example = 2)]
    pub categoria_id: i32,

    pub pessoa_id: Option<i32>,

    #[schema(example = 250.0)]
    pub valor: Decimal,

    /// RFC 3339; sem fuso, é lida como UTC.
    #[serde(deserialize_with = "deserialize_data_hora")]
    #[schema(value_type = String, format = DateTime, example = "2024-01-10T10:00:00-03:00")]
    pub data: DateTime<Utc>,

    #[schema(example = "Venda balcão")]
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarTransacaoPayload {
    pub conta_id: Option<i32>,
    pub categoria_id: Option<i32>,
    pub pessoa_id: Option<i32>,

    pub valor: Option<Decimal>,

    #[serde(default, deserialize_with = "deserialize_data_hora_opcional")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub data: Option<DateTime<Utc>>,

    pub descricao: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TransacaoQuery {
    pub conta_id: Option<i32>,
    pub categoria_id: Option<i32>,
    pub pessoa_id: Option<i32>,
    /// dd/mm/aaaa
    pub data_ini: Option<String>,
    /// dd/mm/aaaa (inclusivo)
    pub data_fim: Option<String>,
    pub ativo: Option<bool>,
}

impl TransacaoQuery {
    fn into_filtro(self) -> Result<TransacaoFiltro, AppError> {
        Ok(TransacaoFiltro {
            periodo: Periodo::from_query(self.data_ini.as_deref(), self.data_fim.as_deref())?,
            conta_id: self.conta_id,
            categoria_id: self.categoria_id,
            pessoa_id: self.pessoa_id,
            ativo: self.ativo,
        })
    }
}

// GET /api/transacoes
#[utoipa::path(
    get,
    path = "/api/transacoes",
    tag = "Transações",
    params(TransacaoQuery),
    responses(
        (status = 200, description = "Transações com categoria e pessoa", body = Vec<TransacaoDetalhe>),
        (status = 400, description = "Data ou período inválido")
    )
)]
pub async fn listar_transacoes(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<TransacaoQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filtro = query
        .into_filtro()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let transacoes = app_state
        .transacao_service
        .listar(&mut *conn, &filtro)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(transacoes)))
}

// GET /api/transacoes/{id}
#[utoipa::path(
    get,
    path = "/api/transacoes/{id}",
    tag = "Transações",
    params(("id" = i32, Path, description = "ID da transação")),
    responses(
        (status = 200, description = "Transação encontrada", body = TransacaoDetalhe),
        (status = 404, description = "Transação não encontrada")
    )
)]
pub async fn buscar_transacao(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let transacao = app_state
        .transacao_service
        .buscar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(transacao)))
}

// POST /api/transacoes
#[utoipa::path(
    post,
    path = "/api/transacoes",
    tag = "Transações",
    request_body = CriarTransacaoPayload,
    responses(
        (status = 201, description = "Transação criada", body = TransacaoDetalhe),
        (status = 404, description = "Conta, categoria ou pessoa inexistente"),
        (status = 422, description = "Conta, categoria ou pessoa desativada")
    )
)]
pub async fn criar_transacao(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CriarTransacaoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let nova = NovaTransacao {
        conta_id: payload.conta_id,
        categoria_id: payload.categoria_id,
        pessoa_id: payload.pessoa_id,
        valor: payload.valor,
        data: payload.data,
        descricao: payload.descricao,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let transacao = app_state
        .transacao_service
        .criar(&mut *conn, nova)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(transacao)))
}

// PUT /api/transacoes/{id}
#[utoipa::path(
    put,
    path = "/api/transacoes/{id}",
    tag = "Transações",
    params(("id" = i32, Path, description = "ID da transação")),
    request_body = AtualizarTransacaoPayload,
    responses(
        (status = 200, description = "Transação atualizada", body = TransacaoDetalhe),
        (status = 400, description = "Valor não positivo ou data incompatível com pagamentos"),
        (status = 404, description = "Transação ou vínculo inexistente"),
        (status = 422, description = "Vínculo desativado")
    )
)]
pub async fn atualizar_transacao(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarTransacaoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let alteracao = AlteracaoTransacao {
        conta_id: payload.conta_id,
        categoria_id: payload.categoria_id,
        pessoa_id: payload.pessoa_id,
        valor: payload.valor,
        data: payload.data,
        descricao: payload.descricao,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let transacao = app_state
        .transacao_service
        .atualizar(&mut *conn, id, alteracao)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(transacao)))
}

// PATCH /api/transacoes/{id}/desativar
#[utoipa::path(
    patch,
    path = "/api/transacoes/{id}/desativar",
    tag = "Transações",
    params(("id" = i32, Path, description = "ID da transação")),
    responses(
        (status = 204, description = "Transação desativada"),
        (status = 404, description = "Transação não encontrada")
    )
)]
pub async fn desativar_transacao(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .transacao_service
        .desativar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/transacoes/{id}
#[utoipa::path(
    delete,
    path = "/api/transacoes/{id}",
    tag = "Transações",
    params(("id" = i32, Path, description = "ID da transação")),
    responses(
        (status = 200, description = "Transação excluída", body = IdResposta),
        (status = 404, description = "Transação não encontrada"),
        (status = 409, description = "Transação ainda possui pagamentos")
    )
)]
pub async fn excluir_transacao(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .transacao_service
        .excluir(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(IdResposta { id })))
}
