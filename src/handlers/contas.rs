// src/handlers/contas.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::{
        db_utils::get_connection,
        error::{ApiError, AppError},
    },
    config::AppState,
    handlers::IdResposta,
    middleware::i18n::Locale,
    models::conta::{AlteracaoConta, Conta, ContaFiltro, NovaConta},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarContaPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Conta Principal")]
    pub nome: String,

    #[schema(example = 500.0)]
    pub saldo_inicial: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarContaPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio"))]
    pub nome: Option<String>,

    pub saldo_inicial: Option<Decimal>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ContaQuery {
    pub nome: Option<String>,
    pub ativo: Option<bool>,
}

impl From<ContaQuery> for ContaFiltro {
    fn from(query: ContaQuery) -> Self {
        ContaFiltro {
            nome: query.nome.filter(|n| !n.is_empty()),
            ativo: query.ativo,
        }
    }
}

// GET /api/contas
#[utoipa::path(
    get,
    path = "/api/contas",
    tag = "Contas",
    params(ContaQuery),
    responses(
        (status = 200, description = "Lista de contas", body = Vec<Conta>)
    )
)]
pub async fn listar_contas(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ContaQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filtro = ContaFiltro::from(query);

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let contas = app_state
        .conta_service
        .listar(&mut *conn, &filtro)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(contas)))
}

// GET /api/contas/{id}
#[utoipa::path(
    get,
    path = "/api/contas/{id}",
    tag = "Contas",
    params(("id" = i32, Path, description = "ID da conta")),
    responses(
        (status = 200, description = "Conta encontrada", body = Conta),
        (status = 404, description = "Conta não encontrada")
    )
)]
pub async fn buscar_conta(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let conta = app_state
        .conta_service
        .buscar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(conta)))
}

// POST /api/contas
#[utoipa::path(
    post,
    path = "/api/contas",
    tag = "Contas",
    request_body = CriarContaPayload,
    responses(
        (status = 201, description = "Conta criada", body = Conta),
        (status = 400, description = "Saldo inicial negativo ou nome vazio")
    )
)]
pub async fn criar_conta(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CriarContaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let conta = app_state
        .conta_service
        .criar(
            &mut *conn,
            NovaConta {
                nome: payload.nome,
                saldo_inicial: payload.saldo_inicial,
            },
        )
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(conta)))
}

// PUT /api/contas/{id}
#[utoipa::path(
    put,
    path = "/api/contas/{id}",
    tag = "Contas",
    params(("id" = i32, Path, description = "ID da conta")),
    request_body = AtualizarContaPayload,
    responses(
        (status = 200, description = "Conta atualizada", body = Conta),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Conta não encontrada")
    )
)]
pub async fn atualizar_conta(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarContaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let conta = app_state
        .conta_service
        .atualizar(
            &mut *conn,
            id,
            AlteracaoConta {
                nome: payload.nome,
                saldo_inicial: payload.saldo_inicial,
            },
        )
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(conta)))
}

// PATCH /api/contas/{id}/desativar
#[utoipa::path(
    patch,
    path = "/api/contas/{id}/desativar",
    tag = "Contas",
    params(("id" = i32, Path, description = "ID da conta")),
    responses(
        (status = 204, description = "Conta desativada"),
        (status = 404, description = "Conta não encontrada")
    )
)]
pub async fn desativar_conta(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .conta_service
        .desativar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/contas/{id}
#[utoipa::path(
    delete,
    path = "/api/contas/{id}",
    tag = "Contas",
    params(("id" = i32, Path, description = "ID da conta")),
    responses(
        (status = 200, description = "Conta excluída", body = IdResposta),
        (status = 404, description = "Conta não encontrada"),
        (status = 409, description = "Conta ainda referenciada por transações")
    )
)]
pub async fn excluir_conta(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .conta_service
        .excluir(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(IdResposta { id })))
}
