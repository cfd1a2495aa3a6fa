// src/handlers/relatorios.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::{datas::Periodo, db_utils::get_connection, error::ApiError},
    config::AppState,
    middleware::i18n::Locale,
    models::relatorio::{ContaSaldo, PagamentoPendente, ResumoFinanceiro, TotalCategoria},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ResumoQuery {
    /// dd/mm/aaaa
    pub data_ini: Option<String>,
    /// dd/mm/aaaa (inclusivo)
    pub data_fim: Option<String>,
    pub conta_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CategoriaQuery {
    pub categoria_id: Option<i32>,
    /// dd/mm/aaaa
    pub data_ini: Option<String>,
    /// dd/mm/aaaa (inclusivo)
    pub data_fim: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PeriodoQuery {
    /// dd/mm/aaaa
    pub data_ini: Option<String>,
    /// dd/mm/aaaa (inclusivo)
    pub data_fim: Option<String>,
}

// GET /api/relatorios/resumo-financeiro
#[utoipa::path(
    get,
    path = "/api/relatorios/resumo-financeiro",
    tag = "Relatórios",
    params(ResumoQuery),
    responses(
        (status = 200, description = "Receitas, despesas e saldo do período", body = ResumoFinanceiro),
        (status = 400, description = "Data ou período inválido")
    )
)]
pub async fn resumo_financeiro(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ResumoQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let periodo = Periodo::from_query(query.data_ini.as_deref(), query.data_fim.as_deref())
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let resumo = app_state
        .relatorio_service
        .resumo_financeiro(&mut *conn, &periodo, query.conta_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(resumo)))
}

// GET /api/relatorios/transacoes-categoria
#[utoipa::path(
    get,
    path = "/api/relatorios/transacoes-categoria",
    tag = "Relatórios",
    params(CategoriaQuery),
    responses(
        (status = 200, description = "Total por categoria, do maior para o menor", body = Vec<TotalCategoria>),
        (status = 400, description = "Data ou período inválido")
    )
)]
pub async fn transacoes_por_categoria(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<CategoriaQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let periodo = Periodo::from_query(query.data_ini.as_deref(), query.data_fim.as_deref())
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let totais = app_state
        .relatorio_service
        .totais_por_categoria(&mut *conn, &periodo, query.categoria_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(totais)))
}

// GET /api/relatorios/pagamentos-pendentes
#[utoipa::path(
    get,
    path = "/api/relatorios/pagamentos-pendentes",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Pagamentos pendentes de transações ativas", body = Vec<PagamentoPendente>)
    )
)]
pub async fn pagamentos_pendentes(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pendentes = app_state
        .relatorio_service
        .pagamentos_pendentes(&mut *conn)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pendentes)))
}

// GET /api/relatorios/contas-saldo
#[utoipa::path(
    get,
    path = "/api/relatorios/contas-saldo",
    tag = "Relatórios",
    params(PeriodoQuery),
    responses(
        (status = 200, description = "Saldo de cada conta ativa", body = Vec<ContaSaldo>),
        (status = 400, description = "Data ou período inválido")
    )
)]
pub async fn contas_saldo(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<PeriodoQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let periodo = Periodo::from_query(query.data_ini.as_deref(), query.data_fim.as_deref())
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let saldos = app_state
        .relatorio_service
        .saldos_por_conta(&mut *conn, &periodo)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(saldos)))
}
