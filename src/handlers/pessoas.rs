// src/handlers/pessoas.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
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
    models::pessoa::{AlteracaoPessoa, NovaPessoa, Pessoa, PessoaFiltro, TipoPessoa},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarPessoaPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Maria da Silva")]
    pub nome: String,

    #[schema(example = "cliente")]
    pub tipo: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarPessoaPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio"))]
    pub nome: Option<String>,

    #[schema(example = "fornecedor")]
    pub tipo: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PessoaQuery {
    /// Trecho do nome (sem diferenciar maiúsculas)
    pub nome: Option<String>,
    /// cliente | fornecedor
    pub tipo: Option<String>,
    pub ativo: Option<bool>,
}

// "" só é ignorado nos filtros de query; no payload é recusado.
fn parse_tipo(tipo: Option<&str>) -> Result<Option<TipoPessoa>, AppError> {
    tipo.map(str::parse).transpose()
}

impl PessoaQuery {
    fn into_filtro(self) -> Result<PessoaFiltro, AppError> {
        Ok(PessoaFiltro {
            tipo: parse_tipo(self.tipo.as_deref().filter(|t| !t.is_empty()))?,
            nome: self.nome.filter(|n| !n.is_empty()),
            ativo: self.ativo,
        })
    }
}

// GET /api/pessoas
#[utoipa::path(
    get,
    path = "/api/pessoas",
    tag = "Pessoas",
    params(PessoaQuery),
    responses(
        (status = 200, description = "Lista de pessoas", body = Vec<Pessoa>),
        (status = 400, description = "Filtro inválido")
    )
)]
pub async fn listar_pessoas(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<PessoaQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filtro = query
        .into_filtro()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pessoas = app_state
        .pessoa_service
        .listar(&mut *conn, &filtro)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pessoas)))
}

// GET /api/pessoas/{id}
#[utoipa::path(
    get,
    path = "/api/pessoas/{id}",
    tag = "Pessoas",
    params(("id" = i32, Path, description = "ID da pessoa")),
    responses(
        (status = 200, description = "Pessoa encontrada", body = Pessoa),
        (status = 404, description = "Pessoa não encontrada")
    )
)]
pub async fn buscar_pessoa(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pessoa = app_state
        .pessoa_service
        .buscar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pessoa)))
}

// POST /api/pessoas
#[utoipa::path(
    post,
    path = "/api/pessoas",
    tag = "Pessoas",
    request_body = CriarPessoaPayload,
    responses(
        (status = 201, description = "Pessoa criada", body = Pessoa),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_pessoa(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CriarPessoaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let nova = NovaPessoa {
        tipo: payload
            .tipo
            .parse::<TipoPessoa>()
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?,
        nome: payload.nome,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pessoa = app_state
        .pessoa_service
        .criar(&mut *conn, nova)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(pessoa)))
}

// PUT /api/pessoas/{id}
#[utoipa::path(
    put,
    path = "/api/pessoas/{id}",
    tag = "Pessoas",
    params(("id" = i32, Path, description = "ID da pessoa")),
    request_body = AtualizarPessoaPayload,
    responses(
        (status = 200, description = "Pessoa atualizada", body = Pessoa),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Pessoa não encontrada")
    )
)]
pub async fn atualizar_pessoa(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarPessoaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let alteracao = AlteracaoPessoa {
        tipo: parse_tipo(payload.tipo.as_deref())
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?,
        nome: payload.nome,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let pessoa = app_state
        .pessoa_service
        .atualizar(&mut *conn, id, alteracao)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pessoa)))
}

// PATCH /api/pessoas/{id}/desativar
#[utoipa::path(
    patch,
    path = "/api/pessoas/{id}/desativar",
    tag = "Pessoas",
    params(("id" = i32, Path, description = "ID da pessoa")),
    responses(
        (status = 204, description = "Pessoa desativada"),
        (status = 404, description = "Pessoa não encontrada")
    )
)]
pub async fn desativar_pessoa(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .pessoa_service
        .desativar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/pessoas/{id}
#[utoipa::path(
    delete,
    path = "/api/pessoas/{id}",
    tag = "Pessoas",
    params(("id" = i32, Path, description = "ID da pessoa")),
    responses(
        (status = 200, description = "Pessoa excluída", body = IdResposta),
        (status = 404, description = "Pessoa não encontrada"),
        (status = 409, description = "Pessoa ainda referenciada por transações")
    )
)]
pub async fn excluir_pessoa(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .pessoa_service
        .excluir(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(IdResposta { id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parses_type_filter() {
        let query = PessoaQuery {
            nome: Some("".to_string()),
            tipo: Some("fornecedor".to_string()),
            ativo: Some(true),
        };
        let filtro = query.into_filtro().unwrap();
        assert_eq!(filtro.tipo, Some(TipoPessoa::Fornecedor));
        assert_eq!(filtro.nome, None);
        assert_eq!(filtro.ativo, Some(true));
    }

    #[test]
    fn query_rejects_unknown_type() {
        let query = PessoaQuery { nome: None, tipo: Some("parceiro".to_string()), ativo: None };
        assert!(matches!(
            query.into_filtro(),
            Err(AppError::InvalidArgument { campo: "tipo", .. })
        ));
    }

    #[test]
    fn empty_type_is_ignored_in_filter_but_rejected_in_payload() {
        let query = PessoaQuery { nome: None, tipo: Some(String::new()), ativo: None };
        assert_eq!(query.into_filtro().unwrap().tipo, None);

        assert!(matches!(
            parse_tipo(Some("")),
            Err(AppError::InvalidArgument { campo: "tipo", .. })
        ));
        assert_eq!(parse_tipo(None).unwrap(), None);
    }

    #[test]
    fn empty_name_fails_validation() {
        let payload = CriarPessoaPayload { nome: String::new(), tipo: "cliente".to_string() };
        assert!(payload.validate().is_err());
    }
}
