// src/handlers/categorias.rs

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
    models::categoria::{AlteracaoCategoria, Categoria, CategoriaFiltro, NovaCategoria, TipoCategoria},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarCategoriaPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Aluguel")]
    pub nome: String,

    #[schema(example = "despesa")]
    pub tipo: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarCategoriaPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio"))]
    pub nome: Option<String>,

    #[schema(example = "receita")]
    pub tipo: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CategoriaQuery {
    pub nome: Option<String>,
    /// receita | despesa
    pub tipo: Option<String>,
    pub ativo: Option<bool>,
}

// "" só é ignorado nos filtros de query; no payload é recusado.
fn parse_tipo(tipo: Option<&str>) -> Result<Option<TipoCategoria>, AppError> {
    tipo.map(str::parse).transpose()
}

impl CategoriaQuery {
    fn into_filtro(self) -> Result<CategoriaFiltro, AppError> {
        Ok(CategoriaFiltro {
            tipo: parse_tipo(self.tipo.as_deref().filter(|t| !t.is_empty()))?,
            nome: self.nome.filter(|n| !n.is_empty()),
            ativo: self.ativo,
        })
    }
}

// GET /api/categorias
#[utoipa::path(
    get,
    path = "/api/categorias",
    tag = "Categorias",
    params(CategoriaQuery),
    responses(
        (status = 200, description = "Lista de categorias", body = Vec<Categoria>),
        (status = 400, description = "Filtro inválido")
    )
)]
pub async fn listar_categorias(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<CategoriaQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filtro = query
        .into_filtro()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let categorias = app_state
        .categoria_service
        .listar(&mut *conn, &filtro)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(categorias)))
}

// GET /api/categorias/{id}
#[utoipa::path(
    get,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i32, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria encontrada", body = Categoria),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn buscar_categoria(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let categoria = app_state
        .categoria_service
        .buscar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(categoria)))
}

// POST /api/categorias
#[utoipa::path(
    post,
    path = "/api/categorias",
    tag = "Categorias",
    request_body = CriarCategoriaPayload,
    responses(
        (status = 201, description = "Categoria criada", body = Categoria),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_categoria(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CriarCategoriaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let nova = NovaCategoria {
        tipo: payload
            .tipo
            .parse::<TipoCategoria>()
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?,
        nome: payload.nome,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let categoria = app_state
        .categoria_service
        .criar(&mut *conn, nova)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(categoria)))
}

// PUT /api/categorias/{id}
#[utoipa::path(
    put,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i32, Path, description = "ID da categoria")),
    request_body = AtualizarCategoriaPayload,
    responses(
        (status = 200, description = "Categoria atualizada", body = Categoria),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn atualizar_categoria(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizarCategoriaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let alteracao = AlteracaoCategoria {
        tipo: parse_tipo(payload.tipo.as_deref())
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?,
        nome: payload.nome,
    };

    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let categoria = app_state
        .categoria_service
        .atualizar(&mut *conn, id, alteracao)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(categoria)))
}

// PATCH /api/categorias/{id}/desativar
#[utoipa::path(
    patch,
    path = "/api/categorias/{id}/desativar",
    tag = "Categorias",
    params(("id" = i32, Path, description = "ID da categoria")),
    responses(
        (status = 204, description = "Categoria desativada"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn desativar_categoria(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .categoria_service
        .desativar(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/categorias/{id}
#[utoipa::path(
    delete,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i32, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria excluída", body = IdResposta),
        (status = 404, description = "Categoria não encontrada"),
        (status = 409, description = "Categoria ainda referenciada por transações")
    )
)]
pub async fn excluir_categoria(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_connection(&app_state)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .categoria_service
        .excluir(&mut *conn, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(IdResposta { id })))
}
