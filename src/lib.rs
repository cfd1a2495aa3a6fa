// src/lib.rs

use axum::{
    routing::{get, patch},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

pub fn create_app(app_state: AppState) -> Router {
    let pessoa_routes = Router::new()
        .route(
            "/",
            get(handlers::pessoas::listar_pessoas).post(handlers::pessoas::criar_pessoa),
        )
        .route(
            "/{id}",
            get(handlers::pessoas::buscar_pessoa)
                .put(handlers::pessoas::atualizar_pessoa)
                .delete(handlers::pessoas::excluir_pessoa),
        )
        .route("/{id}/desativar", patch(handlers::pessoas::desativar_pessoa));

    let conta_routes = Router::new()
        .route(
            "/",
            get(handlers::contas::listar_contas).post(handlers::contas::criar_conta),
        )
        .route(
            "/{id}",
            get(handlers::contas::buscar_conta)
                .put(handlers::contas::atualizar_conta)
                .delete(handlers::contas::excluir_conta),
        )
        .route("/{id}/desativar", patch(handlers::contas::desativar_conta));

    let categoria_routes = Router::new()
        .route(
            "/",
            get(handlers::categorias::listar_categorias).post(handlers::categorias::criar_categoria),
        )
        .route(
            "/{id}",
            get(handlers::categorias::buscar_categoria)
                .put(handlers::categorias::atualizar_categoria)
                .delete(handlers::categorias::excluir_categoria),
        )
        .route("/{id}/desativar", patch(handlers::categorias::desativar_categoria));

    let transacao_routes = Router::new()
        .route(
            "/",
            get(handlers::transacoes::listar_transacoes).post(handlers::transacoes::criar_transacao),
        )
        .route(
            "/{id}",
            get(handlers::transacoes::buscar_transacao)
                .put(handlers::transacoes::atualizar_transacao)
                .delete(handlers::transacoes::excluir_transacao),
        )
        .route("/{id}/desativar", patch(handlers::transacoes::desativar_transacao));

    let pagamento_routes = Router::new()
        .route(
            "/",
            get(handlers::pagamentos::listar_pagamentos).post(handlers::pagamentos::criar_pagamento),
        )
        .route(
            "/{id}",
            get(handlers::pagamentos::buscar_pagamento)
                .put(handlers::pagamentos::atualizar_pagamento)
                .delete(handlers::pagamentos::excluir_pagamento),
        )
        .route("/{id}/desativar", patch(handlers::pagamentos::desativar_pagamento));

    let relatorio_routes = Router::new()
        .route("/resumo-financeiro", get(handlers::relatorios::resumo_financeiro))
        .route("/transacoes-categoria", get(handlers::relatorios::transacoes_por_categoria))
        .route("/pagamentos-pendentes", get(handlers::relatorios::pagamentos_pendentes))
        .route("/contas-saldo", get(handlers::relatorios::contas_saldo));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/pessoas", pessoa_routes)
        .nest("/api/contas", conta_routes)
        .nest("/api/categorias", categoria_routes)
        .nest("/api/transacoes", transacao_routes)
        .nest("/api/pagamentos", pagamento_routes)
        .nest("/api/relatorios", relatorio_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
