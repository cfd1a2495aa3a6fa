// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        CategoriaRepository, ContaRepository, PagamentoRepository, PessoaRepository,
        RelatorioRepository, TransacaoRepository,
    },
    services::{
        CategoriaService, ContaService, PagamentoService, PessoaService, RelatorioService,
        TransacaoService,
    },
};

const SERVER_ADDR_PADRAO: &str = "0.0.0.0:3000";
const MAX_CONEXOES_PADRAO: u32 = 5;
const ACQUIRE_TIMEOUT_PADRAO_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::carregar(|chave| env::var(chave).ok())
    }

    /// Monta a configuração a partir de uma fonte de variáveis qualquer.
    pub fn carregar<F>(ler: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = ler("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let server_addr = ler("SERVER_ADDR").unwrap_or_else(|| SERVER_ADDR_PADRAO.to_string());

        let db_max_connections = match ler("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: '{v}'"))?,
            None => MAX_CONEXOES_PADRAO,
        };

        let acquire_timeout_secs = match ler("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("DB_ACQUIRE_TIMEOUT_SECS inválido: '{v}'"))?,
            None => ACQUIRE_TIMEOUT_PADRAO_SECS,
        };

        Ok(Self {
            database_url,
            server_addr,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub pessoa_service: PessoaService,
    pub conta_service: ContaService,
    pub categoria_service: CategoriaService,
    pub transacao_service: TransacaoService,
    pub pagamento_service: PagamentoService,
    pub relatorio_service: RelatorioService,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool) -> Self {
        let pessoa_repo = PessoaRepository::new();
        let conta_repo = ContaRepository::new();
        let categoria_repo = CategoriaRepository::new();
        let transacao_repo = TransacaoRepository::new();

        Self {
            pessoa_service: PessoaService::new(pessoa_repo.clone()),
            conta_service: ContaService::new(conta_repo.clone()),
            categoria_service: CategoriaService::new(categoria_repo.clone()),
            transacao_service: TransacaoService::new(
                transacao_repo.clone(),
                conta_repo,
                categoria_repo,
                pessoa_repo,
            ),
            pagamento_service: PagamentoService::new(PagamentoRepository::new(), transacao_repo),
            relatorio_service: RelatorioService::new(RelatorioRepository::new()),
            i18n_store: Arc::new(I18nStore::default()),
            db_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fonte(pares: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let mapa: HashMap<String, String> = pares
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |chave| mapa.get(chave).cloned()
    }

    #[test]
    fn defaults_apply_when_only_the_url_is_set() {
        let config = Config::carregar(fonte(&[("DATABASE_URL", "postgres://localhost/financeiro")]))
            .unwrap();

        assert_eq!(config.server_addr, "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn database_url_is_required() {
        let err = Config::carregar(fonte(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = Config::carregar(fonte(&[
            ("DATABASE_URL", "postgres://localhost/financeiro"),
            ("DB_MAX_CONNECTIONS", "muitas"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::carregar(fonte(&[
            ("DATABASE_URL", "postgres://db/financeiro"),
            ("SERVER_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "10"),
        ]))
        .unwrap();

        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(10));
    }
}
