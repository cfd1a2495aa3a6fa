// src/db/pessoa_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::{mapear_violacao_fk, AppError, Recurso},
    models::pessoa::{AlteracaoPessoa, NovaPessoa, Pessoa, PessoaFiltro},
};

// Responsável por todas as interações com a tabela 'pessoa'
#[derive(Clone, Default)]
pub struct PessoaRepository;

impl PessoaRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn listar<'e, E>(
        &self,
        executor: E,
        filtro: &PessoaFiltro,
    ) -> Result<Vec<Pessoa>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pessoas = sqlx::query_as::<_, Pessoa>(
            r#"
            SELECT id, nome, tipo, ativo
            FROM pessoa
            WHERE ($1::text IS NULL OR nome ILIKE '%' || $1 || '%')
              AND ($2::tipo_pessoa IS NULL OR tipo = $2)
              AND ($3::boolean IS NULL OR ativo = $3)
            ORDER BY id
            "#,
        )
        .bind(filtro.nome.as_deref())
        .bind(filtro.tipo)
        .bind(filtro.ativo)
        .fetch_all(executor)
        .await?;

        Ok(pessoas)
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Option<Pessoa>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pessoa = sqlx::query_as::<_, Pessoa>("SELECT id, nome, tipo, ativo FROM pessoa WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(pessoa)
    }

    /// Lê a pessoa travando a linha até o fim da transação, para que ela não
    /// seja desativada nem excluída entre a validação e a escrita dependente.
    pub async fn buscar_para_referencia<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Pessoa>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pessoa = sqlx::query_as::<_, Pessoa>(
            "SELECT id, nome, tipo, ativo FROM pessoa WHERE id = $1 FOR SHARE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(pessoa)
    }

    pub async fn inserir<'e, E>(&self, executor: E, nova: &NovaPessoa) -> Result<Pessoa, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pessoa = sqlx::query_as::<_, Pessoa>(
            r#"
            INSERT INTO pessoa (nome, tipo, ativo)
            VALUES ($1, $2, TRUE)
            RETURNING id, nome, tipo, ativo
            "#,
        )
        .bind(&nova.nome)
        .bind(nova.tipo)
        .fetch_one(executor)
        .await?;

        Ok(pessoa)
    }

    // Campos ausentes (NULL) mantêm o valor atual
    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: &AlteracaoPessoa,
    ) -> Result<Option<Pessoa>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pessoa = sqlx::query_as::<_, Pessoa>(
            r#"
            UPDATE pessoa
            SET nome = COALESCE($2, nome),
                tipo = COALESCE($3, tipo)
            WHERE id = $1
            RETURNING id, nome, tipo, ativo
            "#,
        )
        .bind(id)
        .bind(alteracao.nome.as_deref())
        .bind(alteracao.tipo)
        .fetch_optional(executor)
        .await?;

        Ok(pessoa)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>("UPDATE pessoa SET ativo = FALSE WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(id)
    }

    pub async fn excluir<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_scalar::<_, i32>("DELETE FROM pessoa WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(|e| mapear_violacao_fk(e, Recurso::Pessoa, id))
    }
}
