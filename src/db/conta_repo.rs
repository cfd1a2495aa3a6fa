// src/db/conta_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::{mapear_violacao_fk, AppError, Recurso},
    models::conta::{AlteracaoConta, Conta, ContaFiltro, NovaConta},
};

#[derive(Clone, Default)]
pub struct ContaRepository;

impl ContaRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn listar<'e, E>(&self, executor: E, filtro: &ContaFiltro) -> Result<Vec<Conta>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let contas = sqlx::query_as::<_, Conta>(
            r#"
            SELECT id, nome, saldo_inicial, ativo
            FROM conta
            WHERE ($1::text IS NULL OR nome ILIKE '%' || $1 || '%')
              AND ($2::boolean IS NULL OR ativo = $2)
            ORDER BY id
            "#,
        )
        .bind(filtro.nome.as_deref())
        .bind(filtro.ativo)
        .fetch_all(executor)
        .await?;

        Ok(contas)
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Option<Conta>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let conta = sqlx::query_as::<_, Conta>(
            "SELECT id, nome, saldo_inicial, ativo FROM conta WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(conta)
    }

    // FOR SHARE: bloqueia desativação/exclusão concorrente até o commit
    pub async fn buscar_para_referencia<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Conta>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let conta = sqlx::query_as::<_, Conta>(
            "SELECT id, nome, saldo_inicial, ativo FROM conta WHERE id = $1 FOR SHARE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(conta)
    }

    pub async fn inserir<'e, E>(&self, executor: E, nova: &NovaConta) -> Result<Conta, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let conta = sqlx::query_as::<_, Conta>(
            r#"
            INSERT INTO conta (nome, saldo_inicial, ativo)
            VALUES ($1, $2, TRUE)
            RETURNING id, nome, saldo_inicial, ativo
            "#,
        )
        .bind(&nova.nome)
        .bind(nova.saldo_inicial)
        .fetch_one(executor)
        .await?;

        Ok(conta)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: &AlteracaoConta,
    ) -> Result<Option<Conta>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let conta = sqlx::query_as::<_, Conta>(
            r#"
            UPDATE conta
            SET nome = COALESCE($2, nome),
                saldo_inicial = COALESCE($3, saldo_inicial)
            WHERE id = $1
            RETURNING id, nome, saldo_inicial, ativo
            "#,
        )
        .bind(id)
        .bind(alteracao.nome.as_deref())
        .bind(alteracao.saldo_inicial)
        .fetch_optional(executor)
        .await?;

        Ok(conta)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>("UPDATE conta SET ativo = FALSE WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(id)
    }

    pub async fn excluir<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_scalar::<_, i32>("DELETE FROM conta WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(|e| mapear_violacao_fk(e, Recurso::Conta, id))
    }
}
