// src/db/pagamento_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::pagamento::{AlteracaoPagamento, NovoPagamento, Pagamento, PagamentoFiltro},
};

#[derive(Clone, Default)]
pub struct PagamentoRepository;

impl PagamentoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn listar<'e, E>(
        &self,
        executor: E,
        filtro: &PagamentoFiltro,
    ) -> Result<Vec<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // O período se aplica à data de pagamento; sem data, o pagamento fica
        // fora de qualquer período informado.
        let pagamentos = sqlx::query_as::<_, Pagamento>(
            r#"
            SELECT id, transacao_id, status, data_pagamento, ativo
            FROM pagamento
            WHERE ($1::int4 IS NULL OR transacao_id = $1)
              AND ($2::status_pagamento IS NULL OR status = $2)
              AND ($3::timestamptz IS NULL OR data_pagamento >= $3)
              AND ($4::timestamptz IS NULL OR data_pagamento < $4)
              AND ($5::boolean IS NULL OR ativo = $5)
            ORDER BY id
            "#,
        )
        .bind(filtro.transacao_id)
        .bind(filtro.status)
        .bind(filtro.periodo.limite_inferior())
        .bind(filtro.periodo.limite_superior_exclusivo())
        .bind(filtro.ativo)
        .fetch_all(executor)
        .await?;

        Ok(pagamentos)
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Option<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, Pagamento>(
            "SELECT id, transacao_id, status, data_pagamento, ativo FROM pagamento WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(pagamento)
    }

    pub async fn buscar_para_alteracao<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, Pagamento>(
            r#"
            SELECT id, transacao_id, status, data_pagamento, ativo
            FROM pagamento
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(pagamento)
    }

    pub async fn inserir<'e, E>(&self, executor: E, novo: &NovoPagamento) -> Result<Pagamento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, Pagamento>(
            r#"
            INSERT INTO pagamento (transacao_id, status, data_pagamento, ativo)
            VALUES ($1, $2, $3, TRUE)
            RETURNING id, transacao_id, status, data_pagamento, ativo
            "#,
        )
        .bind(novo.transacao_id)
        .bind(novo.status)
        .bind(novo.data_pagamento)
        .fetch_one(executor)
        .await?;

        Ok(pagamento)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: &AlteracaoPagamento,
    ) -> Result<Option<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pagamento = sqlx::query_as::<_, Pagamento>(
            r#"
            UPDATE pagamento
            SET transacao_id = COALESCE($2, transacao_id),
                status = COALESCE($3, status),
                data_pagamento = COALESCE($4, data_pagamento)
            WHERE id = $1
            RETURNING id, transacao_id, status, data_pagamento, ativo
            "#,
        )
        .bind(id)
        .bind(alteracao.transacao_id)
        .bind(alteracao.status)
        .bind(alteracao.data_pagamento)
        .fetch_optional(executor)
        .await?;

        Ok(pagamento)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>(
            "UPDATE pagamento SET ativo = FALSE WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(id)
    }

    // Nenhuma tabela referencia pagamento.
    pub async fn excluir<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>("DELETE FROM pagamento WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(id)
    }
}
