// src/db/transacao_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use crate::{
    common::error::{mapear_violacao_fk, AppError, Recurso},
    models::transacao::{
        AlteracaoTransacao, NovaTransacao, Transacao, TransacaoDetalhe, TransacaoDetalheLinha,
        TransacaoFiltro,
    },
};

const COLUNAS_TRANSACAO: &str =
    "id, conta_id, categoria_id, pessoa_id, valor, data, descricao, ativo";

// Transação + categoria (obrigatória) + pessoa (opcional)
const SELECT_DETALHE: &str = r#"
    SELECT
        t.id, t.conta_id, t.categoria_id, t.pessoa_id, t.valor, t.data, t.descricao, t.ativo,
        c.nome AS categoria_nome,
        c.tipo AS categoria_tipo,
        c.ativo AS categoria_ativo,
        p.nome AS pessoa_nome,
        p.tipo AS pessoa_tipo,
        p.ativo AS pessoa_ativo
    FROM transacao t
    INNER JOIN categoria c ON c.id = t.categoria_id
    LEFT JOIN pessoa p ON p.id = t.pessoa_id
"#;

#[derive(Clone, Default)]
pub struct TransacaoRepository;

impl TransacaoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn listar_detalhes<'e, E>(
        &self,
        executor: E,
        filtro: &TransacaoFiltro,
    ) -> Result<Vec<TransacaoDetalhe>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"{SELECT_DETALHE}
            WHERE ($1::int4 IS NULL OR t.conta_id = $1)
              AND ($2::int4 IS NULL OR t.categoria_id = $2)
              AND ($3::int4 IS NULL OR t.pessoa_id = $3)
              AND ($4::timestamptz IS NULL OR t.data >= $4)
              AND ($5::timestamptz IS NULL OR t.data < $5)
              AND ($6::boolean IS NULL OR t.ativo = $6)
            ORDER BY t.id
            "#
        );

        let linhas = sqlx::query_as::<_, TransacaoDetalheLinha>(&sql)
            .bind(filtro.conta_id)
            .bind(filtro.categoria_id)
            .bind(filtro.pessoa_id)
            .bind(filtro.periodo.limite_inferior())
            .bind(filtro.periodo.limite_superior_exclusivo())
            .bind(filtro.ativo)
            .fetch_all(executor)
            .await?;

        Ok(linhas.into_iter().map(TransacaoDetalhe::from).collect())
    }

    pub async fn buscar_detalhe<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<TransacaoDetalhe>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{SELECT_DETALHE} WHERE t.id = $1");

        let linha = sqlx::query_as::<_, TransacaoDetalheLinha>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(linha.map(TransacaoDetalhe::from))
    }

    /// Referência para um pagamento: trava a transação em modo compartilhado.
    pub async fn buscar_para_referencia<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Transacao>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {COLUNAS_TRANSACAO} FROM transacao WHERE id = $1 FOR SHARE");

        let transacao = sqlx::query_as::<_, Transacao>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(transacao)
    }

    /// Leitura antes de uma alteração. O FOR UPDATE impede que um pagamento
    /// seja criado com base na data antiga enquanto a alteração não termina.
    pub async fn buscar_para_alteracao<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Transacao>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {COLUNAS_TRANSACAO} FROM transacao WHERE id = $1 FOR UPDATE");

        let transacao = sqlx::query_as::<_, Transacao>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(transacao)
    }

    /// Data mais antiga entre os pagamentos ativos da transação.
    pub async fn menor_data_pagamento<'e, E>(
        &self,
        executor: E,
        transacao_id: i32,
    ) -> Result<Option<DateTime<Utc>>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let menor = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            "SELECT MIN(data_pagamento) FROM pagamento WHERE transacao_id = $1 AND ativo",
        )
        .bind(transacao_id)
        .fetch_one(executor)
        .await?;

        Ok(menor)
    }

    pub async fn inserir<'e, E>(&self, executor: E, nova: &NovaTransacao) -> Result<Transacao, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO transacao (conta_id, categoria_id, pessoa_id, valor, data, descricao, ativo)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE)
            RETURNING {COLUNAS_TRANSACAO}
            "#
        );

        let transacao = sqlx::query_as::<_, Transacao>(&sql)
            .bind(nova.conta_id)
            .bind(nova.categoria_id)
            .bind(nova.pessoa_id)
            .bind(nova.valor)
            .bind(nova.data)
            .bind(nova.descricao.as_deref())
            .fetch_one(executor)
            .await?;

        Ok(transacao)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: &AlteracaoTransacao,
    ) -> Result<Option<Transacao>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE transacao
            SET conta_id = COALESCE($2, conta_id),
                categoria_id = COALESCE($3, categoria_id),
                pessoa_id = COALESCE($4, pessoa_id),
                valor = COALESCE($5, valor),
                data = COALESCE($6, data),
                descricao = COALESCE($7, descricao)
            WHERE id = $1
            RETURNING {COLUNAS_TRANSACAO}
            "#
        );

        let transacao = sqlx::query_as::<_, Transacao>(&sql)
            .bind(id)
            .bind(alteracao.conta_id)
            .bind(alteracao.categoria_id)
            .bind(alteracao.pessoa_id)
            .bind(alteracao.valor)
            .bind(alteracao.data)
            .bind(alteracao.descricao.as_deref())
            .fetch_optional(executor)
            .await?;

        Ok(transacao)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>(
            "UPDATE transacao SET ativo = FALSE WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(id)
    }

    pub async fn excluir<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_scalar::<_, i32>("DELETE FROM transacao WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(|e| mapear_violacao_fk(e, Recurso::Transacao, id))
    }
}
