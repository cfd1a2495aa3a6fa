// src/db/relatorio_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::{datas::Periodo, error::AppError},
    models::relatorio::{PagamentoPendente, SaldoContaLinha, TotalCategoria, TotalPorTipo},
};

// Consultas agregadas. Só entram transações ativas com categoria ativa.
#[derive(Clone, Default)]
pub struct RelatorioRepository;

impl RelatorioRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn totais_por_tipo<'e, E>(
        &self,
        executor: E,
        periodo: &Periodo,
        conta_id: Option<i32>,
    ) -> Result<Vec<TotalPorTipo>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let totais = sqlx::query_as::<_, TotalPorTipo>(
            r#"
            SELECT c.tipo, COALESCE(SUM(t.valor), 0) AS total
            FROM transacao t
            INNER JOIN categoria c ON c.id = t.categoria_id
            WHERE t.ativo
              AND c.ativo
              AND ($1::timestamptz IS NULL OR t.data >= $1)
              AND ($2::timestamptz IS NULL OR t.data < $2)
              AND ($3::int4 IS NULL OR t.conta_id = $3)
            GROUP BY c.tipo
            "#,
        )
        .bind(periodo.limite_inferior())
        .bind(periodo.limite_superior_exclusivo())
        .bind(conta_id)
        .fetch_all(executor)
        .await?;

        Ok(totais)
    }

    // O filtro de datas fica no JOIN: categorias sem movimento voltam com total 0.
    pub async fn totais_por_categoria<'e, E>(
        &self,
        executor: E,
        periodo: &Periodo,
        categoria_id: Option<i32>,
    ) -> Result<Vec<TotalCategoria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let totais = sqlx::query_as::<_, TotalCategoria>(
            r#"
            SELECT c.id AS categoria_id, c.nome, COALESCE(SUM(t.valor), 0) AS total
            FROM categoria c
            LEFT JOIN transacao t
                ON t.categoria_id = c.id
               AND t.ativo
               AND ($1::timestamptz IS NULL OR t.data >= $1)
               AND ($2::timestamptz IS NULL OR t.data < $2)
            WHERE c.ativo
              AND ($3::int4 IS NULL OR c.id = $3)
            GROUP BY c.id, c.nome
            "#,
        )
        .bind(periodo.limite_inferior())
        .bind(periodo.limite_superior_exclusivo())
        .bind(categoria_id)
        .fetch_all(executor)
        .await?;

        Ok(totais)
    }

    pub async fn pagamentos_pendentes<'e, E>(&self, executor: E) -> Result<Vec<PagamentoPendente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pendentes = sqlx::query_as::<_, PagamentoPendente>(
            r#"
            SELECT p.id, p.transacao_id, t.valor, p.data_pagamento
            FROM pagamento p
            INNER JOIN transacao t ON t.id = p.transacao_id
            WHERE p.status = 'pendente'
              AND p.ativo
              AND t.ativo
            ORDER BY p.id
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(pendentes)
    }

    pub async fn saldos_por_conta<'e, E>(
        &self,
        executor: E,
        periodo: &Periodo,
    ) -> Result<Vec<SaldoContaLinha>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let saldos = sqlx::query_as::<_, SaldoContaLinha>(
            r#"
            SELECT
                ct.id AS conta_id,
                ct.nome,
                ct.saldo_inicial,
                COALESCE(SUM(t.valor) FILTER (WHERE cat.tipo = 'receita'), 0) AS receitas,
                COALESCE(SUM(t.valor) FILTER (WHERE cat.tipo = 'despesa'), 0) AS despesas
            FROM conta ct
            LEFT JOIN (
                transacao t
                INNER JOIN categoria cat ON cat.id = t.categoria_id AND cat.ativo
            )
                ON t.conta_id = ct.id
               AND t.ativo
               AND ($1::timestamptz IS NULL OR t.data >= $1)
               AND ($2::timestamptz IS NULL OR t.data < $2)
            WHERE ct.ativo
            GROUP BY ct.id, ct.nome, ct.saldo_inicial
            ORDER BY ct.id
            "#,
        )
        .bind(periodo.limite_inferior())
        .bind(periodo.limite_superior_exclusivo())
        .fetch_all(executor)
        .await?;

        Ok(saldos)
    }
}
