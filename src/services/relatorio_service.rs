// src/services/relatorio_service.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::{datas::Periodo, error::AppError},
    db::RelatorioRepository,
    models::relatorio::{ContaSaldo, PagamentoPendente, ResumoFinanceiro, TotalCategoria},
};

#[derive(Clone)]
pub struct RelatorioService {
    repo: RelatorioRepository,
}

impl RelatorioService {
    pub fn new(repo: RelatorioRepository) -> Self {
        Self { repo }
    }

    pub async fn resumo_financeiro<'e, E>(
        &self,
        executor: E,
        periodo: &Periodo,
        conta_id: Option<i32>,
    ) -> Result<ResumoFinanceiro, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let totais = self.repo.totais_por_tipo(executor, periodo, conta_id).await?;
        Ok(ResumoFinanceiro::consolidar(periodo, &totais))
    }

    pub async fn totais_por_categoria<'e, E>(
        &self,
        executor: E,
        periodo: &Periodo,
        categoria_id: Option<i32>,
    ) -> Result<Vec<TotalCategoria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let linhas = self
            .repo
            .totais_por_categoria(executor, periodo, categoria_id)
            .await?;
        Ok(TotalCategoria::selecionar(linhas))
    }

    pub async fn pagamentos_pendentes<'e, E>(&self, executor: E) -> Result<Vec<PagamentoPendente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.pagamentos_pendentes(executor).await
    }

    pub async fn saldos_por_conta<'e, E>(
        &self,
        executor: E,
        periodo: &Periodo,
    ) -> Result<Vec<ContaSaldo>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let linhas = self.repo.saldos_por_conta(executor, periodo).await?;
        Ok(linhas.into_iter().map(ContaSaldo::from).collect())
    }
}
