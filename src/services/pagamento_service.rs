// src/services/pagamento_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::{AppError, Recurso},
    db::{PagamentoRepository, TransacaoRepository},
    models::pagamento::{AlteracaoPagamento, NovoPagamento, Pagamento, PagamentoFiltro},
    services::validacao::{exigir_ativo, validar_data_pagamento},
};

#[derive(Clone)]
pub struct PagamentoService {
    repo: PagamentoRepository,
    transacoes: TransacaoRepository,
}

impl PagamentoService {
    pub fn new(repo: PagamentoRepository, transacoes: TransacaoRepository) -> Self {
        Self { repo, transacoes }
    }

    pub async fn listar<'e, E>(
        &self,
        executor: E,
        filtro: &PagamentoFiltro,
    ) -> Result<Vec<Pagamento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.listar(executor, filtro).await
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Pagamento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .buscar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Pagamento, id))
    }

    pub async fn criar<'e, E>(&self, executor: E, novo: NovoPagamento) -> Result<Pagamento, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let transacao = exigir_ativo(
            self.transacoes
                .buscar_para_referencia(&mut *tx, novo.transacao_id)
                .await?,
            novo.transacao_id,
        )?;

        validar_data_pagamento(novo.data_pagamento, transacao.data)?;

        let pagamento = self.repo.inserir(&mut *tx, &novo).await?;
        tx.commit().await?;

        tracing::info!(
            "Pagamento {} criado para a transação {} ({:?})",
            pagamento.id,
            pagamento.transacao_id,
            pagamento.status
        );

        Ok(pagamento)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: AlteracaoPagamento,
    ) -> Result<Pagamento, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        if alteracao.is_vazia() {
            return self.buscar(executor, id).await;
        }

        let mut tx = executor.begin().await?;

        let atual = self
            .repo
            .buscar_para_alteracao(&mut *tx, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Pagamento, id))?;

        // Troca de transação ou de data: confere a data efetiva contra a
        // transação efetiva.
        if alteracao.transacao_id.is_some() || alteracao.data_pagamento.is_some() {
            let transacao_id = alteracao.transacao_id.unwrap_or(atual.transacao_id);
            let transacao = self
                .transacoes
                .buscar_para_referencia(&mut *tx, transacao_id)
                .await?;

            let transacao = match alteracao.transacao_id {
                Some(novo_id) => exigir_ativo(transacao, novo_id)?,
                None => transacao.ok_or(AppError::not_found(Recurso::Transacao, transacao_id))?,
            };

            let data_efetiva = alteracao.data_pagamento.or(atual.data_pagamento);
            validar_data_pagamento(data_efetiva, transacao.data)?;
        }

        let pagamento = self
            .repo
            .atualizar(&mut *tx, id, &alteracao)
            .await?
            .ok_or(AppError::not_found(Recurso::Pagamento, id))?;

        tx.commit().await?;

        tracing::info!("Pagamento {} atualizado ({:?})", id, pagamento.status);
        Ok(pagamento)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .desativar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Pagamento, id))?;

        tracing::info!("Pagamento {} desativado", id);
        Ok(())
    }

    pub async fn excluir<'e, E>(&self, executor: E, id: i32) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = self
            .repo
            .excluir(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Pagamento, id))?;

        tracing::info!("Pagamento {} excluído", id);
        Ok(id)
    }
}
