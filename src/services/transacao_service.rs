// src/services/transacao_service.rs

use sqlx::{Acquire, Executor, PgConnection, Postgres};

use crate::{
    common::error::{AppError, Motivo, Recurso},
    db::{CategoriaRepository, ContaRepository, PessoaRepository, TransacaoRepository},
    models::transacao::{AlteracaoTransacao, NovaTransacao, TransacaoDetalhe, TransacaoFiltro},
    services::validacao::{exigir_ativo, validar_casas_decimais, validar_valor_positivo},
};

#[derive(Clone)]
pub struct TransacaoService {
    repo: TransacaoRepository,
    contas: ContaRepository,
    categorias: CategoriaRepository,
    pessoas: PessoaRepository,
}

impl TransacaoService {
    pub fn new(
        repo: TransacaoRepository,
        contas: ContaRepository,
        categorias: CategoriaRepository,
        pessoas: PessoaRepository,
    ) -> Self {
        Self { repo, contas, categorias, pessoas }
    }

    pub async fn listar<'e, E>(
        &self,
        executor: E,
        filtro: &TransacaoFiltro,
    ) -> Result<Vec<TransacaoDetalhe>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.listar_detalhes(executor, filtro).await
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<TransacaoDetalhe, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .buscar_detalhe(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Transacao, id))
    }

    // =========================================================================
    //  ESCRITA (validação + gravação na mesma transação do banco)
    // =========================================================================

    pub async fn criar<'e, E>(&self, executor: E, nova: NovaTransacao) -> Result<TransacaoDetalhe, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        validar_casas_decimais("valor", nova.valor)?;

        let mut tx = executor.begin().await?;

        self.validar_vinculos(
            &mut tx,
            Some(nova.conta_id),
            Some(nova.categoria_id),
            nova.pessoa_id,
        )
        .await?;

        let transacao = self.repo.inserir(&mut *tx, &nova).await?;

        let detalhe = self
            .repo
            .buscar_detalhe(&mut *tx, transacao.id)
            .await?
            .ok_or(AppError::not_found(Recurso::Transacao, transacao.id))?;

        tx.commit().await?;

        tracing::info!(
            "Transação {} criada: conta {}, categoria {}, valor {}",
            transacao.id,
            transacao.conta_id,
            transacao.categoria_id,
            transacao.valor
        );

        Ok(detalhe)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: AlteracaoTransacao,
    ) -> Result<TransacaoDetalhe, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        if alteracao.is_vazia() {
            return self.buscar(executor, id).await;
        }

        if let Some(valor) = alteracao.valor {
            validar_valor_positivo(valor)?;
            validar_casas_decimais("valor", valor)?;
        }

        let mut tx = executor.begin().await?;

        let atual = self
            .repo
            .buscar_para_alteracao(&mut *tx, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Transacao, id))?;

        self.validar_vinculos(
            &mut tx,
            alteracao.conta_id,
            alteracao.categoria_id,
            alteracao.pessoa_id,
        )
        .await?;

        // Adiar a data não pode deixar um pagamento antes da transação
        if let Some(nova_data) = alteracao.data.filter(|d| *d > atual.data) {
            if let Some(menor) = self.repo.menor_data_pagamento(&mut *tx, id).await? {
                if menor < nova_data {
                    tracing::warn!(
                        "Transação {}: nova data {} é posterior ao pagamento de {}",
                        id,
                        nova_data,
                        menor
                    );
                    return Err(AppError::invalid_argument("data", Motivo::PosteriorAPagamento));
                }
            }
        }

        self.repo
            .atualizar(&mut *tx, id, &alteracao)
            .await?
            .ok_or(AppError::not_found(Recurso::Transacao, id))?;

        let detalhe = self
            .repo
            .buscar_detalhe(&mut *tx, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Transacao, id))?;

        tx.commit().await?;

        tracing::info!("Transação {} atualizada", id);
        Ok(detalhe)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .desativar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Transacao, id))?;

        tracing::info!("Transação {} desativada", id);
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
            .ok_or(AppError::not_found(Recurso::Transacao, id))?;

        tracing::info!("Transação {} excluída", id);
        Ok(id)
    }

    /// Cada vínculo informado precisa existir e estar ativo.
    async fn validar_vinculos(
        &self,
        conn: &mut PgConnection,
        conta_id: Option<i32>,
        categoria_id: Option<i32>,
        pessoa_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(id) = conta_id {
            exigir_ativo(self.contas.buscar_para_referencia(&mut *conn, id).await?, id)?;
        }

        if let Some(id) = categoria_id {
            exigir_ativo(self.categorias.buscar_para_referencia(&mut *conn, id).await?, id)?;
        }

        if let Some(id) = pessoa_id {
            exigir_ativo(self.pessoas.buscar_para_referencia(&mut *conn, id).await?, id)?;
        }

        Ok(())
    }
}
