// src/services/conta_service.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::{AppError, Recurso},
    db::ContaRepository,
    models::conta::{AlteracaoConta, Conta, ContaFiltro, NovaConta},
    services::validacao::validar_saldo_inicial,
};

#[derive(Clone)]
pub struct ContaService {
    repo: ContaRepository,
}

impl ContaService {
    pub fn new(repo: ContaRepository) -> Self {
        Self { repo }
    }

    pub async fn listar<'e, E>(&self, executor: E, filtro: &ContaFiltro) -> Result<Vec<Conta>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.listar(executor, filtro).await
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Conta, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .buscar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Conta, id))
    }

    pub async fn criar<'e, E>(&self, executor: E, nova: NovaConta) -> Result<Conta, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        validar_saldo_inicial(nova.saldo_inicial)?;

        let conta = self.repo.inserir(executor, &nova).await?;
        tracing::info!("Conta {} criada com saldo inicial {}", conta.id, conta.saldo_inicial);
        Ok(conta)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: AlteracaoConta,
    ) -> Result<Conta, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if alteracao.is_vazia() {
            return self.buscar(executor, id).await;
        }

        if let Some(saldo) = alteracao.saldo_inicial {
            validar_saldo_inicial(saldo)?;
        }

        let conta = self
            .repo
            .atualizar(executor, id, &alteracao)
            .await?
            .ok_or(AppError::not_found(Recurso::Conta, id))?;

        tracing::info!("Conta {} atualizada", id);
        Ok(conta)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .desativar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Conta, id))?;

        tracing::info!("Conta {} desativada", id);
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
            .ok_or(AppError::not_found(Recurso::Conta, id))?;

        tracing::info!("Conta {} excluída", id);
        Ok(id)
    }
}
