// src/services/pessoa_service.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::{AppError, Recurso},
    db::PessoaRepository,
    models::pessoa::{AlteracaoPessoa, NovaPessoa, Pessoa, PessoaFiltro},
};

#[derive(Clone)]
pub struct PessoaService {
    repo: PessoaRepository,
}

impl PessoaService {
    pub fn new(repo: PessoaRepository) -> Self {
        Self { repo }
    }

    pub async fn listar<'e, E>(&self, executor: E, filtro: &PessoaFiltro) -> Result<Vec<Pessoa>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.listar(executor, filtro).await
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Pessoa, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .buscar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Pessoa, id))
    }

    pub async fn criar<'e, E>(&self, executor: E, nova: NovaPessoa) -> Result<Pessoa, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pessoa = self.repo.inserir(executor, &nova).await?;
        tracing::info!("Pessoa {} criada ({:?})", pessoa.id, pessoa.tipo);
        Ok(pessoa)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: AlteracaoPessoa,
    ) -> Result<Pessoa, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // Nada para alterar: devolve o registro como está
        if alteracao.is_vazia() {
            return self.buscar(executor, id).await;
        }

        let pessoa = self
            .repo
            .atualizar(executor, id, &alteracao)
            .await?
            .ok_or(AppError::not_found(Recurso::Pessoa, id))?;

        tracing::info!("Pessoa {} atualizada", id);
        Ok(pessoa)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .desativar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Pessoa, id))?;

        tracing::info!("Pessoa {} desativada", id);
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
            .ok_or(AppError::not_found(Recurso::Pessoa, id))?;

        tracing::info!("Pessoa {} excluída", id);
        Ok(id)
    }
}
