// src/services/categoria_service.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::{AppError, Recurso},
    db::CategoriaRepository,
    models::categoria::{AlteracaoCategoria, Categoria, CategoriaFiltro, NovaCategoria},
};

#[derive(Clone)]
pub struct CategoriaService {
    repo: CategoriaRepository,
}

impl CategoriaService {
    pub fn new(repo: CategoriaRepository) -> Self {
        Self { repo }
    }

    pub async fn listar<'e, E>(
        &self,
        executor: E,
        filtro: &CategoriaFiltro,
    ) -> Result<Vec<Categoria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.listar(executor, filtro).await
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Categoria, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .buscar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Categoria, id))
    }

    pub async fn criar<'e, E>(&self, executor: E, nova: NovaCategoria) -> Result<Categoria, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categoria = self.repo.inserir(executor, &nova).await?;
        tracing::info!("Categoria {} criada ({:?})", categoria.id, categoria.tipo);
        Ok(categoria)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: AlteracaoCategoria,
    ) -> Result<Categoria, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if alteracao.is_vazia() {
            return self.buscar(executor, id).await;
        }

        let categoria = self
            .repo
            .atualizar(executor, id, &alteracao)
            .await?
            .ok_or(AppError::not_found(Recurso::Categoria, id))?;

        tracing::info!("Categoria {} atualizada", id);
        Ok(categoria)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .desativar(executor, id)
            .await?
            .ok_or(AppError::not_found(Recurso::Categoria, id))?;

        tracing::info!("Categoria {} desativada", id);
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
            .ok_or(AppError::not_found(Recurso::Categoria, id))?;

        tracing::info!("Categoria {} excluída", id);
        Ok(id)
    }
}
