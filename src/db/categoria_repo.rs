// src/db/categoria_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::{mapear_violacao_fk, AppError, Recurso},
    models::categoria::{AlteracaoCategoria, Categoria, CategoriaFiltro, NovaCategoria},
};

#[derive(Clone, Default)]
pub struct CategoriaRepository;

impl CategoriaRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn listar<'e, E>(
        &self,
        executor: E,
        filtro: &CategoriaFiltro,
    ) -> Result<Vec<Categoria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categorias = sqlx::query_as::<_, Categoria>(
            r#"
            SELECT id, nome, tipo, ativo
            FROM categoria
            WHERE ($1::text IS NULL OR nome ILIKE '%' || $1 || '%')
              AND ($2::tipo_categoria IS NULL OR tipo = $2)
              AND ($3::boolean IS NULL OR ativo = $3)
            ORDER BY id
            "#,
        )
        .bind(filtro.nome.as_deref())
        .bind(filtro.tipo)
        .bind(filtro.ativo)
        .fetch_all(executor)
        .await?;

        Ok(categorias)
    }

    pub async fn buscar<'e, E>(&self, executor: E, id: i32) -> Result<Option<Categoria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categoria = sqlx::query_as::<_, Categoria>(
            "SELECT id, nome, tipo, ativo FROM categoria WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(categoria)
    }

    pub async fn buscar_para_referencia<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<Categoria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categoria = sqlx::query_as::<_, Categoria>(
            "SELECT id, nome, tipo, ativo FROM categoria WHERE id = $1 FOR SHARE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(categoria)
    }

    pub async fn inserir<'e, E>(&self, executor: E, nova: &NovaCategoria) -> Result<Categoria, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            INSERT INTO categoria (nome, tipo, ativo)
            VALUES ($1, $2, TRUE)
            RETURNING id, nome, tipo, ativo
            "#,
        )
        .bind(&nova.nome)
        .bind(nova.tipo)
        .fetch_one(executor)
        .await?;

        Ok(categoria)
    }

    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: i32,
        alteracao: &AlteracaoCategoria,
    ) -> Result<Option<Categoria>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            UPDATE categoria
            SET nome = COALESCE($2, nome),
                tipo = COALESCE($3, tipo)
            WHERE id = $1
            RETURNING id, nome, tipo, ativo
            "#,
        )
        .bind(id)
        .bind(alteracao.nome.as_deref())
        .bind(alteracao.tipo)
        .fetch_optional(executor)
        .await?;

        Ok(categoria)
    }

    pub async fn desativar<'e, E>(&self, executor: E, id: i32) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>(
            "UPDATE categoria SET ativo = FALSE WHERE id = $1 RETURNING id",
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
        sqlx::query_scalar::<_, i32>("DELETE FROM categoria WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(|e| mapear_violacao_fk(e, Recurso::Categoria, id))
    }
}
