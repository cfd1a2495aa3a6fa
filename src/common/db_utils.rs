use sqlx::{pool::PoolConnection, Postgres};

use crate::common::error::AppError;
use crate::config::AppState;

// ---
// Unidade de trabalho por requisição
// ---
/// Adquire uma conexão da pool para a requisição. A conexão volta para a pool
/// quando é descartada, inclusive quando o handler retorna erro.
pub(crate) async fn get_connection(
    app_state: &AppState,
) -> Result<PoolConnection<Postgres>, AppError> {
    // O operador '?' converte automaticamente sqlx::Error -> AppError::DatabaseError
    let conn = app_state.db_pool.acquire().await?;
    Ok(conn)
}
