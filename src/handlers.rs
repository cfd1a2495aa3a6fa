use serde::Serialize;
use utoipa::ToSchema;

pub mod categorias;
pub mod contas;
pub mod pagamentos;
pub mod pessoas;
pub mod relatorios;
pub mod transacoes;

/// Corpo devolvido pelas exclusões.
#[derive(Debug, Serialize, ToSchema)]
pub struct IdResposta {
    #[schema(example = 1)]
    pub id: i32,
}
