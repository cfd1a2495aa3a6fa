// src/models/categoria.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::error::{AppError, Motivo};

// Define o papel da transação nos relatórios: receita soma, despesa subtrai.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_categoria", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TipoCategoria {
    Receita,
    Despesa,
}

impl FromStr for TipoCategoria {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receita" => Ok(TipoCategoria::Receita),
            "despesa" => Ok(TipoCategoria::Despesa),
            _ => Err(AppError::invalid_argument("tipo", Motivo::OpcaoInvalida)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Venda de Produtos")]
    pub nome: String,

    pub tipo: TipoCategoria,

    #[schema(example = true)]
    pub ativo: bool,
}

#[derive(Debug, Clone)]
pub struct NovaCategoria {
    pub nome: String,
    pub tipo: TipoCategoria,
}

#[derive(Debug, Clone, Default)]
pub struct AlteracaoCategoria {
    pub nome: Option<String>,
    pub tipo: Option<TipoCategoria>,
}

impl AlteracaoCategoria {
    pub fn is_vazia(&self) -> bool {
        self.nome.is_none() && self.tipo.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoriaFiltro {
    pub nome: Option<String>,
    pub tipo: Option<TipoCategoria>,
    pub ativo: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_values_outside_the_enum() {
        assert_eq!("receita".parse::<TipoCategoria>().unwrap(), TipoCategoria::Receita);
        assert_eq!("despesa".parse::<TipoCategoria>().unwrap(), TipoCategoria::Despesa);
        assert!(matches!(
            "investimento".parse::<TipoCategoria>(),
            Err(AppError::InvalidArgument { campo: "tipo", motivo: Motivo::OpcaoInvalida })
        ));
    }
}
