// src/models/pessoa.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::error::{AppError, Motivo};

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_pessoa", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TipoPessoa {
    Cliente,
    Fornecedor,
}

impl FromStr for TipoPessoa {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cliente" => Ok(TipoPessoa::Cliente),
            "fornecedor" => Ok(TipoPessoa::Fornecedor),
            _ => Err(AppError::invalid_argument("tipo", Motivo::OpcaoInvalida)),
        }
    }
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pessoa {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Maria da Silva")]
    pub nome: String,

    pub tipo: TipoPessoa,

    #[schema(example = true)]
    pub ativo: bool,
}

#[derive(Debug, Clone)]
pub struct NovaPessoa {
    pub nome: String,
    pub tipo: TipoPessoa,
}

#[derive(Debug, Clone, Default)]
pub struct AlteracaoPessoa {
    pub nome: Option<String>,
    pub tipo: Option<TipoPessoa>,
}

impl AlteracaoPessoa {
    pub fn is_vazia(&self) -> bool {
        self.nome.is_none() && self.tipo.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PessoaFiltro {
    pub nome: Option<String>,
    pub tipo: Option<TipoPessoa>,
    pub ativo: Option<bool>,
}
