// src/models/conta.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conta {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Conta Principal")]
    pub nome: String,

    #[schema(example = 1500.50)]
    pub saldo_inicial: Decimal,

    #[schema(example = true)]
    pub ativo: bool,
}

#[derive(Debug, Clone)]
pub struct NovaConta {
    pub nome: String,
    pub saldo_inicial: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct AlteracaoConta {
    pub nome: Option<String>,
    pub saldo_inicial: Option<Decimal>,
}

impl AlteracaoConta {
    pub fn is_vazia(&self) -> bool {
        self.nome.is_none() && self.saldo_inicial.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContaFiltro {
    pub nome: Option<String>,
    pub ativo: Option<bool>,
}
