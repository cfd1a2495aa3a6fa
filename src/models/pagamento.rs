// src/models/pagamento.rs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::datas::Periodo;
use crate::common::error::{AppError, Motivo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_pagamento", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StatusPagamento {
    Pendente,
    Pago,
    Cancelado,
}

impl FromStr for StatusPagamento {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendente" => Ok(StatusPagamento::Pendente),
            "pago" => Ok(StatusPagamento::Pago),
            "cancelado" => Ok(StatusPagamento::Cancelado),
            _ => Err(AppError::invalid_argument("status", Motivo::OpcaoInvalida)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagamento {
    #[schema(example = 1)]
    pub id: i32,

    pub transacao_id: i32,

    pub status: StatusPagamento,

    #[schema(value_type = Option<String>, format = DateTime, example = "2024-01-15T10:00:00Z")]
    pub data_pagamento: Option<DateTime<Utc>>,

    pub ativo: bool,
}

#[derive(Debug, Clone)]
pub struct NovoPagamento {
    pub transacao_id: i32,
    pub status: StatusPagamento,
    pub data_pagamento: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct AlteracaoPagamento {
    pub transacao_id: Option<i32>,
    pub status: Option<StatusPagamento>,
    pub data_pagamento: Option<DateTime<Utc>>,
}

impl AlteracaoPagamento {
    pub fn is_vazia(&self) -> bool {
        self.transacao_id.is_none() && self.status.is_none() && self.data_pagamento.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PagamentoFiltro {
    pub transacao_id: Option<i32>,
    pub status: Option<StatusPagamento>,
    /// Aplicado sobre `data_pagamento`.
    pub periodo: Periodo,
    pub ativo: Option<bool>,
}
