// src/models/transacao.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::datas::Periodo;
use crate::models::categoria::{Categoria, TipoCategoria};
use crate::models::pessoa::{Pessoa, TipoPessoa};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transacao {
    #[schema(example = 1)]
    pub id: i32,

    // Vínculos
    pub conta_id: i32,
    pub categoria_id: i32,
    pub pessoa_id: Option<i32>,

    #[schema(example = 250.00)]
    pub valor: Decimal,

    #[schema(value_type = String, format = DateTime, example = "2024-01-10T13:00:00Z")]
    pub data: DateTime<Utc>,

    #[schema(example = "Venda balcão")]
    pub descricao: Option<String>,

    pub ativo: bool,
}

/// Transação com a categoria e a pessoa já resolvidas.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoDetalhe {
    #[serde(flatten)]
    pub transacao: Transacao,
    pub categoria: Categoria,
    pub pessoa: Option<Pessoa>,
}

// Linha do SELECT com JOIN em categoria e LEFT JOIN em pessoa.
#[derive(Debug, FromRow)]
pub struct TransacaoDetalheLinha {
    pub id: i32,
    pub conta_id: i32,
    pub categoria_id: i32,
    pub pessoa_id: Option<i32>,
    pub valor: Decimal,
    pub data: DateTime<Utc>,
    pub descricao: Option<String>,
    pub ativo: bool,

    pub categoria_nome: String,
    pub categoria_tipo: TipoCategoria,
    pub categoria_ativo: bool,

    pub pessoa_nome: Option<String>,
    pub pessoa_tipo: Option<TipoPessoa>,
    pub pessoa_ativo: Option<bool>,
}

impl From<TransacaoDetalheLinha> for TransacaoDetalhe {
    fn from(linha: TransacaoDetalheLinha) -> Self {
        let pessoa = match (linha.pessoa_id, linha.pessoa_nome, linha.pessoa_tipo, linha.pessoa_ativo) {
            (Some(id), Some(nome), Some(tipo), Some(ativo)) => Some(Pessoa { id, nome, tipo, ativo }),
            _ => None,
        };

        TransacaoDetalhe {
            categoria: Categoria {
                id: linha.categoria_id,
                nome: linha.categoria_nome,
                tipo: linha.categoria_tipo,
                ativo: linha.categoria_ativo,
            },
            pessoa,
            transacao: Transacao {
                id: linha.id,
                conta_id: linha.conta_id,
                categoria_id: linha.categoria_id,
                pessoa_id: linha.pessoa_id,
                valor: linha.valor,
                data: linha.data,
                descricao: linha.descricao,
                ativo: linha.ativo,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct NovaTransacao {
    pub conta_id: i32,
    pub categoria_id: i32,
    pub pessoa_id: Option<i32>,
    pub valor: Decimal,
    pub data: DateTime<Utc>,
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AlteracaoTransacao {
    pub conta_id: Option<i32>,
    pub categoria_id: Option<i32>,
    pub pessoa_id: Option<i32>,
    pub valor: Option<Decimal>,
    pub data: Option<DateTime<Utc>>,
    pub descricao: Option<String>,
}

impl AlteracaoTransacao {
    pub fn is_vazia(&self) -> bool {
        self.conta_id.is_none()
            && self.categoria_id.is_none()
            && self.pessoa_id.is_none()
            && self.valor.is_none()
            && self.data.is_none()
            && self.descricao.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransacaoFiltro {
    pub conta_id: Option<i32>,
    pub categoria_id: Option<i32>,
    pub pessoa_id: Option<i32>,
    pub periodo: Periodo,
    pub ativo: Option<bool>,
}
