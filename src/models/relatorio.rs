// src/models/relatorio.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::datas::Periodo;
use crate::models::categoria::TipoCategoria;

// 1. Resumo financeiro do período
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PeriodoResposta {
    #[schema(example = "01/01/2024")]
    pub ini: String,
    #[schema(example = "31/01/2024")]
    pub fim: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoFinanceiro {
    pub periodo: PeriodoResposta,
    #[schema(example = 100.00)]
    pub total_receitas: Decimal,
    #[schema(example = 40.00)]
    pub total_despesas: Decimal,
    #[schema(example = 60.00)]
    pub saldo_final: Decimal,
}

/// Soma de `valor` agrupada pelo tipo da categoria.
#[derive(Debug, Clone, FromRow)]
pub struct TotalPorTipo {
    pub tipo: TipoCategoria,
    pub total: Decimal,
}

impl ResumoFinanceiro {
    pub fn consolidar(periodo: &Periodo, totais: &[TotalPorTipo]) -> Self {
        let soma = |tipo: TipoCategoria| -> Decimal {
            totais
                .iter()
                .filter(|t| t.tipo == tipo)
                .map(|t| t.total)
                .sum()
        };

        let total_receitas = soma(TipoCategoria::Receita);
        let total_despesas = soma(TipoCategoria::Despesa);

        ResumoFinanceiro {
            periodo: PeriodoResposta {
                ini: periodo.formatar_inicio(),
                fim: periodo.formatar_fim(),
            },
            total_receitas,
            total_despesas,
            saldo_final: total_receitas - total_despesas,
        }
    }
}

// 2. Totais por categoria
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalCategoria {
    pub categoria_id: i32,
    #[schema(example = "Aluguel")]
    pub nome: String,
    #[schema(example = 1200.00)]
    pub total: Decimal,
}

impl TotalCategoria {
    /// Descarta categorias sem movimento positivo e ordena do maior total para o menor.
    pub fn selecionar(mut linhas: Vec<TotalCategoria>) -> Vec<TotalCategoria> {
        linhas.retain(|l| l.total > Decimal::ZERO);
        linhas.sort_by(|a, b| b.total.cmp(&a.total).then(a.categoria_id.cmp(&b.categoria_id)));
        linhas
    }
}

// 3. Pagamentos pendentes
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoPendente {
    pub id: i32,
    pub transacao_id: i32,
    #[schema(example = 350.00)]
    pub valor: Decimal,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub data_pagamento: Option<DateTime<Utc>>,
}

// 4. Saldo por conta
#[derive(Debug, Clone, FromRow)]
pub struct SaldoContaLinha {
    pub conta_id: i32,
    pub nome: String,
    pub saldo_inicial: Decimal,
    pub receitas: Decimal,
    pub despesas: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContaSaldo {
    pub conta_id: i32,
    #[schema(example = "Conta Principal")]
    pub nome: String,
    #[schema(example = 200.00)]
    pub receitas: Decimal,
    #[schema(example = 50.00)]
    pub despesas: Decimal,
    #[schema(example = 650.00)]
    pub saldo: Decimal,
}

impl From<SaldoContaLinha> for ContaSaldo {
    fn from(linha: SaldoContaLinha) -> Self {
        ContaSaldo {
            saldo: linha.saldo_inicial + linha.receitas - linha.despesas,
            conta_id: linha.conta_id,
            nome: linha.nome,
            receitas: linha.receitas,
            despesas: linha.despesas,
        }
    }
}
