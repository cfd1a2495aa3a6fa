// src/services/validacao.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::{AppError, Motivo, Recurso},
    models::{categoria::Categoria, conta::Conta, pessoa::Pessoa, transacao::Transacao},
};

/// Registro que pode ser alvo de uma chave estrangeira.
pub trait Referenciavel {
    const RECURSO: Recurso;

    fn ativo(&self) -> bool;
}

impl Referenciavel for Pessoa {
    const RECURSO: Recurso = Recurso::Pessoa;

    fn ativo(&self) -> bool {
        self.ativo
    }
}

impl Referenciavel for Conta {
    const RECURSO: Recurso = Recurso::Conta;

    fn ativo(&self) -> bool {
        self.ativo
    }
}

impl Referenciavel for Categoria {
    const RECURSO: Recurso = Recurso::Categoria;

    fn ativo(&self) -> bool {
        self.ativo
    }
}

impl Referenciavel for Transacao {
    const RECURSO: Recurso = Recurso::Transacao;

    fn ativo(&self) -> bool {
        self.ativo
    }
}

/// Inexistente -> NotFound, desativado -> InvalidState.
pub fn exigir_ativo<T: Referenciavel>(registro: Option<T>, id: i32) -> Result<T, AppError> {
    match registro {
        None => Err(AppError::not_found(T::RECURSO, id)),
        Some(r) if !r.ativo() => {
            tracing::warn!("Referência recusada: {} {} está desativado(a)", T::RECURSO, id);
            Err(AppError::InactiveReference { recurso: T::RECURSO, id })
        }
        Some(r) => Ok(r),
    }
}

/// Valores monetários são gravados em NUMERIC(14, 2); mais casas seriam arredondadas.
pub fn validar_casas_decimais(campo: &'static str, valor: Decimal) -> Result<(), AppError> {
    if valor.normalize().scale() > 2 {
        return Err(AppError::invalid_argument(campo, Motivo::CasasDecimais));
    }
    Ok(())
}

pub fn validar_saldo_inicial(saldo: Decimal) -> Result<(), AppError> {
    if saldo < Decimal::ZERO {
        return Err(AppError::invalid_argument("saldoInicial", Motivo::ValorNegativo));
    }
    validar_casas_decimais("saldoInicial", saldo)
}

pub fn validar_valor_positivo(valor: Decimal) -> Result<(), AppError> {
    if valor <= Decimal::ZERO {
        return Err(AppError::invalid_argument("valor", Motivo::ValorNaoPositivo));
    }
    Ok(())
}

// Data igual à da transação é aceita.
pub fn validar_data_pagamento(
    data_pagamento: Option<DateTime<Utc>>,
    data_transacao: DateTime<Utc>,
) -> Result<(), AppError> {
    match data_pagamento {
        Some(data) if data < data_transacao => Err(AppError::invalid_argument(
            "dataPagamento",
            Motivo::PagamentoAnteriorATransacao,
        )),
        _ => Ok(()),
    }
}
