// src/common/datas.rs

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::common::error::{AppError, Motivo};

pub const FORMATO_DATA_BR: &str = "%d/%m/%Y";

/// Lê uma data `dd/mm/aaaa` vinda de query string. Vazio conta como ausente.
pub fn parse_data_br(valor: Option<&str>, campo: &'static str) -> Result<Option<NaiveDate>, AppError> {
    match valor.map(str::trim) {
        None | Some("") => Ok(None),
        Some(texto) => NaiveDate::parse_from_str(texto, FORMATO_DATA_BR)
            .map(Some)
            .map_err(|_| AppError::invalid_argument(campo, Motivo::DataInvalida)),
    }
}

// =========================================================================
//  PERÍODO (filtro de datas com granularidade de dia, inclusivo nas pontas)
// =========================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Periodo {
    pub inicio: Option<NaiveDate>,
    pub fim: Option<NaiveDate>,
}

impl Periodo {
    pub fn from_query(data_ini: Option<&str>, data_fim: Option<&str>) -> Result<Self, AppError> {
        let inicio = parse_data_br(data_ini, "dataIni")?;
        let fim = parse_data_br(data_fim, "dataFim")?;

        if let (Some(i), Some(f)) = (inicio, fim) {
            if f < i {
                return Err(AppError::invalid_argument("dataFim", Motivo::PeriodoInvertido));
            }
        }

        Ok(Self { inicio, fim })
    }

    /// Início do primeiro dia, em UTC.
    pub fn limite_inferior(&self) -> Option<DateTime<Utc>> {
        self.inicio.map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Início do dia seguinte ao último, para comparar com `<`.
    pub fn limite_superior_exclusivo(&self) -> Option<DateTime<Utc>> {
        self.fim
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    // Mesma regra que os filtros SQL aplicam.
    #[cfg(test)]
    pub(crate) fn contem(&self, instante: DateTime<Utc>) -> bool {
        self.limite_inferior().is_none_or(|ini| instante >= ini)
            && self.limite_superior_exclusivo().is_none_or(|fim| instante < fim)
    }

    pub fn formatar_inicio(&self) -> String {
        formatar(self.inicio)
    }

    pub fn formatar_fim(&self) -> String {
        formatar(self.fim)
    }
}

fn formatar(data: Option<NaiveDate>) -> String {
    data.map(|d| d.format(FORMATO_DATA_BR).to_string())
        .unwrap_or_default()
}

// =========================================================================
//  DATA/HORA EM PAYLOADS
// =========================================================================

/// Aceita RFC 3339 com fuso (convertido para UTC) ou data/hora sem fuso (lida como UTC).
pub fn parse_data_hora(texto: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(texto) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(texto, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(texto, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}

pub fn deserialize_data_hora<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let texto = String::deserialize(deserializer)?;
    parse_data_hora(&texto)
        .ok_or_else(|| serde::de::Error::custom(format!("data/hora inválida: '{texto}'")))
}

pub fn deserialize_data_hora_opcional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(texto) => parse_data_hora(&texto)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("data/hora inválida: '{texto}'"))),
    }
}
