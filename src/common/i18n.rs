// src/common/i18n.rs

use std::collections::HashMap;
use std::sync::LazyLock;

pub const IDIOMA_PADRAO: &str = "pt";

const MENSAGENS_PT: &[(&str, &str)] = &[
    ("recurso.pessoa", "Pessoa"),
    ("recurso.conta", "Conta"),
    ("recurso.categoria", "Categoria"),
    ("recurso.transacao", "Transação"),
    ("recurso.pagamento", "Pagamento"),
    ("erro.nao_encontrado", "{recurso} {id} não encontrado(a)."),
    ("erro.referencia_inativa", "{recurso} {id} está desativado(a)."),
    ("erro.em_uso", "{recurso} {id} ainda é referenciado(a) por outros registros."),
    ("erro.validacao", "Um ou mais campos são inválidos."),
    ("erro.interno", "Ocorreu um erro inesperado."),
    ("motivo.valor_negativo", "O campo '{campo}' deve ser maior ou igual a zero."),
    ("motivo.valor_nao_positivo", "O campo '{campo}' deve ser maior que zero."),
    ("motivo.opcao_invalida", "O campo '{campo}' não contém uma opção válida."),
    ("motivo.data_invalida", "{campo} inválida. Use dd/mm/aaaa."),
    ("motivo.periodo_invertido", "O campo '{campo}' não pode ser anterior à data inicial."),
    ("motivo.pagamento_anterior", "O campo '{campo}' não pode ser anterior à data da transação."),
    ("motivo.posterior_a_pagamento", "O campo '{campo}' não pode ser posterior a um pagamento já registrado."),
    ("motivo.casas_decimais", "O campo '{campo}' aceita no máximo duas casas decimais."),
];

const MENSAGENS_EN: &[(&str, &str)] = &[
    ("recurso.pessoa", "Person"),
    ("recurso.conta", "Account"),
    ("recurso.categoria", "Category"),
    ("recurso.transacao", "Transaction"),
    ("recurso.pagamento", "Payment"),
    ("erro.nao_encontrado", "{recurso} {id} not found."),
    ("erro.referencia_inativa", "{recurso} {id} is inactive."),
    ("erro.em_uso", "{recurso} {id} is still referenced by other records."),
    ("erro.validacao", "One or more fields are invalid."),
    ("erro.interno", "An unexpected error occurred."),
    ("motivo.valor_negativo", "Field '{campo}' must be greater than or equal to zero."),
    ("motivo.valor_nao_positivo", "Field '{campo}' must be greater than zero."),
    ("motivo.opcao_invalida", "Field '{campo}' is not a valid option."),
    ("motivo.data_invalida", "Invalid {campo}. Use dd/mm/yyyy."),
    ("motivo.periodo_invertido", "Field '{campo}' must not be before the start date."),
    ("motivo.pagamento_anterior", "Field '{campo}' must not be before the transaction date."),
    ("motivo.posterior_a_pagamento", "Field '{campo}' must not be after an already recorded payment."),
    ("motivo.casas_decimais", "Field '{campo}' accepts at most two decimal places."),
];

static GLOBAL: LazyLock<I18nStore> = LazyLock::new(I18nStore::default);

/// Tabelas de mensagens por idioma. Idiomas desconhecidos caem no português.
#[derive(Debug, Clone)]
pub struct I18nStore {
    mensagens: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        let mut mensagens = HashMap::new();
        mensagens.insert("pt", MENSAGENS_PT.iter().copied().collect());
        mensagens.insert("en", MENSAGENS_EN.iter().copied().collect());
        Self { mensagens }
    }
}

impl I18nStore {
    pub fn global() -> &'static I18nStore {
        &GLOBAL
    }

    pub fn suporta(&self, idioma: &str) -> bool {
        self.mensagens.contains_key(idioma)
    }

    /// Busca a mensagem e substitui os marcadores `{nome}` pelos parâmetros.
    /// Sem tradução, devolve a própria chave.
    pub fn traduzir(&self, idioma: &str, chave: &str, params: &[(&str, &str)]) -> String {
        let template = self
            .mensagens
            .get(idioma)
            .and_then(|tabela| tabela.get(chave))
            .or_else(|| {
                self.mensagens
                    .get(IDIOMA_PADRAO)
                    .and_then(|tabela| tabela.get(chave))
            })
            .copied()
            .unwrap_or(chave);

        params
            .iter()
            .fold(template.to_string(), |texto, (nome, valor)| {
                texto.replace(&format!("{{{nome}}}"), valor)
            })
    }
}
