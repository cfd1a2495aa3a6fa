// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Pessoas ---
        handlers::pessoas::listar_pessoas,
        handlers::pessoas::buscar_pessoa,
        handlers::pessoas::criar_pessoa,
        handlers::pessoas::atualizar_pessoa,
        handlers::pessoas::desativar_pessoa,
        handlers::pessoas::excluir_pessoa,

        // --- Contas ---
        handlers::contas::listar_contas,
        handlers::contas::buscar_conta,
        handlers::contas::criar_conta,
        handlers::contas::atualizar_conta,
        handlers::contas::desativar_conta,
        handlers::contas::excluir_conta,

        // --- Categorias ---
        handlers::categorias::listar_categorias,
        handlers::categorias::buscar_categoria,
        handlers::categorias::criar_categoria,
        handlers::categorias::atualizar_categoria,
        handlers::categorias::desativar_categoria,
        handlers::categorias::excluir_categoria,

        // --- Transações ---
        handlers::transacoes::listar_transacoes,
        handlers::transacoes::buscar_transacao,
        handlers::transacoes::criar_transacao,
        handlers::transacoes::atualizar_transacao,
        handlers::transacoes::desativar_transacao,
        handlers::transacoes::excluir_transacao,

        // --- Pagamentos ---
        handlers::pagamentos::listar_pagamentos,
        handlers::pagamentos::buscar_pagamento,
        handlers::pagamentos::criar_pagamento,
        handlers::pagamentos::atualizar_pagamento,
        handlers::pagamentos::desativar_pagamento,
        handlers::pagamentos::excluir_pagamento,

        // --- Relatórios ---
        handlers::relatorios::resumo_financeiro,
        handlers::relatorios::transacoes_por_categoria,
        handlers::relatorios::pagamentos_pendentes,
        handlers::relatorios::contas_saldo,
    ),
    components(
        schemas(
            // --- Registros ---
            models::pessoa::TipoPessoa,
            models::pessoa::Pessoa,
            models::conta::Conta,
            models::categoria::TipoCategoria,
            models::categoria::Categoria,
            models::transacao::Transacao,
            models::transacao::TransacaoDetalhe,
            models::pagamento::StatusPagamento,
            models::pagamento::Pagamento,

            // --- Relatórios ---
            models::relatorio::PeriodoResposta,
            models::relatorio::ResumoFinanceiro,
            models::relatorio::TotalCategoria,
            models::relatorio::PagamentoPendente,
            models::relatorio::ContaSaldo,

            // --- Payloads ---
            handlers::IdResposta,
            handlers::pessoas::CriarPessoaPayload,
            handlers::pessoas::AtualizarPessoaPayload,
            handlers::contas::CriarContaPayload,
            handlers::contas::AtualizarContaPayload,
            handlers::categorias::CriarCategoriaPayload,
            handlers::categorias::AtualizarCategoriaPayload,
            handlers::transacoes::CriarTransacaoPayload,
            handlers::transacoes::AtualizarTransacaoPayload,
            handlers::pagamentos::CriarPagamentoPayload,
            handlers::pagamentos::AtualizarPagamentoPayload,
        )
    ),
    tags(
        (name = "Pessoas", description = "Clientes e fornecedores"),
        (name = "Contas", description = "Contas financeiras e saldo inicial"),
        (name = "Categorias", description = "Categorias de receita e despesa"),
        (name = "Transações", description = "Movimentações vinculadas a conta, categoria e pessoa"),
        (name = "Pagamentos", description = "Liquidação das transações"),
        (name = "Relatórios", description = "Resumo, totais por categoria, pendências e saldos")
    )
)]
pub struct ApiDoc;
