// Propriedades do livro-caixa contra um Postgres real.
// Rodar com: DATABASE_URL=postgres://... cargo test -- --ignored

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

use financeiro::{
    common::{
        datas::Periodo,
        error::{AppError, ErrorKind, Motivo, Recurso},
    },
    config::AppState,
    models::{
        categoria::{AlteracaoCategoria, Categoria, NovaCategoria, TipoCategoria},
        conta::{AlteracaoConta, Conta, ContaFiltro, NovaConta},
        pagamento::{AlteracaoPagamento, NovoPagamento, Pagamento, StatusPagamento},
        pessoa::{AlteracaoPessoa, NovaPessoa, TipoPessoa},
        transacao::{AlteracaoTransacao, NovaTransacao, TransacaoDetalhe, TransacaoFiltro},
    },
};

fn dia(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap()
}

async fn conta(state: &AppState, pool: &PgPool, saldo: Decimal) -> Conta {
    state
        .conta_service
        .criar(pool, NovaConta { nome: "Caixa".to_string(), saldo_inicial: saldo })
        .await
        .unwrap()
}

async fn categoria(state: &AppState, pool: &PgPool, nome: &str, tipo: TipoCategoria) -> Categoria {
    state
        .categoria_service
        .criar(pool, NovaCategoria { nome: nome.to_string(), tipo })
        .await
        .unwrap()
}

async fn lancar(
    state: &AppState,
    pool: &PgPool,
    conta: &Conta,
    categoria: &Categoria,
    valor: Decimal,
    data: DateTime<Utc>,
) -> TransacaoDetalhe {
    state
        .transacao_service
        .criar(
            pool,
            NovaTransacao {
                conta_id: conta.id,
                categoria_id: categoria.id,
                pessoa_id: None,
                valor,
                data,
                descricao: None,
            },
        )
        .await
        .unwrap()
}

async fn pagar(
    state: &AppState,
    pool: &PgPool,
    transacao: &TransacaoDetalhe,
    status: StatusPagamento,
    data_pagamento: Option<DateTime<Utc>>,
) -> Pagamento {
    state
        .pagamento_service
        .criar(
            pool,
            NovoPagamento { transacao_id: transacao.transacao.id, status, data_pagamento },
        )
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn create_then_get_returns_the_record(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());

    let criada = state
        .pessoa_service
        .criar(&pool, NovaPessoa { nome: "Ana".to_string(), tipo: TipoPessoa::Cliente })
        .await
        .unwrap();
    let lida = state.pessoa_service.buscar(&pool, criada.id).await.unwrap();

    assert!(lida.id > 0);
    assert_eq!(lida.nome, "Ana");
    assert_eq!(lida.tipo, TipoPessoa::Cliente);
    assert!(lida.ativo);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn empty_update_returns_record_unchanged(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(10)).await;

    let depois = state
        .conta_service
        .atualizar(&pool, c.id, AlteracaoConta::default())
        .await
        .unwrap();
    assert_eq!(depois, c);

    let err = state
        .pessoa_service
        .atualizar(&pool, 9999, AlteracaoPessoa::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn transaction_requires_active_existing_account(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;

    state.conta_service.desativar(&pool, c.id).await.unwrap();

    let nova = |conta_id| NovaTransacao {
        conta_id,
        categoria_id: cat.id,
        pessoa_id: None,
        valor: dec!(10),
        data: dia(1, 12),
        descricao: None,
    };

    let err = state.transacao_service.criar(&pool, nova(c.id)).await.unwrap_err();
    assert!(matches!(err, AppError::InactiveReference { recurso: Recurso::Conta, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    let err = state.transacao_service.criar(&pool, nova(424242)).await.unwrap_err();
    assert!(matches!(err, AppError::ResourceNotFound { recurso: Recurso::Conta, id: 424242 }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn payment_cannot_precede_its_transaction(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Aluguel", TipoCategoria::Despesa).await;
    let t = lancar(&state, &pool, &c, &cat, dec!(900), dia(10, 12)).await;

    let pagamento = |data| NovoPagamento {
        transacao_id: t.transacao.id,
        status: StatusPagamento::Pago,
        data_pagamento: Some(data),
    };

    let err = state
        .pagamento_service
        .criar(&pool, pagamento(dia(10, 12) - Duration::seconds(1)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let ok = state
        .pagamento_service
        .criar(&pool, pagamento(dia(10, 12)))
        .await
        .unwrap();
    assert_eq!(ok.data_pagamento, Some(dia(10, 12)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn moving_transaction_past_a_payment_is_rejected(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let t = lancar(&state, &pool, &c, &cat, dec!(50), dia(5, 9)).await;

    state
        .pagamento_service
        .criar(
            &pool,
            NovoPagamento {
                transacao_id: t.transacao.id,
                status: StatusPagamento::Pago,
                data_pagamento: Some(dia(6, 9)),
            },
        )
        .await
        .unwrap();

    let err = state
        .transacao_service
        .atualizar(
            &pool,
            t.transacao.id,
            AlteracaoTransacao { data: Some(dia(7, 9)), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let movida = state
        .transacao_service
        .atualizar(
            &pool,
            t.transacao.id,
            AlteracaoTransacao { data: Some(dia(6, 9)), ..Default::default() },
        )
        .await
        .unwrap();
    assert_eq!(movida.transacao.data, dia(6, 9));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn value_positivity_is_enforced_on_update_only(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Ajustes", TipoCategoria::Despesa).await;

    let zerada = lancar(&state, &pool, &c, &cat, Decimal::ZERO, dia(2, 8)).await;
    assert_eq!(zerada.transacao.valor, Decimal::ZERO);

    let err = state
        .transacao_service
        .atualizar(
            &pool,
            zerada.transacao.id,
            AlteracaoTransacao { valor: Some(dec!(-1)), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument { campo: "valor", .. }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn period_summary_nets_income_and_expenses(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let receita = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let despesa = categoria(&state, &pool, "Frete", TipoCategoria::Despesa).await;

    lancar(&state, &pool, &c, &receita, dec!(100), dia(15, 10)).await;
    lancar(&state, &pool, &c, &despesa, dec!(40), dia(31, 23)).await;
    // Fora do período
    lancar(&state, &pool, &c, &receita, dec!(999), Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        .await;

    let periodo = Periodo::from_query(Some("01/01/2024"), Some("31/01/2024")).unwrap();
    let resumo = state
        .relatorio_service
        .resumo_financeiro(&pool, &periodo, None)
        .await
        .unwrap();

    assert_eq!(resumo.total_receitas, dec!(100));
    assert_eq!(resumo.total_despesas, dec!(40));
    assert_eq!(resumo.saldo_final, dec!(60));
    assert_eq!(resumo.periodo.ini, "01/01/2024");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn account_balance_adds_opening_balance(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(500)).await;
    let receita = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let despesa = categoria(&state, &pool, "Frete", TipoCategoria::Despesa).await;

    lancar(&state, &pool, &c, &receita, dec!(200), dia(3, 10)).await;
    lancar(&state, &pool, &c, &despesa, dec!(50), dia(4, 10)).await;

    let saldos = state
        .relatorio_service
        .saldos_por_conta(&pool, &Periodo::default())
        .await
        .unwrap();

    assert_eq!(saldos.len(), 1);
    assert_eq!(saldos[0].receitas, dec!(200));
    assert_eq!(saldos[0].despesas, dec!(50));
    assert_eq!(saldos[0].saldo, dec!(650));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn category_totals_skip_categories_without_movement(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let vendas = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let aluguel = categoria(&state, &pool, "Aluguel", TipoCategoria::Despesa).await;
    categoria(&state, &pool, "Parada", TipoCategoria::Despesa).await;

    lancar(&state, &pool, &c, &vendas, dec!(300), dia(2, 10)).await;
    lancar(&state, &pool, &c, &aluguel, dec!(1200), dia(3, 10)).await;

    let totais = state
        .relatorio_service
        .totais_por_categoria(&pool, &Periodo::default(), None)
        .await
        .unwrap();

    let ids: Vec<i32> = totais.iter().map(|t| t.categoria_id).collect();
    assert_eq!(ids, vec![aluguel.id, vendas.id]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn pending_payments_skip_deactivated_transactions(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let viva = lancar(&state, &pool, &c, &cat, dec!(10), dia(1, 10)).await;
    let morta = lancar(&state, &pool, &c, &cat, dec!(20), dia(1, 11)).await;

    for t in [&viva, &morta] {
        state
            .pagamento_service
            .criar(
                &pool,
                NovoPagamento {
                    transacao_id: t.transacao.id,
                    status: StatusPagamento::Pendente,
                    data_pagamento: None,
                },
            )
            .await
            .unwrap();
    }

    state
        .transacao_service
        .desativar(&pool, morta.transacao.id)
        .await
        .unwrap();

    let pendentes = state.relatorio_service.pagamentos_pendentes(&pool).await.unwrap();

    assert_eq!(pendentes.len(), 1);
    assert_eq!(pendentes[0].transacao_id, viva.transacao.id);
    assert_eq!(pendentes[0].valor, dec!(10));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn deleting_a_referenced_account_is_a_conflict(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    lancar(&state, &pool, &c, &cat, dec!(10), dia(1, 10)).await;

    let err = state.conta_service.excluir(&pool, c.id).await.unwrap_err();
    assert!(matches!(err, AppError::ForeignKeyViolation { recurso: Recurso::Conta, .. }));
    assert_eq!(err.kind(), ErrorKind::ConflictUnderlying);

    // Continua lá
    assert!(state.conta_service.buscar(&pool, c.id).await.is_ok());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn listing_without_filters_includes_inactive_rows(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let ativa = conta(&state, &pool, dec!(0)).await;
    let inativa = conta(&state, &pool, dec!(0)).await;
    state.conta_service.desativar(&pool, inativa.id).await.unwrap();

    let todas = state
        .conta_service
        .listar(&pool, &ContaFiltro::default())
        .await
        .unwrap();
    assert_eq!(todas.len(), 2);

    let so_ativas = state
        .conta_service
        .listar(&pool, &ContaFiltro { ativo: Some(true), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(so_ativas.len(), 1);
    assert_eq!(so_ativas[0].id, ativa.id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn transactions_are_listed_by_id(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;

    let primeira = lancar(&state, &pool, &c, &cat, dec!(10), dia(20, 10)).await;
    let segunda = lancar(&state, &pool, &c, &cat, dec!(20), dia(5, 10)).await;

    let lista = state
        .transacao_service
        .listar(&pool, &TransacaoFiltro::default())
        .await
        .unwrap();

    let ids: Vec<i32> = lista.iter().map(|t| t.transacao.id).collect();
    assert_eq!(ids, vec![primeira.transacao.id, segunda.transacao.id]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn money_with_more_than_two_decimals_is_rejected(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());

    let err = state
        .conta_service
        .criar(&pool, NovaConta { nome: "Caixa".to_string(), saldo_inicial: dec!(10.005) })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidArgument { campo: "saldoInicial", motivo: Motivo::CasasDecimais }
    ));

    let c = conta(&state, &pool, dec!(10.05)).await;
    assert_eq!(state.conta_service.buscar(&pool, c.id).await.unwrap(), c);
    assert_eq!(c.saldo_inicial, dec!(10.05));

    let err = state
        .conta_service
        .atualizar(
            &pool,
            c.id,
            AlteracaoConta { saldo_inicial: Some(dec!(1.999)), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let err = state
        .transacao_service
        .criar(
            &pool,
            NovaTransacao {
                conta_id: c.id,
                categoria_id: cat.id,
                pessoa_id: None,
                valor: dec!(0.001),
                data: dia(1, 10),
                descricao: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidArgument { campo: "valor", motivo: Motivo::CasasDecimais }
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn transaction_requires_active_existing_category_and_person(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let ativa = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let inativa = categoria(&state, &pool, "Antiga", TipoCategoria::Receita).await;
    state.categoria_service.desativar(&pool, inativa.id).await.unwrap();

    let pessoa = state
        .pessoa_service
        .criar(&pool, NovaPessoa { nome: "Bia".to_string(), tipo: TipoPessoa::Fornecedor })
        .await
        .unwrap();
    state.pessoa_service.desativar(&pool, pessoa.id).await.unwrap();

    let nova = |categoria_id, pessoa_id| NovaTransacao {
        conta_id: c.id,
        categoria_id,
        pessoa_id,
        valor: dec!(10),
        data: dia(1, 12),
        descricao: None,
    };

    let err = state.transacao_service.criar(&pool, nova(inativa.id, None)).await.unwrap_err();
    assert!(matches!(err, AppError::InactiveReference { recurso: Recurso::Categoria, .. }));

    let err = state.transacao_service.criar(&pool, nova(777, None)).await.unwrap_err();
    assert!(matches!(err, AppError::ResourceNotFound { recurso: Recurso::Categoria, id: 777 }));

    let err = state
        .transacao_service
        .criar(&pool, nova(ativa.id, Some(pessoa.id)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InactiveReference { recurso: Recurso::Pessoa, .. }));

    let err = state
        .transacao_service
        .criar(&pool, nova(ativa.id, Some(888)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ResourceNotFound { recurso: Recurso::Pessoa, id: 888 }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn payment_requires_active_existing_transaction(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let t = lancar(&state, &pool, &c, &cat, dec!(10), dia(1, 10)).await;
    state.transacao_service.desativar(&pool, t.transacao.id).await.unwrap();

    let novo = |transacao_id| NovoPagamento {
        transacao_id,
        status: StatusPagamento::Pendente,
        data_pagamento: None,
    };

    let err = state.pagamento_service.criar(&pool, novo(t.transacao.id)).await.unwrap_err();
    assert!(matches!(err, AppError::InactiveReference { recurso: Recurso::Transacao, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    let err = state.pagamento_service.criar(&pool, novo(999)).await.unwrap_err();
    assert!(matches!(err, AppError::ResourceNotFound { recurso: Recurso::Transacao, id: 999 }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn payment_update_checks_effective_transaction_and_date(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Aluguel", TipoCategoria::Despesa).await;
    let cedo = lancar(&state, &pool, &c, &cat, dec!(100), dia(5, 10)).await;
    let tarde = lancar(&state, &pool, &c, &cat, dec!(200), dia(20, 10)).await;
    let p = pagar(&state, &pool, &cedo, StatusPagamento::Pago, Some(dia(10, 10))).await;

    // Data atual (dia 10) contra a nova transação (dia 20)
    let err = state
        .pagamento_service
        .atualizar(
            &pool,
            p.id,
            AlteracaoPagamento { transacao_id: Some(tarde.transacao.id), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument { campo: "dataPagamento", .. }));

    // Nova data contra a transação atual (dia 5)
    let err = state
        .pagamento_service
        .atualizar(
            &pool,
            p.id,
            AlteracaoPagamento { data_pagamento: Some(dia(4, 10)), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let movido = state
        .pagamento_service
        .atualizar(
            &pool,
            p.id,
            AlteracaoPagamento {
                transacao_id: Some(tarde.transacao.id),
                data_pagamento: Some(dia(20, 10)),
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(movido.transacao_id, tarde.transacao.id);
    assert_eq!(movido.data_pagamento, Some(dia(20, 10)));

    state.transacao_service.desativar(&pool, cedo.transacao.id).await.unwrap();
    let err = state
        .pagamento_service
        .atualizar(
            &pool,
            p.id,
            AlteracaoPagamento { transacao_id: Some(cedo.transacao.id), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn reports_ignore_deactivated_categories(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(100)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    lancar(&state, &pool, &c, &cat, dec!(50), dia(3, 10)).await;

    state.categoria_service.desativar(&pool, cat.id).await.unwrap();

    let resumo = state
        .relatorio_service
        .resumo_financeiro(&pool, &Periodo::default(), None)
        .await
        .unwrap();
    assert_eq!(resumo.total_receitas, Decimal::ZERO);
    assert_eq!(resumo.saldo_final, Decimal::ZERO);

    let saldos = state
        .relatorio_service
        .saldos_por_conta(&pool, &Periodo::default())
        .await
        .unwrap();
    assert_eq!(saldos.len(), 1);
    assert_eq!(saldos[0].receitas, Decimal::ZERO);
    assert_eq!(saldos[0].saldo, dec!(100));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn every_entity_reads_back_and_ignores_empty_updates(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;

    let cat = categoria(&state, &pool, "Frete", TipoCategoria::Despesa).await;
    assert_eq!(state.categoria_service.buscar(&pool, cat.id).await.unwrap(), cat);
    assert_eq!(cat.tipo, TipoCategoria::Despesa);
    let depois = state
        .categoria_service
        .atualizar(&pool, cat.id, AlteracaoCategoria::default())
        .await
        .unwrap();
    assert_eq!(depois, cat);

    let t = lancar(&state, &pool, &c, &cat, dec!(42.50), dia(8, 15)).await;
    assert_eq!(state.transacao_service.buscar(&pool, t.transacao.id).await.unwrap(), t);
    assert_eq!(t.transacao.valor, dec!(42.50));
    assert_eq!(t.categoria, cat);
    let depois = state
        .transacao_service
        .atualizar(&pool, t.transacao.id, AlteracaoTransacao::default())
        .await
        .unwrap();
    assert_eq!(depois, t);

    let p = pagar(&state, &pool, &t, StatusPagamento::Pendente, None).await;
    assert_eq!(state.pagamento_service.buscar(&pool, p.id).await.unwrap(), p);
    assert_eq!(p.status, StatusPagamento::Pendente);
    let depois = state
        .pagamento_service
        .atualizar(&pool, p.id, AlteracaoPagamento::default())
        .await
        .unwrap();
    assert_eq!(depois, p);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres (DATABASE_URL)"]
async fn deactivated_payment_does_not_pin_transaction_date(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let c = conta(&state, &pool, dec!(0)).await;
    let cat = categoria(&state, &pool, "Vendas", TipoCategoria::Receita).await;
    let t = lancar(&state, &pool, &c, &cat, dec!(50), dia(5, 9)).await;
    let p = pagar(&state, &pool, &t, StatusPagamento::Pago, Some(dia(6, 9))).await;

    state.pagamento_service.desativar(&pool, p.id).await.unwrap();

    let movida = state
        .transacao_service
        .atualizar(
            &pool,
            t.transacao.id,
            AlteracaoTransacao { data: Some(dia(7, 9)), ..Default::default() },
        )
        .await
        .unwrap();
    assert_eq!(movida.transacao.data, dia(7, 9));
}
