pub mod pessoa_repo;
pub use pessoa_repo::PessoaRepository;
pub mod conta_repo;
pub use conta_repo::ContaRepository;
pub mod categoria_repo;
pub use categoria_repo::CategoriaRepository;
pub mod transacao_repo;
pub use transacao_repo::TransacaoRepository;
pub mod pagamento_repo;
pub use pagamento_repo::PagamentoRepository;
pub mod relatorio_repo;
pub use relatorio_repo::RelatorioRepository;
