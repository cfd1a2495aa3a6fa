pub mod validacao;

pub mod pessoa_service;
pub use pessoa_service::PessoaService;
pub mod conta_service;
pub use conta_service::ContaService;
pub mod categoria_service;
pub use categoria_service::CategoriaService;
pub mod transacao_service;
pub use transacao_service::TransacaoService;
pub mod pagamento_service;
pub use pagamento_service::PagamentoService;
pub mod relatorio_service;
pub use relatorio_service::RelatorioService;
