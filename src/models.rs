pub mod categoria;
pub mod conta;
pub mod pagamento;
pub mod pessoa;
pub mod relatorio;
pub mod transacao;
