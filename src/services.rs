pub mod relatorio_service;
pub use relatorio_service::RelatorioService;
