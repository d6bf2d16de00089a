pub mod documento;
pub mod registro;
pub mod relatorio;
