pub mod data;
pub mod numero;
pub mod telefone;
pub mod texto;
