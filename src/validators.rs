pub mod campos;
pub mod contato;
pub mod documento;
