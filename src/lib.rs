// src/lib.rs

//! Validação de documentos (CPF/CNPJ) e formatação pt-BR para o back-office
//! do P-SPC.
//!
//! As funções de `validators` e `formatters` nunca falham com erro: devolvem
//! `false`, `""` ou [`DATA_INVALIDA`](formatters::data::DATA_INVALIDA).
//! A superfície tipada (`models::documento`) é que usa `Result<_, AppError>`.

pub mod common;
pub mod config;
pub mod formatters;
pub mod models;
pub mod services;
pub mod validators;

pub use common::error::AppError;
pub use config::Settings;
pub use formatters::{
    data::{format_date, format_timestamp_millis, DATA_INVALIDA},
    numero::{format_currency, format_currency_decimal, format_number, format_percentage},
    telefone::format_phone,
    texto::format_text,
};
pub use models::documento::{Cnpj, Cpf, Documento, TipoDocumento};
pub use services::relatorio_service::RelatorioService;
pub use validators::{
    contato::{validate_currency, validate_date, validate_email, validate_password, validate_phone},
    documento::{format_cnpj, format_cpf, validate_cnpj, validate_cpf},
};
