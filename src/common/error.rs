// src/common/error.rs

use thiserror::Error;

// Erros da superfície tipada (Cpf, Cnpj, Documento, Settings).
// As funções de validação/formatação "cruas" NUNCA retornam isso:
// elas devolvem `false`, `""` ou "Data inválida".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("CPF inválido")]
    InvalidCpf,

    #[error("CNPJ inválido")]
    InvalidCnpj,

    #[error("Documento inválido: esperado CPF (11 dígitos) ou CNPJ (14 dígitos), recebido {0} dígito(s)")]
    InvalidDocumento(usize),

    #[error("Configuração inválida: {0}")]
    Config(String),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Código estável para quem precisa mapear o erro (ex: camada HTTP).
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InvalidCpf => "INVALID_CPF",
            AppError::InvalidCnpj => "INVALID_CNPJ",
            AppError::InvalidDocumento(_) => "INVALID_DOCUMENT",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_ERROR",
        }
    }

    /// Mensagens de validação por campo, no formato que o front espera:
    /// `{ "cpf": ["CPF inválido."] }`.
    pub fn field_messages(&self) -> std::collections::HashMap<String, Vec<String>> {
        let mut details = std::collections::HashMap::new();
        if let AppError::ValidationError(errors) = self {
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                details.insert(field.to_string(), messages);
            }
        }
        details
    }
}
