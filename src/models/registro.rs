// src/models/registro.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    formatters::data::parse_date,
    validators::campos::{
        validar_data, validar_documento, validar_email, validar_senha, validar_telefone,
        validar_valor_positivo,
    },
};

// --- ENUMS ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusDivida {
    Pendente, // Cadastrada, aguardando confirmação
    Ativa,    // Negativação em vigor
    Paga,
}

impl StatusDivida {
    pub fn em_aberto(&self) -> bool {
        matches!(self, StatusDivida::Pendente | StatusDivida::Ativa)
    }
}

// --- LINHAS (já buscadas pela camada de persistência) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: Uuid,
    pub empresa_id: Uuid,

    pub nome: String,
    // Como veio do cadastro: com ou sem máscara
    pub documento: String,

    pub email: Option<String>,
    pub telefone: Option<String>,

    pub ativo: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divida {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub cliente_id: Uuid,

    pub valor: Decimal,
    pub vencimento: NaiveDate,
    pub status: StatusDivida,

    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Consulta de CPF/CNPJ feita por uma empresa
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consulta {
    pub id: Uuid,
    pub empresa_id: Uuid,

    pub documento: String,
    pub encontrou_dividas: bool,

    pub consultado_em: DateTime<Utc>,
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NovoUsuarioPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub nome: String,

    #[validate(custom(function = "validar_email"))]
    pub email: String,

    #[validate(custom(function = "validar_senha"))]
    pub senha: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NovoClientePayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub nome: String,

    #[validate(custom(function = "validar_documento"))]
    pub documento: String,

    #[validate(custom(function = "validar_email"))]
    pub email: Option<String>,

    #[validate(custom(function = "validar_telefone"))]
    pub telefone: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NovaDividaPayload {
    #[validate(required(message = "O campo 'clienteId' é obrigatório."))]
    pub cliente_id: Option<Uuid>,

    #[validate(custom(function = "validar_valor_positivo"))]
    pub valor: Decimal,

    // DD/MM/AAAA, como vem do formulário
    #[validate(custom(function = "validar_data"))]
    pub vencimento: String,

    #[validate(length(max = 255, message = "A descrição deve ter no máximo 255 caracteres."))]
    pub descricao: Option<String>,
}

impl NovaDividaPayload {
    /// `None` se `vencimento` não for uma data DD/MM/AAAA válida.
    pub fn vencimento_date(&self) -> Option<NaiveDate> {
        parse_date(&self.vencimento)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConsultaPayload {
    #[validate(custom(function = "validar_documento"))]
    pub documento: String,
}
