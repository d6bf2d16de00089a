// src/validators/contato.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::formatters::data::parse_date;
use crate::validators::documento::only_digits;

// Propositalmente permissivo: um '@', nada de espaço, e um '.' depois do '@'.
// Não é RFC 5322.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex de e-mail válida"));

// 1.234.567,89 (milhar com ponto, sempre 2 casas). Só dígitos ASCII: `\d` aceitaria ١ ou １.
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{3})*,[0-9]{2}$").expect("regex de moeda válida"));

const PASSWORD_MIN_LEN: usize = 6;

pub fn validate_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// 10 dígitos (fixo com DDD) ou 11 (celular com DDD).
pub fn validate_phone(input: &str) -> bool {
    matches!(only_digits(input).len(), 10 | 11)
}

/// Mínimo de 6 caracteres, ao menos uma letra e um número.
///
/// Só aceita letras e números ASCII: pontuação ou acento reprovam a senha inteira.
pub fn validate_password(input: &str) -> bool {
    input.len() >= PASSWORD_MIN_LEN
        && input.bytes().all(|b| b.is_ascii_alphanumeric())
        && input.bytes().any(|b| b.is_ascii_alphabetic())
        && input.bytes().any(|b| b.is_ascii_digit())
}

/// `DD/MM/YYYY` que exista no calendário (rejeita `31/02/2024`).
pub fn validate_date(input: &str) -> bool {
    parse_date(input).is_some()
}

/// `#.###,##`: não valida magnitude, só o formato.
pub fn validate_currency(input: &str) -> bool {
    CURRENCY_RE.is_match(input)
}
