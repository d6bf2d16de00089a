// src/formatters/telefone.rs

use crate::validators::documento::only_digits;

const MAX_DIGITS: usize = 11;
const DDD_LEN: usize = 2;

/// `(11) 3333-4444` ou `(11) 99999-8888`, aplicado progressivamente.
/// Dígitos além do 11º são descartados.
pub fn format_phone(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(MAX_DIGITS);

    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= DDD_LEN {
        return format!("({}", digits);
    }

    let (ddd, numero) = digits.split_at(DDD_LEN);
    // 8 dígitos locais: 4-4; 9 dígitos (celular): 5-4
    let hifen = if numero.len() > 8 { 5 } else { 4 };

    if numero.len() <= hifen {
        format!("({}) {}", ddd, numero)
    } else {
        let (prefixo, sufixo) = numero.split_at(hifen);
        format!("({}) {}-{}", ddd, prefixo, sufixo)
    }
}
