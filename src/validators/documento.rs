// src/validators/documento.rs

// =============================================================================
//  CPF / CNPJ: dígitos verificadores + máscaras progressivas
// =============================================================================

pub const CPF_LEN: usize = 11;
pub const CNPJ_LEN: usize = 14;

// Posição (índice do dígito) -> separador inserido ANTES dele
const CPF_MASK: &[(usize, char)] = &[(3, '.'), (6, '.')];
const CNPJ_MASK: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/')];

// Índice mínimo do '-'; acima do tamanho completo ele fica antes dos 2 últimos
const CPF_HYPHEN: usize = 9;
const CNPJ_HYPHEN: usize = 12;

/// Remove tudo que não for dígito ASCII.
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn to_numbers(digits: &str) -> Vec<u32> {
    digits.bytes().map(|b| u32::from(b - b'0')).collect()
}

fn all_same(numbers: &[u32]) -> bool {
    numbers.windows(2).all(|w| w[0] == w[1])
}

// 11 - (soma mod 11); acima de 9 vira 0
fn check_digit(sum: u32) -> u32 {
    let remainder = 11 - (sum % 11);
    if remainder > 9 { 0 } else { remainder }
}

// Pesos do CNPJ: descem até 2 e voltam para 9
fn cnpj_weighted_sum(numbers: &[u32], start_weight: u32) -> u32 {
    let mut weight = start_weight;
    let mut sum = 0;
    for n in numbers {
        sum += n * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }
    sum
}

fn cpf_weighted_sum(numbers: &[u32]) -> u32 {
    let top = numbers.len() as u32 + 1;
    numbers
        .iter()
        .enumerate()
        .map(|(i, n)| n * (top - i as u32))
        .sum()
}

pub fn validate_cpf(input: &str) -> bool {
    let digits = only_digits(input);
    if digits.len() != CPF_LEN {
        tracing::debug!(digitos = digits.len(), "CPF rejeitado: quantidade de dígitos");
        return false;
    }

    let numbers = to_numbers(&digits);
    if all_same(&numbers) {
        tracing::debug!("CPF rejeitado: sequência repetida");
        return false;
    }

    let first = check_digit(cpf_weighted_sum(&numbers[..9]));
    if first != numbers[9] {
        tracing::debug!("CPF rejeitado: primeiro dígito verificador");
        return false;
    }

    let second = check_digit(cpf_weighted_sum(&numbers[..10]));
    if second != numbers[10] {
        tracing::debug!("CPF rejeitado: segundo dígito verificador");
        return false;
    }

    true
}

pub fn validate_cnpj(input: &str) -> bool {
    let digits = only_digits(input);
    if digits.len() != CNPJ_LEN {
        tracing::debug!(digitos = digits.len(), "CNPJ rejeitado: quantidade de dígitos");
        return false;
    }

    let numbers = to_numbers(&digits);
    if all_same(&numbers) {
        tracing::debug!("CNPJ rejeitado: sequência repetida");
        return false;
    }

    let first = check_digit(cnpj_weighted_sum(&numbers[..12], 5));
    if first != numbers[12] {
        tracing::debug!("CNPJ rejeitado: primeiro dígito verificador");
        return false;
    }

    let second = check_digit(cnpj_weighted_sum(&numbers[..13], 6));
    if second != numbers[13] {
        tracing::debug!("CNPJ rejeitado: segundo dígito verificador");
        return false;
    }

    true
}

/// CPF se tiver 11 dígitos, CNPJ se tiver 14. Qualquer outra coisa é inválida.
pub fn validate_documento(input: &str) -> bool {
    match only_digits(input).len() {
        CPF_LEN => validate_cpf(input),
        CNPJ_LEN => validate_cnpj(input),
        n => {
            tracing::debug!(digitos = n, "Documento rejeitado: nem CPF nem CNPJ");
            false
        }
    }
}

// Máscara por índice: só coloca o separador se existir dígito depois dele.
// O '-' nunca fica antes de mais de 2 dígitos.
fn apply_mask(digits: &str, mask: &[(usize, char)], hyphen_min: usize) -> String {
    let len = digits.len();
    let hyphen_at = hyphen_min.max(len.saturating_sub(2));

    let mut out = String::with_capacity(len + mask.len() + 1);
    for (i, c) in digits.chars().enumerate() {
        if let Some((_, sep)) = mask.iter().find(|(pos, _)| *pos == i) {
            out.push(*sep);
        } else if i == hyphen_at {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// `123.456.789-01`, aplicado progressivamente (`"1234567"` -> `"123.456.7"`).
pub fn format_cpf(input: &str) -> String {
    apply_mask(&only_digits(input), CPF_MASK, CPF_HYPHEN)
}

/// `12.345.678/0001-90`, aplicado progressivamente.
pub fn format_cnpj(input: &str) -> String {
    apply_mask(&only_digits(input), CNPJ_MASK, CNPJ_HYPHEN)
}

/// Até 11 dígitos usa a máscara de CPF; acima disso, a de CNPJ.
pub fn format_documento(input: &str) -> String {
    let digits = only_digits(input);
    if digits.len() <= CPF_LEN {
        apply_mask(&digits, CPF_MASK, CPF_HYPHEN)
    } else {
        apply_mask(&digits, CNPJ_MASK, CNPJ_HYPHEN)
    }
}
