// src/formatters/numero.rs

use rust_decimal::{Decimal, RoundingStrategy};

use crate::validators::contato::validate_currency;

const CURRENCY_PREFIX: &str = "R$ ";

// Casas extras usadas para enxergar o valor binário "exato" antes de arredondar.
const EXTRA_PRECISION: usize = 40;

// Agrupa de 3 em 3 com '.', da direita para a esquerda.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

fn is_all_zero(parts: &[&str]) -> bool {
    parts.iter().all(|p| p.bytes().all(|b| b == b'0'))
}

/// Arredonda um valor não negativo para `casas` decimais, com empate indo
/// para longe do zero (1,005 em binário é 1,00499..., então vira 1,00).
///
/// Devolve (parte inteira, parte decimal) como dígitos.
fn round_half_away(magnitude: f64, casas: usize) -> (String, String) {
    let exact = format!("{:.*}", casas + EXTRA_PRECISION, magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(casas))
        .collect();

    let round_up = frac_part.as_bytes().get(casas).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - casas;
    let inteiro = digits[..split].iter().map(|b| *b as char).collect();
    let decimal = digits[split..].iter().map(|b| *b as char).collect();
    (inteiro, decimal)
}

fn build_currency(negative: bool, inteiro: &str, centavos: &str) -> String {
    format!(
        "{}{}{},{}",
        CURRENCY_PREFIX,
        if negative { "-" } else { "" },
        group_thousands(inteiro),
        centavos
    )
}

/// `R$ 1.234,56`. Negativos ficam `R$ -1.234,56`. NaN/infinito viram `""`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let (inteiro, centavos) = round_half_away(value.abs(), 2);
    // -0,001 arredonda para zero: sem sinal
    let negative = value < 0.0 && !is_all_zero(&[&inteiro, &centavos]);
    build_currency(negative, &inteiro, &centavos)
}

/// Mesma saída de [`format_currency`] para valores guardados como `Decimal`.
pub fn format_currency_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let texto = format!("{:.2}", rounded.abs());
    let (inteiro, centavos) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));
    build_currency(rounded.is_sign_negative() && !rounded.is_zero(), inteiro, centavos)
}

/// Milhar com '.', decimais (se houver) depois da ',' sem arredondar.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    // `Display` de f64 nunca usa notação científica
    let texto = if value == 0.0 { "0".to_string() } else { value.abs().to_string() };
    let (inteiro, fracao) = match texto.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (texto.as_str(), None),
    };

    let mut out = String::with_capacity(texto.len() + 8);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(inteiro));
    if let Some(f) = fracao {
        out.push(',');
        out.push_str(f);
    }
    out
}

/// `0.105` -> `10,5%`, `1` -> `100%`.
pub fn format_percentage(value: f64) -> String {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return String::new();
    }

    let (inteiro, decimal) = round_half_away(scaled.abs(), 1);
    let negative = scaled < 0.0 && !is_all_zero(&[&inteiro, &decimal]);

    let mut out = String::with_capacity(inteiro.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&inteiro);
    if decimal != "0" {
        out.push(',');
        out.push_str(&decimal);
    }
    out.push('%');
    out
}

// Separa sinal e corpo de "R$ -1.234,56" / "-1.234,56" / "1.234,56".
fn split_currency(input: &str) -> Option<(bool, String)> {
    let mut texto = input.trim();
    if let Some(rest) = texto.strip_prefix("R$") {
        texto = rest.trim_start();
    }
    let (negative, corpo) = match texto.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, texto),
    };
    if !validate_currency(corpo) {
        return None;
    }
    Some((negative, corpo.replace('.', "").replace(',', ".")))
}

/// Inverso de [`format_currency`]. `None` se o texto não estiver no formato `#.###,##`.
pub fn parse_currency(input: &str) -> Option<f64> {
    let (negative, normalizado) = split_currency(input)?;
    let valor: f64 = normalizado.parse().ok()?;
    Some(if negative { -valor } else { valor })
}

pub fn parse_currency_decimal(input: &str) -> Option<Decimal> {
    let (negative, normalizado) = split_currency(input)?;
    let valor: Decimal = normalizado.parse().ok()?;
    Some(if negative { -valor } else { valor })
}
