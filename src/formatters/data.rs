// src/formatters/data.rs

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;

/// Sentinela devolvida para qualquer data que não represente um instante válido.
pub const DATA_INVALIDA: &str = "Data inválida";

// Limite de ±100.000.000 dias em milissegundos (faixa usual de timestamps em ms)
const MAX_TIMESTAMP_MILLIS: f64 = 8.64e15;
const MILLIS_PER_DAY: i64 = 86_400_000;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("regex de data válida")
});

// Ano negativo: sinal fora do preenchimento (-0001, não -001)
fn format_ymd(day: u32, month: u32, year: i64) -> String {
    if year < 0 {
        format!("{:02}/{:02}/-{:04}", day, month, year.unsigned_abs())
    } else {
        format!("{:02}/{:02}/{:04}", day, month, year)
    }
}

/// `DD/MM/YYYY`.
pub fn format_date<D: Datelike>(date: &D) -> String {
    format_ymd(date.day(), date.month(), i64::from(date.year()))
}

pub fn format_date_opt<D: Datelike>(date: Option<&D>) -> String {
    match date {
        Some(d) => format_date(d),
        None => DATA_INVALIDA.to_string(),
    }
}

/// Dias desde 1970-01-01 -> (ano, mês, dia) no calendário gregoriano proleptico.
///
/// Cobre a faixa inteira de [`format_timestamp_millis`], que vai além do
/// `NaiveDate` do chrono (±262.142).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Formata um timestamp (ms desde a época, UTC).
///
/// NaN, infinito e valores fora de ±8,64e15 ms viram [`DATA_INVALIDA`].
pub fn format_timestamp_millis(millis: f64) -> String {
    if !millis.is_finite() || millis.abs() > MAX_TIMESTAMP_MILLIS {
        return DATA_INVALIDA.to_string();
    }

    let millis = millis.trunc() as i64;
    match DateTime::from_timestamp_millis(millis) {
        Some(instant) => format_date(&instant.date_naive()),
        None => {
            let (year, month, day) = civil_from_days(millis.div_euclid(MILLIS_PER_DAY));
            format_ymd(day, month, year)
        }
    }
}

/// Lê `DD/MM/YYYY` e só aceita se a data existir no calendário.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(input)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
