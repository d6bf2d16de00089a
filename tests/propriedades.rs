// tests/propriedades.rs

use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};
use pspc::{
    formatters::{data::parse_date, numero::parse_currency},
    validators::documento::only_digits,
    *,
};

// Semente fixa: mesma sequência em toda execução
fn digits(rng: &mut StdRng, n: usize) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(0..10)).collect()
}

fn dv(sum: u32) -> u32 {
    let r = 11 - sum % 11;
    if r > 9 { 0 } else { r }
}

fn with_cpf_check_digits(mut base: Vec<u32>) -> String {
    let first = dv(base.iter().enumerate().map(|(i, d)| d * (10 - i as u32)).sum());
    base.push(first);
    let second = dv(base.iter().enumerate().map(|(i, d)| d * (11 - i as u32)).sum());
    base.push(second);
    base.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect()
}

fn with_cnpj_check_digits(mut base: Vec<u32>) -> String {
    const W1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const W2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    let first = dv(base.iter().zip(W1).map(|(d, w)| d * w).sum());
    base.push(first);
    let second = dv(base.iter().zip(W2).map(|(d, w)| d * w).sum());
    base.push(second);
    base.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect()
}

fn bump_digit(s: &str, index: usize) -> String {
    s.char_indices()
        .map(|(i, c)| {
            if i == index {
                char::from_digit((c.to_digit(10).unwrap() + 1) % 10, 10).unwrap()
            } else {
                c
            }
        })
        .collect()
}

fn all_same(s: &str) -> bool {
    s.chars().all(|c| Some(c) == s.chars().next())
}

#[test]
fn cpf_examples() {
    assert!(validate_cpf("529.982.247-25"));
    assert!(validate_cpf("52998224725"));
    assert!(!validate_cpf("111.111.111-11"));
    assert!(!validate_cpf("123.456.789-00"));
}

#[test]
fn cnpj_examples() {
    assert!(validate_cnpj("11.222.333/0001-81"));
    assert!(validate_cnpj("11.444.777/0001-61"));
    assert!(!validate_cnpj("00000000000000"));
}

#[test]
fn generated_cpfs_validate_and_altered_ones_do_not() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let cpf = with_cpf_check_digits(digits(&mut rng, 9));
        if all_same(&cpf) {
            continue;
        }
        assert!(validate_cpf(&cpf), "{cpf}");
        assert!(validate_cpf(&format_cpf(&cpf)), "{cpf}");
        assert!(!validate_cpf(&bump_digit(&cpf, 9)), "{cpf}");
        assert!(!validate_cpf(&bump_digit(&cpf, 10)), "{cpf}");
        assert!(!validate_cpf(&cpf[..10]));
        assert!(!validate_cpf(&format!("{cpf}0")));
    }
}

#[test]
fn generated_cnpjs_validate_and_altered_ones_do_not() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let cnpj = with_cnpj_check_digits(digits(&mut rng, 12));
        if all_same(&cnpj) {
            continue;
        }
        assert!(validate_cnpj(&cnpj), "{cnpj}");
        assert!(validate_cnpj(&format_cnpj(&cnpj)), "{cnpj}");
        assert!(!validate_cnpj(&bump_digit(&cnpj, 12)), "{cnpj}");
        assert!(!validate_cnpj(&bump_digit(&cnpj, 13)), "{cnpj}");
        assert!(!validate_cnpj(&cnpj[..13]));
    }
}

#[test]
fn masks_never_drop_or_reorder_digits() {
    let mut rng = StdRng::seed_from_u64(2024);
    for len in 0..=20 {
        let raw: String = digits(&mut rng, len)
            .iter()
            .map(|d| char::from_digit(*d, 10).unwrap())
            .collect();
        let noisy = format!(" {raw}-x");
        assert_eq!(only_digits(&format_cpf(&noisy)), raw);
        assert_eq!(only_digits(&format_cnpj(&noisy)), raw);
        // Máscara aplicada sobre máscara não muda nada
        assert_eq!(format_cpf(&format_cpf(&raw)), format_cpf(&raw));
        assert_eq!(format_cnpj(&format_cnpj(&raw)), format_cnpj(&raw));
    }
    assert_eq!(format_cpf("12345678"), "123.456.78");
}

#[test]
fn phone_mask_keeps_first_eleven_digits() {
    let mut rng = StdRng::seed_from_u64(99);
    for len in 0..=14 {
        let raw: String = digits(&mut rng, len)
            .iter()
            .map(|d| char::from_digit(*d, 10).unwrap())
            .collect();
        let formatted = format_phone(&raw);
        assert_eq!(only_digits(&formatted), raw[..len.min(11)]);
        assert_eq!(format_phone(&formatted), formatted);
    }
}

#[test]
fn currency_examples() {
    assert_eq!(format_currency(0.0), "R$ 0,00");
    assert_eq!(format_currency(1000.0), "R$ 1.000,00");
    assert_eq!(format_currency(f64::NAN), "");
    assert_eq!(format_currency(-1000.0), "R$ -1.000,00");
}

#[test]
fn currency_is_idempotent_through_parse() {
    let values = [0.0, 0.01, 1.0, 12.5, 999.99, 1000.0, 123456.78, -42.1, -1234567.89];
    for v in values {
        let once = format_currency(v);
        let parsed = parse_currency(&once).unwrap();
        assert_eq!(format_currency(parsed), once, "valor {v}");
    }
}

#[test]
fn percentage_examples() {
    assert_eq!(format_percentage(1.0), "100%");
    assert_eq!(format_percentage(0.105), "10,5%");
}

#[test]
fn date_examples() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(format_date(&d), "01/01/2024");
    assert_eq!(format_timestamp_millis(f64::NAN), "Data inválida");
    assert_eq!(DATA_INVALIDA, "Data inválida");

    let again = parse_date(&format_date(&d)).unwrap();
    assert_eq!(format_date(&again), "01/01/2024");
}

#[test]
fn text_examples() {
    assert_eq!(format_text("joão da silva"), "João da Silva");
    assert_eq!(format_text("ANA DE SOUZA"), "Ana de Souza");
    assert_eq!(format_text(&format_text("ANA DE SOUZA")), "Ana de Souza");
}

#[test]
fn odd_input_gets_sentinels() {
    let sem_digitos = ["", " ", "ção", "🙂🙂🙂", "@", "//", "R$", "-", "\u{0}", "١٢٣"];
    for s in sem_digitos {
        assert!(!validate_cpf(s), "{s:?}");
        assert!(!validate_cnpj(s), "{s:?}");
        assert!(!validate_email(s), "{s:?}");
        assert!(!validate_phone(s), "{s:?}");
        assert!(!validate_password(s), "{s:?}");
        assert!(!validate_date(s), "{s:?}");
        assert!(!validate_currency(s), "{s:?}");
        assert_eq!(format_cpf(s), "", "{s:?}");
        assert_eq!(format_cnpj(s), "", "{s:?}");
        assert_eq!(format_phone(s), "", "{s:?}");
    }

    assert_eq!(format_text(""), "");
    assert_eq!(format_text(" "), " ");
    assert_eq!(format_text("ção"), "Ção");

    assert!(!validate_date("12/34/5678"));
    assert_eq!(format_cpf("12/34/5678"), "123.456.78");
}

#[test]
fn parse_currency_accepts_exactly_what_validate_currency_accepts() {
    let inputs = [
        "0,00", "1.000,00", "999.999,99", "1000,00", "1.000,0", "١.٠٠٠,٠٠", "１,００", "12,345",
    ];
    for s in inputs {
        assert_eq!(parse_currency(s).is_some(), validate_currency(s), "{s:?}");
    }
}

#[test]
fn document_masks_hyphenate_last_two_digits() {
    assert_eq!(format_cpf("123456789012"), "123.456.7890-12");
    assert_eq!(format_cnpj("112223330001812"), "11.222.333/00018-12");
}

#[test]
fn timestamp_edges_render_dates() {
    assert_eq!(format_timestamp_millis(8.64e15), "13/09/275760");
    assert_eq!(format_timestamp_millis(-8.64e15), "20/04/-271821");
    assert_eq!(format_timestamp_millis(8.64e15 + 1.0), DATA_INVALIDA);
}
