// src/formatters/texto.rs

// Ficam minúsculas quando não são a primeira palavra
const PREPOSICOES: &[&str] = &["da", "de", "do", "das", "dos", "e", "&"];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"joão da silva"` -> `"João da Silva"`.
///
/// Espaços repetidos viram um só; texto vazio (ou só espaços) volta igual.
pub fn format_text(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }

    input
        .split(' ')
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && PREPOSICOES.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
