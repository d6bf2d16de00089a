// src/config.rs

use std::env;

use crate::common::error::AppError;

const DEFAULT_LOG_FILTER: &str = "pspc=info";
const DEFAULT_DIAS_INADIMPLENCIA: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "PSPC_LOG_FORMAT deve ser 'compact' ou 'json', recebido '{}'",
                other
            ))),
        }
    }
}

// Configurações da biblioteca (logging + relatórios)
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_filter: String,
    pub log_format: LogFormat,
    // Dias de atraso até uma dívida ativa contar como inadimplente
    pub dias_inadimplencia: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Compact,
            dias_inadimplencia: DEFAULT_DIAS_INADIMPLENCIA,
        }
    }
}

impl Settings {
    /// Carrega do ambiente (e do `.env`, se existir).
    ///
    /// | Variável                  | Padrão      |
    /// |---------------------------|-------------|
    /// | `PSPC_LOG`                | `pspc=info` |
    /// | `PSPC_LOG_FORMAT`         | `compact`   |
    /// | `PSPC_DIAS_INADIMPLENCIA` | `30`        |
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `from_env` para os testes não mexerem no ambiente do processo.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("PSPC_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match lookup("PSPC_LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::Compact,
        };

        let dias_inadimplencia = match lookup("PSPC_DIAS_INADIMPLENCIA") {
            Some(raw) => {
                let dias: i64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!(
                        "PSPC_DIAS_INADIMPLENCIA deve ser um número inteiro, recebido '{}'",
                        raw
                    ))
                })?;
                if dias < 0 {
                    return Err(AppError::Config(
                        "PSPC_DIAS_INADIMPLENCIA não pode ser negativo".to_string(),
                    )
                    .into());
                }
                dias
            }
            None => DEFAULT_DIAS_INADIMPLENCIA,
        };

        Ok(Self {
            log_filter,
            log_format,
            dias_inadimplencia,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.log_filter, "pspc=info");
        assert_eq!(settings.log_format, LogFormat::Compact);
        assert_eq!(settings.dias_inadimplencia, 30);
    }

    #[test]
    fn reads_every_variable() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("PSPC_LOG", "pspc=debug"),
            ("PSPC_LOG_FORMAT", "JSON"),
            ("PSPC_DIAS_INADIMPLENCIA", "90"),
        ]))
        .unwrap();
        assert_eq!(settings.log_filter, "pspc=debug");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.dias_inadimplencia, 90);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Settings::from_lookup(lookup_from(&[("PSPC_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(err.to_string().contains("PSPC_LOG_FORMAT"));
    }

    #[test]
    fn rejects_negative_or_garbage_days() {
        assert!(Settings::from_lookup(lookup_from(&[("PSPC_DIAS_INADIMPLENCIA", "-1")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[("PSPC_DIAS_INADIMPLENCIA", "trinta")])).is_err());
    }
}
