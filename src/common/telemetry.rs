// src/common/telemetry.rs

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, Settings};

/// Inicializa o logger global.
///
/// Usa `try_init`: se a aplicação hospedeira já instalou um subscriber,
/// a chamada vira no-op e devolve `false`.
pub fn init(settings: &Settings) -> bool {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("pspc=info"));

    let result = match settings.log_format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .try_init(),
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ Logger inicializado ({:?})", settings.log_format);
            true
        }
        Err(_) => false,
    }
}
