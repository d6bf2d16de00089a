// src/models/relatorio.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

// Os valores crus vão junto com o texto já formatado (pt-BR),
// para o exportador de PDF/planilha não precisar formatar de novo.

// 1. Dívidas
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioDividas {
    pub data_referencia: NaiveDate,
    pub data_referencia_formatada: String,

    pub total: usize,
    pub pendentes: usize,
    pub ativas: usize,
    pub pagas: usize,

    pub valor_total: Decimal,
    pub valor_em_aberto: Decimal,
    pub valor_pago: Decimal,

    // Ativas e vencidas há mais de `dias_inadimplencia`
    pub inadimplentes: usize,
    pub valor_inadimplente: Decimal,

    pub valor_total_formatado: String,
    pub valor_em_aberto_formatado: String,
    pub valor_pago_formatado: String,
    pub valor_inadimplente_formatado: String,
}

// 2. Clientes
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioClientes {
    pub total: usize,
    pub ativos: usize,
    pub inativos: usize,

    pub pessoas_fisicas: usize,
    pub pessoas_juridicas: usize,
    pub documentos_invalidos: usize,

    pub com_dividas_em_aberto: usize,
}

// 3. Consultas de CPF/CNPJ
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioConsultas {
    pub total: usize,
    pub negativados: usize,
    pub sem_restricao: usize,
    pub documentos_distintos: usize,

    // 0.0 ..= 1.0
    pub taxa_negativacao: f64,
    pub taxa_negativacao_formatada: String,
}
