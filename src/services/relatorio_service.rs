// src/services/relatorio_service.rs

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    config::Settings,
    formatters::{
        data::format_date,
        numero::{format_currency_decimal, format_percentage},
    },
    models::{
        documento::Documento,
        registro::{Cliente, Consulta, Divida, StatusDivida},
        relatorio::{RelatorioClientes, RelatorioConsultas, RelatorioDividas},
    },
    validators::documento::only_digits,
};

/// Agregações dos relatórios. Recebe as linhas já buscadas (e já filtradas
/// por empresa/período) e só conta e soma.
#[derive(Clone)]
pub struct RelatorioService {
    dias_inadimplencia: i64,
}

impl RelatorioService {
    pub fn new(settings: &Settings) -> Self {
        Self::with_dias_inadimplencia(settings.dias_inadimplencia)
    }

    pub fn with_dias_inadimplencia(dias_inadimplencia: i64) -> Self {
        Self { dias_inadimplencia }
    }

    fn inadimplente(&self, divida: &Divida, referencia: NaiveDate) -> bool {
        divida.status == StatusDivida::Ativa
            && referencia.signed_duration_since(divida.vencimento).num_days()
                > self.dias_inadimplencia
    }

    // =========================================================================
    //  1. DÍVIDAS
    // =========================================================================

    pub fn relatorio_dividas(&self, dividas: &[Divida], referencia: NaiveDate) -> RelatorioDividas {
        let mut pendentes = 0;
        let mut ativas = 0;
        let mut pagas = 0;
        let mut inadimplentes = 0;

        let mut valor_total = Decimal::ZERO;
        let mut valor_em_aberto = Decimal::ZERO;
        let mut valor_pago = Decimal::ZERO;
        let mut valor_inadimplente = Decimal::ZERO;

        for divida in dividas {
            valor_total += divida.valor;

            match divida.status {
                StatusDivida::Pendente => pendentes += 1,
                StatusDivida::Ativa => ativas += 1,
                StatusDivida::Paga => pagas += 1,
            }

            if divida.status.em_aberto() {
                valor_em_aberto += divida.valor;
            } else {
                valor_pago += divida.valor;
            }

            if self.inadimplente(divida, referencia) {
                inadimplentes += 1;
                valor_inadimplente += divida.valor;
            }
        }

        tracing::info!(
            total = dividas.len(),
            inadimplentes,
            "📊 Relatório de dívidas gerado"
        );

        RelatorioDividas {
            data_referencia: referencia,
            data_referencia_formatada: format_date(&referencia),
            total: dividas.len(),
            pendentes,
            ativas,
            pagas,
            valor_total,
            valor_em_aberto,
            valor_pago,
            inadimplentes,
            valor_inadimplente,
            valor_total_formatado: format_currency_decimal(valor_total),
            valor_em_aberto_formatado: format_currency_decimal(valor_em_aberto),
            valor_pago_formatado: format_currency_decimal(valor_pago),
            valor_inadimplente_formatado: format_currency_decimal(valor_inadimplente),
        }
    }

    // =========================================================================
    //  2. CLIENTES
    // =========================================================================

    pub fn relatorio_clientes(&self, clientes: &[Cliente], dividas: &[Divida]) -> RelatorioClientes {
        let devedores: HashSet<Uuid> = dividas
            .iter()
            .filter(|d| d.status.em_aberto())
            .map(|d| d.cliente_id)
            .collect();

        let mut relatorio = RelatorioClientes {
            total: clientes.len(),
            ativos: 0,
            inativos: 0,
            pessoas_fisicas: 0,
            pessoas_juridicas: 0,
            documentos_invalidos: 0,
            com_dividas_em_aberto: 0,
        };

        for cliente in clientes {
            if cliente.ativo {
                relatorio.ativos += 1;
            } else {
                relatorio.inativos += 1;
            }

            match Documento::parse(&cliente.documento) {
                Ok(Documento::Cpf(_)) => relatorio.pessoas_fisicas += 1,
                Ok(Documento::Cnpj(_)) => relatorio.pessoas_juridicas += 1,
                Err(e) => {
                    tracing::warn!(cliente_id = %cliente.id, "Cliente com documento inválido: {}", e);
                    relatorio.documentos_invalidos += 1;
                }
            }

            if devedores.contains(&cliente.id) {
                relatorio.com_dividas_em_aberto += 1;
            }
        }

        tracing::info!(total = relatorio.total, "📊 Relatório de clientes gerado");
        relatorio
    }

    // =========================================================================
    //  3. CONSULTAS
    // =========================================================================

    pub fn relatorio_consultas(&self, consultas: &[Consulta]) -> RelatorioConsultas {
        let total = consultas.len();
        let negativados = consultas.iter().filter(|c| c.encontrou_dividas).count();
        let documentos_distintos = consultas
            .iter()
            .map(|c| only_digits(&c.documento))
            .collect::<HashSet<_>>()
            .len();

        let taxa_negativacao = if total == 0 {
            0.0
        } else {
            negativados as f64 / total as f64
        };

        tracing::info!(total, negativados, "📊 Relatório de consultas gerado");

        RelatorioConsultas {
            total,
            negativados,
            sem_restricao: total - negativados,
            documentos_distintos,
            taxa_negativacao,
            taxa_negativacao_formatada: format_percentage(taxa_negativacao),
        }
    }
}
