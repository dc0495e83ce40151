// ==========================================
// Extrator de Contatos - Processamento da planilha
// ==========================================
// Responsabilidade: fluxo completo de uma extração
// Fluxo: schema → mapeamento → linhas → deduplicação final
// ==========================================

use crate::config::ExtractorConfig;
use crate::domain::{ExtractionOutcome, StudentRecord};
use crate::engine::row_processor::{RowProcessor, SheetState};
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{RawTable, UniversalFileParser};
use crate::importer::schema::validate_columns;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// SheetProcessor - extração completa
// ==========================================
#[derive(Default)]
pub struct SheetProcessor {
    config: ExtractorConfig,
}

impl SheetProcessor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Lê e processa um arquivo de planilha (.xlsx/.xls/.csv)
    pub fn process_file<P: AsRef<Path>>(
        &self,
        path: P,
        unit_code: &str,
    ) -> ImportResult<ExtractionOutcome> {
        let table = UniversalFileParser.parse(path)?;
        self.process(&table, unit_code)
    }

    /// Processa uma tabela já carregada em memória
    ///
    /// A validação de schema roda uma única vez, antes de qualquer
    /// linha; as ocorrências por linha nunca abortam a execução.
    #[instrument(skip(self, table), fields(unidade = %unit_code, linhas = table.rows.len()))]
    pub fn process(&self, table: &RawTable, unit_code: &str) -> ImportResult<ExtractionOutcome> {
        let start_time = Instant::now();
        info!(linhas = table.rows.len(), "iniciando processamento da planilha");

        // === Etapa 1: validação de schema ===
        debug!("etapa 1: validação de schema");
        if let Err(e) = validate_columns(&table.headers) {
            error!(erro = %e, "schema da planilha inválido");
            return Err(e);
        }

        // === Etapa 2: mapeamento de campos ===
        debug!("etapa 2: mapeamento de campos");
        let mapper = FieldMapper;
        let records: Vec<StudentRecord> = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| mapper.map_to_student(row, idx + 1))
            .collect();

        // === Etapa 3: processamento linha a linha ===
        debug!("etapa 3: processamento das linhas");
        let processor = RowProcessor::new(&self.config, unit_code);
        let mut state = SheetState::new();
        state.summary.total_rows = records.len();

        for record in &records {
            processor.process_row(record, &mut state);
        }

        // === Etapa 4: deduplicação final da tabela ===
        // Rede de segurança sobre a tabela completa, além do conjunto
        // de chaves visto durante a emissão
        let mut seen_rows: HashSet<(String, String)> = HashSet::new();
        let before = state.contacts.len();
        state
            .contacts
            .retain(|c| seen_rows.insert((c.name.clone(), c.phone.clone())));
        let removed = before - state.contacts.len();
        if removed > 0 {
            warn!(removidos = removed, "contatos duplicados na passagem final");
            state.summary.duplicate += removed;
        }

        let elapsed_time = start_time.elapsed();
        info!(
            contatos = state.contacts.len(),
            sucessos = state.summary.success,
            erros = state.summary.error,
            sem_telefone = state.summary.missing_phone,
            duplicados = state.summary.duplicate,
            tempo_ms = elapsed_time.as_millis() as u64,
            "processamento concluído"
        );

        Ok(ExtractionOutcome {
            contacts: state.contacts,
            summary: state.summary,
            errors: state.errors,
            warnings: state.warnings,
            elapsed_time,
        })
    }
}
