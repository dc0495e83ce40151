// ==========================================
// Extrator de Contatos - Biblioteca núcleo
// ==========================================
// Propósito: lista de contatos deduplicada a partir da planilha
// de alunos e responsáveis, para importação em massa
// ==========================================

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de motor - regras do pipeline
pub mod engine;

// Camada de importação - leitura de planilhas
pub mod importer;

// Camada de configuração
pub mod config;

// Artefatos de saída
pub mod export;

// Sistema de logs
pub mod logging;

// ==========================================
// Reexporta os tipos centrais
// ==========================================

// Tipos de domínio
pub use domain::{
    Contact, ExtractionOutcome, GuardianCell, GuardianRole, ProcessingSummary, RoleTag,
    RoleTagCounts, RowIssue, StudentRecord,
};

// Motor
pub use engine::{PhoneFormatter, RowProcessor, SheetProcessor, SheetState};

// Importação
pub use config::ExtractorConfig;
pub use importer::{ImportError, ImportResult, RawTable, UniversalFileParser};

// ==========================================
// Constantes
// ==========================================

// Versão do sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "Extrator de Contatos";
