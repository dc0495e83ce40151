// ==========================================
// Extrator de Contatos - Camada de importação
// ==========================================
// Responsabilidade: leitura da planilha externa e conversão
// em registros internos
// Suporta: Excel, CSV
// ==========================================

// Declaração de módulos
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod schema;

// Reexporta os tipos centrais
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawTable, UniversalFileParser};
pub use schema::{validate_columns, REQUIRED_COLUMNS};
