// ==========================================
// Extrator de Contatos - Camada de motor
// ==========================================
// Responsabilidade: regras do pipeline de extração
// Limite: sem leitura de arquivos, sem apresentação
// ==========================================

pub mod contact_formatter;
pub mod normalizer;
pub mod phone;
pub mod roles;
pub mod row_processor;
pub mod sheet_processor;

// Reexporta o núcleo do motor
pub use contact_formatter::format_contact;
pub use normalizer::{clean_phone_digits, clean_text};
pub use phone::PhoneFormatter;
pub use roles::resolve_roles;
pub use row_processor::{RowProcessor, SheetState};
pub use sheet_processor::SheetProcessor;
