// ==========================================
// Extrator de Contatos - Camada de domínio
// ==========================================
// Responsabilidade: entidades, tipos e regras do negócio
// Limite: sem acesso a arquivos, sem lógica de processamento
// ==========================================

pub mod contact;
pub mod student;
pub mod types;

// Reexporta os tipos centrais
pub use contact::{Contact, ExtractionOutcome, ProcessingSummary, RoleTagCounts, RowIssue};
pub use student::{GuardianCell, StudentRecord};
pub use types::{GuardianRole, RoleTag};
