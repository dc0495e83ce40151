// ==========================================
// Extrator de Contatos - Schema da planilha
// ==========================================
// Responsabilidade: nomes das colunas obrigatórias e validação
// fail-fast do cabeçalho antes de qualquer processamento de linha
// ==========================================

use crate::domain::GuardianRole;
use crate::importer::error::{ImportError, ImportResult};

// ===== Colunas do aluno =====
pub const COL_STUDENT_NAME: &str = "Nome Completo";
pub const COL_STUDENT_CODE: &str = "Identificador Estudante";
pub const COL_CLASS: &str = "Turma";

// ===== Colunas dos responsáveis =====
pub const COL_FATHER_NAME: &str = "Pai";
pub const COL_FATHER_PHONE: &str = "Telefone do Pai";
pub const COL_MOTHER_NAME: &str = "Mãe";
pub const COL_MOTHER_PHONE: &str = "Telefone da Mãe";
pub const COL_LEGAL_NAME: &str = "Responsável Legal";
pub const COL_LEGAL_PHONE: &str = "Telefone do Responsável Legal";
pub const COL_FINANCIAL_NAME: &str = "Responsável Financeiro";
pub const COL_FINANCIAL_PHONE: &str = "Telefone do Responsável Financeiro";

/// Colunas obrigatórias, na ordem em que aparecem na mensagem de erro
pub const REQUIRED_COLUMNS: [&str; 11] = [
    COL_STUDENT_NAME,
    COL_STUDENT_CODE,
    COL_CLASS,
    COL_FATHER_NAME,
    COL_FATHER_PHONE,
    COL_MOTHER_NAME,
    COL_MOTHER_PHONE,
    COL_LEGAL_NAME,
    COL_LEGAL_PHONE,
    COL_FINANCIAL_NAME,
    COL_FINANCIAL_PHONE,
];

/// Coluna de nome do responsável para cada papel
pub fn name_column(role: GuardianRole) -> &'static str {
    match role {
        GuardianRole::Father => COL_FATHER_NAME,
        GuardianRole::Mother => COL_MOTHER_NAME,
        GuardianRole::Legal => COL_LEGAL_NAME,
        GuardianRole::Financial => COL_FINANCIAL_NAME,
    }
}

/// Coluna de telefone do responsável para cada papel
pub fn phone_column(role: GuardianRole) -> &'static str {
    match role {
        GuardianRole::Father => COL_FATHER_PHONE,
        GuardianRole::Mother => COL_MOTHER_PHONE,
        GuardianRole::Legal => COL_LEGAL_PHONE,
        GuardianRole::Financial => COL_FINANCIAL_PHONE,
    }
}

/// Valida o cabeçalho da planilha contra as colunas obrigatórias
///
/// Comparação por nome exato. Em caso de falha a mensagem lista
/// todas as colunas ausentes de uma vez, não apenas a primeira.
pub fn validate_columns(headers: &[String]) -> ImportResult<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingColumns(missing))
    }
}
