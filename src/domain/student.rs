// ==========================================
// Extrator de Contatos - Registro de aluno
// ==========================================
// Responsabilidade: estrutura intermediária da importação
// (linha bruta da planilha → campos nomeados, sem limpeza)
// Ciclo de vida: somente dentro de um processamento
// ==========================================

use crate::domain::types::GuardianRole;
use serde::{Deserialize, Serialize};

// ==========================================
// GuardianCell - par nome/telefone de um responsável
// ==========================================
// Valores brutos da célula: aparados, vazio → None
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardianCell {
    pub name: Option<String>,
    pub phone: Option<String>,
}

// ==========================================
// StudentRecord - uma linha da planilha de extração
// ==========================================
// Campos brutos (sem normalização de telefone ou de nome)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    // ===== Identificação do aluno =====
    pub student_name: Option<String>, // Nome Completo
    pub student_code: Option<String>, // Identificador Estudante
    pub class_label: Option<String>,  // Turma (ex.: "3A-101")

    // ===== Responsáveis (até quatro por aluno) =====
    pub father: GuardianCell,    // Pai / Telefone do Pai
    pub mother: GuardianCell,    // Mãe / Telefone da Mãe
    pub legal: GuardianCell,     // Responsável Legal / Telefone do Responsável Legal
    pub financial: GuardianCell, // Responsável Financeiro / Telefone do Responsável Financeiro

    // ===== Meta =====
    pub row_number: usize, // linha de dados original (base 1, sem o cabeçalho)
}

impl StudentRecord {
    /// Sub-registro do responsável correspondente ao papel
    pub fn guardian(&self, role: GuardianRole) -> &GuardianCell {
        match role {
            GuardianRole::Father => &self.father,
            GuardianRole::Mother => &self.mother,
            GuardianRole::Legal => &self.legal,
            GuardianRole::Financial => &self.financial,
        }
    }
}
