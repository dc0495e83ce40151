// ==========================================
// Extrator de Contatos - Mapeamento de campos
// ==========================================
// Responsabilidade: linha bruta (mapa coluna → célula) → StudentRecord
// Sem validação aqui: célula vazia vira None e segue adiante
// ==========================================

use crate::domain::{GuardianCell, GuardianRole, StudentRecord};
use crate::importer::schema;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapper {
    /// Converte uma linha bruta no registro nomeado do aluno
    pub fn map_to_student(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> StudentRecord {
        StudentRecord {
            // Identificação do aluno
            student_name: self.get_string(row, schema::COL_STUDENT_NAME),
            student_code: self.get_string(row, schema::COL_STUDENT_CODE),
            class_label: self.get_string(row, schema::COL_CLASS),

            // Responsáveis
            father: self.guardian_cell(row, GuardianRole::Father),
            mother: self.guardian_cell(row, GuardianRole::Mother),
            legal: self.guardian_cell(row, GuardianRole::Legal),
            financial: self.guardian_cell(row, GuardianRole::Financial),

            // Meta
            row_number,
        }
    }

    fn guardian_cell(&self, row: &HashMap<String, String>, role: GuardianRole) -> GuardianCell {
        GuardianCell {
            name: self.get_string(row, schema::name_column(role)),
            phone: self.get_string(row, schema::phone_column(role)),
        }
    }

    /// Extrai um campo string (com trim; vazio vira None)
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }
}
