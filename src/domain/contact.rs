// ==========================================
// Extrator de Contatos - Modelo de saída
// ==========================================
// Responsabilidade: contato emitido, ocorrências por linha e
// estatísticas agregadas de um processamento completo
// ==========================================

use crate::domain::types::RoleTag;
use serde::{Deserialize, Serialize};

// ==========================================
// Contact - linha da lista final de contatos
// ==========================================
// Chave de deduplicação: o par (name, phone) completo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,  // string de identificação (turma, papéis, titular, unidade, aluno)
    pub phone: String, // somente dígitos, com DDI do país
}

// ==========================================
// RowIssue - ocorrência informativa por linha
// ==========================================
// Nunca interrompe o processamento; acumulada em listas separadas
// (erros duros vs. avisos de telefone ausente)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    #[serde(rename = "usuario")]
    pub subject: String, // aluno ou responsável a que a ocorrência se refere
    #[serde(rename = "motivo")]
    pub reason: String, // texto apresentado no relatório de erros
}

impl RowIssue {
    pub fn new(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}

// ==========================================
// RoleTagCounts - contagem de contatos por etiqueta
// ==========================================
// Um contato com múltiplas etiquetas conta em cada uma, exceto que
// RL/RF não contam quando P ou M está presente no mesmo conjunto
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTagCounts {
    #[serde(rename = "P")]
    pub p: usize,
    #[serde(rename = "M")]
    pub m: usize,
    #[serde(rename = "RL")]
    pub rl: usize,
    #[serde(rename = "RF")]
    pub rf: usize,
}

impl RoleTagCounts {
    pub fn increment(&mut self, tag: RoleTag) {
        match tag {
            RoleTag::P => self.p += 1,
            RoleTag::M => self.m += 1,
            RoleTag::Rl => self.rl += 1,
            RoleTag::Rf => self.rf += 1,
        }
    }

    pub fn get(&self, tag: RoleTag) -> usize {
        match tag {
            RoleTag::P => self.p,
            RoleTag::M => self.m,
            RoleTag::Rl => self.rl,
            RoleTag::Rf => self.rf,
        }
    }
}

// ==========================================
// ProcessingSummary - estatísticas do processamento
// ==========================================
// Valor explícito devolvido por invocação; nenhum estado sobrevive
// entre chamadas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    pub total_rows: usize,    // linhas de dados lidas da planilha
    pub success: usize,       // alunos com ao menos um contato emitido
    pub error: usize,         // alunos sem nenhum contato válido
    pub missing_phone: usize, // responsáveis com nome mas sem telefone (aviso)
    pub duplicate: usize,     // contatos descartados por duplicidade
    pub tag_counts: RoleTagCounts,
}

// ==========================================
// ExtractionOutcome - resultado de um processamento
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub contacts: Vec<Contact>,   // tabela final, já deduplicada
    pub summary: ProcessingSummary,
    pub errors: Vec<RowIssue>,    // erros duros, na ordem de ocorrência
    pub warnings: Vec<RowIssue>,  // avisos de telefone ausente
    pub elapsed_time: std::time::Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_counts_increment() {
        let mut counts = RoleTagCounts::default();
        counts.increment(RoleTag::P);
        counts.increment(RoleTag::P);
        counts.increment(RoleTag::Rl);

        assert_eq!(counts.get(RoleTag::P), 2);
        assert_eq!(counts.get(RoleTag::M), 0);
        assert_eq!(counts.get(RoleTag::Rl), 1);
        assert_eq!(counts.get(RoleTag::Rf), 0);
    }

    #[test]
    fn test_row_issue_report_field_names() {
        let issue = RowIssue::new("Ana Silva", "Telefone inválido");
        let json = serde_json::to_value(&issue).unwrap();

        // Colunas do relatório de erros: usuario / motivo
        assert_eq!(json["usuario"], "Ana Silva");
        assert_eq!(json["motivo"], "Telefone inválido");
    }

    #[test]
    fn test_tag_counts_serialized_keys() {
        let counts = RoleTagCounts {
            p: 1,
            m: 2,
            rl: 3,
            rf: 4,
        };
        let json = serde_json::to_value(counts).unwrap();

        assert_eq!(json["P"], 1);
        assert_eq!(json["M"], 2);
        assert_eq!(json["RL"], 3);
        assert_eq!(json["RF"], 4);
    }
}
