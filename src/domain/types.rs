// ==========================================
// Extrator de Contatos - Tipos de domínio
// ==========================================
// Responsabilidade: etiquetas de papel (P/M/RL/RF) e papéis de
// responsável na ordem fixa de processamento da planilha
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Etiqueta de papel (Role Tag)
// ==========================================
// Aparece na string de identificação do contato e na contagem por tipo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleTag {
    P,  // Pai
    M,  // Mãe
    Rl, // Responsável Legal
    Rf, // Responsável Financeiro
}

impl RoleTag {
    /// Papel parental (P/M)? RL/RF não contam quando um papel parental
    /// está presente no mesmo conjunto (ver contagem por etiqueta).
    pub fn is_parental(&self) -> bool {
        matches!(self, RoleTag::P | RoleTag::M)
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleTag::P => write!(f, "P"),
            RoleTag::M => write!(f, "M"),
            RoleTag::Rl => write!(f, "RL"),
            RoleTag::Rf => write!(f, "RF"),
        }
    }
}

// ==========================================
// Papel de responsável (Guardian Role)
// ==========================================
// Ordem fixa de processamento por aluno: Pai, Mãe, RL, RF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuardianRole {
    Father,    // Pai
    Mother,    // Mãe
    Legal,     // Responsável Legal
    Financial, // Responsável Financeiro
}

impl GuardianRole {
    /// Ordem canônica de processamento dentro de uma linha
    pub const ALL: [GuardianRole; 4] = [
        GuardianRole::Father,
        GuardianRole::Mother,
        GuardianRole::Legal,
        GuardianRole::Financial,
    ];

    /// Etiqueta base do papel (primeira posição do RoleSet)
    pub fn base_tag(&self) -> RoleTag {
        match self {
            GuardianRole::Father => RoleTag::P,
            GuardianRole::Mother => RoleTag::M,
            GuardianRole::Legal => RoleTag::Rl,
            GuardianRole::Financial => RoleTag::Rf,
        }
    }

    /// Rótulo usado nas mensagens de aviso ("{rótulo} sem telefone cadastrado")
    pub fn label(&self) -> &'static str {
        match self {
            GuardianRole::Father => "Pai",
            GuardianRole::Mother => "Mãe",
            GuardianRole::Legal => "RL",
            GuardianRole::Financial => "RF",
        }
    }
}

impl fmt::Display for GuardianRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tag_display() {
        assert_eq!(RoleTag::P.to_string(), "P");
        assert_eq!(RoleTag::M.to_string(), "M");
        assert_eq!(RoleTag::Rl.to_string(), "RL");
        assert_eq!(RoleTag::Rf.to_string(), "RF");
    }

    #[test]
    fn test_role_tag_is_parental() {
        assert!(RoleTag::P.is_parental());
        assert!(RoleTag::M.is_parental());
        assert!(!RoleTag::Rl.is_parental());
        assert!(!RoleTag::Rf.is_parental());
    }

    #[test]
    fn test_guardian_role_order_and_tags() {
        let tags: Vec<RoleTag> = GuardianRole::ALL.iter().map(|r| r.base_tag()).collect();
        assert_eq!(tags, vec![RoleTag::P, RoleTag::M, RoleTag::Rl, RoleTag::Rf]);
    }

    #[test]
    fn test_guardian_role_labels() {
        assert_eq!(GuardianRole::Father.label(), "Pai");
        assert_eq!(GuardianRole::Mother.label(), "Mãe");
        assert_eq!(GuardianRole::Legal.label(), "RL");
        assert_eq!(GuardianRole::Financial.label(), "RF");
    }
}
