// ==========================================
// Extrator de Contatos - Formatação de telefone
// ==========================================
// Responsabilidade: garantir o DDI do país no número já limpo
// Não é formatação E.164 geral: apenas o prefixo padrão configurado
// ==========================================

// ==========================================
// PhoneFormatter - aplicador de DDI
// ==========================================
pub struct PhoneFormatter {
    prefix: String, // DDI padrão, ex.: "55"
}

impl PhoneFormatter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Garante o DDI no início do número
    ///
    /// Regras (na ordem):
    /// 1) entrada vazia → ""
    /// 2) já começa com o prefixo → devolve inalterado
    /// 3) caso contrário → prefixo + número
    ///
    /// Idempotente: aplicar sobre um número já prefixado não altera nada.
    pub fn with_country_prefix(&self, digits: &str) -> String {
        if digits.is_empty() {
            return String::new();
        }

        if digits.starts_with(&self.prefix) {
            return digits.to_string();
        }

        format!("{}{}", self.prefix, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_applied_when_absent() {
        let formatter = PhoneFormatter::new("55");
        assert_eq!(formatter.with_country_prefix("11988887777"), "5511988887777");
    }

    #[test]
    fn test_prefix_not_duplicated() {
        let formatter = PhoneFormatter::new("55");
        assert_eq!(
            formatter.with_country_prefix("5511988887777"),
            "5511988887777"
        );
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let formatter = PhoneFormatter::new("55");
        assert_eq!(formatter.with_country_prefix(""), "");
    }

    #[test]
    fn test_idempotent() {
        let formatter = PhoneFormatter::new("55");
        let once = formatter.with_country_prefix("11988887777");
        let twice = formatter.with_country_prefix(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_other_country_prefix() {
        let formatter = PhoneFormatter::new("351");
        assert_eq!(formatter.with_country_prefix("912345678"), "351912345678");
    }
}
