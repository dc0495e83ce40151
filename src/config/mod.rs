// ==========================================
// Extrator de Contatos - Camada de configuração
// ==========================================
// Responsabilidade: parâmetros ajustáveis do processamento
// Fonte: arquivo JSON opcional; sem arquivo valem os padrões
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_country_prefix() -> String {
    "55".to_string()
}

fn default_min_phone_digits() -> usize {
    8
}

// ==========================================
// ExtractorConfig - parâmetros do processamento
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// DDI aplicado aos telefones sem prefixo de país
    #[serde(default = "default_country_prefix")]
    pub country_prefix: String,

    /// Quantidade mínima de dígitos de um telefone aceitável
    #[serde(default = "default_min_phone_digits")]
    pub min_phone_digits: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            country_prefix: default_country_prefix(),
            min_phone_digits: default_min_phone_digits(),
        }
    }
}

impl ExtractorConfig {
    /// Carrega a configuração de um arquivo JSON
    ///
    /// Campos omitidos no arquivo recebem os valores padrão.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ImportError::ConfigError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
