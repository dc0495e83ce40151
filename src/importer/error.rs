// ==========================================
// Extrator de Contatos - Erros de importação
// ==========================================
// Ferramenta: macro derive do thiserror
// ==========================================

use thiserror::Error;

/// Erros do módulo de importação e exportação
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Erros de arquivo =====
    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato de arquivo não suportado: {0} (aceitos: .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("Falha na leitura do arquivo: {0}")]
    FileReadError(String),

    #[error("Falha na análise do Excel: {0}")]
    ExcelParseError(String),

    #[error("Falha na análise do CSV: {0}")]
    CsvParseError(String),

    // ===== Erros de schema =====
    #[error("Coluna(s) obrigatória(s) ausente(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Planilha sem linha de cabeçalho")]
    EmptyHeader,

    // ===== Erros de exportação =====
    #[error("Falha na gravação do relatório XLSX: {0}")]
    XlsxWriteError(String),

    #[error("Falha na gravação do CSV: {0}")]
    CsvWriteError(String),

    // ===== Erros de configuração =====
    #[error("Falha na leitura da configuração ({path}): {message}")]
    ConfigError { path: String, message: String },

    // ===== Erros genéricos =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Implementa From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// Implementa From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// Implementa From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// Implementa From<rust_xlsxwriter::XlsxError>
impl From<rust_xlsxwriter::XlsxError> for ImportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ImportError::XlsxWriteError(err.to_string())
    }
}

/// Alias de Result do módulo
pub type ImportResult<T> = Result<T, ImportError>;
