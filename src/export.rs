// ==========================================
// Extrator de Contatos - Artefatos de saída
// ==========================================
// Responsabilidade: lista de contatos em CSV e relatório de
// ocorrências em XLSX, ambos em memória; gravação é do chamador
// ==========================================

use crate::domain::{Contact, RowIssue};
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook};

/// Nome do arquivo da lista de contatos
///
/// Formato: `Lista_de_Contatos_{unidade}_{AAAAMMDD_HHMM}.csv`
pub fn contacts_csv_filename(unit_code: &str, at: NaiveDateTime) -> String {
    format!(
        "Lista_de_Contatos_{}_{}.csv",
        unit_code,
        at.format("%Y%m%d_%H%M")
    )
}

/// Nome do arquivo do relatório de ocorrências
///
/// Formato: `Relatorio_Erros_{unidade}_{AAAAMMDD_HHMM}.xlsx`
pub fn issues_xlsx_filename(unit_code: &str, at: NaiveDateTime) -> String {
    format!(
        "Relatorio_Erros_{}_{}.xlsx",
        unit_code,
        at.format("%Y%m%d_%H%M")
    )
}

/// Serializa a lista final de contatos em CSV (colunas name, phone)
pub fn contacts_csv(contacts: &[Contact]) -> ImportResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["name", "phone"])
        .map_err(|e| ImportError::CsvWriteError(e.to_string()))?;

    for contact in contacts {
        writer
            .write_record([contact.name.as_str(), contact.phone.as_str()])
            .map_err(|e| ImportError::CsvWriteError(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ImportError::CsvWriteError(e.to_string()))
}

/// Gera o relatório de ocorrências em XLSX (colunas usuario, motivo)
///
/// Erros duros primeiro, avisos de telefone ausente na sequência.
pub fn issues_xlsx(errors: &[RowIssue], warnings: &[RowIssue]) -> ImportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, "usuario", &header_format)?;
    worksheet.write_string_with_format(0, 1, "motivo", &header_format)?;
    worksheet.set_column_width(0, 40)?;
    worksheet.set_column_width(1, 60)?;

    for (idx, issue) in errors.iter().chain(warnings.iter()).enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, &issue.subject)?;
        worksheet.write_string(row, 1, &issue.reason)?;
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 24)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_contacts_csv_filename() {
        assert_eq!(
            contacts_csv_filename("SPX", at()),
            "Lista_de_Contatos_SPX_20260824_1430.csv"
        );
    }

    #[test]
    fn test_issues_xlsx_filename() {
        assert_eq!(
            issues_xlsx_filename("SPX", at()),
            "Relatorio_Erros_SPX_20260824_1430.xlsx"
        );
    }

    #[test]
    fn test_contacts_csv_content() {
        let contacts = vec![
            Contact {
                name: "101 - (P) Jose Silva - SPX|77812 - (A) Ana Silva".to_string(),
                phone: "5511988887777".to_string(),
            },
            Contact {
                name: "101 - (M) Maria Souza - SPX|77812 - (A) Ana Silva".to_string(),
                phone: "5511977776666".to_string(),
            },
        ];

        let bytes = contacts_csv(&contacts).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,phone"));
        assert_eq!(
            lines.next(),
            Some("101 - (P) Jose Silva - SPX|77812 - (A) Ana Silva,5511988887777")
        );
        assert_eq!(
            lines.next(),
            Some("101 - (M) Maria Souza - SPX|77812 - (A) Ana Silva,5511977776666")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_contacts_csv_empty_has_header() {
        let bytes = contacts_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_end(), "name,phone");
    }

    #[test]
    fn test_issues_xlsx_content_and_order() {
        let errors = vec![
            RowIssue::new("Ana Silva", "Telefone inválido"),
            RowIssue::new("Bruno Costa", "Dados incompletos (Nome ou Turma)"),
        ];
        let warnings = vec![RowIssue::new("Jose Silva", "Pai sem telefone cadastrado")];

        let bytes = issues_xlsx(&errors, &warnings).unwrap();

        // XLSX é um contêiner ZIP: assinatura PK
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[0..2], b"PK");

        // Relê a planilha: cabeçalho e erros na ordem, avisos por último
        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let sheet_name = workbook.sheet_names()[0].clone();
        let range = workbook.worksheet_range(&sheet_name).unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|cells| cells.iter().map(|c| c.to_string()).collect())
            .collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["usuario", "motivo"]);
        assert_eq!(rows[1], vec!["Ana Silva", "Telefone inválido"]);
        assert_eq!(rows[2], vec!["Bruno Costa", "Dados incompletos (Nome ou Turma)"]);
        assert_eq!(rows[3], vec!["Jose Silva", "Pai sem telefone cadastrado"]);
    }
}
