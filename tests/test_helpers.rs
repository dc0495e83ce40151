// ==========================================
// Auxiliares de teste
// ==========================================
// Responsabilidade: construção de planilhas de teste (tabelas em
// memória, arquivos CSV e XLSX temporários) usadas pelos testes de
// integração
// ==========================================

use extrator_contatos::importer::schema::REQUIRED_COLUMNS;
use extrator_contatos::RawTable;
use rust_xlsxwriter::Workbook;
use std::collections::HashMap;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// Cabeçalho completo com as colunas obrigatórias, na ordem do schema
pub fn full_header() -> Vec<String> {
    REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Monta uma linha da planilha a partir de pares (coluna, valor)
///
/// Colunas ausentes ficam fora do mapa; o mapeamento de campos as
/// trata como células vazias.
pub fn sheet_row(cells: &[(&str, &str)]) -> HashMap<String, String> {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Monta uma tabela em memória com o cabeçalho completo
pub fn sheet_table(rows: Vec<HashMap<String, String>>) -> RawTable {
    RawTable {
        headers: full_header(),
        rows,
    }
}

/// Linha de aluna com pai válido, base dos cenários
pub fn base_student_row() -> HashMap<String, String> {
    sheet_row(&[
        ("Nome Completo", "Ana Silva"),
        ("Identificador Estudante", "77812"),
        ("Turma", "3A-101"),
        ("Pai", "Jose Silva"),
        ("Telefone do Pai", "(11) 98888-7777"),
    ])
}

/// Cria um arquivo CSV temporário com o cabeçalho completo
///
/// As linhas de dados devem seguir a ordem das colunas do schema.
///
/// # Retorno
/// - NamedTempFile: arquivo com sufixo .csv (precisa permanecer vivo)
pub fn write_csv_fixture(data_lines: &[&str]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile()?;

    writeln!(temp_file, "{}", full_header().join(","))?;
    for line in data_lines {
        writeln!(temp_file, "{}", line)?;
    }

    temp_file.flush()?;
    Ok(temp_file)
}

/// Cria um arquivo XLSX temporário com o cabeçalho completo
///
/// Cada linha de dados segue a ordem das colunas do schema; valores
/// vazios deixam a célula sem escrita.
///
/// # Retorno
/// - NamedTempFile: arquivo com sufixo .xlsx (precisa permanecer vivo)
pub fn write_xlsx_fixture(data_rows: &[&[&str]]) -> Result<NamedTempFile, Box<dyn Error>> {
    let temp_file = tempfile::Builder::new().suffix(".xlsx").tempfile()?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in full_header().iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }
    for (row_idx, cells) in data_rows.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string((row_idx + 1) as u32, col as u16, *value)?;
            }
        }
    }

    workbook.save(temp_file.path())?;
    Ok(temp_file)
}
