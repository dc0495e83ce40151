// ==========================================
// Extrator de Contatos - Entrada de linha de comando
// ==========================================
// Uso:
//   extrator-contatos <planilha> <codigo_unidade> [dir_saida] [--config arquivo.json]
//
// Saída: Lista_de_Contatos_*.csv sempre; Relatorio_Erros_*.xlsx
// quando houver ocorrências
// ==========================================

use chrono::Local;
use extrator_contatos::config::ExtractorConfig;
use extrator_contatos::engine::SheetProcessor;
use extrator_contatos::{export, logging};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // --config pode aparecer em qualquer posição
    let mut positional: Vec<String> = Vec::new();
    let mut config_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = Some(args.next().ok_or("--config exige um caminho de arquivo")?);
        } else {
            positional.push(arg);
        }
    }

    if positional.len() < 2 {
        eprintln!(
            "Uso: extrator-contatos <planilha.(xlsx|xls|csv)> <codigo_unidade> [dir_saida] [--config arquivo.json]"
        );
        std::process::exit(2);
    }

    let sheet_path = PathBuf::from(&positional[0]);
    let unit_code = positional[1].trim().to_string();
    let out_dir = positional
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if unit_code.is_empty() {
        return Err("código da unidade não pode ser vazio".into());
    }

    let config = match &config_path {
        Some(path) => ExtractorConfig::from_json_file(path)?,
        None => ExtractorConfig::default(),
    };

    tracing::info!("==================================================");
    tracing::info!(
        "{} - versão {}",
        extrator_contatos::APP_NAME,
        extrator_contatos::VERSION
    );
    tracing::info!("==================================================");

    let processor = SheetProcessor::new(config);
    let outcome = processor.process_file(&sheet_path, &unit_code)?;

    // Resumo no terminal
    println!("Linhas processadas: {}", outcome.summary.total_rows);
    println!("Alunos com contato: {}", outcome.summary.success);
    println!("Alunos com erro:    {}", outcome.summary.error);
    println!("Sem telefone:       {}", outcome.summary.missing_phone);
    println!("Duplicados:         {}", outcome.summary.duplicate);
    println!(
        "Por etiqueta:       P={} M={} RL={} RF={}",
        outcome.summary.tag_counts.p,
        outcome.summary.tag_counts.m,
        outcome.summary.tag_counts.rl,
        outcome.summary.tag_counts.rf
    );

    std::fs::create_dir_all(&out_dir)?;
    let now = Local::now().naive_local();

    let csv_path = out_dir.join(export::contacts_csv_filename(&unit_code, now));
    std::fs::write(&csv_path, export::contacts_csv(&outcome.contacts)?)?;
    println!("Lista de contatos:  {}", csv_path.display());

    if !outcome.errors.is_empty() || !outcome.warnings.is_empty() {
        let report_path = out_dir.join(export::issues_xlsx_filename(&unit_code, now));
        std::fs::write(
            &report_path,
            export::issues_xlsx(&outcome.errors, &outcome.warnings)?,
        )?;
        println!("Relatório de erros: {}", report_path.display());
    }

    Ok(())
}
