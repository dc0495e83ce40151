// ==========================================
// Extrator de Contatos - String de identificação
// ==========================================
// Responsabilidade: montar a identificação canônica do contato
// Separadores e espaçamento são fixos: a plataforma de mensagens
// importa este campo literalmente
// ==========================================

use crate::domain::RoleTag;

/// Monta a string de identificação de um contato
///
/// Formato:
/// `{turma} - ({etiquetas unidas por " - "}) {titular} - {unidade}|{cod_aluno} - (A) {nome_aluno}`
///
/// Se o nome do titular está vazio, o nome do aluno entra no lugar
/// (responsável sem nome mas com telefone informado sob o papel).
pub fn format_contact(
    class_code: &str,
    tags: &[RoleTag],
    holder_name: &str,
    unit_code: &str,
    student_code: &str,
    student_name: &str,
) -> String {
    let joined_tags = tags
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" - ");

    let holder = if holder_name.is_empty() {
        student_name
    } else {
        holder_name
    };

    format!(
        "{} - ({}) {} - {}|{} - (A) {}",
        class_code, joined_tags, holder, unit_code, student_code, student_name
    )
}
