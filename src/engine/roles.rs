// ==========================================
// Extrator de Contatos - Resolução de papéis
// ==========================================
// Responsabilidade: etiquetas de papel de um contato dentro de uma
// linha, fundindo RL/RF quando a mesma pessoa ocupa mais de um papel
// Função pura, sem efeitos colaterais
// ==========================================

use crate::domain::RoleTag;

/// Resolve o conjunto ordenado de etiquetas de um contato
///
/// Regras:
/// 1) começa com [base]
/// 2) acrescenta RL se o nome é não vazio, igual (comparação exata)
///    ao nome do Responsável Legal e RL ainda não está presente
/// 3) acrescenta RF se o nome é não vazio, igual ao nome do
///    Responsável Financeiro e RF ainda não está presente
///
/// Ordem garantida: base primeiro, RL antes de RF quando ambos se aplicam.
pub fn resolve_roles(
    base: RoleTag,
    person_name: &str,
    legal_name: &str,
    financial_name: &str,
) -> Vec<RoleTag> {
    let mut tags = vec![base];

    if !person_name.is_empty() && person_name == legal_name && !tags.contains(&RoleTag::Rl) {
        tags.push(RoleTag::Rl);
    }

    if !person_name.is_empty() && person_name == financial_name && !tags.contains(&RoleTag::Rf) {
        tags.push(RoleTag::Rf);
    }

    tags
}
