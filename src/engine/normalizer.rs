// ==========================================
// Extrator de Contatos - Normalização de campos
// ==========================================
// Responsabilidade: célula bruta → texto limpo / dígitos de telefone
// Funções totais: nunca falham, ausência vira string vazia
// ==========================================

/// Converte uma célula possivelmente ausente em texto aparado
///
/// Regras:
/// - None → ""
/// - Some(s) → s com espaços das pontas removidos
pub fn clean_text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or("").to_string()
}

/// Extrai somente os dígitos decimais de uma célula de telefone
///
/// Descarta espaços, parênteses, hífens, letras e marcadores de
/// ramal. Aplicar duas vezes produz o mesmo resultado.
pub fn clean_phone_digits(value: Option<&str>) -> String {
    value
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}
