// ==========================================
// Extrator de Contatos - Processamento por linha
// ==========================================
// Responsabilidade: um StudentRecord → candidatos a contato,
// veredicto da linha, emissão com deduplicação global
// Regra: ocorrência de linha nunca interrompe o processamento
// ==========================================

use crate::config::ExtractorConfig;
use crate::domain::{
    Contact, GuardianRole, ProcessingSummary, RoleTag, RowIssue, StudentRecord,
};
use crate::engine::contact_formatter::format_contact;
use crate::engine::normalizer::{clean_phone_digits, clean_text};
use crate::engine::phone::PhoneFormatter;
use crate::engine::roles::resolve_roles;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// SheetState - acumuladores de um processamento
// ==========================================
// Locais a uma única invocação; nada sobrevive entre chamadas
pub struct SheetState {
    pub contacts: Vec<Contact>,
    pub errors: Vec<RowIssue>,
    pub warnings: Vec<RowIssue>,
    pub summary: ProcessingSummary,
    seen: HashSet<(String, String)>, // chave de dedup: (identificação, telefone)
}

impl SheetState {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            summary: ProcessingSummary::default(),
            seen: HashSet::new(),
        }
    }
}

impl Default for SheetState {
    fn default() -> Self {
        Self::new()
    }
}

// Responsável com nome e telefone já normalizados
struct CleanGuardian {
    name: String,
    phone: String, // somente dígitos, ainda sem DDI
}

// Candidato a contato aguardando emissão
struct Candidate {
    tags: Vec<RoleTag>,
    phone: String, // já com DDI
    holder: String,
}

// ==========================================
// RowProcessor - pipeline de uma linha
// ==========================================
pub struct RowProcessor<'a> {
    config: &'a ExtractorConfig,
    formatter: PhoneFormatter,
    unit_code: &'a str,
}

impl<'a> RowProcessor<'a> {
    pub fn new(config: &'a ExtractorConfig, unit_code: &'a str) -> Self {
        Self {
            config,
            formatter: PhoneFormatter::new(config.country_prefix.clone()),
            unit_code,
        }
    }

    /// Processa uma linha da planilha
    ///
    /// Etapas (na ordem):
    /// 1) identidade do aluno: nome ou turma vazios → erro da linha
    /// 2) código da turma = parte após o primeiro '-' do rótulo
    /// 3) candidatos na ordem Pai, Mãe, RL, RF; RL só vira contato
    ///    separado quando o nome não coincide com Pai/Mãe, RF quando
    ///    não coincide com Pai/Mãe/RL (coincidência funde os papéis
    ///    no contato base)
    /// 4) nenhum candidato válido → erro da linha ("Telefone inválido"
    ///    quando houve telefone rejeitado, senão "Nenhum telefone
    ///    válido encontrado")
    /// 5) emissão: chave (identificação, telefone) já vista vira nota
    ///    de duplicado; contagem por etiqueta com P/M suprimindo RL/RF
    /// 6) sucesso contado uma vez por aluno com ≥1 contato emitido
    pub fn process_row(&self, record: &StudentRecord, state: &mut SheetState) {
        // 1. Identidade do aluno
        let student_name = clean_text(record.student_name.as_deref());
        let class_label = clean_text(record.class_label.as_deref());
        let student_code = clean_text(record.student_code.as_deref());

        if student_name.is_empty() || class_label.is_empty() {
            let subject = if student_name.is_empty() {
                format!("Linha {}", record.row_number)
            } else {
                student_name
            };
            debug!(linha = record.row_number, "linha com identidade incompleta");
            state.summary.error += 1;
            state
                .errors
                .push(RowIssue::new(subject, "Dados incompletos (Nome ou Turma)"));
            return;
        }

        // 2. Código da turma
        let class_code = match class_label.split_once('-') {
            Some((_, rest)) => rest.to_string(),
            None => class_label.clone(),
        };

        // 3. Normaliza os quatro responsáveis e processa na ordem canônica
        let father = self.clean_guardian(record, GuardianRole::Father);
        let mother = self.clean_guardian(record, GuardianRole::Mother);
        let legal = self.clean_guardian(record, GuardianRole::Legal);
        let financial = self.clean_guardian(record, GuardianRole::Financial);

        let mut candidates: Vec<Candidate> = Vec::new();
        let mut invalid_phones = 0usize;

        for role in GuardianRole::ALL {
            let guardian = match role {
                GuardianRole::Father => &father,
                GuardianRole::Mother => &mother,
                GuardianRole::Legal => &legal,
                GuardianRole::Financial => &financial,
            };

            // RL com nome igual ao de Pai/Mãe (e RF igual a Pai/Mãe/RL)
            // não vira contato separado; o papel chega ao contato base
            // via resolve_roles
            let merged_into_earlier = match role {
                GuardianRole::Father | GuardianRole::Mother => false,
                GuardianRole::Legal => {
                    guardian.name == father.name || guardian.name == mother.name
                }
                GuardianRole::Financial => {
                    guardian.name == father.name
                        || guardian.name == mother.name
                        || guardian.name == legal.name
                }
            };
            if merged_into_earlier {
                continue;
            }

            self.stage_guardian(
                role,
                guardian,
                &legal.name,
                &financial.name,
                &mut candidates,
                &mut invalid_phones,
                state,
            );
        }

        // 4. Veredicto da linha
        if candidates.is_empty() {
            let reason = if invalid_phones > 0 {
                "Telefone inválido"
            } else {
                "Nenhum telefone válido encontrado"
            };
            debug!(linha = record.row_number, motivo = reason, "linha sem contato válido");
            state.summary.error += 1;
            state.errors.push(RowIssue::new(student_name, reason));
            return;
        }

        // 5. Emissão com deduplicação global
        let mut emitted = 0usize;
        for candidate in candidates {
            let identification = format_contact(
                &class_code,
                &candidate.tags,
                &candidate.holder,
                self.unit_code,
                &student_code,
                &student_name,
            );
            let key = (identification.clone(), candidate.phone.clone());

            if state.seen.contains(&key) {
                state.summary.duplicate += 1;
                state.errors.push(RowIssue::new(
                    student_name.clone(),
                    format!("Contato duplicado removido: {}", candidate.holder),
                ));
                continue;
            }

            state.seen.insert(key);

            // Contagem por etiqueta: presença de P/M suprime RL/RF
            let has_parental = candidate.tags.iter().any(|t| t.is_parental());
            for tag in &candidate.tags {
                if tag.is_parental() || !has_parental {
                    state.summary.tag_counts.increment(*tag);
                }
            }

            state.contacts.push(Contact {
                name: identification,
                phone: candidate.phone,
            });
            emitted += 1;
        }

        // 6. Sucesso por aluno
        if emitted > 0 {
            state.summary.success += 1;
        }
    }

    fn clean_guardian(&self, record: &StudentRecord, role: GuardianRole) -> CleanGuardian {
        let cell = record.guardian(role);
        CleanGuardian {
            name: clean_text(cell.name.as_deref()),
            phone: clean_phone_digits(cell.phone.as_deref()),
        }
    }

    /// Valida um responsável e o acrescenta aos candidatos, se aplicável
    #[allow(clippy::too_many_arguments)]
    fn stage_guardian(
        &self,
        role: GuardianRole,
        guardian: &CleanGuardian,
        legal_name: &str,
        financial_name: &str,
        candidates: &mut Vec<Candidate>,
        invalid_phones: &mut usize,
        state: &mut SheetState,
    ) {
        // Sem nome: nem contato, nem ocorrência
        if guardian.name.is_empty() {
            return;
        }

        // Nome sem telefone: aviso, não erro
        if guardian.phone.is_empty() {
            state.summary.missing_phone += 1;
            state.warnings.push(RowIssue::new(
                guardian.name.clone(),
                format!("{} sem telefone cadastrado", role.label()),
            ));
            return;
        }

        // Telefone curto ou iniciado em 0: caso inválido da linha
        if guardian.phone.len() < self.config.min_phone_digits || guardian.phone.starts_with('0') {
            *invalid_phones += 1;
            return;
        }

        let tags = resolve_roles(role.base_tag(), &guardian.name, legal_name, financial_name);
        candidates.push(Candidate {
            tags,
            phone: self.formatter.with_country_prefix(&guardian.phone),
            holder: guardian.name.clone(),
        });
    }
}
