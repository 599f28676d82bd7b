//! Text rendering of canonical records.
//!
//! Pure functions from record(s) to the Portuguese report text the service
//! returns to callers. Sentinels are already baked into the records, so
//! rendering never fails and never leaks a raw `null`.

use std::fmt::Write;

use crate::record::{LawsuitEntry, ProcessRecord};

/// Fixed message for a lookup that returned no payload at all.
pub const NO_DATA_MESSAGE: &str = "Nenhum dado retornado para este processo.";

/// Fixed message for a document search that matched no lawsuits.
pub const NO_LAWSUITS_MESSAGE: &str = "Nenhum processo encontrado para este CPF/CNPJ.";

/// Fixed sentence used when a record carries no movements.
pub const NO_MOVEMENTS_MESSAGE: &str =
    "Nenhuma movimentação encontrada (ou não disponibilizada).";

/// Render a single process record as a multi-line summary.
///
/// `None` means the provider returned an empty payload and yields the fixed
/// [`NO_DATA_MESSAGE`].
pub fn render_process_summary(record: Option<&ProcessRecord>) -> String {
    let Some(record) = record else {
        return NO_DATA_MESSAGE.to_string();
    };

    let court = match &record.court_state {
        Some(uf) => format!("{}/{}", record.court, uf),
        None => record.court.clone(),
    };

    let latest = match record.latest_movement() {
        Some(mov) => format!("{} – {}", mov.timestamp, mov.description),
        None => NO_MOVEMENTS_MESSAGE.to_string(),
    };

    format!(
        "⚖️ *Consulta processual*\n\
         \n\
         *Número CNJ:* {}\n\
         *Tribunal:* {}\n\
         *Instância:* {}\n\
         *Classe:* {}\n\
         *Assunto principal:* {}\n\
         *Data de distribuição/ajuizamento:* {}\n\
         *Última atualização:* {}\n\
         \n\
         *Última movimentação conhecida:*\n\
         {}",
        record.case_number,
        court,
        record.instance,
        record.case_class,
        record.main_subject,
        record.filing_date,
        record.last_update_date,
        latest,
    )
}

/// Render a document-search result as a numbered list, one block per entry.
pub fn render_lawsuit_list(entries: &[LawsuitEntry]) -> String {
    if entries.is_empty() {
        return NO_LAWSUITS_MESSAGE.to_string();
    }

    let mut out = String::from("📑 *Processos encontrados:*\n");
    for (idx, entry) in entries.iter().enumerate() {
        let court = match &entry.court_state {
            Some(uf) => format!("{}/{}", entry.court, uf),
            None => entry.court.clone(),
        };
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n*{}.* [{}] {}\n   \
             - Instância: {}\n   \
             - Status: {}\n   \
             - Assunto: {}\n   \
             - Última atualização: {}",
            idx + 1,
            court,
            entry.case_number,
            entry.instance,
            entry.status,
            entry.subject,
            entry.last_update_date,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Movement, lawsuit_entries};
    use crate::reconcile::ND;
    use serde_json::json;

    #[test]
    fn none_renders_the_fixed_no_data_message() {
        assert_eq!(render_process_summary(None), NO_DATA_MESSAGE);
    }

    #[test]
    fn minimal_record_end_to_end() {
        let raw = json!({"numeroProcesso": "123", "tribunal": "TJSP"});
        let record = ProcessRecord::from_single_case(&raw);
        let summary = render_process_summary(Some(&record));

        assert!(summary.contains("*Número CNJ:* 123"));
        assert!(summary.contains("*Tribunal:* TJSP"));
        assert!(summary.contains(NO_MOVEMENTS_MESSAGE));
    }

    #[test]
    fn fully_sentineled_record_renders_only_sentinel_text() {
        let record = ProcessRecord::from_single_case(&json!({}));
        let summary = render_process_summary(Some(&record));
        assert!(!summary.contains("null"));
        assert!(summary.contains(&format!("*Número CNJ:* {ND}")));
        assert!(summary.contains(&format!("*Tribunal:* {ND}")));
        assert!(summary.contains(NO_MOVEMENTS_MESSAGE));
    }

    #[test]
    fn court_state_appends_uf_suffix() {
        let record = ProcessRecord::from_single_case(&json!({
            "tribunal": "TJPR", "uf": "PR"
        }));
        let summary = render_process_summary(Some(&record));
        assert!(summary.contains("*Tribunal:* TJPR/PR"));
    }

    #[test]
    fn latest_movement_is_the_last_element() {
        let mut record = ProcessRecord::from_single_case(&json!({}));
        record.movements = vec![
            Movement {
                timestamp: "2023-01-01".into(),
                description: "Distribuição".into(),
            },
            Movement {
                timestamp: "2024-06-01".into(),
                description: "Sentença".into(),
            },
        ];
        let summary = render_process_summary(Some(&record));
        assert!(summary.contains("2024-06-01 – Sentença"));
        assert!(!summary.contains("Distribuição"));
    }

    #[test]
    fn empty_list_renders_the_fixed_message() {
        assert_eq!(render_lawsuit_list(&[]), NO_LAWSUITS_MESSAGE);
    }

    #[test]
    fn list_has_one_numbered_block_per_entry_in_input_order() {
        let raw = json!({"lawsuits": [
            {"number": "111", "court": "TJSP", "state": "SP"},
            {"number": "222", "court": "TJRJ"},
            {"number": "333"}
        ]});
        let entries = lawsuit_entries(&raw);
        let rendered = render_lawsuit_list(&entries);

        assert!(rendered.contains("*1.* [TJSP/SP] 111"));
        assert!(rendered.contains("*2.* [TJRJ] 222"));
        assert!(rendered.contains(&format!("*3.* [{ND}] 333")));
        assert_eq!(rendered.matches("- Instância:").count(), 3);
        assert!(!rendered.contains("*4.*"));
    }

    #[test]
    fn sentinel_entries_render_without_nulls() {
        let entries = lawsuit_entries(&json!({"lawsuits": [{}]}));
        let rendered = render_lawsuit_list(&entries);
        assert!(!rendered.contains("null"));
        assert!(rendered.contains(&format!("- Status: {ND}")));
    }
}
