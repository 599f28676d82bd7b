//! Alias-priority field reconciliation over raw provider payloads.
//!
//! Every provider names the same concept differently ("numeroProcesso" vs
//! "numero", "lastUpdate" vs "dataUltimaMovimentacao"). Each canonical field
//! carries a fixed, ordered alias list; the first alias present with a usable
//! value wins. Absence is an expected outcome, never an error: scalar fields
//! degrade to the [`ND`] sentinel, list fields to an empty slice.

use serde_json::Value;

/// Sentinel standing in for "field not provided by any aliased source".
pub const ND: &str = "N/D";

/// Per-field alias lists for the two provider families.
///
/// The single-case family covers DataJud `_source` objects and Jusbrasil
/// base-judicial responses; the document-search family covers Jusbrasil
/// background-check lawsuit entries. The two families use different key
/// dialects, so each gets its own table. Order within a list is priority
/// order and must not be reordered.
pub mod aliases {
    /// Single-case-by-number responses (DataJud / Jusbrasil base-judicial).
    pub mod single_case {
        pub const CASE_NUMBER: &[&str] = &["numeroProcesso", "numero"];
        pub const COURT: &[&str] = &["tribunal"];
        pub const COURT_STATE: &[&str] = &["uf"];
        pub const INSTANCE: &[&str] = &["instancia", "grau"];
        pub const CASE_CLASS: &[&str] = &["classe", "classeProcessual"];
        pub const MAIN_SUBJECT: &[&str] = &["assuntoPrincipal", "assunto"];
        pub const FILING_DATE: &[&str] = &["dataDistribuicao", "dataAjuizamento"];
        pub const LAST_UPDATE: &[&str] = &["ultimaAtualizacao", "dataHoraUltimaAtualizacao"];
        pub const MOVEMENTS: &[&str] = &["movimentos", "andamentos"];
        pub const MOVEMENT_TIMESTAMP: &[&str] = &["dataHora", "data", "dataMovimentacao"];
        pub const MOVEMENT_DESCRIPTION: &[&str] = &["descricao", "nome", "texto"];
    }

    /// Document-based multi-result search (Jusbrasil background-check).
    pub mod document_search {
        pub const RESULT_LIST: &[&str] = &["lawsuits", "results"];
        pub const CASE_NUMBER: &[&str] = &["number", "numeroProcesso"];
        pub const COURT: &[&str] = &["court", "tribunal"];
        pub const COURT_STATE: &[&str] = &["state", "uf"];
        pub const INSTANCE: &[&str] = &["instance", "instancia"];
        pub const STATUS: &[&str] = &["status", "situacao"];
        pub const SUBJECT: &[&str] = &["subject", "assunto"];
        pub const LAST_UPDATE: &[&str] = &["lastUpdate", "dataUltimaMovimentacao"];
    }
}

/// Return the first alias whose value is present and usable, stringified.
///
/// `null`, an absent key, and an empty (or whitespace-only) string all count
/// as missing — a policy carried over from the upstream service, where the
/// three are indistinguishable to callers. JSON numbers are accepted and
/// rendered in their canonical decimal form.
pub fn reconcile(raw: &Value, aliases_in_priority_order: &[&str]) -> Option<String> {
    let obj = raw.as_object()?;
    for &alias in aliases_in_priority_order {
        match obj.get(alias) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => continue,
        }
    }
    None
}

/// Reconcile a scalar textual field, degrading to the [`ND`] sentinel.
pub fn text_field(raw: &Value, aliases: &[&str]) -> String {
    reconcile(raw, aliases).unwrap_or_else(|| ND.to_string())
}

/// Reconcile a field the renderer omits entirely when absent (e.g. the
/// court's state code).
pub fn optional_field(raw: &Value, aliases: &[&str]) -> Option<String> {
    reconcile(raw, aliases)
}

/// Return the first alias holding a non-empty array, or an empty slice.
pub fn list_field<'a>(raw: &'a Value, aliases: &[&str]) -> &'a [Value] {
    if let Some(obj) = raw.as_object() {
        for &alias in aliases {
            if let Some(Value::Array(items)) = obj.get(alias)
                && !items.is_empty()
            {
                return items;
            }
        }
    }
    &[]
}
