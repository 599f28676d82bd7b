//! Canonical, provider-agnostic representation of a legal process.
//!
//! Records are immutable value types built once per lookup from a raw
//! provider payload, with every field already reconciled: missing data is
//! baked in as the `N/D` sentinel at construction time, so downstream
//! rendering never has to deal with partially populated records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::reconcile::{aliases, list_field, optional_field, text_field};

/// One normalised lawsuit/process record from a single-case lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub case_number: String,
    pub court: String,
    /// State/region code of the issuing court; omitted from output when the
    /// provider did not supply one.
    pub court_state: Option<String>,
    pub instance: String,
    pub case_class: String,
    pub main_subject: String,
    /// Opaque date string, passed through unparsed.
    pub filing_date: String,
    /// Opaque date string, passed through unparsed.
    pub last_update_date: String,
    /// Case events in source order; the source is assumed chronological, so
    /// the last element is the most recent movement.
    pub movements: Vec<Movement>,
}

/// A single case event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    pub timestamp: String,
    pub description: String,
}

/// Lighter record used by the document-based multi-result search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawsuitEntry {
    pub case_number: String,
    pub court: String,
    pub court_state: Option<String>,
    pub instance: String,
    pub status: String,
    pub subject: String,
    pub last_update_date: String,
}

impl ProcessRecord {
    /// Reconcile a raw single-case payload (DataJud `_source` or Jusbrasil
    /// base-judicial object) into a fully populated record.
    pub fn from_single_case(raw: &Value) -> Self {
        use aliases::single_case as f;

        let movements = list_field(raw, f::MOVEMENTS)
            .iter()
            .map(Movement::from_raw)
            .collect();

        Self {
            case_number: text_field(raw, f::CASE_NUMBER),
            court: text_field(raw, f::COURT),
            court_state: optional_field(raw, f::COURT_STATE),
            instance: text_field(raw, f::INSTANCE),
            case_class: text_field(raw, f::CASE_CLASS),
            main_subject: text_field(raw, f::MAIN_SUBJECT),
            filing_date: text_field(raw, f::FILING_DATE),
            last_update_date: text_field(raw, f::LAST_UPDATE),
            movements,
        }
    }

    /// Most recent movement, if the provider supplied any.
    pub fn latest_movement(&self) -> Option<&Movement> {
        self.movements.last()
    }
}

impl Movement {
    fn from_raw(raw: &Value) -> Self {
        use aliases::single_case as f;
        Self {
            timestamp: text_field(raw, f::MOVEMENT_TIMESTAMP),
            description: text_field(raw, f::MOVEMENT_DESCRIPTION),
        }
    }
}

impl LawsuitEntry {
    /// Reconcile one raw lawsuit entry from a document-based search.
    pub fn from_raw(raw: &Value) -> Self {
        use aliases::document_search as f;
        Self {
            case_number: text_field(raw, f::CASE_NUMBER),
            court: text_field(raw, f::COURT),
            court_state: optional_field(raw, f::COURT_STATE),
            instance: text_field(raw, f::INSTANCE),
            status: text_field(raw, f::STATUS),
            subject: text_field(raw, f::SUBJECT),
            last_update_date: text_field(raw, f::LAST_UPDATE),
        }
    }
}

/// Extract and reconcile the result list of a document-based search
/// response. The list may arrive under either `lawsuits` or `results`.
pub fn lawsuit_entries(raw: &Value) -> Vec<LawsuitEntry> {
    list_field(raw, aliases::document_search::RESULT_LIST)
        .iter()
        .map(LawsuitEntry::from_raw)
        .collect()
}
