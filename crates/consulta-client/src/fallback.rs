//! Sequential tribunal fallback search for "unknown jurisdiction" lookups.
//!
//! Probes each candidate tribunal in priority-then-declaration order and
//! short-circuits on the first one that holds the case. The sweep is
//! deliberately sequential rather than fanned out: most lookups resolve in
//! the first one to three priority tribunals, and a concurrent sweep would
//! hammer all 27 provider endpoints for every request.

use consulta_core::{ProcessRecord, Tribunal, search_order};
use tracing::{info, warn};

use crate::error::{FallbackError, LookupError};

/// A single-tribunal case lookup.
///
/// Implementors resolve the case number against one tribunal and reconcile
/// any hit into a canonical record. `Ok(None)` is a legitimate miss;
/// `Err` is a transport/provider failure.
pub trait TribunalLookup {
    fn find_case(
        &self,
        case_number: &str,
        tribunal: Tribunal,
    ) -> impl Future<Output = Result<Option<ProcessRecord>, LookupError>>;
}

/// Probe tribunals in order until one holds the case.
///
/// Tribunals are visited strictly in the order built by
/// [`search_order`]: `priority` first (duplicates removed), then every
/// remaining tribunal in declaration order. A failing tribunal never aborts
/// the sweep; its error is recorded and the next tribunal is tried. On
/// exhaustion the returned [`FallbackError`] carries the last transport
/// error observed, if any call failed at all.
pub async fn search_with_fallback<L: TribunalLookup>(
    lookup: &L,
    case_number: &str,
    priority: &[Tribunal],
) -> Result<(ProcessRecord, Tribunal), FallbackError> {
    let order = search_order(priority);
    let mut last_error: Option<LookupError> = None;

    for tribunal in &order {
        match lookup.find_case(case_number, *tribunal).await {
            Err(err) => {
                warn!(tribunal = %tribunal, error = %err, "tribunal lookup failed, continuing sweep");
                last_error = Some(err);
            }
            Ok(Some(record)) => {
                info!(tribunal = %tribunal, case_number, "case found");
                return Ok((record, *tribunal));
            }
            Ok(None) => {}
        }
    }

    Err(match last_error {
        Some(source) => FallbackError::UpstreamExhausted {
            case_number: case_number.to_string(),
            source,
        },
        None => FallbackError::NotFound {
            case_number: case_number.to_string(),
        },
    })
}
