//! Error taxonomy for provider lookups.
//!
//! Two kinds matter to callers: a [`LookupError`] is an upstream failure
//! (network, non-2xx status, unparseable payload) and maps to a bad-gateway
//! style response; a [`FallbackError`] means every tribunal was swept and
//! none held the record — a legitimate empty result, mapped to "not found".
//! Individual missing fields are never errors; they degrade to sentinels in
//! `consulta-core`.

use consulta_core::Tribunal;
use thiserror::Error;

/// A single lookup call against one provider failed.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The fallback sweep exhausted every tribunal without finding the case.
///
/// When any call in the sweep failed, the last transport error observed is
/// carried along; when every call succeeded but returned empty, there is no
/// error to report beyond the miss itself.
#[derive(Error, Debug)]
pub enum FallbackError {
    #[error(
        "Não foi possível localizar o processo {case_number} em nenhum tribunal. \
         Último erro da API: {source}"
    )]
    UpstreamExhausted {
        case_number: String,
        #[source]
        source: LookupError,
    },
    #[error(
        "Não foi encontrado nenhum processo público para o número informado \
         ({case_number}) em nenhum tribunal."
    )]
    NotFound { case_number: String },
}

impl FallbackError {
    pub fn case_number(&self) -> &str {
        match self {
            FallbackError::UpstreamExhausted { case_number, .. }
            | FallbackError::NotFound { case_number } => case_number,
        }
    }

    /// The last transport error observed during the sweep, if any.
    pub fn last_error(&self) -> Option<&LookupError> {
        match self {
            FallbackError::UpstreamExhausted { source, .. } => Some(source),
            FallbackError::NotFound { .. } => None,
        }
    }
}

/// A direct single-tribunal lookup that succeeded but matched nothing.
#[derive(Error, Debug)]
#[error(
    "Nenhum processo público encontrado para o número informado ({case_number}) \
     no tribunal {tribunal}."
)]
pub struct CaseNotFound {
    pub case_number: String,
    pub tribunal: Tribunal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_without_transport_error_reports_a_plain_miss() {
        let err = FallbackError::NotFound {
            case_number: "123".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("(123)"));
        assert!(!msg.contains("erro da API"));
        assert!(err.last_error().is_none());
    }

    #[test]
    fn exhausted_with_transport_error_reports_it() {
        let err = FallbackError::UpstreamExhausted {
            case_number: "123".into(),
            source: LookupError::Server {
                status: 503,
                body: "indisponível".into(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("Último erro da API"));
        assert!(msg.contains("503"));
        assert!(err.last_error().is_some());
    }

    #[test]
    fn single_tribunal_miss_names_the_tribunal() {
        let err = CaseNotFound {
            case_number: "123".into(),
            tribunal: Tribunal::TJSP,
        };
        assert!(err.to_string().contains("no tribunal TJSP"));
    }
}
