//! Client for the two Jusbrasil provider surfaces.
//!
//! Background-check (`lawsuits by document`) is a paginated POST over a
//! CPF/CNPJ; base-judicial (`case by CNJ number`) is a GET returning a
//! single raw object. The two surfaces authenticate with the same `apikey`
//! header but live on different hosts.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::info;

use crate::error::LookupError;
use crate::number::{clean_case_number, digits_only};

const DEFAULT_BG_BASE_URL: &str = "https://api.jusbrasil.com.br";
const DEFAULT_JUDICIAL_BASE_URL: &str = "https://op.digesto.com.br";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default page size for document searches.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Default segment for document searches.
pub const DEFAULT_SEGMENT: &str = "civil";

/// Client for Jusbrasil's background-check and base-judicial APIs.
pub struct JusbrasilClient {
    client: reqwest::Client,
    bg_base_url: String,
    judicial_base_url: String,
    api_key: String,
}

impl JusbrasilClient {
    /// Create a client against the public Jusbrasil deployment.
    pub fn new(api_key: String) -> Self {
        Self::with_base_urls(
            api_key,
            DEFAULT_BG_BASE_URL.to_string(),
            DEFAULT_JUDICIAL_BASE_URL.to_string(),
        )
    }

    /// Create a client against alternate base URLs (tests, proxies).
    pub fn with_base_urls(api_key: String, bg_base_url: String, judicial_base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            bg_base_url: bg_base_url.trim_end_matches('/').to_string(),
            judicial_base_url: judicial_base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Search lawsuits by CPF/CNPJ document number.
    ///
    /// The document is reduced to its digits before the request. The raw
    /// response carries the result list under `lawsuits` or `results`;
    /// reconciliation is the caller's concern (`consulta_core::lawsuit_entries`).
    pub async fn lawsuits_by_document(
        &self,
        document_number: &str,
        cursor: &str,
        size: u32,
        segment: &str,
    ) -> Result<Value, LookupError> {
        let url = format!("{}/background-check/lawsuits/{}", self.bg_base_url, segment);
        let payload = json!({
            "documentNumber": digits_only(document_number),
            "pagination": { "cursor": cursor, "size": size },
        });

        info!(url = %url, segment, "querying Jusbrasil background-check");
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&payload)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }

    /// Look up a single case by its CNJ number on the base-judicial API.
    ///
    /// Returns the raw object; an empty object means the case is unknown to
    /// this provider (a legitimate miss, not an error).
    pub async fn case_by_cnj(&self, case_number: &str) -> Result<Value, LookupError> {
        let url = format!(
            "{}/api/base-judicial/tribproc/{}?tipo_numero=5",
            self.judicial_base_url,
            clean_case_number(case_number)
        );

        info!(url = %url, "querying Jusbrasil base-judicial");
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

/// Whether a base-judicial payload actually carries a case.
///
/// The provider answers `{}` or `null` for unknown numbers instead of a
/// non-2xx status.
pub fn has_case(raw: &Value) -> bool {
    raw.as_object().is_some_and(|obj| !obj.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn has_case_rejects_empty_payloads() {
        assert!(!has_case(&json!(null)));
        assert!(!has_case(&json!({})));
        assert!(has_case(&json!({"numeroProcesso": "123"})));
    }

    #[test]
    fn base_urls_are_normalised() {
        let client = JusbrasilClient::with_base_urls(
            "k".into(),
            "http://a.local/".into(),
            "http://b.local/".into(),
        );
        assert_eq!(client.bg_base_url, "http://a.local");
        assert_eq!(client.judicial_base_url, "http://b.local");
    }
}
