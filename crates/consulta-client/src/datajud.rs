//! Client for the DataJud public API (CNJ).
//!
//! DataJud fronts one Elasticsearch index per tribunal; a case-number lookup
//! is a `match` query on `numeroProcesso` against the tribunal's
//! `api_publica_<tribunal>` endpoint.

use std::time::Duration;

use consulta_core::{ProcessRecord, Tribunal};
use serde_json::{Value, json};
use tracing::info;

use crate::error::LookupError;
use crate::fallback::TribunalLookup;
use crate::number::clean_case_number;

const DEFAULT_BASE_URL: &str = "https://api-publica.datajud.cnj.jus.br";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for DataJud's per-tribunal search endpoints.
pub struct DatajudClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DatajudClient {
    /// Create a client against the public DataJud deployment.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against an alternate base URL (tests, proxies).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Search one tribunal's index for a CNJ case number, returning the raw
    /// Elasticsearch response.
    pub async fn search_by_cnj(
        &self,
        case_number: &str,
        tribunal: Tribunal,
    ) -> Result<Value, LookupError> {
        let url = format!(
            "{}/api_publica_{}/_search",
            self.base_url,
            tribunal.datajud_alias()
        );
        let query = json!({
            "query": { "match": { "numeroProcesso": clean_case_number(case_number) } }
        });

        info!(url = %url, tribunal = %tribunal, "querying DataJud");
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("APIKey {}", self.api_key))
            .json(&query)
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

/// Extract the first hit's `_source` from a raw DataJud response.
pub fn first_hit(raw: &Value) -> Option<&Value> {
    raw.pointer("/hits/hits/0/_source")
}

impl TribunalLookup for DatajudClient {
    async fn find_case(
        &self,
        case_number: &str,
        tribunal: Tribunal,
    ) -> Result<Option<ProcessRecord>, LookupError> {
        let raw = self.search_by_cnj(case_number, tribunal).await?;
        Ok(first_hit(&raw).map(ProcessRecord::from_single_case))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_hit_extracts_the_source_object() {
        let raw = json!({
            "hits": {
                "total": {"value": 2},
                "hits": [
                    {"_source": {"numeroProcesso": "111", "tribunal": "TJPR"}},
                    {"_source": {"numeroProcesso": "222"}}
                ]
            }
        });
        let source = first_hit(&raw).unwrap();
        assert_eq!(source["numeroProcesso"], "111");
    }

    #[test]
    fn first_hit_is_none_for_empty_results() {
        assert!(first_hit(&json!({"hits": {"hits": []}})).is_none());
        assert!(first_hit(&json!({})).is_none());
        assert!(first_hit(&json!(null)).is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = DatajudClient::with_base_url("k".into(), "http://localhost:9200/".into());
        assert_eq!(client.base_url, "http://localhost:9200");
    }
}
