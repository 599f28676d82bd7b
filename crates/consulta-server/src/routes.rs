//! Request handlers: thin mappings from HTTP bodies to the lookup core.
//!
//! Handlers do no reconciliation or rendering of their own; they call into
//! `consulta-client`/`consulta-core` and translate the error taxonomy to
//! status codes: upstream transport failures become 502, an exhausted
//! fallback sweep becomes 404. A single-tribunal miss is a 200 with an
//! in-band message, matching how callers consume the service.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use consulta_client::jusbrasil::{DEFAULT_PAGE_SIZE, DEFAULT_SEGMENT, has_case};
use consulta_client::{
    CaseNotFound, DatajudClient, FallbackError, JusbrasilClient, LookupError, first_hit,
    search_with_fallback,
};
use consulta_core::{
    DEFAULT_PRIORITY, ND, ProcessRecord, Tribunal, lawsuit_entries, render_lawsuit_list,
    render_process_summary,
};

/// Shared provider clients, one of each per process.
#[derive(Clone)]
pub struct AppState {
    pub datajud: Arc<DatajudClient>,
    pub jusbrasil: Arc<JusbrasilClient>,
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/datajud/consulta-processo", post(consulta_processo))
        .route(
            "/api/datajud/consulta-processo-auto",
            post(consulta_processo_auto),
        )
        .route("/api/jusbrasil/consulta-cpf", post(consulta_cpf))
        .route("/api/jusbrasil/consulta-cnj", post(consulta_cnj))
}

// ── Request/response bodies ──

#[derive(Deserialize)]
pub struct ConsultaProcessoRequest {
    pub numero_processo_cnj: String,
    pub tribunal: Tribunal,
}

#[derive(Deserialize)]
pub struct ConsultaProcessoAutoRequest {
    pub numero_processo_cnj: String,
}

#[derive(Serialize)]
pub struct ConsultaProcessoResponse {
    pub mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_processo_cnj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tribunal: Option<String>,
}

#[derive(Deserialize)]
pub struct ConsultaDocumentoRequest {
    pub document_number: String,
    #[serde(default)]
    pub cursor: String,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default = "default_segment")]
    pub segment: String,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_segment() -> String {
    DEFAULT_SEGMENT.to_string()
}

#[derive(Serialize)]
pub struct MensagemResponse {
    pub mensagem: String,
}

// ── Error mapping ──

/// Handler-level error, mapped to an HTTP status with a `detail` body.
pub enum ApiError {
    /// Upstream provider failure: 502.
    Upstream(LookupError),
    /// Exhausted fallback sweep: 404.
    NotFound(FallbackError),
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError::Upstream(err)
    }
}

impl From<FallbackError> for ApiError {
    fn from(err: FallbackError) -> Self {
        ApiError::NotFound(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Upstream(err) => {
                error!(error = %err, "upstream provider failure");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Erro ao consultar o provedor: {err}"),
                )
            }
            ApiError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// ── Handlers ──

/// Single-tribunal DataJud lookup. A miss is answered in-band with 200.
async fn consulta_processo(
    State(state): State<AppState>,
    Json(req): Json<ConsultaProcessoRequest>,
) -> Result<Json<ConsultaProcessoResponse>, ApiError> {
    let raw = state
        .datajud
        .search_by_cnj(&req.numero_processo_cnj, req.tribunal)
        .await?;

    let Some(source) = first_hit(&raw) else {
        let miss = CaseNotFound {
            case_number: req.numero_processo_cnj.clone(),
            tribunal: req.tribunal,
        };
        return Ok(Json(ConsultaProcessoResponse {
            mensagem: format!("❌ {miss}"),
            numero_processo_cnj: Some(req.numero_processo_cnj),
            tribunal: Some(req.tribunal.to_string()),
        }));
    };

    let record = ProcessRecord::from_single_case(source);
    Ok(Json(ConsultaProcessoResponse {
        mensagem: render_process_summary(Some(&record)),
        numero_processo_cnj: Some(record.case_number.clone()),
        tribunal: Some(record.court.clone()),
    }))
}

/// Fallback sweep across every tribunal, priority list first.
async fn consulta_processo_auto(
    State(state): State<AppState>,
    Json(req): Json<ConsultaProcessoAutoRequest>,
) -> Result<Json<ConsultaProcessoResponse>, ApiError> {
    let (record, tribunal) =
        search_with_fallback(&*state.datajud, &req.numero_processo_cnj, &DEFAULT_PRIORITY).await?;

    // Prefer the record's own court field; fall back to the tribunal that
    // answered when the payload omits it.
    let court = if record.court == ND {
        tribunal.to_string()
    } else {
        record.court.clone()
    };

    Ok(Json(ConsultaProcessoResponse {
        mensagem: render_process_summary(Some(&record)),
        numero_processo_cnj: Some(record.case_number.clone()),
        tribunal: Some(court),
    }))
}

/// Document-based lawsuit search on Jusbrasil.
async fn consulta_cpf(
    State(state): State<AppState>,
    Json(req): Json<ConsultaDocumentoRequest>,
) -> Result<Json<MensagemResponse>, ApiError> {
    let raw = state
        .jusbrasil
        .lawsuits_by_document(&req.document_number, &req.cursor, req.size, &req.segment)
        .await?;

    let entries = lawsuit_entries(&raw);
    Ok(Json(MensagemResponse {
        mensagem: render_lawsuit_list(&entries),
    }))
}

/// Single-case lookup on Jusbrasil's base-judicial API.
async fn consulta_cnj(
    State(state): State<AppState>,
    Json(req): Json<ConsultaProcessoAutoRequest>,
) -> Result<Json<MensagemResponse>, ApiError> {
    let raw = state.jusbrasil.case_by_cnj(&req.numero_processo_cnj).await?;

    let record = has_case(&raw).then(|| ProcessRecord::from_single_case(&raw));
    Ok(Json(MensagemResponse {
        mensagem: render_process_summary(record.as_ref()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        let resp = ApiError::Upstream(LookupError::Server {
            status: 500,
            body: "boom".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn exhausted_sweep_maps_to_not_found() {
        let resp = ApiError::NotFound(FallbackError::NotFound {
            case_number: "123".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn document_request_defaults() {
        let req: ConsultaDocumentoRequest =
            serde_json::from_value(json!({"document_number": "123.456.789-09"})).unwrap();
        assert_eq!(req.cursor, "");
        assert_eq!(req.size, DEFAULT_PAGE_SIZE);
        assert_eq!(req.segment, DEFAULT_SEGMENT);
    }

    #[test]
    fn tribunal_deserialises_from_code() {
        let req: ConsultaProcessoRequest = serde_json::from_value(json!({
            "numero_processo_cnj": "123",
            "tribunal": "TJSP"
        }))
        .unwrap();
        assert_eq!(req.tribunal, Tribunal::TJSP);
    }
}
