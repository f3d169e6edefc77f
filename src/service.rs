//! HTTP routing for the projection and scheme endpoints
//!
//! Transport independent: the Lambda binary translates its request into a
//! call to [`Service::route`] and copies the [`ApiResponse`] back out.
//!
//!   POST /projection  {growthRatePercent, loanTenureYears, workingCapitalMonths}
//!   GET  /schemes?search=&stage=&sector=&lang=
//!   GET  /sectors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DprError;
use crate::export::{ChartExporter, JsonExporter};
use crate::language::Language;
use crate::projection::{ProjectionEngine, ProjectionInput, ProjectionPoint, ProjectionSummary};
use crate::schemes::{Catalog, FilterCriteria, Scheme};

/// Projection request body. Missing fields take the initial slider values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    #[serde(default = "default_growth_rate")]
    pub growth_rate_percent: f64,

    #[serde(default = "default_loan_tenure")]
    pub loan_tenure_years: u32,

    #[serde(default = "default_working_capital")]
    pub working_capital_months: u32,
}

fn default_growth_rate() -> f64 { ProjectionInput::default().growth_rate_percent }
fn default_loan_tenure() -> u32 { ProjectionInput::default().loan_tenure_years }
fn default_working_capital() -> u32 { ProjectionInput::default().working_capital_months }

impl From<ProjectionRequest> for ProjectionInput {
    fn from(req: ProjectionRequest) -> Self {
        ProjectionInput::new(req.growth_rate_percent, req.loan_tenure_years, req.working_capital_months)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub input: ProjectionInput,
    pub series: Vec<ProjectionPoint>,
    pub dscr: f64,
    pub summary: ProjectionSummary,
}

/// Status code plus JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, &format!("Failed to serialize response: {}", e)),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self { status, body }
    }

    fn from_dpr_error(err: &DprError) -> Self {
        let status = if err.is_client_error() { 400 } else { 500 };
        Self::error(status, &err.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Engine and catalog built once per process
#[derive(Debug, Clone, Default)]
pub struct Service {
    engine: ProjectionEngine,
    catalog: Catalog,
}

impl Service {
    pub fn new(engine: ProjectionEngine, catalog: Catalog) -> Self {
        Self { engine, catalog }
    }

    /// Dispatch one request
    pub fn route(&self, method: &str, path: &str, query: &HashMap<String, String>, body: &str) -> ApiResponse {
        let path = path.trim_end_matches('/');
        let method = method.to_ascii_uppercase();

        if method == "OPTIONS" {
            return ApiResponse { status: 200, body: String::new() };
        }

        let response = match (method.as_str(), path) {
            ("POST", "/projection") => self.projection(body),
            ("GET", "/schemes") => self.schemes(query),
            ("GET", "/sectors") => ApiResponse::json(&self.catalog.sectors()),
            (_, "/projection") | (_, "/schemes") | (_, "/sectors") => {
                ApiResponse::error(405, &format!("Method {} not allowed on {}", method, path))
            }
            _ => ApiResponse::error(404, &format!("No route for {}", path)),
        };

        log::info!("{} {} -> {}", method, path, response.status);
        response
    }

    fn projection(&self, body: &str) -> ApiResponse {
        let body = if body.trim().is_empty() { "{}" } else { body };

        let request: ProjectionRequest = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(e) => return ApiResponse::error(400, &format!("Invalid JSON: {}", e)),
        };

        match self.engine.project(&request.into()) {
            Ok(result) => {
                let summary = result.summary();
                ApiResponse::json(&ProjectionResponse {
                    input: result.input,
                    series: result.series,
                    dscr: result.dscr,
                    summary,
                })
            }
            Err(e) => ApiResponse::from_dpr_error(&e),
        }
    }

    fn schemes(&self, query: &HashMap<String, String>) -> ApiResponse {
        let param = |key: &str| query.get(key).map(String::as_str);

        let criteria = match FilterCriteria::from_params(param("search"), param("stage"), param("sector")) {
            Ok(c) => c,
            Err(e) => return ApiResponse::from_dpr_error(&e),
        };
        let matched: Vec<&Scheme> = self.catalog.filter(&criteria);

        match param("lang") {
            None => ApiResponse::json(&matched),
            Some(raw) => {
                let language: Language = match raw.parse() {
                    Ok(l) => l,
                    Err(e) => return ApiResponse::from_dpr_error(&e),
                };
                let exporter = JsonExporter { pretty: false };
                let mut buf = Vec::new();
                match exporter.export_schemes(&matched, language, &mut buf) {
                    Ok(()) => ApiResponse {
                        status: 200,
                        body: String::from_utf8_lossy(&buf).trim_end().to_string(),
                    },
                    Err(e) => ApiResponse::from_dpr_error(&e),
                }
            }
        }
    }
}
