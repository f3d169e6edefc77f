//! AWS Lambda handler serving the projection and scheme endpoints
//!
//! Supports Lambda Function URLs for direct HTTP access:
//!   POST /projection, GET /schemes, GET /sectors

use std::collections::HashMap;

use dpr_engine::projection::{ProjectionConstants, ProjectionEngine};
use dpr_engine::schemes::Catalog;
use dpr_engine::service::{ApiResponse, Service};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

fn to_response(api: ApiResponse) -> Result<Response<Body>, Error> {
    let body = if api.body.is_empty() {
        Body::Empty
    } else {
        Body::Text(api.body)
    };

    let response = Response::builder()
        .status(api.status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(body)?;
    Ok(response)
}

/// Lambda handler function
async fn handler(service: &Service, event: Request) -> Result<Response<Body>, Error> {
    let body = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => String::new(),
    };

    let query: HashMap<String, String> = event
        .query_string_parameters()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let response = service.route(event.method().as_str(), event.uri().path(), &query, &body);
    to_response(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // Constants and catalog are built once per cold start
    let constants = ProjectionConstants::from_env()?;
    let service = Service::new(ProjectionEngine::new(constants), Catalog::seed());
    let service = &service;

    run(service_fn(move |event: Request| async move { handler(service, event).await })).await
}
