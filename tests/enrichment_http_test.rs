//! `HttpDemographicsSource` against a local axum server that imitates the
//! three lookup services.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use people_registry::config::EnrichmentEndpoints;
use people_registry::enrichment::{
    DemographicsSource, Enricher, EnrichmentError, HttpDemographicsSource, Lookup,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Deserialize)]
struct NameQuery {
    name: String,
}

async fn agify(Query(q): Query<NameQuery>) -> impl IntoResponse {
    match q.name.as_str() {
        "Alice" => Json(json!({ "count": 10, "name": "Alice", "age": 34 })),
        _ => Json(json!({ "count": 0, "name": q.name, "age": null })),
    }
}

async fn genderize(Query(q): Query<NameQuery>) -> impl IntoResponse {
    match q.name.as_str() {
        "Alice" => Json(json!({ "name": "Alice", "gender": "female", "probability": 0.98 })),
        _ => Json(json!({ "name": q.name, "gender": null, "probability": 0.0 })),
    }
}

async fn nationalize(Query(q): Query<HashMap<String, String>>) -> impl IntoResponse {
    match q.get("name").map(String::as_str) {
        Some("Alice") => Json(json!({
            "name": "Alice",
            "country": [
                { "country_id": "US", "probability": 0.3 },
                { "country_id": "GB", "probability": 0.1 }
            ]
        }))
        .into_response(),
        Some("Broken") => (StatusCode::OK, "definitely not json").into_response(),
        _ => Json(json!({ "name": "?", "country": [] })).into_response(),
    }
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn lookup_services() -> EnrichmentEndpoints {
    let base = spawn_server(
        Router::new()
            .route("/age", get(agify))
            .route("/gender", get(genderize))
            .route("/nationality", get(nationalize))
            .route("/down", get(unavailable)),
    )
    .await;
    EnrichmentEndpoints {
        agify: format!("{base}/age"),
        genderize: format!("{base}/gender"),
        nationalize: format!("{base}/nationality"),
    }
}

#[tokio::test]
async fn reads_all_three_services() {
    let source = HttpDemographicsSource::new(lookup_services().await);

    assert_eq!(source.age("Alice").await.unwrap(), Some(34));
    assert_eq!(source.gender("Alice").await.unwrap().as_deref(), Some("female"));
    assert_eq!(source.nationalities("Alice").await.unwrap(), vec!["US", "GB"]);
}

#[tokio::test]
async fn null_answers_become_none_and_empty() {
    let source = HttpDemographicsSource::new(lookup_services().await);

    assert_eq!(source.age("Zyxw").await.unwrap(), None);
    assert_eq!(source.gender("Zyxw").await.unwrap(), None);
    assert!(source.nationalities("Zyxw").await.unwrap().is_empty());

    let demographics = Enricher::new(Arc::new(source)).enrich("Zyxw").await.unwrap();
    assert_eq!(demographics.age, 0);
    assert_eq!(demographics.gender, "");
    assert_eq!(demographics.nationality, "Unknown");
}

#[tokio::test]
async fn error_status_is_reported() {
    let mut endpoints = lookup_services().await;
    endpoints.genderize = endpoints.agify.replace("/age", "/down");
    let source = HttpDemographicsSource::new(endpoints);

    let err = source.gender("Alice").await.unwrap_err();
    assert_eq!(err.lookup(), Lookup::Gender);
    assert!(matches!(
        err,
        EnrichmentError::Status { status, .. } if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let source = HttpDemographicsSource::new(lookup_services().await);

    let err = source.nationalities("Broken").await.unwrap_err();
    assert!(matches!(
        err,
        EnrichmentError::Decode { lookup: Lookup::Nationality, .. }
    ));
}

#[tokio::test]
async fn unreachable_service_is_a_request_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpDemographicsSource::new(EnrichmentEndpoints {
        agify: format!("http://{addr}/age"),
        ..EnrichmentEndpoints::default()
    });
    let err = source.age("Alice").await.unwrap_err();
    assert!(matches!(err, EnrichmentError::Request { lookup: Lookup::Age, .. }));
}
