//! Fetcher behaviour against a live (stub) upstream over HTTP.

mod common;

use common::{pikachu, start_stub_upstream};
use pokegate_core::{EntitySource, GateError, PokeApiFetcher};

#[tokio::test]
async fn test_fetch_by_name_and_id() {
    let (base, stub) = start_stub_upstream().await;
    let fetcher = PokeApiFetcher::with_base_url(&base).unwrap();

    let record = fetcher.fetch_by_name("pikachu").await.unwrap();
    assert_eq!(record.as_value(), &pikachu());
    assert_eq!(record.abilities(), vec!["static", "lightning-rod"]);

    let record = fetcher.fetch_by_id(151).await.unwrap();
    assert_eq!(record.id(), Some(151));
    assert_eq!(stub.hits(), 2);
}

#[tokio::test]
async fn test_upstream_404_is_not_found() {
    let (base, _stub) = start_stub_upstream().await;
    let fetcher = PokeApiFetcher::with_base_url(&base).unwrap();

    let err = fetcher.fetch_by_name("missingno").await.unwrap_err();
    assert!(matches!(err, GateError::NotFound { ref name } if name == "missingno"));
}

#[tokio::test]
async fn test_upstream_error_status_is_unavailable() {
    let (base, stub) = start_stub_upstream().await;
    stub.go_offline();
    let fetcher = PokeApiFetcher::with_base_url(&base).unwrap();

    let err = fetcher.fetch_by_id(1).await.unwrap_err();
    assert!(matches!(
        err,
        GateError::UpstreamUnavailable {
            status_code: Some(503),
            ..
        }
    ));
}

#[tokio::test]
async fn test_undecodable_body_is_malformed() {
    let (base, _stub) = start_stub_upstream().await;
    let fetcher = PokeApiFetcher::with_base_url(&base).unwrap();

    let err = fetcher.fetch_by_name("garbage").await.unwrap_err();
    assert!(matches!(err, GateError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_upstream_is_unavailable() {
    let fetcher = PokeApiFetcher::with_base_url("http://127.0.0.1:1/api/v2/pokemon").unwrap();

    let err = fetcher.fetch_by_name("pikachu").await.unwrap_err();
    assert!(matches!(
        err,
        GateError::UpstreamUnavailable {
            status_code: None,
            ..
        }
    ));
}
