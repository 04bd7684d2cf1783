use httpmock::Method::GET;
use httpmock::MockServer;
use intrinio_rs::securities::{
    SecurityById, SecurityDataPointText, SecurityHistoricalData, SecurityStockPrices,
};
use intrinio_rs::technicals::{Indicator, SecurityTechnicals};
use intrinio_rs::{IntrinioClient, IntrinioError};
use url::Url;

use crate::common::{TEST_KEY, blocking_client_for, client_for};

#[tokio::test]
async fn unknown_identifier_maps_to_not_found_status() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/NOPE");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"error":"Not Found","message":"The requested security could not be found"}"#);
    });

    let client = client_for(&server);
    let err = client.send(&SecurityById::new("NOPE")).await.unwrap_err();

    mock.assert();
    assert!(err.is_not_found());
    match err {
        IntrinioError::Status { status, url, body } => {
            assert_eq!(status, 404);
            assert!(url.contains("/securities/NOPE"), "url was {url}");
            assert!(body.contains("could not be found"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_error_redacts_api_key() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL/historical_data/bogus_tag");
        then.status(401).body(r#"{"error":"Unauthorized"}"#);
    });

    let client = client_for(&server);
    let err = client
        .send(&SecurityHistoricalData::new("AAPL", "bogus_tag"))
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.status(), Some(401));
    assert!(!err.is_not_found());
    let IntrinioError::Status { url, .. } = &err else {
        panic!("expected Status error, got {err:?}");
    };
    assert!(url.contains("api_key=***"), "url was {url}");
    assert!(!url.contains(TEST_KEY));
    assert!(!err.to_string().contains(TEST_KEY));
}

#[tokio::test]
async fn server_error_keeps_response_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL/prices");
        then.status(500).body("upstream exploded");
    });

    let client = client_for(&server);
    let err = client
        .send(&SecurityStockPrices::new("AAPL"))
        .await
        .unwrap_err();

    mock.assert();
    match err {
        IntrinioError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"id\": ");
    });

    let client = client_for(&server);
    let err = client.send(&SecurityById::new("AAPL")).await.unwrap_err();

    mock.assert();
    assert!(matches!(err, IntrinioError::Json(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn empty_identifier_is_rejected_before_any_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let by_id = client.send(&SecurityById::new("")).await.unwrap_err();
    let technicals = client
        .send(&SecurityTechnicals::new("   ", Indicator::rsi()))
        .await
        .unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(by_id, IntrinioError::InvalidParameter(ref m) if m.contains("identifier")));
    assert!(matches!(technicals, IntrinioError::InvalidParameter(_)));
}

#[tokio::test]
async fn dot_segments_are_rejected_before_any_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("content-type", "application/json")
            .body("\"collapsed\"");
    });

    let client = client_for(&server);
    let parent = client
        .send(&SecurityDataPointText::new("AAPL", ".."))
        .await
        .unwrap_err();
    let current = client.send(&SecurityById::new(".")).await.unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(parent, IntrinioError::InvalidParameter(ref m) if m.contains("tag")));
    assert!(matches!(current, IntrinioError::InvalidParameter(ref m) if m.contains("identifier")));
}

#[tokio::test]
async fn reserved_characters_stay_inside_one_segment() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(404).body(r#"{"error":"Not Found"}"#);
    });

    let client = client_for(&server);
    let slash = client.send(&SecurityById::new("BRK/A")).await.unwrap_err();
    let space = client
        .send(&SecurityDataPointText::new("BRK A", "name"))
        .await
        .unwrap_err();

    mock.assert_hits(2);
    let IntrinioError::Status { url, .. } = &slash else {
        panic!("expected Status error, got {slash:?}");
    };
    assert!(url.contains("/securities/BRK%2FA?"), "url was {url}");
    let IntrinioError::Status { url, .. } = &space else {
        panic!("expected Status error, got {space:?}");
    };
    assert!(url.contains("/securities/BRK%20A/data_point/name/text"), "url was {url}");
}

#[test]
fn blocking_client_reports_the_same_error_kinds() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/NOPE");
        then.status(404).body(r#"{"error":"Not Found"}"#);
    });

    let client = blocking_client_for(&server);
    let not_found = client.send(&SecurityById::new("NOPE")).unwrap_err();
    let empty = client.send(&SecurityById::new("")).unwrap_err();
    let dots = client
        .send(&SecurityDataPointText::new("AAPL", ".."))
        .unwrap_err();

    mock.assert_hits(1);
    assert!(not_found.is_not_found());
    assert!(matches!(empty, IntrinioError::InvalidParameter(_)));
    assert!(matches!(dots, IntrinioError::InvalidParameter(_)));
}

#[tokio::test]
async fn unreachable_host_is_an_http_error() {
    let client = IntrinioClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/").unwrap())
        .api_key(TEST_KEY)
        .build()
        .unwrap();

    let err = client.send(&SecurityById::new("AAPL")).await.unwrap_err();

    assert!(matches!(err, IntrinioError::Http(_)), "got {err:?}");
}
