use httpmock::Method::GET;
use httpmock::MockServer;
use intrinio_rs::securities::SecurityById;
use intrinio_rs::stock_exchanges::AllStockExchanges;

use crate::common::{blocking_client_for, client_for, fixture};

#[tokio::test]
async fn http_info_exposes_status_and_headers() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .header("x-ratelimit-remaining", "98")
            .body(fixture("security_AAPL"));
    });

    let client = client_for(&server);
    let req = SecurityById::new("AAPL");
    let info = client.send_with_http_info(&req).await.unwrap();
    let plain = client.send(&req).await.unwrap();

    mock.assert_hits(2);
    assert_eq!(info.status, 200);
    assert_eq!(info.header("x-ratelimit-remaining"), Some("98"));
    assert_eq!(info.header("content-type"), Some("application/json"));
    assert_eq!(info.header("x-missing"), None);
    assert_eq!(info.data, plain);
}

#[tokio::test]
async fn http_info_map_keeps_metadata() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock_exchanges");
        then.status(200)
            .header("content-type", "application/json")
            .header("x-request-id", "req-42")
            .body(fixture("stock_exchanges"));
    });

    let client = client_for(&server);
    let count = client
        .send_with_http_info(&AllStockExchanges::new())
        .await
        .unwrap()
        .map(|page| page.stock_exchanges.len());

    mock.assert();
    assert_eq!(count.status, 200);
    assert_eq!(count.header("x-request-id"), Some("req-42"));
    assert_eq!(count.into_data(), 2);
}

#[test]
fn blocking_http_info_matches_plain_send() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .header("x-ratelimit-remaining", "97")
            .body(fixture("security_AAPL"));
    });

    let client = blocking_client_for(&server);
    let req = SecurityById::new("AAPL");
    let info = client.send_with_http_info(&req).unwrap();
    let plain = client.send(&req).unwrap();

    mock.assert_hits(2);
    assert_eq!(info.status, 200);
    assert_eq!(info.header("x-ratelimit-remaining"), Some("97"));
    assert_eq!(info.data, plain);
}
