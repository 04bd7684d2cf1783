use futures::{StreamExt, TryStreamExt};
use httpmock::Method::GET;
use httpmock::MockServer;
use intrinio_rs::securities::{AllSecurities, SecurityStockPrices};
use intrinio_rs::{IntrinioError, Page};

use crate::common::{blocking_client_for, client_for, fixture};

const FIRST_CURSOR: &str = "MjAyNC0wMS0wMg==";

#[tokio::test]
async fn returned_cursor_is_passed_back_unmodified() {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/securities")
            .query_param("next_page", "start");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page1"));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/securities")
            .query_param("page_size", "100")
            .query_param("next_page", FIRST_CURSOR);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page2"));
    });

    let client = client_for(&server);
    let req = AllSecurities::new().next_page("start");

    let page1 = client.send(&req).await.unwrap();
    let cursor = page1.next_page().unwrap().to_string();
    let page2 = client.send(&req.next_page(cursor)).await.unwrap();

    first.assert();
    second.assert();
    assert_eq!(page2.securities[0].ticker.as_deref(), Some("GOOGL"));
    assert!(page2.next_page().is_none());
}

#[tokio::test]
async fn pages_stream_walks_until_cursor_is_absent() {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/securities")
            .query_param("next_page", "start");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page1"));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/securities")
            .query_param("next_page", FIRST_CURSOR);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page2"));
    });

    let client = client_for(&server);
    let pages: Vec<_> = client
        .pages(AllSecurities::new().next_page("start"))
        .try_collect()
        .await
        .unwrap();

    first.assert_hits(1);
    second.assert_hits(1);
    let tickers: Vec<_> = pages
        .iter()
        .flat_map(|p| p.securities.iter())
        .filter_map(|s| s.ticker.as_deref())
        .collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT", "GOOGL"]);
}

#[tokio::test]
async fn pages_stream_ends_after_an_error() {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/prices")
            .query_param("next_page", "begin");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("stock_prices_AAPL"));
    });
    let failing = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/prices")
            .query_param("next_page", "cursor-2024-03-26");
        then.status(503).body("{\"error\":\"Service Unavailable\"}");
    });

    let client = client_for(&server);
    let results: Vec<_> = client
        .pages(SecurityStockPrices::new("AAPL").next_page("begin"))
        .collect()
        .await;

    first.assert_hits(1);
    failing.assert_hits(1);
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    match &results[1] {
        Err(IntrinioError::Status { status, .. }) => assert_eq!(*status, 503),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[test]
fn blocking_pages_iterator_follows_the_same_cursors() {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/securities")
            .query_param("next_page", "start");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page1"));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/securities")
            .query_param("next_page", FIRST_CURSOR);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page2"));
    });

    let client = blocking_client_for(&server);
    let pages = client
        .pages(AllSecurities::new().next_page("start"))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    first.assert_hits(1);
    second.assert_hits(1);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].securities.len(), 1);
}
