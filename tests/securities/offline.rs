use std::str::FromStr;

use chrono::NaiveDate;
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use intrinio_rs::securities::{
    AllSecurities, ClauseOperator, ScreenGroup, ScreenSecurities, SearchSecurities, SecurityById,
    SecurityDataPointNumber, SecurityDataPointText, SecurityHistoricalData,
    SecurityIntradayPrices, SecurityLatestDividendRecord, SecurityLatestEarningsRecord,
    SecurityRealtimePrice, SecurityStockPriceAdjustments, SecurityStockPrices,
};
use intrinio_rs::{Endpoint, Frequency, RealtimeSource, SortOrder};
use rust_decimal::Decimal;
use serde_json::json;

use crate::common::{TEST_KEY, client_for, fixture};

#[tokio::test]
async fn all_securities_sends_filters_and_default_page_size() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities")
            .query_param("active", "true")
            .query_param("exchange_mic", "XNGS")
            .query_param("stock_prices_after", "2024-01-02")
            .query_param("page_size", "100")
            .query_param("api_key", TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page1"));
    });

    let client = client_for(&server);
    let req = AllSecurities::new()
        .active(true)
        .exchange_mic("XNGS")
        .stock_prices_after(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    let page = client.send(&req).await.unwrap();

    mock.assert();
    assert_eq!(page.securities.len(), 2);
    assert_eq!(page.securities[0].ticker.as_deref(), Some("AAPL"));
    assert_eq!(page.securities[1].figi.as_deref(), Some("BBG000BPHFS9"));
    assert_eq!(page.next_page.as_deref(), Some("MjAyNC0wMS0wMg=="));
}

#[tokio::test]
async fn security_by_id_parses_full_record() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("security_AAPL"));
    });

    let client = client_for(&server);
    let sec = client.send(&SecurityById::new("AAPL")).await.unwrap();

    mock.assert();
    assert_eq!(sec.id, "sec_agjrgj");
    assert_eq!(sec.security_type.as_deref(), Some("Equity Shares"));
    assert_eq!(sec.alternate_tickers, vec!["AAPL:UQ", "AAPL:UR"]);
    assert_eq!(sec.round_lot_size, Some(Decimal::from(100)));
    assert_eq!(sec.first_stock_price, NaiveDate::from_ymd_opt(1980, 12, 12));
    assert_eq!(sec.last_corporate_action, None);
    assert!(sec.previous_tickers.is_empty());
}

#[tokio::test]
async fn stock_prices_default_to_daily_frequency() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/prices")
            .query_param("frequency", "daily")
            .query_param("page_size", "100");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("stock_prices_AAPL"));
    });

    let client = client_for(&server);
    let prices = client.send(&SecurityStockPrices::new("AAPL")).await.unwrap();

    mock.assert();
    assert_eq!(prices.stock_prices.len(), 2);
    let first = &prices.stock_prices[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 28).unwrap());
    assert_eq!(first.close, Some(Decimal::from_str("171.48").unwrap()));
    assert_eq!(prices.stock_prices[1].change, None);
    assert_eq!(
        prices.security.as_ref().and_then(|s| s.ticker.as_deref()),
        Some("AAPL")
    );
    assert_eq!(prices.next_page.as_deref(), Some("cursor-2024-03-26"));
}

#[tokio::test]
async fn stock_prices_send_overridden_frequency_and_dates() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/prices")
            .query_param("start_date", "2023-01-01")
            .query_param("end_date", "2023-12-31")
            .query_param("frequency", "weekly")
            .query_param("page_size", "10");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("stock_prices_AAPL"));
    });

    let client = client_for(&server);
    let req = SecurityStockPrices::new("AAPL")
        .start_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
        .frequency(Frequency::Weekly)
        .page_size(10);
    client.send(&req).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn historical_data_uses_tag_path_and_sort_defaults() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/historical_data/marketcap")
            .query_param("frequency", "daily")
            .query_param("sort_order", "asc")
            .query_param("type", "FY");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("historical_data_AAPL_marketcap"));
    });

    let client = client_for(&server);
    let req = SecurityHistoricalData::new("AAPL", "marketcap")
        .sort_order(SortOrder::Asc)
        .period_type("FY");
    let data = client.send(&req).await.unwrap();

    mock.assert();
    assert_eq!(data.historical_data.len(), 2);
    assert_eq!(
        data.historical_data[0].value,
        Some(Decimal::from(2_647_954_000_000_i64))
    );
    assert!(data.next_page.is_none());
}

#[tokio::test]
async fn data_points_decode_bare_number_and_text() {
    let server = MockServer::start();

    let number = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/data_point/marketcap/number");
        then.status(200)
            .header("content-type", "application/json")
            .body("2647954000000.5");
    });
    let text = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL/data_point/sector/text");
        then.status(200)
            .header("content-type", "application/json")
            .body("\"Technology\"");
    });

    let client = client_for(&server);
    let value = client
        .send(&SecurityDataPointNumber::new("AAPL", "marketcap"))
        .await
        .unwrap();
    let sector = client
        .send(&SecurityDataPointText::new("AAPL", "sector"))
        .await
        .unwrap();

    number.assert();
    text.assert();
    assert_eq!(value, Decimal::from_str("2647954000000.5").unwrap());
    assert_eq!(sector, "Technology");
}

#[tokio::test]
async fn latest_dividend_record_parses_dates_and_amount() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL/dividends/latest");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("dividend_latest_AAPL"));
    });

    let client = client_for(&server);
    let div = client
        .send(&SecurityLatestDividendRecord::new("AAPL"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(div.dividend_amount, Some(Decimal::from_str("0.24").unwrap()));
    assert_eq!(div.ex_dividend_date, NaiveDate::from_ymd_opt(2024, 2, 9));
    assert_eq!(div.frequency.as_deref(), Some("quarterly"));
}

#[tokio::test]
async fn latest_earnings_record_parses_next_release() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/securities/AAPL/earnings/latest");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "quarter": "Q1",
                "time_of_day": "after_market",
                "earnings_date": "2024-02-01",
                "next_earnings_date": "2024-05-02",
                "next_earnings_fiscal_year": 2024,
                "next_earnings_quarter": "Q2",
                "status": "confirmed"
            }));
    });

    let client = client_for(&server);
    let rec = client
        .send(&SecurityLatestEarningsRecord::new("AAPL"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(rec.next_earnings_date, NaiveDate::from_ymd_opt(2024, 5, 2));
    assert_eq!(rec.next_earnings_fiscal_year, Some(2024));
    assert!(rec.transcript_url.is_none());
}

#[tokio::test]
async fn price_adjustments_send_window_and_parse_factors() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/NVDA/prices/adjustments")
            .query_param("start_date", "2024-01-01")
            .query_param("page_size", "100");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "stock_price_adjustments": [
                    {"date": "2024-06-10", "factor": 0.1, "dividend": 0.0, "split_ratio": 10.0}
                ],
                "security": {"id": "sec_nvda01", "ticker": "NVDA"},
                "next_page": null
            }));
    });

    let client = client_for(&server);
    let req = SecurityStockPriceAdjustments::new("NVDA")
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let page = client.send(&req).await.unwrap();

    mock.assert();
    let adj = &page.stock_price_adjustments[0];
    assert_eq!(adj.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    assert_eq!(adj.split_ratio, Some(Decimal::from(10)));
    assert!(page.next_page.is_none());
}

#[tokio::test]
async fn intraday_prices_pass_times_through() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/prices/intraday")
            .query_param("source", "iex")
            .query_param("start_date", "2024-03-28")
            .query_param("start_time", "09:30:00")
            .query_param("end_time", "10:00:00");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "intraday_prices": [
                    {"time": "2024-03-28T13:30:01.000Z", "last_price": 171.19, "volume": 1200, "source": "iex"}
                ],
                "source": "iex",
                "next_page": "intra-2"
            }));
    });

    let client = client_for(&server);
    let req = SecurityIntradayPrices::new("AAPL")
        .source(RealtimeSource::Iex)
        .start_date(NaiveDate::from_ymd_opt(2024, 3, 28).unwrap())
        .start_time("09:30:00")
        .end_time("10:00:00");
    let page = client.send(&req).await.unwrap();

    mock.assert();
    assert_eq!(page.intraday_prices.len(), 1);
    assert_eq!(
        page.intraday_prices[0].last_price,
        Some(Decimal::from_str("171.19").unwrap())
    );
    assert_eq!(page.next_page.as_deref(), Some("intra-2"));
    assert!(req.request_query().iter().all(|(k, _)| k != "end_date"));
}

#[tokio::test]
async fn realtime_price_sends_source_only_when_set() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/AAPL/prices/realtime")
            .query_param("source", "delayed_sip");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "last_price": 171.48,
                "last_time": "2024-03-28T19:59:59.000Z",
                "source": "delayed_sip",
                "security": {"id": "sec_agjrgj", "ticker": "AAPL"}
            }));
    });

    let client = client_for(&server);
    let price = client
        .send(&SecurityRealtimePrice::new("AAPL").source(RealtimeSource::DelayedSip))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(price.last_price, Some(Decimal::from_str("171.48").unwrap()));
    assert_eq!(price.source.as_deref(), Some("delayed_sip"));
    assert!(price.bid_price.is_none());

    let without = SecurityRealtimePrice::new("AAPL").request_query();
    assert!(without.is_empty());
}

#[tokio::test]
async fn search_sends_query_and_page_size() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/securities/search")
            .query_param("query", "apple inc")
            .query_param("page_size", "5");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("securities_page2"));
    });

    let client = client_for(&server);
    let found = client
        .send(&SearchSecurities::new("apple inc").page_size(5))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(found.securities.len(), 1);
}

#[tokio::test]
async fn screen_posts_logic_as_json_body() {
    let server = MockServer::start();

    let expected_body = json!({
        "operator": "AND",
        "clauses": [
            {"field": "marketcap", "operator": "gt", "value": "1000000000"},
            {"field": "pricetoearnings", "operator": "lt", "value": "30"}
        ],
        "groups": [
            {
                "operator": "OR",
                "clauses": [
                    {"field": "sector", "operator": "eq", "value": "Technology"}
                ]
            }
        ]
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/securities/screen")
            .query_param("order_column", "marketcap")
            .query_param("order_direction", "desc")
            .query_param("primary_only", "true")
            .query_param("page_size", "100")
            .json_body(expected_body);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("screen_results"));
    });

    let logic = ScreenGroup::all()
        .clause("marketcap", ClauseOperator::Gt, 1_000_000_000_u64)
        .clause("pricetoearnings", ClauseOperator::Lt, 30)
        .group(ScreenGroup::any().clause("sector", ClauseOperator::Eq, "Technology"));
    let req = ScreenSecurities::new(logic)
        .order_column("marketcap")
        .order_direction(SortOrder::Desc)
        .primary_only(true);

    let client = client_for(&server);
    let hits = client.send(&req).await.unwrap();

    mock.assert();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].security.ticker.as_deref(), Some("AAPL"));
    assert_eq!(
        hits[0].number("pricetoearnings"),
        Some(Decimal::from_str("26.7").unwrap())
    );
    assert_eq!(hits[1].number("pricetoearnings"), None);
}

#[test]
fn values_are_sent_as_given() {
    let search = SearchSecurities::new("Apple ").request().unwrap();
    assert_eq!(search.query_value("query"), Some("Apple "));

    let by_id = SecurityById::new(" AAPL").request().unwrap();
    assert_eq!(by_id.segments(), &["securities", " AAPL"]);

    assert!(SearchSecurities::new("  ").request().is_err());
}

trait QueryOf {
    fn request_query(&self) -> Vec<(String, String)>;
}

impl<E: Endpoint> QueryOf for E {
    fn request_query(&self) -> Vec<(String, String)> {
        self.request().unwrap().query_pairs().to_vec()
    }
}
