use chrono::{Duration, Utc};
use intrinio_rs::securities::{
    SecurityById, SecurityDataPointNumber, SecurityLatestDividendRecord, SecurityRealtimePrice,
    SecurityStockPrices,
};
use intrinio_rs::stock_exchanges::AllStockExchanges;
use intrinio_rs::{Frequency, IntrinioClient, RealtimeSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client from INTRINIO_API_KEY with a 10-second timeout.
    let client = IntrinioClient::builder()
        .api_key(std::env::var(intrinio_rs::API_KEY_ENV)?)
        .timeout(Duration::seconds(10).to_std()?)
        .build()?;

    // 2. Look up a security by ticker.
    let aapl = client.send(&SecurityById::new("AAPL")).await?;
    println!("--- Security {} ---", aapl.id);
    println!("Name: {}", aapl.name.unwrap_or_default());
    println!("FIGI: {}", aapl.figi.unwrap_or_default());
    println!("Listed on: {}", aapl.listing_exchange_mic.unwrap_or_default());
    println!();

    // 3. Weekly prices for the last quarter.
    let today = Utc::now().date_naive();
    let prices = client
        .send(
            &SecurityStockPrices::new("AAPL")
                .start_date(today - Duration::days(90))
                .end_date(today)
                .frequency(Frequency::Weekly),
        )
        .await?;
    println!("--- Weekly prices ({} rows) ---", prices.stock_prices.len());
    for p in prices.stock_prices.iter().take(5) {
        println!(
            "  {}: close {} volume {}",
            p.date,
            p.close.unwrap_or_default(),
            p.volume.unwrap_or_default()
        );
    }
    println!();

    // 4. Single data points and the latest dividend.
    let marketcap = client
        .send(&SecurityDataPointNumber::new("AAPL", "marketcap"))
        .await?;
    println!("Market cap: {marketcap}");
    let dividend = client.send(&SecurityLatestDividendRecord::new("AAPL")).await?;
    println!(
        "Latest dividend: {} (ex-date {:?})",
        dividend.dividend_amount.unwrap_or_default(),
        dividend.ex_dividend_date
    );
    println!();

    // 5. A realtime quote, keeping the HTTP metadata.
    let quote = client
        .send_with_http_info(&SecurityRealtimePrice::new("AAPL").source(RealtimeSource::DelayedSip))
        .await?;
    println!(
        "Realtime: {} at {:?} (HTTP {})",
        quote.data.last_price.unwrap_or_default(),
        quote.data.last_time,
        quote.status
    );
    println!();

    // 6. US stock exchanges.
    let exchanges = client
        .send(&AllStockExchanges::new().country_code("US"))
        .await?;
    for ex in &exchanges.stock_exchanges {
        println!(
            "  {} ({})",
            ex.name.as_deref().unwrap_or("?"),
            ex.mic.as_deref().unwrap_or("?")
        );
    }

    Ok(())
}
