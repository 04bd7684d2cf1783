use futures::{StreamExt, TryStreamExt};
use intrinio_rs::securities::AllSecurities;
use intrinio_rs::stock_exchanges::StockExchangeSecurities;
use intrinio_rs::{IntrinioClient, Page};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = IntrinioClient::from_env()?;

    // 1. Manual paging: feed `next_page` back until it runs out.
    println!("--- Active NASDAQ securities, first three pages ---");
    let mut req = AllSecurities::new().active(true).exchange_mic("XNGS").page_size(50);
    for n in 1..=3 {
        let page = client.send(&req).await?;
        println!("  page {n}: {} securities", page.securities.len());
        match page.next_page() {
            Some(cursor) => req = req.next_page(cursor),
            None => break,
        }
    }
    println!();

    // 2. The same walk as a stream, bounded to five pages.
    println!("--- Streaming NYSE listings ---");
    let pages: Vec<_> = client
        .pages(StockExchangeSecurities::new("XNYS").page_size(100))
        .take(5)
        .try_collect()
        .await?;
    let tickers: Vec<_> = pages
        .iter()
        .flat_map(|p| p.securities.iter())
        .filter_map(|s| s.ticker.as_deref())
        .collect();
    println!("  {} tickers, e.g. {:?}", tickers.len(), &tickers[..tickers.len().min(10)]);

    Ok(())
}
