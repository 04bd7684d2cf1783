use intrinio_rs::BlockingClient;
use intrinio_rs::bulk_downloads::BulkDownloadLinks;
use intrinio_rs::securities::SearchSecurities;
use intrinio_rs::stock_exchanges::StockExchangePrices;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = BlockingClient::from_env()?;

    let found = client.send(&SearchSecurities::new("berkshire").page_size(5))?;
    println!("--- Search results ---");
    for s in &found.securities {
        println!("  {:?} {:?}", s.ticker, s.name);
    }
    println!();

    // Walk two pages of exchange-wide prices.
    println!("--- XNYS prices ---");
    for page in client.pages(StockExchangePrices::new("XNYS").page_size(25)).take(2) {
        let page = page?;
        println!("  {} rows", page.stock_prices.len());
    }
    println!();

    let links = client.send(&BulkDownloadLinks::new())?;
    for dataset in &links.bulk_downloads {
        println!(
            "{} ({} files, {} bytes)",
            dataset.name.as_deref().unwrap_or("?"),
            dataset.links.len(),
            dataset.data_length_bytes.as_deref().unwrap_or("?")
        );
    }

    Ok(())
}
