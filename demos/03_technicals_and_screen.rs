use intrinio_rs::securities::{ClauseOperator, ScreenGroup, ScreenSecurities};
use intrinio_rs::technicals::{Indicator, SecurityTechnicals};
use intrinio_rs::{IntrinioClient, PriceKey, SortOrder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    intrinio_rs::init_tracing_for_tests();

    let client = IntrinioClient::from_env()?;

    // 1. Indicators with default and custom parameters.
    let rsi = client
        .send(&SecurityTechnicals::new("MSFT", Indicator::rsi()).page_size(5))
        .await?;
    println!("--- RSI(14) for MSFT ---");
    for point in &rsi.technicals {
        println!("  {}: {:.2}", point.date_time, point.value("rsi").unwrap_or(f64::NAN));
    }

    let bands = Indicator::Bb {
        period: 50,
        standard_deviations: 2.5,
        price_key: PriceKey::Close,
    };
    let bb = client
        .send(&SecurityTechnicals::new("MSFT", bands).page_size(5))
        .await?;
    println!("--- Bollinger Bands(50, 2.5) for MSFT ---");
    for point in &bb.technicals {
        println!(
            "  {}: lower {:?} upper {:?}",
            point.date_time,
            point.value("lower_band"),
            point.value("upper_band")
        );
    }
    println!();

    // 2. Large caps that are either cheap or high-yield.
    let logic = ScreenGroup::all()
        .clause("marketcap", ClauseOperator::Gt, 10_000_000_000_u64)
        .group(
            ScreenGroup::any()
                .clause("pricetoearnings", ClauseOperator::Lt, 12)
                .clause("dividendyield", ClauseOperator::Gte, 0.04),
        );
    let hits = client
        .send(
            &ScreenSecurities::new(logic)
                .order_column("marketcap")
                .order_direction(SortOrder::Desc)
                .primary_only(true)
                .page_size(20),
        )
        .await?;
    println!("--- Screen: {} matches ---", hits.len());
    for hit in &hits {
        println!(
            "  {:<6} P/E {:?}",
            hit.security.ticker.as_deref().unwrap_or("?"),
            hit.number("pricetoearnings")
        );
    }

    Ok(())
}
