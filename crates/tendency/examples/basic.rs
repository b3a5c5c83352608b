//! Example: forecast an accelerating series
//!
//! Run with:
//! ```bash
//! RUST_LOG=tendency_core=debug cargo run --example basic
//! ```

use tendency::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tendency=info,tendency_core=info".into()),
        )
        .init();

    let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0, 11.0, 13.0, 15.0, 18.0, 21.0];
    println!("=== Tendency Forecast Demo ===\n");
    println!("Series: {:?}\n", series);

    let result = forecast(&series, None, None)?;
    println!("Default forecast (horizon = {}):", series.len());
    println!("  lower:    {:.4}", result.lower_estimate);
    println!("  expected: {:.4}", result.expected);
    println!("  upper:    {:.4}\n", result.upper_estimate);

    let config = ForecastBuilder::new().horizon(3).rms(true).build()?;
    let breakdown = config.breakdown(&series)?;
    println!("RMS forecast, horizon 3:");
    println!(
        "  rising  p={:.3} bounds={:?}",
        breakdown.split.prob_positive,
        breakdown.positive.bounds.as_array()
    );
    println!(
        "  falling p={:.3} bounds={:?}",
        breakdown.split.prob_negative,
        breakdown.negative.bounds.as_array()
    );
    println!("  result   {:?}\n", breakdown.result.as_tuple());

    let scenarios = config.scenarios(&series)?;
    println!("Scenarios ({}):", scenarios.len());
    for value in &scenarios.values {
        println!("  {:.4}", value);
    }

    println!("\nConfiguration:\n{}", config.to_json()?);
    Ok(())
}
