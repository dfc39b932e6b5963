//! Manual smoke test for the OpenAI-backed normalizer.
//!
//! Run with: cargo run -p openai-completion --example fetch_shocks
//! Or with custom countries: cargo run -p openai-completion --example fetch_shocks -- Japan France
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication

use openai_completion::OpenAiCompletion;
use shock_core::{CountryPair, Normalizer};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get countries from command line args or use defaults
    let args: Vec<String> = env::args().collect();
    let (home, visiting) = if args.len() > 2 {
        (args[1].clone(), args[2].clone())
    } else {
        ("Japan".to_string(), "France".to_string())
    };

    println!("Initializing OpenAiCompletion...");
    let provider = OpenAiCompletion::from_env()?;
    println!("API URL: {}", provider.config().api_url);
    println!("Model: {}", provider.config().model);
    println!();

    let normalizer = Normalizer::new(Arc::new(provider));
    let pair = CountryPair::new(&home, &visiting);

    println!("Fetching culture shocks for {} -> {}...\n", home, visiting);

    let records = normalizer.normalize(&pair).await?;

    println!("=== {} shocks ===", records.len());
    for record in records {
        println!("Shock: {}", record.shock);
        println!("  Severity: {}", record.severity);
        println!("  Tips: {}", record.tips);
    }
    println!("================");

    Ok(())
}
