//! Memecoin Screener
//!
//! Polls DexScreener for one token and prints an EMA/RSI/Bollinger
//! recommendation every cycle until Ctrl-C.

use dotenvy::dotenv;
use memescan::config::ScreenerConfig;
use memescan::core::report;
use memescan::core::runtime::{RuntimeConfig, ScreenerRuntime};
use memescan::core::scheduler::PollSchedule;
use memescan::logging;
use memescan::services::dexscreener::DexScreenerProvider;
use memescan::signals::engine::SignalEngine;
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = ScreenerConfig::from_env()?;
    info!(environment = %memescan::config::get_environment(), "Starting Memecoin Screener");

    let token_address = match env::args().nth(1).or_else(|| config.token_address.clone()) {
        Some(address) => address,
        None => prompt_token_address()?,
    };
    let token_address = token_address.trim().to_string();
    if token_address.is_empty() {
        return Err("token address must not be empty".into());
    }

    let provider = Arc::new(DexScreenerProvider::new(&config)?);
    let schedule = PollSchedule::new(config.poll_interval_seconds)?;
    let engine = SignalEngine::new(config.engine.clone())?;
    let mut runtime = ScreenerRuntime::new(provider, engine, RuntimeConfig::from(&config));

    println!("{}", report::render_banner(&token_address, config.poll_interval_seconds));
    println!("\nCollecting initial data...");
    let seeded = runtime.prime(&token_address).await;
    println!("Seeded {} closes.\n", seeded);

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    runtime
        .run(&token_address, &schedule, shutdown, |result| {
            println!("{}", report::render_tick(result));
        })
        .await;

    println!("\nScreener stopped by user.");
    Ok(())
}

fn prompt_token_address() -> io::Result<String> {
    print!("Enter the token contract address: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
