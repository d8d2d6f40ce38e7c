use std::sync::Arc;

use clap::Parser;
use shipping_quote::http::server;
use shipping_quote::utils::{logger, validation::Validate};
use shipping_quote::{QuoteEngine, ServiceConfig, ShippingEstimator};

#[derive(Parser)]
#[command(name = "quote-server")]
#[command(about = "HTTP endpoint answering shipping quote requests")]
struct Args {
    /// Path to TOML configuration file; defaults are used when it is absent
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入配置
    let mut config = match &args.config {
        Some(path) => match ServiceConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => ServiceConfig::default(),
    };
    config.apply_env_overrides()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    logger::init_server_logger(&config.logging.level, config.logging.json);
    tracing::info!("🚀 Starting shipping quote server");

    let engine = Arc::new(QuoteEngine::new(ShippingEstimator::new()));
    server::serve(&config.server, engine).await?;

    Ok(())
}
