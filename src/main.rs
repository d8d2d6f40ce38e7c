use clap::Parser;
use shipping_quote::core::engine::fallback_quotes;
use shipping_quote::core::order::OrderSummary;
use shipping_quote::utils::error::ErrorSeverity;
use shipping_quote::utils::{logger, validation::Validate};
use shipping_quote::{CliConfig, Command, QuoteEngine, ShippingEstimator, ShippingError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let engine = QuoteEngine::new(ShippingEstimator::new());
    let request = config.command.shipping_request();

    match &config.command {
        Command::Quote { fallback, .. } => {
            let quotes = if *fallback {
                engine.quote(&request)
            } else {
                match engine.try_quote(&request) {
                    Ok(quotes) => quotes,
                    Err(e) => fail(&e),
                }
            };
            println!("{}", serde_json::to_string_pretty(&quotes)?);
        }
        Command::Summary {
            lines,
            service,
            discount,
            ..
        } => {
            let quotes = match engine.try_quote(&request) {
                Ok(quotes) => quotes,
                Err(e) => {
                    tracing::warn!("Quote failed ({}), pricing with default quotes", e);
                    fallback_quotes()
                }
            };
            let chosen = quotes.iter().find(|q| q.service_type == *service);
            let summary = match OrderSummary::compute(lines, chosen, *discount) {
                Ok(summary) => summary,
                Err(e) => fail(&e),
            };

            let output = serde_json::json!({
                "shipping": chosen,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn fail(e: &ShippingError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2, // 輸入錯誤
        ErrorSeverity::High => 1,                        // 配置錯誤
        ErrorSeverity::Critical => 3,                    // 系統錯誤
    };
    std::process::exit(exit_code);
}
