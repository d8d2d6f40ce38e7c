use shipping_quote::core::engine::{is_fallback, FALLBACK_ZIP_CODE};
use shipping_quote::core::order::{CartLine, OrderSummary};
use shipping_quote::utils::validation::Validate;
use shipping_quote::{QuoteEngine, ServiceConfig, ServiceType, ShippingEstimator};
use tempfile::TempDir;

fn quote(body: serde_json::Value) -> Vec<shipping_quote::ShippingQuote> {
    let engine = QuoteEngine::new(ShippingEstimator::new());
    engine.quote_json(body.to_string().as_bytes())
}

#[test]
fn test_metro_scenario_end_to_end() {
    let quotes = quote(serde_json::json!({
        "zipCode": "01310100",
        "items": [{"weight": 1, "quantity": 2}]
    }));

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].service_type, ServiceType::Standard);
    assert_eq!(quotes[0].rate, 40.0);
    assert_eq!(quotes[0].delivery_days, 4);
    assert_eq!(quotes[1].service_type, ServiceType::Express);
    assert_eq!(quotes[1].rate, 68.0);
    assert_eq!(quotes[1].delivery_days, 1);
    assert!(quotes.iter().all(|q| q.zip_code == "01310100"));
}

#[test]
fn test_legacy_field_default_tier_scenario() {
    let quotes = quote(serde_json::json!({ "zipCodeDestination": "70000000" }));

    assert_eq!(quotes[0].id, "pac-70000000");
    assert_eq!(quotes[0].rate, 30.0);
    assert_eq!(quotes[0].delivery_days, 6);
    assert_eq!(quotes[1].id, "sedex-70000000");
    assert_eq!(quotes[1].rate, 51.0);
    assert_eq!(quotes[1].delivery_days, 3);
}

#[test]
fn test_zip_code_takes_precedence() {
    let quotes = quote(serde_json::json!({
        "zipCode": "69000000",
        "zipCodeDestination": "01310100"
    }));
    assert_eq!(quotes[0].zip_code, "69000000");
    assert_eq!(quotes[0].delivery_days, 9);
}

#[test]
fn test_malformed_requests_get_default_quotes() {
    for body in [
        serde_json::json!({ "zipCode": "123" }),
        serde_json::json!({ "zipCode": "ABCDEFGH" }),
        serde_json::json!({}),
        serde_json::json!({ "zipCode": "01310100", "items": [{"quantity": -1}] }),
    ] {
        let quotes = quote(body.clone());
        assert!(is_fallback(&quotes), "body {}", body);
        assert_eq!(quotes[0].rate, 30.0);
        assert_eq!(quotes[0].delivery_days, 7);
        assert_eq!(quotes[1].rate, 55.0);
        assert_eq!(quotes[1].delivery_days, 2);
        assert_eq!(quotes[1].zip_code, FALLBACK_ZIP_CODE);
    }
}

#[test]
fn test_rates_respect_floor_for_every_prefix() {
    let engine = QuoteEngine::new(ShippingEstimator::new());
    for prefix in (1..1000).step_by(7) {
        let body = serde_json::json!({
            "zipCode": format!("{:03}00000", prefix),
            "items": [{"weight": 0.1, "quantity": 1}]
        });
        let quotes = engine.quote_json(body.to_string().as_bytes());
        assert!(!is_fallback(&quotes));
        assert!(quotes.iter().all(|q| q.rate >= 20.0));
        assert!(quotes.iter().all(|q| q.delivery_days >= 1));
    }
}

#[test]
fn test_checkout_summary_with_quoted_shipping() {
    let quotes = quote(serde_json::json!({
        "zipCode": "01310-100",
        "items": [{"quantity": 2}]
    }));
    let standard = quotes
        .iter()
        .find(|q| q.service_type == ServiceType::Standard)
        .unwrap();

    let lines: Vec<CartLine> = vec!["Inalador:89.90:2".parse().unwrap()];
    let summary = OrderSummary::compute(&lines, Some(standard), 9.8).unwrap();

    assert_eq!(summary.subtotal, 179.8);
    assert_eq!(summary.shipping_fee, 20.0);
    assert_eq!(summary.total, 190.0);
}

#[test]
fn test_service_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shipping.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 3100
path = "/correios-shipping"

[logging]
level = "debug"
json = true
"#,
    )
    .unwrap();

    let config = ServiceConfig::from_file(&path).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.server.address(), "127.0.0.1:3100");
    assert_eq!(config.server.path, "/correios-shipping");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ServiceConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(shipping_quote::ShippingError::IoError(_))
    ));
}
