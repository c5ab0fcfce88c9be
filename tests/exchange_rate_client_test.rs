//! HTTP tests for `ExchangeRateClient` and the non-interactive commands
//!
//! A local mockito server stands in for ExchangeRate-API.

use std::time::Duration;

use mockito::Server;

use currency_converter::api::{ExchangeRateClient, RateProvider};
use currency_converter::commands::{run_list, run_one_shot, OneShot};
use currency_converter::config::Config;
use currency_converter::errors::ConverterError;

const API_KEY: &str = "test-key";

const USD_RATES: &str = r#"{
    "result": "success",
    "time_last_update_unix": 1700000000,
    "time_next_update_unix": 1700086400,
    "base_code": "USD",
    "conversion_rates": { "USD": 1, "JPY": 150.5, "EUR": 0.9, "GBP": 0.8 }
}"#;

fn client_for(server: &Server) -> ExchangeRateClient {
    let config = Config {
        api_key: API_KEY.to_string(),
        base_url: server.url(),
        timeout: Duration::from_secs(5),
    };
    ExchangeRateClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn test_convert_uses_rate_for_target() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(USD_RATES)
        .create_async()
        .await;

    let result = client_for(&server)
        .convert("USD", "EUR", 100.0)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.rate, 0.9);
    assert_eq!(result.converted, 100.0 * 0.9);
    assert_eq!(result.last_updated.timestamp(), 1_700_000_000);
}

#[tokio::test]
async fn test_convert_missing_target_is_unknown_currency() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_body(USD_RATES)
        .create_async()
        .await;

    let err = client_for(&server)
        .convert("USD", "XYZ", 1.0)
        .await
        .unwrap_err();

    assert_eq!(err, ConverterError::UnknownCurrency("XYZ".to_string()));
    assert_eq!(err.to_string(), "currency XYZ not found");
}

#[tokio::test]
async fn test_error_result_reports_error_type() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_body(r#"{"result":"error","error-type":"invalid-key"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .convert("USD", "EUR", 1.0)
        .await
        .unwrap_err();

    assert_eq!(err, ConverterError::Upstream("invalid-key".to_string()));
    assert_eq!(err.to_string(), "API returned error: invalid-key");
}

#[tokio::test]
async fn test_non_200_status_is_upstream_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/ABC")
        .with_status(404)
        .with_body(r#"{"result":"error","error-type":"unsupported-code"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .convert("ABC", "EUR", 1.0)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ConverterError::Upstream("status code: 404 (unsupported-code)".to_string())
    );
}

#[tokio::test]
async fn test_malformed_body_is_upstream_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .convert("USD", "EUR", 1.0)
        .await
        .unwrap_err();

    assert!(matches!(err, ConverterError::Upstream(ref m) if m.starts_with("failed to decode")));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = Config {
        api_key: API_KEY.to_string(),
        // Port 9 (discard) is not expected to accept HTTP connections
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(2),
    };
    let client = ExchangeRateClient::new(&config).unwrap();

    let err = client.convert("USD", "EUR", 1.0).await.unwrap_err();
    assert!(matches!(err, ConverterError::Network(_)), "{:?}", err);
    // The key is part of the request path and must not reach the screen
    assert!(!err.to_string().contains(API_KEY), "{}", err);
}

#[tokio::test]
async fn test_supported_currencies_are_sorted() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_body(USD_RATES)
        .create_async()
        .await;

    let codes = client_for(&server).supported_currencies().await.unwrap();
    assert_eq!(codes, vec!["EUR", "GBP", "JPY", "USD"]);
}

#[tokio::test]
async fn test_one_shot_prints_conversion_block() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_body(USD_RATES)
        .create_async()
        .await;
    let client = client_for(&server);

    let request = OneShot::from_flags(Some("usd"), Some("eur"), Some(50.0)).unwrap();
    let mut out = Vec::new();
    let result = run_one_shot(&client, &request, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Currency Conversion:"));
    assert!(printed.contains("50.00 USD = 45.00 EUR"), "{}", printed);
    assert!(printed.contains("Rate: 1 USD = 0.9000 EUR"));
    assert_eq!(result.to_code, "EUR");
}

#[tokio::test]
async fn test_one_shot_failure_surfaces_converter_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_body(USD_RATES)
        .create_async()
        .await;
    let client = client_for(&server);

    let request = OneShot::from_flags(Some("USD"), Some("XYZ"), Some(1.0)).unwrap();
    let mut out = Vec::new();
    let err = run_one_shot(&client, &request, &mut out).await.unwrap_err();

    assert!(out.is_empty());
    assert_eq!(
        err.downcast_ref::<ConverterError>(),
        Some(&ConverterError::UnknownCurrency("XYZ".to_string()))
    );
}

#[tokio::test]
async fn test_list_prints_names_when_known() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/test-key/latest/USD")
        .with_status(200)
        .with_body(USD_RATES)
        .create_async()
        .await;
    let client = client_for(&server);

    let mut out = Vec::new();
    let count = run_list(&client, &mut out).await.unwrap();

    assert_eq!(count, 4);
    let printed = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines[0], "EUR  Euro");
    assert_eq!(lines[3], "USD  US Dollar");
}
