//! Integration tests for the DexScreener provider

use memescan::services::error::ProviderError;
use memescan::services::market_data::MarketDataProvider;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{mock_token_pairs, pair, provider_for, TOKEN};

#[tokio::test]
async fn picks_highest_volume_pair_on_chain() {
    let server = MockServer::start().await;
    mock_token_pairs(
        &server,
        serde_json::json!({
            "pairs": [
                pair("solana", "orca", "0.0011", 500.0),
                pair("ethereum", "uniswap", "0.0020", 9_000_000.0),
                pair("solana", "raydium", "0.0012", 75_000.0),
            ]
        }),
    )
    .await;

    let provider = provider_for(&server, 0);
    let record = provider
        .fetch_observation(TOKEN)
        .await
        .expect("fetch succeeds")
        .expect("pair found");

    assert_eq!(record.venue, "raydium");
    assert_eq!(record.symbol, "MEME");
    assert_eq!(record.price, 0.0012);
    assert_eq!(record.volume_24h, 75_000.0);
    assert_eq!(record.liquidity_usd, 42_000.5);
    assert_eq!(record.price_change_24h_pct, -12.5);
    assert_eq!((record.buy_orders, record.sell_orders), (120, 80));
}

#[tokio::test]
async fn missing_optional_fields_use_defaults() {
    let server = MockServer::start().await;
    mock_token_pairs(
        &server,
        serde_json::json!({
            "pairs": [{ "chainId": "solana", "priceUsd": "1.5" }]
        }),
    )
    .await;

    let record = provider_for(&server, 0)
        .fetch_observation(TOKEN)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.symbol, "UNKNOWN");
    assert_eq!(record.venue, "UNKNOWN");
    assert_eq!(record.volume_24h, 0.0);
    assert_eq!((record.buy_orders, record.sell_orders), (0, 0));
}

#[tokio::test]
async fn no_pairs_means_no_data() {
    let server = MockServer::start().await;
    mock_token_pairs(&server, serde_json::json!({ "schemaVersion": "1.0.0", "pairs": null })).await;
    assert!(provider_for(&server, 0).fetch_observation(TOKEN).await.unwrap().is_none());
}

#[tokio::test]
async fn no_pairs_on_chain_means_no_data() {
    let server = MockServer::start().await;
    mock_token_pairs(
        &server,
        serde_json::json!({ "pairs": [pair("bsc", "pancakeswap", "0.1", 1.0)] }),
    )
    .await;
    assert!(provider_for(&server, 0).fetch_observation(TOKEN).await.unwrap().is_none());
}

#[tokio::test]
async fn zero_price_is_rejected() {
    let server = MockServer::start().await;
    mock_token_pairs(
        &server,
        serde_json::json!({ "pairs": [pair("solana", "raydium", "0", 1.0)] }),
    )
    .await;

    let err = provider_for(&server, 0).fetch_observation(TOKEN).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidObservation(_)));
}

#[tokio::test]
async fn unparsable_price_is_malformed() {
    let server = MockServer::start().await;
    mock_token_pairs(
        &server,
        serde_json::json!({ "pairs": [pair("solana", "raydium", "n/a", 1.0)] }),
    )
    .await;

    let err = provider_for(&server, 0).fetch_observation(TOKEN).await.unwrap_err();
    assert!(matches!(err, ProviderError::MalformedPair(_)));
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/dex/tokens/{}", TOKEN)))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let err = provider_for(&server, 2).fetch_observation(TOKEN).await.unwrap_err();
    assert!(matches!(err, ProviderError::Status { status: 503, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/dex/tokens/{}", TOKEN)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider_for(&server, 3).fetch_observation(TOKEN).await.unwrap_err();
    assert!(matches!(err, ProviderError::Status { status: 404, .. }));
    assert!(!err.is_transient());
}
