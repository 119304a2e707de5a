// ═══════════════════════════════════════════════════════════════════
// Provider Tests — goldapi.io over a mock server, SpotPriceService fallback
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use money_map_core::errors::CoreError;
use money_map_core::models::settings::Settings;
use money_map_core::models::spot::SpotPrices;
use money_map_core::providers::goldapi::GoldApiProvider;
use money_map_core::providers::traits::SpotPriceProvider;
use money_map_core::services::spot_price_service::SpotPriceService;
use money_map_core::storage::json_store::JsonStore;
use money_map_core::storage::traits::AssetStore;

const KEY: &str = "test-key";

async fn mount_quote(server: &MockServer, symbol: &str, price: f64) {
    Mock::given(method("GET"))
        .and(path(format!("/{symbol}/USD")))
        .and(header("x-access-token", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metal": symbol,
            "currency": "USD",
            "price": price
        })))
        .mount(server)
        .await;
}

async fn temp_store() -> (TempDir, Arc<JsonStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    (dir, Arc::new(store))
}

/// Provider that always fails, standing in for an unreachable API.
struct DownProvider;

#[async_trait]
impl SpotPriceProvider for DownProvider {
    fn name(&self) -> &str {
        "down"
    }

    async fn get_spot_price(&self, _metal: &str) -> Result<f64, CoreError> {
        Err(CoreError::Network("timed out".into()))
    }
}

/// Provider returning a fixed price for every metal.
struct FixedProvider(f64);

#[async_trait]
impl SpotPriceProvider for FixedProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn get_spot_price(&self, _metal: &str) -> Result<f64, CoreError> {
        Ok(self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════
// GoldApiProvider
// ═══════════════════════════════════════════════════════════════════

mod goldapi {
    use super::*;

    #[tokio::test]
    async fn fetches_gold_and_silver() {
        let server = MockServer::start().await;
        mount_quote(&server, "XAU", 2345.67).await;
        mount_quote(&server, "XAG", 29.5).await;

        let provider = GoldApiProvider::with_base_url(KEY.to_string(), server.uri());
        assert_eq!(provider.get_spot_price("gold").await.unwrap(), 2345.67);
        assert_eq!(provider.get_spot_price("Silver").await.unwrap(), 29.5);
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/XAU/USD"))
            .respond_with(ResponseTemplate::new(403).set_body_string("invalid token"))
            .mount(&server)
            .await;

        let provider = GoldApiProvider::with_base_url(KEY.to_string(), server.uri());
        match provider.get_spot_price("gold").await {
            Err(CoreError::Api { provider, message }) => {
                assert_eq!(provider, "goldapi.io");
                assert!(message.contains("403"), "{message}");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/XAG/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "quota" })))
            .mount(&server)
            .await;

        let provider = GoldApiProvider::with_base_url(KEY.to_string(), server.uri());
        assert!(matches!(
            provider.get_spot_price("silver").await,
            Err(CoreError::Api { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_metal_is_rejected_without_request() {
        let server = MockServer::start().await;
        let provider = GoldApiProvider::with_base_url(KEY.to_string(), server.uri());

        assert!(provider.get_spot_price("copper").await.is_err());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn resolves_symbols() {
        let provider = GoldApiProvider::new(KEY.to_string());
        assert_eq!(provider.resolve_symbol("gold").unwrap(), "XAU");
        assert_eq!(provider.resolve_symbol(" SILVER ").unwrap(), "XAG");
        assert_eq!(provider.resolve_symbol("platinum").unwrap(), "XPT");
        assert!(provider.resolve_symbol("unobtainium").is_err());
        assert_eq!(provider.name(), "goldapi.io");
    }
}

// ═══════════════════════════════════════════════════════════════════
// SpotPriceService
// ═══════════════════════════════════════════════════════════════════

mod spot_service {
    use super::*;

    #[tokio::test]
    async fn refresh_fetches_and_caches() {
        let server = MockServer::start().await;
        mount_quote(&server, "XAU", 2400.0).await;
        mount_quote(&server, "XAG", 30.0).await;

        let (_dir, store) = temp_store().await;
        let provider = GoldApiProvider::with_base_url(KEY.to_string(), server.uri());
        let service = SpotPriceService::with_providers(store.clone(), vec![Box::new(provider)], 1.99);

        let prices = service.refresh().await;
        assert_eq!(prices.gold, 2400.0);
        assert_eq!(prices.silver, 30.0);
        assert_eq!(prices.copper, 1.99);
        assert!(prices.last_updated.is_some());

        assert_eq!(store.load_spot_prices().await.unwrap(), prices);
    }

    #[tokio::test]
    async fn failed_refresh_returns_cached_prices() {
        let (_dir, store) = temp_store().await;
        let cached = SpotPrices {
            gold: 2100.0,
            silver: 24.0,
            copper: 1.99,
            last_updated: Some(chrono::Utc::now()),
        };
        store.save_spot_prices(&cached).await.unwrap();

        let service = SpotPriceService::with_providers(store.clone(), vec![Box::new(DownProvider)], 1.99);
        assert_eq!(service.refresh().await, cached);
    }

    #[tokio::test]
    async fn failed_refresh_without_cache_returns_defaults() {
        let (_dir, store) = temp_store().await;
        let service = SpotPriceService::with_providers(store, vec![Box::new(DownProvider)], 1.99);

        let prices = service.refresh().await;
        assert_eq!(prices, SpotPrices::default());
    }

    #[tokio::test]
    async fn partial_failure_keeps_the_cache() {
        let server = MockServer::start().await;
        mount_quote(&server, "XAU", 2400.0).await;
        Mock::given(method("GET"))
            .and(path("/XAG/USD"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (_dir, store) = temp_store().await;
        let provider = GoldApiProvider::with_base_url(KEY.to_string(), server.uri());
        let service = SpotPriceService::with_providers(store.clone(), vec![Box::new(provider)], 1.99);

        assert!(service.fetch_live().await.is_err());
        let prices = service.refresh().await;
        assert_eq!(prices.gold, 0.0);
        assert!(prices.last_updated.is_none());
    }

    #[tokio::test]
    async fn falls_through_to_next_provider() {
        let (_dir, store) = temp_store().await;
        let mut service = SpotPriceService::with_providers(store, vec![Box::new(DownProvider)], 2.5);
        service.register(Box::new(FixedProvider(100.0)));

        let prices = service.fetch_live().await.unwrap();
        assert_eq!(prices.gold, 100.0);
        assert_eq!(prices.silver, 100.0);
        assert_eq!(prices.copper, 2.5);
        assert_eq!(service.provider_names(), vec!["down", "fixed"]);
    }

    #[tokio::test]
    async fn invalid_price_is_not_accepted() {
        let (_dir, store) = temp_store().await;
        let service = SpotPriceService::with_providers(store, vec![Box::new(FixedProvider(f64::NAN))], 1.99);
        assert!(service.fetch_live().await.is_err());
    }

    #[tokio::test]
    async fn no_provider_without_api_key() {
        let (_dir, store) = temp_store().await;
        let service = SpotPriceService::new(store.clone(), &Settings::default());
        assert!(!service.has_provider());
        assert!(service.fetch_live().await.is_err());

        let service = SpotPriceService::new(store, &Settings::with_api_key("goldapi", KEY));
        assert_eq!(service.provider_names(), vec!["goldapi.io"]);
    }

    #[tokio::test]
    async fn cached_reads_store() {
        let (_dir, store) = temp_store().await;
        let service = SpotPriceService::with_providers(store.clone(), Vec::new(), 1.99);
        assert_eq!(service.cached().await, SpotPrices::default());

        let prices = SpotPrices {
            gold: 1.0,
            silver: 2.0,
            copper: 3.0,
            last_updated: None,
        };
        store.save_spot_prices(&prices).await.unwrap();
        assert_eq!(service.cached().await, prices);
    }
}
