use service_core::config::Config as CoreConfig;
use weather_service::config::{ProviderConfig, WeatherConfig};
use weather_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the service on a random port, pointed at the given provider
    /// base URL (a wiremock server in most tests).
    pub async fn spawn_with_provider(provider_base: &str) -> Self {
        let config = WeatherConfig {
            common: CoreConfig {
                host: std::net::Ipv4Addr::LOCALHOST.into(),
                port: 0,
            },
            provider: ProviderConfig {
                geocoding_url: format!("{}/v1/search", provider_base),
                forecast_url: format!("{}/v1/forecast", provider_base),
                user_agent: "weather-service-tests".to_string(),
                timeout_secs: 5,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    /// Spawn against a base URL nothing listens on; enough for endpoints
    /// that never call upstream, and for outage tests.
    #[allow(dead_code)]
    pub async fn spawn() -> Self {
        Self::spawn_with_provider("http://127.0.0.1:9").await
    }
}
