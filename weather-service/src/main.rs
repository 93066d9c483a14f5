use service_core::observability::init_tracing;
use weather_service::config::WeatherConfig;
use weather_service::services::init_metrics;
use weather_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("weather-service", "info");

    init_metrics();

    let config = WeatherConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
