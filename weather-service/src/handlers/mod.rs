//! HTTP handlers for weather-service.

pub mod forecast;
pub mod geocode;
pub mod health;

pub use forecast::forecast;
pub use geocode::geocode;
pub use health::{health_check, metrics_endpoint, readiness_check};
