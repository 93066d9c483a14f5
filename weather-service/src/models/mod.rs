pub mod forecast;
pub mod geocode;

pub use forecast::{ForecastData, ForecastRequest};
pub use geocode::{GeocodeCandidate, GeocodeSearchResponse};
