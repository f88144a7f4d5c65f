mod snapshot;

pub use snapshot::WeatherSnapshot;
