//! Core domain logic for searoute.
//! Landmark bookkeeping and route distance live here; rendering stays in the host.

pub mod config;
pub mod distance;
pub mod geo;
pub mod logging;
pub mod model;
pub mod ports;
pub mod service;
pub mod surface;
pub mod units;

pub use config::{ConfigError, MapView, PlannerConfig};
pub use distance::{polyline_distance, total_distance};
pub use geo::{haversine_meters, haversine_nautical_miles, CoordinateError, LatLng};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::landmark::{
    AddLandmarkOutcome, Landmark, LandmarkId, LandmarkList, LandmarkRole, MAX_LANDMARKS,
};
pub use model::route::{DrawnGroup, Polyline, PolylineId};
pub use ports::{Port, PortCatalog, PortCatalogError, PortRole, PortRoute, PortSelection};
pub use service::route_planner::{
    LandmarkRejection, PlannerCommand, PlannerEvent, PlannerSnapshot, RoutePlanner,
};
pub use surface::{DrawEvent, InMemorySurface, RouteDrawingSurface};
pub use units::{format_grouped, Distance, DistanceReadout};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
