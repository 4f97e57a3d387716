//! Geographic primitives shared by landmarks, drawn routes and ports.
//!
//! # Responsibility
//! - Define the `(latitude, longitude)` pair every other module passes around.
//! - Provide the spherical great-circle distance primitive.
//!
//! # Invariants
//! - Degrees everywhere; radians only inside `haversine_meters`.
//! - Longitude is never wrapped. A wrapped world map may report values past ±180.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mean earth radius in meters used by the host map's `distanceTo`.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// One nautical mile in meters.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Geographic coordinate in decimal degrees.
///
/// Serialized as a `[lat, lng]` pair to match the host's coordinate tuples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Builds a coordinate without range checks.
    ///
    /// Host click events always report resolved coordinates, so the hot path
    /// does not validate.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate, rejecting non-finite values and out-of-range latitude.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let value = Self::new(lat, lng);
        value.validate()?;
        Ok(value)
    }

    /// Validates this coordinate.
    ///
    /// # Errors
    /// - `NonFinite` when either component is NaN or infinite.
    /// - `LatitudeOutOfRange` when `lat` is outside `[-90, 90]`.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(CoordinateError::NonFinite {
                lat: self.lat,
                lng: self.lng,
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for (f64, f64) {
    fn from(value: LatLng) -> Self {
        (value.lat, value.lng)
    }
}

impl From<geo_types::Coord<f64>> for LatLng {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<LatLng> for geo_types::Coord<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(value: geo_types::Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Coordinate validation and parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    NonFinite { lat: f64, lng: f64 },
    LatitudeOutOfRange(f64),
    Malformed(String),
}

impl Display for CoordinateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { lat, lng } => {
                write!(f, "coordinate must be finite, got ({lat}, {lng})")
            }
            Self::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} is outside [-90, 90]")
            }
            Self::Malformed(value) => {
                write!(f, "expected `lat,lng` coordinate, got `{value}`")
            }
        }
    }
}

impl Error for CoordinateError {}

impl std::str::FromStr for LatLng {
    type Err = CoordinateError;

    /// Parses `lat,lng` (whitespace around either part is ignored).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateError::Malformed(value.to_string());
        let (lat, lng) = value.split_once(',').ok_or_else(malformed)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| malformed())?;
        let lng = lng.trim().parse::<f64>().map_err(|_| malformed())?;
        Self::try_new(lat, lng)
    }
}

/// Great-circle surface distance between two points on a spherical earth.
pub fn haversine_meters(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let sin_dlat = ((b.lat - a.lat).to_radians() / 2.0).sin();
    let sin_dlng = ((b.lng - a.lng).to_radians() / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
    2.0 * h.sqrt().atan2((1.0 - h).sqrt()) * EARTH_RADIUS_METERS
}

/// Great-circle distance in nautical miles.
pub fn haversine_nautical_miles(a: LatLng, b: LatLng) -> f64 {
    haversine_meters(a, b) / METERS_PER_NAUTICAL_MILE
}

#[cfg(test)]
mod tests {
    use super::{haversine_meters, CoordinateError, LatLng, EARTH_RADIUS_METERS};

    #[test]
    fn identical_points_are_zero_apart() {
        let lisbon = LatLng::new(38.7223, -9.1393);
        assert_eq!(haversine_meters(lisbon, lisbon), 0.0);
    }

    #[test]
    fn quarter_meridian_matches_sphere_arc() {
        let equator = LatLng::new(0.0, 0.0);
        let pole = LatLng::new(90.0, 0.0);
        let expected = EARTH_RADIUS_METERS * std::f64::consts::FRAC_PI_2;
        assert!((haversine_meters(equator, pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = LatLng::new(1.290270, 103.851959);
        let b = LatLng::new(51.922500, 4.477733);
        assert!((haversine_meters(a, b) - haversine_meters(b, a)).abs() < 1e-6);
    }

    #[test]
    fn try_new_rejects_bad_latitude_and_nan() {
        assert_eq!(
            LatLng::try_new(91.0, 0.0).unwrap_err(),
            CoordinateError::LatitudeOutOfRange(91.0)
        );
        assert!(matches!(
            LatLng::try_new(f64::NAN, 0.0),
            Err(CoordinateError::NonFinite { .. })
        ));
        assert!(LatLng::try_new(10.0, 200.0).is_ok());
    }

    #[test]
    fn parses_comma_separated_pair() {
        let parsed: LatLng = " 38.72 , -9.14 ".parse().unwrap();
        assert_eq!(parsed, LatLng::new(38.72, -9.14));
        assert!(matches!(
            "38.72".parse::<LatLng>(),
            Err(CoordinateError::Malformed(_))
        ));
    }

    #[test]
    fn geo_types_interop_swaps_axes() {
        let point: geo_types::Point<f64> = LatLng::new(10.0, 20.0).into();
        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
        assert_eq!(LatLng::from(point), LatLng::new(10.0, 20.0));
    }
}
