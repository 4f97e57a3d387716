//! Distance accumulation over the drawn polyline group.
//!
//! # Responsibility
//! - Turn the current set of drawn polylines into one nautical-mile total.
//!
//! # Invariants
//! - Full recomputation on every call; no incremental state.
//! - Each polyline contributes the sum of its consecutive-vertex chords only.
//!   Polylines are never joined end-to-start.
//! - An empty group yields `Distance::ZERO`.

use crate::geo::METERS_PER_NAUTICAL_MILE;
use crate::model::route::Polyline;
use crate::units::Distance;

/// Total great-circle length of `polylines` in nautical miles.
pub fn total_distance<'a, I>(polylines: I) -> Distance
where
    I: IntoIterator<Item = &'a Polyline>,
{
    let meters: f64 = polylines.into_iter().map(Polyline::length_meters).sum();
    Distance::from_nautical_miles(meters / METERS_PER_NAUTICAL_MILE)
}

/// Nautical-mile length of one polyline.
pub fn polyline_distance(polyline: &Polyline) -> Distance {
    total_distance(std::iter::once(polyline))
}
