//! Drawn route geometry.
//!
//! The drawing surface owns and mutates this geometry; core code reads it
//! after each created/edited/deleted notification.

use crate::geo::{haversine_meters, LatLng};
use serde::{Deserialize, Serialize};

/// Ordered vertex sequence of one hand-drawn path.
///
/// Consecutive vertices are joined by straight chords; no geodesic
/// densification is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    vertices: Vec<LatLng>,
}

impl Polyline {
    pub fn new(vertices: Vec<LatLng>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut Vec<LatLng> {
        &mut self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive `(v_i, v_{i+1})` pairs. Empty for fewer than two vertices.
    pub fn segments(&self) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Sum of segment great-circle lengths in meters.
    pub fn length_meters(&self) -> f64 {
        self.segments().map(|(a, b)| haversine_meters(a, b)).sum()
    }
}

impl From<Vec<LatLng>> for Polyline {
    fn from(vertices: Vec<LatLng>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<LatLng> for Polyline {
    fn from_iter<T: IntoIterator<Item = LatLng>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<geo_types::LineString<f64>> for Polyline {
    fn from(value: geo_types::LineString<f64>) -> Self {
        value.0.into_iter().map(LatLng::from).collect()
    }
}

impl From<&Polyline> for geo_types::LineString<f64> {
    fn from(value: &Polyline) -> Self {
        geo_types::LineString(value.vertices.iter().copied().map(Into::into).collect())
    }
}

/// Identifier the drawing surface assigns to one drawn polyline layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolylineId(pub u64);

/// The single group of drawn polylines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawnGroup {
    layers: Vec<(PolylineId, Polyline)>,
    next_id: u64,
}

impl DrawnGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polyline layer and returns its id.
    pub fn insert(&mut self, polyline: Polyline) -> PolylineId {
        let id = PolylineId(self.next_id);
        self.next_id += 1;
        self.layers.push((id, polyline));
        id
    }

    pub fn get_mut(&mut self, id: PolylineId) -> Option<&mut Polyline> {
        self.layers
            .iter_mut()
            .find(|(layer_id, _)| *layer_id == id)
            .map(|(_, polyline)| polyline)
    }

    pub fn remove(&mut self, id: PolylineId) -> Option<Polyline> {
        let index = self.layers.iter().position(|(layer_id, _)| *layer_id == id)?;
        Some(self.layers.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.layers.iter().map(|(_, polyline)| polyline)
    }
}
