//! Landmark domain model and the two-slot landmark list.
//!
//! # Responsibility
//! - Define the named, user-placed point shown as a start or end marker.
//! - Own the ordered list of at most two landmarks.
//!
//! # Invariants
//! - `id` is generated at creation and never reused.
//! - `name` is trimmed and non-empty.
//! - The list holds 0, 1 or 2 entries.
//! - Role comes from list position at creation: index 0 is `Start`, index 1 is `End`.
//! - Removal never re-assigns the role of the surviving landmark.

use crate::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum number of landmarks a route may carry.
pub const MAX_LANDMARKS: usize = 2;

/// Opaque landmark identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkId(Uuid);

impl LandmarkId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for LandmarkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positional role of a landmark on the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkRole {
    /// First landmark placed. Rendered with the green marker.
    Start,
    /// Second landmark placed. Rendered with the red marker.
    End,
}

impl LandmarkRole {
    /// Role the landmark at `index` receives when it is created.
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::Start
        } else {
            Self::End
        }
    }

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    /// Popup caption shown under the landmark name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Starting Point",
            Self::End => "End Point",
        }
    }
}

/// Named, user-placed geographic point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: LandmarkId,
    pub name: String,
    pub coordinates: LatLng,
    /// Serialized as `type` to match the host's landmark shape.
    #[serde(rename = "type")]
    pub role: LandmarkRole,
}

/// Result of one `LandmarkList::add_landmark` call.
///
/// None of these are errors: a cancelled prompt and a full list both leave
/// the list untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum AddLandmarkOutcome {
    Added(Landmark),
    /// Name missing, empty or whitespace-only.
    Cancelled,
    /// Two landmarks already exist.
    CapacityReached,
}

/// Ordered list of at most two landmarks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkList {
    entries: Vec<Landmark>,
}

impl LandmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a landmark at `coordinates` named by the user's prompt answer.
    ///
    /// # Contract
    /// - `None`, empty or whitespace-only names are treated as cancellation.
    /// - A full list is a no-op, not a failure.
    /// - Role is `Start` when the list is empty, `End` otherwise.
    pub fn add_landmark(
        &mut self,
        coordinates: LatLng,
        proposed_name: Option<&str>,
    ) -> AddLandmarkOutcome {
        let name = match proposed_name.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => return AddLandmarkOutcome::Cancelled,
        };
        if self.is_full() {
            return AddLandmarkOutcome::CapacityReached;
        }

        let landmark = Landmark {
            id: LandmarkId::generate(),
            name: name.to_string(),
            coordinates,
            role: self.next_role(),
        };
        self.entries.push(landmark.clone());
        AddLandmarkOutcome::Added(landmark)
    }

    /// Removes the landmark with `id`, returning it when present.
    pub fn remove_landmark(&mut self, id: LandmarkId) -> Option<Landmark> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Role the next accepted landmark would receive.
    pub fn next_role(&self) -> LandmarkRole {
        LandmarkRole::for_index(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_LANDMARKS
    }

    pub fn get(&self, id: LandmarkId) -> Option<&Landmark> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.entries
    }

    /// First landmark tagged `Start`, if any.
    pub fn start(&self) -> Option<&Landmark> {
        self.by_role(LandmarkRole::Start)
    }

    /// First landmark tagged `End`, if any.
    pub fn end(&self) -> Option<&Landmark> {
        self.by_role(LandmarkRole::End)
    }

    fn by_role(&self, role: LandmarkRole) -> Option<&Landmark> {
        self.entries.iter().find(|entry| entry.role == role)
    }
}
