//! Route planner controller.
//!
//! # Responsibility
//! - Own landmark list, add-mode flag and last computed distance.
//! - Translate host interaction events into state transitions.
//!
//! # Invariants
//! - State changes only through `RoutePlanner::apply`.
//! - Distance is recomputed from the surface on geometry events only;
//!   landmark changes never touch it.
//! - `distance == None` means "never computed" (or cleared). An empty
//!   drawn group yields `Some(Distance::ZERO)`.
//! - The map view is fixed at construction; Clear All keeps it.
//! - Log lines carry metadata only, never landmark names.

use crate::config::MapView;
use crate::distance::total_distance;
use crate::geo::LatLng;
use crate::model::landmark::{
    AddLandmarkOutcome, Landmark, LandmarkId, LandmarkList, LandmarkRole,
};
use crate::surface::{DrawEvent, RouteDrawingSurface};
use crate::units::{Distance, DistanceReadout};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Host interaction routed to the planner.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerCommand {
    /// "Add start/end point" button (or its "Cancel" state) pressed.
    ToggleAddMode,
    /// Map clicked; `name` is the prompt answer, `None` when dismissed.
    MapClicked {
        coordinates: LatLng,
        name: Option<String>,
    },
    /// Dismiss control on one landmark chip.
    RemoveLandmark(LandmarkId),
    /// "Clear all" pressed.
    ClearAll,
    /// Drawing widget reported a change.
    GeometryChanged(DrawEvent),
}

/// Why a landmark click did not add a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkRejection {
    Cancelled,
    CapacityReached,
}

/// Observable result of one applied command.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerEvent {
    AddModeChanged { active: bool },
    LandmarkAdded(Landmark),
    LandmarkRejected(LandmarkRejection),
    LandmarkRemoved(Landmark),
    DistanceUpdated(Distance),
    Cleared,
    /// Command had no effect in the current state.
    Ignored,
}

/// Single-owner planner state.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    landmarks: LandmarkList,
    adding_landmark: bool,
    distance: Option<Distance>,
    map_view: MapView,
}

impl RoutePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner whose snapshots hand `map_view` to the host as the initial view.
    pub fn with_map_view(map_view: MapView) -> Self {
        Self {
            map_view,
            ..Self::default()
        }
    }

    /// Applies one command and reports what changed.
    ///
    /// # Contract
    /// - `ToggleAddMode` is ignored while two landmarks exist.
    /// - `MapClicked` is ignored unless add mode is active. Add mode ends
    ///   once an `End` landmark is placed; a cancelled prompt keeps it on.
    /// - `ClearAll` empties landmarks, clears the surface and resets
    ///   distance to `None`. Add mode is left as is.
    /// - `GeometryChanged` recomputes the distance from `surface`.
    pub fn apply<S>(&mut self, command: PlannerCommand, surface: &mut S) -> PlannerEvent
    where
        S: RouteDrawingSurface + ?Sized,
    {
        match command {
            PlannerCommand::ToggleAddMode => self.toggle_add_mode(),
            PlannerCommand::MapClicked { coordinates, name } => {
                self.handle_map_click(coordinates, name.as_deref())
            }
            PlannerCommand::RemoveLandmark(id) => self.remove_landmark(id),
            PlannerCommand::ClearAll => self.clear_all(surface),
            PlannerCommand::GeometryChanged(event) => self.recompute_distance(event, &*surface),
        }
    }

    fn toggle_add_mode(&mut self) -> PlannerEvent {
        if self.landmarks.is_full() {
            debug!("event=add_mode_toggle module=planner status=ignored reason=full");
            return PlannerEvent::Ignored;
        }
        self.adding_landmark = !self.adding_landmark;
        debug!(
            "event=add_mode_toggle module=planner status=ok active={}",
            self.adding_landmark
        );
        PlannerEvent::AddModeChanged {
            active: self.adding_landmark,
        }
    }

    fn handle_map_click(&mut self, coordinates: LatLng, name: Option<&str>) -> PlannerEvent {
        if !self.adding_landmark {
            return PlannerEvent::Ignored;
        }

        match self.landmarks.add_landmark(coordinates, name) {
            AddLandmarkOutcome::Added(landmark) => {
                if landmark.role == LandmarkRole::End {
                    self.adding_landmark = false;
                }
                info!(
                    "event=landmark_add module=planner status=ok id={} role={} count={}",
                    landmark.id,
                    landmark.role.as_str(),
                    self.landmarks.len()
                );
                PlannerEvent::LandmarkAdded(landmark)
            }
            AddLandmarkOutcome::Cancelled => {
                debug!("event=landmark_add module=planner status=cancelled");
                PlannerEvent::LandmarkRejected(LandmarkRejection::Cancelled)
            }
            // Add mode ends when the End landmark fills the list, so a click
            // never reaches a full list through `apply`.
            AddLandmarkOutcome::CapacityReached => {
                debug!("event=landmark_add module=planner status=ignored reason=full");
                PlannerEvent::LandmarkRejected(LandmarkRejection::CapacityReached)
            }
        }
    }

    fn remove_landmark(&mut self, id: LandmarkId) -> PlannerEvent {
        match self.landmarks.remove_landmark(id) {
            Some(landmark) => {
                info!(
                    "event=landmark_remove module=planner status=ok id={} role={} remaining={}",
                    landmark.id,
                    landmark.role.as_str(),
                    self.landmarks.len()
                );
                PlannerEvent::LandmarkRemoved(landmark)
            }
            None => {
                debug!("event=landmark_remove module=planner status=ignored id={id}");
                PlannerEvent::Ignored
            }
        }
    }

    fn clear_all<S>(&mut self, surface: &mut S) -> PlannerEvent
    where
        S: RouteDrawingSurface + ?Sized,
    {
        surface.clear();
        self.landmarks.clear();
        self.distance = None;
        info!("event=clear_all module=planner status=ok");
        PlannerEvent::Cleared
    }

    fn recompute_distance<S>(&mut self, event: DrawEvent, surface: &S) -> PlannerEvent
    where
        S: RouteDrawingSurface + ?Sized,
    {
        let distance = total_distance(surface.polylines());
        self.distance = Some(distance);
        let (polylines, vertices) = surface
            .polylines()
            .fold((0usize, 0usize), |(count, vertices), polyline| {
                (count + 1, vertices + polyline.len())
            });
        info!(
            "event=distance_update module=planner status=ok trigger={} polylines={} vertices={} nautical_miles={:.3}",
            event.as_str(),
            polylines,
            vertices,
            distance.nautical_miles()
        );
        PlannerEvent::DistanceUpdated(distance)
    }

    pub fn landmarks(&self) -> &LandmarkList {
        &self.landmarks
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    pub fn map_view(&self) -> MapView {
        self.map_view
    }

    pub fn is_adding_landmark(&self) -> bool {
        self.adding_landmark
    }

    /// Rounded three-unit figures, `None` until a distance exists.
    pub fn readout(&self) -> Option<DistanceReadout> {
        self.distance.map(Distance::readout)
    }

    /// Label of the add-landmark button, `None` when it is hidden.
    pub fn add_button_label(&self) -> Option<&'static str> {
        if self.landmarks.is_full() {
            return None;
        }
        if self.adding_landmark {
            return Some("Cancel");
        }
        Some(if self.landmarks.is_empty() {
            "Add Start Point"
        } else {
            "Add End Point"
        })
    }

    /// Whether the Clear All control is offered.
    pub fn shows_clear_all<S>(&self, surface: &S) -> bool
    where
        S: RouteDrawingSurface + ?Sized,
    {
        !self.landmarks.is_empty() || !surface.is_empty()
    }

    /// `"<first> → <second>"` once both landmarks are placed.
    pub fn route_title(&self) -> Option<String> {
        match self.landmarks.as_slice() {
            [first, second] => Some(format!("{} → {}", first.name, second.name)),
            _ => None,
        }
    }

    /// Consistent read-only view for a host to render.
    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot {
            landmarks: self.landmarks.as_slice().to_vec(),
            adding_landmark: self.adding_landmark,
            distance: self.distance,
            readout: self.readout(),
            route_title: self.route_title(),
            map_view: self.map_view,
        }
    }
}

/// Serializable planner state handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    pub landmarks: Vec<Landmark>,
    pub adding_landmark: bool,
    /// Nautical miles; `null` until a geometry event arrives.
    pub distance: Option<Distance>,
    pub readout: Option<DistanceReadout>,
    pub route_title: Option<String>,
    pub map_view: MapView,
}
