//! Drawing surface capability contracts.
//!
//! # Responsibility
//! - Describe what the planner needs from the host's freehand drawing widget.
//! - Provide an in-process surface for tests and headless drivers.
//!
//! # Invariants
//! - The surface owns the drawn group; the planner only reads it after a
//!   `DrawEvent` and asks it to clear on Clear All.

use crate::model::route::{DrawnGroup, Polyline, PolylineId};
use serde::{Deserialize, Serialize};

/// Change notification emitted by the drawing widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawEvent {
    /// A polyline was finished and added to the group.
    Created,
    /// Vertices were moved, added or removed.
    Edited,
    /// One or more polylines were removed from the group.
    Deleted,
}

impl DrawEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
        }
    }
}

/// Host capability exposing the current drawn geometry.
pub trait RouteDrawingSurface {
    /// Current full set of drawn vertex sequences, borrowed from the surface.
    fn polylines(&self) -> Box<dyn Iterator<Item = &Polyline> + '_>;

    /// Whether the group holds no polyline at all.
    fn is_empty(&self) -> bool {
        self.polylines().next().is_none()
    }

    /// Removes every drawn polyline.
    fn clear(&mut self);
}

/// Surface backed by an in-memory `DrawnGroup`.
///
/// Each mutator returns the event a real widget would emit, so callers can
/// forward it straight to the planner.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    group: DrawnGroup,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self) -> &DrawnGroup {
        &self.group
    }

    /// Finishes drawing a polyline.
    pub fn create(&mut self, polyline: impl Into<Polyline>) -> (PolylineId, DrawEvent) {
        (self.group.insert(polyline.into()), DrawEvent::Created)
    }

    /// Applies `edit` to an existing polyline.
    ///
    /// Returns `None` when `id` is not in the group; no event is emitted then.
    pub fn edit<F>(&mut self, id: PolylineId, edit: F) -> Option<DrawEvent>
    where
        F: FnOnce(&mut Polyline),
    {
        let polyline = self.group.get_mut(id)?;
        edit(polyline);
        Some(DrawEvent::Edited)
    }

    /// Deletes one polyline. Returns `None` when `id` is unknown.
    pub fn delete(&mut self, id: PolylineId) -> Option<DrawEvent> {
        self.group.remove(id).map(|_| DrawEvent::Deleted)
    }
}

impl RouteDrawingSurface for InMemorySurface {
    fn polylines(&self) -> Box<dyn Iterator<Item = &Polyline> + '_> {
        Box::new(self.group.polylines())
    }

    fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    fn clear(&mut self) {
        self.group.clear();
    }
}
