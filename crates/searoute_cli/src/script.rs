//! JSON replay scripts for headless planner sessions.
//!
//! A script is an array of steps, each tagged by `step`:
//!
//! ```json
//! [
//!   {"step": "toggle_add_mode"},
//!   {"step": "click", "at": [38.7223, -9.1393], "name": "Lisbon"},
//!   {"step": "click", "at": [-8.0476, -34.877], "name": "Recife"},
//!   {"step": "draw", "vertices": [[38.7223, -9.1393], [-8.0476, -34.877]]},
//!   {"step": "remove", "role": "start"}
//! ]
//! ```
//!
//! Polylines are addressed by their 0-based draw order.

use anyhow::{anyhow, Result};
use searoute_core::{
    InMemorySurface, LandmarkRole, LatLng, PlannerCommand, PlannerEvent, PolylineId, RoutePlanner,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    ToggleAddMode,
    Click {
        at: LatLng,
        #[serde(default)]
        name: Option<String>,
    },
    Remove {
        role: LandmarkRole,
    },
    Draw {
        vertices: Vec<LatLng>,
    },
    Edit {
        polyline: usize,
        vertices: Vec<LatLng>,
    },
    Delete {
        polyline: usize,
    },
    ClearAll,
}

pub fn parse(raw: &str) -> Result<Vec<Step>> {
    Ok(serde_json::from_str(raw)?)
}

/// Runs `steps` against `planner` on an empty surface and returns both.
pub fn replay(
    mut planner: RoutePlanner,
    steps: &[Step],
) -> Result<(RoutePlanner, InMemorySurface)> {
    let mut surface = InMemorySurface::new();
    let mut drawn: Vec<PolylineId> = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        let command = match step {
            Step::ToggleAddMode => PlannerCommand::ToggleAddMode,
            Step::Click { at, name } => PlannerCommand::MapClicked {
                coordinates: *at,
                name: name.clone(),
            },
            Step::Remove { role } => {
                let landmark = planner
                    .landmarks()
                    .iter()
                    .find(|landmark| landmark.role == *role)
                    .ok_or_else(|| anyhow!("step {index}: no {} landmark", role.as_str()))?;
                PlannerCommand::RemoveLandmark(landmark.id)
            }
            Step::Draw { vertices } => {
                let (id, event) = surface.create(vertices.clone());
                drawn.push(id);
                PlannerCommand::GeometryChanged(event)
            }
            Step::Edit { polyline, vertices } => {
                let id = polyline_id(&drawn, *polyline, index)?;
                let event = surface
                    .edit(id, |target| *target.vertices_mut() = vertices.clone())
                    .ok_or_else(|| anyhow!("step {index}: polyline {polyline} was deleted"))?;
                PlannerCommand::GeometryChanged(event)
            }
            Step::Delete { polyline } => {
                let id = polyline_id(&drawn, *polyline, index)?;
                let event = surface
                    .delete(id)
                    .ok_or_else(|| anyhow!("step {index}: polyline {polyline} was deleted"))?;
                PlannerCommand::GeometryChanged(event)
            }
            Step::ClearAll => PlannerCommand::ClearAll,
        };

        let event = planner.apply(command, &mut surface);
        if event == PlannerEvent::Ignored {
            log::debug!("event=replay_step module=cli status=ignored step={index}");
        }
    }

    Ok((planner, surface))
}

fn polyline_id(drawn: &[PolylineId], position: usize, step: usize) -> Result<PolylineId> {
    drawn
        .get(position)
        .copied()
        .ok_or_else(|| anyhow!("step {step}: polyline {position} was never drawn"))
}
