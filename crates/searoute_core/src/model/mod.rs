//! Route planner domain model.
//!
//! # Responsibility
//! - Define the landmark and drawn-geometry shapes the planner reasons about.
//!
//! # Invariants
//! - Landmarks are identified by a stable `LandmarkId`.
//! - Geometry is read-only to the planner; the drawing surface mutates it.

pub mod landmark;
pub mod route;
