//! Core use-case services.
//!
//! # Responsibility
//! - Turn host interaction events into planner state transitions.
//! - Keep hosts decoupled from landmark and geometry bookkeeping.

pub mod route_planner;
