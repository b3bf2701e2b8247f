//! Weekly availability projection.
//!
//! A resource has a base FTE and a list of date-ranged overrides (PTO, FMLA,
//! orientation, ...). The projector turns them into one effective FTE value
//! per Sunday-based week, with the overrides responsible for each value.

pub mod models;
mod projector;
mod strip;

pub use models::{
    normalize_overrides, AvailabilityOverride, Horizon, OverrideEnd, OverrideReason, Projection,
    WeeklyFtePoint,
};
pub use projector::{Projector, ProjectorSettings};

/// Project with the default settings (26-week ongoing tail, 52-week cap)
pub fn project(
    base_fte: f64,
    overrides: &[AvailabilityOverride],
    horizon: &Horizon,
) -> Vec<WeeklyFtePoint> {
    Projector::default().project(base_fte, overrides, horizon)
}
