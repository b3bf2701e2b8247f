use crate::components::availability::{AvailabilityOverride, Projection};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A staff member as stored by the resource roster form.
///
/// Only the fields the projector needs are modelled; other columns of the
/// stored row are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub job_name: String,
    /// Base FTE of the position
    pub unit_fte: f64,
    #[serde(default)]
    pub availability: Vec<AvailabilityOverride>,
    /// Unmodelled columns (campus, shift, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    /// "First Last", or "Employee" when both are blank
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            "Employee".to_string()
        } else {
            name.to_string()
        }
    }
}

/// Projection of one resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceProjection {
    pub employee_id: String,
    pub display_name: String,
    pub base_fte: f64,
    pub projection: Projection,
}

/// Effective FTE summed over the roster (or one job) for a week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotal {
    pub week_start: NaiveDate,
    /// Set when totals are grouped by job
    pub job_name: Option<String>,
    pub fte: f64,
    /// Number of resources contributing to the total
    pub resources: usize,
}
