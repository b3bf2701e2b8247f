pub mod models;

pub use models::{Resource, ResourceProjection, WeeklyTotal};

use crate::components::availability::{normalize_overrides, Horizon, Projector};
use crate::error::FteResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The resource roster, persisted as a JSON array of resource rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub resources: Vec<Resource>,
}

impl Roster {
    /// Create a roster from resources
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Parse a roster from JSON
    pub fn from_json(json: &str) -> FteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a roster from a JSON file
    pub fn load(path: &Path) -> FteResult<Self> {
        let content = fs::read_to_string(path)?;
        let roster = Self::from_json(&content)?;
        info!(
            "Loaded {} resources from {}",
            roster.resources.len(),
            path.display()
        );
        Ok(roster)
    }

    /// Save the roster to a JSON file, normalizing each availability list
    pub fn save(&self, path: &Path) -> FteResult<()> {
        let normalized = Roster::new(
            self.resources
                .iter()
                .map(|resource| Resource {
                    availability: normalize_overrides(&resource.availability),
                    ..resource.clone()
                })
                .collect(),
        );

        let json = serde_json::to_string_pretty(&normalized)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Project every resource, using its unit FTE as the base
    pub fn project(&self, projector: &Projector, horizon: &Horizon) -> Vec<ResourceProjection> {
        self.resources
            .iter()
            .map(|resource| ResourceProjection {
                employee_id: resource.employee_id.clone(),
                display_name: resource.display_name(),
                base_fte: resource.unit_fte,
                projection: projector.project_with_diagnostics(
                    resource.unit_fte,
                    &resource.availability,
                    horizon,
                ),
            })
            .collect()
    }

    /// Effective FTE per week of `year`, summed across the roster.
    ///
    /// With `by_job` the sums are split per job name, ordered by job and then
    /// week; otherwise they are ordered by week.
    pub fn weekly_totals(&self, projector: &Projector, year: i32, by_job: bool) -> Vec<WeeklyTotal> {
        let mut totals: BTreeMap<(Option<String>, NaiveDate), (f64, usize)> = BTreeMap::new();

        for resource in &self.resources {
            let group = by_job.then(|| resource.job_name.clone());

            for point in projector.year_strip(resource.unit_fte, &resource.availability, year) {
                let entry = totals
                    .entry((group.clone(), point.week_start))
                    .or_insert((0.0, 0));
                entry.0 += point.fte;
                entry.1 += 1;
            }
        }

        debug!(
            resources = self.resources.len(),
            rows = totals.len(),
            "Computed weekly totals for {}",
            year
        );

        totals
            .into_iter()
            .map(|((job_name, week_start), (fte, resources))| WeeklyTotal {
                week_start,
                job_name,
                fte,
                resources,
            })
            .collect()
    }
}
