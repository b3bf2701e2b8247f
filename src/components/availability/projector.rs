use super::models::{
    AvailabilityOverride, Horizon, OverrideEnd, OverrideReason, Projection, WeeklyFtePoint,
};
use crate::config::{DEFAULT_FALLBACK_TAIL_WEEKS, DEFAULT_MAX_WEEKS, DEFAULT_STRIP_WEEKS};
use crate::utils::time::{add_weeks, parse_iso_date, week_start_sunday};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Tunables for the projector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectorSettings {
    /// Weeks emitted when every override is ongoing and no horizon end is given
    pub fallback_tail_weeks: u32,
    /// Cap on emitted weeks when the horizon does not set one
    pub max_weeks: u32,
    /// Length of a calendar-year strip
    pub strip_weeks: u32,
}

impl Default for ProjectorSettings {
    fn default() -> Self {
        Self {
            fallback_tail_weeks: DEFAULT_FALLBACK_TAIL_WEEKS,
            max_weeks: DEFAULT_MAX_WEEKS,
            strip_weeks: DEFAULT_STRIP_WEEKS,
        }
    }
}

/// Rolls availability overrides into a weekly effective-FTE series
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector {
    settings: ProjectorSettings,
}

/// An override whose dates parsed
#[derive(Debug)]
struct DatedOverride<'a> {
    source: &'a AvailabilityOverride,
    start: NaiveDate,
    start_week: NaiveDate,
    end: OverrideEnd,
}

impl<'a> DatedOverride<'a> {
    fn parse(source: &'a AvailabilityOverride) -> Option<Self> {
        let start = parse_iso_date(&source.start)?;
        let end = match source.end.as_deref().map(str::trim) {
            None | Some("") => OverrideEnd::Ongoing,
            Some(raw) => OverrideEnd::Bounded(parse_iso_date(raw)?),
        };

        Some(Self {
            source,
            start,
            start_week: week_start_sunday(start),
            end,
        })
    }

    /// Active in the week beginning `week_start`. The start is compared by
    /// week, so an override beginning mid-week covers that whole week.
    fn is_active(&self, week_start: NaiveDate) -> bool {
        self.start_week <= week_start && self.end.covers(week_start)
    }

    fn reason(&self) -> OverrideReason {
        OverrideReason {
            kind: self.source.kind.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

impl Projector {
    /// Create a projector with the given settings
    pub fn new(settings: ProjectorSettings) -> Self {
        Self { settings }
    }

    /// Get the settings
    pub fn settings(&self) -> ProjectorSettings {
        self.settings
    }

    /// Project `overrides` on top of `base_fte`, one point per week.
    ///
    /// Returns an empty series when no usable override exists.
    pub fn project(
        &self,
        base_fte: f64,
        overrides: &[AvailabilityOverride],
        horizon: &Horizon,
    ) -> Vec<WeeklyFtePoint> {
        self.project_with_diagnostics(base_fte, overrides, horizon)
            .points
    }

    /// Same as [`Projector::project`], also reporting which records were dropped
    pub fn project_with_diagnostics(
        &self,
        base_fte: f64,
        overrides: &[AvailabilityOverride],
        horizon: &Horizon,
    ) -> Projection {
        let mut skipped = Vec::new();
        let mut dated = Vec::with_capacity(overrides.len());

        for entry in overrides {
            match DatedOverride::parse(entry) {
                Some(parsed) => dated.push(parsed),
                None => {
                    warn!(
                        id = %entry.id,
                        start = %entry.start,
                        end = ?entry.end,
                        "Skipping availability override with unparseable dates"
                    );
                    skipped.push(entry.id.clone());
                }
            }
        }

        // Stable: equal starts keep input order, so the later entry wins ties
        dated.sort_by_key(|entry| entry.start);

        let Some((first_week, last_week)) = self.horizon_weeks(&dated, horizon) else {
            return Projection {
                points: Vec::new(),
                skipped,
            };
        };

        let max_weeks = horizon.max_weeks.unwrap_or(self.settings.max_weeks) as usize;
        let mut points = Vec::new();
        let mut current = first_week;

        while current <= last_week && points.len() < max_weeks {
            points.push(resolve_week(base_fte, &dated, current));
            match add_weeks(current, 1) {
                Some(next) => current = next,
                None => break,
            }
        }

        debug!(
            overrides = dated.len(),
            skipped = skipped.len(),
            weeks = points.len(),
            "Projected weekly FTE from {} to {}",
            first_week,
            last_week
        );

        Projection { points, skipped }
    }

    /// First and last week starts of the walk, or None when there is nothing
    /// to project
    fn horizon_weeks(
        &self,
        dated: &[DatedOverride<'_>],
        horizon: &Horizon,
    ) -> Option<(NaiveDate, NaiveDate)> {
        // Sorted, so the first entry has the earliest start
        let earliest = dated.first()?.start;

        let start = explicit_date(horizon.start.as_deref(), "start").unwrap_or(earliest);
        let first_week = week_start_sunday(start);

        let end = match explicit_date(horizon.end.as_deref(), "end") {
            Some(end) => end,
            None => match dated.iter().filter_map(|entry| entry.end.date()).max() {
                Some(latest) => latest,
                None => add_weeks(
                    first_week,
                    i64::from(self.settings.fallback_tail_weeks.saturating_sub(1)),
                )?,
            },
        };

        Some((first_week, week_start_sunday(end)))
    }
}

/// Parse a caller-supplied horizon bound, ignoring it when blank or invalid
fn explicit_date(value: Option<&str>, bound: &str) -> Option<NaiveDate> {
    let raw = value?;
    if raw.trim().is_empty() {
        return None;
    }

    let parsed = parse_iso_date(raw);
    if parsed.is_none() {
        warn!("Ignoring unparseable horizon {}: '{}'", bound, raw);
    }
    parsed
}

fn resolve_week(base_fte: f64, dated: &[DatedOverride<'_>], week_start: NaiveDate) -> WeeklyFtePoint {
    let active: Vec<&DatedOverride<'_>> = dated
        .iter()
        .filter(|entry| entry.is_active(week_start))
        .collect();

    // Latest start wins; among equal starts, the last one in sorted order
    let fte = active.last().map_or(base_fte, |entry| entry.source.fte);

    WeeklyFtePoint {
        week_start,
        fte,
        reasons: active.iter().map(|entry| entry.reason()).collect(),
    }
}
