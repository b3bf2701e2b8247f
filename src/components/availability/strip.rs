use super::models::{AvailabilityOverride, Horizon, WeeklyFtePoint};
use super::projector::Projector;
use crate::utils::time::{add_weeks, format_iso, year_start_week};

impl Projector {
    /// A fixed-length strip of weeks for `year`, starting at the Sunday on or
    /// before January 1.
    ///
    /// Every week defaults to `base_fte`; weeks touched by an override carry
    /// the projected value. Unlike [`Projector::project`], an empty override
    /// list still yields a full strip.
    pub fn year_strip(
        &self,
        base_fte: f64,
        overrides: &[AvailabilityOverride],
        year: i32,
    ) -> Vec<WeeklyFtePoint> {
        let Some(first_week) = year_start_week(year) else {
            return Vec::new();
        };

        let strip_weeks = self.settings().strip_weeks;
        let mut strip: Vec<WeeklyFtePoint> = (0..i64::from(strip_weeks))
            .filter_map(|offset| add_weeks(first_week, offset))
            .map(|week_start| WeeklyFtePoint::base(week_start, base_fte))
            .collect();

        let Some(last_week) = strip.last().map(|point| point.week_start) else {
            return strip;
        };

        let horizon = Horizon {
            start: Some(format_iso(first_week)),
            end: Some(format_iso(last_week)),
            max_weeks: Some(strip_weeks),
        };

        for point in self.project(base_fte, overrides, &horizon) {
            let offset = (point.week_start - first_week).num_weeks();
            if let Some(slot) = usize::try_from(offset)
                .ok()
                .and_then(|index| strip.get_mut(index))
            {
                *slot = point;
            }
        }

        strip
    }
}
