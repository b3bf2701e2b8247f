use crate::utils::time::format_iso;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category offered first when a new override is created
pub const DEFAULT_OVERRIDE_TYPE: &str = "Orientation";

/// A date-ranged exception that replaces a resource's base FTE while active.
///
/// Dates are kept as the raw strings the editor produced. The projector
/// parses them and drops records whose dates do not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AvailabilityOverride {
    /// Opaque unique identifier
    pub id: String,
    /// Free-text category label, e.g. "PTO"
    #[serde(rename = "type")]
    pub kind: String,
    /// First day the override applies (YYYY-MM-DD)
    pub start: String,
    /// Last day the override applies (YYYY-MM-DD); absent means ongoing
    #[serde(default)]
    pub end: Option<String>,
    /// Effective FTE while the override is active
    pub fte: f64,
}

impl AvailabilityOverride {
    /// Create an override with a freshly generated id
    pub fn new(kind: &str, start: &str, end: Option<&str>, fte: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: kind.to_string(),
            start: start.to_string(),
            end: end.map(str::to_string),
            fte,
        }
    }

    /// The entry the editor starts from for a resource: ongoing, at the
    /// resource's own FTE
    pub fn default_for(unit_fte: f64, start: &str) -> Self {
        Self::new(DEFAULT_OVERRIDE_TYPE, start, None, unit_fte)
    }

    /// True when no end date is set
    pub fn is_ongoing(&self) -> bool {
        self.end.as_deref().map_or(true, |end| end.trim().is_empty())
    }
}

/// Clean an edited override list before it is stored: entries without a
/// start are dropped and blank ends become ongoing.
pub fn normalize_overrides(overrides: &[AvailabilityOverride]) -> Vec<AvailabilityOverride> {
    overrides
        .iter()
        .filter(|o| !o.start.trim().is_empty())
        .map(|o| AvailabilityOverride {
            end: o
                .end
                .as_ref()
                .filter(|end| !end.trim().is_empty())
                .cloned(),
            ..o.clone()
        })
        .collect()
}

/// End of an override's date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<NaiveDate>", into = "Option<NaiveDate>")]
pub enum OverrideEnd {
    /// Last day the override applies, inclusive
    Bounded(NaiveDate),
    /// No end date
    Ongoing,
}

impl OverrideEnd {
    /// The end date, if bounded
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            OverrideEnd::Bounded(date) => Some(*date),
            OverrideEnd::Ongoing => None,
        }
    }

    /// Whether `day` falls on or before the end
    pub fn covers(&self, day: NaiveDate) -> bool {
        match self {
            OverrideEnd::Bounded(end) => day <= *end,
            OverrideEnd::Ongoing => true,
        }
    }
}

impl From<Option<NaiveDate>> for OverrideEnd {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(OverrideEnd::Ongoing, OverrideEnd::Bounded)
    }
}

impl From<OverrideEnd> for Option<NaiveDate> {
    fn from(value: OverrideEnd) -> Self {
        value.date()
    }
}

/// Why a week's FTE differs from the base: one active override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideReason {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: NaiveDate,
    pub end: OverrideEnd,
}

impl OverrideReason {
    /// Format the reason as a human-readable line
    pub fn describe(&self) -> String {
        match self.end {
            OverrideEnd::Bounded(end) => format!(
                "{}: {} — {}",
                self.kind,
                format_iso(self.start),
                format_iso(end)
            ),
            OverrideEnd::Ongoing => format!("{}: {} — Ongoing", self.kind, format_iso(self.start)),
        }
    }
}

/// Effective FTE for one Sunday-based week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyFtePoint {
    /// Sunday that begins the week
    pub week_start: NaiveDate,
    pub fte: f64,
    /// Every override active during the week, in ascending start order
    pub reasons: Vec<OverrideReason>,
}

impl WeeklyFtePoint {
    /// A week with no override active
    pub fn base(week_start: NaiveDate, base_fte: f64) -> Self {
        Self {
            week_start,
            fte: base_fte,
            reasons: Vec::new(),
        }
    }

    /// Hover text for the week
    pub fn tooltip(&self, base_fte: f64) -> String {
        if self.reasons.is_empty() {
            return format!(
                "Base FTE: {}\nNo availability adjustments this week",
                base_fte
            );
        }

        self.reasons
            .iter()
            .map(OverrideReason::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Optional bounds on a projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horizon {
    /// First day to cover (YYYY-MM-DD); defaults to the earliest override start
    pub start: Option<String>,
    /// Last day to cover (YYYY-MM-DD); defaults to the latest override end
    pub end: Option<String>,
    /// Cap on emitted weeks; defaults to the configured cap
    pub max_weeks: Option<u32>,
}

impl Horizon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: &str) -> Self {
        self.start = Some(start.to_string());
        self
    }

    pub fn with_end(mut self, end: &str) -> Self {
        self.end = Some(end.to_string());
        self
    }

    pub fn with_max_weeks(mut self, max_weeks: u32) -> Self {
        self.max_weeks = Some(max_weeks);
        self
    }
}

/// Projection output together with the ids of records that were dropped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub points: Vec<WeeklyFtePoint>,
    /// Ids of overrides whose dates did not parse, in input order
    pub skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_override_deserializes_type_and_null_end() {
        let json = r#"{"id":"1","type":"PTO","start":"2024-03-04","end":null,"fte":0.0}"#;
        let parsed: AvailabilityOverride = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, "PTO");
        assert_eq!(parsed.end, None);
        assert!(parsed.is_ongoing());

        // Missing end is the same as null
        let json = r#"{"id":"2","type":"FMLA","start":"2024-03-04","fte":0.5}"#;
        let parsed: AvailabilityOverride = serde_json::from_str(json).unwrap();
        assert!(parsed.is_ongoing());
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = AvailabilityOverride::new("PTO", "2024-01-01", Some("2024-01-05"), 0.0);
        let b = AvailabilityOverride::new("PTO", "2024-01-01", Some("2024-01-05"), 0.0);
        assert_ne!(a.id, b.id);
        assert!(!a.is_ongoing());
    }

    #[test]
    fn test_default_for_uses_unit_fte() {
        let entry = AvailabilityOverride::default_for(0.9, "2024-05-01");
        assert_eq!(entry.kind, "Orientation");
        assert_eq!(entry.fte, 0.9);
        assert!(entry.is_ongoing());
    }

    #[test]
    fn test_normalize_overrides() {
        let mut blank_end = AvailabilityOverride::new("PTO", "2024-01-01", Some("  "), 0.0);
        blank_end.id = "keep".to_string();
        let mut no_start = AvailabilityOverride::new("PTO", " ", None, 0.0);
        no_start.id = "drop".to_string();

        let cleaned = normalize_overrides(&[blank_end, no_start]);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].id, "keep");
        assert_eq!(cleaned[0].end, None);
    }

    #[test]
    fn test_override_end_serializes_as_optional_date() {
        let bounded = serde_json::to_string(&OverrideEnd::Bounded(date(2024, 3, 10))).unwrap();
        assert_eq!(bounded, "\"2024-03-10\"");
        assert_eq!(serde_json::to_string(&OverrideEnd::Ongoing).unwrap(), "null");

        let back: OverrideEnd = serde_json::from_str("null").unwrap();
        assert_eq!(back, OverrideEnd::Ongoing);
    }

    #[test]
    fn test_override_end_covers() {
        let end = OverrideEnd::Bounded(date(2024, 3, 10));
        assert!(end.covers(date(2024, 3, 10)));
        assert!(!end.covers(date(2024, 3, 11)));
        assert!(OverrideEnd::Ongoing.covers(date(2099, 1, 1)));
    }

    #[test]
    fn test_reason_describe() {
        let bounded = OverrideReason {
            kind: "PTO".to_string(),
            start: date(2024, 3, 4),
            end: OverrideEnd::Bounded(date(2024, 3, 10)),
        };
        assert_eq!(bounded.describe(), "PTO: 2024-03-04 — 2024-03-10");

        let ongoing = OverrideReason {
            kind: "FMLA".to_string(),
            start: date(2024, 3, 4),
            end: OverrideEnd::Ongoing,
        };
        assert_eq!(ongoing.describe(), "FMLA: 2024-03-04 — Ongoing");
    }

    #[test]
    fn test_tooltip() {
        let week = date(2024, 3, 3);
        assert_eq!(
            WeeklyFtePoint::base(week, 0.9).tooltip(0.9),
            "Base FTE: 0.9\nNo availability adjustments this week"
        );

        let point = WeeklyFtePoint {
            week_start: week,
            fte: 0.0,
            reasons: vec![
                OverrideReason {
                    kind: "Orientation".to_string(),
                    start: date(2024, 2, 1),
                    end: OverrideEnd::Ongoing,
                },
                OverrideReason {
                    kind: "PTO".to_string(),
                    start: date(2024, 3, 4),
                    end: OverrideEnd::Bounded(date(2024, 3, 10)),
                },
            ],
        };
        assert_eq!(
            point.tooltip(0.9),
            "Orientation: 2024-02-01 — Ongoing\nPTO: 2024-03-04 — 2024-03-10"
        );
    }

    #[test]
    fn test_point_serializes_week_start_camel_case() {
        let point = WeeklyFtePoint::base(date(2024, 3, 3), 1.0);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["weekStart"], "2024-03-03");
        assert_eq!(json["reasons"], serde_json::json!([]));
    }
}
