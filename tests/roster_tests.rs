use chrono::NaiveDate;
use hira_fte::components::availability::{AvailabilityOverride, Horizon};
use hira_fte::components::roster::Resource;
use hira_fte::components::{Projector, Roster};
use std::env;
use std::fs;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn resource(id: &str, job: &str, unit_fte: f64, availability: Vec<AvailabilityOverride>) -> Resource {
    Resource {
        employee_id: id.to_string(),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        job_name: job.to_string(),
        unit_fte,
        availability,
        extra: Default::default(),
    }
}

fn sample_roster() -> Roster {
    Roster::new(vec![
        resource(
            "1",
            "RN",
            0.9,
            vec![AvailabilityOverride::new(
                "PTO",
                "2024-03-04",
                Some("2024-03-10"),
                0.0,
            )],
        ),
        resource(
            "2",
            "RN",
            1.0,
            vec![AvailabilityOverride::new("Orientation", "2024-01-01", Some("2024-01-27"), 0.5)],
        ),
        resource("3", "CNA", 0.6, Vec::new()),
    ])
}

/// Each resource is projected on top of its own unit FTE
#[test]
fn test_project_each_resource() {
    let projections = sample_roster().project(&Projector::default(), &Horizon::new());

    assert_eq!(projections.len(), 3);
    assert_eq!(projections[0].display_name, "First1 Last1");
    assert_eq!(projections[0].base_fte, 0.9);
    assert_eq!(projections[0].projection.points.len(), 2);
    assert_eq!(projections[1].projection.points.len(), 4);
    assert!(projections[1].projection.points.iter().all(|p| p.fte == 0.5));
    // No overrides, nothing to report
    assert!(projections[2].projection.points.is_empty());
}

/// Weekly totals add every resource's effective FTE
#[test]
fn test_weekly_totals() {
    let totals = sample_roster().weekly_totals(&Projector::default(), 2024, false);
    assert_eq!(totals.len(), 52);
    assert!(totals.iter().all(|t| t.job_name.is_none() && t.resources == 3));

    // Orientation week: 0.9 + 0.5 + 0.6
    assert_eq!(totals[0].week_start, date(2023, 12, 31));
    assert!((totals[0].fte - 2.0).abs() < 1e-9);

    // PTO week: 0.0 + 1.0 + 0.6
    assert_eq!(totals[9].week_start, date(2024, 3, 3));
    assert!((totals[9].fte - 1.6).abs() < 1e-9);

    // Ordinary week: 0.9 + 1.0 + 0.6
    assert!((totals[20].fte - 2.5).abs() < 1e-9);
}

/// Grouped totals are split per job
#[test]
fn test_weekly_totals_by_job() {
    let totals = sample_roster().weekly_totals(&Projector::default(), 2024, true);
    assert_eq!(totals.len(), 104);

    let cna: Vec<_> = totals
        .iter()
        .filter(|t| t.job_name.as_deref() == Some("CNA"))
        .collect();
    assert_eq!(cna.len(), 52);
    assert!(cna.iter().all(|t| t.resources == 1 && (t.fte - 0.6).abs() < 1e-9));

    let rn_pto_week = totals
        .iter()
        .find(|t| t.job_name.as_deref() == Some("RN") && t.week_start == date(2024, 3, 3))
        .unwrap();
    assert_eq!(rn_pto_week.resources, 2);
    assert!((rn_pto_week.fte - 1.0).abs() < 1e-9);
}

/// Saving normalizes availability and loading gives back the same roster
#[test]
fn test_save_and_load() {
    let path = env::temp_dir().join(format!("hira-fte-roster-{}.json", uuid::Uuid::new_v4()));

    let mut roster = sample_roster();
    roster.resources[2].availability = vec![
        AvailabilityOverride::new("PTO", "", None, 0.0),
        AvailabilityOverride::new("FMLA", "2024-08-01", Some(""), 0.4),
    ];

    roster.save(&path).unwrap();
    let loaded = Roster::load(&path).unwrap();

    assert_eq!(loaded.resources.len(), 3);
    assert_eq!(loaded.resources[0], roster.resources[0]);
    let availability = &loaded.resources[2].availability;
    assert_eq!(availability.len(), 1);
    assert_eq!(availability[0].kind, "FMLA");
    assert!(availability[0].end.is_none());

    fs::remove_file(&path).ok();
}

/// Columns the roster does not model survive a load/save round trip
#[test]
fn test_unmodelled_columns_survive_save() {
    let path = env::temp_dir().join(format!("hira-fte-roster-{}.json", uuid::Uuid::new_v4()));
    let roster = Roster::from_json(
        r#"[{
            "campus": "North",
            "cost_center_name": "4 West Med/Surg",
            "employee_id": "100231",
            "position": "Staff Nurse",
            "job_name": "RN",
            "unit_fte": 0.9,
            "shift": "Day",
            "expected_hours_per_week": null,
            "availability": []
        }]"#,
    )
    .unwrap();

    roster.save(&path).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved[0]["campus"], "North");
    assert_eq!(saved[0]["cost_center_name"], "4 West Med/Surg");
    assert_eq!(saved[0]["position"], "Staff Nurse");
    assert_eq!(saved[0]["shift"], "Day");
    assert!(saved[0]["expected_hours_per_week"].is_null());
    assert!(saved[0].as_object().unwrap().contains_key("expected_hours_per_week"));

    let reloaded = Roster::load(&path).unwrap();
    assert_eq!(reloaded, roster);

    fs::remove_file(&path).ok();
}

/// Malformed JSON is reported, not swallowed
#[test]
fn test_from_json_error() {
    assert!(Roster::from_json("{not json").is_err());
    assert!(Roster::from_json("[]").unwrap().resources.is_empty());
}
