use crate::cli::ProjectArgs;
use crate::commands::{render, CommandContext, CommandResult};
use hira_fte::components::availability::{AvailabilityOverride, Horizon, Projection};
use hira_fte::error::FteResult;
use hira_fte::utils::time::{format_iso, parse_iso_date_strict};
use std::fs;
use tracing::debug;

/// Project an override file on top of a base FTE
pub fn run(ctx: &CommandContext, args: &ProjectArgs) -> CommandResult {
    let content = fs::read_to_string(&args.overrides)?;
    let overrides: Vec<AvailabilityOverride> = serde_json::from_str(&content)?;
    debug!(
        "Read {} overrides from {}",
        overrides.len(),
        args.overrides.display()
    );

    let horizon = build_horizon(args.start.as_deref(), args.end.as_deref(), args.max_weeks)?;
    let projection = ctx
        .projector
        .project_with_diagnostics(args.base, &overrides, &horizon);

    render(args.format, &projection, |projection| {
        format_projection(args.base, projection)
    })
}

/// Build a horizon from command line values, rejecting malformed dates
pub fn build_horizon(
    start: Option<&str>,
    end: Option<&str>,
    max_weeks: Option<u32>,
) -> FteResult<Horizon> {
    let mut horizon = Horizon::new();
    if let Some(start) = start {
        horizon = horizon.with_start(&format_iso(parse_iso_date_strict(start)?));
    }
    if let Some(end) = end {
        horizon = horizon.with_end(&format_iso(parse_iso_date_strict(end)?));
    }
    if let Some(max_weeks) = max_weeks {
        horizon = horizon.with_max_weeks(max_weeks);
    }
    Ok(horizon)
}

/// One line per week: week start, FTE and the overrides behind it
pub fn format_projection(base_fte: f64, projection: &Projection) -> String {
    let mut lines = Vec::new();

    if projection.points.is_empty() {
        lines.push("No availability adjustments".to_string());
    }

    for point in &projection.points {
        let detail = if point.reasons.is_empty() {
            "base".to_string()
        } else {
            point.tooltip(base_fte).replace('\n', "; ")
        };
        lines.push(format!(
            "{}  {:>4.1}  {}",
            format_iso(point.week_start),
            point.fte,
            detail
        ));
    }

    if !projection.skipped.is_empty() {
        lines.push(format!(
            "Skipped malformed overrides: {}",
            projection.skipped.join(", ")
        ));
    }

    lines.join("\n")
}
