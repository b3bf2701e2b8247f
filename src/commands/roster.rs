use crate::cli::RosterArgs;
use crate::commands::project::format_projection;
use crate::commands::{render, CommandContext, CommandResult};
use chrono::{Datelike, Local};
use hira_fte::components::availability::Horizon;
use hira_fte::components::roster::{ResourceProjection, WeeklyTotal};
use hira_fte::components::Roster;
use hira_fte::utils::time::format_iso;

/// Project every resource of a roster file, or sum them per week
pub fn run(ctx: &CommandContext, args: &RosterArgs) -> CommandResult {
    let roster = Roster::load(&args.file)?;

    if args.totals {
        let year = args.year.unwrap_or_else(|| Local::now().year());
        let totals = roster.weekly_totals(&ctx.projector, year, args.by_job);
        return render(args.format, &totals, |totals| format_totals(totals));
    }

    let projections = roster.project(&ctx.projector, &Horizon::new());
    render(args.format, &projections, |projections| {
        format_resources(projections)
    })
}

/// A block per resource: header line followed by its weekly series
pub fn format_resources(projections: &[ResourceProjection]) -> String {
    projections
        .iter()
        .map(|resource| {
            format!(
                "{} ({}) base {:.1}\n{}",
                resource.display_name,
                resource.employee_id,
                resource.base_fte,
                format_projection(resource.base_fte, &resource.projection)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One line per week (and job, when grouped)
pub fn format_totals(totals: &[WeeklyTotal]) -> String {
    totals
        .iter()
        .map(|total| match &total.job_name {
            Some(job) => format!(
                "{}  {:<12} {:>6.2}  ({} resources)",
                format_iso(total.week_start),
                job,
                total.fte,
                total.resources
            ),
            None => format!(
                "{}  {:>6.2}  ({} resources)",
                format_iso(total.week_start),
                total.fte,
                total.resources
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
