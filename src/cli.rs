use crate::export;
use crate::figures;
use crate::filter;
use crate::model::{
    LaunchDataset, PayloadRange, SiteFilter, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "launch-records-cli",
    version,
    about = "Launch records dashboard with optional TUI"
)]
pub struct Cli {
    /// Path to the launch records CSV dataset
    #[arg(long, default_value = "spacex_launch_dash.csv")]
    pub data: PathBuf,

    /// Initial launch site selection: "all" or a site name from the dataset
    #[arg(long)]
    pub site: Option<String>,

    /// Initial lower payload bound in kg (defaults to the dataset minimum)
    #[arg(long)]
    pub payload_min: Option<f64>,

    /// Initial upper payload bound in kg (defaults to the dataset maximum)
    #[arg(long)]
    pub payload_max: Option<f64>,

    /// Print the figure report as JSON and exit (no TUI)
    #[arg(long)]
    pub json: bool,

    /// Print a text summary and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Export the figures for the selected filters as JSON
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Export the filtered records as CSV
    #[arg(long)]
    pub export_csv: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    // The dataset is loaded exactly once; any failure here is fatal.
    let data = crate::data::load_dataset(&args.data)
        .with_context(|| format!("failed to load dataset {}", args.data.display()))?;
    let site = resolve_site(&data, args.site.as_deref())?;
    let range = resolve_range(&data, args.payload_min, args.payload_max)?;

    handle_exports(&args, &data, &site, range)?;

    if args.json {
        return run_json(&data, &site, range);
    }
    if args.text {
        return run_text(&data, &site, range);
    }

    #[cfg(feature = "tui")]
    {
        return crate::tui::run(&data, site, range);
    }
    #[cfg(not(feature = "tui"))]
    {
        // Fallback when built without TUI support.
        return run_text(&data, &site, range);
    }
}

/// Resolve the --site argument against the dataset. The selector only ever
/// offers real site names, so anything else is rejected up front.
fn resolve_site(data: &LaunchDataset, site: Option<&str>) -> Result<SiteFilter> {
    match site {
        None => Ok(SiteFilter::AllSites),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(SiteFilter::AllSites),
        Some(s) => data.resolve_site(s).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown launch site {:?} (expected \"all\" or one of: {})",
                s,
                data.sites.join(", ")
            )
        }),
    }
}

/// Resolve the initial payload range: dataset bounds by default, overridden
/// per end by the CLI, clamped into the control's bounds.
fn resolve_range(
    data: &LaunchDataset,
    payload_min: Option<f64>,
    payload_max: Option<f64>,
) -> Result<PayloadRange> {
    let defaults = data.default_range();
    let low = payload_min
        .unwrap_or(defaults.low)
        .clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
    let high = payload_max
        .unwrap_or(defaults.high)
        .clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
    if low > high {
        bail!("empty payload range: --payload-min {low} exceeds --payload-max {high}");
    }
    Ok(PayloadRange::new(low, high))
}

/// Handle the headless export flags, shared by every output mode.
fn handle_exports(
    args: &Cli,
    data: &LaunchDataset,
    site: &SiteFilter,
    range: PayloadRange,
) -> Result<()> {
    if let Some(path) = args.export_json.as_deref() {
        let report = figures::build_report(data, site, range)?;
        export::write_figures_json(path, &report)?;
        eprintln!("Exported figures: {}", path.display());
    }
    if let Some(path) = args.export_csv.as_deref() {
        let records = filter::filter_records(&data.records, site, Some(range));
        export::write_records_csv(path, &records)?;
        eprintln!("Exported records: {}", path.display());
    }
    Ok(())
}

fn run_json(data: &LaunchDataset, site: &SiteFilter, range: PayloadRange) -> Result<()> {
    let report = figures::build_report(data, site, range)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_text(data: &LaunchDataset, site: &SiteFilter, range: PayloadRange) -> Result<()> {
    let summary = crate::text_summary::build_text_summary(data, site, range)?;
    for line in summary.lines {
        println!("{line}");
    }
    Ok(())
}
