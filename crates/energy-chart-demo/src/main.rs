// File: crates/energy-chart-demo/src/main.rs
// Summary: Demo loads a JSON bar-chart job and a progress CSV and renders both charts to PNGs.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use energy_chart_core::{
    init_default_tracing, populate_graph, BarChart, ChartConfig, LegendSide, LineGraphRequest, MemoryPlaceholder,
    RasterOptions, SkiaTextMeasure, Theme,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DAY: f64 = 86_400_000.0;

/// One comparison chart to draw.
#[derive(Deserialize)]
struct BarJob {
    left: f64,
    right: f64,
    #[serde(default = "default_width")]
    width: i32,
    #[serde(default = "default_height")]
    height: i32,
    config: ChartConfig,
}

fn default_width() -> i32 { energy_chart_core::types::WIDTH }
fn default_height() -> i32 { energy_chart_core::types::HEIGHT }

fn main() -> Result<()> {
    let _ = init_default_tracing();

    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let job_path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| data_dir.join("bar_job.json"));
    let csv_path = std::env::args().nth(2).map(PathBuf::from).unwrap_or_else(|| data_dir.join("progress.csv"));
    let theme = std::env::args().nth(3).map(|n| energy_chart_core::theme::find(&n)).unwrap_or_default();

    // 1) Comparison bars
    let job = load_job(&job_path).with_context(|| format!("failed to load job '{}'", job_path.display()))?;
    job.config.validate().context("invalid bar chart configuration")?;
    let mut placeholder = MemoryPlaceholder::with_measure(job.width, job.height, Box::new(SkiaTextMeasure::new()));
    let (surface, bars) = BarChart::render(&mut placeholder, job.left, job.right, &job.config)?;
    info!(one = bars.one.rect.height(), two = bars.two.rect.height(), "bars laid out");
    let out_bars = out_name_with(&job_path, "bars");
    surface.render_to_png(&RasterOptions::default(), &out_bars)?;
    println!("Wrote {}", out_bars.display());

    // 2) Progress graph
    let rows = load_progress_csv(&csv_path).with_context(|| format!("failed to load CSV '{}'", csv_path.display()))?;
    println!("Loaded {} readings", rows.len());
    if rows.is_empty() {
        warn!("no readings loaded; the graph will show its empty-data message");
    }
    let request = progress_request(&rows);
    let mut placeholder = MemoryPlaceholder::with_measure(520, 280, Box::new(SkiaTextMeasure::new()));
    let graph = populate_graph(&mut placeholder, &request, theme)?;
    let out_graph = out_name_with(&csv_path, "progress");
    graph.plot().surface().render_to_png(&RasterOptions { background: theme.background, ..RasterOptions::default() }, &out_graph)?;
    println!("Wrote {}", out_graph.display());

    Ok(())
}

fn load_job(path: &Path) -> Result<BarJob> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// A row of the progress CSV: `(millis, value, mean?)`.
type Reading = (f64, f64, Option<f64>);

/// Load `date,value[,mean]` rows. Dates are `YYYY-MM-DD` or epoch milliseconds.
fn load_progress_csv(path: &Path) -> Result<Vec<Reading>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "time", "timestamp"]).context("missing date column")?;
    let i_value = idx(&["value", "me", "user"]).context("missing value column")?;
    let i_mean = idx(&["mean", "everyone", "group"]);

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let date = rec.get(i_date).and_then(parse_date_millis);
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        let mean = i_mean.and_then(|i| rec.get(i)).and_then(|s| s.parse::<f64>().ok());
        match (date, value) {
            (Some(t), Some(v)) => out.push((t, v, mean)),
            _ => warn!(line = line + 2, "skipping unparsable row"),
        }
    }
    Ok(out)
}

fn parse_date_millis(s: &str) -> Option<f64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Some(ms as f64);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() as f64)
}

fn progress_request(rows: &[Reading]) -> LineGraphRequest {
    let data: Vec<(f64, f64)> = rows.iter().map(|&(t, v, _)| (t, v)).collect();
    let mean: Vec<(f64, f64)> = rows.iter().filter_map(|&(t, _, m)| m.map(|m| (t, m))).collect();
    let start = data.first().map_or(0.0, |p| p.0 - DAY);
    let end = data.last().map_or(start + DAY, |p| p.0 + DAY);
    LineGraphRequest {
        user_label: "Me".into(),
        data,
        mean_data: (!mean.is_empty()).then_some(mean),
        start_date: start,
        end_date: end,
        no_data_message: "No readings yet".into(),
        legend: Some(LegendSide::Right),
        ..LineGraphRequest::default()
    }
}

/// Produce output file name like target/out/energy_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("energy_{stem}_{suffix}.png"))
}
