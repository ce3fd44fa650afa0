// File: crates/energy-chart-examples/src/bin/progress.rs
// Summary: Renders a month of readings against the group mean, with a hover tooltip shown.

use energy_chart_core::{
    populate_graph, LegendSide, LineGraphRequest, MemoryPlaceholder, RasterOptions, SkiaTextMeasure, Theme,
};

const DAY: f64 = 86_400_000.0;
const START: f64 = 1_704_067_200_000.0; // 2024-01-01

fn main() {
    let data: Vec<(f64, f64)> = [62.0, 58.0, 55.0, 49.0, 44.0, 47.0, 40.0, 36.0]
        .iter()
        .enumerate()
        .map(|(i, v)| (START + (i as f64 * 4.0 + 1.0) * DAY, *v))
        .collect();
    let mean = data.iter().map(|&(t, _)| (t, 50.0)).collect();

    let request = LineGraphRequest {
        user_label: "Me".into(),
        data,
        mean_data: Some(mean),
        start_date: START,
        end_date: START + 31.0 * DAY,
        no_data_message: "No readings yet".into(),
        legend: Some(LegendSide::Right),
        ..LineGraphRequest::default()
    };

    let mut placeholder = MemoryPlaceholder::with_measure(520, 280, Box::new(SkiaTextMeasure::new()));
    let mut graph = populate_graph(&mut placeholder, &request, Theme::campaign()).expect("populate graph");

    let (t, v) = request.data[2];
    let plot = graph.plot();
    let off = plot.plot_offset();
    let page = plot.surface().canvas_to_page(off.left + plot.p2c_x(t), off.top + plot.p2c_y(v));
    println!("Hover: {:?}", graph.on_hover(page.x, page.y));

    let out = std::path::PathBuf::from("target/out/example_progress.png");
    graph.plot().surface().render_to_png(&RasterOptions::default(), &out).expect("render to png");
    println!("Wrote {}", out.display());
}
