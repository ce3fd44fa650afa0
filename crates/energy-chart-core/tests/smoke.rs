// File: crates/energy-chart-core/tests/smoke.rs
// Purpose: Basic end-to-end renders of both charts writing PNGs.

use energy_chart_core::{
    populate_graph, BackgroundStyle, BarChart, ChartConfig, CssColor, LineGraphRequest, MemoryPlaceholder,
    RasterOptions, SeriesStyle, SkiaTextMeasure, Theme,
};

fn css(s: &str) -> CssColor {
    s.parse().expect("color")
}

#[test]
fn render_bar_chart_png() {
    let mut config = ChartConfig::new(
        100.0,
        SeriesStyle::new(css("#7395bf")).with_legend("Me", css("#333")),
        SeriesStyle::new(css("#b5c733")).with_legend("Others", css("#333")),
        BackgroundStyle::solid(css("white")).with_gridlines(css("#ddd"), 10.0),
    );
    config.padding_left = 40.0;

    let mut ph = MemoryPlaceholder::with_measure(400, 300, Box::new(SkiaTextMeasure::new()));
    let (surface, _) = BarChart::render(&mut ph, 75.0, 60.0, &config).expect("render should succeed");

    let opts = RasterOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke_bars.png");
    surface.render_to_png(&opts, &out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = surface.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_line_graph_png() {
    let request = LineGraphRequest {
        user_label: "Me".into(),
        data: vec![(1_704_153_600_000.0, 60.0), (1_704_326_400_000.0, 30.0)],
        mean_data: Some(vec![(1_704_153_600_000.0, 50.0), (1_704_326_400_000.0, 45.0)]),
        start_date: 1_704_067_200_000.0,
        end_date: 1_704_412_800_000.0,
        ..LineGraphRequest::default()
    };
    let mut ph = MemoryPlaceholder::new(480, 260);
    let graph = populate_graph(&mut ph, &request, Theme::campaign()).expect("graph");

    let bytes = graph.plot().surface().render_to_png_bytes(&RasterOptions::default()).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (480, 260));
}
