// File: crates/energy-chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the reference comparison chart to PNG bytes without overlay text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use energy_chart_core::{
    ArrowDirection, ArrowStyle, BackgroundStyle, BarChart, ChartConfig, CssColor, LineStyle, MemoryPlaceholder,
    RasterOptions, ReferenceLine, SeriesStyle,
};

fn css(s: &str) -> CssColor {
    s.parse().expect("color")
}

fn render_bytes() -> Vec<u8> {
    let mut config = ChartConfig::new(
        100.0,
        SeriesStyle::new(css("#7395bf")),
        SeriesStyle::new(css("#b5c733")),
        BackgroundStyle::solid(css("white")).with_gridlines(css("#dddddd"), 10.0),
    );
    config.padding_left = 40.0;
    config.background.gradient = Some(css("#f4f4f4"));
    config.one_arrow = Some(ArrowStyle { direction: ArrowDirection::Up, outline: true, opacity: 0.4 });
    config.baseline = Some(ReferenceLine::new(50.0, css("green"), LineStyle::Solid));
    config.target = Some(ReferenceLine::new(80.0, css("red"), LineStyle::Dashed));

    let mut ph = MemoryPlaceholder::new(400, 300);
    let (surface, _) = BarChart::render(&mut ph, 75.0, 60.0, &config).expect("render");
    // avoid text nondeterminism across platforms
    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
    surface.render_to_png_bytes(&opts).expect("png bytes")
}

#[test]
fn golden_reference_bar_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("reference_bar_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
