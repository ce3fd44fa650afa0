// File: crates/energy-chart-examples/src/bin/bars.rs
// Summary: Minimal example that renders the 400x300 "me vs others" comparison chart to PNG.

use energy_chart_core::{
    ArrowDirection, ArrowStyle, BackgroundStyle, BarChart, ChartConfig, CssColor, LineStyle, MemoryPlaceholder,
    RasterOptions, ReferenceLine, SeriesStyle, SkiaTextMeasure,
};

fn css(s: &str) -> CssColor {
    s.parse().expect("valid color")
}

fn main() {
    let mut config = ChartConfig::new(
        100.0,
        SeriesStyle::new(css("#7395bf")).with_legend("Me", css("#333")),
        SeriesStyle::new(css("#b5c733")).with_legend("Others", css("#333")),
        BackgroundStyle::solid(css("white")).with_gridlines(css("#dddddd"), 10.0),
    );
    config.padding_left = 40.0;
    config.one_arrow = Some(ArrowStyle { direction: ArrowDirection::Down, outline: false, opacity: 0.35 });
    config.target = Some(ReferenceLine {
        label: Some("Goal".into()),
        ..ReferenceLine::new(50.0, css("#c0392b"), LineStyle::Dashed)
    });

    let mut placeholder = MemoryPlaceholder::with_measure(400, 300, Box::new(SkiaTextMeasure::new()));
    let (surface, _) = BarChart::render(&mut placeholder, 75.0, 60.0, &config).expect("render bars");

    let out = std::path::PathBuf::from("target/out/example_bars.png");
    surface.render_to_png(&RasterOptions::default(), &out).expect("render to png");
    println!("Wrote {}", out.display());
}
