use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use energy_chart_core::{
    BackgroundStyle, BarChart, ChartConfig, CssColor, MemoryPlaceholder, RasterOptions, SeriesStyle,
};

fn config() -> Result<ChartConfig> {
    let mut config = ChartConfig::new(
        100.0,
        SeriesStyle::new("#7395bf".parse::<CssColor>()?),
        SeriesStyle::new("#b5c733".parse::<CssColor>()?),
        BackgroundStyle::solid("white".parse()?).with_gridlines("#dddddd".parse()?, 10.0),
    );
    config.padding_left = 40.0;
    config.target = None;
    Ok(config)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(w, h) in &[(400i32, 300i32), (1200, 900)] {
        group.bench_function(format!("bars_{w}x{h}"), |b| {
            let config = config().expect("config");
            let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
            b.iter(|| -> Result<()> {
                let mut ph = MemoryPlaceholder::new(w, h);
                let (surface, _) = BarChart::render(&mut ph, 75.0, 60.0, &config)?;
                let bytes = surface.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
