// File: crates/energy-chart-core/src/lib.rs
// Summary: Core library entry point; exports the comparison bar chart, the progress
//          line graph, the drawing surface and its rasterizer.

pub mod error;
pub mod types;
pub mod geometry;
pub mod color;
pub mod theme;
pub mod text;
pub mod placeholder;
pub mod surface;
pub mod raster;
pub mod primitives;
pub mod config;
pub mod grid;
pub mod background;
pub mod bar_chart;
pub mod scale;
pub mod series;
pub mod axis;
pub mod plot;
pub mod line_graph;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use color::{Color, CssColor};
pub use theme::Theme;
pub use text::{FixedTextMeasure, SkiaTextMeasure, TextMeasure, TextShaper, TextSize, TextStyle};
pub use placeholder::{MemoryPlaceholder, Node, NodeId, Overlay, Placeholder};
pub use surface::{create_draw_surface, measure_in, DrawCommand, DrawSurface, Fill, PathData};
pub use raster::RasterOptions;
pub use primitives::{draw_arrow, draw_reference_line, ArrowGeometry, ArrowSpec};
pub use config::{
    ArrowDirection, ArrowStyle, BackgroundStyle, ChartConfig, LineStyle, ReferenceLine, SeriesStyle,
};
pub use background::draw_background;
pub use bar_chart::{render_bar_chart, BarChart, BarGeometry, BarLayout, BarPair};
pub use series::PlotSeries;
pub use axis::{TimeAxis, ValueAxis};
pub use plot::{HoverItem, Plot, PlotOptions};
pub use line_graph::{
    populate_graph, tooltip_text, HoverLabels, HoverOutcome, LegendPlacement, LegendSide, LineGraph,
    LineGraphRequest,
};
pub use telemetry::init_default_tracing;
