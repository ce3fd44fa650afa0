// File: crates/energy-chart-core/tests/line_graph.rs
// Purpose: Progress graph population, label lookup, tooltips, legend placement and empty data.

use approx::assert_abs_diff_eq;
use energy_chart_core::axis::MAX_TIME_TICKS;
use energy_chart_core::line_graph::{MESSAGE_CLASS, TOOLTIP_CLASS};
use energy_chart_core::plot::TICK_CLASS;
use energy_chart_core::{
    populate_graph, tooltip_text, ChartError, CssColor, DrawCommand, HoverLabels, HoverOutcome, LegendSide,
    LineGraph, LineGraphRequest, LineStyle, MemoryPlaceholder, Node, Overlay, Placeholder, ReferenceLine, TextStyle,
    Theme,
};

const JAN1: f64 = 1_704_067_200_000.0;
const JAN2: f64 = 1_704_153_600_000.0;
const JAN4: f64 = 1_704_326_400_000.0;
const JAN5: f64 = 1_704_412_800_000.0;

fn labelled_request() -> LineGraphRequest {
    LineGraphRequest {
        user_label: "Me".into(),
        data: vec![(JAN2, 60.0), (JAN4, 30.0)],
        start_date: JAN1,
        end_date: JAN5,
        no_data_message: "No readings yet".into(),
        value_ticks: Some(vec![0.0, 30.0, 60.0, 90.0]),
        value_labels: Some(vec!["Off".into(), "Low".into(), "High".into(), "Max".into()]),
        ..LineGraphRequest::default()
    }
}

fn labels(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|s| s.to_string()).collect())
}

/// Page position of a data point of the drawn graph.
fn page_of(graph: &LineGraph<'_>, t: f64, v: f64) -> (f32, f32) {
    let plot = graph.plot();
    let off = plot.plot_offset();
    let p = plot.surface().canvas_to_page(off.left + plot.p2c_x(t), off.top + plot.p2c_y(v));
    (p.x, p.y)
}

fn tooltip_count(graph: &LineGraph<'_>) -> usize {
    graph
        .plot()
        .surface()
        .placeholder()
        .overlays()
        .iter()
        .filter(|(_, o)| o.style.has_class(TOOLTIP_CLASS))
        .count()
}

#[test]
fn exact_tick_values_show_their_label() {
    let l = HoverLabels::new(vec![0.0, 30.0, 60.0, 90.0], labels(&["Off", "Low", "High", "Max"]), None);
    assert_eq!(l.label_for(60.0), "High");
    assert_eq!(l.label_for(59.996), "High");
    assert_eq!(l.label_for(55.0), "55");
    assert_eq!(l.label_for(33.333), "33.33");
    assert!(!l.is_percentage());
}

#[test]
fn percentage_labels_suffix_fallback_values() {
    let l = HoverLabels::new(vec![0.0, 50.0, 100.0], labels(&["0%", "50%", "100%"]), None);
    assert_eq!(l.label_for(55.0), "55%");
    assert_eq!(l.label_for(50.0), "50%");

    let bare = HoverLabels::new(vec![0.0, 50.0, 100.0], None, None);
    assert_eq!(bare.label_for(55.0), "55%");
    assert_eq!(bare.tick_label(50.0), "50%");
}

#[test]
fn hover_labels_override_tick_labels_in_tooltips() {
    let l = HoverLabels::new(
        vec![0.0, 30.0, 60.0, 90.0],
        labels(&["Off", "Low", "High", "Max"]),
        labels(&["none", "some", "lots", "all"]),
    );
    assert_eq!(l.label_for(60.0), "lots");
    assert_eq!(l.tick_label(60.0), "High");
    let format = l.formatter();
    assert_eq!(format(90.0), "Max");
}

#[test]
fn tooltip_text_uses_campaign_month_names() {
    assert_eq!(tooltip_text(JAN2, "High"), "Jan 2: High");
    assert_eq!(tooltip_text(1_726_358_400_000.0, "55%"), "Sept 15: 55%");
    assert_eq!(tooltip_text(1_709_424_000_000.0, "Low"), "March 3: Low");
}

#[test]
fn mean_series_is_drawn_first_and_shifted_down() {
    let mut request = labelled_request();
    request.mean_data = Some(vec![(JAN2, 50.0), (JAN4, 40.0)]);
    let theme = Theme::campaign();

    let mut ph = MemoryPlaceholder::new(400, 300);
    let graph = populate_graph(&mut ph, &request, theme).expect("graph");
    let series = graph.plot().series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "Everyone");
    assert_eq!(series[0].color, theme.group_series);
    assert_abs_diff_eq!(series[0].data[0].1, 49.9, epsilon = 1e-9);
    assert_abs_diff_eq!(series[0].data[1].1, 39.9, epsilon = 1e-9);
    assert_eq!(series[1].label, "Me");
    assert_eq!(series[1].color, theme.user_series);
    assert_eq!(series[1].data[0].1, 60.0);
}

#[test]
fn default_ticks_print_percentages() {
    let mut request = labelled_request();
    request.value_ticks = None;
    request.value_labels = None;
    let mut ph = MemoryPlaceholder::new(400, 300);
    drop(populate_graph(&mut ph, &request, Theme::campaign()).expect("graph"));

    let ticks: Vec<String> = ph.overlays_with_class(TICK_CLASS).iter().map(|o| o.text.clone()).collect();
    for expected in ["0%", "50%", "100%"] {
        assert!(ticks.iter().any(|t| t == expected), "missing tick {expected} in {ticks:?}");
    }
}

#[test]
fn hovering_shows_updates_and_hides_the_tooltip() {
    let mut ph = MemoryPlaceholder::new(400, 300).at(100.0, 50.0);
    let mut graph = populate_graph(&mut ph, &labelled_request(), Theme::campaign()).expect("graph");

    let (x, y) = page_of(&graph, JAN2, 60.0);
    assert_eq!(graph.on_hover(x, y), HoverOutcome::Shown("Jan 2: High".into()));
    assert_eq!(tooltip_count(&graph), 1);

    let overlays = graph.plot().surface().placeholder().overlays();
    let (_, tip) = overlays.iter().find(|(_, o)| o.style.has_class(TOOLTIP_CLASS)).expect("tooltip");
    assert_abs_diff_eq!(tip.left, x + 5.0, epsilon = 1e-3);
    assert_abs_diff_eq!(tip.top, y - 15.0, epsilon = 1e-3);
    assert_eq!(tip.style.background, Some(Theme::campaign().tooltip_background));

    // still over the same point
    assert_eq!(graph.on_hover(x + 1.0, y - 1.0), HoverOutcome::Unchanged);
    assert_eq!(tooltip_count(&graph), 1);

    let (x2, y2) = page_of(&graph, JAN4, 30.0);
    assert_eq!(graph.on_hover(x2, y2), HoverOutcome::Shown("Jan 4: Low".into()));
    assert_eq!(tooltip_count(&graph), 1);

    assert_eq!(graph.on_hover(0.0, 0.0), HoverOutcome::Hidden);
    assert_eq!(tooltip_count(&graph), 0);
    assert!(graph.tooltip().is_none());

    // returning to a point shows it again
    assert_eq!(graph.on_hover(x2, y2), HoverOutcome::Shown("Jan 4: Low".into()));
}

#[test]
fn empty_data_shows_a_centered_message() {
    let mut request = labelled_request();
    request.data.clear();
    let mut ph = MemoryPlaceholder::new(400, 300).at(100.0, 50.0);
    let graph = populate_graph(&mut ph, &request, Theme::campaign()).expect("graph");
    assert!(graph.message().is_some());
    drop(graph);

    let messages = ph.overlays_with_class(MESSAGE_CLASS);
    assert_eq!(messages.len(), 1);
    let m = messages[0];
    assert_eq!(m.text, "No readings yet");
    // fixed metrics: 15 glyphs * 7.8px wide, 15.6px tall
    assert_abs_diff_eq!(m.left, 100.0 + (400.0 - 117.0) / 2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(m.top, 50.0 + (300.0 - 15.6) / 2.0, epsilon = 1e-3);
}

#[test]
fn graphs_with_data_have_no_message() {
    let mut ph = MemoryPlaceholder::new(400, 300);
    let graph = populate_graph(&mut ph, &labelled_request(), Theme::campaign()).expect("graph");
    assert!(graph.message().is_none());
}

#[test]
fn legend_is_inset_from_the_chosen_side() {
    for side in [LegendSide::Left, LegendSide::Right] {
        let mut request = labelled_request();
        request.legend = Some(side);
        let mut ph = MemoryPlaceholder::new(400, 300);
        let graph = populate_graph(&mut ph, &request, Theme::campaign()).expect("graph");
        let off = graph.plot().plot_offset();
        let legend = graph.legend().expect("legend");
        assert_eq!(legend.side, side);
        assert_eq!(legend.bottom, off.bottom + 7.0);
        let expected = match side {
            LegendSide::Left => off.left + 11.0,
            LegendSide::Right => off.right + 11.0,
        };
        assert_eq!(legend.inset, expected);
    }

    let mut ph = MemoryPlaceholder::new(400, 300);
    let graph = populate_graph(&mut ph, &labelled_request(), Theme::campaign()).expect("graph");
    assert!(graph.legend().is_none());
}

#[test]
fn reference_lines_sit_beneath_the_series() {
    let mut request = labelled_request();
    let norm: CssColor = "#999".parse().expect("color");
    request.reference_lines = vec![
        ReferenceLine::new(0.0, norm.clone(), LineStyle::Solid),
        ReferenceLine::new(40.0, norm, LineStyle::Dashed),
    ];
    let mut ph = MemoryPlaceholder::new(400, 300);
    let graph = populate_graph(&mut ph, &request, Theme::campaign()).expect("graph");

    let widths: Vec<f32> = graph
        .plot()
        .surface()
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokePath { width, .. } => Some(*width),
            _ => None,
        })
        .collect();
    let reference = widths.iter().filter(|w| **w == 2.0).count();
    assert_eq!(reference, 1, "zero-valued line must be skipped");
    let first_reference = widths.iter().position(|w| *w == 2.0).expect("reference line");
    let first_series = widths.iter().position(|w| *w == 5.0).expect("series line");
    assert!(first_reference < first_series);
}

#[test]
fn invalid_ticks_are_rejected() {
    let mut ph = MemoryPlaceholder::new(400, 300);
    let mut request = labelled_request();
    request.value_ticks = Some(vec![10.0]);
    assert!(matches!(populate_graph(&mut ph, &request, Theme::campaign()), Err(ChartError::InvalidConfig(_))));

    request.value_ticks = Some(vec![0.0, 50.0, 50.0]);
    assert!(matches!(populate_graph(&mut ph, &request, Theme::campaign()), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn hidden_or_tiny_placeholders_are_rejected() {
    let mut hidden = MemoryPlaceholder::new(0, 0);
    assert!(matches!(
        populate_graph(&mut hidden, &labelled_request(), Theme::campaign()),
        Err(ChartError::InvalidDimensions { .. })
    ));

    let mut tiny = MemoryPlaceholder::new(30, 30);
    tiny.insert_overlay(Overlay::new("previous chart", TextStyle::default(), 0.0, 0.0));
    assert!(matches!(
        populate_graph(&mut tiny, &labelled_request(), Theme::campaign()),
        Err(ChartError::InvalidDimensions { .. })
    ));
    // layout is rejected before the placeholder is cleared
    assert_eq!(tiny.child_count(), 1);
    assert_eq!(tiny.children().next(), Some(&Node::Overlay(Overlay::new("previous chart", TextStyle::default(), 0.0, 0.0))));
}

#[test]
fn unrepresentable_dates_are_rejected() {
    for (start, end) in [(1e25, 1.000_000_000_000_000_4e25), (JAN1, f64::INFINITY), (f64::NAN, JAN5)] {
        let request = LineGraphRequest { start_date: start, end_date: end, ..labelled_request() };
        assert!(matches!(request.validate(), Err(ChartError::InvalidConfig(_))), "accepted [{start}, {end}]");
    }

    let json = r#"{"userLabel":"Me","data":[],"startDate":1e25,"endDate":1.0000000000000004e25}"#;
    let request = LineGraphRequest::from_json_str(json).expect("parses");
    let mut ph = MemoryPlaceholder::new(400, 300);
    assert!(matches!(populate_graph(&mut ph, &request, Theme::campaign()), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn widest_date_range_draws_a_bounded_axis() {
    let request = LineGraphRequest {
        start_date: -8_000_000_000_000_000.0,
        end_date: 8_000_000_000_000_000.0,
        ..labelled_request()
    };
    let mut ph = MemoryPlaceholder::new(400, 300);
    drop(populate_graph(&mut ph, &request, Theme::campaign()).expect("graph"));
    assert!(ph.overlays_with_class(TICK_CLASS).len() <= 4 + MAX_TIME_TICKS);
}

#[test]
fn pixels_map_back_to_values() {
    let mut ph = MemoryPlaceholder::new(400, 300);
    let graph = populate_graph(&mut ph, &labelled_request(), Theme::campaign()).expect("graph");
    let plot = graph.plot();
    assert_abs_diff_eq!(plot.c2p_x(plot.p2c_x(JAN2)), JAN2, epsilon = 60_000.0);
    assert_abs_diff_eq!(plot.c2p_y(plot.p2c_y(60.0)), 60.0, epsilon = 1e-3);
    assert_abs_diff_eq!(plot.c2p_y(0.0), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(plot.c2p_y(plot.plot_height()), 0.0, epsilon = 1e-3);
}
