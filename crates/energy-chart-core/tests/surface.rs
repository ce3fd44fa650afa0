// File: crates/energy-chart-core/tests/surface.rs
// Purpose: Surface creation against a placeholder, state scoping, overlays and text measurement.

use energy_chart_core::placeholder::Node;
use energy_chart_core::{
    create_draw_surface, ChartError, Color, DrawCommand, MemoryPlaceholder, Placeholder, TextStyle,
};

#[test]
fn surface_replaces_previous_children() {
    let mut ph = MemoryPlaceholder::new(400, 300);
    ph.insert_overlay(energy_chart_core::Overlay::new("stale", TextStyle::default(), 0.0, 0.0));
    ph.attach_surface(10, 10);

    let surface = create_draw_surface(&mut ph).expect("surface");
    assert_eq!((surface.width(), surface.height()), (400, 300));
    let node = surface.node();
    drop(surface);

    assert_eq!(ph.child_count(), 1);
    assert_eq!(ph.children().next(), Some(&Node::Surface { width: 400, height: 300 }));
    assert!(ph.extent(node).is_some());
}

#[test]
fn zero_sized_placeholder_is_rejected_and_left_untouched() {
    let mut ph = MemoryPlaceholder::new(0, 300);
    ph.insert_overlay(energy_chart_core::Overlay::new("kept", TextStyle::default(), 0.0, 0.0));

    let err = create_draw_surface(&mut ph).err().expect("must fail");
    assert_eq!(err.to_string(), "invalid dimensions for plot, width = 0, height = 300");
    match err {
        ChartError::InvalidDimensions { width, height } => assert_eq!((width, height), (0, 300)),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ph.child_count(), 1);
}

#[test]
fn negative_height_is_rejected() {
    let mut ph = MemoryPlaceholder::new(200, -4);
    assert!(matches!(create_draw_surface(&mut ph), Err(ChartError::InvalidDimensions { .. })));
}

#[test]
fn saved_state_restores_transform_and_colors() {
    let mut ph = MemoryPlaceholder::new(100, 100);
    let mut surface = create_draw_surface(&mut ph).expect("surface");
    {
        let mut s = surface.save();
        s.translate(10.0, 20.0);
        s.set_fill_color(Color::RED);
        s.fill_rect(0.0, 0.0, 5.0, 5.0);
        assert_eq!(s.save_depth(), 1);
    }
    assert_eq!(surface.save_depth(), 0);
    surface.fill_rect(0.0, 0.0, 5.0, 5.0);

    let rects: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillRect { rect, fill } => Some((*rect, *fill)),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 2);
    assert_eq!((rects[0].0.left, rects[0].0.top), (10.0, 20.0));
    assert_eq!(rects[0].1, energy_chart_core::Fill::Solid(Color::RED));
    assert_eq!((rects[1].0.left, rects[1].0.top), (0.0, 0.0));
    assert_eq!(rects[1].1, energy_chart_core::Fill::Solid(Color::BLACK));
}

#[test]
fn measuring_text_leaves_no_probe_behind() {
    let mut ph = MemoryPlaceholder::new(200, 100);
    let mut surface = create_draw_surface(&mut ph).expect("surface");
    let before = surface.placeholder().overlays().len();

    let size = surface.measure_text("Hello", &TextStyle::default());
    // fixed metrics: 5 glyphs * 13px * 0.6, one 13px * 1.2 line
    assert!((size.width - 39.0).abs() < 1e-4);
    assert!((size.height - 15.6).abs() < 1e-4);
    assert_eq!(surface.placeholder().overlays().len(), before);

    let empty = surface.measure_text("", &TextStyle::default());
    assert_eq!((empty.width, empty.height), (0.0, 0.0));
}

#[test]
fn overlays_are_positioned_in_page_coordinates() {
    let mut ph = MemoryPlaceholder::new(200, 100).at(40.0, 25.0);
    let mut surface = create_draw_surface(&mut ph).expect("surface");

    let p = surface.canvas_to_page(10.0, 5.0);
    assert_eq!((p.x, p.y), (50.0, 30.0));
    let back = surface.page_to_canvas(p.x, p.y);
    assert_eq!((back.x, back.y), (10.0, 5.0));

    let id = surface.overlay_text("label", &TextStyle::class("note"), 10.0, 5.0);
    let overlays = surface.placeholder().overlays();
    let (_, o) = overlays.iter().find(|(nid, _)| *nid == id).expect("overlay present");
    assert_eq!((o.left, o.top), (50.0, 30.0));
    assert!(o.style.has_class("note"));

    assert!(surface.remove_overlay(id));
    assert!(!surface.remove_overlay(id));
}
