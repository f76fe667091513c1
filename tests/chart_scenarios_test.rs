//! Chart Scenario Tests
//!
//! End-to-end checks through the public API: compose a chart, inspect the
//! render tree, drive the hover state machine, and encode to SVG.
//!
//! Run: cargo test --test chart_scenarios_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_relative_eq;

use dataviz::axis::BOTTOM_LABEL_ROTATION;
use dataviz::prelude::*;
use dataviz::render::{PathNode, RectNode, TextAnchor};

fn plot_only(width: f32, height: f32) -> ChartComposer {
    ChartComposer::new(ChartConfig {
        layout: Layout::new(width, height, Margins::uniform(0.0)),
        ..ChartConfig::default()
    })
    .unwrap()
}

fn line_path(tree: &RenderTree) -> &PathNode {
    match tree.find_class("line").into_iter().next() {
        Some(Node::Path(path)) => path,
        other => panic!("expected a line path, got {other:?}"),
    }
}

fn bar_rects(tree: &RenderTree) -> Vec<&RectNode> {
    tree.find_class("bar")
        .into_iter()
        .filter_map(|n| match n {
            Node::Rect(r) => Some(r),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Line chart
// ============================================================================

#[test]
fn line_chart_three_points() {
    let data = Dataset::from_xy(&[(0.0, 10.0), (1.0, 20.0), (2.0, 5.0)]);
    let chart = plot_only(100.0, 50.0)
        .render_line_chart(&data, &ChartOptions::default())
        .unwrap();

    let vertices = line_path(&chart.tree).data.vertices();
    assert_eq!(vertices.len(), 3);
    assert_relative_eq!(vertices[0].x, 0.0);
    assert_relative_eq!(vertices[1].x, 50.0);
    assert_relative_eq!(vertices[2].x, 100.0);

    // y domain is [0, 22] over [50, 0]
    assert_relative_eq!(vertices[0].y, 50.0 - 10.0 / 22.0 * 50.0, epsilon = 1e-4);
    assert_relative_eq!(vertices[1].y, 50.0 - 20.0 / 22.0 * 50.0, epsilon = 1e-4);
    assert!(vertices[1].y < vertices[0].y);
    assert!(vertices[1].y < vertices[2].y);
}

#[test]
fn line_chart_axes_and_labels() {
    let data = Dataset::from_xy(&[(0.0, 10.0), (1.0, 20.0), (2.0, 5.0)]);
    let options = ChartOptions::default()
        .title("Scores")
        .x_label("Time")
        .y_label("Score");
    let chart = ChartComposer::default().render_line_chart(&data, &options).unwrap();

    let bottom = chart.tree.find_class("axis-bottom");
    assert_eq!(bottom.len(), 1);
    let Node::Group(bottom) = bottom[0] else {
        panic!("bottom axis should be a group");
    };
    assert_eq!(bottom.transform.translate, Point::new(0.0, 410.0));

    let tick_labels: Vec<_> = chart
        .tree
        .texts()
        .into_iter()
        .filter(|t| t.class.as_deref() == Some("tick-label"))
        .collect();
    assert!(!tick_labels.is_empty());

    let rotated = tick_labels
        .iter()
        .filter(|t| t.rotation == BOTTOM_LABEL_ROTATION)
        .count();
    assert!(rotated > 0);
    assert!(tick_labels.iter().all(|t| t.anchor == TextAnchor::End));

    let texts: Vec<_> = chart.tree.texts().iter().map(|t| t.content.clone()).collect();
    for expected in ["Scores", "Time", "Score"] {
        assert!(texts.iter().any(|t| t == expected), "missing {expected}");
    }
}

// ============================================================================
// Bar chart
// ============================================================================

#[test]
fn bar_chart_two_categories() {
    let data = Dataset::from_labels(&[("a", 10.0), ("b", 20.0)]);
    let chart = plot_only(100.0, 50.0)
        .render_bar_chart(&data, &ChartOptions::default())
        .unwrap();

    let rects = bar_rects(&chart.tree);
    assert_eq!(rects.len(), 2);
    assert_relative_eq!(rects[0].rect.x, 2.5, epsilon = 1e-4);
    assert_relative_eq!(rects[1].rect.x, 52.5, epsilon = 1e-4);
    assert_relative_eq!(rects[0].rect.width, 45.0, epsilon = 1e-4);
    assert_relative_eq!(rects[1].rect.width, 45.0, epsilon = 1e-4);
    assert_relative_eq!(rects[1].rect.height, 2.0 * rects[0].rect.height, epsilon = 1e-3);
    assert_relative_eq!(rects[0].rect.bottom(), 50.0, epsilon = 1e-4);

    let x_labels: Vec<_> = chart
        .tree
        .find_class("axis-bottom")
        .into_iter()
        .flat_map(|axis| axis.children())
        .flat_map(|tick| tick.children())
        .filter_map(|n| match n {
            Node::Text(t) => Some(t.content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(x_labels, vec!["a", "b"]);
}

#[test]
fn bar_chart_custom_padding() {
    let composer = ChartComposer::new(ChartConfig {
        layout: Layout::new(100.0, 50.0, Margins::uniform(0.0)),
        band_padding: 0.5,
        ..ChartConfig::default()
    })
    .unwrap();
    let data = Dataset::from_labels(&[("a", 1.0), ("b", 2.0)]);
    let chart = composer.render_bar_chart(&data, &ChartOptions::default()).unwrap();

    let rects = bar_rects(&chart.tree);
    assert_relative_eq!(rects[0].rect.width, 25.0, epsilon = 1e-4);
    assert_relative_eq!(rects[0].rect.x, 12.5, epsilon = 1e-4);
}

// ============================================================================
// Empty dataset
// ============================================================================

#[test]
fn empty_dataset_renders_axes_only() {
    for kind in [ChartKind::Line, ChartKind::Bar] {
        let chart = ChartComposer::default()
            .render(kind, &Dataset::default(), &ChartOptions::default().title("Nothing yet"))
            .unwrap();

        assert_eq!(chart.kind, kind);
        assert!(chart.hit_regions.is_empty());
        assert_eq!(chart.tree.find_class("axis").len(), 2);
        assert!(chart.tree.find_class("tick").is_empty());
        assert!(chart.tree.find_class("hover-area").is_empty());
        assert!(chart.tree.texts().iter().any(|t| t.content == "Nothing yet"));
    }
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn hover_enter_move_leave() {
    let data = Dataset::from_xy(&[(0.0, 10.0), (1.0, 20.0), (2.0, 5.0)]);
    let chart = plot_only(100.0, 50.0)
        .render_line_chart(&data, &ChartOptions::default())
        .unwrap();
    let mut layer = chart.interaction();

    let mut events = Vec::new();
    for p in [(50.0, 25.0), (52.0, 10.0), (48.0, 40.0), (75.0, 25.0), (80.0, 25.0)] {
        events.extend(layer.handle(PointerEvent::Move(Point::from(p))));
    }

    let shows: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, TooltipEvent::Show { .. }))
        .collect();
    assert_eq!(shows.len(), 1);
    match shows[0] {
        TooltipEvent::Show {
            index,
            content,
            position,
        } => {
            assert_eq!(*index, 1);
            assert!(content.contains("20"));
            assert_relative_eq!(position.x, 60.0);
            assert_relative_eq!(position.y, -3.0);
        }
        TooltipEvent::Hide { .. } => unreachable!(),
    }
    assert_eq!(
        events.iter().filter(|e| matches!(e, TooltipEvent::Hide { .. })).count(),
        1
    );
    assert!(!layer.tooltip().visible);
}

#[test]
fn hover_respects_margins() {
    let data = Dataset::from_labels(&[("a", 10.0), ("b", 20.0)]);
    let chart = ChartComposer::default()
        .render_bar_chart(&data, &ChartOptions::default())
        .unwrap();
    assert_eq!(chart.plot_origin, Point::new(60.0, 40.0));

    let mut layer = chart.interaction();
    let anchor = chart.hit_regions[0].anchor;

    // Same coordinates without the margin shift miss.
    let outside = Point::new(anchor.x - 20.0, anchor.y);
    assert!(layer.handle(PointerEvent::Move(outside)).is_empty());

    let events = layer.handle(PointerEvent::Move(anchor.offset(chart.plot_origin)));
    assert!(matches!(events[..], [TooltipEvent::Show { index: 0, .. }]));
    assert_eq!(layer.handle(PointerEvent::Leave), vec![TooltipEvent::Hide { index: 0 }]);
}

#[test]
fn hover_areas_in_tree_match_hit_regions() {
    let data = Dataset::from_xy(&[(0.0, 1.0), (5.0, 3.0), (10.0, 2.0), (15.0, 8.0)]);
    let chart = ChartComposer::default()
        .render_line_chart(&data, &ChartOptions::default())
        .unwrap();

    let areas: Vec<_> = chart
        .tree
        .find_class("hover-area")
        .into_iter()
        .filter_map(|n| match n {
            Node::Rect(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(areas.len(), chart.hit_regions.len());
    for (area, region) in areas.iter().zip(&chart.hit_regions) {
        assert_eq!(area.data_index, Some(region.index));
        assert_eq!(area.rect, region.bounds);
        assert!(area.fill.is_transparent());
        assert_relative_eq!(area.rect.width, 10.0);
        assert_relative_eq!(area.rect.height, 410.0);
    }
}

// ============================================================================
// Configuration and output
// ============================================================================

#[test]
fn yaml_config_drives_composition() {
    let yaml = r##"
layout:
  width: 300
  height: 200
  margins: { top: 10, right: 10, bottom: 10, left: 10 }
interaction:
  hit_half_width: 8
  tooltip_offset: [0, 0]
line:
  color: "#ff0000"
  stroke_width: 3
"##;
    let composer = ChartComposer::new(ChartConfig::from_yaml_str(yaml).unwrap()).unwrap();
    let data = Dataset::from_xy(&[(0.0, 1.0), (1.0, 2.0)]);
    let chart = composer.render_line_chart(&data, &ChartOptions::default()).unwrap();

    assert_eq!(chart.tree.size(), (300.0, 200.0));
    let line = line_path(&chart.tree);
    assert_eq!(line.stroke, Some(Rgba::rgb(255, 0, 0)));
    assert_relative_eq!(line.stroke_width, 3.0);
    assert_relative_eq!(chart.hit_regions[0].bounds.width, 16.0);
    assert_relative_eq!(chart.hit_regions[0].bounds.height, 180.0);

    let mut layer = chart.interaction();
    let at = chart.hit_regions[1].anchor.offset(chart.plot_origin);
    match &layer.handle(PointerEvent::Move(at))[..] {
        [TooltipEvent::Show { position, .. }] => assert_eq!(*position, at),
        other => panic!("unexpected events {other:?}"),
    }
}

#[test]
fn svg_output_contains_chart() {
    let data = Dataset::from_labels(&[("north", 4.0), ("south & east", 7.0)]);
    let chart = ChartComposer::default()
        .render_bar_chart(&data, &ChartOptions::default().title("Regions"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bars.svg");
    SvgEncoder::new().write_to_file(&chart.tree, &path).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();

    assert!(svg.contains(r#"<g class="chart" transform="translate(60,40)">"#));
    assert_eq!(svg.matches(r#"class="bar""#).count(), 2);
    assert_eq!(svg.matches(r#"class="hover-area""#).count(), 2);
    assert!(svg.contains("south &amp; east"));
    assert!(svg.contains(">Regions</text>"));
}

#[test]
fn identical_inputs_identical_trees() {
    let data = Dataset::from_xy(&[(1.0, 3.0), (2.0, 1.0), (4.0, 9.5)]);
    let options = ChartOptions::default().title("Same").y_label("y");
    let a = ChartComposer::default().render_line_chart(&data, &options).unwrap();
    let b = ChartComposer::default().render_line_chart(&data, &options).unwrap();
    assert_eq!(a, b);
    assert_eq!(SvgEncoder::new().render(&a.tree), SvgEncoder::new().render(&b.tree));
}
