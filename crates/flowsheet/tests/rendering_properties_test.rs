//! Behavioral properties of the renderer over the built-in catalogue.

use std::sync::Arc;

use float_cmp::assert_approx_eq;

use flowsheet::{
    Catalog, DetailPanel, Diagram, DiagramRenderer, Edge, InteractionState, Node,
    config::RenderStyle,
    connector::resolve_edge,
    draw::{Primitive, RenderLayer, ShapeKind},
    geometry::{Bounds, Point, Size},
    identifier::Id,
    projects::{Project, ProjectStatus, filter_by_status, search_by_technology},
};

#[test]
fn test_one_node_group_per_node() {
    for diagram in Catalog::builtin().iter() {
        let renderer = DiagramRenderer::new(Arc::clone(diagram), RenderStyle::default());
        let output = renderer.render_layers();
        assert_eq!(output.count_in_layer(RenderLayer::Node), diagram.nodes().len());
        assert_eq!(output.count_in_layer(RenderLayer::Edge), diagram.edges().len());
    }
}

#[test]
fn test_edges_connect_stored_offsets() {
    for diagram in Catalog::builtin().iter() {
        for edge in diagram.edges() {
            let source = diagram.node(edge.source()).unwrap().bounds();
            let target = diagram.node(edge.target()).unwrap().bounds();
            let (start, end) = resolve_edge(diagram, edge)
                .endpoints()
                .expect("built-in edges resolve");

            assert_approx_eq!(f32, start.x(), source.min_x() + source.width());
            assert_approx_eq!(f32, start.y(), source.min_y() + source.height() / 2.0);
            assert_approx_eq!(f32, end.x(), target.min_x());
            assert_approx_eq!(f32, end.y(), target.min_y() + target.height() / 2.0);
        }
    }
}

#[test]
fn test_every_builtin_node_highlights() {
    for diagram in Catalog::builtin().iter() {
        let mut state = InteractionState::new();
        for node in diagram.nodes() {
            state.pointer_enter(node.id());
            let panel = DetailPanel::resolve(diagram, &state).expect("node resolves");
            assert_eq!(panel.name(), node.name());
            assert_eq!(
                panel.summary(),
                format!("{}: {}", node.name(), node.specification())
            );
        }
    }
}

#[test]
fn test_highlight_then_unhighlight_clears_panel() {
    let diagram = Catalog::builtin().get("anaerobic-digestion").unwrap();
    let mut renderer = DiagramRenderer::new(diagram, RenderStyle::default());
    assert!(renderer.detail_panel().is_none());

    renderer.pointer_enter(Id::new("digester"));
    assert_eq!(
        renderer.detail_panel().map(|panel| panel.summary()),
        Some("Mesophilic Digester: 2,500 m³, 37 °C, SRT 20 d".to_string())
    );

    renderer.pointer_leave();
    assert!(renderer.detail_panel().is_none());
    assert_eq!(*renderer.state(), InteractionState::new());
}

#[test]
fn test_fresh_renderer_starts_unhighlighted() {
    let diagram = Catalog::builtin().get("membrane-bioreactor").unwrap();
    let mut first = DiagramRenderer::new(Arc::clone(&diagram), RenderStyle::default());
    first.pointer_enter(Id::new("screen"));

    let second = DiagramRenderer::new(diagram, RenderStyle::default());
    assert!(second.state().highlighted().is_none());
    assert!(first.state().is_highlighted(Id::new("screen")));
}

#[test]
fn test_tank_liquid_level() {
    let bounds = Bounds::new_from_top_left(Point::new(200.0, 150.0), Size::new(80.0, 100.0));
    let primitives = ShapeKind::Tank.render(bounds, None, None);
    assert_eq!(primitives.len(), 2);

    let Primitive::Rect { bounds: liquid, .. } = &primitives[1] else {
        panic!("liquid level should be a rect");
    };
    assert_approx_eq!(f32, liquid.min_y(), 180.0, epsilon = 1e-3);
    assert_approx_eq!(f32, liquid.height(), 60.0, epsilon = 1e-3);
    assert_approx_eq!(f32, liquid.min_x(), 205.0);
    assert_approx_eq!(f32, liquid.width(), 70.0);
}

#[test]
fn test_membrane_interior_lines() {
    let bounds = Bounds::new_from_top_left(Point::new(40.0, 60.0), Size::new(110.0, 130.0));
    let primitives = ShapeKind::Membrane.render(bounds, None, None);

    let ys: Vec<f32> = primitives
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Line { start, end, .. } => {
                assert_approx_eq!(f32, start.x(), 45.0);
                assert_approx_eq!(f32, end.x(), 145.0);
                Some(start.y())
            }
            _ => None,
        })
        .collect();

    assert_eq!(ys, vec![80.0, 95.0, 110.0, 125.0, 140.0, 155.0]);
}

#[test]
fn test_unrecognized_shape_is_silent() {
    let diagram = Diagram::new(
        "odd",
        "Odd",
        vec![Node::new(
            "x",
            "X",
            "hexagon",
            Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
        )],
        vec![Edge::new("x", "y")],
    );
    let output = DiagramRenderer::new(Arc::new(diagram), RenderStyle::default()).render_layers();
    assert_eq!(output.count_in_layer(RenderLayer::Node), 1);
    assert_eq!(output.count_in_layer(RenderLayer::Edge), 1);
}

#[test]
fn test_project_filters() {
    assert!(filter_by_status(Project::builtin(), ProjectStatus::Planned).is_empty());

    let hits = search_by_technology(Project::builtin(), "sequencing batch");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug(), "sidestream-deammonification");
}
