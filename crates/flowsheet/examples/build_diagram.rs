//! Example: Building a diagram in code and rendering it with a highlight
//!
//! This example assembles a small clarifier diagram from the data model
//! types, hovers one node and prints the detail panel and the SVG.

use std::sync::Arc;

use flowsheet::{
    Diagram, DiagramRenderer, Edge, Node,
    check::check_diagram,
    config::RenderStyle,
    draw::ShapeKind,
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let at = |x: f32, y: f32, w: f32, h: f32| {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h))
    };

    let diagram = Diagram::new(
        "clarifier",
        "Secondary Clarifier",
        vec![
            Node::new("mixed-liquor", "Mixed Liquor", ShapeKind::Pipe, at(0.0, 75.0, 90.0, 30.0))
                .with_fill("#93c5fd"),
            Node::new("clarifier", "Clarifier", ShapeKind::Circle, at(130.0, 30.0, 120.0, 120.0))
                .with_fill("#bfdbfe")
                .with_specification("Ø 24 m, SOR 1.2 m/h"),
            Node::new("effluent", "Effluent", ShapeKind::Pipe, at(290.0, 75.0, 90.0, 30.0))
                .with_fill("#6ee7b7"),
            Node::new("ras", "RAS Pump", ShapeKind::Ellipse, at(150.0, 190.0, 80.0, 40.0))
                .with_fill("#d6b38a"),
        ],
        vec![
            Edge::new("mixed-liquor", "clarifier"),
            Edge::new("clarifier", "effluent"),
            Edge::new("clarifier", "ras"),
            Edge::recycle("ras", "mixed-liquor"),
        ],
    );

    for diagnostic in check_diagram(&diagram) {
        eprintln!("{diagnostic}");
    }

    let mut renderer = DiagramRenderer::new(Arc::new(diagram), RenderStyle::default());
    renderer.pointer_enter(Id::new("clarifier"));

    if let Some(panel) = renderer.detail_panel() {
        println!("{}", panel.summary());
    }

    let svg = flowsheet::FlowsheetBuilder::default().render_svg("membrane-bioreactor", Some("membrane"))?;
    println!("{} bytes of SVG for the built-in MBR diagram", svg.len());

    let layers = renderer.render_layers().render();
    println!("{} layers rendered for the clarifier", layers.len());

    Ok(())
}
