//! Opt-in consistency checks for diagram data.
//!
//! Rendering never reports problems with diagram data; a bad shape tag or a
//! dangling edge just draws nothing. [`check_diagram`] lists those problems
//! for authors. Each finding is also logged at `warn` level.

mod diagnostic;

use std::collections::HashSet;

use log::warn;

use flowsheet_core::{color::Color, identifier::Id};

pub use diagnostic::{CheckCode, Diagnostic, Severity};

use crate::diagram::Diagram;

/// Checks `diagram` for data that would render silently wrong.
///
/// Findings come in declaration order: nodes first, then edges.
pub fn check_diagram(diagram: &Diagram) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen: HashSet<Id> = HashSet::new();

    for node in diagram.nodes() {
        let id = node.id();

        if !seen.insert(id) {
            diagnostics.push(
                Diagnostic::new(CheckCode::C001, format!("node id `{id}` is declared more than once"))
                    .with_help("only the first node with this id receives edges and highlights"),
            );
        }

        if node.shape().kind().is_none() {
            diagnostics.push(
                Diagnostic::new(
                    CheckCode::C002,
                    format!("node `{id}` has unrecognized shape `{}`", node.shape()),
                )
                .with_help("use one of: rectangle, tank, circle, ellipse, pipe, membrane"),
            );
        }

        if let Err(err) = Color::new(node.fill()) {
            diagnostics.push(Diagnostic::new(
                CheckCode::C003,
                format!("node `{id}` has {err}"),
            ));
        }

        let bounds = node.bounds();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            diagnostics.push(Diagnostic::new(
                CheckCode::C004,
                format!(
                    "node `{id}` has size {}x{}",
                    bounds.width(),
                    bounds.height()
                ),
            ));
        }
    }

    for edge in diagram.edges() {
        for end in [edge.source(), edge.target()] {
            if diagram.node(end).is_none() {
                diagnostics.push(Diagnostic::new(
                    CheckCode::C100,
                    format!(
                        "edge `{}` -> `{}` refers to unknown node `{end}`",
                        edge.source(),
                        edge.target()
                    ),
                ));
            }
        }
    }

    for diagnostic in &diagnostics {
        warn!(
            diagram_id = diagram.id().as_string(),
            code = diagnostic.code().as_str();
            "{}", diagnostic.message()
        );
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use flowsheet_core::{
        draw::ShapeKind,
        geometry::{Bounds, Point, Size},
    };

    use super::*;
    use crate::diagram::{Edge, Node};

    fn bounds(x: f32, w: f32) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, 0.0), Size::new(w, 40.0))
    }

    #[test]
    fn test_clean_diagram() {
        let diagram = Diagram::new(
            "clean",
            "Clean",
            vec![
                Node::new("a", "A", ShapeKind::Tank, bounds(0.0, 40.0)),
                Node::new("b", "B", ShapeKind::Pipe, bounds(80.0, 40.0)).with_fill("#0ea5e9"),
            ],
            vec![Edge::new("a", "b")],
        );
        assert!(check_diagram(&diagram).is_empty());
    }

    #[test]
    fn test_reports_every_kind() {
        let diagram = Diagram::new(
            "messy",
            "Messy",
            vec![
                Node::new("a", "A", ShapeKind::Tank, bounds(0.0, 40.0)),
                Node::new("a", "A again", "hexagon", bounds(80.0, 40.0)),
                Node::new("c", "C", ShapeKind::Circle, bounds(160.0, 0.0)).with_fill("bluish"),
            ],
            vec![Edge::new("a", "ghost"), Edge::recycle("void", "c")],
        );

        let codes: Vec<CheckCode> = check_diagram(&diagram).iter().map(Diagnostic::code).collect();
        assert_eq!(
            codes,
            vec![
                CheckCode::C001,
                CheckCode::C002,
                CheckCode::C003,
                CheckCode::C004,
                CheckCode::C100,
                CheckCode::C100,
            ]
        );
    }

    #[test]
    fn test_edge_with_both_ends_missing() {
        let diagram = Diagram::new("edges", "Edges", Vec::new(), vec![Edge::new("x", "y")]);
        let diagnostics = check_diagram(&diagram);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity().is_warning()));
    }
}
