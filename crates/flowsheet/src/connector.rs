//! Edge geometry resolution.
//!
//! A connector leaves the right-middle of its source node and enters the
//! left-middle of its target node. Resolution is a pure function of the two
//! stored node boxes; nothing is routed around obstacles.

use std::fmt;

use log::trace;

use flowsheet_core::{
    draw::{Primitive, StrokeDefinition},
    geometry::Point,
};

use crate::diagram::{Diagram, Edge};

/// The resolved geometry of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectorPath {
    /// At least one endpoint did not resolve; draws nothing.
    Empty,
    /// A straight segment between the two anchor points.
    Line { start: Point, end: Point },
}

impl ConnectorPath {
    /// Returns the SVG path data, `"M x1 y1 L x2 y2"`, or `""` for an empty path.
    pub fn path_data(&self) -> String {
        self.to_string()
    }

    /// Returns the `(start, end)` anchor points, if resolved.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self {
            Self::Empty => None,
            Self::Line { start, end } => Some((*start, *end)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Converts the path into a drawing primitive with the given stroke.
    pub fn to_primitive(&self, stroke: StrokeDefinition) -> Primitive {
        Primitive::Path {
            data: self.path_data(),
            stroke,
        }
    }
}

impl fmt::Display for ConnectorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Line { start, end } => write!(
                f,
                "M {} {} L {} {}",
                start.x(),
                start.y(),
                end.x(),
                end.y()
            ),
        }
    }
}

/// Resolves the start and end coordinates of `edge` within `diagram`.
///
/// Returns [`ConnectorPath::Empty`] when either endpoint id is not a node of
/// the diagram.
///
/// # Examples
///
/// ```
/// # use flowsheet::{Diagram, Edge, Node, connector::resolve_edge};
/// # use flowsheet::{draw::ShapeKind, geometry::{Bounds, Point, Size}};
/// let nodes = vec![
///     Node::new("a", "A", ShapeKind::Tank, Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 60.0))),
///     Node::new("b", "B", ShapeKind::Tank, Bounds::new_from_top_left(Point::new(200.0, 20.0), Size::new(80.0, 40.0))),
/// ];
/// let diagram = Diagram::new("d", "D", nodes, vec![Edge::new("a", "b")]);
///
/// let path = resolve_edge(&diagram, &diagram.edges()[0]);
/// assert_eq!(path.path_data(), "M 100 30 L 200 40");
///
/// let dangling = resolve_edge(&diagram, &Edge::new("a", "missing"));
/// assert_eq!(dangling.path_data(), "");
/// ```
pub fn resolve_edge(diagram: &Diagram, edge: &Edge) -> ConnectorPath {
    let (Some(source), Some(target)) = (diagram.node(edge.source()), diagram.node(edge.target()))
    else {
        trace!(source = edge.source().as_string(), target = edge.target().as_string(); "Edge endpoint not found");
        return ConnectorPath::Empty;
    };

    ConnectorPath::Line {
        start: source.bounds().right_middle(),
        end: target.bounds().left_middle(),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use flowsheet_core::{
        draw::ShapeKind,
        geometry::{Bounds, Size},
    };

    use super::*;
    use crate::diagram::Node;

    fn node(id: &str, x: f32, y: f32, w: f32, h: f32) -> Node {
        Node::new(
            id,
            id,
            ShapeKind::Rectangle,
            Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)),
        )
    }

    fn two_node_diagram(a: Node, b: Node) -> Diagram {
        Diagram::new("pair", "Pair", vec![a, b], vec![Edge::new("a", "b")])
    }

    #[test]
    fn test_resolve_right_to_left_middle() {
        let diagram = two_node_diagram(node("a", 50.0, 100.0, 120.0, 80.0), node("b", 250.0, 90.0, 60.0, 100.0));
        let path = resolve_edge(&diagram, &diagram.edges()[0]);
        let (start, end) = path.endpoints().expect("both endpoints exist");

        assert_approx_eq!(f32, start.x(), 170.0);
        assert_approx_eq!(f32, start.y(), 140.0);
        assert_approx_eq!(f32, end.x(), 250.0);
        assert_approx_eq!(f32, end.y(), 140.0);
    }

    #[test]
    fn test_missing_source_is_empty() {
        let diagram = two_node_diagram(node("a", 0.0, 0.0, 10.0, 10.0), node("b", 20.0, 0.0, 10.0, 10.0));
        let path = resolve_edge(&diagram, &Edge::new("ghost", "b"));
        assert!(path.is_empty());
        assert!(path.endpoints().is_none());
        assert_eq!(path.path_data(), "");
    }

    #[test]
    fn test_self_loop_resolves() {
        let diagram = two_node_diagram(node("a", 0.0, 0.0, 10.0, 10.0), node("b", 20.0, 0.0, 10.0, 10.0));
        let path = resolve_edge(&diagram, &Edge::new("a", "a"));
        assert_eq!(path.path_data(), "M 10 5 L 0 5");
    }

    #[test]
    fn test_to_primitive_keeps_data() {
        let diagram = two_node_diagram(node("a", 0.0, 0.0, 10.0, 10.0), node("b", 20.0, 0.0, 10.0, 10.0));
        let primitive = resolve_edge(&diagram, &diagram.edges()[0]).to_primitive(StrokeDefinition::default());
        let Primitive::Path { data, .. } = primitive else {
            panic!("connectors are paths");
        };
        assert_eq!(data, "M 10 5 L 20 5");
    }

    proptest! {
        #[test]
        fn resolved_endpoints_match_stored_offsets(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..300.0, ah in 1.0f32..300.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..300.0, bh in 1.0f32..300.0,
        ) {
            let diagram = two_node_diagram(node("a", ax, ay, aw, ah), node("b", bx, by, bw, bh));
            let (start, end) = resolve_edge(&diagram, &diagram.edges()[0])
                .endpoints()
                .expect("both endpoints exist");

            prop_assert!((start.x() - (ax + aw)).abs() < 1e-3);
            prop_assert!((start.y() - (ay + ah / 2.0)).abs() < 1e-3);
            prop_assert!((end.x() - bx).abs() < 1e-3);
            prop_assert!((end.y() - (by + bh / 2.0)).abs() < 1e-3);
        }
    }
}
