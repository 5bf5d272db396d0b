//! Composition of a diagram into layered SVG output.
//!
//! [`DiagramRenderer`] ties a shared [`Diagram`] to one [`InteractionState`]
//! and a [`RenderStyle`]. It emits:
//!
//! - the document background on [`RenderLayer::Background`], when styled,
//! - one path per edge on [`RenderLayer::Edge`], wrapped in a group naming
//!   its endpoints and empty for dangling edges,
//! - one `<g data-node-id>` group per node on [`RenderLayer::Node`]
//!   holding the shape primitives and the centered label; the icon
//!   reference, when present, is carried as `data-icon` for the host page,
//! - an outline around the highlighted node on [`RenderLayer::Highlight`],
//! - the detail panel card below the diagram.

use std::sync::Arc;

use log::debug;
use svg::node::element as svg_element;

use flowsheet_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, Primitive, RenderLayer, Shape, StrokeDefinition, SvgNode, Text},
    geometry::{Bounds, Insets, Point},
    identifier::Id,
};

use crate::{
    config::RenderStyle,
    connector::resolve_edge,
    diagram::{DEFAULT_NODE_FILL, Diagram, Edge, Node},
    interaction::InteractionState,
    panel::DetailPanel,
};

/// Gap between the highlighted node and its outline.
const HIGHLIGHT_PADDING: f32 = 4.0;
const HIGHLIGHT_CORNER_RADIUS: f32 = 6.0;
/// Vertical distance between the lowest node and the detail panel.
const PANEL_OFFSET: f32 = 30.0;

/// A rendering instance of one diagram.
///
/// Every instance starts with nothing highlighted.
#[derive(Debug, Clone)]
pub struct DiagramRenderer {
    diagram: Arc<Diagram>,
    style: RenderStyle,
    state: InteractionState,
}

impl DiagramRenderer {
    pub fn new(diagram: Arc<Diagram>, style: RenderStyle) -> Self {
        Self {
            diagram,
            style,
            state: InteractionState::new(),
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Highlights the node with `id`.
    ///
    /// Ids that are not part of the diagram are stored as well; they simply
    /// resolve to no panel and no outline.
    pub fn pointer_enter(&mut self, id: Id) {
        self.state.pointer_enter(id);
    }

    pub fn pointer_leave(&mut self) {
        self.state.pointer_leave();
    }

    /// Returns the detail panel for the current highlight, if any.
    pub fn detail_panel(&self) -> Option<DetailPanel<'_>> {
        DetailPanel::resolve(&self.diagram, &self.state)
    }

    /// Returns the bounds of everything [`Self::render_layers`] draws.
    ///
    /// An empty diagram has default (zero) bounds.
    pub fn content_bounds(&self) -> Bounds {
        let Some(nodes) = self.diagram.content_bounds() else {
            return Bounds::default();
        };

        let mut bounds = match self.highlighted_node() {
            Some(node) => nodes.merge(&highlight_bounds(node)),
            None => nodes,
        };
        if let Some(panel) = self.detail_panel() {
            bounds = bounds.merge(&panel.bounds(self.panel_anchor(nodes), &self.style));
        }
        bounds
    }

    /// Renders the whole diagram in its current interaction state.
    pub fn render_layers(&self) -> LayeredOutput {
        debug!(
            diagram_id = self.diagram.id().as_string(),
            nodes = self.diagram.nodes().len(),
            edges = self.diagram.edges().len();
            "Rendering diagram layers"
        );

        let mut output = LayeredOutput::new();

        if let Some(color) = self.style.background() {
            let margin = self.style.margin();
            let background = Primitive::Rect {
                bounds: self.content_bounds().add_padding(Insets::uniform(margin)),
                corner_radius: 0.0,
                fill: Some(color),
                stroke: None,
            };
            output.add_to_layer(RenderLayer::Background, background.to_svg());
        }

        for edge in self.diagram.edges() {
            output.add_to_layer(RenderLayer::Edge, self.render_edge(edge));
        }

        for node in self.diagram.nodes() {
            output.add_to_layer(RenderLayer::Node, self.render_node(node));
        }

        if let Some(node) = self.highlighted_node() {
            let outline = Primitive::Rect {
                bounds: highlight_bounds(node),
                corner_radius: HIGHLIGHT_CORNER_RADIUS,
                fill: None,
                stroke: Some(self.style.highlight().clone()),
            };
            output.add_to_layer(RenderLayer::Highlight, outline.to_svg());
        }

        if let (Some(panel), Some(nodes)) = (self.detail_panel(), self.diagram.content_bounds()) {
            output.merge(panel.render_to_layers(self.panel_anchor(nodes), &self.style));
        }

        output
    }

    fn render_edge(&self, edge: &Edge) -> SvgNode {
        let stroke = if edge.is_recycle() {
            self.style.recycle_edge()
        } else {
            self.style.edge().clone()
        };

        let path = resolve_edge(&self.diagram, edge).to_primitive(stroke).to_svg();
        let group = svg_element::Group::new()
            .set("data-source", edge.source().as_string())
            .set("data-target", edge.target().as_string())
            .add(path);
        Box::new(group)
    }

    fn render_node(&self, node: &Node) -> SvgNode {
        let mut group = svg_element::Group::new()
            .set("data-node-id", node.id().as_string())
            .set("data-shape", node.shape().to_string());
        if let Some(icon) = node.icon() {
            group = group.set("data-icon", icon);
        }

        // Unrecognized tags keep their (empty) group but draw nothing
        if node.shape().kind().is_none() {
            return Box::new(group);
        }

        let shape = Shape::new(node.shape().clone(), node.bounds().to_size())
            .with_fill(node_fill(node))
            .with_stroke(Some(StrokeDefinition::outline()));
        let center = node.bounds().center();

        let mut layers = shape.render_in(node.bounds());
        layers.merge(Text::new(self.style.label(), node.name()).render_to_layers(center));
        for child in layers.render() {
            group = group.add(child);
        }

        Box::new(group)
    }

    fn highlighted_node(&self) -> Option<&Node> {
        self.detail_panel().map(|panel| panel.node())
    }

    fn panel_anchor(&self, nodes: Bounds) -> Point {
        Point::new(nodes.center().x(), nodes.max_y() + PANEL_OFFSET)
    }
}

fn highlight_bounds(node: &Node) -> Bounds {
    node.bounds().add_padding(Insets::uniform(HIGHLIGHT_PADDING))
}

/// Parses the node fill, falling back to the neutral default for bad values.
fn node_fill(node: &Node) -> Option<Color> {
    Color::new(node.fill())
        .or_else(|_| Color::new(DEFAULT_NODE_FILL))
        .ok()
}

#[cfg(test)]
mod tests {
    use flowsheet_core::{draw::ShapeKind, geometry::Size};

    use super::*;

    fn bounds(x: f32, y: f32, w: f32, h: f32) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h))
    }

    fn renderer() -> DiagramRenderer {
        let diagram = Diagram::new(
            "plant",
            "Plant",
            vec![
                Node::new("screen", "Screen", ShapeKind::Rectangle, bounds(0.0, 0.0, 80.0, 60.0))
                    .with_icon("filter"),
                Node::new("basin", "Basin", ShapeKind::Tank, bounds(150.0, 0.0, 100.0, 120.0))
                    .with_fill("not a color")
                    .with_specification("1200 m³"),
                Node::new("mystery", "Mystery", "hexagon", bounds(300.0, 0.0, 50.0, 50.0)),
            ],
            vec![
                Edge::new("screen", "basin"),
                Edge::recycle("basin", "screen"),
                Edge::new("basin", "nowhere"),
            ],
        );
        DiagramRenderer::new(Arc::new(diagram), RenderStyle::default())
    }

    #[test]
    fn test_one_group_per_node_and_path_per_edge() {
        let output = renderer().render_layers();
        assert_eq!(output.count_in_layer(RenderLayer::Node), 3);
        assert_eq!(output.count_in_layer(RenderLayer::Edge), 3);
        assert_eq!(output.count_in_layer(RenderLayer::Highlight), 0);
        assert_eq!(output.count_in_layer(RenderLayer::Panel), 0);
    }

    #[test]
    fn test_unknown_shape_renders_empty_group() {
        let renderer = renderer();
        let node = &renderer.diagram().nodes()[2];
        let rendered = renderer.render_node(node).to_string();
        assert!(rendered.contains(r#"data-node-id="mystery""#));
        assert!(!rendered.contains("<rect"));
        assert!(!rendered.contains("Mystery"));
    }

    #[test]
    fn test_node_group_contains_label() {
        let renderer = renderer();
        let rendered = renderer.render_node(&renderer.diagram().nodes()[0]).to_string();
        assert!(rendered.contains("<rect"));
        assert!(rendered.contains("Screen"));
    }

    #[test]
    fn test_icon_reference_is_emitted() {
        let renderer = renderer();
        let with_icon = renderer.render_node(&renderer.diagram().nodes()[0]).to_string();
        assert!(with_icon.contains(r#"data-icon="filter""#));

        let without_icon = renderer.render_node(&renderer.diagram().nodes()[1]).to_string();
        assert!(!without_icon.contains("data-icon"));
    }

    #[test]
    fn test_fractional_box_meets_its_connectors() {
        let node_bounds = bounds(12.3, 45.7, 81.9, 33.1);
        let diagram = Diagram::new(
            "fractional",
            "Fractional",
            vec![
                Node::new("a", "A", ShapeKind::Rectangle, node_bounds),
                Node::new("b", "B", ShapeKind::Rectangle, bounds(150.1, 40.3, 60.7, 20.9)),
            ],
            vec![Edge::new("a", "b")],
        );
        let renderer = DiagramRenderer::new(Arc::new(diagram), RenderStyle::default());

        let rendered = renderer.render_node(&renderer.diagram().nodes()[0]).to_string();
        assert!(rendered.contains(&format!(r#"x="{}""#, node_bounds.min_x())));
        assert!(rendered.contains(&format!(r#"width="{}""#, node_bounds.width())));

        let edge = renderer.render_edge(&renderer.diagram().edges()[0]).to_string();
        let start = node_bounds.right_middle();
        assert!(edge.contains(&format!("M {} {}", start.x(), start.y())));
    }

    #[test]
    fn test_invalid_fill_falls_back() {
        let renderer = renderer();
        let fill = node_fill(&renderer.diagram().nodes()[1]).expect("fallback fill");
        assert_eq!(fill, Color::new(DEFAULT_NODE_FILL).unwrap());
    }

    #[test]
    fn test_recycle_and_dangling_edges() {
        let renderer = renderer();
        let edges = renderer.diagram().edges();

        let recycle = renderer.render_edge(&edges[1]).to_string();
        assert!(recycle.contains("stroke-dasharray"));

        let dangling = renderer.render_edge(&edges[2]).to_string();
        assert!(dangling.contains(r#"d="""#));
    }

    #[test]
    fn test_highlight_adds_outline_and_panel() {
        let mut renderer = renderer();
        let before = renderer.content_bounds();

        renderer.pointer_enter(Id::new("basin"));
        let output = renderer.render_layers();
        assert_eq!(output.count_in_layer(RenderLayer::Highlight), 1);
        assert_eq!(output.count_in_layer(RenderLayer::Panel), 1);
        assert!(renderer.content_bounds().max_y() > before.max_y());

        renderer.pointer_leave();
        assert!(renderer.detail_panel().is_none());
        let output = renderer.render_layers();
        assert_eq!(output.count_in_layer(RenderLayer::Highlight), 0);
        assert_eq!(output.count_in_layer(RenderLayer::Panel), 0);
    }

    #[test]
    fn test_highlight_unknown_id_draws_nothing_extra() {
        let mut renderer = renderer();
        renderer.pointer_enter(Id::new("ghost"));
        let output = renderer.render_layers();
        assert_eq!(output.count_in_layer(RenderLayer::Highlight), 0);
        assert_eq!(output.count_in_layer(RenderLayer::Panel), 0);
    }

    #[test]
    fn test_empty_diagram_bounds() {
        let renderer = DiagramRenderer::new(
            Arc::new(Diagram::new("empty", "Empty", Vec::new(), Vec::new())),
            RenderStyle::default(),
        );
        assert_eq!(renderer.content_bounds(), Bounds::default());
        assert!(renderer.render_layers().is_empty());
    }
}
