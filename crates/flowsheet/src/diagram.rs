//! The diagram data model.
//!
//! A [`Diagram`] is an ordered sequence of [`Node`]s and a list of [`Edge`]s.
//! Diagrams are built once and never mutated afterwards; renderers share them
//! through `Arc`.
//!
//! Node positions are stored as top-left bounding boxes in diagram units.
//! Lookups by identifier are linear scans over the node sequence, which keeps
//! declaration order authoritative for rendering.

use serde::Deserialize;

use flowsheet_core::{
    draw::ShapeTag,
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

/// A single labeled, shaped, positioned element within a [`Diagram`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    name: String,
    shape: ShapeTag,
    fill: String,
    bounds: Bounds,
    specification: String,
    icon: Option<String>,
    description: Option<String>,
}

impl Node {
    /// Creates a node with a neutral fill and no specification text.
    pub fn new(id: &str, name: &str, shape: impl Into<ShapeTag>, bounds: Bounds) -> Self {
        Self {
            id: Id::new(id),
            name: name.to_string(),
            shape: shape.into(),
            fill: DEFAULT_NODE_FILL.to_string(),
            bounds,
            specification: String::new(),
            icon: None,
            description: None,
        }
    }

    /// Sets the fill color as a CSS color string (builder style).
    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = fill.to_string();
        self
    }

    /// Sets the free-text specification shown in the detail panel (builder style).
    pub fn with_specification(mut self, specification: &str) -> Self {
        self.specification = specification.to_string();
        self
    }

    /// Sets the icon reference (builder style).
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Sets the longer descriptive text (builder style).
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Display name used for the node label and the panel title.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &ShapeTag {
        &self.shape
    }

    /// The fill color exactly as declared; it may fail to parse.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn specification(&self) -> &str {
        &self.specification
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Fill used for nodes that declare none.
pub const DEFAULT_NODE_FILL: &str = "#e5e7eb";

/// A directed connector between two nodes of the same diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
    recycle: bool,
}

impl Edge {
    /// Creates a forward process connector.
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: Id::new(source),
            target: Id::new(target),
            recycle: false,
        }
    }

    /// Creates a recycle/return connector, drawn dashed.
    pub fn recycle(source: &str, target: &str) -> Self {
        Self {
            recycle: true,
            ..Self::new(source, target)
        }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn is_recycle(&self) -> bool {
        self.recycle
    }
}

/// A named process-flow or schematic view.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    id: Id,
    title: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    pub fn new(id: &str, title: &str, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            id: Id::new(id),
            title: title.to_string(),
            nodes,
            edges,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Finds a node by identifier.
    ///
    /// Returns the first match in declaration order, or `None` if the id is
    /// not part of this diagram.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns the union of all node bounding boxes, or `None` for an empty diagram.
    pub fn content_bounds(&self) -> Option<Bounds> {
        let mut nodes = self.nodes.iter();
        let first = nodes.next()?.bounds();
        Some(nodes.fold(first, |acc, node| acc.merge(&node.bounds())))
    }
}

// -----------------------------------------------------------------------------
// External diagram tables
// -----------------------------------------------------------------------------

/// A diagram as written in a TOML table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DiagramRecord {
    id: String,
    title: String,
    #[serde(default, rename = "node")]
    nodes: Vec<NodeRecord>,
    #[serde(default, rename = "edge")]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeRecord {
    id: String,
    name: String,
    shape: ShapeTag,
    #[serde(default)]
    fill: Option<String>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(default)]
    specification: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeRecord {
    from: String,
    to: String,
    #[serde(default)]
    recycle: bool,
}

impl From<DiagramRecord> for Diagram {
    fn from(record: DiagramRecord) -> Self {
        let nodes = record.nodes.into_iter().map(Node::from).collect();
        let edges = record
            .edges
            .iter()
            .map(|edge| {
                if edge.recycle {
                    Edge::recycle(&edge.from, &edge.to)
                } else {
                    Edge::new(&edge.from, &edge.to)
                }
            })
            .collect();
        Diagram::new(&record.id, &record.title, nodes, edges)
    }
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        let bounds = Bounds::new_from_top_left(
            Point::new(record.x, record.y),
            Size::new(record.width, record.height),
        );
        Node {
            id: Id::new(&record.id),
            name: record.name,
            shape: record.shape,
            fill: record
                .fill
                .unwrap_or_else(|| DEFAULT_NODE_FILL.to_string()),
            bounds,
            specification: record.specification,
            icon: record.icon,
            description: record.description,
        }
    }
}
