//! Render layers.
//!
//! Every SVG node a drawable produces is tagged with a [`RenderLayer`].
//! [`LayeredOutput`] buckets the tagged nodes and emits one `<g data-layer>`
//! group per non-empty layer, bottom to top, so a connector emitted after a
//! tank still renders underneath it.
//!
//! ```
//! # use flowsheet_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Path, Rectangle};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Node, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Edge, Box::new(Path::new()));
//!
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! assert!(groups[0].to_string().contains(r#"data-layer="edge""#));
//! ```

use std::collections::BTreeMap;

use svg::node::element as svg_element;

pub type SvgNode = Box<dyn svg::Node>;

/// Drawing order of the diagram, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Document background
    Background,
    Edge,
    /// One group per diagram node: shape primitives plus label
    Node,
    Highlight,
    /// Detail panel card
    Panel,
    Text,
}

impl RenderLayer {
    /// Value of the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Edge => "edge",
            Self::Node => "node",
            Self::Highlight => "highlight",
            Self::Panel => "panel",
            Self::Text => "text",
        }
    }
}

/// SVG nodes bucketed by layer; insertion order is kept within a bucket.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    /// Appends every node of `other` after this output's nodes of the same layer.
    pub fn merge(&mut self, other: LayeredOutput) {
        for (layer, nodes) in other.layers {
            self.layers.entry(layer).or_default().extend(nodes);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.values().all(Vec::is_empty)
    }

    pub fn count_in_layer(&self, layer: RenderLayer) -> usize {
        self.layers.get(&layer).map_or(0, Vec::len)
    }

    /// Consumes the output into one group per non-empty layer.
    pub fn render(self) -> Vec<SvgNode> {
        self.layers
            .into_iter()
            .filter(|(_, nodes)| !nodes.is_empty())
            .map(|(layer, nodes)| {
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
