//! The legend/detail panel for the highlighted node.
//!
//! The panel is derived state: it is recomputed from the diagram and the
//! current [`InteractionState`] every time it is asked for and holds nothing
//! of its own beyond a borrow of the resolved node.

use flowsheet_core::{
    draw::{Drawable, LayeredOutput, Primitive, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Bounds, Insets, Point, Size},
};

use crate::{
    config::RenderStyle,
    diagram::{Diagram, Node},
    interaction::InteractionState,
};

const PANEL_PADDING: f32 = 12.0;
const PANEL_LINE_GAP: f32 = 6.0;
const PANEL_CORNER_RADIUS: f32 = 6.0;

/// Details of the currently highlighted node.
#[derive(Debug, Clone, Copy)]
pub struct DetailPanel<'a> {
    node: &'a Node,
}

impl<'a> DetailPanel<'a> {
    /// Looks up the highlighted node of `state` in `diagram`.
    ///
    /// Returns `None` when nothing is highlighted or when the highlighted id
    /// is not a node of this diagram.
    pub fn resolve(diagram: &'a Diagram, state: &InteractionState) -> Option<Self> {
        let id = state.highlighted()?;
        diagram.node(id).map(|node| Self { node })
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    pub fn specification(&self) -> &'a str {
        self.node.specification()
    }

    pub fn description(&self) -> Option<&'a str> {
        self.node.description()
    }

    /// One-line summary in the form `"<name>: <specification>"`.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name(), self.specification())
    }

    /// Returns the card bounds when its top edge is centered on `anchor`.
    pub fn bounds(&self, anchor: Point, style: &RenderStyle) -> Bounds {
        let size = self.card_size(&self.lines(style));
        Bounds::new_from_top_left(
            Point::new(anchor.x() - size.width() / 2.0, anchor.y()),
            size,
        )
    }

    /// Renders the panel as a titled card whose top edge is centered on `anchor`.
    pub fn render_to_layers(&self, anchor: Point, style: &RenderStyle) -> LayeredOutput {
        let lines = self.lines(style);
        let card_size = self.card_size(&lines);
        let card = Bounds::new_from_top_left(
            Point::new(anchor.x() - card_size.width() / 2.0, anchor.y()),
            card_size,
        );

        let mut output = LayeredOutput::new();
        let frame = Primitive::Rect {
            bounds: card,
            corner_radius: PANEL_CORNER_RADIUS,
            fill: Some(style.panel_background()),
            stroke: Some(StrokeDefinition::outline()),
        };
        output.add_to_layer(RenderLayer::Panel, frame.to_svg());

        let mut cursor = card.min_y() + PANEL_PADDING;
        for (text, size) in &lines {
            output.merge(text.render_to_layers(Point::new(anchor.x(), cursor + size.height() / 2.0)));
            cursor += size.height() + PANEL_LINE_GAP;
        }

        output
    }

    fn lines<'s>(&self, style: &'s RenderStyle) -> Vec<(Text<'s>, Size)>
    where
        'a: 's,
    {
        let mut lines: Vec<(&'s TextDefinition, &'s str)> =
            vec![(style.panel_title(), self.name())];
        if !self.specification().is_empty() {
            lines.push((style.panel_body(), self.specification()));
        }
        if let Some(description) = self.description().filter(|d| !d.is_empty()) {
            lines.push((style.panel_body(), description));
        }

        lines
            .into_iter()
            .map(|(definition, content)| {
                let text = Text::new(definition, content);
                let size = text.calculate_size();
                (text, size)
            })
            .collect()
    }

    fn card_size(&self, lines: &[(Text<'_>, Size)]) -> Size {
        let content = lines.iter().fold(Size::default(), |acc, (_, size)| {
            Size::new(acc.width().max(size.width()), acc.height() + size.height())
        });
        let gaps = PANEL_LINE_GAP * lines.len().saturating_sub(1) as f32;
        Size::new(content.width(), content.height() + gaps)
            .add_padding(Insets::uniform(PANEL_PADDING))
    }
}

#[cfg(test)]
mod tests {
    use flowsheet_core::{draw::ShapeKind, identifier::Id};

    use super::*;
    use crate::diagram::Edge;

    fn diagram() -> Diagram {
        Diagram::new(
            "panel",
            "Panel",
            vec![
                Node::new(
                    "ro",
                    "RO Skid",
                    ShapeKind::Membrane,
                    Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(120.0, 130.0)),
                )
                .with_specification("8 × 8\" vessels")
                .with_description("Two-pass brackish water train"),
                Node::new(
                    "bare",
                    "Bare",
                    ShapeKind::Circle,
                    Bounds::new_from_top_left(Point::new(200.0, 0.0), Size::new(40.0, 40.0)),
                ),
            ],
            vec![Edge::new("ro", "bare")],
        )
    }

    #[test]
    fn test_resolve_nothing_highlighted() {
        let diagram = diagram();
        assert!(DetailPanel::resolve(&diagram, &InteractionState::new()).is_none());
    }

    #[test]
    fn test_resolve_unknown_id() {
        let diagram = diagram();
        let mut state = InteractionState::new();
        state.pointer_enter(Id::new("not-here"));
        assert!(DetailPanel::resolve(&diagram, &state).is_none());
    }

    #[test]
    fn test_summary() {
        let diagram = diagram();
        let mut state = InteractionState::new();
        state.pointer_enter(Id::new("ro"));
        let panel = DetailPanel::resolve(&diagram, &state).expect("ro is highlighted");
        assert_eq!(panel.summary(), "RO Skid: 8 × 8\" vessels");
        assert_eq!(panel.description(), Some("Two-pass brackish water train"));
    }

    #[test]
    fn test_render_card_layers() {
        let diagram = diagram();
        let mut state = InteractionState::new();
        state.pointer_enter(Id::new("ro"));
        let panel = DetailPanel::resolve(&diagram, &state).unwrap();
        let style = RenderStyle::default();

        let output = panel.render_to_layers(Point::new(100.0, 200.0), &style);
        assert_eq!(output.count_in_layer(RenderLayer::Panel), 1);
        assert_eq!(output.count_in_layer(RenderLayer::Text), 3);

        let bounds = panel.bounds(Point::new(100.0, 200.0), &style);
        assert_eq!(bounds.min_y(), 200.0);
        assert!((bounds.center().x() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_render_skips_empty_lines() {
        let diagram = diagram();
        let mut state = InteractionState::new();
        state.pointer_enter(Id::new("bare"));
        let panel = DetailPanel::resolve(&diagram, &state).unwrap();

        let output = panel.render_to_layers(Point::default(), &RenderStyle::default());
        assert_eq!(output.count_in_layer(RenderLayer::Text), 1);
    }
}
