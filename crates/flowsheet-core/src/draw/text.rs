//! Text rendering for node labels and detail panel lines.
//!
//! [`TextDefinition`] is a reusable style, [`Text`] pairs a style with
//! content. Sizes come from real font metrics via cosmic-text so the detail
//! panel card can be fitted around its lines.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Font and fill of a label or panel line.
///
/// Defaults to 12pt regular `Helvetica, Arial, sans-serif` with the SVG
/// default fill.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Option<Color>,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// `None` keeps the SVG default fill.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    fn is_bold(&self) -> bool {
        self.bold
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            font_size: 12,
            bold: false,
            color: None,
        }
    }
}

/// Content paired with a [`TextDefinition`].
///
/// Each `\n`-separated line becomes one `<tspan>`; the block is centered
/// on the render position.
///
/// ```
/// # use flowsheet_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let label = Text::new(&style, "Aeration Tank");
/// assert_eq!(label.content(), "Aeration Tank");
/// assert!(label.calculate_size().height() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Measured extent of the whole block.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let lines: Vec<&str> = self.content.lines().collect();
        if lines.is_empty() {
            return output;
        }

        let text_size = self.calculate_size();
        let line_height = text_size.height() / lines.len() as f32;
        let y_offset = -(text_size.height() + line_height) / 2.0;

        let mut element = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.is_bold() {
            element = element.set("font-weight", "bold");
        }
        if let Some(color) = self.definition.color() {
            element = element
                .set("fill", &color)
                .set("fill-opacity", color.alpha());
        }

        let element = lines.into_iter().fold(element, |element, line| {
            element.add(
                svg_element::TSpan::new("")
                    .set("x", position.x())
                    .set("dy", line_height)
                    .add(SvgText::new(line)),
            )
        });

        output.add_to_layer(RenderLayer::Text, Box::new(element));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Process-wide cosmic-text font system.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Shapes `text` and sums its layout runs.
    ///
    /// Without any installed font no runs come back, so widths fall back to
    /// 0.55em per character.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Points to pixels at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if text_def.is_bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height * text.lines().count().max(1) as f32;
        } else {
            for run in &layout_runs {
                if let Some(last) = run.glyphs.last() {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 12);
        assert_eq!(def.font_family(), "Helvetica, Arial, sans-serif");
        assert!(!def.is_bold());
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_text_calculate_size_multiline() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "Permeate").calculate_size();
        let multi = Text::new(&def, "Permeate\nFlux 20 LMH").calculate_size();
        assert!(multi.height() > single.height());
    }

    #[test]
    fn test_text_render_lines_as_tspans() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "Line A\nLine B");
        let rendered: String = text
            .render_to_layers(Point::new(50.0, 50.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert_eq!(rendered.matches("<tspan").count(), 2);
        assert!(rendered.contains("Line B"));
    }

    #[test]
    fn test_text_render_color_and_weight() {
        let mut def = TextDefinition::new();
        def.set_bold(true);
        def.set_color(Some(Color::new("slategray").unwrap()));
        let output = Text::new(&def, "Card").render_to_layers(Point::default());
        assert_eq!(output.count_in_layer(RenderLayer::Text), 1);

        let rendered = output.render()[0].to_string();
        assert!(rendered.contains(r#"font-weight="bold""#));
        assert!(rendered.contains(r#"fill="slategray""#));
    }
}
