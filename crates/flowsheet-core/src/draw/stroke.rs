//! Line styling shared by connectors, shape outlines, membrane interior lines
//! and the highlight outline.
//!
//! The [`apply_stroke!`](crate::apply_stroke!) macro writes a
//! [`StrokeDefinition`] onto any SVG element.
//!
//! ```
//! use flowsheet_core::color::Color;
//! use flowsheet_core::draw::{StrokeDefinition, StrokeStyle};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("slategray").unwrap(), 1.5)
//!     .with_style(StrokeStyle::Dashed);
//! let line = svg_element::Line::new().set("x1", 0).set("x2", 40);
//! let line = flowsheet_core::apply_stroke!(line, &stroke);
//! assert!(line.to_string().contains(r#"stroke-dasharray="6,4""#));
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Dash pattern of a line.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 6 on, 4 off
    Dashed,
    /// 2 on, 3 off
    Dotted,
    /// A validated `stroke-dasharray` list such as `"10,5,2,5"`.
    Pattern(String),
}

impl StrokeStyle {
    /// `stroke-dasharray` value; `None` for solid lines.
    pub fn dasharray(&self) -> Option<&str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,4"),
            Self::Dotted => Some("2,3"),
            Self::Pattern(pattern) => Some(pattern),
        }
    }
}

/// Accepts `solid`, `dashed` and `dotted` in any case, or a dasharray of
/// non-negative numbers separated by commas or whitespace.
impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "solid" => return Ok(Self::Solid),
            "dashed" => return Ok(Self::Dashed),
            "dotted" => return Ok(Self::Dotted),
            _ => {}
        }

        let lengths: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let valid = !lengths.is_empty()
            && lengths
                .iter()
                .all(|part| part.parse::<f32>().is_ok_and(|len| len.is_finite() && len >= 0.0));
        if valid {
            Ok(Self::Pattern(lengths.join(",")))
        } else {
            Err(format!("invalid line style `{s}`"))
        }
    }
}

/// `stroke-linecap`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// `stroke-linejoin`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Paint, width, dash pattern and end/corner treatment of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Solid line with butt caps and miter joins.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
            cap: StrokeCap::Butt,
            join: StrokeJoin::Miter,
        }
    }

    /// Node outline: dark slate, 1.5 wide, rounded corners.
    pub fn outline() -> Self {
        Self::new(
            Color::new("#1f2937").expect("'#1f2937' is a valid CSS color"),
            1.5,
        )
        .with_join(StrokeJoin::Round)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn join(&self) -> StrokeJoin {
        self.join
    }
}

/// One unit wide, solid black.
impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Writes a [`StrokeDefinition`] onto an SVG element as `stroke-*` attributes.
///
/// `stroke-dasharray` is only emitted for patterned styles.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke: &$crate::draw::StrokeDefinition = $stroke;
        let element = $element
            .set("stroke", &stroke.color())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
            .set("stroke-linecap", stroke.cap().as_str())
            .set("stroke-linejoin", stroke.join().as_str());

        match stroke.style().dasharray() {
            Some(dasharray) => element.set("stroke-dasharray", dasharray),
            None => element,
        }
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element::Line;

    use super::*;

    #[test]
    fn test_default_is_thin_solid_black() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.style().dasharray(), None);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert_eq!(stroke.join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_outline_rounds_corners() {
        let stroke = StrokeDefinition::outline();
        assert_eq!(stroke.width(), 1.5);
        assert_eq!(stroke.join(), StrokeJoin::Round);
    }

    #[test]
    fn test_parse_named_styles() {
        assert_eq!("solid".parse::<StrokeStyle>(), Ok(StrokeStyle::Solid));
        assert_eq!(" Dashed ".parse::<StrokeStyle>(), Ok(StrokeStyle::Dashed));
        assert_eq!("DOTTED".parse::<StrokeStyle>(), Ok(StrokeStyle::Dotted));
    }

    #[test]
    fn test_parse_dasharray_normalizes_separators() {
        let style: StrokeStyle = "8, 2 1".parse().unwrap();
        assert_eq!(style, StrokeStyle::Pattern("8,2,1".to_string()));
        assert_eq!(style.dasharray(), Some("8,2,1"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<StrokeStyle>().is_err());
        assert!("wavy".parse::<StrokeStyle>().is_err());
        assert!("4,-2".parse::<StrokeStyle>().is_err());
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 2.0).with_cap(StrokeCap::Round);
        let rendered = crate::apply_stroke!(Line::new(), &stroke).to_string();

        assert!(rendered.contains(r#"stroke="red""#));
        assert!(rendered.contains(r#"stroke-width="2""#));
        assert!(rendered.contains(r#"stroke-linecap="round""#));
        assert!(!rendered.contains("stroke-dasharray"));
    }
}
