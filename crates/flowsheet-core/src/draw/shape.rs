//! The shape renderer.
//!
//! Every diagram node carries a shape tag from a closed set. [`ShapeKind`] is
//! that set; [`ShapeKind::render`] is the single dispatch point that turns a
//! bounding box and a fill into [`Primitive`]s. Tags read from outside the
//! built-in tables are kept as [`ShapeTag::Unrecognized`] and render nothing.
//!
//! | Tag | Primitives |
//! |-----|------------|
//! | `rectangle` | filled rect, corner radius 4 |
//! | `tank` | rounded frame + translucent liquid rect from 30% to 90% of the height |
//! | `circle` | filled circle, radius `min(w, h) / 2` |
//! | `ellipse` | filled ellipse fitted to the box |
//! | `pipe` | filled rect, corner radius 3 |
//! | `membrane` | filled frame + 6 horizontal interior lines |

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, Primitive, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

const RECTANGLE_CORNER_RADIUS: f32 = 4.0;
const TANK_CORNER_RADIUS: f32 = 8.0;
const TANK_LIQUID_TOP: f32 = 0.3;
const TANK_LIQUID_HEIGHT: f32 = 0.6;
const TANK_LIQUID_INSET: f32 = 5.0;
const TANK_LIQUID_COLOR: &str = "#3b82f6";
const TANK_LIQUID_ALPHA: f32 = 0.35;
const PIPE_CORNER_RADIUS: f32 = 3.0;
const MEMBRANE_LINE_COUNT: usize = 6;
const MEMBRANE_LINE_OFFSET: f32 = 20.0;
const MEMBRANE_LINE_SPACING: f32 = 15.0;
const MEMBRANE_LINE_INSET: f32 = 5.0;

/// Error returned when a string names no supported shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape `{0}`, valid values: rectangle, tank, circle, ellipse, pipe, membrane")]
pub struct ParseShapeError(pub String);

/// The supported node shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Tank,
    Circle,
    Ellipse,
    Pipe,
    Membrane,
}

impl ShapeKind {
    /// All shape kinds, in declaration order.
    pub const ALL: [ShapeKind; 6] = [
        Self::Rectangle,
        Self::Tank,
        Self::Circle,
        Self::Ellipse,
        Self::Pipe,
        Self::Membrane,
    ];

    /// Returns the canonical tag for this shape.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Tank => "tank",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Pipe => "pipe",
            Self::Membrane => "membrane",
        }
    }

    /// Renders a shape filling `bounds` to its primitives.
    ///
    /// `stroke` outlines the main body of the shape; membrane interior lines
    /// always use it, falling back to the default stroke when `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flowsheet_core::draw::{Primitive, ShapeKind};
    /// # use flowsheet_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_top_left(Point::new(200.0, 150.0), Size::new(80.0, 100.0));
    /// let primitives = ShapeKind::Tank.render(bounds, None, None);
    /// assert_eq!(primitives.len(), 2);
    ///
    /// let Primitive::Rect { bounds: liquid, .. } = &primitives[1] else {
    ///     panic!("liquid level is a rect");
    /// };
    /// assert!((liquid.min_y() - 180.0).abs() < 1e-3);
    /// assert!((liquid.height() - 60.0).abs() < 1e-3);
    /// ```
    pub fn render(
        &self,
        bounds: Bounds,
        fill: Option<Color>,
        stroke: Option<&StrokeDefinition>,
    ) -> Vec<Primitive> {
        let stroke = stroke.cloned();
        match self {
            Self::Rectangle => vec![Primitive::Rect {
                bounds,
                corner_radius: RECTANGLE_CORNER_RADIUS,
                fill,
                stroke,
            }],
            Self::Tank => {
                let liquid = Bounds::new_from_top_left(
                    Point::new(
                        bounds.min_x() + TANK_LIQUID_INSET,
                        bounds.min_y() + bounds.height() * TANK_LIQUID_TOP,
                    ),
                    Size::new(
                        (bounds.width() - 2.0 * TANK_LIQUID_INSET).max(0.0),
                        bounds.height() * TANK_LIQUID_HEIGHT,
                    ),
                );
                let liquid_color = Color::new(TANK_LIQUID_COLOR)
                    .expect("tank liquid color is a valid CSS color")
                    .with_alpha(TANK_LIQUID_ALPHA);
                vec![
                    Primitive::Rect {
                        bounds,
                        corner_radius: TANK_CORNER_RADIUS,
                        fill,
                        stroke,
                    },
                    Primitive::Rect {
                        bounds: liquid,
                        corner_radius: 0.0,
                        fill: Some(liquid_color),
                        stroke: None,
                    },
                ]
            }
            Self::Circle => vec![Primitive::Circle {
                center: bounds.center(),
                radius: bounds.to_size().min_side() / 2.0,
                fill,
                stroke,
            }],
            Self::Ellipse => vec![Primitive::Ellipse {
                center: bounds.center(),
                radius_x: bounds.width() / 2.0,
                radius_y: bounds.height() / 2.0,
                fill,
                stroke,
            }],
            Self::Pipe => vec![Primitive::Rect {
                bounds,
                corner_radius: PIPE_CORNER_RADIUS,
                fill,
                stroke,
            }],
            Self::Membrane => {
                let line_stroke = stroke.clone().unwrap_or_default();
                let mut primitives = Vec::with_capacity(MEMBRANE_LINE_COUNT + 1);
                primitives.push(Primitive::Rect {
                    bounds,
                    corner_radius: 0.0,
                    fill,
                    stroke,
                });
                primitives.extend((0..MEMBRANE_LINE_COUNT).map(|i| {
                    let y = bounds.min_y() + MEMBRANE_LINE_OFFSET + MEMBRANE_LINE_SPACING * i as f32;
                    Primitive::Line {
                        start: Point::new(bounds.min_x() + MEMBRANE_LINE_INSET, y),
                        end: Point::new(bounds.max_x() - MEMBRANE_LINE_INSET, y),
                        stroke: line_stroke.clone(),
                    }
                }));
                primitives
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "tank" => Ok(Self::Tank),
            "circle" => Ok(Self::Circle),
            "ellipse" => Ok(Self::Ellipse),
            "pipe" => Ok(Self::Pipe),
            "membrane" => Ok(Self::Membrane),
            _ => Err(ParseShapeError(s.to_string())),
        }
    }
}

/// A node's declared shape tag.
///
/// Parsing a tag never fails: anything outside the supported set is kept
/// verbatim so it can be reported, and renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ShapeTag {
    Known(ShapeKind),
    Unrecognized(String),
}

impl ShapeTag {
    /// Returns the shape kind, if the tag is supported.
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<ShapeKind> for ShapeTag {
    fn from(kind: ShapeKind) -> Self {
        Self::Known(kind)
    }
}

impl From<&str> for ShapeTag {
    fn from(tag: &str) -> Self {
        tag.parse::<ShapeKind>()
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Unrecognized(tag.to_string()))
    }
}

impl From<String> for ShapeTag {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => write!(f, "{kind}"),
            Self::Unrecognized(tag) => f.write_str(tag),
        }
    }
}

/// A shape tag with its styling and size, ready to draw at a center point.
#[derive(Debug, Clone)]
pub struct Shape {
    tag: ShapeTag,
    size: Size,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
}

impl Shape {
    pub fn new(tag: ShapeTag, size: Size) -> Self {
        Self {
            tag,
            size,
            fill: None,
            stroke: None,
        }
    }

    /// Set the fill color (builder style).
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    /// Set the outline stroke (builder style).
    pub fn with_stroke(mut self, stroke: Option<StrokeDefinition>) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn tag(&self) -> &ShapeTag {
        &self.tag
    }

    /// Returns the primitives for this shape centered at `position`.
    ///
    /// Unrecognized tags produce an empty list.
    pub fn primitives(&self, position: Point) -> Vec<Primitive> {
        self.primitives_in(position.to_bounds(self.size))
    }

    /// Returns the primitives for this shape filling `bounds` exactly.
    ///
    /// Diagram nodes draw through this so that their outline matches the
    /// stored box bit for bit; the shape's own size is ignored.
    pub fn primitives_in(&self, bounds: Bounds) -> Vec<Primitive> {
        match self.tag.kind() {
            Some(kind) => kind.render(bounds, self.fill, self.stroke.as_ref()),
            None => Vec::new(),
        }
    }

    /// Layered form of [`Self::primitives_in`].
    pub fn render_in(&self, bounds: Bounds) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for primitive in self.primitives_in(bounds) {
            output.add_to_layer(RenderLayer::Node, primitive.to_svg());
        }
        output
    }
}

impl Drawable for Shape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        self.render_in(position.to_bounds(self.size))
    }

    fn size(&self) -> Size {
        self.size
    }
}
