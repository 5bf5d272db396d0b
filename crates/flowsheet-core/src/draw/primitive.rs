//! Vector drawing primitives.
//!
//! A [`Primitive`] is the smallest unit the shape renderer emits. Keeping the
//! typed form around (instead of going straight to SVG) lets callers inspect
//! the exact geometry a node produces.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{StrokeDefinition, SvgNode},
    geometry::{Bounds, Point},
};

/// A single vector drawing primitive in absolute diagram coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle, optionally with rounded corners.
    Rect {
        bounds: Bounds,
        corner_radius: f32,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    Ellipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    /// Straight line segment.
    Line {
        start: Point,
        end: Point,
        stroke: StrokeDefinition,
    },
    /// SVG path; an empty `data` string draws nothing.
    Path {
        data: String,
        stroke: StrokeDefinition,
    },
}

impl Primitive {
    /// Returns the bounding box covered by this primitive, if it has an area.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Rect { bounds, .. } => Some(*bounds),
            Self::Circle { center, radius, .. } => Some(Bounds::new_from_center(
                *center,
                crate::geometry::Size::new(radius * 2.0, radius * 2.0),
            )),
            Self::Ellipse {
                center,
                radius_x,
                radius_y,
                ..
            } => Some(Bounds::new_from_center(
                *center,
                crate::geometry::Size::new(radius_x * 2.0, radius_y * 2.0),
            )),
            Self::Line { start, end, .. } => Some(
                Bounds::new_from_top_left(*start, Default::default())
                    .merge(&Bounds::new_from_top_left(*end, Default::default())),
            ),
            Self::Path { .. } => None,
        }
    }

    /// Converts this primitive into an SVG node.
    pub fn to_svg(&self) -> SvgNode {
        match self {
            Self::Rect {
                bounds,
                corner_radius,
                fill,
                stroke,
            } => {
                let rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("rx", *corner_radius);
                let rect = apply_fill(rect, fill.as_ref());
                match stroke {
                    Some(stroke) => Box::new(apply_stroke!(rect, stroke)),
                    None => Box::new(rect),
                }
            }
            Self::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius);
                let circle = apply_fill(circle, fill.as_ref());
                match stroke {
                    Some(stroke) => Box::new(apply_stroke!(circle, stroke)),
                    None => Box::new(circle),
                }
            }
            Self::Ellipse {
                center,
                radius_x,
                radius_y,
                fill,
                stroke,
            } => {
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("rx", *radius_x)
                    .set("ry", *radius_y);
                let ellipse = apply_fill(ellipse, fill.as_ref());
                match stroke {
                    Some(stroke) => Box::new(apply_stroke!(ellipse, stroke)),
                    None => Box::new(ellipse),
                }
            }
            Self::Line { start, end, stroke } => {
                let line = svg_element::Line::new()
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y());
                Box::new(apply_stroke!(line, stroke))
            }
            Self::Path { data, stroke } => {
                let path = svg_element::Path::new()
                    .set("d", data.as_str())
                    .set("fill", "none");
                Box::new(apply_stroke!(path, stroke))
            }
        }
    }
}

/// Sets `fill`/`fill-opacity` on an element; `None` renders unfilled.
fn apply_fill<T: svg::Node>(mut element: T, fill: Option<&Color>) -> T {
    match fill {
        Some(color) => {
            element.assign("fill", color);
            element.assign("fill-opacity", color.alpha());
        }
        None => element.assign("fill", "none"),
    }
    element
}
