//! Drawing primitives and drawables for diagram rendering.
//!
//! Everything that ends up on screen passes through this module: shape tags
//! are turned into [`Primitive`]s by [`ShapeKind::render`], primitives are
//! converted to SVG nodes, and SVG nodes are collected per [`RenderLayer`] in a
//! [`LayeredOutput`] so that z-order is independent of emission order.

mod layer;
mod primitive;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::Primitive;
pub use shape::{ParseShapeError, Shape, ShapeKind, ShapeTag};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// Something that can render itself at a position.
///
/// `position` is the center of the drawable; `size` is the full extent it
/// occupies around that center.
pub trait Drawable: std::fmt::Debug {
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
    fn size(&self) -> Size;
}
