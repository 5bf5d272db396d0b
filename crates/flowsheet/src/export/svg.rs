use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use flowsheet_core::geometry::{Bounds, Size};

use crate::{export, render::DiagramRenderer};

/// SVG document builder for a [`DiagramRenderer`].
#[derive(Debug, Default)]
pub struct Svg;

impl Svg {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the document size for the given content, adding `margin` on every side.
    pub fn calculate_svg_dimensions(&self, content_size: Size, margin: f32) -> Size {
        let width = margin.mul_add(2.0, content_size.width());
        let height = margin.mul_add(2.0, content_size.height());

        debug!("Final SVG dimensions: {width}x{height}");

        Size::new(width, height)
    }

    /// Renders the current state of `renderer` into a complete SVG document.
    ///
    /// Content is translated so that its top-left corner sits at the margin;
    /// the background layer then spans the whole document.
    pub fn render_document(&self, renderer: &DiagramRenderer) -> Document {
        let style = renderer.style();
        let content_bounds = renderer.content_bounds();
        let svg_size = self.calculate_svg_dimensions(content_bounds.to_size(), style.margin());

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height())
            .set("role", "img")
            .set("aria-label", renderer.diagram().title());

        doc.add(self.main_group(renderer, content_bounds, style.margin()))
    }

    /// Returns a document with no content, used for unknown diagrams.
    pub fn empty_document(&self) -> Document {
        Document::new()
            .set("viewBox", "0 0 0 0")
            .set("width", 0)
            .set("height", 0)
    }

    /// Writes an SVG document to `path`.
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), export::Error> {
        let file_name = path.display().to_string();
        info!(file_name = file_name; "Creating SVG file");

        let mut f = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name = file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }

    fn main_group(
        &self,
        renderer: &DiagramRenderer,
        content_bounds: Bounds,
        margin: f32,
    ) -> svg_element::Group {
        let mut main_group = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                margin - content_bounds.min_x(),
                margin - content_bounds.min_y()
            ),
        );

        for layer in renderer.render_layers().render() {
            main_group = main_group.add(layer);
        }

        main_group
    }
}
