//! Flowsheet - interactive process-flow diagrams rendered to SVG.
//!
//! Diagrams are static data tables of positioned, shaped nodes and the edges
//! between them. A [`DiagramRenderer`] turns one diagram plus its hover state
//! into layered vector output; [`FlowsheetBuilder`] is the string and file
//! level entry point.

pub mod catalog;
pub mod check;
pub mod config;
pub mod connector;
pub mod projects;

mod diagram;
mod error;
mod export;
mod interaction;
mod panel;
mod render;

pub use flowsheet_core::{color, draw, geometry, identifier};

pub use catalog::Catalog;
pub use diagram::{DEFAULT_NODE_FILL, Diagram, Edge, Node};
pub use error::FlowsheetError;
pub use interaction::InteractionState;
pub use panel::DetailPanel;
pub use render::DiagramRenderer;

use std::path::Path;

use log::{debug, info};

use config::{AppConfig, RenderStyle};
use export::svg::Svg;
use identifier::Id;

/// Builder for rendering catalogue diagrams.
///
/// # Examples
///
/// ```
/// use flowsheet::{FlowsheetBuilder, config::AppConfig};
///
/// let builder = FlowsheetBuilder::new(AppConfig::default());
///
/// let svg = builder
///     .render_svg("membrane-bioreactor", Some("aeration"))
///     .expect("default config is valid");
/// assert!(svg.contains(r#"data-node-id="aeration""#));
///
/// // Unknown diagrams render as an empty document
/// let empty = builder.render_svg("no-such-diagram", None).unwrap();
/// assert!(!empty.contains("data-node-id"));
/// ```
#[derive(Debug, Clone)]
pub struct FlowsheetBuilder {
    config: AppConfig,
    catalog: Catalog,
}

impl Default for FlowsheetBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl FlowsheetBuilder {
    /// Create a builder over the built-in catalogue with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            catalog: Catalog::builtin().clone(),
        }
    }

    /// Adds the diagrams of `catalog`, replacing built-in diagrams with the same id.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog.extend(catalog);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Creates a fresh renderer for the diagram `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowsheetError::UnknownDiagram`] if the catalogue has no
    /// such diagram, or [`FlowsheetError::Config`] if the style configuration
    /// is invalid.
    pub fn renderer(&self, id: &str) -> Result<DiagramRenderer, FlowsheetError> {
        let diagram = self
            .catalog
            .get(id)
            .ok_or_else(|| FlowsheetError::UnknownDiagram(id.to_string()))?;
        let style = RenderStyle::from_config(self.config.style())?;
        Ok(DiagramRenderer::new(diagram, style))
    }

    /// Render the diagram `id` to an SVG string, optionally highlighting one node.
    ///
    /// An unknown diagram id is not an error; it renders an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`FlowsheetError::Config`] if the style configuration is invalid.
    pub fn render_svg(&self, id: &str, highlight: Option<&str>) -> Result<String, FlowsheetError> {
        info!(diagram_id = id; "Rendering diagram");

        let renderer = match self.renderer(id) {
            Ok(renderer) => renderer,
            Err(FlowsheetError::UnknownDiagram(_)) => {
                debug!(diagram_id = id; "Diagram not in catalog, rendering empty document");
                return Ok(Svg::new().empty_document().to_string());
            }
            Err(err) => return Err(err),
        };

        let doc = Svg::new().render_document(&highlighted(renderer, highlight));

        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Render the diagram `id` and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowsheetError::UnknownDiagram`] for ids missing from the
    /// catalogue, [`FlowsheetError::Config`] for an invalid style and
    /// [`FlowsheetError::Export`] if the file cannot be written.
    pub fn write_svg(
        &self,
        id: &str,
        highlight: Option<&str>,
        path: &Path,
    ) -> Result<(), FlowsheetError> {
        let renderer = highlighted(self.renderer(id)?, highlight);
        let svg = Svg::new();
        let doc = svg.render_document(&renderer);
        debug!("SVG document rendered");

        svg.write_document(&doc, path)?;
        Ok(())
    }

    /// Runs the data checks on the diagram `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowsheetError::UnknownDiagram`] if the catalogue has no such diagram.
    pub fn check(&self, id: &str) -> Result<Vec<check::Diagnostic>, FlowsheetError> {
        let diagram = self
            .catalog
            .get(id)
            .ok_or_else(|| FlowsheetError::UnknownDiagram(id.to_string()))?;
        Ok(check::check_diagram(&diagram))
    }
}

fn highlighted(mut renderer: DiagramRenderer, highlight: Option<&str>) -> DiagramRenderer {
    if let Some(node) = highlight {
        renderer.pointer_enter(Id::new(node));
    }
    renderer
}
