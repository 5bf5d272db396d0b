//! Configuration types for Flowsheet rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the command-line front end.
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Visual styling options. Unset fields fall back to
//!   renderer defaults.
//! - [`RenderStyle`] - The resolved, validated style a renderer draws with.
//!
//! # Example
//!
//! ```
//! # use flowsheet::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use std::str::FromStr;

use serde::Deserialize;

use flowsheet_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeStyle, TextDefinition},
};

use crate::FlowsheetError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as strings until they are used so that a bad value is
/// reported with the name of the field it came from.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Document background color; no background rect when unset.
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    edge_color: Option<String>,

    #[serde(default)]
    edge_width: Option<f32>,

    /// Line pattern of recycle connectors: `solid`, `dashed`, `dotted` or a
    /// raw dasharray such as `"8,3"`.
    #[serde(default)]
    recycle_edge_style: Option<String>,

    /// Outline color drawn around the highlighted node.
    #[serde(default)]
    highlight_color: Option<String>,

    #[serde(default)]
    label_font_family: Option<String>,

    #[serde(default)]
    label_font_size: Option<u16>,

    /// Space between the diagram content and the document edge.
    #[serde(default)]
    margin: Option<f32>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.background_color.as_deref(), "background")
    }

    /// Returns the parsed edge [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn edge_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.edge_color.as_deref(), "edge")
    }

    /// Returns the parsed highlight [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn highlight_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.highlight_color.as_deref(), "highlight")
    }

    pub fn edge_width(&self) -> Option<f32> {
        self.edge_width
    }

    /// Returns the parsed recycle connector pattern, or `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a named style nor a dasharray.
    pub fn recycle_edge_style(&self) -> Result<Option<StrokeStyle>, String> {
        self.recycle_edge_style
            .as_deref()
            .map(StrokeStyle::from_str)
            .transpose()
    }

    pub fn label_font_family(&self) -> Option<&str> {
        self.label_font_family.as_deref()
    }

    pub fn label_font_size(&self) -> Option<u16> {
        self.label_font_size
    }

    pub fn margin(&self) -> Option<f32> {
        self.margin
    }
}

fn parse_optional_color(value: Option<&str>, field: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} color in config: {err}"))
}

/// Default edge color.
pub const DEFAULT_EDGE_COLOR: &str = "#64748b";
/// Default highlight outline color.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#f59e0b";
/// Default document margin.
pub const DEFAULT_MARGIN: f32 = 50.0;

const DEFAULT_EDGE_WIDTH: f32 = 2.0;
const HIGHLIGHT_WIDTH: f32 = 3.0;
const PANEL_BODY_COLOR: &str = "#475569";
const PANEL_BACKGROUND_COLOR: &str = "#f8fafc";
const PANEL_TITLE_SIZE: u16 = 14;

/// Fully resolved drawing style.
///
/// Built from a [`StyleConfig`] with defaults applied to every unset field.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    background: Option<Color>,
    edge: StrokeDefinition,
    recycle_edge: StrokeStyle,
    highlight: StrokeDefinition,
    label: TextDefinition,
    panel_title: TextDefinition,
    panel_body: TextDefinition,
    panel_background: Color,
    margin: f32,
}

impl RenderStyle {
    /// Resolves a style configuration into drawing definitions.
    ///
    /// # Errors
    ///
    /// Returns [`FlowsheetError::Config`] if any configured color is invalid
    /// or a numeric field is negative or not finite.
    pub fn from_config(config: &StyleConfig) -> Result<Self, FlowsheetError> {
        let mut style = Self::default();

        style.background = config.background_color().map_err(FlowsheetError::Config)?;

        if let Some(color) = config.edge_color().map_err(FlowsheetError::Config)? {
            style.edge = style.edge.with_color(color);
        }
        if let Some(width) = config.edge_width() {
            if !width.is_finite() || width < 0.0 {
                return Err(FlowsheetError::Config(format!(
                    "Invalid edge width in config: {width}"
                )));
            }
            style.edge = style.edge.with_width(width);
        }
        if let Some(pattern) = config.recycle_edge_style().map_err(FlowsheetError::Config)? {
            style.recycle_edge = pattern;
        }
        if let Some(color) = config.highlight_color().map_err(FlowsheetError::Config)? {
            style.highlight = style.highlight.with_color(color);
        }

        if let Some(family) = config.label_font_family() {
            style.label.set_font_family(family);
            style.panel_title.set_font_family(family);
            style.panel_body.set_font_family(family);
        }
        if let Some(size) = config.label_font_size() {
            style.label.set_font_size(size);
            style.panel_body.set_font_size(size);
        }

        if let Some(margin) = config.margin() {
            if !margin.is_finite() || margin < 0.0 {
                return Err(FlowsheetError::Config(format!(
                    "Invalid margin in config: {margin}"
                )));
            }
            style.margin = margin;
        }

        Ok(style)
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Stroke for forward connectors.
    pub fn edge(&self) -> &StrokeDefinition {
        &self.edge
    }

    /// Stroke for recycle connectors: the forward stroke with the recycle pattern.
    pub fn recycle_edge(&self) -> StrokeDefinition {
        self.edge.clone().with_style(self.recycle_edge.clone())
    }

    pub fn highlight(&self) -> &StrokeDefinition {
        &self.highlight
    }

    pub fn label(&self) -> &TextDefinition {
        &self.label
    }

    pub fn panel_title(&self) -> &TextDefinition {
        &self.panel_title
    }

    pub fn panel_body(&self) -> &TextDefinition {
        &self.panel_body
    }

    pub fn panel_background(&self) -> Color {
        self.panel_background
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        let edge = StrokeDefinition::new(
            Color::new(DEFAULT_EDGE_COLOR).expect("default edge color is valid"),
            DEFAULT_EDGE_WIDTH,
        )
        .with_cap(StrokeCap::Round);

        let highlight = StrokeDefinition::outline()
            .with_color(Color::new(DEFAULT_HIGHLIGHT_COLOR).expect("default highlight color is valid"))
            .with_width(HIGHLIGHT_WIDTH);

        let mut panel_title = TextDefinition::new();
        panel_title.set_bold(true);
        panel_title.set_font_size(PANEL_TITLE_SIZE);

        let mut panel_body = TextDefinition::new();
        panel_body.set_color(Some(
            Color::new(PANEL_BODY_COLOR).expect("default panel text color is valid"),
        ));

        Self {
            background: None,
            edge,
            recycle_edge: StrokeStyle::Dashed,
            highlight,
            label: TextDefinition::new(),
            panel_title,
            panel_body,
            panel_background: Color::new(PANEL_BACKGROUND_COLOR)
                .expect("default panel color is valid"),
            margin: DEFAULT_MARGIN,
        }
    }
}
