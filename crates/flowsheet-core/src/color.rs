//! CSS colors for node fills, connectors and panel backgrounds.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color (named, hex, `rgb()`, `hsl()`, ...).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// ```
    /// use flowsheet_core::color::Color;
    ///
    /// let aeration = Color::new("#4f9dde").unwrap();
    /// let sludge = Color::new("saddlebrown").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Same color with its alpha replaced.
    ///
    /// ```
    /// use flowsheet_core::color::Color;
    ///
    /// let liquid = Color::new("royalblue").unwrap().with_alpha(0.35);
    /// assert!((liquid.alpha() - 0.35).abs() < 0.001);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Alpha in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
