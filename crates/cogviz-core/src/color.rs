//! Color handling for rendered cognitive graphs
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Node fills, link strokes and backgrounds are all
//! expressed through it.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#3b82f6"`,
    /// `"rgb(255, 0, 0)"` or `"white"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cogviz_core::color::Color;
    ///
    /// let blue = Color::new("#3b82f6").unwrap();
    /// assert!(Color::new("definitely-not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a color from a string literal that is known to be valid.
    ///
    /// Only meant for built-in palettes; panics on malformed input.
    pub(crate) fn builtin(color_str: &'static str) -> Self {
        Self::new(color_str).unwrap_or_else(|err| panic!("built-in palette entry: {err}"))
    }

    /// Creates a new color with the specified alpha value, between 0.0
    /// (fully transparent) and 1.0 (fully opaque).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::builtin("black")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ef4444").is_ok());
        assert!(Color::new("white").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("#64748b").unwrap();
        let faded = color.with_alpha(0.6);
        assert!((faded.alpha() - 0.6).abs() < 0.001);
        assert!((color.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_eq_hash() {
        let color1 = Color::new("#22c55e").unwrap();
        let color2 = Color::new("#22c55e").unwrap();
        let color3 = Color::new("#14b8a6").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
