use derive_more::Display;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::transform::Size;

/// Value Object - space reserved around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paddings {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Paddings {
    fn default() -> Self {
        // left leaves room for the value axis description
        Self { top: 30.0, bottom: 40.0, left: 89.0, right: 1.0 }
    }
}

/// Axis descriptions; `None` hides the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legends {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl Default for Legends {
    fn default() -> Self {
        Self { x: Some("Sequence".to_string()), y: Some("# of mutations".to_string()) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoScale {
    Auto,
}

/// Upper end of the value axis: derived from the data or fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YScale {
    Fixed(f64),
    Auto(AutoScale),
}

impl Default for YScale {
    fn default() -> Self {
        YScale::Auto(AutoScale::Auto)
    }
}

/// Immutable-after-init plot configuration, deserialized from the
/// embedding page's camelCase object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotConfig {
    pub sequence_length: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub ratio: f64,
    pub paddings: Paddings,
    pub min_zoom: f64,
    pub max_zoom: f64,
    #[serde(alias = "useLog")]
    pub use_log_scale: bool,
    pub site_height: f64,
    /// Milliseconds; 0 disables animations.
    pub animation_duration: f64,
    pub legends: Legends,
    pub color_map: BTreeMap<String, String>,
    pub y_scale: YScale,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            sequence_length: 0.0,
            width: Some(600.0),
            height: None,
            ratio: 0.5,
            paddings: Paddings::default(),
            min_zoom: 1.0,
            max_zoom: 10.0,
            use_log_scale: false,
            site_height: 10.0,
            animation_duration: 200.0,
            legends: Legends::default(),
            color_map: BTreeMap::new(),
            y_scale: YScale::default(),
        }
    }
}

impl PlotConfig {
    pub fn new(sequence_length: f64) -> Self {
        Self { sequence_length, ..Default::default() }
    }

    /// Fill in whichever of width/height is missing and keep `ratio`
    /// consistent with them.
    pub fn resolve_dimensions(&mut self) -> Size {
        match (self.width, self.height) {
            (None, None) => {
                let width = self.sequence_length;
                self.width = Some(width);
                self.height = Some(width * self.ratio);
            }
            (Some(width), Some(height)) => {
                if width > 0.0 {
                    self.ratio = height / width;
                }
            }
            (Some(width), None) => self.height = Some(width * self.ratio),
            (None, Some(height)) => {
                let width = if self.ratio > 0.0 { height / self.ratio } else { self.sequence_length };
                self.width = Some(width);
            }
        }
        Size::new(self.width.unwrap_or_default(), self.height.unwrap_or_default())
    }

    pub fn color_for(&self, category: &str) -> Option<&str> {
        self.color_map.get(category).map(String::as_str)
    }
}

/// Value Object - RGB color parsed from a CSS hex string or name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "#{:02x}{:02x}{:02x}", r, g, b)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

static NAMED_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    [
        ("black", Color::rgb(0, 0, 0)),
        ("white", Color::rgb(255, 255, 255)),
        ("red", Color::rgb(255, 0, 0)),
        ("green", Color::rgb(0, 128, 0)),
        ("blue", Color::rgb(0, 0, 255)),
        ("yellow", Color::rgb(255, 255, 0)),
        ("orange", Color::rgb(255, 165, 0)),
        ("purple", Color::rgb(128, 0, 128)),
        ("grey", Color::rgb(128, 128, 128)),
        ("gray", Color::rgb(128, 128, 128)),
        ("navy", Color::rgb(0, 0, 128)),
        ("teal", Color::rgb(0, 128, 128)),
        ("maroon", Color::rgb(128, 0, 0)),
        ("olive", Color::rgb(128, 128, 0)),
        ("silver", Color::rgb(192, 192, 192)),
    ]
    .into_iter()
    .collect()
});

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#rgb`, `#rrggbb` and a handful of CSS color names.
    pub fn parse(css: &str) -> Option<Self> {
        let css = css.trim();
        if let Some(hex) = css.strip_prefix('#') {
            if !hex.is_ascii() {
                return None;
            }
            let channel = |s: &str| u8::from_str_radix(s, 16).ok();
            return match hex.len() {
                3 => {
                    let mut digits = hex.chars().map(|c| c.to_string().repeat(2));
                    Some(Self::rgb(
                        channel(&digits.next()?)?,
                        channel(&digits.next()?)?,
                        channel(&digits.next()?)?,
                    ))
                }
                6 => Some(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
                _ => None,
            };
        }
        NAMED_COLORS.get(css.to_ascii_lowercase().as_str()).copied()
    }

    /// YIQ brightness below 128.
    pub fn is_dark(&self) -> bool {
        let yiq = (self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000;
        yiq < 128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_missing_height_from_ratio() {
        let mut config = PlotConfig::new(1000.0);
        assert_eq!(config.resolve_dimensions(), Size::new(600.0, 300.0));
    }

    #[test]
    fn resolves_width_from_sequence_when_unset() {
        let mut config = PlotConfig { width: None, ..PlotConfig::new(400.0) };
        assert_eq!(config.resolve_dimensions(), Size::new(400.0, 200.0));
    }

    #[test]
    fn explicit_dimensions_update_ratio() {
        let mut config = PlotConfig { width: Some(800.0), height: Some(200.0), ..PlotConfig::new(10.0) };
        config.resolve_dimensions();
        assert_eq!(config.ratio, 0.25);
    }

    #[test]
    fn parses_short_and_named_colors() {
        assert_eq!(Color::parse("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::parse("#1a2B3c"), Some(Color::rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(Color::parse("Navy"), Some(Color::rgb(0, 0, 128)));
        assert_eq!(Color::parse("#12"), None);
        assert!(Color::parse("navy").unwrap().is_dark());
        assert!(!Color::parse("yellow").unwrap().is_dark());
    }

    #[test]
    fn config_reads_camel_case() {
        let config: PlotConfig = serde_json::from_str(
            r#"{"sequenceLength": 300, "minZoom": 1, "maxZoom": 5, "useLog": true, "yScale": "auto"}"#,
        )
        .unwrap();
        assert_eq!(config.sequence_length, 300.0);
        assert_eq!(config.max_zoom, 5.0);
        assert!(config.use_log_scale);
        assert_eq!(config.y_scale, YScale::default());
        assert_eq!(config.width, Some(600.0));
    }
}
