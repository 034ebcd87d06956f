//! # Style Attributes
//!
//! Markup-style attribute sets for a progress wheel, loaded from YAML or JSON.
//! Every key is optional; only the keys that are present override the builder
//! defaults.
//!
//! ## Value Formats:
//! - Dimensions in egui points: `24` and `"12dp"` (also `dip`, `sp`) are taken
//!   as is, `"24px"` is physical pixels divided by the pixels per point
//! - Text: any scalar, so `text: 123` reads as `"123"`
//! - Colors: `"#RGB"`, `"#ARGB"`, `"#RRGGBB"`, `"#AARRGGBB"` or a packed integer
//!
//! ## Example:
//! ```yaml
//! barWidth: 12dp
//! barColor: "#FF3F51B5"
//! text: "Loading\nplease wait"
//! ```

use anyhow::{Context, Result};
use log::debug;
use progress_wheel_shared::{Argb, StyleBuilder, StyleConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("Invalid color for `{attribute}`: {value}")]
    InvalidColor { attribute: &'static str, value: String },
    #[error("Invalid dimension for `{attribute}`: {value}")]
    InvalidDimension { attribute: &'static str, value: String },
    #[error("Failed to parse YAML attributes: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON attributes: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw attribute value as written in markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    /// The value as written, used for text attributes and error messages
    pub fn describe(&self) -> String {
        match self {
            AttrValue::Number(number) => number.to_string(),
            AttrValue::Text(text) => text.clone(),
        }
    }

    /// Resolve to whole egui points, truncating toward zero
    pub fn dimension(&self, attribute: &'static str, pixels_per_point: f32) -> Result<i32, AttributeError> {
        let invalid = || AttributeError::InvalidDimension {
            attribute,
            value: self.describe(),
        };

        let pixels = match self {
            AttrValue::Number(number) => *number,
            AttrValue::Text(text) => {
                let text = text.trim();
                // Points are already density independent
                let (number, scale) = if let Some(number) = text.strip_suffix("px") {
                    (number, 1.0 / pixels_per_point as f64)
                } else if let Some(number) = text.strip_suffix("dip") {
                    (number, 1.0)
                } else if let Some(number) = text.strip_suffix("dp") {
                    (number, 1.0)
                } else if let Some(number) = text.strip_suffix("sp") {
                    (number, 1.0)
                } else {
                    (text, 1.0)
                };
                number.trim().parse::<f64>().map_err(|_| invalid())? * scale
            }
        };

        if !pixels.is_finite() {
            return Err(invalid());
        }
        Ok(pixels as i32)
    }

    pub fn color(&self, attribute: &'static str) -> Result<Argb, AttributeError> {
        let invalid = || AttributeError::InvalidColor {
            attribute,
            value: self.describe(),
        };

        match self {
            AttrValue::Number(number) => {
                let whole = *number as i64;
                if number.fract() != 0.0 || whole < i32::MIN as i64 || whole > u32::MAX as i64 {
                    return Err(invalid());
                }
                // Negative values are signed 32-bit color ints
                Ok(Argb(whole as u32))
            }
            AttrValue::Text(text) => parse_hex_color(text.trim()).ok_or_else(invalid),
        }
    }
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`
fn parse_hex_color(text: &str) -> Option<Argb> {
    let hex = text.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;

    let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
    match hex.len() {
        3 => Some(Argb::from_argb(0xFF, expand(value >> 8), expand(value >> 4), expand(value))),
        4 => Some(Argb::from_argb(
            expand(value >> 12),
            expand(value >> 8),
            expand(value >> 4),
            expand(value),
        )),
        6 => Some(Argb(0xFF00_0000 | value)),
        8 => Some(Argb(value)),
        _ => None,
    }
}

/// The styleable attributes of a progress wheel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleAttributes {
    pub bar_width: Option<AttrValue>,
    pub rim_width: Option<AttrValue>,
    pub spin_speed: Option<AttrValue>,
    pub bar_color: Option<AttrValue>,
    pub bar_length: Option<AttrValue>,
    pub text_size: Option<AttrValue>,
    pub text_color: Option<AttrValue>,
    pub text: Option<AttrValue>,
    pub rim_color: Option<AttrValue>,
    pub circle_color: Option<AttrValue>,
    pub contour_color: Option<AttrValue>,
    pub contour_size: Option<AttrValue>,
}

impl StyleAttributes {
    pub fn from_yaml(source: &str) -> Result<Self, AttributeError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, AttributeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Apply the attributes that are present on top of `builder`
    pub fn apply(&self, mut builder: StyleBuilder, pixels_per_point: f32) -> Result<StyleBuilder, AttributeError> {
        if let Some(value) = &self.bar_width {
            builder = builder.bar_width(value.dimension("barWidth", pixels_per_point)?);
        }
        if let Some(value) = &self.rim_width {
            builder = builder.rim_width(value.dimension("rimWidth", pixels_per_point)?);
        }
        if let Some(value) = &self.spin_speed {
            builder = builder.spin_speed(value.dimension("spinSpeed", pixels_per_point)?);
        }
        if let Some(value) = &self.bar_color {
            builder = builder.bar_color(value.color("barColor")?);
        }
        if let Some(value) = &self.bar_length {
            builder = builder.bar_length(value.dimension("barLength", pixels_per_point)?);
        }
        if let Some(value) = &self.text_size {
            builder = builder.text_size(value.dimension("textSize", pixels_per_point)?);
        }
        if let Some(value) = &self.text_color {
            builder = builder.text_color(value.color("textColor")?);
        }
        if let Some(text) = &self.text {
            builder = builder.text(text.describe());
        }
        if let Some(value) = &self.rim_color {
            builder = builder.rim_color(value.color("rimColor")?);
        }
        if let Some(value) = &self.circle_color {
            builder = builder.circle_color(value.color("circleColor")?);
        }
        if let Some(value) = &self.contour_color {
            builder = builder.contour_color(value.color("contourColor")?);
        }
        if let Some(value) = &self.contour_size {
            builder = builder.contour_size(value.dimension("contourSize", pixels_per_point)? as f32);
        }
        Ok(builder)
    }

    pub fn to_style(&self, pixels_per_point: f32) -> Result<StyleConfig, AttributeError> {
        Ok(self.apply(StyleBuilder::new(), pixels_per_point)?.build())
    }
}

/// Load an attribute file; `.json` files are read as JSON, anything else as YAML
pub fn load_attributes_file(path: &Path) -> Result<StyleAttributes> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read style attributes from {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let attributes = if is_json {
        StyleAttributes::from_json(&source)
    } else {
        StyleAttributes::from_yaml(&source)
    }
    .with_context(|| format!("Invalid style attributes in {}", path.display()))?;

    debug!("Loaded style attributes from {}: {:?}", path.display(), attributes);
    Ok(attributes)
}
