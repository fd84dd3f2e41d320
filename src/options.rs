//! Persisted watermark options shape.
//!
//! `WatermarkOptions` is the plain serde struct the host settings store
//! reads and writes. Only raw user-set fields are persisted; derived state
//! (display format, token flags, image path) is recomputed when a
//! [`crate::settings::WatermarkSettings`] model is rebuilt from options.
//! Every field carries a default so a missing or null entry in the store
//! silently deserializes to the documented default.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_MARGIN, DEFAULT_BORDER_OPACITY,
    DEFAULT_BORDER_PADDING, DEFAULT_DISPLAYED_TEXT, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_COLOR,
    DEFAULT_TEXT_SIZE,
};

// Default values
fn default_enabled() -> bool {
    true
}

fn default_displayed_text() -> String {
    DEFAULT_DISPLAYED_TEXT.to_string()
}

fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

fn default_font_family_name() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

fn default_border_color() -> String {
    DEFAULT_BORDER_COLOR.to_string()
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

fn default_border_margin() -> f64 {
    DEFAULT_BORDER_MARGIN
}

fn default_border_padding() -> f64 {
    DEFAULT_BORDER_PADDING
}

fn default_border_opacity() -> f64 {
    DEFAULT_BORDER_OPACITY
}

// Null handling: serde's `default` only covers fields that are absent.
// An explicit `null` in the store must take the same default, so the
// string fields deserialize through an Option first.

fn de_displayed_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_displayed_text))
}

fn de_folders<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_font_family_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_font_family_name))
}

fn de_text_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_text_color))
}

fn de_border_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_border_color))
}

fn de_background_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_background_color))
}

/// The user-configurable watermark fields, as persisted by the host.
///
/// Colors are named values or hex strings (e.g. `"#FF00FF"`); they are
/// passed through uninterpreted and validated only by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatermarkOptions {
    /// Show the watermark (default: true)
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,

    /// `;`-delimited folders the watermark is restricted to (default: empty)
    #[serde(default, deserialize_with = "de_folders")]
    pub folders: String,

    /// Show the watermark at the top (default: false)
    #[serde(default)]
    pub position_top: bool,

    /// Show the watermark on the left (default: false)
    #[serde(default)]
    pub position_left: bool,

    /// The text to show, with optional placeholder tokens, or an `IMG:`
    /// image path reference
    #[serde(default = "default_displayed_text", deserialize_with = "de_displayed_text")]
    pub displayed_text: String,

    /// Text size in points (default: 16)
    #[serde(default = "default_text_size")]
    pub text_size: f64,

    /// Font family name (default: "Consolas")
    #[serde(default = "default_font_family_name", deserialize_with = "de_font_family_name")]
    pub font_family_name: String,

    /// Bold text (default: false)
    #[serde(default)]
    pub is_font_bold: bool,

    /// Italic text (default: false)
    #[serde(default)]
    pub is_font_italic: bool,

    /// Underlined text (default: false)
    #[serde(default)]
    pub is_font_underline: bool,

    /// Struck-through text (default: false)
    #[serde(default)]
    pub is_font_strikethrough: bool,

    /// Text color (default: "Red")
    #[serde(default = "default_text_color", deserialize_with = "de_text_color")]
    pub text_color: String,

    /// Border color (default: "Gray")
    #[serde(default = "default_border_color", deserialize_with = "de_border_color")]
    pub border_color: String,

    /// Background color (default: "White")
    #[serde(default = "default_background_color", deserialize_with = "de_background_color")]
    pub background_color: String,

    /// Pixels between the border and the editor edge (default: 10)
    #[serde(default = "default_border_margin")]
    pub border_margin: f64,

    /// Pixels between the text and the border (default: 3)
    #[serde(default = "default_border_padding")]
    pub border_padding: f64,

    /// Background opacity strength (default: 0.7)
    #[serde(default = "default_border_opacity")]
    pub border_opacity: f64,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            is_enabled: default_enabled(),
            folders: String::new(),
            position_top: false,
            position_left: false,
            displayed_text: default_displayed_text(),
            text_size: default_text_size(),
            font_family_name: default_font_family_name(),
            is_font_bold: false,
            is_font_italic: false,
            is_font_underline: false,
            is_font_strikethrough: false,
            text_color: default_text_color(),
            border_color: default_border_color(),
            background_color: default_background_color(),
            border_margin: default_border_margin(),
            border_padding: default_border_padding(),
            border_opacity: default_border_opacity(),
        }
    }
}

impl WatermarkOptions {
    /// Parses options from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Serializes options to YAML.
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| e.to_string())
    }
}
