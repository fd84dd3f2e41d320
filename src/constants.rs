// Constants module - centralized literals and default values
//
// This module defines the reserved template literals, the fingerprint
// combine parameters, and all default field values used throughout the
// codebase. Using constants instead of magic values improves
// maintainability and makes defaults easy to audit in one place.

// =============================================================================
// Template literals
// =============================================================================

/// Reserved prefix: a displayed text starting with this is an image path
/// reference rather than text with placeholders
pub const IMAGE_PREFIX: &str = "IMG:";

/// Delimiter between entries in the persisted folder filter string
pub const FOLDER_DELIMITER: char = ';';

// =============================================================================
// Fingerprint combine parameters
// =============================================================================

/// Seed for the fingerprint accumulator (fixed non-zero constant)
pub const FINGERPRINT_SEED: u64 = 17;

/// Odd multiplier used to fold each field hash into the accumulator
pub const FINGERPRINT_MULTIPLIER: u64 = 31;

// =============================================================================
// Settings defaults
// =============================================================================

/// Default displayed text shown before the user configures anything
pub const DEFAULT_DISPLAYED_TEXT: &str = "To change this text, edit the watermark settings.";

/// Default text size in points
pub const DEFAULT_TEXT_SIZE: f64 = 16.0;

/// Default font family name
pub const DEFAULT_FONT_FAMILY: &str = "Consolas";

/// Default text color (named value or hex, interpreted by the renderer)
pub const DEFAULT_TEXT_COLOR: &str = "Red";

/// Default border color
pub const DEFAULT_BORDER_COLOR: &str = "Gray";

/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: &str = "White";

/// Default number of pixels between the border and the editor edge
pub const DEFAULT_BORDER_MARGIN: f64 = 10.0;

/// Default number of pixels between the text and the border
pub const DEFAULT_BORDER_PADDING: f64 = 3.0;

/// Default strength of the background opacity
pub const DEFAULT_BORDER_OPACITY: f64 = 0.7;
