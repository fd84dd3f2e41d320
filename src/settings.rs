//! Watermark settings model - the aggregate root.
//!
//! `WatermarkSettings` owns every user-configurable field plus the state
//! derived from the displayed text (canonical display format, per-token
//! flags, image path) and the memoized settings fingerprint. User edits go
//! through the setters; the renderer reads the accessors.
//!
//! Content state and render-appearance state are deliberately separate:
//! editing the displayed text re-derives format and flags but leaves the
//! fingerprint cache alone, while font/color/geometry setters invalidate
//! the cache without touching the derived text state.
//!
//! The model embeds `Cell`, so it is `!Sync` by construction; callers
//! confine it to a single thread (typically the one owning the settings
//! surface).

use tracing::{debug, trace};

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_MARGIN, DEFAULT_BORDER_OPACITY,
    DEFAULT_BORDER_PADDING, DEFAULT_DISPLAYED_TEXT, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_COLOR,
    DEFAULT_TEXT_SIZE, IMAGE_PREFIX,
};
use crate::fingerprint::{combine_all, hash_f64, hash_field, FingerprintCache};
use crate::folders::FolderFilter;
use crate::notifier::RefreshNotifier;
use crate::options::WatermarkOptions;
use crate::template::canonicalize_template;
use crate::token::{Token, TokenFlags};

/// The configurable watermark state and its derived display specification.
pub struct WatermarkSettings {
    // Raw user-set fields
    is_enabled: bool,
    folders: FolderFilter,
    position_top: bool,
    position_left: bool,
    displayed_text: String,
    text_size: f64,
    font_family_name: String,
    is_font_bold: bool,
    is_font_italic: bool,
    is_font_underline: bool,
    is_font_strikethrough: bool,
    text_color: String,
    border_color: String,
    background_color: String,
    border_margin: f64,
    border_padding: f64,
    border_opacity: f64,

    // Derived from displayed_text
    displayed_text_format: String,
    image_path: String,
    token_flags: TokenFlags,
    uses_replacements: bool,

    // Memoized fingerprint over the render-appearance fields
    fingerprint: FingerprintCache,

    // Injected refresh seam
    notifier: Box<dyn RefreshNotifier>,
}

impl WatermarkSettings {
    /// Creates a model with default values and the given notifier.
    pub fn new(notifier: Box<dyn RefreshNotifier>) -> Self {
        let mut settings = Self {
            is_enabled: true,
            folders: FolderFilter::new(),
            position_top: false,
            position_left: false,
            displayed_text: String::new(),
            text_size: DEFAULT_TEXT_SIZE,
            font_family_name: DEFAULT_FONT_FAMILY.to_string(),
            is_font_bold: false,
            is_font_italic: false,
            is_font_underline: false,
            is_font_strikethrough: false,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            border_margin: DEFAULT_BORDER_MARGIN,
            border_padding: DEFAULT_BORDER_PADDING,
            border_opacity: DEFAULT_BORDER_OPACITY,
            displayed_text_format: String::new(),
            image_path: String::new(),
            token_flags: TokenFlags::default(),
            uses_replacements: false,
            fingerprint: FingerprintCache::new(),
            notifier,
        };
        settings.set_displayed_text(DEFAULT_DISPLAYED_TEXT);
        settings
    }

    /// Builds a model from persisted options by replaying the setters, so
    /// all derived state is recomputed from the raw fields.
    pub fn with_options(options: &WatermarkOptions, notifier: Box<dyn RefreshNotifier>) -> Self {
        let mut settings = Self::new(notifier);
        settings.set_enabled(options.is_enabled);
        settings.set_folders(&options.folders);
        settings.set_position_top(options.position_top);
        settings.set_position_left(options.position_left);
        settings.set_displayed_text(&options.displayed_text);
        settings.set_text_size(options.text_size);
        settings.set_font_family_name(&options.font_family_name);
        settings.set_font_bold(options.is_font_bold);
        settings.set_font_italic(options.is_font_italic);
        settings.set_font_underline(options.is_font_underline);
        settings.set_font_strikethrough(options.is_font_strikethrough);
        settings.set_text_color(&options.text_color);
        settings.set_border_color(&options.border_color);
        settings.set_background_color(&options.background_color);
        settings.set_border_margin(options.border_margin);
        settings.set_border_padding(options.border_padding);
        settings.set_border_opacity(options.border_opacity);
        settings
    }

    /// Snapshots the current raw fields into the persisted options shape.
    pub fn options(&self) -> WatermarkOptions {
        WatermarkOptions {
            is_enabled: self.is_enabled,
            folders: self.folders.to_delimited(),
            position_top: self.position_top,
            position_left: self.position_left,
            displayed_text: self.displayed_text.clone(),
            text_size: self.text_size,
            font_family_name: self.font_family_name.clone(),
            is_font_bold: self.is_font_bold,
            is_font_italic: self.is_font_italic,
            is_font_underline: self.is_font_underline,
            is_font_strikethrough: self.is_font_strikethrough,
            text_color: self.text_color.clone(),
            border_color: self.border_color.clone(),
            background_color: self.background_color.clone(),
            border_margin: self.border_margin,
            border_padding: self.border_padding,
            border_opacity: self.border_opacity,
        }
    }

    // =========================================================================
    // Content setters (do not touch the fingerprint cache)
    // =========================================================================

    /// Enables or disables the watermark.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    /// Replaces the folder restriction from its `;`-delimited form.
    pub fn set_folders(&mut self, raw: &str) {
        self.folders = FolderFilter::parse(raw);
    }

    /// Positions the watermark at the top (true) or bottom (false).
    pub fn set_position_top(&mut self, top: bool) {
        self.position_top = top;
    }

    /// Positions the watermark on the left (true) or right (false).
    pub fn set_position_left(&mut self, left: bool) {
        self.position_left = left;
    }

    /// Sets the displayed text and re-derives the display specification.
    ///
    /// An `IMG:` prefix switches to image mode: the remainder becomes the
    /// image path. Token canonicalization always runs on the raw text, so
    /// the flags stay bookkept even in image mode.
    pub fn set_displayed_text(&mut self, text: &str) {
        self.displayed_text = text.to_string();

        self.image_path = match text.strip_prefix(IMAGE_PREFIX) {
            Some(remainder) => remainder.to_string(),
            None => String::new(),
        };

        let (flags, format) = canonicalize_template(text);
        self.token_flags = flags;
        self.displayed_text_format = format;
        self.uses_replacements = flags.any();

        debug!(
            using_image = self.using_image(),
            uses_replacements = self.uses_replacements,
            "displayed text updated"
        );
    }

    /// Sets the pixels between the border and the editor edge.
    ///
    /// Border margin does not feed the fingerprint, so this setter leaves
    /// the cache untouched.
    pub fn set_border_margin(&mut self, margin: f64) {
        self.border_margin = margin;
    }

    // =========================================================================
    // Render-appearance setters (invalidate the fingerprint cache)
    // =========================================================================

    /// Sets the text size in points.
    pub fn set_text_size(&mut self, size: f64) {
        self.text_size = size;
        self.fingerprint.invalidate();
    }

    /// Sets the font family name.
    pub fn set_font_family_name(&mut self, name: &str) {
        self.font_family_name = name.to_string();
        self.fingerprint.invalidate();
    }

    /// Sets whether the text is bold.
    pub fn set_font_bold(&mut self, bold: bool) {
        self.is_font_bold = bold;
        self.fingerprint.invalidate();
    }

    /// Sets whether the text is italic.
    pub fn set_font_italic(&mut self, italic: bool) {
        self.is_font_italic = italic;
        self.fingerprint.invalidate();
    }

    /// Sets whether the text is underlined.
    pub fn set_font_underline(&mut self, underline: bool) {
        self.is_font_underline = underline;
        self.fingerprint.invalidate();
    }

    /// Sets whether the text is struck through.
    pub fn set_font_strikethrough(&mut self, strikethrough: bool) {
        self.is_font_strikethrough = strikethrough;
        self.fingerprint.invalidate();
    }

    /// Sets the text color (named value or hex; uninterpreted here).
    pub fn set_text_color(&mut self, color: &str) {
        self.text_color = color.to_string();
        self.fingerprint.invalidate();
    }

    /// Sets the border color.
    pub fn set_border_color(&mut self, color: &str) {
        self.border_color = color.to_string();
        self.fingerprint.invalidate();
    }

    /// Sets the background color.
    pub fn set_background_color(&mut self, color: &str) {
        self.background_color = color.to_string();
        self.fingerprint.invalidate();
    }

    /// Sets the pixels between the text and the border.
    pub fn set_border_padding(&mut self, padding: f64) {
        self.border_padding = padding;
        self.fingerprint.invalidate();
    }

    /// Sets the background opacity strength.
    pub fn set_border_opacity(&mut self, opacity: f64) {
        self.border_opacity = opacity;
        self.fingerprint.invalidate();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the watermark is shown at all.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// The folder restriction set.
    pub fn folders(&self) -> &FolderFilter {
        &self.folders
    }

    /// Whether the watermark sits at the top of the editor.
    pub fn position_top(&self) -> bool {
        self.position_top
    }

    /// Whether the watermark sits on the left of the editor.
    pub fn position_left(&self) -> bool {
        self.position_left
    }

    /// The user's literal input.
    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// The canonicalized display format the renderer resolves tokens in.
    pub fn display_format(&self) -> &str {
        &self.displayed_text_format
    }

    /// The image path, when the displayed text is an `IMG:` reference.
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// True when the displayed content is an image reference.
    pub fn using_image(&self) -> bool {
        !self.image_path.is_empty()
    }

    /// Which tokens occur in the display format.
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    /// Whether a single token occurs in the display format.
    pub fn uses_token(&self, token: Token) -> bool {
        self.token_flags.get(token)
    }

    /// True if any token occurs in the display format.
    pub fn uses_replacements(&self) -> bool {
        self.uses_replacements
    }

    /// The text size in points.
    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    /// The font family name.
    pub fn font_family_name(&self) -> &str {
        &self.font_family_name
    }

    /// Whether the text is bold.
    pub fn is_font_bold(&self) -> bool {
        self.is_font_bold
    }

    /// Whether the text is italic.
    pub fn is_font_italic(&self) -> bool {
        self.is_font_italic
    }

    /// Whether the text is underlined.
    pub fn is_font_underline(&self) -> bool {
        self.is_font_underline
    }

    /// Whether the text is struck through.
    pub fn is_font_strikethrough(&self) -> bool {
        self.is_font_strikethrough
    }

    /// The text color string.
    pub fn text_color(&self) -> &str {
        &self.text_color
    }

    /// The border color string.
    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    /// The background color string.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Pixels between the border and the editor edge.
    pub fn border_margin(&self) -> f64 {
        self.border_margin
    }

    /// Pixels between the text and the border.
    pub fn border_padding(&self) -> f64 {
        self.border_padding
    }

    /// The background opacity strength.
    pub fn border_opacity(&self) -> f64 {
        self.border_opacity
    }

    /// The memoized fingerprint over the render-appearance fields.
    ///
    /// Recomputed only after a render-appearance setter ran since the last
    /// read. Border margin is not part of the hash.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint.get_or_compute(|| {
            trace!("recomputing settings fingerprint");
            combine_all(&[
                hash_f64(self.text_size),
                hash_field(self.font_family_name.as_str()),
                hash_field(&self.is_font_bold),
                hash_field(&self.is_font_italic),
                hash_field(&self.is_font_underline),
                hash_field(&self.is_font_strikethrough),
                hash_field(self.text_color.as_str()),
                hash_field(self.border_color.as_str()),
                hash_field(self.background_color.as_str()),
                hash_f64(self.border_padding),
                hash_f64(self.border_opacity),
            ])
        })
    }

    /// Called when the settings surface closes; asks the renderer to
    /// refresh the overlay. Fire and forget.
    pub fn settings_closed(&self) {
        debug!("settings surface closed, requesting overlay refresh");
        self.notifier.request_refresh();
    }
}
