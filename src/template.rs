//! Token substitution for watermark display text.
//!
//! This module does the two halves of placeholder handling:
//!
//! 1. **Canonicalization** (settings time): scan the user's text for the
//!    recognized tokens case-insensitively and rewrite every occurrence to
//!    its canonical lowercase spelling, recording which tokens were found.
//! 2. **Resolution** (render time): replace the canonical tokens in the
//!    format string with the current values supplied by the editor host.
//!
//! Normalizing to one canonical casing up front lets resolution be a cheap
//! case-sensitive literal replacement; the case-insensitive matching work
//! is done once, here.
//!
//! # Example
//!
//! ```
//! use sukashi::template::{canonicalize_template, resolve_template, EditorContext};
//!
//! let (flags, format) = canonicalize_template("File: ${CurrentFileName}");
//! assert_eq!(format, "File: ${currentfilename}");
//! assert!(flags.file_name);
//!
//! let mut context = EditorContext::new();
//! context.set_file_name("main.rs");
//! assert_eq!(resolve_template(&format, &context), "File: main.rs");
//! ```

use tracing::trace;

use crate::token::{Token, TokenFlags};

/// Rewrites every case-insensitive occurrence of one token to its canonical
/// lowercase spelling, leaving all surrounding text byte-for-byte unchanged.
///
/// Returns whether at least one occurrence was found, and the rewritten
/// text. Zero occurrences return the input unchanged.
///
/// Matching runs against an ASCII-lowercased mirror of the input, never the
/// canonical output, so any mixed casing of the token matches. The token
/// literals are ASCII-only, which keeps mirror byte offsets aligned with
/// the original text even when the surrounding text is multi-byte UTF-8.
pub fn canonicalize_token(text: &str, token: Token) -> (bool, String) {
    let literal = token.literal();
    let mirror = text.to_ascii_lowercase();

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut found = false;

    // Iterative cursor scan: occurrence count is input-dependent, so the
    // loop must not grow the stack with it.
    while let Some(offset) = mirror[cursor..].find(literal) {
        let start = cursor + offset;
        output.push_str(&text[cursor..start]);
        output.push_str(literal);
        cursor = start + literal.len();
        found = true;
    }
    output.push_str(&text[cursor..]);

    (found, output)
}

/// Runs the single-token pass for every recognized token, in the fixed
/// order of [`Token::ALL`], each pass consuming the previous pass's output.
///
/// The token literals are textually disjoint, so ordering affects only the
/// normalized casing, never which tokens are detected.
pub fn canonicalize_template(text: &str) -> (TokenFlags, String) {
    let mut flags = TokenFlags::default();
    let mut format = text.to_string();

    for token in Token::ALL {
        let (found, rewritten) = canonicalize_token(&format, token);
        flags.set(token, found);
        format = rewritten;
    }

    trace!(?flags, "canonicalized display text");
    (flags, format)
}

/// Values the editor host supplies at render time.
///
/// The settings core never computes these itself; it only detects whether
/// they are referenced. A value left unset resolves to an empty string.
#[derive(Debug, Clone, Default)]
pub struct EditorContext {
    /// Name of the file being edited
    file_name: Option<String>,
    /// Name of the file's directory
    directory_name: Option<String>,
    /// Name of the containing project
    project_name: Option<String>,
    /// File path relative to the project root
    file_path_in_project: Option<String>,
}

impl EditorContext {
    /// Creates a new empty editor context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current file name.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = Some(name.into());
    }

    /// Sets the current directory name.
    pub fn set_directory_name(&mut self, name: impl Into<String>) {
        self.directory_name = Some(name.into());
    }

    /// Sets the current project name.
    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = Some(name.into());
    }

    /// Sets the current file path relative to the project.
    pub fn set_file_path_in_project(&mut self, path: impl Into<String>) {
        self.file_path_in_project = Some(path.into());
    }

    /// Gets the value for a token, if the host supplied one.
    pub fn value(&self, token: Token) -> Option<&str> {
        match token {
            Token::CurrentFileName => self.file_name.as_deref(),
            Token::CurrentDirectoryName => self.directory_name.as_deref(),
            Token::CurrentProjectName => self.project_name.as_deref(),
            Token::CurrentFilePathInProject => self.file_path_in_project.as_deref(),
        }
    }
}

/// Resolves every canonical token in a format string to its context value.
///
/// The format string must already be canonicalized (see
/// [`canonicalize_template`]); resolution is a plain case-sensitive literal
/// replacement. Missing values are replaced with an empty string.
pub fn resolve_template(format: &str, context: &EditorContext) -> String {
    let mut resolved = format.to_string();
    for token in Token::ALL {
        resolved = resolved.replace(token.literal(), context.value(token).unwrap_or(""));
    }
    resolved
}
