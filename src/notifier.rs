//! Refresh notification seam between the settings model and the renderer.
//!
//! The model never talks to the renderer directly; it fires a single
//! fire-and-forget signal through an injected [`RefreshNotifier`] when the
//! settings surface closes. Hosts wire their redraw mechanism in here;
//! tests supply a counting double.

/// Receives the "settings changed, refresh the overlay" signal.
///
/// No return value and no acknowledgment; the settings core does not
/// depend on the renderer's completion.
pub trait RefreshNotifier {
    /// Asks the renderer to refresh the overlay.
    fn request_refresh(&self);
}

/// Notifier that does nothing, for hosts and tests without a renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl RefreshNotifier for NoopNotifier {
    fn request_refresh(&self) {}
}
