//! Score sharing
//!
//! Composes the share message and hands it to the platform: the native share
//! sheet when there is one, otherwise the clipboard plus a short-lived notice.

use crate::consts::{SHARE_COPIED_MESSAGE, SHARE_NOTICE_MS, SHARE_TITLE};

/// Placeholder replaced with the attempt count
pub const GUESSES_PLACEHOLDER: &str = "{guesses}";

/// Fill the share template with the number of guesses used
pub fn compose_share_text(template: &str, guess_count: usize) -> String {
    template.replace(GUESSES_PLACEHOLDER, &guess_count.to_string())
}

/// Payload for the native share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Platform share capability
pub trait ShareSurface {
    /// Whether a native share sheet exists
    fn can_share_natively(&self) -> bool;
    /// Open the native share sheet (fire-and-forget)
    fn share_natively(&mut self, request: &ShareRequest);
    /// Write text to the clipboard (fire-and-forget, failures ignored)
    fn copy_to_clipboard(&mut self, text: &str);
}

/// Which path a share took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    SharedNatively,
    CopiedToClipboard,
}

/// Share via the native sheet, falling back to the clipboard
pub fn share_or_copy<S: ShareSurface + ?Sized>(surface: &mut S, request: &ShareRequest) -> ShareOutcome {
    if surface.can_share_natively() {
        surface.share_natively(request);
        log::info!("Opened native share sheet");
        ShareOutcome::SharedNatively
    } else {
        surface.copy_to_clipboard(&request.text);
        log::info!("Native share unavailable, copied score to clipboard");
        ShareOutcome::CopiedToClipboard
    }
}

/// Transient "copied" confirmation.
///
/// Each `show` starts a new generation; the dismiss timer for that show only
/// clears the notice if no later `show` has replaced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareNotice {
    generation: u64,
    /// Timestamp (ms) the notice disappears; None when hidden
    expires_at: Option<f64>,
}

impl ShareNotice {
    /// Show the notice starting at `now_ms`; returns the token to dismiss it with
    pub fn show(&mut self, now_ms: f64) -> u64 {
        self.generation += 1;
        self.expires_at = Some(now_ms + SHARE_NOTICE_MS);
        self.generation
    }

    /// Hide the notice if `generation` is still the latest show.
    ///
    /// Returns true if the notice was hidden.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.expires_at.is_none() {
            return false;
        }
        self.expires_at = None;
        true
    }

    pub fn is_visible(&self, now_ms: f64) -> bool {
        self.expires_at.is_some_and(|t| now_ms < t)
    }

    /// Message to display at `now_ms`, if any
    pub fn message(&self, now_ms: f64) -> Option<&'static str> {
        self.is_visible(now_ms).then_some(SHARE_COPIED_MESSAGE)
    }

    /// Record the outcome of a share; only the clipboard path shows a notice.
    ///
    /// Returns the dismiss token when a notice was shown.
    pub fn record(&mut self, outcome: ShareOutcome, now_ms: f64) -> Option<u64> {
        (outcome == ShareOutcome::CopiedToClipboard).then(|| self.show(now_ms))
    }
}
