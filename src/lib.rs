//! Blurdle - guess the blurred celebrity
//!
//! Core modules:
//! - `game`: Pure puzzle logic (matching, attempts, reveal animation, selection)
//! - `catalog`: Puzzle entries supplied by the host page
//! - `rules`: Data-driven game tuning
//! - `share`: Share text and native share / clipboard fallback
//! - `view`: Read-only snapshot handed to the renderer

pub mod catalog;
pub mod game;
pub mod rules;
pub mod share;
pub mod view;

pub use catalog::{Catalog, CatalogError, PuzzleEntry};
pub use game::{GamePhase, GameSession, RevealAnimator, SubmitOutcome};
pub use rules::{Rules, RulesError};
pub use view::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Maximum guesses per session
    pub const MAX_GUESSES: usize = 6;

    /// Blur (px) for 0..=5 prior guesses; anything past the end is fully revealed
    pub const BLUR_LEVELS: [u32; 6] = [20, 16, 12, 8, 4, 0];

    /// Largest edit distance still accepted as a correct guess
    pub const MATCH_TOLERANCE: usize = 2;

    /// How long the "copied" confirmation stays visible (ms)
    pub const SHARE_NOTICE_MS: f64 = 3000.0;

    /// Title passed to the native share sheet
    pub const SHARE_TITLE: &str = "Blurdle";

    /// Share message; `{guesses}` is replaced with the attempt count
    pub const SHARE_TEMPLATE: &str = "I guessed today's celebrity in {guesses} guesses on Blurdle! Can you beat me? globalplayer.com/blurdle";

    /// Confirmation shown after falling back to the clipboard
    pub const SHARE_COPIED_MESSAGE: &str = "Score copied to clipboard!";
}
