//! Puzzle logic module
//!
//! Everything that decides the outcome of a round lives here. This module must
//! stay pure:
//! - No DOM or platform dependencies
//! - Randomness only through an injected RNG
//! - Animation advanced only by explicit `step` calls

pub mod matching;
pub mod reveal;
pub mod select;
pub mod session;

pub use matching::{edit_distance, is_match, is_match_within, normalize};
pub use reveal::{AnimationStatus, RevealAnimator, blur_target_for};
pub use select::select_target;
pub use session::{GamePhase, GameSession, RejectReason, SubmitOutcome};
