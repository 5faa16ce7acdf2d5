//! Game session and attempt tracking
//!
//! A session owns one round: the target, the guesses so far and the text box
//! contents. Win / loss are derived from the guess history on demand.

use rand::Rng;

use super::matching::{is_match_within, normalize};
use super::reveal::{RevealAnimator, blur_target_for};
use super::select::select_target;
use crate::catalog::{Catalog, PuzzleEntry};
use crate::rules::{Rules, RulesError};
use crate::share::compose_share_text;
use crate::view::Snapshot;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting guesses
    Playing,
    /// Last guess matched the target
    Won,
    /// Ran out of guesses without a match
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Why a submission was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Guess was empty or whitespace only
    EmptyGuess,
    /// Round already won
    AlreadyWon,
    /// Round already lost
    OutOfGuesses,
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guess recorded; carries the phase after recording it
    Accepted(GamePhase),
    /// Nothing changed
    Rejected(RejectReason),
}

/// One round of the puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    target_index: usize,
    target: PuzzleEntry,
    rules: Rules,
    /// Raw guesses as typed (append only)
    guesses: Vec<String>,
    /// Text box contents
    input: String,
}

impl GameSession {
    /// Create a session for a known target; fails if `rules` are invalid
    pub fn new(target_index: usize, target: PuzzleEntry, rules: Rules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self {
            target_index,
            target,
            rules,
            guesses: Vec::new(),
            input: String::new(),
        })
    }

    /// Pick a random target from the catalog, avoiding `exclude` when possible
    pub fn start<R: Rng>(
        catalog: &Catalog,
        rules: Rules,
        rng: &mut R,
        exclude: Option<usize>,
    ) -> Result<Self, RulesError> {
        let index = select_target(rng, catalog.len(), exclude);
        let target = catalog.entries()[index].clone();
        let session = Self::new(index, target, rules)?;
        log::info!("New round started (puzzle #{})", index);
        Ok(session)
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn target(&self) -> &PuzzleEntry {
        &self.target
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    pub fn guesses_remaining(&self) -> usize {
        self.rules.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Most recent guess as typed
    pub fn last_guess(&self) -> Option<&str> {
        self.guesses.last().map(String::as_str)
    }

    pub fn last_guess_normalized(&self) -> Option<String> {
        self.last_guess().map(normalize)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the text box contents
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// True if the last guess matched the target
    pub fn is_correct(&self) -> bool {
        self.last_guess().is_some_and(|guess| {
            is_match_within(guess, &self.target.name, self.rules.match_tolerance)
        })
    }

    /// True if every guess was used without a match
    pub fn is_exhausted(&self) -> bool {
        self.guesses.len() >= self.rules.max_guesses && !self.is_correct()
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_correct() {
            GamePhase::Won
        } else if self.is_exhausted() {
            GamePhase::Lost
        } else {
            GamePhase::Playing
        }
    }

    /// Blur the photo should settle at right now
    pub fn blur_target(&self) -> u32 {
        blur_target_for(
            self.guesses.len(),
            self.phase().is_terminal(),
            &self.rules.blur_levels,
        )
    }

    /// A fresh animator positioned at this session's starting blur
    pub fn animator(&self) -> RevealAnimator {
        RevealAnimator::new(self.rules.initial_blur())
    }

    /// Record a guess.
    ///
    /// Blank guesses and guesses after the round has ended are ignored. The
    /// raw text is stored unchanged and the text box is cleared.
    pub fn submit_guess(&mut self, raw: &str) -> SubmitOutcome {
        if let Some(reason) = self.reject_reason(raw) {
            log::debug!("Guess ignored: {:?}", reason);
            return SubmitOutcome::Rejected(reason);
        }

        self.guesses.push(raw.to_string());
        self.input.clear();

        let phase = self.phase();
        match phase {
            GamePhase::Won => log::info!("Correct after {} guesses", self.guesses.len()),
            GamePhase::Lost => log::info!("Out of guesses, answer was {}", self.target.name),
            GamePhase::Playing => log::info!(
                "Guess {} of {} missed",
                self.guesses.len(),
                self.rules.max_guesses
            ),
        }
        SubmitOutcome::Accepted(phase)
    }

    /// Submit whatever is in the text box
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let raw = self.input.clone();
        self.submit_guess(&raw)
    }

    fn reject_reason(&self, raw: &str) -> Option<RejectReason> {
        if raw.trim().is_empty() {
            return Some(RejectReason::EmptyGuess);
        }
        match self.phase() {
            GamePhase::Won => Some(RejectReason::AlreadyWon),
            GamePhase::Lost => Some(RejectReason::OutOfGuesses),
            GamePhase::Playing => None,
        }
    }

    /// Share message for the current guess count
    pub fn share_text(&self) -> String {
        compose_share_text(&self.rules.share_template, self.guesses.len())
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self, animator: &RevealAnimator) -> Snapshot {
        let terminal = self.phase().is_terminal();
        Snapshot {
            image_ref: self.target.image_ref.clone(),
            blur_px: animator.displayed(),
            guesses_remaining: self.guesses_remaining(),
            last_guess: self.last_guess().map(str::to_string),
            is_correct: self.is_correct(),
            is_exhausted: self.is_exhausted(),
            target_name: terminal.then(|| self.target.name.clone()),
            outbound_link: terminal.then(|| self.target.outbound_link.clone()),
            brand_label: terminal.then(|| self.target.brand_display().to_string()),
        }
    }
}
