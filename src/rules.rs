//! Game rules
//!
//! Tunable parameters for a round. Defaults come from `consts`; the host page
//! may override any subset with a JSON blob.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BLUR_LEVELS, MATCH_TOLERANCE, MAX_GUESSES, SHARE_TEMPLATE};

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("max_guesses must be at least 1")]
    NoGuesses,
    #[error("blur_levels must not be empty")]
    EmptyBlurLevels,
    #[error("blur_levels must be strictly descending, got {0:?}")]
    BlurLevelsNotDescending(Vec<u32>),
    #[error("max_guesses ({max_guesses}) exceeds the {levels} blur levels")]
    TooManyGuesses { max_guesses: usize, levels: usize },
    #[error("invalid rules JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rules for a single round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Guesses allowed before the round is lost
    pub max_guesses: usize,
    /// Blur (px) per prior guess count
    pub blur_levels: Vec<u32>,
    /// Largest edit distance accepted as correct
    pub match_tolerance: usize,
    /// Share message, `{guesses}` is substituted
    pub share_template: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            blur_levels: BLUR_LEVELS.to_vec(),
            match_tolerance: MATCH_TOLERANCE,
            share_template: SHARE_TEMPLATE.to_string(),
        }
    }
}

impl Rules {
    /// Parse and validate; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.max_guesses == 0 {
            return Err(RulesError::NoGuesses);
        }
        if self.blur_levels.is_empty() {
            return Err(RulesError::EmptyBlurLevels);
        }
        if self.blur_levels.windows(2).any(|w| w[0] <= w[1]) {
            return Err(RulesError::BlurLevelsNotDescending(self.blur_levels.clone()));
        }
        // Every guess count reached while playing needs its own level
        if self.max_guesses > self.blur_levels.len() {
            return Err(RulesError::TooManyGuesses {
                max_guesses: self.max_guesses,
                levels: self.blur_levels.len(),
            });
        }
        Ok(())
    }

    /// Starting blur before any guess
    pub fn initial_blur(&self) -> u32 {
        self.blur_levels.first().copied().unwrap_or(0)
    }
}
