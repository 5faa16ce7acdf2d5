//! Render snapshot
//!
//! Everything the page needs to draw one frame. The answer and its link are
//! only filled in once the round is over.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub image_ref: String,
    /// Blur currently on screen (px)
    pub blur_px: u32,
    pub guesses_remaining: usize,
    /// Most recent guess as typed
    pub last_guess: Option<String>,
    pub is_correct: bool,
    pub is_exhausted: bool,
    pub target_name: Option<String>,
    pub outbound_link: Option<String>,
    pub brand_label: Option<String>,
}

impl Snapshot {
    pub fn is_finished(&self) -> bool {
        self.is_correct || self.is_exhausted
    }

    /// CSS `filter` value for the photo
    pub fn css_filter(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }

    /// Status line under the guess box
    pub fn status_message(&self) -> Option<String> {
        let name = self.target_name.as_deref().unwrap_or_default();
        if self.is_correct {
            Some(format!("🎉 Correct! It's {}!", name))
        } else if self.is_exhausted {
            Some(format!("❌ Out of guesses! It was {}.", name))
        } else {
            self.last_guess
                .as_ref()
                .map(|guess| format!("Last guess: {}", guess))
        }
    }

    /// Text for the outbound link button
    pub fn brand_link_text(&self) -> Option<String> {
        self.brand_label.as_ref().map(|label| format!("Visit {}", label))
    }
}
