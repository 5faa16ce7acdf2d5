//! Progressive reveal
//!
//! The photo's blur target is a descending table indexed by guess count. The
//! displayed blur never jumps: it moves one pixel per frame toward the target.

use crate::consts::BLUR_LEVELS;

/// Blur target (px) for the given number of guesses.
///
/// Indices past the end of `levels` clamp to 0, and a finished round is
/// always fully revealed.
pub fn blur_target_for(guess_count: usize, terminal: bool, levels: &[u32]) -> u32 {
    if terminal {
        return 0;
    }
    levels.get(guess_count).copied().unwrap_or(0)
}

/// Result of a single animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Displayed value moved and may need more frames
    Animating,
    /// Displayed value already equals the target; stop scheduling frames
    Idle,
}

/// Displayed blur, stepped toward a target once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealAnimator {
    displayed: u32,
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new(BLUR_LEVELS[0])
    }
}

impl RevealAnimator {
    /// Start at the given blur
    pub fn new(initial: u32) -> Self {
        Self { displayed: initial }
    }

    /// Blur currently on screen (px)
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// True once the displayed blur has reached `target`
    pub fn is_settled(&self, target: u32) -> bool {
        self.displayed == target
    }

    /// Advance one pixel toward `target`.
    ///
    /// Picks up whatever target is current, so a target change mid-animation
    /// continues from the present displayed value.
    pub fn step(&mut self, target: u32) -> AnimationStatus {
        if self.displayed == target {
            return AnimationStatus::Idle;
        }
        self.displayed = if self.displayed > target {
            (self.displayed - 1).max(target)
        } else {
            (self.displayed + 1).min(target)
        };
        if self.displayed == target {
            log::debug!("Reveal settled at {}px", target);
        }
        AnimationStatus::Animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_targets_for_losing_game() {
        let targets: Vec<u32> = (0..6)
            .map(|n| blur_target_for(n, false, &BLUR_LEVELS))
            .collect();
        assert_eq!(targets, vec![20, 16, 12, 8, 4, 0]);
        // Exhausted after six guesses
        assert_eq!(blur_target_for(6, true, &BLUR_LEVELS), 0);
    }

    #[test]
    fn test_blur_target_clamps_past_table() {
        assert_eq!(blur_target_for(6, false, &BLUR_LEVELS), 0);
        assert_eq!(blur_target_for(100, false, &BLUR_LEVELS), 0);
        assert_eq!(blur_target_for(0, false, &[]), 0);
    }

    #[test]
    fn test_terminal_forces_full_reveal() {
        assert_eq!(blur_target_for(0, true, &BLUR_LEVELS), 0);
        assert_eq!(blur_target_for(2, true, &BLUR_LEVELS), 0);
    }

    #[test]
    fn test_step_moves_one_pixel_per_frame() {
        let mut anim = RevealAnimator::new(20);
        let mut frames = Vec::new();
        while anim.step(16) == AnimationStatus::Animating {
            frames.push(anim.displayed());
        }
        assert_eq!(frames, vec![19, 18, 17, 16]);
        assert!(anim.is_settled(16));
    }

    #[test]
    fn test_step_is_idle_at_target() {
        let mut anim = RevealAnimator::new(8);
        assert_eq!(anim.step(8), AnimationStatus::Idle);
        assert_eq!(anim.displayed(), 8);
    }

    #[test]
    fn test_step_can_move_upward() {
        let mut anim = RevealAnimator::new(0);
        anim.step(2);
        anim.step(2);
        assert_eq!(anim.displayed(), 2);
        assert_eq!(anim.step(2), AnimationStatus::Idle);
    }

    #[test]
    fn test_frames_proportional_to_distance() {
        let mut anim = RevealAnimator::new(20);
        let mut frames = 0;
        while anim.step(0) == AnimationStatus::Animating {
            frames += 1;
        }
        assert_eq!(frames, 20);
        assert_eq!(anim.displayed(), 0);
    }

    #[test]
    fn test_retarget_mid_animation_continues_from_current() {
        let mut anim = RevealAnimator::new(20);
        anim.step(16);
        anim.step(16);
        assert_eq!(anim.displayed(), 18);
        // Round ends: target drops to 0
        anim.step(0);
        assert_eq!(anim.displayed(), 17);
        let mut frames = 0;
        while anim.step(0) == AnimationStatus::Animating {
            frames += 1;
        }
        assert_eq!(frames, 17);
    }

    #[test]
    fn test_default_starts_at_first_level() {
        let anim = RevealAnimator::default();
        assert_eq!(anim.displayed(), 20);
        assert!(anim.is_settled(20));
    }
}
