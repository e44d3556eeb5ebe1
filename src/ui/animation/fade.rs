//! Fade animation for overlays (modal backdrop and dialog box)

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Modal fade-in duration
const FADE_DURATION: Duration = Duration::from_millis(180);

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

/// Single 0.0 to 1.0 transition
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Snap back to transparent and fade in again
    pub fn restart(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
        self.animation.update(1.0.into());
    }

    /// Jump to transparent without animating
    pub fn reset(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
