//! Offset/opacity tweens for overlay entrance and exit.
//!
//! The manager publishes end values; a [`Tween`] remembers where the surface
//! started and when, so the view can sample intermediate frames:
//! - Slide: vertical offset moves between `from.offset` and `to.offset`
//! - Fade: opacity moves between `from.opacity` and `to.opacity`
//! - Easing: cubic ease-in-out over the configured duration

use std::time::{Duration, Instant};

/// Render modifiers applied to the overlay surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    /// Vertical offset in points. Negative moves up.
    pub offset: f32,
    /// 0.0 = invisible, 1.0 = opaque
    pub opacity: f32,
}

impl Modifiers {
    /// Resting state of a visible overlay.
    pub const IDENTITY: Modifiers = Modifiers {
        offset: 0.0,
        opacity: 1.0,
    };

    pub fn slid(offset: f32) -> Self {
        Self {
            offset,
            opacity: 0.0,
        }
    }

    pub fn lerp(self, to: Modifiers, t: f32) -> Modifiers {
        Modifiers {
            offset: self.offset + (to.offset - self.offset) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Cubic ease-in-out on `t` in [0, 1].
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u * 0.5
    }
}

/// One in-flight modifier animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Modifiers,
    pub to: Modifiers,
    pub started: Instant,
    pub duration: Duration,
}

/// A sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub modifiers: Modifiers,
    /// Linear progress in [0, 1], before easing.
    pub progress: f32,
    pub finished: bool,
}

impl Tween {
    pub fn starting_at(from: Modifiers, to: Modifiers, duration: Duration, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Sample the tween at `now`. Instants before `started` sample the start.
    pub fn sample(&self, now: Instant) -> Frame {
        let elapsed = now.saturating_duration_since(self.started);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        Frame {
            modifiers: self.from.lerp(self.to, ease_in_out(progress)),
            progress,
            finished: progress >= 1.0,
        }
    }
}
