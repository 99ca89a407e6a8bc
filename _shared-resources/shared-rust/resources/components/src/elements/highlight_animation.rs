// Highlight Animation
// Fire-and-forget movement of the highlight between segments
//
// Usage:
//   if let Some(transition) = engine.take_transition() {
//       animator = Some(HighlightAnimator::start(transition, Instant::now()));
//   }
//   let rect = animator.rect_at(Instant::now());

use std::time::{Duration, Instant};

use crate::core::SegmentRect;

/// Duration of a highlight move
pub const HIGHLIGHT_ANIMATION_DURATION: Duration = Duration::from_millis(300);
/// Spring damping ratio of a highlight move
pub const HIGHLIGHT_SPRING_DAMPING: f64 = 0.7;
/// Initial spring velocity of a highlight move
pub const HIGHLIGHT_SPRING_VELOCITY: f64 = 0.7;

/// Natural frequency of the spring in normalized time (settles well before t = 1)
const SPRING_FREQUENCY: f64 = 10.0;

/// Progress curve of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Cubic ease-out
    EaseOut,
    /// Damped spring; overshoots when `damping < 1`
    Spring { damping: f64, initial_velocity: f64 },
}

impl Easing {
    /// Progress for normalized time `t` in [0, 1]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::Spring { damping, initial_velocity } => {
                if damping >= 1.0 {
                    return Easing::EaseOut.apply(t);
                }
                let omega = SPRING_FREQUENCY;
                let damped = omega * (1.0 - damping * damping).sqrt();
                let decay = (-damping * omega * t).exp();
                let b = (damping * omega - initial_velocity) / damped;
                1.0 - decay * ((damped * t).cos() + b * (damped * t).sin())
            }
        }
    }
}

/// Movement of the highlight from one slot to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightTransition {
    pub from: SegmentRect,
    pub to: SegmentRect,
    pub duration: Duration,
    pub easing: Easing,
}

impl HighlightTransition {
    /// Transition with the standard duration and spring curve
    pub fn new(from: SegmentRect, to: SegmentRect) -> Self {
        Self {
            from,
            to,
            duration: HIGHLIGHT_ANIMATION_DURATION,
            easing: Easing::Spring {
                damping: HIGHLIGHT_SPRING_DAMPING,
                initial_velocity: HIGHLIGHT_SPRING_VELOCITY,
            },
        }
    }

    /// Rectangle at normalized time `t`
    pub fn sample(&self, t: f64) -> SegmentRect {
        self.from.lerp(&self.to, self.easing.apply(t))
    }
}

/// Running transition driven by wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct HighlightAnimator {
    transition: HighlightTransition,
    started: Instant,
}

impl HighlightAnimator {
    pub fn start(transition: HighlightTransition, now: Instant) -> Self {
        Self { transition, started: now }
    }

    fn progress(&self, now: Instant) -> f64 {
        let total = self.transition.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        now.saturating_duration_since(self.started).as_secs_f64() / total
    }

    /// Current highlight rectangle
    pub fn rect_at(&self, now: Instant) -> SegmentRect {
        self.transition.sample(self.progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn target(&self) -> SegmentRect {
        self.transition.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition() -> HighlightTransition {
        HighlightTransition::new(
            SegmentRect::new(0.0, 0.0, 60.0, 44.0),
            SegmentRect::new(120.0, 0.0, 60.0, 44.0),
        )
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::EaseOut,
            Easing::Spring { damping: 0.7, initial_velocity: 0.7 },
            Easing::Spring { damping: 1.2, initial_velocity: 0.0 },
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_spring_settles_near_target() {
        let spring = Easing::Spring { damping: 0.7, initial_velocity: 0.7 };
        assert!((spring.apply(0.95) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=10 {
            let value = Easing::EaseOut.apply(step as f64 / 10.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_default_transition_constants() {
        let t = transition();
        assert_eq!(t.duration, Duration::from_millis(300));
        assert_eq!(t.easing, Easing::Spring { damping: 0.7, initial_velocity: 0.7 });
    }

    #[test]
    fn test_animator_lands_on_target() {
        let start = Instant::now();
        let animator = HighlightAnimator::start(transition(), start);
        assert_eq!(animator.rect_at(start).x, 0.0);
        assert!(!animator.is_finished(start));

        let done = start + Duration::from_millis(300);
        assert!(animator.is_finished(done));
        assert_eq!(animator.rect_at(done), animator.target());
        assert_eq!(animator.rect_at(done + Duration::from_secs(1)).x, 120.0);
    }
}
