//! Time-based position tweening
//!
//! A tween moves an entity from a fixed start to a fixed target over a fixed
//! duration, shaped by a cubic ease-in/ease-out curve. Tweens are plain
//! records advanced by `step_tween` with the host's current timestamp, so
//! tests can drive them with a synthetic clock.
//!
//! Once started, a tween always runs to completion.

use glam::Vec2;

/// Cubic ease-in/ease-out. Maps [0, 1] onto [0, 1] with zero slope at both ends.
#[inline]
pub fn ease_in_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// An in-flight interpolation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: Vec2,
    pub target: Vec2,
    /// Host timestamp when the tween began (ms)
    pub start_time: f64,
    /// Total length (ms)
    pub duration: f64,
}

impl Tween {
    /// Linear progress in [0, 1] at `now`
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.start_time).max(0.0);
        (elapsed / self.duration).min(1.0)
    }

    /// Eased position for the axis currently being animated.
    ///
    /// While the current Y (rounded) has not reached the target Y (rounded),
    /// only Y moves; after that only X moves. This yields the formation's
    /// "drop, then slide" motion.
    pub fn sample(&self, current: Vec2, eased: f32) -> Vec2 {
        if current.y.round() != self.target.y.round() {
            Vec2::new(
                current.x,
                self.start.y + (self.target.y - self.start.y) * eased,
            )
        } else {
            Vec2::new(
                self.start.x + (self.target.x - self.start.x) * eased,
                current.y,
            )
        }
    }
}

/// Result of advancing a tween by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    /// Nothing to advance
    Idle,
    /// Still moving
    Running,
    /// Reached its target on this step
    Finished,
}

/// Something with a position that can carry one tween at a time
pub trait Tweenable {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, pos: Vec2);
    fn tween(&self) -> Option<&Tween>;
    fn tween_slot(&mut self) -> &mut Option<Tween>;

    fn is_animating(&self) -> bool {
        self.tween().is_some()
    }
}

/// Begin moving `subject` toward `target`.
///
/// Returns `false` (and changes nothing) if the subject is already animating.
pub fn start_tween<T: Tweenable>(subject: &mut T, target: Vec2, duration: f64, now: f64) -> bool {
    if subject.is_animating() {
        log::trace!("tween already running, ignoring start toward {target}");
        return false;
    }
    let start = subject.position();
    *subject.tween_slot() = Some(Tween {
        start,
        target,
        start_time: now,
        duration,
    });
    true
}

/// Advance `subject`'s tween to `now`
pub fn step_tween<T: Tweenable>(subject: &mut T, now: f64) -> TweenStatus {
    let Some(tween) = subject.tween().copied() else {
        return TweenStatus::Idle;
    };

    let progress = tween.progress(now);
    if progress >= 1.0 {
        subject.set_position(tween.target);
        *subject.tween_slot() = None;
        return TweenStatus::Finished;
    }

    let eased = ease_in_out_cubic(progress) as f32;
    let next = tween.sample(subject.position(), eased);
    subject.set_position(next);
    TweenStatus::Running
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Default)]
    struct Dot {
        pos: Vec2,
        tween: Option<Tween>,
    }

    impl Tweenable for Dot {
        fn position(&self) -> Vec2 {
            self.pos
        }
        fn set_position(&mut self, pos: Vec2) {
            self.pos = pos;
        }
        fn tween(&self) -> Option<&Tween> {
            self.tween.as_ref()
        }
        fn tween_slot(&mut self) -> &mut Option<Tween> {
            &mut self.tween
        }
    }

    #[test]
    fn test_easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
        // Symmetric about the midpoint
        let a = ease_in_out_cubic(0.2);
        let b = ease_in_out_cubic(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
        // Out-of-range input is clamped
        assert_eq!(ease_in_out_cubic(-0.5), 0.0);
        assert_eq!(ease_in_out_cubic(1.5), 1.0);
    }

    #[test]
    fn test_easing_flat_at_both_ends() {
        let h = 1e-4;
        assert!(ease_in_out_cubic(h) / h < 1e-3);
        assert!((1.0 - ease_in_out_cubic(1.0 - h)) / h < 1e-3);
    }

    #[test]
    fn test_tween_converges_exactly() {
        let mut dot = Dot {
            pos: Vec2::new(10.0, 20.0),
            ..Default::default()
        };
        assert!(start_tween(&mut dot, Vec2::new(60.0, 20.0), 1000.0, 500.0));
        assert_eq!(step_tween(&mut dot, 1000.0), TweenStatus::Running);
        assert!(dot.pos.x > 10.0 && dot.pos.x < 60.0);

        assert_eq!(step_tween(&mut dot, 1500.0), TweenStatus::Finished);
        assert_eq!(dot.pos, Vec2::new(60.0, 20.0));
        assert!(!dot.is_animating());
        assert_eq!(step_tween(&mut dot, 1600.0), TweenStatus::Idle);
    }

    #[test]
    fn test_start_while_animating_keeps_existing_target() {
        let mut dot = Dot::default();
        assert!(start_tween(&mut dot, Vec2::new(50.0, 0.0), 1000.0, 0.0));
        assert!(!start_tween(&mut dot, Vec2::new(-50.0, 0.0), 1000.0, 10.0));

        let tween = dot.tween.expect("tween should still be running");
        assert_eq!(tween.target, Vec2::new(50.0, 0.0));
        assert_eq!(tween.start_time, 0.0);
    }

    #[test]
    fn test_drop_then_slide() {
        let mut dot = Dot {
            pos: Vec2::new(100.0, 100.0),
            ..Default::default()
        };
        start_tween(&mut dot, Vec2::new(150.0, 224.0), 1000.0, 0.0);

        // Vertical displacement still pending: X must not move
        step_tween(&mut dot, 250.0);
        assert_eq!(dot.pos.x, 100.0);
        assert!(dot.pos.y > 100.0 && dot.pos.y < 224.0);

        step_tween(&mut dot, 600.0);
        assert_eq!(dot.pos.x, 100.0);

        // Completion snaps both axes to the target
        step_tween(&mut dot, 1000.0);
        assert_eq!(dot.pos, Vec2::new(150.0, 224.0));
    }

    #[test]
    fn test_slides_once_vertical_target_reached() {
        let mut dot = Dot {
            pos: Vec2::new(0.0, 223.8),
            ..Default::default()
        };
        start_tween(&mut dot, Vec2::new(50.0, 224.0), 1000.0, 0.0);
        step_tween(&mut dot, 500.0);
        // Rounded Y already matches: X interpolates, Y is left alone
        assert!((dot.pos.x - 25.0).abs() < 1e-4);
        assert_eq!(dot.pos.y, 223.8);
    }

    #[test]
    fn test_timestamp_before_start_is_clamped() {
        let mut dot = Dot::default();
        start_tween(&mut dot, Vec2::new(50.0, 0.0), 1000.0, 100.0);
        assert_eq!(step_tween(&mut dot, 90.0), TweenStatus::Running);
        assert_eq!(dot.pos, Vec2::ZERO);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_step() {
        let mut dot = Dot::default();
        start_tween(&mut dot, Vec2::new(5.0, 5.0), 0.0, 0.0);
        assert_eq!(step_tween(&mut dot, 0.0), TweenStatus::Finished);
        assert_eq!(dot.pos, Vec2::new(5.0, 5.0));
    }

    proptest! {
        #[test]
        fn prop_easing_stays_in_unit_range(p in 0.0f64..=1.0) {
            let e = ease_in_out_cubic(p);
            prop_assert!((0.0..=1.0).contains(&e));
        }

        #[test]
        fn prop_easing_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out_cubic(lo) <= ease_in_out_cubic(hi));
        }
    }
}
