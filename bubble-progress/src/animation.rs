//! Progress animation
//!
//! A value interpolator driven by the host's frame loop: start a transition,
//! then call [`Animator::tick`] once per frame with the elapsed time. Each tick
//! yields the eased integer value for that moment.

use std::time::Duration;

use tracing::debug;

use crate::config::WidgetConfig;

/// Easing curve mapping linear time fraction to value fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Fast start, slow finish. `factor` 1.0 is `1 - (1 - t)^2`.
    Decelerate { factor: f32 },
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Decelerate { factor } => {
                if factor == 1.0 {
                    1.0 - (1.0 - t) * (1.0 - t)
                } else {
                    1.0 - (1.0 - t).powf(2.0 * factor)
                }
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Decelerate { factor: 1.0 }
    }
}

/// Transition length for a jump between two percentages: the base duration
/// shortened by 10ms per percentage point, never below the configured minimum.
pub fn duration_for(current: i32, target: i32, config: &WidgetConfig) -> Duration {
    let distance = Duration::from_millis((i64::from(target) * 10 - i64::from(current) * 10).unsigned_abs());
    config
        .base_duration()
        .saturating_sub(distance)
        .max(config.min_duration())
}

/// One running interpolation between two integers.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub from: i32,
    pub to: i32,
    pub duration: Duration,
    pub easing: Easing,
    elapsed: Duration,
}

impl Transition {
    pub fn new(from: i32, to: i32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Integer value at the current time, truncated toward zero like an
    /// integer evaluator. Exactly `to` once finished.
    pub fn value(&self) -> i32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.fraction());
        self.from + (f64::from(eased) * f64::from(self.to - self.from)) as i32
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }
}

#[derive(Clone, Debug, Default)]
pub struct Animator {
    transition: Option<Transition>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition, replacing any that is in flight.
    pub fn start(&mut self, from: i32, to: i32, duration: Duration, easing: Easing) {
        debug!(from, to, duration_ms = duration.as_millis() as u64, "transition started");
        self.transition = Some(Transition::new(from, to, duration, easing));
    }

    /// Advance by `dt` and return the value for this frame, or `None` when
    /// idle. The tick that reaches the end returns the target and stops.
    pub fn tick(&mut self, dt: Duration) -> Option<i32> {
        let transition = self.transition.as_mut()?;
        transition.advance(dt);
        let value = transition.value();
        if transition.is_finished() {
            debug!(to = transition.to, "transition finished");
            self.transition = None;
        }
        Some(value)
    }

    pub fn cancel(&mut self) {
        self.transition = None;
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    pub fn target(&self) -> Option<i32> {
        self.transition.as_ref().map(|t| t.to)
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(animator: &mut Animator) -> Vec<i32> {
        let mut values = Vec::new();
        while let Some(v) = animator.tick(FRAME) {
            values.push(v);
        }
        values
    }

    #[test]
    fn duration_shrinks_with_distance() {
        let config = WidgetConfig::default();
        assert_eq!(duration_for(0, 0, &config), Duration::from_millis(1150));
        assert_eq!(duration_for(0, 10, &config), Duration::from_millis(1050));
        assert_eq!(duration_for(0, 100, &config), Duration::from_millis(150));
        assert_eq!(duration_for(100, 0, &config), Duration::from_millis(150));
        assert!(duration_for(0, 100, &config) < duration_for(0, 10, &config));
    }

    #[test]
    fn duration_is_clamped_to_minimum() {
        let config = WidgetConfig {
            base_duration_ms: 600,
            min_duration_ms: 120,
            ..WidgetConfig::default()
        };
        assert_eq!(duration_for(0, 100, &config), Duration::from_millis(120));
        assert_eq!(duration_for(30, 80, &config), Duration::from_millis(120));
        assert_eq!(duration_for(30, 40, &config), Duration::from_millis(500));
    }

    #[test]
    fn decelerate_front_loads_progress() {
        let ease = Easing::default();
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(0.5), 0.75);
        assert!(ease.apply(0.25) > Easing::Linear.apply(0.25));

        let strong = Easing::Decelerate { factor: 2.0 };
        assert!(strong.apply(0.25) > ease.apply(0.25));
    }

    #[test]
    fn reaches_target_exactly() {
        let mut animator = Animator::new();
        animator.start(0, 73, Duration::from_millis(420), Easing::default());
        let values = run(&mut animator);
        assert_eq!(values.last(), Some(&73));
        assert!(!animator.is_running());
        assert_eq!(animator.tick(FRAME), None);
    }

    #[test]
    fn values_are_monotonic_and_in_range() {
        let mut animator = Animator::new();
        animator.start(90, 10, Duration::from_millis(350), Easing::default());
        let values = run(&mut animator);
        assert!(values.windows(2).all(|w| w[1] <= w[0]), "{values:?}");
        assert!(values.iter().all(|v| (10..=90).contains(v)));
    }

    #[test]
    fn one_value_per_tick() {
        let mut animator = Animator::new();
        animator.start(0, 100, Duration::from_millis(160), Easing::Linear);
        let values = run(&mut animator);
        assert_eq!(values.len(), 10);
        assert!((9..=10).contains(&values[0]), "{values:?}");
        assert_eq!(values[9], 100);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut animator = Animator::new();
        animator.start(5, 60, Duration::ZERO, Easing::default());
        assert_eq!(animator.tick(Duration::ZERO), Some(60));
        assert!(!animator.is_running());
    }

    #[test]
    fn restart_replaces_transition() {
        let mut animator = Animator::new();
        animator.start(0, 100, Duration::from_millis(1000), Easing::Linear);
        animator.tick(Duration::from_millis(500));
        animator.start(50, 20, Duration::from_millis(100), Easing::Linear);
        assert_eq!(animator.target(), Some(20));
        assert_eq!(run(&mut animator).last(), Some(&20));
    }

    #[test]
    fn cancel_stops_ticks() {
        let mut animator = Animator::new();
        animator.start(0, 10, Duration::from_millis(100), Easing::Linear);
        animator.cancel();
        assert_eq!(animator.tick(FRAME), None);
    }
}
