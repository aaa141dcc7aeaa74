//! Count-up animation for the statistics section.
//!
//! The animation is split into pure pieces so the browser glue in
//! `pages::stats` only has to forward observer entries and interval ticks:
//! a [`VisibilityLatch`] that fires once, a [`CounterAnimation`] that yields
//! one snapshot per step, and a [`Subscription`] that owns whatever has to be
//! torn down.

#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    pub key: &'static str,
    pub label: &'static str,
    pub suffix: &'static str,
    pub final_value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub steps: u32,
    /// Visible fraction of the section that starts the animation.
    pub threshold: f64,
    pub targets: Vec<CounterTarget>,
}

impl CounterConfig {
    pub fn interval_ms(&self) -> u32 {
        self.duration_ms / self.steps.max(1)
    }

    pub fn final_values(&self) -> Vec<u64> {
        self.targets.iter().map(|t| t.final_value).collect()
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            steps: 60,
            threshold: 0.3,
            targets: vec![
                CounterTarget { key: "students", label: "Happy Students", suffix: "+", final_value: 15_000 },
                CounterTarget { key: "courses", label: "Learning Courses", suffix: "+", final_value: 500 },
                CounterTarget { key: "achievements", label: "Achievements Unlocked", suffix: "+", final_value: 25_000 },
                CounterTarget { key: "countries", label: "Countries Worldwide", suffix: "", final_value: 45 },
            ],
        }
    }
}

/// Flips once, the first time the observed region is at least `threshold` visible.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityLatch {
    threshold: f64,
    fired: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, fired: false }
    }

    /// Returns true only for the observation that trips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    targets: Vec<u64>,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(targets: Vec<u64>, steps: u32) -> Self {
        Self { targets, steps: steps.max(1), step: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Advances one step and returns the counts to show, or `None` once the
    /// final snapshot has been handed out.
    pub fn tick(&mut self) -> Option<Vec<u64>> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        Some(self.current())
    }

    pub fn current(&self) -> Vec<u64> {
        self.targets
            .iter()
            .map(|&target| value_at(target, self.step, self.steps))
            .collect()
    }
}

// Integer math keeps every intermediate value at or below the target and the
// last one exactly on it.
fn value_at(target: u64, step: u32, steps: u32) -> u64 {
    if step >= steps {
        return target;
    }
    ((target as u128 * step as u128) / steps as u128) as u64
}

/// Latch plus animation: nothing is emitted until the latch fires, and nothing
/// after the last step.
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    latch: VisibilityLatch,
    targets: Vec<u64>,
    steps: u32,
    animation: Option<CounterAnimation>,
}

impl CounterAnimator {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            latch: VisibilityLatch::new(config.threshold),
            targets: config.final_values(),
            steps: config.steps,
            animation: None,
        }
    }

    /// Feeds one observer entry; returns true when this entry started the animation.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if !self.latch.observe(is_intersecting, ratio) {
            return false;
        }
        self.animation = Some(CounterAnimation::new(self.targets.clone(), self.steps));
        true
    }

    pub fn is_running(&self) -> bool {
        self.animation.as_ref().map_or(false, |a| !a.is_finished())
    }

    pub fn is_finished(&self) -> bool {
        self.animation.as_ref().map_or(false, |a| a.is_finished())
    }

    pub fn tick(&mut self) -> Option<Vec<u64>> {
        self.animation.as_mut().and_then(|a| a.tick())
    }
}

/// Whether the view should hold a live ticker for this (started, finished) pair.
pub fn wants_ticker(&(started, finished): &(bool, bool)) -> bool {
    started && !finished
}

/// A started piece of work that can be stopped exactly once. Stopping again,
/// or dropping after a stop, is a no-op.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Renders a count the way the stats section shows it, e.g. `15,000`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn run_to_end(animation: &mut CounterAnimation) -> Vec<Vec<u64>> {
        std::iter::from_fn(|| animation.tick()).collect()
    }

    #[test]
    fn reaches_targets_exactly_after_all_steps() {
        let targets = vec![15_000, 500, 25_000, 45, 7, 0, 1_000_003];
        for steps in [1, 3, 7, 60, 61] {
            let mut animation = CounterAnimation::new(targets.clone(), steps);
            let snapshots = run_to_end(&mut animation);
            assert_eq!(snapshots.len(), steps as usize);
            assert_eq!(snapshots.last().unwrap(), &targets);
        }
    }

    #[test]
    fn intermediate_counts_are_floored_and_monotonic() {
        let mut animation = CounterAnimation::new(vec![45, 15_000], 60);
        let snapshots = run_to_end(&mut animation);
        assert_eq!(snapshots[0], vec![0, 250]);
        assert_eq!(snapshots[1], vec![1, 500]);
        assert_eq!(snapshots[29], vec![22, 7_500]);
        for pair in snapshots.windows(2) {
            assert!(pair[0].iter().zip(&pair[1]).all(|(a, b)| a <= b));
        }
        assert!(snapshots[..59].iter().all(|s| s[0] < 45));
    }

    #[test]
    fn stops_emitting_after_the_last_step() {
        let mut animation = CounterAnimation::new(vec![10], 4);
        run_to_end(&mut animation);
        assert!(animation.is_finished());
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn zero_steps_snaps_in_one_tick() {
        let mut animation = CounterAnimation::new(vec![99], 0);
        assert_eq!(animation.tick(), Some(vec![99]));
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn latch_fires_once_at_threshold() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(!latch.observe(true, 0.1));
        assert!(!latch.observe(false, 0.5));
        assert!(latch.observe(true, 0.3));
        assert!(latch.has_fired());
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 1.0));
    }

    #[test]
    fn animator_is_silent_before_the_trigger() {
        let config = CounterConfig::default();
        let mut animator = CounterAnimator::new(&config);
        assert_eq!(animator.tick(), None);
        assert!(!animator.is_running());
        assert!(!animator.observe(true, 0.2));
        assert_eq!(animator.tick(), None);

        assert!(animator.observe(true, 0.5));
        assert!(animator.is_running());
        let mut last = None;
        let mut ticks = 0;
        while let Some(snapshot) = animator.tick() {
            last = Some(snapshot);
            ticks += 1;
        }
        assert_eq!(ticks, config.steps);
        assert_eq!(last, Some(config.final_values()));
        assert!(animator.is_finished());
    }

    #[test]
    fn later_visibility_changes_do_not_restart() {
        let config = CounterConfig { steps: 2, ..CounterConfig::default() };
        let mut animator = CounterAnimator::new(&config);
        assert!(animator.observe(true, 0.9));
        animator.tick();
        animator.tick();
        assert!(!animator.observe(false, 0.0));
        assert!(!animator.observe(true, 0.9));
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn default_config_matches_the_landing_page() {
        let config = CounterConfig::default();
        assert_eq!(config.interval_ms(), 33);
        assert_eq!(config.final_values(), vec![15_000, 500, 25_000, 45]);
    }

    #[test]
    fn ticker_lives_only_between_start_and_finish() {
        let config = CounterConfig { steps: 3, ..CounterConfig::default() };
        let mut animator = CounterAnimator::new(&config);
        assert!(!wants_ticker(&(false, animator.is_finished())));

        let started = animator.observe(true, 0.5);
        assert!(wants_ticker(&(started, animator.is_finished())));

        while animator.tick().is_some() {}
        assert!(!wants_ticker(&(started, animator.is_finished())));
    }

    #[test]
    fn subscription_stops_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counted = calls.clone();
        let mut subscription = Subscription::new(move || counted.set(counted.get() + 1));
        assert!(subscription.is_active());
        subscription.stop();
        subscription.stop();
        assert!(!subscription.is_active());
        drop(subscription);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropping_a_live_subscription_tears_it_down() {
        let calls = Rc::new(Cell::new(0));
        let counted = calls.clone();
        drop(Subscription::new(move || counted.set(counted.get() + 1)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(45), "45");
        assert_eq!(format_count(15_000), "15,000");
        assert_eq!(format_count(1_000_003), "1,000,003");
    }
}
