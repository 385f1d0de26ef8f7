//! One-shot counter animation as an explicit state machine.
//!
//! A [`CounterDriver`] is owned by exactly one counter element. It moves
//! `Idle -> Running -> Done` and only ever touches its own displayed value.
//! Scheduling frames is the caller's job: [`CounterDriver::on_visibility`]
//! says when a frame loop should start, [`CounterDriver::tick`] says when it
//! should stop.

use super::timing::{interpolate_floor, progress};

/// What a counter animates: `from` to `to` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    pub from: i64,
    pub to: i64,
    pub duration_ms: f64,
}

impl CounterSpec {
    pub fn new(from: i64, to: i64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms }
    }
}

/// Whether a finished or running counter restarts when its element
/// leaves and re-enters the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replay {
    #[default]
    Once,
    OnReentry,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    Idle,
    /// `started_at` is stamped by the first tick after activation.
    Running { started_at: Option<f64> },
    Done,
}

/// Result of advancing the driver by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub value: i64,
    /// `true` while another frame should be scheduled.
    pub running: bool,
}

#[derive(Debug, Clone)]
pub struct CounterDriver {
    spec: CounterSpec,
    replay: Replay,
    phase: CounterPhase,
    value: i64,
    starts: u32,
}

impl CounterDriver {
    pub fn new(spec: CounterSpec, replay: Replay) -> Self {
        Self {
            spec,
            replay,
            phase: CounterPhase::Idle,
            value: spec.from,
            starts: 0,
        }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Number of times the animation has been started.
    #[inline]
    pub fn starts(&self) -> u32 {
        self.starts
    }

    /// Feed a visibility change for the hosting element.
    ///
    /// Returns `true` when the caller should begin scheduling ticks.
    pub fn on_visibility(&mut self, visible: bool) -> bool {
        match (self.phase, visible) {
            (CounterPhase::Idle, true) => {
                self.phase = CounterPhase::Running { started_at: None };
                self.value = self.spec.from;
                self.starts += 1;
                true
            }
            (CounterPhase::Running { .. } | CounterPhase::Done, false)
                if self.replay == Replay::OnReentry =>
            {
                self.phase = CounterPhase::Idle;
                self.value = self.spec.from;
                false
            }
            _ => false,
        }
    }

    /// Advance to frame timestamp `now`.
    pub fn tick(&mut self, now: f64) -> Tick {
        let started_at = match self.phase {
            CounterPhase::Running { started_at: Some(t) } => t,
            CounterPhase::Running { started_at: None } => {
                self.phase = CounterPhase::Running { started_at: Some(now) };
                now
            }
            CounterPhase::Idle | CounterPhase::Done => {
                return Tick { value: self.value, running: false };
            }
        };

        let t = progress(started_at, now, self.spec.duration_ms);
        self.value = interpolate_floor(self.spec.from, self.spec.to, t);

        if t >= 1.0 {
            self.phase = CounterPhase::Done;
            Tick { value: self.value, running: false }
        } else {
            Tick { value: self.value, running: true }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(from: i64, to: i64, duration_ms: f64) -> CounterDriver {
        CounterDriver::new(CounterSpec::new(from, to, duration_ms), Replay::Once)
    }

    #[test]
    fn test_idle_until_visible() {
        let mut d = driver(0, 350, 2000.0);
        assert_eq!(d.tick(500.0), Tick { value: 0, running: false });
        assert!(!d.on_visibility(false));
        assert_eq!(d.phase(), CounterPhase::Idle);
        assert_eq!(d.starts(), 0);
    }

    #[test]
    fn test_halfway_and_finish() {
        let mut d = driver(0, 350, 2000.0);
        assert!(d.on_visibility(true));

        // First tick stamps the start time.
        assert_eq!(d.tick(10_000.0), Tick { value: 0, running: true });
        assert_eq!(d.tick(11_000.0).value, 175);

        let done = d.tick(12_000.0);
        assert_eq!(done, Tick { value: 350, running: false });
        assert_eq!(d.phase(), CounterPhase::Done);

        // Stays at the end value.
        assert_eq!(d.tick(99_000.0), Tick { value: 350, running: false });
    }

    #[test]
    fn test_monotonic_across_ticks() {
        for &(from, to, duration) in &[(0, 350, 2000.0), (0, 240, 2000.0), (5, 85, 733.0), (0, 1, 16.0)] {
            let mut d = driver(from, to, duration);
            d.on_visibility(true);
            let mut prev = from;
            let mut now = 0.0;
            loop {
                let tick = d.tick(now);
                assert!(tick.value >= prev, "{from}->{to} went backwards at {now}");
                prev = tick.value;
                if !tick.running {
                    break;
                }
                now += 16.7;
            }
            assert_eq!(prev, to);
            assert!(now >= duration);
        }
    }

    #[test]
    fn test_descending_counter() {
        let mut d = driver(100, 0, 1000.0);
        d.on_visibility(true);
        d.tick(0.0);
        let mid = d.tick(500.0).value;
        assert_eq!(mid, 50);
        assert_eq!(d.tick(1000.0).value, 0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut d = driver(0, 42, 0.0);
        d.on_visibility(true);
        assert_eq!(d.tick(3.0), Tick { value: 42, running: false });
    }

    #[test]
    fn test_nan_duration_completes_on_first_tick() {
        let mut d = driver(0, 10, f64::NAN);
        assert!(d.on_visibility(true));
        assert_eq!(d.tick(16.0), Tick { value: 10, running: false });
        assert_eq!(d.phase(), CounterPhase::Done);
    }

    #[test]
    fn test_starts_ignores_repeat_visibility() {
        let mut d = driver(0, 10, 100.0);
        assert!(d.on_visibility(true));
        assert!(!d.on_visibility(true));
        d.tick(0.0);
        assert!(matches!(d.phase(), CounterPhase::Running { started_at: Some(_) }));
        assert_eq!(d.starts(), 1);
    }

    #[test]
    fn test_once_does_not_restart_on_reentry() {
        let mut d = driver(0, 10, 100.0);
        assert!(d.on_visibility(true));
        d.tick(0.0);
        assert!(!d.on_visibility(false));
        assert!(!d.on_visibility(true));
        // Still running from the first start.
        assert_eq!(d.tick(100.0), Tick { value: 10, running: false });
        assert!(!d.on_visibility(false));
        assert!(!d.on_visibility(true));
        assert_eq!(d.starts(), 1);
        assert_eq!(d.value(), 10);
    }

    #[test]
    fn test_on_reentry_restarts_from_start() {
        let mut d = CounterDriver::new(CounterSpec::new(0, 10, 100.0), Replay::OnReentry);
        d.on_visibility(true);
        d.tick(0.0);
        d.tick(100.0);
        assert_eq!(d.phase(), CounterPhase::Done);

        d.on_visibility(false);
        assert_eq!(d.phase(), CounterPhase::Idle);
        assert_eq!(d.value(), 0);

        assert!(d.on_visibility(true));
        assert_eq!(d.starts(), 2);
        assert_eq!(d.tick(500.0).value, 0);
    }
}
