//! Time-based interpolation with last-writer-wins semantics.
//!
//! Time is always passed in explicitly (milliseconds), the browser layer feeds
//! `Date.now()` and tests feed whatever they like.

use strum::{AsRefStr, EnumIter, EnumString};

/// Values a transition can blend between.
pub trait Interpolate: Clone {
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr)]
pub enum Easing {
    #[strum(serialize = "linear")]
    Linear,
    #[strum(serialize = "quad")]
    QuadIn,
    #[default]
    #[strum(serialize = "cubic-in-out")]
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// Identifies one scheduled transition. Stale once anything newer was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionHandle {
    generation: u64,
}

impl TransitionHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Transition<T> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
    generation: u64,
}

impl<T: Interpolate> Transition<T> {
    fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn value_at(&self, now_ms: f64) -> T {
        let t = self.easing.apply(self.progress(now_ms));
        self.from.interpolate(&self.to, t)
    }
}

/// Holds at most one in-flight transition per target. Scheduling a new one
/// abandons the previous without rollback.
#[derive(Debug, Clone)]
pub struct TransitionScheduler<T> {
    active: Option<Transition<T>>,
    generation: u64,
}

impl<T> Default for TransitionScheduler<T> {
    fn default() -> Self {
        Self { active: None, generation: 0 }
    }
}

impl<T: Interpolate> TransitionScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `duration_ms <= 0` settles immediately: nothing stays in flight.
    pub fn schedule(
        &mut self,
        from: T,
        to: T,
        duration_ms: f64,
        easing: Easing,
        now_ms: f64,
    ) -> TransitionHandle {
        self.generation += 1;
        self.active = (duration_ms > 0.0).then(|| Transition {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
            easing,
            generation: self.generation,
        });
        TransitionHandle { generation: self.generation }
    }

    pub fn cancel(&mut self, handle: TransitionHandle) -> bool {
        if self.is_running(handle) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn cancel_all(&mut self) {
        self.active = None;
    }

    pub fn is_running(&self, handle: TransitionHandle) -> bool {
        self.active
            .as_ref()
            .is_some_and(|transition| transition.generation == handle.generation)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Interpolated value, or `None` when idle.
    pub fn sample(&self, now_ms: f64) -> Option<T> {
        self.active.as_ref().map(|transition| transition.value_at(now_ms))
    }

    /// Like `sample`, but retires the transition once it reached its end.
    pub fn tick(&mut self, now_ms: f64) -> Option<T> {
        let transition = self.active.as_ref()?;
        let value = transition.value_at(now_ms);
        if transition.progress(now_ms) >= 1.0 {
            self.active = None;
        }
        Some(value)
    }
}
