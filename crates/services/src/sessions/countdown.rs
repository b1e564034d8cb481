/// Per-question countdown driven by frame deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: f32,
    remaining: f32,
    frozen: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
            frozen: false,
        }
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Refill to the full duration and unfreeze.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.frozen = false;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn thaw(&mut self) {
        self.frozen = false;
    }

    /// Consume `delta` seconds, never going below zero.
    ///
    /// Returns the seconds actually consumed: zero while frozen, and for
    /// negative or non-finite deltas.
    pub fn advance(&mut self, delta: f32) -> f32 {
        if self.frozen || !delta.is_finite() || delta <= 0.0 {
            return 0.0;
        }
        let before = self.remaining;
        self.remaining = (self.remaining - delta).max(0.0);
        before - self.remaining
    }
}
