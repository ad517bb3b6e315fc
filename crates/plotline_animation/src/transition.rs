use crate::animation::Animation;
use crate::easing::Easing;

/// Interpolates from `start` to `end` as time is stepped in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueTransition {
    start: f32,
    end: f32,
    duration_ms: f32,
    delay_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
    value: f32,
}

impl ValueTransition {
    pub fn new(start: f32, end: f32, animation: &Animation) -> Self {
        Self {
            start,
            end,
            duration_ms: animation.duration_ms as f32,
            delay_ms: animation.delay_ms as f32,
            elapsed_ms: 0.0,
            easing: animation.easing,
            value: start,
        }
    }

    pub fn step(&mut self, dt_ms: f32) {
        let total = self.delay_ms + self.duration_ms;
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(total);
        let active = self.elapsed_ms - self.delay_ms;
        if active < 0.0 {
            return;
        }
        let t = if self.duration_ms > 0.0 {
            active / self.duration_ms
        } else {
            1.0
        };
        self.value = self.start + (self.end - self.start) * self.easing.apply(t);
        if self.is_finished() {
            self.value = self.end;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.delay_ms + self.duration_ms
    }
}
