//! Animation curve + timing supplied by chart styles

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// How a value animates: curve, duration and start delay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animation {
    pub easing: Easing,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Animation {
    pub const fn new(easing: Easing, duration_ms: u32) -> Self {
        Self {
            easing,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn linear(duration_ms: u32) -> Self {
        Self::new(Easing::Linear, duration_ms)
    }

    pub const fn ease_in_out(duration_ms: u32) -> Self {
        Self::new(Easing::EaseInOut, duration_ms)
    }

    /// Applies new values immediately.
    pub const fn none() -> Self {
        Self::new(Easing::Linear, 0)
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0 && self.delay_ms == 0
    }
}

impl Default for Animation {
    /// One second, linear.
    fn default() -> Self {
        Self::linear(1000)
    }
}
