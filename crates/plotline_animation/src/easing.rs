//! Easing functions for animations

use serde::{Deserialize, Serialize};

/// Easing curve
///
/// In configuration: `"linear"`, `"ease_in_out"`, or
/// `{ cubic_bezier = [x1, y1, x2, y2] }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutQuad,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the curve to a progress value; input is clamped to 0.0..=1.0.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Solve the bezier's x for `t` with Newton-Raphson, bisecting when the
/// slope flattens, then sample its y. Computed in f64.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let (x, x1, y1, x2, y2) = (t as f64, x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2) as f32;
        }
        let d = slope(p, x1, x2);
        if d.abs() < 1e-7 {
            break;
        }
        p = (p - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..24 {
        let v = sample(p, x1, x2);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }
    sample(p, y1, y2) as f32
}

#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutQuad,
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ] {
            assert!(e.apply(0.0).abs() < 1e-6, "{e:?}");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?}");
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        let e = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        assert!((e.apply(0.3) - 0.3).abs() < 1e-4);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(2.0), 1.0);
        assert_eq!(Easing::EaseIn.apply(-1.0), 0.0);
    }
}
