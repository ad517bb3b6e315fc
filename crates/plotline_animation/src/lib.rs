//! Plotline Animation System
//!
//! Enter/exit animation for chart drawables.
//!
//! # Features
//!
//! - **Easing**: named curves and CSS-style cubic beziers
//! - **Animations**: curve + duration + delay, supplied by the chart style
//! - **Transitions**: time-stepped interpolation between two values
//! - **Reveals**: a mount/unmount lifecycle state machine per drawable,
//!   driving either a path trim ("draw") or a vertical scale ("scale")

pub mod animation;
pub mod easing;
pub mod reveal;
pub mod transition;

pub use animation::Animation;
pub use easing::Easing;
pub use reveal::{LifecycleEvent, RevealController, RevealId, RevealKind, RevealPhase, RevealRuntime};
pub use transition::ValueTransition;
