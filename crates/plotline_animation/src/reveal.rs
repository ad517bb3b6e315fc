//! Reveal lifecycle
//!
//! Each drawable owns a boolean "started" flag that the host flips from its
//! mount/unmount callbacks. The flag drives a progress value between 0 and 1
//! which the chart applies either as a path trim ([`RevealKind::Draw`]) or a
//! vertical scale from the bottom edge ([`RevealKind::Scale`]).
//!
//! ```text
//!   Unmounted --Appear--> Entering --Settle--> Shown
//!       ^                  |    ^                |
//!       |            Disappear  Appear       Disappear
//!       |                  v    |                |
//!       +-----Settle----- Exiting <--------------+
//! ```

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::animation::Animation;
use crate::transition::ValueTransition;

new_key_type! {
    /// Unique identifier for a reveal controller
    pub struct RevealId;
}

/// How progress is applied to a drawable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealKind {
    /// Trim the path from 0 to its full length.
    #[default]
    Draw,
    /// Scale vertically from the bottom anchor.
    Scale,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    #[default]
    Unmounted,
    Entering,
    Shown,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Host mounted the drawable.
    Appear,
    /// Host is about to unmount the drawable.
    Disappear,
    /// The running transition finished.
    Settle,
}

impl RevealPhase {
    fn next(self, event: LifecycleEvent) -> Option<RevealPhase> {
        use LifecycleEvent::*;
        use RevealPhase::*;
        match (self, event) {
            (Unmounted | Exiting, Appear) => Some(Entering),
            (Entering | Shown, Disappear) => Some(Exiting),
            (Entering, Settle) => Some(Shown),
            (Exiting, Settle) => Some(Unmounted),
            _ => None,
        }
    }
}

/// Per-drawable reveal state machine
#[derive(Clone, Debug)]
pub struct RevealController {
    phase: RevealPhase,
    started: bool,
    progress: f32,
    animation: Animation,
    transition: Option<ValueTransition>,
    /// History of transitions (for debugging)
    history: SmallVec<[(RevealPhase, LifecycleEvent, RevealPhase); 4]>,
}

impl RevealController {
    pub fn new(animation: Animation) -> Self {
        Self {
            phase: RevealPhase::Unmounted,
            started: false,
            progress: 0.0,
            animation,
            transition: None,
            history: SmallVec::new(),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The boolean the host flips on mount/unmount.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Current reveal progress, 0.0 (hidden) to 1.0 (fully shown).
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn history(&self) -> &[(RevealPhase, LifecycleEvent, RevealPhase)] {
        &self.history
    }

    /// "On appear" hook.
    pub fn on_appear(&mut self) -> RevealPhase {
        if self.send(LifecycleEvent::Appear) {
            self.started = true;
            self.animate_to(1.0);
        }
        self.phase
    }

    /// "On disappear" hook.
    pub fn on_disappear(&mut self) -> RevealPhase {
        if self.send(LifecycleEvent::Disappear) {
            self.started = false;
            self.animate_to(0.0);
        }
        self.phase
    }

    /// Advance the running transition by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f32) -> RevealPhase {
        if let Some(transition) = self.transition.as_mut() {
            transition.step(dt_ms);
            self.progress = transition.value();
            if transition.is_finished() {
                self.transition = None;
                self.send(LifecycleEvent::Settle);
            }
        }
        self.phase
    }

    fn animate_to(&mut self, target: f32) {
        if self.animation.is_instant() {
            self.progress = target;
            self.transition = None;
            self.send(LifecycleEvent::Settle);
            return;
        }
        // Retargets from wherever an interrupted transition left off.
        self.transition = Some(ValueTransition::new(self.progress, target, &self.animation));
    }

    fn send(&mut self, event: LifecycleEvent) -> bool {
        let from = self.phase;
        let Some(to) = from.next(event) else {
            tracing::trace!(?from, ?event, "reveal event ignored");
            return false;
        };
        self.phase = to;
        if self.history.len() == self.history.inline_size() {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
        tracing::trace!(?from, ?event, ?to, "reveal transition");
        true
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(Animation::default())
    }
}

/// Owns the reveal controllers of every drawable in one overlay
#[derive(Debug)]
pub struct RevealRuntime {
    controllers: SlotMap<RevealId, RevealController>,
}

impl RevealRuntime {
    pub fn new() -> Self {
        Self {
            controllers: SlotMap::with_key(),
        }
    }

    pub fn create(&mut self, animation: Animation) -> RevealId {
        self.controllers.insert(RevealController::new(animation))
    }

    /// Progress of a controller; unknown ids read as hidden.
    pub fn progress(&self, id: RevealId) -> f32 {
        self.controllers.get(id).map_or(0.0, |c| c.progress())
    }

    pub fn phase(&self, id: RevealId) -> Option<RevealPhase> {
        self.controllers.get(id).map(|c| c.phase())
    }

    pub fn appear_all(&mut self) {
        for (_, c) in self.controllers.iter_mut() {
            c.on_appear();
        }
    }

    pub fn disappear_all(&mut self) {
        for (_, c) in self.controllers.iter_mut() {
            c.on_disappear();
        }
    }

    pub fn tick(&mut self, dt_ms: f32) {
        for (_, c) in self.controllers.iter_mut() {
            c.tick(dt_ms);
        }
    }

    /// Check if any reveal is still animating
    pub fn has_active_animations(&self) -> bool {
        self.controllers.iter().any(|(_, c)| c.is_animating())
    }

    pub fn remove(&mut self, id: RevealId) -> Option<RevealController> {
        self.controllers.remove(id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl Default for RevealRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_reveals_then_unmount_hides() {
        let mut c = RevealController::new(Animation::linear(100));
        assert_eq!(c.phase(), RevealPhase::Unmounted);
        assert!(!c.is_started());

        assert_eq!(c.on_appear(), RevealPhase::Entering);
        assert!(c.is_started());
        c.tick(50.0);
        assert!((c.progress() - 0.5).abs() < 1e-6);
        assert_eq!(c.tick(50.0), RevealPhase::Shown);
        assert_eq!(c.progress(), 1.0);

        assert_eq!(c.on_disappear(), RevealPhase::Exiting);
        assert!(!c.is_started());
        assert_eq!(c.tick(100.0), RevealPhase::Unmounted);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn interrupted_exit_resumes_from_current_progress() {
        let mut c = RevealController::new(Animation::linear(100));
        c.on_appear();
        c.tick(100.0);
        c.on_disappear();
        c.tick(30.0);
        assert!((c.progress() - 0.7).abs() < 1e-5);

        assert_eq!(c.on_appear(), RevealPhase::Entering);
        c.tick(50.0);
        assert!((c.progress() - 0.85).abs() < 1e-5);
    }

    #[test]
    fn instant_animation_settles_immediately() {
        let mut c = RevealController::new(Animation::none());
        assert_eq!(c.on_appear(), RevealPhase::Shown);
        assert_eq!(c.progress(), 1.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn repeated_appear_is_ignored() {
        let mut c = RevealController::new(Animation::linear(10));
        c.on_appear();
        c.tick(10.0);
        assert_eq!(c.on_appear(), RevealPhase::Shown);
        assert_eq!(
            c.history(),
            &[
                (RevealPhase::Unmounted, LifecycleEvent::Appear, RevealPhase::Entering),
                (RevealPhase::Entering, LifecycleEvent::Settle, RevealPhase::Shown),
            ]
        );
    }

    #[test]
    fn runtime_drives_every_controller() {
        let mut rt = RevealRuntime::new();
        let a = rt.create(Animation::linear(100));
        let b = rt.create(Animation::linear(200));
        rt.appear_all();
        rt.tick(100.0);
        assert_eq!(rt.phase(a), Some(RevealPhase::Shown));
        assert!((rt.progress(b) - 0.5).abs() < 1e-6);
        assert!(rt.has_active_animations());

        rt.remove(a);
        assert_eq!(rt.len(), 1);
        assert_eq!(rt.progress(a), 0.0);
    }
}
