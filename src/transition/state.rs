// SPDX-License-Identifier: MPL-2.0
//! Step transition state machine.
//!
//! The state owns two values: the step that is actually displayed and the
//! visibility level of the displayed item. A step request that differs from
//! the displayed step hides the item and schedules a [`PendingCommit`]. When
//! the host's timer delivers that commit, the displayed step is swapped and
//! the item is made visible again in a single mutation.
//!
//! The state never sleeps. Scheduling is expressed as [`Effect::Schedule`]
//! and the host runs the timer: an Iced `Task` in
//! [`crate::ui::step_view`], or a manual clock through [`State::fire_due`].

use crate::domain::transition::{OverlapPolicy, Step, TransitionDuration, Visibility};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Identifier of a scheduled commit, unique within one [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(u64);

/// A swap waiting for its fade-out phase to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCommit {
    id: CommitId,
    target: Step,
    due: Instant,
}

impl PendingCommit {
    /// Returns the commit identifier to hand back through [`Message::Commit`].
    #[must_use]
    pub fn id(&self) -> CommitId {
        self.id
    }

    /// Returns the step that becomes displayed when the commit fires.
    #[must_use]
    pub fn target(&self) -> Step {
        self.target
    }

    /// Returns when the commit is due.
    #[must_use]
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Returns how long a timer started at `now` must wait.
    #[must_use]
    pub fn delay_from(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

/// Coarse phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No commit in flight.
    Idle,
    /// At least one commit is waiting for its timer.
    Transitioning,
}

/// Inputs of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The caller's current step.
    Request(Step),
    /// A scheduled commit's timer elapsed.
    Commit(CommitId),
}

/// Outcome of handling a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Fade-out began. The host must deliver `Message::Commit(commit.id())`
    /// once `commit.due()` is reached.
    Schedule(PendingCommit),
    /// The pending slot now targets another step; the timer already running
    /// for it stays valid. Only produced under [`OverlapPolicy::Coalesce`].
    Retargeted(PendingCommit),
    /// The pending slot was dropped and visibility restored. Only produced
    /// under [`OverlapPolicy::Coalesce`].
    Cancelled,
    /// The displayed step was swapped and visibility restored.
    ///
    /// `follow_up` is set when the latest request still differs from the new
    /// displayed step; a new fade-out has then started and must be scheduled
    /// like [`Effect::Schedule`].
    Committed {
        step: Step,
        follow_up: Option<PendingCommit>,
    },
}

impl Effect {
    /// Returns the commit the host must schedule a timer for, if any.
    #[must_use]
    pub fn scheduled(&self) -> Option<PendingCommit> {
        match self {
            Effect::Schedule(commit) => Some(*commit),
            Effect::Committed { follow_up, .. } => *follow_up,
            Effect::None | Effect::Retargeted(_) | Effect::Cancelled => None,
        }
    }
}

/// Step transition state.
#[derive(Debug, Clone)]
pub struct State {
    displayed: Step,
    requested: Step,
    visibility: Visibility,
    pending: VecDeque<PendingCommit>,
    policy: OverlapPolicy,
    next_id: u64,
}

impl State {
    /// Creates a state displaying `initial` at full visibility.
    ///
    /// Seeding the displayed step from the first request is what keeps the
    /// first mount from fading.
    #[must_use]
    pub fn new(initial: Step, policy: OverlapPolicy) -> Self {
        Self {
            displayed: initial,
            requested: initial,
            visibility: Visibility::VISIBLE,
            pending: VecDeque::new(),
            policy,
            next_id: 0,
        }
    }

    /// Handles a message at time `now`.
    pub fn handle(&mut self, message: Message, now: Instant, duration: TransitionDuration) -> Effect {
        match message {
            Message::Request(step) => self.request(step, now, duration),
            Message::Commit(id) => self.commit(id, now, duration),
        }
    }

    /// Fires every commit due at or before `now`, earliest first.
    ///
    /// Follow-up fades are scheduled from the due time of the commit that
    /// triggered them, so a clock that jumps ahead still replays the exact
    /// sequence a real timer queue would.
    pub fn fire_due(&mut self, now: Instant, duration: TransitionDuration) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(commit) = self.next_due().filter(|commit| commit.due <= now) {
            effects.push(self.commit(commit.id, commit.due, duration));
        }
        effects
    }

    /// Returns the pending commit that fires first.
    #[must_use]
    pub fn next_due(&self) -> Option<PendingCommit> {
        self.pending
            .iter()
            .min_by_key(|commit| (commit.due, commit.id))
            .copied()
    }

    /// Returns the step currently rendered.
    #[must_use]
    pub fn displayed_step(&self) -> Step {
        self.displayed
    }

    /// Returns the most recent requested step.
    #[must_use]
    pub fn requested_step(&self) -> Step {
        self.requested
    }

    /// Returns the current visibility level.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the overlap policy.
    #[must_use]
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Returns the commits still waiting for their timer, in scheduling order.
    pub fn pending(&self) -> impl Iterator<Item = &PendingCommit> {
        self.pending.iter()
    }

    /// Returns the coarse phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.pending.is_empty() {
            Phase::Idle
        } else {
            Phase::Transitioning
        }
    }

    fn request(&mut self, step: Step, now: Instant, duration: TransitionDuration) -> Effect {
        self.requested = step;

        match self.policy {
            OverlapPolicy::Stack => {
                if step == self.displayed {
                    return Effect::None;
                }
                Effect::Schedule(self.begin_fade_out(step, now, duration))
            }
            OverlapPolicy::Coalesce => {
                if step == self.displayed {
                    if self.pending.is_empty() {
                        return Effect::None;
                    }
                    log::debug!("step {step} requested again, cancelling pending fade");
                    self.pending.clear();
                    self.visibility = Visibility::VISIBLE;
                    return Effect::Cancelled;
                }

                if let Some(slot) = self.pending.front_mut() {
                    if slot.target == step {
                        return Effect::None;
                    }
                    log::debug!("retargeting pending commit from {} to {step}", slot.target);
                    slot.target = step;
                    return Effect::Retargeted(*slot);
                }

                Effect::Schedule(self.begin_fade_out(step, now, duration))
            }
        }
    }

    fn commit(&mut self, id: CommitId, now: Instant, duration: TransitionDuration) -> Effect {
        let Some(position) = self.pending.iter().position(|commit| commit.id == id) else {
            log::debug!("ignoring commit {id:?}: no longer pending");
            return Effect::None;
        };
        let Some(commit) = self.pending.remove(position) else {
            return Effect::None;
        };

        self.displayed = commit.target;
        self.visibility = Visibility::VISIBLE;
        log::debug!("committed step {}", commit.target);

        let follow_up = if self.requested == self.displayed {
            None
        } else {
            Some(self.begin_fade_out(self.requested, now, duration))
        };

        Effect::Committed {
            step: commit.target,
            follow_up,
        }
    }

    fn begin_fade_out(
        &mut self,
        target: Step,
        now: Instant,
        duration: TransitionDuration,
    ) -> PendingCommit {
        let due = now.checked_add(duration.phase()).unwrap_or_else(|| {
            log::warn!(
                "transition phase {:?} overflows the clock, committing now",
                duration.phase()
            );
            now
        });
        let commit = PendingCommit {
            id: CommitId(self.next_id),
            target,
            due,
        };
        self.next_id += 1;
        self.visibility = Visibility::HIDDEN;
        self.pending.push_back(commit);

        log::debug!(
            "fading out step {} towards {target}, commit due in {:?}",
            self.displayed,
            duration.phase()
        );
        commit
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Step::default(), OverlapPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn one_second() -> TransitionDuration {
        TransitionDuration::default()
    }

    #[test]
    fn new_state_is_idle_and_visible() {
        let state = State::new(Step::new(3), OverlapPolicy::Stack);
        assert_eq!(state.displayed_step(), Step::new(3));
        assert_eq!(state.requested_step(), Step::new(3));
        assert!(state.visibility().is_visible());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn request_equal_to_displayed_is_noop() {
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);
        let effect = state.handle(Message::Request(Step::new(0)), Instant::now(), one_second());

        assert_eq!(effect, Effect::None);
        assert!(state.visibility().is_visible());
        assert_eq!(state.pending().count(), 0);
    }

    #[test]
    fn request_hides_and_schedules_half_duration_commit() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);

        let effect = state.handle(Message::Request(Step::new(2)), start, one_second());
        let commit = effect.scheduled().expect("commit should be scheduled");

        assert_eq!(commit.target(), Step::new(2));
        assert_eq!(commit.due(), start + ms(500));
        assert_eq!(commit.delay_from(start), ms(500));
        assert!(state.visibility().is_hidden());
        assert_eq!(state.displayed_step(), Step::new(0));
        assert_eq!(state.phase(), Phase::Transitioning);
    }

    #[test]
    fn oversized_duration_is_capped_when_scheduling() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);
        let duration = TransitionDuration::new(1e30);

        let commit = state
            .handle(Message::Request(Step::new(1)), start, duration)
            .scheduled()
            .expect("commit should be scheduled");

        assert_eq!(commit.delay_from(start), duration.phase());
        assert!(state.fire_due(start, duration).is_empty());
        assert!(state.visibility().is_hidden());
    }

    #[test]
    fn commit_swaps_step_and_restores_visibility() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);
        let commit = state
            .handle(Message::Request(Step::new(1)), start, one_second())
            .scheduled()
            .expect("commit should be scheduled");

        let effect = state.handle(Message::Commit(commit.id()), start + ms(500), one_second());

        assert_eq!(
            effect,
            Effect::Committed {
                step: Step::new(1),
                follow_up: None
            }
        );
        assert_eq!(state.displayed_step(), Step::new(1));
        assert!(state.visibility().is_visible());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn unknown_commit_is_ignored() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);
        let commit = state
            .handle(Message::Request(Step::new(1)), start, one_second())
            .scheduled()
            .expect("commit should be scheduled");
        state.handle(Message::Commit(commit.id()), start + ms(500), one_second());

        let again = state.handle(Message::Commit(commit.id()), start + ms(600), one_second());
        assert_eq!(again, Effect::None);
        assert_eq!(state.displayed_step(), Step::new(1));
    }

    #[test]
    fn stacked_requests_each_schedule_a_commit() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);

        state.handle(Message::Request(Step::new(1)), start, one_second());
        state.handle(Message::Request(Step::new(2)), start + ms(100), one_second());

        let targets: Vec<Step> = state.pending().map(PendingCommit::target).collect();
        assert_eq!(targets, vec![Step::new(1), Step::new(2)]);
    }

    #[test]
    fn stale_stacked_commit_shows_intermediate_step_then_refades() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);
        state.handle(Message::Request(Step::new(1)), start, one_second());
        state.handle(Message::Request(Step::new(2)), start + ms(100), one_second());

        let effects = state.fire_due(start + ms(500), one_second());
        assert_eq!(effects.len(), 1);
        assert_eq!(state.displayed_step(), Step::new(1));
        // Latest request is 2, so a follow-up fade starts right away.
        assert!(state.visibility().is_hidden());
        assert_eq!(state.pending().count(), 2);

        state.fire_due(start + ms(1000), one_second());
        assert_eq!(state.displayed_step(), Step::new(2));
        assert!(state.visibility().is_visible());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn fire_due_leaves_future_commits_alone() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);
        state.handle(Message::Request(Step::new(1)), start, one_second());

        assert!(state.fire_due(start + ms(499), one_second()).is_empty());
        assert_eq!(state.displayed_step(), Step::new(0));
    }

    #[test]
    fn instant_duration_commits_when_fired_immediately() {
        let start = Instant::now();
        let instant = TransitionDuration::new(0.0);
        let mut state = State::new(Step::new(0), OverlapPolicy::Stack);

        let commit = state
            .handle(Message::Request(Step::new(4)), start, instant)
            .scheduled()
            .expect("commit should be scheduled");
        assert_eq!(commit.due(), start);

        state.fire_due(start, instant);
        assert_eq!(state.displayed_step(), Step::new(4));
        assert!(state.visibility().is_visible());
    }

    #[test]
    fn coalesce_retargets_single_slot() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Coalesce);
        let first = state
            .handle(Message::Request(Step::new(1)), start, one_second())
            .scheduled()
            .expect("commit should be scheduled");

        let effect = state.handle(Message::Request(Step::new(2)), start + ms(100), one_second());
        let Effect::Retargeted(slot) = effect else {
            panic!("expected retarget, got {effect:?}");
        };
        assert_eq!(slot.id(), first.id());
        assert_eq!(slot.due(), first.due());
        assert_eq!(slot.target(), Step::new(2));
        assert_eq!(state.pending().count(), 1);

        state.handle(Message::Commit(first.id()), start + ms(500), one_second());
        assert_eq!(state.displayed_step(), Step::new(2));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn coalesce_cancels_when_returning_to_displayed_step() {
        let start = Instant::now();
        let mut state = State::new(Step::new(0), OverlapPolicy::Coalesce);
        let first = state
            .handle(Message::Request(Step::new(1)), start, one_second())
            .scheduled()
            .expect("commit should be scheduled");

        let effect = state.handle(Message::Request(Step::new(0)), start + ms(50), one_second());
        assert_eq!(effect, Effect::Cancelled);
        assert!(state.visibility().is_visible());

        // The timer still fires but no longer matches anything.
        let late = state.handle(Message::Commit(first.id()), start + ms(500), one_second());
        assert_eq!(late, Effect::None);
        assert_eq!(state.displayed_step(), Step::new(0));
    }
}
