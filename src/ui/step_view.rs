// SPDX-License-Identifier: MPL-2.0
//! Iced adapter for the step transition.
//!
//! `StepView` owns the transition state and turns its effects into Iced
//! tasks: a scheduled commit becomes a tokio sleep resolving to
//! [`Message::Commit`]. While the visibility target changes, opacity is
//! interpolated on a 16 ms tick using the configured easing curve.
//!
//! Iced containers have no opacity property, so the displayed item is
//! covered by a veil painted in the theme background whose alpha is the
//! complement of the current opacity. Of the item style only `opacity` is
//! read; the container style (height transition and caller overrides) is
//! not applied, since Iced lays the item out at its own size.

use crate::domain::transition::{OverlapPolicy, Step};
use crate::transition::{self, style, CommitId, Easing, Effect, PendingCommit, State, TransitionProps};
use iced::widget::{container, Column, Container, Stack};
use iced::{Background, Color, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// Interval between opacity updates while fading (~60 FPS).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages for the step view.
#[derive(Debug, Clone)]
pub enum Message {
    /// A scheduled commit's timer elapsed.
    Commit(CommitId),
    /// Animation tick.
    Frame(Instant),
}

/// Opacity interpolation between two visibility targets.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Cross-fading view over a caller-owned list of items.
#[derive(Debug, Clone)]
pub struct StepView {
    state: State,
    props: TransitionProps,
    easing: Easing,
    opacity: f32,
    fade: Option<Fade>,
}

impl StepView {
    /// Creates a view displaying `initial` without fading.
    #[must_use]
    pub fn new(initial: Step, props: TransitionProps, policy: OverlapPolicy) -> Self {
        let easing = Easing::from_timing_function(&props.timing_function);
        let state = State::new(initial, policy);
        let opacity = state.visibility().value();
        Self {
            state,
            props,
            easing,
            opacity,
            fade: None,
        }
    }

    /// Forwards the caller's current step.
    pub fn request(&mut self, step: Step) -> Task<Message> {
        self.request_at(step, Instant::now())
    }

    /// Handles a step view message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Commit(id) => self.commit_at(id, Instant::now()),
            Message::Frame(now) => {
                self.advance(now);
                Task::none()
            }
        }
    }

    /// Ticks while an opacity fade is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            iced::time::every(FRAME_INTERVAL).map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Renders the item at the displayed step, or an empty container.
    pub fn view<'a, T, M: 'a>(
        &'a self,
        items: &'a [T],
        build: impl Fn(&'a T) -> Element<'a, M>,
    ) -> Element<'a, M> {
        let tree = transition::render(&self.state, items, &self.props);

        let Some(rendered) = tree.item else {
            return Container::new(Column::new())
                .width(Length::Fill)
                .into();
        };

        let opacity = self.rendered_opacity();
        let veil = Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |theme: &Theme| veil_style(theme, opacity));

        Stack::new()
            .push(Container::new(build(rendered.item)).width(Length::Fill))
            .push(veil)
            .into()
    }

    /// Returns the transition state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the transition props.
    #[must_use]
    pub fn props(&self) -> &TransitionProps {
        &self.props
    }

    /// Returns the step currently rendered.
    #[must_use]
    pub fn displayed_step(&self) -> Step {
        self.state.displayed_step()
    }

    /// Returns the interpolated opacity as of the last update.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns whether an opacity fade is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    fn request_at(&mut self, step: Step, now: Instant) -> Task<Message> {
        let effect = self.state.handle(
            transition::Message::Request(step),
            now,
            self.props.duration,
        );
        self.apply(effect, now)
    }

    fn commit_at(&mut self, id: CommitId, now: Instant) -> Task<Message> {
        let effect = self
            .state
            .handle(transition::Message::Commit(id), now, self.props.duration);
        self.apply(effect, now)
    }

    fn apply(&mut self, effect: Effect, now: Instant) -> Task<Message> {
        self.retarget(now);
        match effect.scheduled() {
            Some(commit) => schedule(commit, now),
            None => Task::none(),
        }
    }

    /// Starts a fade from the current opacity towards the state's visibility.
    #[allow(clippy::float_cmp)]
    fn retarget(&mut self, now: Instant) {
        self.advance(now);
        let target = self.state.visibility().value();
        let current_target = self.fade.map_or(self.opacity, |fade| fade.to);

        if target == current_target {
            return;
        }

        if self.props.duration.is_instant() {
            self.opacity = target;
            self.fade = None;
        } else {
            self.fade = Some(Fade {
                from: self.opacity,
                to: target,
                started_at: now,
            });
        }
    }

    fn advance(&mut self, now: Instant) {
        let Some(fade) = self.fade else {
            return;
        };

        let phase = self.props.duration.phase();
        let elapsed = now.saturating_duration_since(fade.started_at);
        if phase.is_zero() || elapsed >= phase {
            self.opacity = fade.to;
            self.fade = None;
            return;
        }

        let progress = self.easing.apply(elapsed.as_secs_f32() / phase.as_secs_f32());
        self.opacity = fade.from + (fade.to - fade.from) * progress;
        log::trace!("fade opacity {:.3}", self.opacity);
    }

    /// A caller-supplied `opacity` override wins over the interpolated value.
    fn rendered_opacity(&self) -> f32 {
        self.props
            .item_style
            .get(style::OPACITY)
            .and_then(|value| value.trim().parse::<f32>().ok())
            .map_or(self.opacity, |value| value.clamp(0.0, 1.0))
    }
}

fn schedule(commit: PendingCommit, now: Instant) -> Task<Message> {
    let delay = commit.delay_from(now);
    let id = commit.id();
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            id
        },
        Message::Commit,
    )
}

fn veil_style(theme: &Theme, opacity: f32) -> container::Style {
    let background = theme.palette().background;
    container::Style {
        background: Some(Background::Color(Color {
            a: 1.0 - opacity,
            ..background
        })),
        ..Default::default()
    }
}
