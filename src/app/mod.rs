// SPDX-License-Identifier: MPL-2.0
//! Demo application: a card deck driven through a [`StepView`].
//!
//! The application owns the list of cards and the current step, exactly like
//! any host of the view would. Navigation only changes the current step; the
//! view decides when the displayed card actually changes.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_DEMO_ITEMS};
use crate::domain::transition::{OverlapPolicy, Step};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::step_view::StepView;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, window, Background, Border, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 400;

/// Root Iced application state.
pub struct App {
    items: Vec<String>,
    current: Step,
    step_view: StepView,
    auto_advance_secs: Option<u64>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.items.len())
            .field("current", &self.current)
            .field("displayed", &self.step_view.displayed_step())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, warning) = config::load_with_override(config_dir);
        if let Some(warning) = warning {
            log::warn!("{warning}; using default settings");
        }
        (Self::from_config(&config, flags), Task::none())
    }

    /// Builds the application from loaded settings and CLI flags.
    ///
    /// Flags take precedence over the config file.
    #[must_use]
    pub fn from_config(config: &Config, flags: Flags) -> Self {
        let items = if !flags.items.is_empty() {
            flags.items
        } else if let Some(items) = config.demo.items.clone().filter(|items| !items.is_empty()) {
            items
        } else {
            DEFAULT_DEMO_ITEMS.iter().map(ToString::to_string).collect()
        };

        let mut props = config.transition.props();
        if let Some(duration_ms) = flags.duration_ms {
            props = props.with_duration_ms(duration_ms);
        }
        if let Some(timing) = flags.timing_function {
            props = props.with_timing_function(timing);
        }

        let policy = if flags.coalesce {
            OverlapPolicy::Coalesce
        } else {
            config.transition.policy()
        };

        let current = config.demo.initial_step();
        log::info!(
            "starting with {} cards at step {current}, {}ms {} ({policy:?})",
            items.len(),
            props.duration.as_millis(),
            props.timing_function,
        );

        Self {
            items,
            current,
            step_view: StepView::new(current, props, policy),
            auto_advance_secs: config.demo.auto_advance_secs(),
        }
    }

    /// Returns the step requested by navigation.
    #[must_use]
    pub fn current_step(&self) -> Step {
        self.current
    }

    /// Returns the step view.
    #[must_use]
    pub fn step_view(&self) -> &StepView {
        &self.step_view
    }

    fn title(&self) -> String {
        format!(
            "Step Fade - {}/{}",
            self.current.value().saturating_add(1),
            self.items.len()
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Previous => self.go_to(self.wrapped(-1)),
            Message::Next | Message::AutoAdvance(_) => self.go_to(self.wrapped(1)),
            Message::StepView(step_message) => self
                .step_view
                .update(step_message)
                .map(Message::StepView),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let deck: Element<'_, Message> = self
            .step_view
            .view(self.items.as_slice(), |item| {
                text(item.as_str()).size(typography::TITLE_LG).into()
            });

        let card = Container::new(deck)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .padding(spacing::LG)
            .style(card_style);

        let controls = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(
                button(text("Previous").size(typography::BODY))
                    .on_press(Message::Previous)
                    .padding(spacing::XS),
            )
            .push(text(self.counter_label()).size(typography::CAPTION))
            .push(
                button(text("Next").size(typography::BODY))
                    .on_press(Message::Next)
                    .padding(spacing::XS),
            );

        let content = Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(card)
            .push(controls);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_auto_advance_subscription(self.auto_advance_secs),
            self.step_view.subscription().map(Message::StepView),
        ])
    }

    fn go_to(&mut self, step: Step) -> Task<Message> {
        log::debug!("navigating from step {} to {step}", self.current);
        self.current = step;
        self.step_view.request(step).map(Message::StepView)
    }

    /// Moves by `offset` cards, wrapping around at both ends.
    fn wrapped(&self, offset: i64) -> Step {
        let Ok(len) = i64::try_from(self.items.len()) else {
            return self.current;
        };
        if len == 0 {
            return self.current;
        }
        Step::new(self.current.value().saturating_add(offset).rem_euclid(len))
    }

    fn counter_label(&self) -> String {
        format!(
            "{} / {}",
            self.current.value().saturating_add(1),
            self.items.len()
        )
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}
