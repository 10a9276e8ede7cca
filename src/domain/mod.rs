// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types. It has no dependencies on
//! external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`transition`]: Step transition types ([`Step`](transition::Step),
//!   [`Visibility`](transition::Visibility),
//!   [`TransitionDuration`](transition::TransitionDuration),
//!   [`TimingFunction`](transition::TimingFunction),
//!   [`OverlapPolicy`](transition::OverlapPolicy))

pub mod transition;
