// SPDX-License-Identifier: MPL-2.0
//! Timer screen: countdown clock over a customizable background.
//!
//! - [`component`] - Orchestrator owning the sub-components
//! - [`controls`] - Clock card (mode switch, face, start/pause, reset, bell)
//! - [`background_panel`] - Images, rotation and color swatches
//! - [`subcomponents`] - Clock, carousel, fade transition and alarm state machines

pub mod background_panel;
pub mod component;
pub mod controls;
pub mod subcomponents;

pub use component::{Effect, ImageSource, Message, Settings, State};
