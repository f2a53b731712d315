// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the timer screen.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! `ui::timer::component` orchestrates them and turns their effects into tasks.
//!
//! ## Architecture
//!
//! ```text
//! timer/component.rs (orchestrator)
//!     ├── clock      - Countdown and mode
//!     ├── carousel   - Solid color / image list and rotation
//!     ├── transition - Fade around background changes
//!     └── alarm      - Repeated chime after completion
//! ```

pub mod alarm;
pub mod carousel;
pub mod clock;
pub mod transition;
