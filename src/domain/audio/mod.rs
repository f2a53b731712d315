// SPDX-License-Identifier: MPL-2.0
//! Audio domain types.
//!
//! - [`Volume`]: chime loudness
//! - [`Tone`]: the synthesized chime description

mod newtypes;

pub use newtypes::{volume_bounds, Tone, Volume};
