// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the timer and
//! carousel rules can be tested without a window or an audio device.
//!
//! # Modules
//!
//! - [`audio`]: Chime types ([`Volume`](audio::Volume), [`Tone`](audio::Tone))
//! - [`background`]: Background types ([`Rgb`](background::Rgb),
//!   [`RotationInterval`](background::RotationInterval), [`SWATCHES`](background::SWATCHES))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`timer`]: Timer types ([`Mode`](timer::Mode), [`Remaining`](timer::Remaining),
//!   [`ModeDurations`](timer::ModeDurations))

pub mod audio;
pub mod background;
pub mod diagnostics;
pub mod timer;
