// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small SVG documents embedded in the binary. Handles are cached
//! with `OnceLock` so every view reuses the same parsed data. Strokes use
//! `currentColor`, so [`tinted`] can recolor them for the background beneath.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `remove_image`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    play,
    r#"<polygon points="6 4 20 12 6 20 6 4" fill="currentColor"/>"#,
    "Play icon: triangle pointing right."
);
define_icon!(
    pause,
    r#"<rect x="6" y="4" width="4" height="16"/><rect x="14" y="4" width="4" height="16"/>"#,
    "Pause icon: two vertical bars."
);
define_icon!(
    rotate_ccw,
    r#"<polyline points="1 4 1 10 7 10"/><path d="M3.51 15a9 9 0 1 0 2.13-9.36L1 10"/>"#,
    "Counter-clockwise arrow."
);
define_icon!(
    bell,
    r#"<path d="M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9"/><path d="M13.73 21a2 2 0 0 1-3.46 0"/>"#,
    "Bell icon."
);
define_icon!(
    image_plus,
    r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><polyline points="21 15 16 10 5 21"/><line x1="19" y1="1" x2="19" y2="7"/><line x1="16" y1="4" x2="22" y2="4"/>"#,
    "Picture frame with a plus sign."
);
define_icon!(
    trash,
    r#"<polyline points="3 6 5 6 21 6"/><path d="M19 6l-1 14H6L5 6"/><path d="M10 11v6"/><path d="M14 11v6"/><path d="M9 6V4h6v2"/>"#,
    "Trash can."
);
define_icon!(
    cross,
    r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
    "Diagonal cross."
);

/// Sizes an icon and paints its strokes in `color`.
pub fn tinted<'a>(icon: Svg<'a>, size: f32, color: Color) -> Svg<'a> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_build() {
        let _ = play();
        let _ = pause();
        let _ = rotate_ccw();
        let _ = bell();
        let _ = image_plus();
        let _ = trash();
        let _ = cross();
    }

    #[test]
    fn tinted_icons_build() {
        let _ = tinted(bell(), 16.0, Color::WHITE);
    }
}
