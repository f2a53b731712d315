// SPDX-License-Identifier: MPL-2.0
//! Decoding user-picked files into displayable backgrounds.

pub mod image;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_background, load_background_async, BackgroundImage};

use std::path::Path;

/// Supported file extensions.
pub mod extensions {
    /// Image file extensions offered by the file dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Returns true when the path has one of [`IMAGE_EXTENSIONS`] (case-insensitive).
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
