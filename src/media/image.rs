// SPDX-License-Identifier: MPL-2.0
//! Background image loading (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, ImageError, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::has_image_extension;

/// A decoded background ready to be drawn.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// File name, shown as the thumbnail tooltip.
    pub name: String,
}

impl BackgroundImage {
    /// Wraps RGBA pixels.
    #[must_use]
    pub fn from_rgba(name: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
            name: name.into(),
        }
    }
}

/// Bytes inspected before deciding whether a file is an image at all.
const HEADER_LEN: u64 = 512;

/// How a file will be decoded, decided from its name and first bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Svg,
    Raster(image_rs::ImageFormat),
}

/// Loads a background image from `path`.
///
/// SVG files are rasterized with resvg; other formats are detected from their
/// content and decoded with `image`. Only a short header is read until the
/// file is known to be an image.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`ImageError::NotAnImage`] if the file is neither SVG nor a known raster
///   format and does not carry an image extension
/// - [`ImageError::Decode`] / [`ImageError::Svg`] if decoding fails
pub fn load_background<P: AsRef<Path>>(path: P) -> Result<BackgroundImage> {
    let path = path.as_ref();
    let file = File::open(path)?;
    load_from_reader(path, file)
}

fn load_from_reader<R: Read>(path: &Path, mut reader: R) -> Result<BackgroundImage> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut bytes = Vec::new();
    reader.by_ref().take(HEADER_LEN).read_to_end(&mut bytes)?;
    let kind = classify(path, &bytes)?;

    reader.read_to_end(&mut bytes)?;
    match kind {
        Kind::Svg => rasterize_svg(name, &bytes),
        Kind::Raster(format) => {
            let img = image_rs::load_from_memory_with_format(&bytes, format)?;
            let (width, height) = img.dimensions();
            Ok(BackgroundImage::from_rgba(
                name,
                width,
                height,
                img.to_rgba8().into_vec(),
            ))
        }
    }
}

fn classify(path: &Path, header: &[u8]) -> Result<Kind> {
    if is_svg(path, header) {
        return Ok(Kind::Svg);
    }
    match image_rs::guess_format(header) {
        Ok(format) => Ok(Kind::Raster(format)),
        Err(_) if has_image_extension(path) => {
            Err(ImageError::Decode("unrecognized image data".into()).into())
        }
        Err(_) => Err(ImageError::NotAnImage.into()),
    }
}

/// Runs [`load_background`] on the blocking thread pool.
///
/// # Errors
///
/// Same as [`load_background`].
pub async fn load_background_async(path: PathBuf) -> Result<BackgroundImage> {
    tokio::task::spawn_blocking(move || load_background(path))
        .await
        .map_err(|e| Error::Io(format!("Image loading task failed: {e}")))?
}

fn is_svg(path: &Path, header: &[u8]) -> bool {
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if by_extension {
        return true;
    }

    let head = String::from_utf8_lossy(header);
    head.trim_start().starts_with("<svg")
}

fn rasterize_svg(name: String, bytes: &[u8]) -> Result<BackgroundImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| ImageError::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(ImageError::Svg("SVG has empty dimensions".into()).into());
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ImageError::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // Pixmap data is premultiplied; demultiply for iced's straight RGBA.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    Ok(BackgroundImage::from_rgba(name, width, height, pixels))
}
