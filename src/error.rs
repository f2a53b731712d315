// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageError),
    Audio(String),
}

/// Specific failures when turning a user-picked file into a background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The file is not an image at all. Callers drop these silently.
    NotAnImage,

    /// SVG parsing or rasterization failed.
    Svg(String),

    /// The file looked like an image but could not be decoded.
    Decode(String),
}

impl Error {
    /// Returns true when the error only means "this file was not an image".
    #[must_use]
    pub fn is_not_an_image(&self) -> bool {
        matches!(self, Error::Image(ImageError::NotAnImage))
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::NotAnImage => write!(f, "File is not an image"),
            ImageError::Svg(msg) => write!(f, "SVG error: {}", msg),
            ImageError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(ImageError::Decode(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_formats_properly() {
        let err = Error::Audio("no device".into());
        assert_eq!(format!("{}", err), "Audio Error: no device");
    }

    #[test]
    fn not_an_image_is_detected() {
        let err: Error = ImageError::NotAnImage.into();
        assert!(err.is_not_an_image());
        assert!(!Error::Image(ImageError::Decode("truncated".into())).is_not_an_image());
        assert!(!Error::Io("gone".into()).is_not_an_image());
    }

    #[test]
    fn image_error_display_includes_detail() {
        let err = Error::Image(ImageError::Svg("unexpected eof".into()));
        assert_eq!(format!("{}", err), "Image Error: SVG error: unexpected eof");
    }
}
