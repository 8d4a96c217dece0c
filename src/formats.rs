//! Input acceptance and output format selection
//!
//! Inputs are filtered by extension before any bytes are read; the actual
//! decoder is chosen later from file content.

use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{OptimizeError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Encodings the optimizer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Lossy WebP via libwebp
    #[default]
    WebP,
    /// Baseline JPEG, alpha is dropped
    Jpeg,
    /// PNG post-processed by oxipng
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    /// Get format names for CLI help text
    pub fn format_names() -> &'static [&'static str] {
        &["webp", "jpeg", "png"]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::WebP => "WebP",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "webp" => Ok(OutputFormat::WebP),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(OptimizeError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// True when the path carries one of the accepted source extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("webp").unwrap(), OutputFormat::WebP);
        assert_eq!(OutputFormat::from_str("WEBP").unwrap(), OutputFormat::WebP);
        assert_eq!(OutputFormat::from_str("jpg").unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_str("jpeg").unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_str("png").unwrap(), OutputFormat::Png);

        assert!(matches!(
            OutputFormat::from_str("gif"),
            Err(OptimizeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::WebP.extension(), "webp");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::default(), OutputFormat::WebP);
    }

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("hero.png")));
        assert!(is_supported_image(Path::new("hero.jpg")));
        assert!(is_supported_image(Path::new("hero.JPEG")));
        assert!(is_supported_image(Path::new("hero.WebP")));

        assert!(!is_supported_image(Path::new("hero.gif")));
        assert!(!is_supported_image(Path::new("hero.tiff")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("hero")));
    }
}
