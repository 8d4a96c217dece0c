use crate::constants::{
    DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, HIGH_QUALITY_PNG_THRESHOLD, LIBDEFLATER_HIGH_LEVEL,
    LIBDEFLATER_LOW_LEVEL, MAX_QUALITY, MEDIUM_QUALITY_PNG_THRESHOLD, MIN_QUALITY, OXIPNG_PRESET,
    ZOPFLI_ITERATIONS,
};
use crate::error::{OptimizeError, Result};
use crate::formats::OutputFormat;
use crate::verbose;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use oxipng::Deflaters;
use std::fs;
use std::io::{Cursor, Write};
use std::num::NonZeroU8;
use std::path::Path;
use tempfile::NamedTempFile;

/// The resize/encode preset applied to every file in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u8,
    pub format: OutputFormat,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
            format: OutputFormat::default(),
        }
    }
}

impl OptimizeOptions {
    /// Builds a preset, falling back to the defaults for omitted values.
    ///
    /// When no height bound is given the width bound is used for both sides,
    /// so the longer side of the output never exceeds `max_width`.
    pub fn new(
        max_width: Option<u32>,
        max_height: Option<u32>,
        quality: Option<u8>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(OptimizeError::InvalidQuality(quality));
        }

        let max_width = max_width.unwrap_or(DEFAULT_MAX_WIDTH);
        if max_width == 0 {
            return Err(OptimizeError::InvalidDimension("width", max_width));
        }

        let max_height = max_height.unwrap_or(max_width);
        if max_height == 0 {
            return Err(OptimizeError::InvalidDimension("height", max_height));
        }

        Ok(Self {
            max_width,
            max_height,
            quality,
            format: format.unwrap_or_default(),
        })
    }
}

/// Size and geometry of one optimized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageStats {
    pub original_size: u64,
    pub optimized_size: u64,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
}

/// Fit-inside scaling without enlargement.
///
/// Returns the source dimensions unchanged when they already fit the
/// `max_width x max_height` box. Otherwise scales both sides by the same
/// factor so the result fits, keeping each side at least one pixel.
pub fn target_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let new_width = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let new_height = ((height as f64 * scale).round() as u32).clamp(1, max_height);

    (new_width, new_height)
}

/// Reads and decodes a source image.
///
/// The whole file is read into memory first so the handle is released before
/// decoding starts. The decoder is picked from the file's content, not its
/// extension.
pub fn load_image(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let bytes = fs::read(input_path)?;
    let original_size = bytes.len() as u64;

    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    if let Some(format) = reader.format() {
        verbose!("{:?}: detected {:?}", input_path, format);
    }
    let img = reader.decode()?;

    Ok((img, original_size))
}

pub fn resize_to_fit(img: DynamicImage, options: &OptimizeOptions) -> DynamicImage {
    let (width, height) = img.dimensions();
    let (new_width, new_height) =
        target_dimensions(width, height, options.max_width, options.max_height);

    if (new_width, new_height) == (width, height) {
        return img;
    }

    verbose!(
        "Resizing {}x{} -> {}x{}",
        width,
        height,
        new_width,
        new_height
    );
    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}

/// Encodes `img` in memory with the preset's format and quality.
pub fn encode_image(img: &DynamicImage, options: &OptimizeOptions) -> Result<Vec<u8>> {
    match options.format {
        OutputFormat::WebP => encode_webp(img, options.quality),
        OutputFormat::Jpeg => encode_jpeg(img, options.quality),
        OutputFormat::Png => encode_png(img, options.quality),
    }
}

fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();

    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality as f32)
    } else {
        let rgb = img.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality as f32)
    };

    let memory = encoded.map_err(|e| OptimizeError::WebPEncoding(format!("{:?}", e)))?;
    Ok(memory.to_vec())
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)?;
    Ok(buffer)
}

fn encode_png(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)?;

    let mut oxipng_options = oxipng::Options::from_preset(OXIPNG_PRESET);
    oxipng_options.deflate = png_deflater(quality);

    oxipng::optimize_from_memory(buffer.get_ref(), &oxipng_options)
        .map_err(|e| OptimizeError::PngOptimization(e.to_string()))
}

fn png_deflater(quality: u8) -> Deflaters {
    if quality >= HIGH_QUALITY_PNG_THRESHOLD {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap_or(NonZeroU8::MIN),
        }
    } else if quality >= MEDIUM_QUALITY_PNG_THRESHOLD {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    }
}

/// Writes `bytes` to `output_path` through a temp file in the same directory.
///
/// The final path only appears once every byte is on disk; on error the temp
/// file is removed when it drops.
pub fn write_output(bytes: &[u8], output_path: &Path) -> Result<u64> {
    let dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.persist(output_path).map_err(|e| e.error)?;

    Ok(fs::metadata(output_path)?.len())
}

/// Core per-file pipeline: load -> resize -> encode -> write -> measure.
pub fn optimize_image(
    input_path: &Path,
    output_path: &Path,
    options: &OptimizeOptions,
) -> Result<ImageStats> {
    let (img, original_size) = load_image(input_path)?;
    let original_dimensions = img.dimensions();

    let img = resize_to_fit(img, options);
    let output_dimensions = img.dimensions();

    let encoded = encode_image(&img, options)?;
    let optimized_size = write_output(&encoded, output_path)?;

    Ok(ImageStats {
        original_size,
        optimized_size,
        original_dimensions,
        output_dimensions,
    })
}
