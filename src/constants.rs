pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_MAX_WIDTH: u32 = 1920;

pub const DEFAULT_INPUT_DIR: &str = "public/images/source";
pub const DEFAULT_OUTPUT_DIR: &str = "public/images/optimized";
pub const DEFAULT_PUBLIC_PREFIX: &str = "/images/optimized";

/// Extensions accepted as batch inputs, compared case-insensitively.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Length of a generated identifier such as `3f2a9c1e-7b4d-4e2f-9a6b-1c0d5e8f7a2b`.
pub const GENERATED_ID_LEN: usize = 36;
pub const GENERATED_NAME_PREFIX: &str = "parallax";

pub const HIGH_QUALITY_PNG_THRESHOLD: u8 = 90;
pub const MEDIUM_QUALITY_PNG_THRESHOLD: u8 = 70;
pub const OXIPNG_PRESET: u8 = 4;
pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const FAILURE_PREFIX: &str = "❌";
pub const SUMMARY_PREFIX: &str = "📊";
pub const FOLDER_PREFIX: &str = "📁";
pub const PATHS_PREFIX: &str = "📋";
