use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_MAX_WIDTH, DEFAULT_OUTPUT_DIR, DEFAULT_PUBLIC_PREFIX,
    DEFAULT_QUALITY,
};
use crate::formats::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "optimize-images",
    about = "Batch resize and re-encode website images to WebP",
    long_about = "optimize-images converts every PNG, JPEG and WebP file in a directory into a \
                  resized, re-encoded copy under the output directory, then reports the size \
                  savings and prints the public paths of the generated files. \
                  Running it without arguments uses the site's standard preset.",
    version,
    after_help = "EXAMPLES:\n  \
    optimize-images\n  \
    optimize-images --input ./raw --output ./public/images/optimized -w 1600 -q 75\n  \
    optimize-images -f jpeg --public-prefix /static/img"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long,
        default_value = DEFAULT_INPUT_DIR,
        help = "Directory of source images"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory for optimized images (created if absent)"
    )]
    pub output: PathBuf,

    #[arg(
        long,
        default_value = DEFAULT_PUBLIC_PREFIX,
        help = "URL path the output directory is served under"
    )]
    pub public_prefix: String,

    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_MAX_WIDTH,
        help = "Maximum width in pixels",
        long_help = "Images are scaled down to fit inside this width while preserving aspect \
                     ratio. Smaller images are never enlarged. Unless --height is given, the \
                     same bound applies to the height."
    )]
    pub width: u32,

    #[arg(
        short = 'H',
        long,
        help = "Maximum height in pixels (default: same as --width)"
    )]
    pub height: Option<u32>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        help = "Encoding quality (1-100)",
        long_help = "Encoding quality from 1 (lowest) to 100 (highest). \
                     For PNG: >=90 uses Zopfli, >=70 uses high compression, <70 uses standard compression."
    )]
    pub quality: u8,

    #[arg(
        short = 'f',
        long,
        default_value = "webp",
        value_parser = parse_format,
        help = "Output format (webp, jpeg, png)"
    )]
    pub format: OutputFormat,

    #[arg(short = 'r', long, help = "Process subdirectories recursively")]
    pub recursive: bool,

    #[arg(long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print per-file details")]
    pub verbose: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|_| {
        format!(
            "unsupported format '{}', expected one of: {}",
            s,
            OutputFormat::format_names().join(", ")
        )
    })
}
