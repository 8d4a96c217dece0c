pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod naming;
pub mod processing;
pub mod report;

pub use batch::{collect_image_files, plan_job, run_batch, BatchConfig, ImageJob};
pub use error::{OptimizeError, Result};
pub use formats::{is_supported_image, OutputFormat};
pub use naming::{derive_output_name, is_generated_identifier, slugify};
pub use processing::{
    encode_image, load_image, optimize_image, resize_to_fit, target_dimensions, ImageStats,
    OptimizeOptions,
};
pub use report::{savings_percent, BatchReport, JobFailure, JobResult};
