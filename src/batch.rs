use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PUBLIC_PREFIX, FOLDER_PREFIX, PATHS_PREFIX,
    PROGRESS_BAR_TEMPLATE,
};
use crate::error::{OptimizeError, Result};
use crate::formats::{is_supported_image, OutputFormat};
use crate::naming::{claim_unique_name, derive_output_name};
use crate::processing::{optimize_image, OptimizeOptions};
use crate::report::{BatchReport, JobFailure, JobResult};
use crate::{error, info, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Everything one batch run needs. The library never falls back to global
/// paths, so tests can point a run at any pair of directories.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// URL path the output directory is served under, used for the
    /// generated-paths listing only.
    pub public_prefix: String,
    pub recursive: bool,
    pub options: OptimizeOptions,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, OptimizeOptions::default())
    }
}

impl BatchConfig {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        options: OptimizeOptions,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            recursive: false,
            options,
        }
    }

    pub fn with_public_prefix(mut self, public_prefix: impl Into<String>) -> Self {
        self.public_prefix = public_prefix.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// One planned conversion: where it reads, what it is called, where it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub source: PathBuf,
    /// 1-based position in discovery order.
    pub position: usize,
    pub output_name: String,
    pub output_path: PathBuf,
}

/// Lists accepted image files under `input_dir`, sorted by file name.
///
/// Hidden entries are skipped. A missing or non-directory input is an error;
/// an empty directory is not.
pub fn collect_image_files(input_dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !input_dir.exists() {
        return Err(OptimizeError::InputDirectoryNotFound(input_dir.to_path_buf()));
    }
    if !input_dir.is_dir() {
        return Err(OptimizeError::NotADirectory(input_dir.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));

    let mut image_files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_supported_image(entry.path()) {
            image_files.push(entry.into_path());
        }
    }

    Ok(image_files)
}

/// Names the output for `source` and reserves that name in `taken`.
pub fn plan_job(
    source: &Path,
    position: usize,
    output_dir: &Path,
    format: OutputFormat,
    taken: &mut HashSet<String>,
) -> Result<ImageJob> {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| OptimizeError::InvalidFileName(source.to_path_buf()))?;

    let output_name = claim_unique_name(derive_output_name(&stem, position), taken);
    let output_path = output_dir.join(format!("{}.{}", output_name, format.extension()));

    Ok(ImageJob {
        source: source.to_path_buf(),
        position,
        output_name,
        output_path,
    })
}

/// Runs one batch: discover, then convert every file in order.
///
/// Only discovery and output-directory creation can fail the run. Per-file
/// errors are logged, collected in [`BatchReport::failures`], and the loop
/// moves on.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    let start_time = Instant::now();

    info!("🚀 Starting image optimization...");
    info!("{} Input: {}", FOLDER_PREFIX, config.input_dir.display());
    info!("{} Output: {}", FOLDER_PREFIX, config.output_dir.display());
    info!(
        "⚙️  Preset: fit {}x{}, quality {}, {}",
        config.options.max_width,
        config.options.max_height,
        config.options.quality,
        config.options.format
    );

    let image_files = collect_image_files(&config.input_dir, config.recursive)?;
    let total_files = image_files.len();

    info!("📊 Found {} image files to process", total_files);

    if total_files == 0 {
        warn!("No image files found in {}", config.input_dir.display());
        return Ok(BatchReport {
            elapsed: start_time.elapsed(),
            ..Default::default()
        });
    }

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| OptimizeError::DirectoryCreationFailed(config.output_dir.clone(), e))?;

    let progress = create_progress_bar(total_files as u64);
    let mut taken = HashSet::new();
    let mut report = BatchReport {
        files_found: total_files,
        ..Default::default()
    };

    for (index, source) in image_files.iter().enumerate() {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.set_message(name);

        match process_one(source, index + 1, config, &mut taken) {
            Ok(result) => {
                progress.suspend(|| info!("{}", result.status_line()));
                report.results.push(result);
            }
            Err(failure) => {
                progress.suspend(|| error!("{}", failure.status_line()));
                report.failures.push(failure);
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    report.elapsed = start_time.elapsed();

    print_summary(&report, &config.public_prefix);

    Ok(report)
}

fn process_one(
    source: &Path,
    position: usize,
    config: &BatchConfig,
    taken: &mut HashSet<String>,
) -> std::result::Result<JobResult, JobFailure> {
    let failure = |e: OptimizeError| JobFailure {
        source: source.to_path_buf(),
        message: e.to_string(),
    };

    let job = plan_job(
        source,
        position,
        &config.output_dir,
        config.options.format,
        taken,
    )
    .map_err(failure)?;

    match optimize_image(&job.source, &job.output_path, &config.options) {
        Ok(stats) => {
            verbose!(
                "{}: {}x{} -> {}x{}",
                job.output_name,
                stats.original_dimensions.0,
                stats.original_dimensions.1,
                stats.output_dimensions.0,
                stats.output_dimensions.1
            );
            Ok(JobResult {
                source: job.source,
                output: job.output_path,
                stats,
            })
        }
        Err(e) => {
            // nothing was written, so a later file may use the name
            taken.remove(&job.output_name);
            Err(failure(e))
        }
    }
}

fn create_progress_bar(len: u64) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(PROGRESS_BAR_TEMPLATE)
        .map(|s| s.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(len).with_style(style)
}

fn print_summary(report: &BatchReport, public_prefix: &str) {
    info!("");
    for line in report.summary_lines() {
        info!("{}", line);
    }

    if report.results.is_empty() {
        return;
    }

    info!("");
    info!("{} Generated paths:", PATHS_PREFIX);
    for line in report.generated_paths(public_prefix) {
        info!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_collect_image_files_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["c.webp", "a.png", "B.JPG", "d.jpeg", "notes.txt", "anim.gif", ".hidden.png"] {
            File::create(temp_dir.path().join(name)).unwrap();
        }

        let files = collect_image_files(temp_dir.path(), false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["B.JPG", "a.png", "c.webp", "d.jpeg"]);
    }

    #[test]
    fn test_collect_image_files_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        File::create(temp_dir.path().join("top.jpg")).unwrap();
        File::create(subdir.join("nested.png")).unwrap();

        assert_eq!(collect_image_files(temp_dir.path(), false).unwrap().len(), 1);
        assert_eq!(collect_image_files(temp_dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_collect_image_files_skips_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let hidden = temp_dir.path().join(".cache");
        fs::create_dir(&hidden).unwrap();
        File::create(hidden.join("thumb.png")).unwrap();

        assert!(collect_image_files(temp_dir.path(), true).unwrap().is_empty());
    }

    #[test]
    fn test_collect_image_files_missing_directory() {
        let result = collect_image_files(Path::new("/nonexistent/images"), false);
        assert!(matches!(
            result,
            Err(OptimizeError::InputDirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_collect_image_files_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.png");
        File::create(&file).unwrap();

        let result = collect_image_files(&file, false);
        assert!(matches!(result, Err(OptimizeError::NotADirectory(_))));
    }

    #[test]
    fn test_plan_job_names() {
        let mut taken = HashSet::new();
        let out = Path::new("/tmp/out");

        let job = plan_job(
            Path::new("in/3f2a9c1e-7b4d-4e2f-9a6b-1c0d5e8f7a2b.png"),
            3,
            out,
            OutputFormat::WebP,
            &mut taken,
        )
        .unwrap();
        assert_eq!(job.output_name, "parallax-3");
        assert_eq!(job.output_path, PathBuf::from("/tmp/out/parallax-3.webp"));

        let job = plan_job(
            Path::new("in/Our Team.JPG"),
            4,
            out,
            OutputFormat::Jpeg,
            &mut taken,
        )
        .unwrap();
        assert_eq!(job.output_path, PathBuf::from("/tmp/out/our-team.jpg"));
    }

    #[test]
    fn test_plan_job_collision_gets_suffix() {
        let mut taken = HashSet::new();
        let out = Path::new("out");

        let first = plan_job(Path::new("Hero.jpg"), 1, out, OutputFormat::WebP, &mut taken).unwrap();
        let second = plan_job(Path::new("hero.png"), 2, out, OutputFormat::WebP, &mut taken).unwrap();

        assert_eq!(first.output_name, "hero");
        assert_eq!(second.output_name, "hero-2");
    }

    #[test]
    fn test_batch_config_builders() {
        let config = BatchConfig::new("in", "out", OptimizeOptions::default())
            .with_public_prefix("/assets")
            .with_recursive(true);

        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.public_prefix, "/assets");
        assert!(config.recursive);

        let default = BatchConfig::default();
        assert_eq!(default.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(default.public_prefix, DEFAULT_PUBLIC_PREFIX);
    }
}
