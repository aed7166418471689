//! Command-line interface for batch conversion of images into Truchet tilings

use crate::algorithm::pipeline::{PipelineStage, run_pipeline_observed};
use crate::geometry::tiling::PatternStrategy;
use crate::io::configuration::{
    DEFAULT_OUTLINE_WIDTH, DEFAULT_RASTER_SCALE, DEFAULT_TILE_LENGTH, INPUT_EXTENSIONS,
    OUTPUT_SUFFIX, PipelineConfig, RasterFormat, RenderConfig, VECTOR_EXTENSION,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::{export_raster, load_grayscale};
use crate::io::progress::ProgressManager;
use crate::io::vector::export_svg;
use clap::Parser;
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "truchetize")]
#[command(
    author,
    version,
    about = "Convert greyscale images into Truchet tile illustrations"
)]
/// Command-line arguments for the Truchet conversion tool
pub struct Cli {
    /// Input image file or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Side length of one tile cell in source pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_LENGTH)]
    pub length: usize,

    /// Output path stem without extension (single input file only)
    #[arg(short, long, value_name = "STEM")]
    pub output: Option<PathBuf>,

    /// Raster pixels per canvas unit
    #[arg(short, long, default_value_t = DEFAULT_RASTER_SCALE)]
    pub scale: f64,

    /// Polygon outline width in canvas units
    #[arg(long, default_value_t = DEFAULT_OUTLINE_WIDTH)]
    pub outline: f64,

    /// Raster output format
    #[arg(short, long, value_enum, default_value_t = RasterFormat::Png)]
    pub format: RasterFormat,

    /// Tile with the complementary B/D patterns instead of A/C
    #[arg(short, long)]
    pub alternate: bool,

    /// Hide progress bars and skip notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Convert inputs again even when both outputs already exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Whether inputs with existing outputs are left alone
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Whether progress bars are drawn
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Sampling and tiling parameters selected on the command line
    pub const fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            length: self.length,
            strategy: if self.alternate {
                PatternStrategy::InvertedCheckerboard
            } else {
                PatternStrategy::Checkerboard
            },
        }
    }

    /// Export parameters selected on the command line
    pub const fn render_config(&self) -> RenderConfig {
        RenderConfig {
            raster_scale: self.scale,
            outline_width: self.outline,
            raster_format: self.format,
        }
    }
}

/// Raster and vector paths written for one input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    /// Raster image path
    pub raster: PathBuf,
    /// SVG path
    pub vector: PathBuf,
}

impl OutputPaths {
    /// Derive both output paths by appending extensions to `stem`
    pub fn from_stem(stem: &Path, format: RasterFormat) -> Self {
        Self {
            raster: with_appended_extension(stem, format.extension()),
            vector: with_appended_extension(stem, VECTOR_EXTENSION),
        }
    }

    /// Whether both outputs are already on disk
    pub fn all_exist(&self) -> bool {
        self.raster.exists() && self.vector.exists()
    }
}

// `Path::with_extension` would clobber dots already in the stem
fn with_appended_extension(stem: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Wrap parsed arguments, creating progress bars unless quiet
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Convert every selected input into a raster and an SVG
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target discovery or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.pipeline_config().validate()?;
        self.cli.render_config().validate()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a supported image type",
                ));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &target.display(),
                    &"an output stem can only be given for a single input file",
                ));
            }
            let entries = std::fs::read_dir(target)
                .map_err(|e| file_system_error(target, "read directory", e))?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "read directory entry", e))?
                    .path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let outputs = self.output_paths(input_path);
        if outputs.all_exist() {
            // Skip notices bypass the progress bars
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping {}: outputs already exist", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let outputs = self.output_paths(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let image = load_grayscale(input_path)?;

        let pipeline_config = self.cli.pipeline_config();
        let progress = &mut self.progress_manager;
        let output = run_pipeline_observed(&image, &pipeline_config, |stage| {
            if let Some(pm) = progress.as_mut() {
                pm.update_stage(index, stage);
            }
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, PipelineStage::Export);
        }

        let render_config = self.cli.render_config();
        export_raster(&output.tiling, &render_config, &outputs.raster)?;
        export_svg(&output.tiling, &render_config, &outputs.vector)?;

        info!(
            "Converted {} into {} tiles",
            input_path.display(),
            output.tiling.polygons.len()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn output_paths(&self, input_path: &Path) -> OutputPaths {
        let stem = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_stem(input_path));
        OutputPaths::from_stem(&stem, self.cli.format)
    }

    /// Default output stem: `<input_stem>_truchet` next to the input
    pub fn get_output_stem(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Whether the file name carries the suffix this tool gives its outputs
///
/// Directory scans skip such files so earlier results are never converted
/// again.
pub fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

/// Whether the path has one of the accepted image extensions
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
