use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use glassblur_core::blurring::domain::blur_quality::BlurQuality;
use glassblur_core::blurring::domain::blur_request::BlurRequest;
use glassblur_core::blurring::infrastructure::pixel_blur_engine::PixelBlurEngine;
use glassblur_core::image_io::infrastructure::image_file_reader::ImageFileReader;
use glassblur_core::image_io::infrastructure::image_file_writer::ImageFileWriter;
use glassblur_core::pipeline::blur_image_use_case::BlurImageUseCase;
use glassblur_core::shared::constants::IMAGE_EXTENSIONS;
use glassblur_core::shared::settings::BlurSettings;

/// Backdrop blur and liquid glass effects for images.
#[derive(Parser)]
#[command(name = "glassblur")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file. The format follows the extension.
    output: PathBuf,

    /// Blur radius in pixels (overrides saved settings).
    #[arg(long)]
    radius: Option<f32>,

    /// Blur quality: fast, standard, premium or liquid.
    #[arg(long)]
    quality: Option<BlurQuality>,

    /// Apply a glass backdrop tint of this intensity (0.0-1.0).
    #[arg(long)]
    backdrop_intensity: Option<f32>,

    /// Use the two-stage depth backdrop (with --backdrop-intensity).
    #[arg(long, overrides_with = "no_depth")]
    depth: bool,

    /// Use the single glass backdrop even if depth is saved.
    #[arg(long, overrides_with = "depth")]
    no_depth: bool,

    /// Settings file to read defaults from.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store the effective settings as the new defaults.
    #[arg(long)]
    save_settings: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let settings = merge_settings(
        BlurSettings::load_or_default(cli.config.as_deref()),
        &cli,
    );
    if cli.save_settings {
        let path = settings.save(cli.config.as_deref())?;
        log::info!("Settings saved to {}", path.display());
    }

    let request = BlurRequest::from_settings(&settings);
    log::info!(
        "Blurring {} (radius={}, quality={})",
        cli.input.display(),
        request.radius,
        request.quality
    );

    let use_case = BlurImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(PixelBlurEngine::new()),
        request,
    );
    use_case.execute(&cli.input, &cli.output)?;
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn merge_settings(mut settings: BlurSettings, cli: &Cli) -> BlurSettings {
    if let Some(radius) = cli.radius {
        settings.radius = radius;
    }
    if let Some(quality) = cli.quality {
        settings.quality = quality;
    }
    if cli.backdrop_intensity.is_some() {
        settings.backdrop_intensity = cli.backdrop_intensity;
    }
    if cli.depth {
        settings.depth = true;
    } else if cli.no_depth {
        settings.depth = false;
    }
    settings
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_image(&cli.input) {
        return Err(format!("Unsupported input format: {}", cli.input.display()).into());
    }
    if !is_image(&cli.output) {
        return Err(format!("Unsupported output format: {}", cli.output.display()).into());
    }
    if let Some(r) = cli.radius {
        if !r.is_finite() || r < 0.0 {
            return Err(format!("Radius must be a non-negative number, got {r}").into());
        }
    }
    if let Some(i) = cli.backdrop_intensity {
        if !(0.0..=1.0).contains(&i) {
            return Err(format!("Backdrop intensity must be between 0.0 and 1.0, got {i}").into());
        }
    }
    if cli.depth && cli.backdrop_intensity.is_none() {
        log::warn!("--depth has no effect without --backdrop-intensity");
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
