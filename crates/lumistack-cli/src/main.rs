mod summary;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use lumistack_core::io::decode::Upload;
use lumistack_core::io::encode::{export, export_filename};
use lumistack_core::pipeline::process;
use lumistack_core::settings::{OutputFormat, StackSettings};

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Lossless PNG
    Png,
    /// Lossy JPEG with a quality setting
    Jpg,
    /// Tagged TIFF
    Tiff,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Jpg => OutputFormat::Jpeg,
            FormatArg::Tiff => OutputFormat::Tiff,
        }
    }
}

#[derive(Parser)]
#[command(name = "lumistack", about = "Median image stacking and enhancement tool")]
#[command(version)]
struct Cli {
    /// Input images (PNG, JPEG or TIFF). Two or more are median-stacked;
    /// a single file is enhanced on its own.
    #[arg(required_unless_present = "write_default_settings")]
    files: Vec<PathBuf>,

    /// Upscale factor (1.0 to 4.0)
    #[arg(long)]
    upscale: Option<f32>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// JPEG quality (60-100), used with --format jpg
    #[arg(long)]
    quality: Option<u8>,

    /// Output path (defaults to processed_image.<ext> in the working directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load settings from a TOML file; command-line flags override it
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the default settings as TOML to the given path and exit
    #[arg(long, value_name = "PATH")]
    write_default_settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_settings(cli: &Cli) -> Result<StackSettings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid settings file {}", path.display()))?
        }
        None => StackSettings::default(),
    };

    if let Some(factor) = cli.upscale {
        settings.upscale_factor = factor;
    }
    if let Some(format) = cli.format {
        settings.output_format = format.into();
    }
    if let Some(quality) = cli.quality {
        settings.jpeg_quality = Some(quality);
    }
    Ok(settings)
}

fn read_uploads(files: &[PathBuf]) -> Result<Vec<Upload>> {
    files
        .iter()
        .map(|path| {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(Upload::new(name, bytes))
        })
        .collect()
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(ref path) = cli.write_default_settings {
        let toml_str = toml::to_string_pretty(&StackSettings::default())?;
        fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        println!("Default settings saved to {}", path.display());
        return Ok(());
    }

    let settings = load_settings(cli)?;
    let uploads = read_uploads(&cli.files)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(if uploads.len() >= 2 {
        format!("Stacking {} images...", uploads.len())
    } else {
        "Enhancing image...".to_string()
    });
    pb.enable_steady_tick(Duration::from_millis(100));

    let image = process(&uploads, &settings)?;
    let result = export(&image, &settings)?;
    pb.finish_and_clear();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_filename(settings.output_format)));
    fs::write(&output, &result.bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    summary::print_result_summary(uploads.len(), &result, &output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli) {
        summary::print_error(&err);
        std::process::exit(1);
    }
}
