//! OCR Text Layer - map OCR engine output onto a PDF text layer
//!
//! Takes the per-page results of an OCR engine run over rendered page images
//! and produces the text-layer JSON a PDF SDK merges into the document.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ocr_text_layer::config::{self, AppConfig, PlatformSetting};
use ocr_text_layer::scan::{self, JsonPageSource, LogProgress, OcrScan, ScanSettings};
use ocr_text_layer::storage;

/// OCR Text Layer - build searchable text layers from OCR output
#[derive(Parser, Debug)]
#[command(name = "ocr-text-layer")]
#[command(about = "Map OCR engine output onto a PDF SDK text-layer document")]
struct Args {
    /// Configuration file (defaults to config.toml in the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map recorded engine results (one JSON file per page) onto a text layer
    Convert(ConvertArgs),
    /// List supported recognition languages
    Languages,
    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug)]
struct ConvertArgs {
    /// Engine result for each page, in page order
    #[arg(short, long = "page", required = true)]
    pages: Vec<PathBuf>,

    /// Render quality multiplier the pages were recognized at
    #[arg(short, long)]
    quality: Option<f64>,

    /// Recognition language code
    #[arg(short, long)]
    language: Option<String>,

    /// Platform whose render quirks to reproduce
    #[arg(long, value_enum)]
    platform: Option<PlatformSetting>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print progress lines to stderr
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the document
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    match args.command {
        Command::Languages => {
            for (code, name) in scan::languages::languages_by_name() {
                println!("{:<10} {}", code, name);
            }
            Ok(())
        }
        Command::InitConfig { force } => init_config(args.config.as_deref(), force),
        Command::Convert(convert) => {
            let config = load_or_create_config(args.config.as_deref())?;
            run_convert(config, convert)
        }
    }
}

fn default_config_path() -> Result<PathBuf> {
    Ok(storage::get_config_dir()?.join("config.toml"))
}

/// Load configuration from file or fall back to defaults
fn load_or_create_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        let config = config::load_config(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?;
        info!("Loaded configuration from {:?}", path);
        return Ok(config);
    }

    match default_config_path() {
        Ok(config_path) if config_path.exists() => {
            let config = config::load_or_default(&config_path)?;
            info!("Loaded configuration from {:?}", config_path);
            Ok(config)
        }
        Ok(_) => {
            info!("Using default configuration");
            Ok(AppConfig::default())
        }
        Err(e) => {
            warn!("No config directory ({}), using default configuration", e);
            Ok(AppConfig::default())
        }
    }
}

fn init_config(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    if path.exists() && !force {
        bail!("{:?} already exists (use --force to overwrite)", path);
    }
    config::save_config(&AppConfig::default(), &path)?;
    info!("Wrote default configuration to {:?}", path);
    Ok(())
}

fn run_convert(config: AppConfig, args: ConvertArgs) -> Result<()> {
    let language = args.language.unwrap_or(config.scan.language);
    let quality = args.quality.unwrap_or(config.scan.quality);
    let platform = args.platform.unwrap_or(config.scan.platform).resolve();
    let pretty = args.pretty || config.output.pretty;

    let ocr_scan = OcrScan::new(ScanSettings::new(language, quality)?, platform);
    let mut source = JsonPageSource::new(args.pages);

    let document = if args.progress {
        ocr_scan.run_with_reporter(&mut source, |event| eprintln!("{}", event.message()))?
    } else {
        ocr_scan.run(&mut source, &LogProgress)?
    };

    match args.output {
        Some(path) => {
            storage::write_document(&document, &path, pretty)?;
            info!(
                "Wrote text layer for {} page(s), {} words to {:?}",
                document.pages.len(),
                document.word_count(),
                path
            );
        }
        None => {
            let json = if pretty {
                document.to_json_pretty()?
            } else {
                document.to_json()?
            };
            println!("{}", json);
        }
    }

    Ok(())
}
