use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tooltip_core::ParsedItem;
use tooltip_core::file_utils::{find_files_with_extension, parse_item_file, read_tooltip_file};
use tooltip_core::parse_item;
use tooltip_core::sections::TextView;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "tooltip",
    version = "0.1.0",
    about = "CLI tool for converting pasted item tooltips into structured records",
    long_about = None
)]
struct Cli {
    /// Path to log file
    #[arg(long, global = true, default_value = "/tmp/item-tooltip.log")]
    log_file: PathBuf,

    /// Verbosity level (repeat for more verbose output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single tooltip from a file or stdin
    Parse {
        /// Tooltip text file (reads stdin if omitted)
        file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Parse every tooltip file in a directory
    Batch {
        /// Directory containing saved tooltips
        #[arg(long)]
        input_dir: PathBuf,
        /// File extension to pick up
        #[arg(long, default_value = "txt")]
        extension: String,
        /// Write one <name>.json per input here instead of printing JSON lines
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
    /// Plain-text sections
    Text,
}

fn setup_logging(verbose: u8, log_file: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let filter_level = match verbose {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(filter_level.into());

    let file_appender = tracing_appender::rolling::never(
        log_file.parent().unwrap_or(Path::new(".")),
        log_file.file_name().unwrap_or(std::ffi::OsStr::new("item-tooltip.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::Layer::new().with_writer(std::io::stderr).with_ansi(true))
        .with(fmt::Layer::new().with_writer(non_blocking).with_ansi(false));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn render(item: &ParsedItem, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => item.to_json()?,
        OutputFormat::Pretty => item.to_json_pretty()?,
        OutputFormat::Text => TextView(item).to_string(),
    })
}

fn run_parse(file: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let text = match file {
        Some(path) => {
            info!("Reading tooltip from {:?}", path);
            read_tooltip_file(&path)?
        }
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let item = parse_item(&text);
    info!("Parsed {:?} ({})", item.name, item.rarity);
    print!("{}", render(&item, format)?);
    if !matches!(format, OutputFormat::Text) {
        println!();
    }
    Ok(())
}

fn run_batch(input_dir: &Path, extension: &str, output_dir: Option<&Path>) -> Result<()> {
    if !input_dir.is_dir() {
        anyhow::bail!("Input directory not found at {:?}", input_dir);
    }

    let files = find_files_with_extension(input_dir, extension)?;
    info!("Found {} .{} files in {:?}", files.len(), extension, input_dir);

    let parsed: Vec<(PathBuf, ParsedItem)> = files
        .par_iter()
        .filter_map(|path| match parse_item_file(path) {
            Ok(item) => Some((path.clone(), item)),
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                None
            }
        })
        .collect();

    match output_dir {
        Some(out) => {
            std::fs::create_dir_all(out)?;
            for (path, item) in &parsed {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "item".to_string());
                let target = out.join(format!("{}.json", stem));
                std::fs::write(&target, item.to_json_pretty()?)?;
            }
            info!("Wrote {} parsed items to {:?}", parsed.len(), out);
        }
        None => {
            for (_, item) in &parsed {
                println!("{}", item.to_json()?);
            }
        }
    }

    info!("Successfully parsed {} of {} tooltip files", parsed.len(), files.len());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(cli.verbose, &cli.log_file)?;

    info!("Starting tooltip CLI");

    match cli.command {
        Commands::Parse { file, format } => run_parse(file, format)?,
        Commands::Batch { input_dir, extension, output_dir } => {
            run_batch(&input_dir, &extension, output_dir.as_deref())?
        }
    }

    Ok(())
}
