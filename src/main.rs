use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettize::models::AppConfig;
use palettize::server;
use palettize::services::{recolor_image, Storage};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PROCESSED_DIR: &str = "processed";

#[derive(Parser)]
#[command(name = "palettize")]
#[command(about = "Palettize - recolor images onto a small palette by luminance")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Recolor a single image file to PNG
    Map {
        /// Input image (PNG, JPEG, GIF, BMP, WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Palette name (unknown names use the default palette)
        #[arg(short, long)]
        palette: Option<String>,
    },
    /// List registered palettes and their colors
    Palettes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Map {
            input,
            output,
            palette,
        }) => run_map_command(&input, &output, palette.as_deref()),
        Some(Commands::Palettes) => run_palettes_command(),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palettize=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Recolor one file without starting a server
fn run_map_command(input: &Path, output: &Path, palette: Option<&str>) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_path().as_deref());
    let registry = config.build_registry();

    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;

    let palette = palette.unwrap_or_else(|| registry.default_palette().name());
    let result = recolor_image(&registry, &bytes, palette)?;

    std::fs::write(output, &result.png_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;

    println!(
        "Recolored {} with {} -> {} ({}x{}, {} bytes)",
        input.display(),
        result.palette,
        output.display(),
        result.width,
        result.height,
        result.png_bytes.len()
    );

    Ok(())
}

/// Print every registered palette with its colors
fn run_palettes_command() -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_path().as_deref());
    let registry = config.build_registry();
    let default = registry.default_palette().name().to_string();

    for palette in registry.iter() {
        let marker = if palette.name() == default {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}{marker}: {}",
            palette.name(),
            palette.to_hex_strings().join(" ")
        );
    }

    Ok(())
}

/// Show version, environment and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let upload_dir = std::env::var("UPLOAD_DIR").ok();
    let processed_dir = std::env::var("PROCESSED_DIR").ok();

    println!("Palettize v{VERSION}");
    println!("Recolor images onto a small palette by luminance\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.unwrap_or_else(|| format!("{DEFAULT_BIND_ADDR} (default)"))
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  UPLOAD_DIR    = {}",
        upload_dir.unwrap_or_else(|| format!("{DEFAULT_UPLOAD_DIR} (default)"))
    );
    println!(
        "  PROCESSED_DIR = {}",
        processed_dir.unwrap_or_else(|| format!("{DEFAULT_PROCESSED_DIR} (default)"))
    );

    if let Some(path) = config_file {
        if !Path::new(&path).exists() {
            println!("\nWarning: CONFIG_FILE does not exist, built-in defaults will be used");
        }
    }

    println!("\nCommands:");
    println!("  palettize serve                               Start the HTTP server");
    println!("  palettize map -i <in> -o <out> [-p <name>]    Recolor one image to PNG");
    println!("  palettize palettes                            List palettes");
    println!("\nRun 'palettize --help' for more details.");
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palettize=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let upload_dir =
        std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());
    let processed_dir =
        std::env::var("PROCESSED_DIR").unwrap_or_else(|_| DEFAULT_PROCESSED_DIR.to_string());
    let config_file = config_path();

    tracing::info!(
        config = %config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string()),
        uploads = %upload_dir,
        processed = %processed_dir,
        "Configuration sources"
    );

    let config = AppConfig::load(config_file.as_deref());
    let storage = Storage::new(upload_dir, processed_dir);
    let state = server::create_app_state(config, storage)?;
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Palettize server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
