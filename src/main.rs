use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use strokepad::api;
use strokepad::assets::{AssetCategory, AssetLoader};
use strokepad::models::{AppConfig, OutputColor};
use strokepad::server;
use strokepad::services::RenderService;

#[derive(Parser)]
#[command(name = "strokepad")]
#[command(about = "Strokepad - turns freehand pen strokes into 28x28 classifier-ready images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render a stroke file directly to a PNG file
    Render {
        /// JSON file with `strokes` and optional `box`, same shape as POST /transform
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Write a single-channel grayscale PNG
        #[arg(long)]
        gray: bool,

        /// Output side length (overrides config)
        #[arg(long)]
        size: Option<u32>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract the static drawing site
        #[arg(long = "static")]
        static_site: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Strokepad API",
        description = "Turns freehand pen strokes into 28x28 classifier-ready images",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_transform),
    components(schemas(api::TransformRequest, api::TransformErrorResponse)),
    tags(
        (name = "Transform", description = "Stroke to image conversion")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            gray,
            size,
        }) => run_render_command(&input, &output, gray, size),
        Some(Commands::Init {
            static_site,
            config,
            all,
            force,
            list,
        }) => run_init_command(static_site, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Render a stroke file directly to a PNG file (no server needed)
fn run_render_command(
    input: &Path,
    output: &Path,
    gray: bool,
    size: Option<u32>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strokepad=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let asset_loader = AssetLoader::from_env();
    let mut config = AppConfig::load_from_assets(&asset_loader);
    if gray {
        config.output.color = OutputColor::Gray;
    }
    if let Some(size) = size {
        config.render.output_size = size;
    }

    config
        .render
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid render options: {e}"))?;
    let renderer = RenderService::from_config(&config);

    let content = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let request: api::TransformRequest = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid stroke file {}: {e}", input.display()))?;

    let (strokes, bbox) = request.into_parts(config.render.crop_padding)?;
    let png_bytes = renderer
        .render_png_sync(&strokes, &bbox)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;

    // Write to file
    std::fs::write(output, &png_bytes)?;
    println!(
        "Rendered {} stroke(s) to {} ({} bytes)",
        strokes.len(),
        output.display(),
        png_bytes.len()
    );

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    static_site: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Static site:");
        for f in AssetLoader::list_embedded(AssetCategory::Static) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || static_site {
        categories.push(AssetCategory::Static);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --static, or --config");
        eprintln!("\nRun 'strokepad init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let static_dir = std::env::var("STATIC_DIR").ok();

    println!("Strokepad v{VERSION}");
    println!("Stroke-to-image server for handwriting classifiers\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  STATIC_DIR  = {}",
        static_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:  {config_source}");

    let embedded_count = AssetLoader::list_embedded(AssetCategory::Static).len();
    match static_dir {
        Some(ref path) if Path::new(path).exists() => println!("  Static:  {path}"),
        _ => println!("  Static:  embedded ({embedded_count} files)"),
    }

    let loader = AssetLoader::new(None, config_file.map(PathBuf::from));
    let config = AppConfig::load_from_assets(&loader);
    let render = &config.render;
    println!("\nRender Settings:");
    println!(
        "  Output:  {0}x{0} {1}",
        render.output_size,
        config.output.color.name()
    );
    println!(
        "  Pen:     {}px, cap {:?}, join {:?}, anti-alias {}",
        render.stroke_width, render.line_cap, render.line_join, render.anti_alias
    );
    println!("  Filter:  {}", render.filter.name());

    println!("\nCommands:");
    println!("  strokepad serve    Start the HTTP server");
    println!("  strokepad render   Render a stroke file to PNG");
    println!("  strokepad init     Extract embedded assets");
    println!("\nRun 'strokepad --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strokepad=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    // Log asset sources
    tracing::info!(
        static_site = %asset_loader.static_source(),
        config = %asset_loader.config_source(),
        "Asset sources configured"
    );

    // Create application state using shared server module
    let state = server::create_app_state(asset_loader)?;

    // Build router: shared routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Strokepad server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
