use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixcel::models::{swatches, AppConfig, BrushSize, Color, Tool};
use pixcel::rendering::PngExporter;
use pixcel::services::{convert_image, load_project, save_project, EditSession, PngDecoder};
use pixel_reduce::ConversionMode;

#[derive(Parser)]
#[command(name = "pixcel")]
#[command(about = "Pixel-art grid editor: draw, convert photos, export PNG")]
struct Cli {
    /// YAML config file (defaults to $PIXCEL_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an empty project
    New {
        /// Grid side length
        #[arg(short, long)]
        size: Option<usize>,

        /// Output project file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Convert a PNG photo into a pixel-art project
    Convert {
        /// Source PNG image
        image: PathBuf,

        /// Output project file
        #[arg(short, long)]
        output: PathBuf,

        /// Target grid size (16-64)
        #[arg(short, long)]
        size: Option<u32>,

        /// Palette size (4-32)
        #[arg(short, long)]
        colors: Option<u32>,

        /// Contrast percentage (50-200)
        #[arg(long)]
        contrast: Option<u32>,

        /// Dither strength percentage (0-100)
        #[arg(long)]
        dither: Option<u32>,

        /// Conversion mode: "standard", "dithered" or "edge"
        #[arg(short, long)]
        mode: Option<ConversionMode>,
    },
    /// Render a project to a PNG file
    Export {
        /// Project file
        project: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Pixels per cell (1-64)
        #[arg(long)]
        scale: Option<u32>,

        /// Re-compress the PNG with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Print project statistics
    Info {
        /// Project file
        project: PathBuf,
    },
    /// Flood-fill the region at a cell
    Fill {
        /// Project file
        project: PathBuf,

        #[arg(long)]
        row: usize,

        #[arg(long)]
        col: usize,

        /// Fill color as #RRGGBB or "transparent"
        #[arg(long)]
        color: Color,

        /// Write to this file instead of overwriting the project
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Stamp the brush at a cell
    Draw {
        /// Project file
        project: PathBuf,

        #[arg(long)]
        row: usize,

        #[arg(long)]
        col: usize,

        /// Brush color as #RRGGBB
        #[arg(long, default_value = "#000000")]
        color: Color,

        /// Brush side length
        #[arg(short, long, default_value_t = 1)]
        brush: usize,

        /// Erase instead of painting
        #[arg(long)]
        erase: bool,

        /// Write to this file instead of overwriting the project
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in color swatches
    Swatches,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixcel=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("PIXCEL_CONFIG").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Commands::New { size, output } => run_new(&config, size, &output),
        Commands::Convert {
            image,
            output,
            size,
            colors,
            contrast,
            dither,
            mode,
        } => {
            let mut reduction = config.reduction.clone();
            reduction.target_size = size.unwrap_or(reduction.target_size);
            reduction.palette_size = colors.unwrap_or(reduction.palette_size);
            reduction.contrast = contrast.unwrap_or(reduction.contrast);
            reduction.dither_strength = dither.unwrap_or(reduction.dither_strength);
            reduction.mode = mode.unwrap_or(reduction.mode);
            run_convert(&image, &output, &reduction.to_parameters())
        }
        Commands::Export {
            project,
            output,
            scale,
            optimize,
        } => run_export(
            &project,
            &output,
            scale.unwrap_or(config.export_scale),
            optimize || config.optimize_png,
        ),
        Commands::Info { project } => run_info(&project),
        Commands::Fill {
            project,
            row,
            col,
            color,
            output,
        } => {
            let output = output.unwrap_or_else(|| project.clone());
            run_edit(&config, &project, &output, |session| {
                session.set_tool(Tool::Fill);
                session.set_color(color);
                session.press(row, col)?;
                Ok(())
            })
        }
        Commands::Draw {
            project,
            row,
            col,
            color,
            brush,
            erase,
            output,
        } => {
            let brush = BrushSize::new(brush).context("brush size must be at least 1")?;
            let output = output.unwrap_or_else(|| project.clone());
            run_edit(&config, &project, &output, |session| {
                session.set_tool(if erase { Tool::Eraser } else { Tool::Pencil });
                session.set_color(color);
                session.set_brush_size(brush);
                session.press(row, col)?;
                session.release();
                Ok(())
            })
        }
        Commands::Swatches => {
            run_swatches();
            Ok(())
        }
    }
}

fn run_new(config: &AppConfig, size: Option<usize>, output: &Path) -> anyhow::Result<()> {
    let session = EditSession::new(size.unwrap_or(config.grid_size))?;
    save_project(output, session.grid())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Created {}x{} project: {}",
        session.grid().size(),
        session.grid().size(),
        output.display()
    );
    Ok(())
}

fn run_convert(
    image: &Path,
    output: &Path,
    params: &pixel_reduce::ReductionParameters,
) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(image).with_context(|| format!("Failed to read {}", image.display()))?;
    let grid = convert_image(&PngDecoder, &bytes, params)?;
    save_project(output, &grid)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Converted {} -> {} ({}x{}, {} colors, mode {})",
        image.display(),
        output.display(),
        grid.size(),
        grid.size(),
        grid.distinct_colors(),
        params.mode
    );
    Ok(())
}

fn run_export(project: &Path, output: &Path, scale: u32, optimize: bool) -> anyhow::Result<()> {
    let grid = load_project(project)
        .with_context(|| format!("Failed to load {}", project.display()))?;
    let exporter = PngExporter::new(scale)?.optimize(optimize);
    exporter.save(&grid, output)?;
    println!(
        "Exported {} ({}x{} px)",
        output.display(),
        grid.size() as u32 * scale,
        grid.size() as u32 * scale
    );
    Ok(())
}

fn run_info(project: &Path) -> anyhow::Result<()> {
    let grid = load_project(project)
        .with_context(|| format!("Failed to load {}", project.display()))?;
    println!("Project: {}", project.display());
    println!("  Size:            {}x{}", grid.size(), grid.size());
    println!("  Opaque cells:    {}", grid.opaque_count());
    println!("  Distinct colors: {}", grid.distinct_colors());
    Ok(())
}

/// Load a project into a session, apply one edit, save the result.
fn run_edit<F>(config: &AppConfig, project: &Path, output: &Path, edit: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut EditSession) -> anyhow::Result<()>,
{
    let grid = load_project(project)
        .with_context(|| format!("Failed to load {}", project.display()))?;
    let mut session = EditSession::with_config(config)?;
    session.load_grid(grid);
    edit(&mut session)?;
    save_project(output, session.grid())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Updated {} ({} opaque cells)",
        output.display(),
        session.grid().opaque_count()
    );
    Ok(())
}

fn run_swatches() {
    let line = |colors: &[Color]| {
        colors
            .iter()
            .map(Color::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!("default:");
    for chunk in swatches::DEFAULT_COLORS.chunks(8) {
        println!("  {}", line(chunk));
    }
    for (name, colors) in swatches::COLOR_SCHEMES {
        println!("{name}:");
        println!("  {}", line(colors));
    }
}
