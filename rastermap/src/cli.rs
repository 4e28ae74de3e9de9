//! Command-line interface implementation
//!
//! One subcommand per pipeline operation, against one input image. Map
//! commands print their result; transform commands save an output file
//! named after the operation (`grayscale.png`, `transparency.png`, ...).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use rastermap_classify::{ClassifyError, ImageMap, black_pixels, build_image_map, colored_pixels};
use rastermap_io::{IoError, ImageFormat, read_image, save_named};
use rastermap_transform::{Axis, TransformError, extract_populated, grayscale, to_transparent};

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Anything a CLI invocation can fail with.
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// rastermap - classify and transform raster images at the pixel level
#[derive(Parser)]
#[command(name = "rastermap")]
#[command(about = "Classify and transform raster images at the pixel level")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the image's size and color mode
    Metadata {
        /// Input image (PNG or JPEG)
        input: PathBuf,
    },

    /// Print the full coordinate-to-channels map of the image
    ImagePixels {
        /// Input image (PNG or JPEG)
        input: PathBuf,
    },

    /// Print the cells whose pixels are exactly black
    CheckBlackCells {
        /// Input image (PNG or JPEG)
        input: PathBuf,
    },

    /// Print the cells whose pixels carry any color
    CheckColoredCells {
        /// Input image (PNG or JPEG)
        input: PathBuf,
    },

    /// Grayscale the image (wholly, or a leading fraction of one axis)
    /// and save it as `grayscale.<format>`
    Grayscale {
        /// Input image (PNG or JPEG)
        input: PathBuf,

        /// Fraction denominator: 2 grayscales half the axis, 0 the whole
        /// image
        #[arg(short, long, default_value_t = 0)]
        factor: u32,

        /// Axis the window clips: x (columns) or y (rows)
        #[arg(short, long, default_value = "x")]
        axis: Axis,

        /// Output format: png or jpeg
        #[arg(long, default_value = "png")]
        format: String,
    },

    /// Rewrite the populated (non-black) cells and save the image as
    /// `extract-colored.<format>`
    ExtractColored {
        /// Input image (PNG or JPEG)
        input: PathBuf,

        /// Output format: png or jpeg
        #[arg(long, default_value = "png")]
        format: String,
    },

    /// Convert black regions to transparency and save the RGBA result as
    /// transparency.png
    Transparency {
        /// Input image (PNG or JPEG)
        input: PathBuf,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Metadata { input } => run_metadata(&input),
        Commands::ImagePixels { input } => run_image_pixels(&input),
        Commands::CheckBlackCells { input } => run_check_cells(&input, CellClass::Black),
        Commands::CheckColoredCells { input } => run_check_cells(&input, CellClass::Colored),
        Commands::Grayscale {
            input,
            factor,
            axis,
            format,
        } => run_grayscale(&input, factor, axis, &format),
        Commands::ExtractColored { input, format } => run_extract(&input, &format),
        Commands::Transparency { input } => run_transparency(&input),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

enum CellClass {
    Black,
    Colored,
}

fn run_metadata(input: &PathBuf) -> Result<(), CliError> {
    let image = read_image(input)?;
    let (width, height) = image.size();
    println!("size: {}x{}", width, height);
    println!("mode: {}", image.mode());
    Ok(())
}

fn run_image_pixels(input: &PathBuf) -> Result<(), CliError> {
    let image = read_image(input)?;
    let map = build_image_map(&image)?;
    print_map(&map);
    Ok(())
}

fn run_check_cells(input: &PathBuf, class: CellClass) -> Result<(), CliError> {
    let image = read_image(input)?;
    let map = build_image_map(&image)?;
    let cells = match class {
        CellClass::Black => black_pixels(&map),
        CellClass::Colored => colored_pixels(&map),
    };
    print_map(&cells);
    println!("{} cells", cells.len());
    Ok(())
}

fn run_grayscale(input: &PathBuf, factor: u32, axis: Axis, format: &str) -> Result<(), CliError> {
    let format = ImageFormat::from_name(format)?;
    let mut image = read_image(input)?;
    grayscale(&mut image, factor, axis)?;
    let path = save_named(&image, "grayscale", format)?;
    println!("saved {}", path.display());
    Ok(())
}

fn run_extract(input: &PathBuf, format: &str) -> Result<(), CliError> {
    let format = ImageFormat::from_name(format)?;
    let mut image = read_image(input)?;
    let map = build_image_map(&image)?;
    extract_populated(&mut image, &map)?;
    let path = save_named(&image, "extract-colored", format)?;
    println!("saved {}", path.display());
    Ok(())
}

fn run_transparency(input: &PathBuf) -> Result<(), CliError> {
    let image = read_image(input)?;
    let rgba = to_transparent(&image)?;
    // Always PNG: JPEG would discard the alpha channel this just produced.
    let path = save_named(&rgba, "transparency", ImageFormat::Png)?;
    println!("saved {}", path.display());
    Ok(())
}

fn print_map(map: &ImageMap) {
    for (&(x, y), channels) in map {
        println!("({}, {}) = {}", x, y, channels);
    }
}
