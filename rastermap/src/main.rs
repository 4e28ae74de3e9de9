//! rastermap - classify and transform raster images at the pixel level

use std::process::ExitCode;

use rastermap::cli;

fn main() -> ExitCode {
    cli::run()
}
