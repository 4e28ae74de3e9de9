//! Test black-to-transparent conversion: vignette mask, alpha multiply and
//! the near-black override

use rastermap_core::{Channels, ColorMode, Raster};
use rastermap_transform::to_transparent;

/// 4x4 image with a pure black top-left 2x2 quadrant, rest pure red.
fn black_quadrant_image() -> Raster {
    let mut img = Raster::new(4, 4, ColorMode::Rgb).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            let px = if x < 2 && y < 2 {
                Channels::Rgb(0, 0, 0)
            } else {
                Channels::Rgb(255, 0, 0)
            };
            img.set(x, y, px).unwrap();
        }
    }
    img
}

#[test]
fn test_black_quadrant_goes_transparent() {
    let img = black_quadrant_image();
    let out = to_transparent(&img).unwrap();

    assert_eq!(out.mode(), ColorMode::Rgba);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let px = out.get(x, y).unwrap();
        assert_eq!(px.rgb(), (0, 0, 0));
        assert_eq!(px.alpha(), Some(0), "black pixel ({},{}) must be fully transparent", x, y);
    }
}

#[test]
fn test_colored_pixels_keep_color_and_mask_alpha() {
    let img = black_quadrant_image();
    let out = to_transparent(&img).unwrap();

    // Red pixels keep their color; alpha comes from the blurred ellipse
    // mask, so pixels near the center stay visible.
    let center = out.get(2, 2).unwrap();
    assert_eq!(center.rgb(), (255, 0, 0));
    assert!(center.alpha().unwrap() > 0);
}

#[test]
fn test_source_is_not_mutated() {
    let img = black_quadrant_image();
    let copy = img.clone();
    let _ = to_transparent(&img).unwrap();
    assert_eq!(img, copy);
}

#[test]
fn test_existing_alpha_is_multiplied_not_replaced() {
    // A half-transparent pixel in the ellipse interior: the fully opaque
    // mask there leaves the original alpha unchanged by the multiply.
    let mut img = Raster::new(16, 16, ColorMode::Rgba).unwrap();
    for y in 0..16 {
        for x in 0..16 {
            img.set(x, y, Channels::Rgba(200, 200, 200, 255)).unwrap();
        }
    }
    img.set(8, 8, Channels::Rgba(100, 100, 100, 128)).unwrap();

    let out = to_transparent(&img).unwrap();
    assert_eq!(out.get(8, 8).unwrap().alpha(), Some(128));
    assert_eq!(out.get(7, 8).unwrap().alpha(), Some(255));
}

#[test]
fn test_corners_fade_under_the_vignette() {
    let mut img = Raster::new(32, 32, ColorMode::Rgb).unwrap();
    for y in 0..32 {
        for x in 0..32 {
            img.set(x, y, Channels::Rgb(180, 40, 90)).unwrap();
        }
    }

    let out = to_transparent(&img).unwrap();
    let corner = out.get(0, 0).unwrap().alpha().unwrap();
    let center = out.get(16, 16).unwrap().alpha().unwrap();
    assert!(corner < center);
    assert_eq!(center, 255);
}
