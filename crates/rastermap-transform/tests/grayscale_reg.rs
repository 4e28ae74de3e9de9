//! Test whole-image and windowed grayscale conversion

use rastermap_core::{Channels, ColorMode, Raster};
use rastermap_transform::{Axis, grayscale};

/// 10x10 RGB image with a distinct color per pixel.
fn gradient_image() -> Raster {
    let mut img = Raster::new(10, 10, ColorMode::Rgb).unwrap();
    for y in 0..10 {
        for x in 0..10 {
            img.set(x, y, Channels::Rgb((x * 25) as u8, (y * 25) as u8, 200))
                .unwrap();
        }
    }
    img
}

#[test]
fn test_full_grayscale_black_and_red() {
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

    grayscale(&mut img, 0, Axis::X).unwrap();

    // Black stays black, pure red lands on 0.299 * 255 truncated.
    assert_eq!(img.get(0, 0).unwrap(), Channels::Rgb(0, 0, 0));
    assert_eq!(img.get(3, 3).unwrap(), Channels::Rgb(76, 76, 76));
}

#[test]
fn test_window_x_touches_left_half_only() {
    let mut img = gradient_image();
    let original = img.clone();

    grayscale(&mut img, 2, Axis::X).unwrap();

    for y in 0..10 {
        for x in 0..5 {
            let (r, g, b) = img.get(x, y).unwrap().rgb();
            assert!(r == g && g == b, "column {} must be gray", x);
        }
        for x in 5..10 {
            assert_eq!(img.get(x, y).unwrap(), original.get(x, y).unwrap());
        }
    }
}

#[test]
fn test_window_y_touches_top_rows_only() {
    let mut img = gradient_image();
    let original = img.clone();

    grayscale(&mut img, 5, Axis::Y).unwrap();

    for x in 0..10 {
        for y in 0..2 {
            let (r, g, b) = img.get(x, y).unwrap().rgb();
            assert!(r == g && g == b);
        }
        for y in 2..10 {
            assert_eq!(img.get(x, y).unwrap(), original.get(x, y).unwrap());
        }
    }
}

#[test]
fn test_oversized_factor_is_noop() {
    let mut img = gradient_image();
    let original = img.clone();
    grayscale(&mut img, 11, Axis::X).unwrap();
    assert_eq!(img, original);
}

#[test]
fn test_grayscale_is_idempotent() {
    let mut once = gradient_image();
    grayscale(&mut once, 0, Axis::X).unwrap();

    let mut twice = once.clone();
    grayscale(&mut twice, 0, Axis::X).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_alpha_is_preserved() {
    let mut img = Raster::new(2, 2, ColorMode::Rgba).unwrap();
    img.set(0, 0, Channels::Rgba(255, 0, 0, 33)).unwrap();
    img.set(1, 1, Channels::Rgba(10, 20, 30, 0)).unwrap();

    grayscale(&mut img, 0, Axis::X).unwrap();

    assert_eq!(img.get(0, 0).unwrap(), Channels::Rgba(76, 76, 76, 33));
    assert_eq!(img.get(1, 1).unwrap().alpha(), Some(0));
}
