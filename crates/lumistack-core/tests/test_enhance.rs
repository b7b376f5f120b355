mod common;

use lumistack_core::enhance::enhance;

use common::{solid_raster, solid_rgba_raster, textured_raster};

#[test]
fn test_flat_midgray_unchanged() {
    // Sharpening is a no-op on flat input; 128 sits on the contrast pivot.
    let image = solid_raster(10, 10, 128);
    let result = enhance(&image).unwrap();
    assert_eq!(result, image);
}

#[test]
fn test_flat_bright_gains_contrast() {
    // (200 - 127.5) * 1.05 + 127.5 = 203.625 -> 204
    let image = solid_raster(10, 10, 200);
    let result = enhance(&image).unwrap();
    assert_eq!(result.data[[3, 3, 0]], 204);
}

#[test]
fn test_flat_dark_loses_brightness() {
    // (50 - 127.5) * 1.05 + 127.5 = 46.125 -> 46
    let image = solid_raster(10, 10, 50);
    let result = enhance(&image).unwrap();
    assert_eq!(result.data[[0, 0, 2]], 46);
}

#[test]
fn test_deterministic() {
    let image = textured_raster(24, 24);
    let a = enhance(&image).unwrap();
    let b = enhance(&image).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_input_not_mutated() {
    let image = textured_raster(16, 16);
    let before = image.clone();
    let _ = enhance(&image).unwrap();
    assert_eq!(image, before);
}

#[test]
fn test_dimensions_preserved() {
    let image = textured_raster(33, 17);
    let result = enhance(&image).unwrap();
    assert_eq!(result.width(), 33);
    assert_eq!(result.height(), 17);
    assert_eq!(result.channels(), 3);
}

#[test]
fn test_alpha_passes_through() {
    let image = solid_rgba_raster(8, 8, 200, 77);
    let result = enhance(&image).unwrap();
    assert_eq!(result.channels(), 4);
    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(result.data[[row, col, 3]], 77);
        }
    }
}

#[test]
fn test_edges_get_emphasized() {
    // A hard vertical edge should gain local contrast from the sharpening pass.
    let mut image = solid_raster(10, 10, 60);
    for row in 0..10 {
        for col in 5..10 {
            for ch in 0..3 {
                image.data[[row, col, ch]] = 190;
            }
        }
    }
    let result = enhance(&image).unwrap();
    // Bright side of the edge ends up brighter than the flat bright interior.
    assert!(result.data[[5, 5, 0]] > result.data[[5, 8, 0]]);
    // Dark side of the edge ends up darker than the flat dark interior.
    assert!(result.data[[5, 4, 0]] < result.data[[5, 1, 0]]);
}
