mod common;

use lumistack_core::error::StackError;
use lumistack_core::upscale::upscale;

use common::textured_raster;

#[test]
fn test_factor_one_is_passthrough() {
    let image = textured_raster(20, 15);
    let original = image.clone();
    let result = upscale(image, 1.0).unwrap();
    assert_eq!(result, original);
}

#[test]
fn test_factor_two_doubles_dimensions() {
    let image = textured_raster(50, 30);
    let result = upscale(image, 2.0).unwrap();
    assert_eq!(result.width(), 100);
    assert_eq!(result.height(), 60);
    assert_eq!(result.channels(), 3);
}

#[test]
fn test_fractional_factor_rounds_dimensions() {
    // 5 * 1.5 = 7.5 -> 8, 3 * 1.5 = 4.5 -> 5
    let image = textured_raster(5, 3);
    let result = upscale(image, 1.5).unwrap();
    assert_eq!(result.width(), 8);
    assert_eq!(result.height(), 5);
}

#[test]
fn test_factor_below_one_error() {
    let image = textured_raster(4, 4);
    let err = upscale(image, 0.5).unwrap_err();
    assert!(matches!(err, StackError::InvalidFactor(_)));
}

#[test]
fn test_nan_factor_error() {
    let image = textured_raster(4, 4);
    let err = upscale(image, f32::NAN).unwrap_err();
    assert!(matches!(err, StackError::InvalidFactor(_)));
}

#[test]
fn test_rgba_survives_upscale() {
    let image = common::solid_rgba_raster(10, 10, 120, 200);
    let result = upscale(image, 2.0).unwrap();
    assert_eq!(result.width(), 20);
    assert_eq!(result.height(), 20);
    assert_eq!(result.channels(), 4);
}
