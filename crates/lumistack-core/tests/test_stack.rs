mod common;

use lumistack_core::error::StackError;
use lumistack_core::stack::median_stack;

use common::{solid_raster, solid_rgba_raster, textured_raster};

#[test]
fn test_identical_images_unchanged() {
    let base = textured_raster(16, 12);
    for n in [2, 3, 5] {
        let images: Vec<_> = (0..n).map(|_| base.clone()).collect();
        let result = median_stack(&images).unwrap();
        assert_eq!(result, base, "median of {} identical images", n);
    }
}

#[test]
fn test_even_count_averages_middle_values() {
    let zeros = solid_raster(8, 8, 0);
    let hundreds = solid_raster(8, 8, 100);
    let result = median_stack(&[zeros, hundreds]).unwrap();
    assert_eq!(result, solid_raster(8, 8, 50));
}

#[test]
fn test_even_count_truncates() {
    // (10 + 15) / 2 = 12.5, truncated to 12
    let a = solid_raster(4, 4, 10);
    let b = solid_raster(4, 4, 15);
    let result = median_stack(&[a, b]).unwrap();
    assert_eq!(result.data[[0, 0, 0]], 12);
}

#[test]
fn test_odd_count_picks_middle() {
    let images = vec![
        solid_raster(4, 4, 255),
        solid_raster(4, 4, 0),
        solid_raster(4, 4, 100),
    ];
    let result = median_stack(&images).unwrap();
    assert_eq!(result.data[[2, 2, 1]], 100);
}

#[test]
fn test_median_suppresses_outlier() {
    let mut outlier = textured_raster(10, 10);
    outlier.data[[5, 5, 0]] = 255;
    let base = textured_raster(10, 10);
    let result = median_stack(&[base.clone(), outlier, base.clone()]).unwrap();
    assert_eq!(result, base);
}

#[test]
fn test_single_image_error() {
    let err = median_stack(&[solid_raster(4, 4, 10)]).unwrap_err();
    assert!(matches!(
        err,
        StackError::InsufficientInput {
            required: 2,
            got: 1
        }
    ));
}

#[test]
fn test_dimension_mismatch_error() {
    let a = solid_raster(8, 8, 10);
    let b = solid_raster(4, 8, 10);
    let err = median_stack(&[a, b]).unwrap_err();
    assert!(matches!(err, StackError::ShapeMismatch { .. }));
}

#[test]
fn test_channel_mismatch_error() {
    let rgb = solid_raster(8, 8, 10);
    let rgba = solid_rgba_raster(8, 8, 10, 255);
    let err = median_stack(&[rgb, rgba]).unwrap_err();
    assert!(matches!(err, StackError::ShapeMismatch { .. }));
}
