//! Synthetic test images

use crate::error::{TestError, TestResult};
use pixedit_core::{Image, PixelCodec, color};

fn build(codec: PixelCodec, width: u32, height: u32, samples: Vec<i32>) -> TestResult<Image> {
    Image::from_raw(codec, width, height, samples).map_err(|source| TestError::ImageCreate {
        width,
        height,
        source,
    })
}

/// Grayscale image with every sample equal to `value`.
pub fn uniform_gray(width: u32, height: u32, value: i32) -> TestResult<Image> {
    build(
        PixelCodec::Grayscale,
        width,
        height,
        vec![value; width as usize * height as usize],
    )
}

/// Grayscale diagonal ramp: sample `(col, row)` is `(col * 7 + row * 13) % 256`.
pub fn gradient_gray(width: u32, height: u32) -> TestResult<Image> {
    let samples = (0..height)
        .flat_map(|row| (0..width).map(move |col| ((col * 7 + row * 13) % 256) as i32))
        .collect();
    build(PixelCodec::Grayscale, width, height, samples)
}

/// Grayscale image of uniformly random samples in `[0, 255]`.
pub fn random_gray(width: u32, height: u32) -> TestResult<Image> {
    let samples = (0..width as usize * height as usize)
        .map(|_| rand::random::<u8>() as i32)
        .collect();
    build(PixelCodec::Grayscale, width, height, samples)
}

/// Packed color image of uniformly random opaque samples.
pub fn random_rgb(width: u32, height: u32) -> TestResult<Image> {
    let samples = (0..width as usize * height as usize)
        .map(|_| color::compose_rgb(rand::random(), rand::random(), rand::random()))
        .collect();
    build(PixelCodec::PackedRgba, width, height, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        let image = random_gray(5, 3).unwrap();
        assert_eq!((image.width(), image.height()), (5, 3));
        assert!(image.samples().iter().all(|&s| (0..=255).contains(&s)));

        let image = random_rgb(2, 2).unwrap();
        assert!(image.is_color());
    }

    #[test]
    fn test_gradient_values() {
        let image = gradient_gray(3, 2).unwrap();
        assert_eq!(image.pixels(), vec![vec![0, 7, 14], vec![13, 20, 27]]);
    }

    #[test]
    fn test_uniform_rejects_bad_value() {
        assert!(matches!(
            uniform_gray(2, 2, 300),
            Err(TestError::ImageCreate { width: 2, height: 2, .. })
        ));
    }
}
