//! Tone adjustment regression test
//!
//! Lighten, darken, negative and the two contrast operations on
//! synthetic grayscale and packed color images.

use pixedit_core::{Image, PixelCodec, ToneOptions};
use pixedit_test::{RegParams, gradient_gray, random_gray, random_rgb, uniform_gray};

#[test]
fn tone_reg() {
    let mut rp = RegParams::new("tone");

    // --- Scenario: lighten a 2x2 ---
    let mut image =
        Image::new(PixelCodec::Grayscale, vec![vec![10, 250], vec![0, 200]]).expect("2x2");
    image.lighten();
    let expected =
        Image::new(PixelCodec::Grayscale, vec![vec![13, 253], vec![3, 203]]).expect("expected");
    rp.compare_images(&expected, &image);

    // --- Scenario: negative of a 2x2 ---
    let mut image =
        Image::new(PixelCodec::Grayscale, vec![vec![10, 250], vec![0, 200]]).expect("2x2");
    image.negative();
    let expected =
        Image::new(PixelCodec::Grayscale, vec![vec![245, 5], vec![255, 55]]).expect("expected");
    rp.compare_images(&expected, &image);

    // --- Negative is an involution ---
    for original in [
        random_gray(17, 9).expect("random gray"),
        random_rgb(6, 11).expect("random rgb"),
    ] {
        let mut image = original.clone();
        image.negative();
        image.negative();
        rp.compare_images(&original, &image);
    }

    // --- Saturation at the extremes ---
    let mut white = uniform_gray(3, 3, 255).expect("white");
    white.lighten();
    rp.compare_images(&uniform_gray(3, 3, 255).expect("white"), &white);

    let mut black = uniform_gray(3, 3, 0).expect("black");
    black.darken();
    rp.compare_images(&uniform_gray(3, 3, 0).expect("black"), &black);

    // --- Lighten then darken is exact away from the extremes ---
    let original = uniform_gray(4, 4, 128).expect("mid gray");
    let mut image = original.clone();
    image.lighten_with(ToneOptions::with_step(10));
    image.darken_with(ToneOptions::with_step(10));
    rp.compare_images(&original, &image);

    // --- Enhanced contrast stays in range ---
    let mut image = random_gray(32, 32).expect("random gray");
    for _ in 0..50 {
        image.enhance_contrast();
    }
    let in_range = image.samples().iter().all(|&s| (0..=255).contains(&s));
    rp.compare_values(1.0, if in_range { 1.0 } else { 0.0 }, 0.0);

    // --- Reduced contrast narrows the spread ---
    let original = gradient_gray(16, 16).expect("gradient");
    let mut image = original.clone();
    image.reduce_contrast();
    rp.compare_values(
        1.0,
        if spread(&image) < spread(&original) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "tone regression test failed");
}

fn spread(image: &Image) -> i32 {
    let max = image.samples().iter().max().copied().unwrap_or(0);
    let min = image.samples().iter().min().copied().unwrap_or(0);
    max - min
}
