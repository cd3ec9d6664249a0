//! Convolution regression test

use pixedit_filter::{Kernel, apply_filter, is_border};
use pixedit_test::{RegParams, gradient_gray, random_gray, uniform_gray};

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    let image = random_gray(20, 14).expect("random");

    // --- Identity kernels leave the image unchanged ---
    for size in [1, 3, 5] {
        let kernel = Kernel::identity(size).expect("identity");
        let out = apply_filter(&image, &kernel).expect("filter");
        rp.compare_images(&image, &out);
    }

    // --- Box blur preserves a uniform image ---
    let flat = uniform_gray(9, 9, 120).expect("uniform");
    let blurred = apply_filter(&flat, &Kernel::box_blur(3).expect("box")).expect("filter");
    let max_diff = flat
        .samples()
        .iter()
        .zip(blurred.samples())
        .map(|(a, b)| (a - b).abs())
        .max()
        .unwrap_or(0);
    rp.compare_values(0.0, max_diff as f64, 1.0);

    // --- Border band is copied verbatim ---
    let image = gradient_gray(12, 10).expect("gradient");
    let out = apply_filter(&image, &Kernel::edge()).expect("filter");
    let mut border_kept = true;
    for row in 0..image.height() {
        for col in 0..image.width() {
            if is_border(col, row, image.width(), image.height(), 3) {
                border_kept &= out.get(col, row) == image.get(col, row);
            }
        }
    }
    rp.compare_values(1.0, if border_kept { 1.0 } else { 0.0 }, 0.0);

    // --- Output stays in range for a sharpening kernel ---
    let image = random_gray(16, 16).expect("random");
    let out = apply_filter(&image, &Kernel::sharpen()).expect("filter");
    let in_range = out.samples().iter().all(|&s| (0..=255).contains(&s));
    rp.compare_values(1.0, if in_range { 1.0 } else { 0.0 }, 0.0);

    // --- Even kernels are rejected up front ---
    let rejected = Kernel::from_rows(vec![vec![0.25, 0.25], vec![0.25, 0.25]]).is_err();
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "convolve regression test failed");
}
