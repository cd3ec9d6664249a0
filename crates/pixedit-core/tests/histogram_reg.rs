//! Histogram regression test

use pixedit_core::{Error, PixelCodec};
use pixedit_test::{RegParams, gradient_gray, random_gray, random_rgb, uniform_gray};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // --- Totals equal the sample count ---
    for (w, h) in [(1, 1), (7, 3), (64, 48)] {
        let image = random_gray(w, h).expect("random gray");
        let hist = image.calculate_histogram().expect("histogram");
        rp.compare_values((w * h) as f64, hist.total() as f64, 0.0);
    }

    // --- Uniform image fills a single bin ---
    let image = uniform_gray(10, 6, 200).expect("uniform");
    let hist = image.calculate_histogram().expect("histogram");
    rp.compare_values(60.0, hist.counts()[200] as f64, 0.0);
    let others: u64 = hist
        .counts()
        .iter()
        .enumerate()
        .filter(|&(v, _)| v != 200)
        .map(|(_, &c)| c as u64)
        .sum();
    rp.compare_values(0.0, others as f64, 0.0);

    // --- Double negative leaves the histogram unchanged ---
    let image = gradient_gray(13, 5).expect("gradient");
    let mut negated_twice = image.clone();
    negated_twice.negative();
    negated_twice.negative();
    rp.compare_histograms(
        &image.calculate_histogram().expect("histogram"),
        &negated_twice.calculate_histogram().expect("histogram"),
    );

    // --- Packed color is rejected ---
    let rgb = random_rgb(2, 2).expect("rgb");
    assert_eq!(rgb.codec(), PixelCodec::PackedRgba);
    let rejected = matches!(rgb.calculate_histogram(), Err(Error::NotGrayscale));
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "histogram regression test failed");
}
