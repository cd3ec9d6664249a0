//! Wrap-around shift regression test

use pixedit_test::{RegParams, gradient_gray, random_rgb};
use pixedit_transform::{ShiftDirection, shift_horizontally, shift_vertically};

#[test]
fn shift_reg() {
    let mut rp = RegParams::new("shift");

    for image in [
        gradient_gray(6, 4).expect("gradient"),
        random_rgb(3, 7).expect("rgb"),
    ] {
        let w = image.width();
        let h = image.height();

        // --- Forward then backward is the identity ---
        let there = shift_horizontally(&image, ShiftDirection::Forward).expect("right");
        let back = shift_horizontally(&there, ShiftDirection::Backward).expect("left");
        rp.compare_images(&image, &back);

        let there = shift_vertically(&image, ShiftDirection::Forward).expect("down");
        let back = shift_vertically(&there, ShiftDirection::Backward).expect("up");
        rp.compare_images(&image, &back);

        // --- A full cycle of shifts is the identity ---
        let mut cycled = image.clone();
        for _ in 0..w {
            cycled = shift_horizontally(&cycled, ShiftDirection::Backward).expect("left");
        }
        rp.compare_images(&image, &cycled);

        for _ in 0..h {
            cycled = shift_vertically(&cycled, ShiftDirection::Forward).expect("down");
        }
        rp.compare_images(&image, &cycled);

        // --- The wrapped column lands on the opposite edge ---
        let right = shift_horizontally(&image, ShiftDirection::Forward).expect("right");
        rp.compare_values(
            image.get(w - 1, 0).unwrap_or(0) as f64,
            right.get(0, 0).unwrap_or(1) as f64,
            0.0,
        );
    }

    assert!(rp.cleanup(), "shift regression test failed");
}
