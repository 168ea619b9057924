/// Generates a uniform RGB field at one gray level.
pub fn uniform_rgb(width: usize, height: usize, level: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![level; width * height * 3]
}

/// Generates a light page with a dark vertical stroke of the given width.
pub fn stroke_rgb(width: usize, height: usize, stroke_x: usize, stroke_width: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(
        stroke_x + stroke_width <= width,
        "stroke must fit inside the image"
    );

    let mut img = vec![230u8; width * height * 3];
    for y in 0..height {
        for x in stroke_x..stroke_x + stroke_width {
            let i = (y * width + x) * 3;
            img[i] = 25;
            img[i + 1] = 25;
            img[i + 2] = 25;
        }
    }
    img
}

/// Generates a gentle left-to-right brightness ramp between two levels.
pub fn gradient_rgb(width: usize, height: usize, lo: u8, hi: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(lo <= hi, "gradient endpoints must be ordered");

    let span = (hi - lo) as usize;
    let mut img = vec![0u8; width * height * 3];
    for y in 0..height {
        for x in 0..width {
            let val = if width > 1 {
                lo + (span * x / (width - 1)) as u8
            } else {
                lo
            };
            let i = (y * width + x) * 3;
            img[i] = val;
            img[i + 1] = val;
            img[i + 2] = val;
        }
    }
    img
}

/// Generates a uniform field with isolated dark speckles on a sparse lattice.
pub fn speckled_rgb(width: usize, height: usize, level: u8, speckle: u8, pitch: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(pitch >= 8, "speckles must stay isolated");

    let mut img = vec![level; width * height * 3];
    for y in (pitch / 2..height).step_by(pitch) {
        for x in (pitch / 2..width).step_by(pitch) {
            let i = (y * width + x) * 3;
            img[i] = speckle;
            img[i + 1] = speckle;
            img[i + 2] = speckle;
        }
    }
    img
}
