//! Colour-space conversions on 8-bit RGB triples.

/// Normalise 8-bit RGB plus an alpha in `[0, 1]` into shader-ready floats.
#[inline]
pub fn to_vec4(r: u8, g: u8, b: u8, alpha: f32) -> [f32; 4] {
    [
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        alpha,
    ]
}

/// HSV to RGB. `h` is in degrees `[0, 360)`, `s` and `v` in `[0, 1]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let to_byte = |n: f64| ((n + m) * 255.0).round() as u8;
    [to_byte(r), to_byte(g), to_byte(b)]
}

/// RGB to HSV: `[h in degrees, s in [0, 1], v in [0, 1]]`.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [f64; 3] {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d + 6.0) % 6.0
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let s = if max == 0.0 { 0.0 } else { d / max };
    [h * 60.0, s, max / 255.0]
}

/// Photographic negative.
#[inline]
pub fn rgb_invert(r: u8, g: u8, b: u8) -> [u8; 3] {
    [r ^ 255, g ^ 255, b ^ 255]
}

/// Coefficients `[A, B, C]` of the circulant matrix rotating hue by
/// `angle` radians around the grey axis.
pub fn hue_rotation(angle: f64) -> [f64; 3] {
    let (sin, cos) = angle.sin_cos();
    let sin_sqrt = (1.0f64 / 3.0).sqrt() * sin;
    let cos_third = (1.0 - cos) / 3.0;
    [cos + cos_third, cos_third - sin_sqrt, cos_third + sin_sqrt]
}

/// Apply a hue-rotation matrix (see [`hue_rotation`]) to an RGB triple.
pub fn rgb_matrix_rotation(r: f64, g: f64, b: f64, [a, bb, c]: [f64; 3]) -> [f64; 3] {
    [
        a * r + bb * g + c * b,
        c * r + a * g + bb * b,
        bb * r + c * g + a * b,
    ]
}

/// Rotate the hue of an RGB triple by `angle` radians. The result is not
/// clamped.
pub fn rgb_rotate(r: u8, g: u8, b: u8, angle: f64) -> [f64; 3] {
    rgb_matrix_rotation(f64::from(r), f64::from(g), f64::from(b), hue_rotation(angle))
}
