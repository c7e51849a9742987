//! XYZ to sRGB conversion.
//!
//! Linear transform with the D65 matrix, clamp to the displayable range,
//! then the IEC 61966-2-1 transfer function and 8-bit quantization.

/// CIE XYZ to linear sRGB, D65 white point.
pub const XYZ_TO_LINEAR_SRGB: [[f32; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// Applies [`XYZ_TO_LINEAR_SRGB`] and clamps each channel to [0, 1].
pub fn xyz_to_linear_srgb(xyz: [f32; 3]) -> [f32; 3] {
    let mut rgb = [0.0f32; 3];
    for (row, out) in XYZ_TO_LINEAR_SRGB.iter().zip(rgb.iter_mut()) {
        let v = row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2];
        *out = v.clamp(0.0, 1.0);
    }
    rgb
}

/// sRGB OETF: encodes linear light to gamma space.
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Encodes a linear [0, 1] value to an 8-bit sRGB code value, rounding to nearest.
#[inline]
pub fn encode_u8(linear: f32) -> u8 {
    (oetf(linear.clamp(0.0, 1.0)) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Full XYZ to 8-bit sRGB chain.
pub fn xyz_to_srgb8(xyz: [f32; 3]) -> [u8; 3] {
    let [r, g, b] = xyz_to_linear_srgb(xyz);
    [encode_u8(r), encode_u8(g), encode_u8(b)]
}
