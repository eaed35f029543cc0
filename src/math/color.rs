/// Split a 0xRRGGBB value into linear RGB components.
///
/// Colors in the scene config are authored in sRGB hex, like CSS colors.
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    let [_, r, g, b] = hex.to_be_bytes();
    [
        srgb_to_linear(r as f32 / 255.0),
        srgb_to_linear(g as f32 / 255.0),
        srgb_to_linear(b as f32 / 255.0),
    ]
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
