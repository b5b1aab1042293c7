use crate::domain::model::{Color, ColorResponse};

/// Format a color as `#rrggbb`, lowercase, zero-padded per channel.
pub fn hex_string(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Format a color as `rgb(r, g, b)` with decimal components.
pub fn rgb_string(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

/// Format a color as `hsl(H, S%, L%)` using the standard hexcone conversion.
///
/// Hue ties between channels resolve in r, g, b order. The emitted hue stays
/// in [0,360): a value that rounds up to 360 wraps to 0.
pub fn hsl_string(color: Color) -> String {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    let (turn, saturation) = if max == min {
        // Achromatic: gray, black or white. Hue is undefined, emit 0.
        (0.0, 0.0)
    } else {
        let d = max - min;
        let saturation = if lightness <= 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };
        let turn = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (turn, saturation)
    };

    let h = (turn * 360.0).round() as u32 % 360;
    let s = (saturation * 100.0).round() as u32;
    let l = (lightness * 100.0).round() as u32;

    format!("hsl({}, {}%, {}%)", h, s, l)
}

/// Encode a color in all three textual representations.
pub fn describe(color: Color) -> ColorResponse {
    ColorResponse {
        hex: hex_string(color),
        rgb: rgb_string(color),
        hsl: hsl_string(color),
    }
}
