//! Pixel color types and procedural fills.

use smart_leds::{RGB8, hsv::Hsv as HSV, hsv::hsv2rgb};

use crate::math8::blend8;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Fill a strip with a hue wheel starting at `start_hue`.
///
/// Hue advances by `hue_delta` per pixel on the 0-255 circle, at full
/// saturation and value.
pub fn fill_rainbow(leds: &mut [Rgb], start_hue: u8, hue_delta: u8) {
    let mut hue = start_hue;
    for led in leds {
        *led = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
        hue = hue.wrapping_add(hue_delta);
    }
}
