//! Strip current estimation and budget limiting.
//!
//! Uses the common WS2812-class power model: roughly 1 mA of quiescent draw
//! per pixel plus up to 16/11/15 mA for the red, green and blue channels at
//! full scale. When a frame would exceed the configured budget, every
//! channel is scaled down uniformly so the hue is preserved.

use crate::color::Rgb;
use crate::math8::scale8;

const QUIESCENT_MA_PER_LED: u32 = 1;
const RED_MA_FULL_SCALE: u32 = 16;
const GREEN_MA_FULL_SCALE: u32 = 11;
const BLUE_MA_FULL_SCALE: u32 = 15;

/// Estimate the draw of a frame in milliamps at 5 V.
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_milliamps(frame: &[Rgb]) -> u32 {
    let mut ma = frame.len() as u32 * QUIESCENT_MA_PER_LED;
    for led in frame {
        ma += (u32::from(led.r) * RED_MA_FULL_SCALE
            + u32::from(led.g) * GREEN_MA_FULL_SCALE
            + u32::from(led.b) * BLUE_MA_FULL_SCALE)
            / 255;
    }
    ma
}

/// Uniform channel scale (0-255) that keeps `estimate` within `budget_ma`.
///
/// Returns 255 when the frame is already within budget. A budget of zero
/// blacks the strip out entirely.
pub fn limit_scale(estimate: u32, budget_ma: u32) -> u8 {
    if estimate <= budget_ma {
        return 255;
    }
    if budget_ma == 0 {
        return 0;
    }
    let scale = (budget_ma * 255) / estimate;
    #[allow(clippy::cast_possible_truncation)]
    {
        scale.min(255) as u8
    }
}

/// Scale a frame in place to fit the budget.
pub fn apply_budget(frame: &mut [Rgb], budget_ma: u32) {
    let scale = limit_scale(estimate_milliamps(frame), budget_ma);
    if scale == 255 {
        return;
    }
    for led in frame {
        led.r = scale8(led.r, scale);
        led.g = scale8(led.g, scale);
        led.b = scale8(led.b, scale);
    }
}
