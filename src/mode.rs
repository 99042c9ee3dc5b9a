//! Render modes and the procedural rainbow animation.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, fill_rainbow};

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_AMBILIGHT: &str = "ambilight";
const MODE_NAME_OFF: &str = "off";

/// Hue wheel step between adjacent pixels.
const RAINBOW_HUE_DELTA: u8 = 7;

/// Wall-clock cadence of the hue phase; render ticks between boundaries
/// leave the phase untouched.
const RAINBOW_STEP: Duration = Duration::from_millis(20);

/// Active rendering mode.
///
/// Global to the engine; mutated only by the dispatcher or the direct API,
/// read once per render tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Uniform color set by the last `static` command
    #[default]
    Static,
    /// Procedural hue-wheel animation
    Rainbow,
    /// Live frames from the stream parser
    Ambilight,
    /// All pixels black
    Off,
}

impl RenderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => MODE_NAME_STATIC,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Ambilight => MODE_NAME_AMBILIGHT,
            Self::Off => MODE_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STATIC => Some(Self::Static),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_AMBILIGHT => Some(Self::Ambilight),
            MODE_NAME_OFF => Some(Self::Off),
            _ => None,
        }
    }
}

/// Hue phase for the rainbow mode.
#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    hue: u8,
    next_step: Option<Instant>,
}

impl Default for RainbowAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowAnimation {
    pub const fn new() -> Self {
        Self {
            hue: 0,
            next_step: None,
        }
    }

    /// Restart the phase; the next tick re-anchors the cadence.
    pub fn reset(&mut self) {
        self.hue = 0;
        self.next_step = None;
    }

    /// Advance the phase for elapsed cadence boundaries and repaint `target`.
    pub fn tick(&mut self, now: Instant, target: &mut [Rgb]) {
        match self.next_step {
            None => self.next_step = Some(now + RAINBOW_STEP),
            Some(mut next) => {
                while now >= next {
                    self.hue = self.hue.wrapping_add(1);
                    next += RAINBOW_STEP;
                }
                self.next_step = Some(next);
            }
        }

        fill_rainbow(target, self.hue, RAINBOW_HUE_DELTA);
    }
}
