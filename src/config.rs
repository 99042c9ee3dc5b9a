//! Live hardware configuration snapshot.
//!
//! The engine reads this on every tick and rewrites it when a `config`
//! command arrives. Persistence is delegated to the [`ConfigStore`]
//! collaborator; this module only defines the snapshot shape.
//!
//! [`ConfigStore`]: crate::ConfigStore

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

const ORDER_NAME_RGB: &str = "rgb";
const ORDER_NAME_GRB: &str = "grb";
const ORDER_NAME_BRG: &str = "brg";

/// Channel order expected by the strip hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOrder {
    Rgb,
    Grb,
    Brg,
}

impl ColorOrder {
    /// Parse a channel-order name, case-insensitively.
    ///
    /// Returns `None` for unknown names; callers must treat that as an
    /// error rather than fall back to a default order.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case(ORDER_NAME_RGB) {
            Some(Self::Rgb)
        } else if s.eq_ignore_ascii_case(ORDER_NAME_GRB) {
            Some(Self::Grb)
        } else if s.eq_ignore_ascii_case(ORDER_NAME_BRG) {
            Some(Self::Brg)
        } else {
            None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => ORDER_NAME_RGB,
            Self::Grb => ORDER_NAME_GRB,
            Self::Brg => ORDER_NAME_BRG,
        }
    }

    /// Permute a logical RGB triple into this wire order.
    pub const fn apply(self, color: Rgb) -> Rgb {
        match self {
            Self::Rgb => color,
            Self::Grb => Rgb {
                r: color.g,
                g: color.r,
                b: color.b,
            },
            Self::Brg => Rgb {
                r: color.b,
                g: color.r,
                b: color.g,
            },
        }
    }
}

/// Strip hardware configuration snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripConfig {
    /// Number of addressable pixels on the strip
    pub num_leds: u16,
    /// Output brightness scale (0-255)
    pub brightness: u8,
    /// Channel order expected by the strip hardware
    pub color_order: ColorOrder,
    /// Smoothing rate for the displayed-toward-target filter (0-255)
    pub smoothing: u8,
    /// Power budget for the whole strip, in milliamps at 5 V
    pub max_milliamps: u16,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            num_leds: 60,
            brightness: 50,
            color_order: ColorOrder::Grb,
            smoothing: 20,
            max_milliamps: 1500,
        }
    }
}
