//! Structured command parsing.
//!
//! One command is one newline-terminated JSON object with a `cmd`
//! discriminator. Parsing is strict where a wrong guess would be worse than
//! a refusal: a `static` mode change without a color, or an unknown channel
//! order, is rejected rather than defaulted.

use core::fmt;

use serde::Deserialize;

use crate::color::Rgb;
use crate::config::{ColorOrder, StripConfig};
use crate::mode::RenderMode;

/// Raw JSON envelope; field names match the wire format.
#[derive(Deserialize)]
struct CommandEnvelope<'a> {
    cmd: &'a str,
    value: Option<&'a str>,
    color: Option<[u8; 3]>,
    num_leds: Option<u16>,
    color_order: Option<&'a str>,
    brightness: Option<u8>,
    smoothing: Option<u8>,
    max_milliamps: Option<u16>,
}

/// Subset of configuration fields carried by one `config` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub num_leds: Option<u16>,
    pub color_order: Option<ColorOrder>,
    pub brightness: Option<u8>,
    pub smoothing: Option<u8>,
    pub max_milliamps: Option<u16>,
}

impl ConfigUpdate {
    /// Apply the present fields to a snapshot; returns whether anything
    /// actually changed.
    pub fn apply(&self, config: &mut StripConfig) -> bool {
        let before = *config;
        if let Some(num_leds) = self.num_leds {
            config.num_leds = num_leds;
        }
        if let Some(color_order) = self.color_order {
            config.color_order = color_order;
        }
        if let Some(brightness) = self.brightness {
            config.brightness = brightness;
        }
        if let Some(smoothing) = self.smoothing {
            config.smoothing = smoothing;
        }
        if let Some(max_milliamps) = self.max_milliamps {
            config.max_milliamps = max_milliamps;
        }
        *config != before
    }
}

/// A validated command, ready for dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Runtime reconfiguration
    Config(ConfigUpdate),
    /// Render mode change; `color` is present exactly for `Static`
    Mode {
        mode: RenderMode,
        color: Option<Rgb>,
    },
}

/// Why a command line was rejected. Nothing here mutates state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Structurally invalid JSON or a missing `cmd`/`value` field
    Malformed,
    /// Unrecognized `cmd` discriminator
    UnknownCommand,
    /// Unrecognized mode name
    UnknownMode,
    /// Unrecognized channel-order name
    UnknownColorOrder,
    /// `static` mode without the three channel values
    MissingColor,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Malformed => "malformed command",
            Self::UnknownCommand => "unknown command",
            Self::UnknownMode => "unknown mode",
            Self::UnknownColorOrder => "unknown color order",
            Self::MissingColor => "static mode requires a color",
        };
        f.write_str(text)
    }
}

/// Parse one terminated command line into a typed [`Command`].
pub fn parse(line: &[u8]) -> Result<Command, CommandError> {
    let (envelope, _) = serde_json_core::de::from_slice::<CommandEnvelope<'_>>(line)
        .map_err(|_| CommandError::Malformed)?;

    match envelope.cmd {
        "config" => {
            let color_order = match envelope.color_order {
                Some(name) => Some(
                    ColorOrder::parse_from_str(name).ok_or(CommandError::UnknownColorOrder)?,
                ),
                None => None,
            };
            Ok(Command::Config(ConfigUpdate {
                num_leds: envelope.num_leds,
                color_order,
                brightness: envelope.brightness,
                smoothing: envelope.smoothing,
                max_milliamps: envelope.max_milliamps,
            }))
        }
        "mode" => {
            let name = envelope.value.ok_or(CommandError::Malformed)?;
            let mode = RenderMode::parse_from_str(name).ok_or(CommandError::UnknownMode)?;
            let color = match mode {
                RenderMode::Static => {
                    let [r, g, b] = envelope.color.ok_or(CommandError::MissingColor)?;
                    Some(Rgb { r, g, b })
                }
                _ => None,
            };
            Ok(Command::Mode { mode, color })
        }
        _ => Err(CommandError::UnknownCommand),
    }
}
