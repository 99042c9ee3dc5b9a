//! Byte-stream parser for the two wire sub-protocols.
//!
//! A byte-at-a-time finite-state machine multiplexing two framings on the
//! first byte after idle:
//!
//! - Binary pixel frames: `'A' 'd' 'a' hi lo chk` with
//!   `chk == hi ^ lo ^ 0x55`, followed by one raw channel byte per slot of
//!   the target buffer. The header count bytes are validated but the payload
//!   length always comes from the live LED count captured when the checksum
//!   is accepted, so a sender cannot announce a different frame size than
//!   the receiver's configuration.
//! - Text commands: `'C' 'm' 'd'` followed by one JSON object terminated by
//!   a newline.
//!
//! Every sync or checksum failure drops the partial frame and reseeks; the
//! parser never trusts partial data.

use core::mem;

use heapless::Vec;

use crate::frame::PixelStore;

/// Capacity of the command accumulation buffer.
pub const COMMAND_BUFFER_SIZE: usize = 512;

/// One accumulated command line, without its terminator.
pub type CommandLine = Vec<u8, COMMAND_BUFFER_SIZE>;

const FRAME_SYNC: u8 = b'A';
const COMMAND_SYNC: u8 = b'C';
const CHECKSUM_SEED: u8 = 0x55;
const COMMAND_TERMINATOR: u8 = b'\n';
const COMMAND_PREFIX: &[u8] = b"Cmd";

#[derive(Default)]
enum State {
    #[default]
    Idle,

    // Binary pixel-frame sub-protocol
    FrameAwaitD,
    FrameAwaitA,
    FrameAwaitCountHi,
    FrameAwaitCountLo {
        hi: u8,
    },
    FrameAwaitChecksum {
        hi: u8,
        lo: u8,
    },
    FrameReadPixels {
        written: usize,
        expected: usize,
    },

    // Text command sub-protocol
    CommandAwaitM,
    CommandAwaitD,
    CommandReadLine {
        line: CommandLine,
    },
}

/// Classification of a whole datagram payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatagramKind {
    /// One complete text command
    Command,
    /// Raw pixel channel bytes for the target buffer
    Pixels,
}

/// Classify an atomically delivered payload.
///
/// Payloads opening a JSON object or carrying the `Cmd` prefix take the
/// command path; everything else is raw pixel data. Datagram transports are
/// assumed to have their own integrity check, so the byte-at-a-time sync and
/// checksum machinery is bypassed on this path.
pub fn classify(payload: &[u8]) -> DatagramKind {
    if payload.first() == Some(&b'{') || payload.starts_with(COMMAND_PREFIX) {
        DatagramKind::Command
    } else {
        DatagramKind::Pixels
    }
}

/// Strip datagram command framing: the optional `Cmd` prefix and any
/// trailing newline, leaving the bare JSON object.
pub fn strip_command_framing(payload: &[u8]) -> &[u8] {
    let mut line = payload.strip_prefix(COMMAND_PREFIX).unwrap_or(payload);
    while let Some(rest) = line
        .strip_suffix(b"\n")
        .or_else(|| line.strip_suffix(b"\r"))
    {
        line = rest;
    }
    line
}

/// The byte-at-a-time stream parser.
pub struct StreamParser {
    state: State,
}

impl Default for StreamParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamParser {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Drop any in-flight frame and return to sync seeking.
    ///
    /// Must be called whenever the pixel store is resized, so a partially
    /// received frame is discarded rather than completed against the new
    /// bounds.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    /// Whether the parser is between frames, seeking a sync byte.
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Feed one byte, writing accepted pixel data into `pixels`.
    ///
    /// Returns a completed command line when a newline terminates the text
    /// sub-protocol; the caller dispatches it and the parser is already back
    /// at idle.
    pub fn feed<const MAX_LEDS: usize>(
        &mut self,
        byte: u8,
        pixels: &mut PixelStore<MAX_LEDS>,
    ) -> Option<CommandLine> {
        let state = mem::take(&mut self.state);
        let mut completed = None;

        self.state = match state {
            State::Idle => match byte {
                FRAME_SYNC => State::FrameAwaitD,
                COMMAND_SYNC => State::CommandAwaitM,
                _ => State::Idle,
            },

            State::FrameAwaitD => {
                if byte == b'd' {
                    State::FrameAwaitA
                } else {
                    State::Idle
                }
            }
            State::FrameAwaitA => {
                if byte == b'a' {
                    State::FrameAwaitCountHi
                } else {
                    State::Idle
                }
            }
            State::FrameAwaitCountHi => State::FrameAwaitCountLo { hi: byte },
            State::FrameAwaitCountLo { hi } => State::FrameAwaitChecksum { hi, lo: byte },
            State::FrameAwaitChecksum { hi, lo } => {
                if hi ^ lo ^ CHECKSUM_SEED == byte {
                    // The header count is informational; the authoritative
                    // payload length is the configured LED count, captured
                    // here so a mid-frame resize cannot widen the write.
                    let expected = pixels.byte_len();
                    if expected == 0 {
                        State::Idle
                    } else {
                        State::FrameReadPixels {
                            written: 0,
                            expected,
                        }
                    }
                } else {
                    State::Idle
                }
            }
            State::FrameReadPixels { written, expected } => {
                pixels.write_target_byte(written, byte);
                let written = written + 1;
                if written >= expected {
                    State::Idle
                } else {
                    State::FrameReadPixels { written, expected }
                }
            }

            State::CommandAwaitM => {
                if byte == b'm' {
                    State::CommandAwaitD
                } else {
                    State::Idle
                }
            }
            State::CommandAwaitD => {
                if byte == b'd' {
                    State::CommandReadLine {
                        line: CommandLine::new(),
                    }
                } else {
                    State::Idle
                }
            }
            State::CommandReadLine { mut line } => {
                if byte == COMMAND_TERMINATOR {
                    completed = Some(line);
                    State::Idle
                } else {
                    // Bytes past capacity are dropped; the terminator still
                    // ends the frame.
                    let _ = line.push(byte);
                    State::CommandReadLine { line }
                }
            }
        };

        completed
    }
}
