//! Engine - the main orchestrator.
//!
//! Owns the configuration snapshot, the pixel store, the stream parser and
//! the render mode, and wires them together under the single-threaded
//! cooperative contract: transports drain bytes into `feed`/`feed_datagram`,
//! then the loop calls `render` exactly once per cycle. Parser writes and
//! render reads never overlap, only interleave across cycle boundaries.

use core::fmt::Write as _;

use embassy_time::Instant;
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::command::{self, Command, ConfigUpdate};
use crate::config::StripConfig;
use crate::frame::PixelStore;
use crate::intent::{ControlIntent, IntentConsumer};
use crate::math8::scale8;
use crate::mode::{RainbowAnimation, RenderMode};
use crate::parser::{self, DatagramKind, StreamParser};
use crate::power;
use crate::{ConfigStore, ResponseSink};

const REPLY_CAPACITY: usize = 64;

/// The dual-protocol LED engine.
///
/// `MAX_LEDS` bounds the strip size; the active count comes from the live
/// configuration and may change at runtime. `INTENT_QUEUE_SIZE` sizes the
/// control-intent queue shared with the presentation layer.
pub struct Engine<'a, P, const MAX_LEDS: usize, const INTENT_QUEUE_SIZE: usize>
where
    P: ConfigStore,
{
    // External dependencies
    store: P,
    intents: IntentConsumer<'a, INTENT_QUEUE_SIZE>,

    // Live configuration and mode
    config: StripConfig,
    mode: RenderMode,

    // Internal state
    pixels: PixelStore<MAX_LEDS>,
    parser: StreamParser,
    rainbow: RainbowAnimation,
    out_frame: [Rgb; MAX_LEDS],
}

impl<'a, P, const MAX_LEDS: usize, const INTENT_QUEUE_SIZE: usize>
    Engine<'a, P, MAX_LEDS, INTENT_QUEUE_SIZE>
where
    P: ConfigStore,
{
    /// Create an engine, reading the initial snapshot from `store`.
    pub fn new(mut store: P, intents: IntentConsumer<'a, INTENT_QUEUE_SIZE>) -> Self {
        let config = store.load().unwrap_or_default();
        Self {
            store,
            intents,
            pixels: PixelStore::new(usize::from(config.num_leds)),
            parser: StreamParser::new(),
            mode: RenderMode::default(),
            rainbow: RainbowAnimation::new(),
            out_frame: [Rgb::default(); MAX_LEDS],
            config,
        }
    }

    /// Current configuration snapshot.
    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Current render mode.
    pub const fn mode(&self) -> RenderMode {
        self.mode
    }

    /// The pixel store, for inspection by status endpoints and tests.
    pub const fn pixels(&self) -> &PixelStore<MAX_LEDS> {
        &self.pixels
    }

    /// Feed one byte from a stream transport.
    ///
    /// `sink` is the response binding for this drain call; replies to any
    /// command completed by this byte go back through it, and the binding
    /// ends when the call returns.
    pub fn feed<S: ResponseSink>(&mut self, byte: u8, sink: &mut S) {
        if let Some(line) = self.parser.feed(byte, &mut self.pixels) {
            self.dispatch(&line, sink);
        }
    }

    /// Feed a run of stream bytes; equivalent to feeding them one at a time.
    pub fn feed_slice<S: ResponseSink>(&mut self, bytes: &[u8], sink: &mut S) {
        for &byte in bytes {
            self.feed(byte, sink);
        }
    }

    /// Feed one atomically delivered datagram.
    ///
    /// Command payloads are dispatched whole; anything else is written
    /// straight into the target buffer through the overrun guard, bypassing
    /// the sync/checksum machinery.
    pub fn feed_datagram<S: ResponseSink>(&mut self, payload: &[u8], sink: &mut S) {
        match parser::classify(payload) {
            DatagramKind::Command => {
                let line = parser::strip_command_framing(payload);
                self.dispatch(line, sink);
            }
            DatagramKind::Pixels => {
                for (offset, &byte) in payload.iter().enumerate() {
                    self.pixels.write_target_byte(offset, byte);
                }
            }
        }
    }

    fn dispatch<S: ResponseSink>(&mut self, line: &[u8], sink: &mut S) {
        let mut reply: String<REPLY_CAPACITY> = String::new();
        match command::parse(line) {
            Ok(Command::Config(update)) => {
                let changed = self.apply_config(&update);
                let _ = reply.push_str(if changed {
                    "config: updated"
                } else {
                    "config: unchanged"
                });
            }
            Ok(Command::Mode { mode, color }) => {
                match (mode, color) {
                    (RenderMode::Static, Some(color)) => self.set_static_color(color),
                    (mode, _) => self.set_mode(mode),
                }
                #[cfg(feature = "esp32-log")]
                println!("mode changed to {}", mode.as_str());
                let _ = write!(reply, "mode: {}", mode.as_str());
            }
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("command rejected: {}", error);
                let _ = write!(reply, "error: {error}");
            }
        }
        sink.send(&reply);
    }

    /// Apply a config subset; on any change, persist the snapshot and bring
    /// buffers and parser back in line with the new pixel count before the
    /// next byte is processed.
    fn apply_config(&mut self, update: &ConfigUpdate) -> bool {
        if !update.apply(&mut self.config) {
            return false;
        }
        self.store.save(&self.config);
        self.pixels.resize(usize::from(self.config.num_leds));
        self.parser.reset();
        #[cfg(feature = "esp32-log")]
        println!("config reloaded, {} leds", self.config.num_leds);
        true
    }

    /// Switch the render mode.
    ///
    /// Off clears both buffers immediately; Rainbow restarts its phase.
    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
        match mode {
            RenderMode::Off => self.pixels.fill_solid(Rgb::default()),
            RenderMode::Rainbow => self.rainbow.reset(),
            RenderMode::Static | RenderMode::Ambilight => {}
        }
    }

    /// Switch to static mode with an instantly applied color.
    ///
    /// Both buffers are set together so the smoothing filter has nothing
    /// stale to fade out of.
    pub fn set_static_color(&mut self, color: Rgb) {
        self.mode = RenderMode::Static;
        self.pixels.fill_solid(color);
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.config.brightness = brightness;
    }

    pub fn set_smoothing(&mut self, smoothing: u8) {
        self.config.smoothing = smoothing;
    }

    /// One render tick.
    ///
    /// Drains queued control intents, advances the procedural animation when
    /// active, eases displayed toward target, then conditions the output
    /// frame (channel order, brightness, power budget) for the driver.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_intents();

        if self.mode == RenderMode::Rainbow {
            self.rainbow.tick(now, self.pixels.target_mut());
        }

        self.pixels.blend_tick(self.config.smoothing);

        let len = self.pixels.len();
        let brightness = self.config.brightness;
        let order = self.config.color_order;
        let displayed = self.pixels.displayed();
        for (out, led) in self.out_frame[..len].iter_mut().zip(displayed) {
            let scaled = Rgb {
                r: scale8(led.r, brightness),
                g: scale8(led.g, brightness),
                b: scale8(led.b, brightness),
            };
            *out = order.apply(scaled);
        }
        power::apply_budget(
            &mut self.out_frame[..len],
            u32::from(self.config.max_milliamps),
        );

        &self.out_frame[..len]
    }

    fn process_intents(&mut self) {
        while let Some(intent) = self.intents.pop() {
            match intent {
                ControlIntent::SetMode(mode) => self.set_mode(mode),
                ControlIntent::SetStaticColor(color) => self.set_static_color(color),
                ControlIntent::SetBrightness(brightness) => self.set_brightness(brightness),
                ControlIntent::SetSmoothing(smoothing) => self.set_smoothing(smoothing),
            }
        }
    }
}
