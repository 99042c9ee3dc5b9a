//! Double-buffered pixel store with exponential smoothing.
//!
//! Two equally-sized buffers: `displayed` (what was last pushed to the strip)
//! and `target` (the most recently received or procedurally computed frame).
//! The blend tick eases displayed toward target so source switches and frame
//! updates never pop visually.

use crate::color::{Rgb, blend_colors};

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Double-buffered pixel store sized by the active LED count.
///
/// Capacity is fixed at `MAX_LEDS`; `resize` changes the active length.
/// Both buffers always share one length, so a resize can never leave a
/// stale frame wider than the strip.
pub struct PixelStore<const MAX_LEDS: usize> {
    displayed: [Rgb; MAX_LEDS],
    target: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> PixelStore<MAX_LEDS> {
    /// Create a store with `count` active pixels, all black.
    pub fn new(count: usize) -> Self {
        let mut store = Self {
            displayed: [BLACK; MAX_LEDS],
            target: [BLACK; MAX_LEDS],
            len: 0,
        };
        store.resize(count);
        store
    }

    /// Active LED count.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active payload size in bytes (3 channels per pixel).
    pub const fn byte_len(&self) -> usize {
        self.len * 3
    }

    /// Set the active LED count and clear both buffers to black.
    ///
    /// Counts above `MAX_LEDS` are clamped. Callers that hold an in-flight
    /// payload counter (the stream parser) must reset it alongside this call.
    pub fn resize(&mut self, count: usize) {
        self.len = count.min(MAX_LEDS);
        self.displayed[..self.len].fill(BLACK);
        self.target[..self.len].fill(BLACK);
    }

    /// Write one raw channel byte into the target buffer.
    ///
    /// `offset` counts bytes from the start of the frame (R, G, B per pixel).
    /// Writes at or past the active payload size are dropped; this is the
    /// overrun guard for untrusted stream input.
    pub fn write_target_byte(&mut self, offset: usize, value: u8) {
        if offset >= self.byte_len() {
            return;
        }
        let led = &mut self.target[offset / 3];
        match offset % 3 {
            0 => led.r = value,
            1 => led.g = value,
            _ => led.b = value,
        }
    }

    /// Move displayed one step toward target.
    ///
    /// Per-channel exponential low-pass: rate 0 leaves displayed untouched,
    /// rate 255 copies target exactly in one tick.
    pub fn blend_tick(&mut self, rate: u8) {
        if rate == 0 {
            return;
        }
        let targets = &self.target[..self.len];
        for (shown, target) in self.displayed[..self.len].iter_mut().zip(targets) {
            *shown = blend_colors(*shown, *target, rate);
        }
    }

    /// Set both buffers to one color immediately.
    ///
    /// Used for Static and Off so the smoothing filter does not visibly fade
    /// out of a stale frame.
    pub fn fill_solid(&mut self, color: Rgb) {
        self.displayed[..self.len].fill(color);
        self.target[..self.len].fill(color);
    }

    /// The frame last converged toward the strip.
    pub fn displayed(&self) -> &[Rgb] {
        &self.displayed[..self.len]
    }

    /// The most recently received or computed frame.
    pub fn target(&self) -> &[Rgb] {
        &self.target[..self.len]
    }

    pub fn target_mut(&mut self) -> &mut [Rgb] {
        &mut self.target[..self.len]
    }
}
