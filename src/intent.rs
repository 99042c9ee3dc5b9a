//! Control intents from the presentation layer.
//!
//! Route handlers and status endpoints do not touch the engine directly;
//! they queue intents that the render loop drains at the start of every
//! tick, so all mutation stays on one thread.

use crate::color::Rgb;
use crate::mode::RenderMode;
use crate::queue::{Consumer, Producer, Queue};

/// One requested change to the engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlIntent {
    /// Switch the render mode
    SetMode(RenderMode),
    /// Switch to static mode with this color, applied immediately
    SetStaticColor(Rgb),
    /// Change the output brightness scale
    SetBrightness(u8),
    /// Change the smoothing rate
    SetSmoothing(u8),
}

/// Type alias for the intent queue
pub type IntentQueue<const SIZE: usize> = Queue<ControlIntent, SIZE>;

/// Type alias for the producer handle held by the presentation layer
pub type IntentProducer<'a, const SIZE: usize> = Producer<'a, ControlIntent, SIZE>;

/// Type alias for the consumer handle held by the engine
pub type IntentConsumer<'a, const SIZE: usize> = Consumer<'a, ControlIntent, SIZE>;
