#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod engine;
pub mod frame;
pub mod intent;
pub mod math8;
pub mod mode;
pub mod parser;
pub mod power;
pub mod queue;
pub mod scheduler;

pub use command::{Command, CommandError, ConfigUpdate};
pub use config::{ColorOrder, StripConfig};
pub use engine::Engine;
pub use frame::PixelStore;
pub use intent::{ControlIntent, IntentConsumer, IntentProducer, IntentQueue};
pub use mode::RenderMode;
pub use parser::{DatagramKind, StreamParser};
pub use scheduler::{FrameResult, FrameScheduler};

pub use color::{Hsv, Rgb};
pub use math8::{blend8, scale8};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Reply channel back to whichever transport delivered the current command.
///
/// Fire-and-forget: no delivery confirmation, no queuing. A binding lives for
/// one drain-and-dispatch call and is dropped when that call returns.
pub trait ResponseSink {
    /// Deliver one text reply to the transport that owns the byte stream
    fn send(&mut self, text: &str);
}

/// Persistent configuration storage collaborator.
///
/// The engine never touches a storage medium directly; implementations own
/// their medium and handle their own failures.
pub trait ConfigStore {
    /// Read the stored configuration snapshot, if one exists
    fn load(&mut self) -> Option<StripConfig>;
    /// Persist the configuration snapshot
    fn save(&mut self, config: &StripConfig);
}
