//! Platform abstraction layer
//!
//! Seams to the outside world:
//! - Input events and sources
//! - Render sinks
//! - The fixed-rate app driver tying them to the simulation

pub mod app;
pub mod input;
pub mod sink;

pub use app::{App, Control, RunOptions, RunSummary, Step};
pub use input::{InputEvent, InputMapper, InputSource, MappedInput, ScriptedInput};
pub use sink::{LogSink, RenderSink};
