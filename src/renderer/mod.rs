//! Rendering hand-off
//!
//! Converts game state into a [`Frame`] of screen-space draw commands. Drawing
//! itself belongs to a [`crate::platform::RenderSink`].

pub mod frame;
pub mod text;

pub use frame::{Align, Frame, Sprite, TextLine, Visual, build_frame, colors};
pub use text::wrap_text;
