//! Pure logic behind the Gradient Clock desktop widget.
//!
//! Everything here is GUI-agnostic: HSL color math, the animated dark palette,
//! the ping-pong phase oscillator, and the wall-clock snapshot used for the
//! time display. The `gradient-clock-egui` binary wires these into an
//! `eframe` render loop.

pub mod clock;
pub mod color;
pub mod palette;
pub mod phase;

pub use clock::TimeOfDay;
pub use color::Rgb;
pub use phase::PingPong;
