//! Single-digit 7-segment display driven by four push-buttons
//!
//! Hardware-agnostic part of the firmware: segment patterns, button
//! scanning, the display state machine and the tick-driven controller.

#![cfg_attr(not(test), no_std)]

#[cfg(any(test, feature = "testing-support"))]
extern crate alloc;

pub mod buttons;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod segments;
pub mod state;

#[cfg(any(test, feature = "testing-support"))]
pub mod testing;

pub use buttons::{Button, ButtonInput, Buttons};
pub use config::Timing;
pub use controller::{Cause, DigitDisplayController, Update};
pub use segments::{Pattern, SegmentOutput, Segments};
pub use state::{DisplayState, Mode};
