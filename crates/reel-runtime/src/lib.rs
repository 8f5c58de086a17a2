#![forbid(unsafe_code)]

//! Reel Runtime
//!
//! Host plumbing for the `reel-core` carousel controller.
//!
//! # Key Components
//!
//! - [`CarouselProgram`] - single-threaded loop: inbox, clock, controller, sink
//! - [`ProgramHandle`] - a program running on its own thread
//! - [`FrameSink`] - receives each changed [`CarouselView`](reel_core::CarouselView)
//! - [`Clock`] / [`SystemClock`] / [`ManualClock`] - time sources
//! - [`InputMacro`] / [`MacroPlayer`] - deterministic scripted replay
//!
//! # How it fits
//! `reel-core` is pure state and virtual time. This crate supplies the
//! real time and the event delivery: the loop sleeps until either input
//! arrives or the controller's next deadline passes, then pumps the elapsed
//! time and presents the resulting view.

pub mod clock;
pub mod input_macro;
pub mod program;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input_macro::{InputMacro, MacroPlayer, ReplayFrame, TimedEvent};
pub use program::{CarouselProgram, FrameSink, ProgramHandle, ProgramMsg};
