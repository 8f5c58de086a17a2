#![forbid(unsafe_code)]

//! Reel Core
//!
//! The carousel controller behind the team view: an auto-advancing,
//! swipeable, infinitely looping item carousel expressed as a deterministic
//! state machine.
//!
//! # Key Components
//!
//! - [`CarouselController`] - cursor, transition lock, auto-advance, swipes
//! - [`CarouselEvent`] - host input vocabulary dispatched by `handle`
//! - [`CarouselView`] - render-facing snapshot (offset, indicators, flags)
//! - [`ExtendedSequence`] - render track layout with boundary clones
//! - [`CarouselConfig`] - timing and geometry as data
//! - [`Roster`] / [`TeamMember`] - the display records of the team view
//!
//! # Time
//!
//! The controller never reads a clock. Hosts feed elapsed time through
//! [`CarouselController::advance_time`] and may sleep for
//! [`CarouselController::next_deadline`] between events. `reel-runtime`
//! provides a ready-made loop.
//!
//! # Example
//!
//! ```
//! use reel_core::{CarouselConfig, CarouselController};
//! use std::time::Duration;
//!
//! let mut carousel = CarouselController::new(vec!["A", "B", "C", "D"], CarouselConfig::default())
//!     .expect("non-empty");
//! assert_eq!(carousel.compute_offset(), 0.0);
//!
//! carousel.advance();
//! assert_eq!(carousel.cursor(), 1);
//! assert!((carousel.compute_offset() + 33.33).abs() < 0.01);
//!
//! carousel.advance_time(Duration::from_millis(500));
//! assert!(!carousel.is_locked());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod gesture;
pub mod roster;
pub mod sequence;
pub mod timer;
pub mod view;
pub mod viewport;

pub use config::{CarouselConfig, ConfigError};
pub use controller::CarouselController;
pub use error::CarouselError;
pub use event::CarouselEvent;
pub use gesture::{SwipeDirection, SwipeTracker};
pub use roster::{Roster, RosterError, SocialKind, SocialLinks, TeamMember};
pub use sequence::ExtendedSequence;
pub use timer::{IntervalTimer, OneShotTimer};
pub use view::{CarouselView, Indicator, NavButton};
pub use viewport::ViewportMode;
