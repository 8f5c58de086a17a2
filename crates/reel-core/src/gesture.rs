#![forbid(unsafe_code)]

//! Horizontal swipe detection.
//!
//! [`SwipeTracker`] is a two-state machine:
//!
//! ```text
//!            touch start (x)
//!   Idle ─────────────────────▶ Tracking { start_x }
//!    ▲                              │
//!    │  touch end / swipe fired     │ touch move (x), |start_x - x| < threshold
//!    └──────────────────────────────┘◀──┘
//! ```
//!
//! # Invariants
//!
//! 1. A start position exists if and only if the tracker is tracking.
//! 2. At most one swipe is reported per touch sequence; reporting a swipe
//!    returns the tracker to `Idle`.
//! 3. Moves while idle are ignored.

/// Direction of a recognised swipe, named by the navigation it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next item.
    Next,
    /// Finger moved right: show the previous item.
    Previous,
}

/// Touch tracking state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SwipeTracker {
    /// No touch in progress.
    #[default]
    Idle,
    /// A touch is down; `start_x` is where it began.
    Tracking {
        /// Horizontal start coordinate in logical pixels.
        start_x: f64,
    },
}

impl SwipeTracker {
    /// Whether a touch sequence is being tracked.
    #[inline]
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }

    /// Start position of the current touch, if any.
    #[must_use]
    pub const fn start_x(&self) -> Option<f64> {
        match self {
            Self::Tracking { start_x } => Some(*start_x),
            Self::Idle => None,
        }
    }

    /// Begin tracking at `x`. A second start replaces the start position.
    pub fn begin(&mut self, x: f64) {
        *self = Self::Tracking { start_x: x };
    }

    /// Feed a move to `x`.
    ///
    /// Returns a direction once the horizontal travel reaches `threshold`,
    /// and returns to `Idle` when it does.
    pub fn track(&mut self, x: f64, threshold: f64) -> Option<SwipeDirection> {
        let Self::Tracking { start_x } = *self else {
            return None;
        };
        let diff = start_x - x;
        if diff.abs() < threshold {
            return None;
        }
        *self = Self::Idle;
        if diff > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    /// End the touch sequence. Idempotent.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}
