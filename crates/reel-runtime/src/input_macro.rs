#![forbid(unsafe_code)]

//! Scripted input with timing, replayed deterministically.
//!
//! An [`InputMacro`] is a named list of carousel events, each preceded by a
//! delay, plus an optional idle period at the end. [`MacroPlayer`] feeds it
//! to a controller in virtual time and records the view after every step,
//! so a whole interaction can be asserted without sleeping.
//!
//! # Example
//!
//! ```
//! use reel_core::{CarouselConfig, CarouselController, CarouselEvent};
//! use reel_runtime::input_macro::{InputMacro, MacroPlayer};
//! use std::time::Duration;
//!
//! let script = InputMacro::new("hover_then_leave")
//!     .then(Duration::from_millis(1000), CarouselEvent::PointerEnter)
//!     .then(Duration::from_millis(5000), CarouselEvent::PointerLeave)
//!     .idle(Duration::from_millis(3000));
//!
//! let mut carousel = CarouselController::new(vec![1, 2, 3], CarouselConfig::default())
//!     .expect("non-empty");
//! let frames = MacroPlayer::new(&script).replay(&mut carousel);
//! assert_eq!(frames.last().map(|f| f.view.cursor), Some(1));
//! ```

use reel_core::{CarouselController, CarouselEvent, CarouselView};
use web_time::Duration;

/// A scripted event with the delay preceding it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent {
    /// The event.
    pub event: CarouselEvent,
    /// Delay from the previous event (or from the start for the first event).
    pub delay: Duration,
}

impl TimedEvent {
    /// Create a new timed event with the given delay.
    pub fn new(event: CarouselEvent, delay: Duration) -> Self {
        Self { event, delay }
    }

    /// Create a timed event with zero delay.
    pub fn immediate(event: CarouselEvent) -> Self {
        Self::new(event, Duration::ZERO)
    }
}

/// A named, timed script of carousel input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMacro {
    name: String,
    events: Vec<TimedEvent>,
    tail: Duration,
}

impl InputMacro {
    /// Create an empty script.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
            tail: Duration::ZERO,
        }
    }

    /// Create a script from events with no timing.
    pub fn from_events(name: impl Into<String>, events: Vec<CarouselEvent>) -> Self {
        Self {
            name: name.into(),
            events: events.into_iter().map(TimedEvent::immediate).collect(),
            tail: Duration::ZERO,
        }
    }

    /// Append `event` after `delay`.
    #[must_use]
    pub fn then(mut self, delay: Duration, event: CarouselEvent) -> Self {
        self.events.push(TimedEvent::new(event, delay));
        self
    }

    /// Extend the idle period after the last event.
    #[must_use]
    pub fn idle(mut self, duration: Duration) -> Self {
        self.tail += duration;
        self
    }

    /// Script name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scripted events.
    #[must_use]
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    /// Idle period after the last event.
    #[must_use]
    pub fn tail(&self) -> Duration {
        self.tail
    }

    /// Number of scripted events.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the script has no events.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Sum of all delays plus the idle tail.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.events.iter().map(|e| e.delay).sum::<Duration>() + self.tail
    }
}

/// One recorded step of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayFrame {
    /// Virtual time since the start of the replay.
    pub at: Duration,
    /// The event applied at this step, or `None` for the idle tail.
    pub event: Option<CarouselEvent>,
    /// View after the step.
    pub view: CarouselView,
}

/// Replays an [`InputMacro`] against a controller in virtual time.
#[derive(Debug)]
pub struct MacroPlayer<'a> {
    script: &'a InputMacro,
}

impl<'a> MacroPlayer<'a> {
    /// Create a player for `script`.
    pub fn new(script: &'a InputMacro) -> Self {
        Self { script }
    }

    /// Replay every step, returning the view after each one.
    ///
    /// The idle tail, if non-zero, produces one final frame.
    pub fn replay<T>(&self, controller: &mut CarouselController<T>) -> Vec<ReplayFrame> {
        tracing::debug!(
            message = "macro.replay",
            name = self.script.name(),
            events = self.script.len()
        );
        let mut at = Duration::ZERO;
        let mut frames = Vec::with_capacity(self.script.len() + 1);
        for timed in self.script.events() {
            controller.advance_time(timed.delay);
            at += timed.delay;
            controller.handle(&timed.event);
            frames.push(ReplayFrame {
                at,
                event: Some(timed.event),
                view: controller.view(),
            });
        }
        if !self.script.tail().is_zero() {
            controller.advance_time(self.script.tail());
            at += self.script.tail();
            frames.push(ReplayFrame {
                at,
                event: None,
                view: controller.view(),
            });
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::CarouselConfig;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn carousel() -> CarouselController<u8> {
        CarouselController::new(vec![0, 1, 2, 3], CarouselConfig::default()).expect("non-empty")
    }

    #[test]
    fn total_duration_includes_tail() {
        let script = InputMacro::new("t")
            .then(ms(100), CarouselEvent::Next)
            .then(ms(200), CarouselEvent::Previous)
            .idle(ms(50));
        assert_eq!(script.total_duration(), ms(350));
        assert_eq!(script.len(), 2);
        assert_eq!(script.name(), "t");
    }

    #[test]
    fn from_events_has_no_timing() {
        let script = InputMacro::from_events("bare", vec![CarouselEvent::Next, CarouselEvent::Next]);
        assert_eq!(script.total_duration(), Duration::ZERO);
        let frames = MacroPlayer::new(&script).replay(&mut carousel());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].view.cursor, 1);
        assert_eq!(frames[1].view.cursor, 1, "second next is under the lock");
    }

    #[test]
    fn replay_records_virtual_time() {
        let script = InputMacro::new("timed")
            .then(ms(0), CarouselEvent::Next)
            .then(ms(600), CarouselEvent::Next)
            .idle(ms(2400));
        let frames = MacroPlayer::new(&script).replay(&mut carousel());
        let times: Vec<Duration> = frames.iter().map(|f| f.at).collect();
        assert_eq!(times, [ms(0), ms(600), ms(3000)]);
        assert_eq!(frames[1].view.cursor, 2);
        assert_eq!(frames[2].event, None);
        assert_eq!(frames[2].view.cursor, 3, "auto tick at 3000ms");
    }

    #[test]
    fn empty_script_without_tail_yields_nothing() {
        let script = InputMacro::new("empty");
        assert!(script.is_empty());
        assert!(MacroPlayer::new(&script).replay(&mut carousel()).is_empty());
    }
}
