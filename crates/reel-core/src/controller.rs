#![forbid(unsafe_code)]

//! The carousel controller.
//!
//! [`CarouselController`] owns the cursor, the transition lock, the
//! auto-advance timer, and the swipe tracker. It is driven by discrete
//! operations (or [`CarouselEvent`](crate::CarouselEvent)s) and by
//! [`advance_time`](CarouselController::advance_time).
//!
//! # Invariants
//!
//! 1. `cursor < len()` at all times; every move wraps modulo `len()`.
//! 2. The lock is held iff a release timer is pending. Manual moves
//!    (`advance`, `retreat`, `go_to`, swipes) are rejected while locked.
//! 3. Each accepted manual move replaces the pending release timer, so the
//!    lock is held for exactly one settle duration after the latest move.
//! 4. Auto ticks ignore the lock and only move the cursor when neither
//!    paused nor touching.
//! 5. Every transition of `paused` or `touching` restarts the auto-advance
//!    period from zero.
//! 6. After [`teardown`](CarouselController::teardown) no timer is pending
//!    and `advance_time` does nothing until [`mount`](CarouselController::mount).
//!
//! # Timer ordering
//!
//! `advance_time` splits the delta at the lock release deadline and applies
//! the auto ticks on either side of it in bulk. When the lock release and an
//! auto tick fall on the same instant, the release runs first.

use std::ops::Range;

use web_time::Duration;

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::gesture::{SwipeDirection, SwipeTracker};
use crate::sequence::ExtendedSequence;
use crate::timer::{IntervalTimer, OneShotTimer};
use crate::view::{CarouselView, Indicator};
use crate::viewport::ViewportMode;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlideReason {
    Next,
    Previous,
    GoTo,
    Auto,
}

impl SlideReason {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::GoTo => "goto",
            Self::Auto => "auto",
        }
    }
}

/// Auto-advancing, swipeable carousel state machine over items of type `T`.
#[derive(Debug, Clone)]
pub struct CarouselController<T> {
    items: Vec<T>,
    sequence: ExtendedSequence,
    config: CarouselConfig,
    cursor: usize,
    mode: ViewportMode,
    paused: bool,
    swipe: SwipeTracker,
    auto_advance: Option<IntervalTimer>,
    lock_release: Option<OneShotTimer>,
    mounted: bool,
}

impl<T> CarouselController<T> {
    /// Create a mounted controller with the auto-advance timer running.
    ///
    /// The viewport starts in [`ViewportMode::Desktop`]; call
    /// [`on_viewport_resize`](Self::on_viewport_resize) or
    /// [`with_viewport_width`](Self::with_viewport_width) with the real width.
    ///
    /// # Errors
    ///
    /// [`CarouselError::EmptyItems`] if `items` is empty and
    /// [`CarouselError::InvalidConfig`] if `config` fails validation.
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptyItems);
        }
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(CarouselError::InvalidConfig(errors));
        }
        let sequence = ExtendedSequence::new(items.len(), config.clone_tail);
        let auto_advance = Some(IntervalTimer::new(config.auto_advance_interval()));
        Ok(Self {
            items,
            sequence,
            config,
            cursor: 0,
            mode: ViewportMode::default(),
            paused: false,
            swipe: SwipeTracker::Idle,
            auto_advance,
            lock_release: None,
            mounted: true,
        })
    }

    /// Set the initial viewport width.
    #[must_use]
    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.on_viewport_resize(width);
        self
    }

    // --- Accessors ---

    /// Number of logical items (always at least one).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed controller.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The logical items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Active logical index.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The active item.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.items[self.cursor]
    }

    /// Current layout mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Whether a manual transition is settling.
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock_release.is_some()
    }

    /// Whether auto-advance is paused by hover.
    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a touch sequence is being tracked.
    #[inline]
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.swipe.is_tracking()
    }

    /// Current swipe tracker state.
    #[must_use]
    pub fn swipe(&self) -> SwipeTracker {
        self.swipe
    }

    /// Whether the controller is mounted (timers armed).
    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Physical slot layout of the render track.
    #[must_use]
    pub fn extended(&self) -> &ExtendedSequence {
        &self.sequence
    }

    /// Items of the render track in physical order.
    pub fn extended_items(&self) -> impl Iterator<Item = &T> {
        self.sequence.resolve(&self.items)
    }

    /// Extended-sequence slots inside the viewport.
    #[must_use]
    pub fn visible_slots(&self) -> Range<usize> {
        let end = (self.cursor + self.mode.items_per_view()).min(self.sequence.len());
        self.cursor..end
    }

    /// Width of one item in percent of the viewport.
    #[must_use]
    pub fn item_width_percent(&self) -> f64 {
        self.mode.item_width_percent()
    }

    /// Track translation in percent: `-(cursor * item_width_percent)`.
    #[must_use]
    pub fn compute_offset(&self) -> f64 {
        self.mode.offset_percent(self.cursor)
    }

    /// Position indicators, one per logical item.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> {
        let cursor = self.cursor;
        (0..self.items.len()).map(move |index| Indicator {
            index,
            active: index == cursor,
        })
    }

    /// Snapshot for the rendering layer.
    #[must_use]
    pub fn view(&self) -> CarouselView {
        CarouselView {
            cursor: self.cursor,
            len: self.items.len(),
            offset_percent: self.compute_offset(),
            mode: self.mode,
            items_per_view: self.mode.items_per_view(),
            item_width_percent: self.mode.item_width_percent(),
            locked: self.is_locked(),
            paused: self.paused,
            touching: self.is_touching(),
        }
    }

    // --- Manual navigation ---

    /// Move to the next item. Returns `false` if rejected by the lock.
    pub fn advance(&mut self) -> bool {
        let next = (self.cursor + 1) % self.items.len();
        self.begin_transition(next, SlideReason::Next)
    }

    /// Move to the previous item. Returns `false` if rejected by the lock.
    pub fn retreat(&mut self) -> bool {
        let len = self.items.len();
        let prev = (self.cursor + len - 1) % len;
        self.begin_transition(prev, SlideReason::Previous)
    }

    /// Jump to `index`, wrapped modulo the item count.
    ///
    /// Jumping to the active index still takes the lock. Returns `false` if
    /// rejected by the lock.
    pub fn go_to(&mut self, index: isize) -> bool {
        let len = self.items.len() as isize;
        let target = index.rem_euclid(len) as usize;
        self.begin_transition(target, SlideReason::GoTo)
    }

    fn begin_transition(&mut self, target: usize, reason: SlideReason) -> bool {
        if self.is_locked() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "carousel.lock_rejected",
                reason = reason.as_str(),
                cursor = self.cursor
            );
            return false;
        }
        self.lock_release = Some(OneShotTimer::new(self.config.settle_duration()));
        self.move_cursor(target, reason);
        true
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn move_cursor(&mut self, target: usize, reason: SlideReason) {
        debug_assert!(target < self.items.len());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.slide",
            reason = reason.as_str(),
            from = self.cursor,
            to = target
        );
        self.cursor = target;
    }

    // --- Viewport ---

    /// Recompute the layout mode from the viewport width.
    ///
    /// Returns `true` if the mode changed. Never touches the lock.
    pub fn on_viewport_resize(&mut self, width: u32) -> bool {
        let mode = ViewportMode::from_width(width, self.config.mobile_breakpoint_px);
        if mode == self.mode {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "carousel.viewport", width, mobile = mode.is_mobile());
        self.mode = mode;
        true
    }

    // --- Auto-advance ---

    /// Periodic tick. Moves the cursor forward unless paused or touching.
    ///
    /// Bypasses the transition lock. Returns `true` if the cursor moved.
    pub fn on_auto_tick(&mut self) -> bool {
        if self.paused || self.is_touching() {
            return false;
        }
        let next = (self.cursor + 1) % self.items.len();
        self.move_cursor(next, SlideReason::Auto);
        true
    }

    /// Pointer entered: pause auto-advance.
    pub fn on_pause_enter(&mut self) {
        self.set_paused(true);
    }

    /// Pointer left: resume auto-advance.
    pub fn on_pause_leave(&mut self) {
        self.set_paused(false);
    }

    fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        self.restart_auto_advance();
    }

    fn restart_auto_advance(&mut self) {
        if !self.mounted {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "carousel.auto_advance.restart",
            paused = self.paused,
            touching = self.is_touching()
        );
        match self.auto_advance.as_mut() {
            Some(timer) => timer.restart(),
            None => {
                self.auto_advance = Some(IntervalTimer::new(self.config.auto_advance_interval()));
            }
        }
    }

    // --- Touch ---

    /// Touch began at `x`.
    pub fn on_touch_start(&mut self, x: f64) {
        let was_touching = self.is_touching();
        self.swipe.begin(x);
        if !was_touching {
            self.restart_auto_advance();
        }
    }

    /// Touch moved to `x`.
    ///
    /// Once the horizontal travel reaches the swipe threshold, slides once
    /// in the swipe direction (subject to the lock) and stops tracking.
    /// Returns the recognised direction, if any.
    pub fn on_touch_move(&mut self, x: f64) -> Option<SwipeDirection> {
        let direction = self.swipe.track(x, self.config.swipe_threshold_px)?;
        match direction {
            SwipeDirection::Next => self.advance(),
            SwipeDirection::Previous => self.retreat(),
        };
        self.restart_auto_advance();
        Some(direction)
    }

    /// Touch ended. Idempotent.
    pub fn on_touch_end(&mut self) {
        if !self.is_touching() {
            return;
        }
        self.swipe.end();
        self.restart_auto_advance();
    }

    // --- Time ---

    /// Time until the earliest pending timer, or `None` when unmounted.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let lock = self.lock_release.as_ref().map(OneShotTimer::remaining);
        let tick = self.auto_advance.as_ref().map(IntervalTimer::remaining);
        match (lock, tick) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Advance virtual time, firing every timer that falls due in order.
    ///
    /// The delta is split only at the pending lock release; auto-advance
    /// fires past it are applied in one step, so any delta costs the same.
    pub fn advance_time(&mut self, delta: Duration) {
        if !self.mounted {
            return;
        }
        let mut budget = delta;
        if let Some(due) = self.lock_release.as_ref().map(OneShotTimer::remaining)
            && due <= budget
        {
            budget -= due;
            self.elapse(due);
        }
        self.elapse(budget);
    }

    fn elapse(&mut self, delta: Duration) {
        if delta.is_zero() {
            return;
        }
        let released = self
            .lock_release
            .as_mut()
            .is_some_and(|timer| timer.elapse(delta));
        let fires = self
            .auto_advance
            .as_mut()
            .map_or(0, |timer| timer.elapse(delta));
        if released {
            self.lock_release = None;
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "carousel.lock_released", cursor = self.cursor);
        }
        self.apply_auto_ticks(fires);
    }

    /// Apply `fires` auto ticks at once. Paused and touching cannot change
    /// inside one `advance_time` call, so either every tick moves or none does.
    fn apply_auto_ticks(&mut self, fires: u128) {
        if fires == 0 || self.paused || self.is_touching() {
            return;
        }
        let len = self.items.len();
        let steps = (fires % len as u128) as usize;
        self.move_cursor((self.cursor + steps) % len, SlideReason::Auto);
    }

    // --- Lifecycle ---

    /// Drop all timers and gesture state.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "carousel.teardown", cursor = self.cursor);
        self.auto_advance = None;
        self.lock_release = None;
        self.swipe.end();
        self.paused = false;
        self.mounted = false;
    }

    /// Re-arm after [`teardown`](Self::teardown). No-op while mounted.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.restart_auto_advance();
    }
}
