#![forbid(unsafe_code)]

//! Input events accepted by the carousel.
//!
//! Hosts translate their native pointer, touch, resize, and button events
//! into [`CarouselEvent`] and feed them to
//! [`CarouselController::handle`]. Time is not an event; it enters through
//! [`CarouselController::advance_time`].

use crate::controller::CarouselController;

/// A discrete input to the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Next-arrow activation.
    Next,
    /// Previous-arrow activation.
    Previous,
    /// Indicator activation. Any integer is accepted and wrapped.
    GoTo(isize),
    /// Viewport width changed (logical pixels).
    Resize {
        /// New viewport width.
        width: u32,
    },
    /// Pointer entered the carousel.
    PointerEnter,
    /// Pointer left the carousel.
    PointerLeave,
    /// Touch began at `x`.
    TouchStart {
        /// Horizontal coordinate in logical pixels.
        x: f64,
    },
    /// Touch moved to `x`.
    TouchMove {
        /// Horizontal coordinate in logical pixels.
        x: f64,
    },
    /// Touch ended or was cancelled.
    TouchEnd,
}

impl<T> CarouselController<T> {
    /// Dispatch an event to the matching operation.
    ///
    /// Returns `true` if the rendered view changed.
    pub fn handle(&mut self, event: &CarouselEvent) -> bool {
        let before = self.view();
        match *event {
            CarouselEvent::Next => {
                self.advance();
            }
            CarouselEvent::Previous => {
                self.retreat();
            }
            CarouselEvent::GoTo(index) => {
                self.go_to(index);
            }
            CarouselEvent::Resize { width } => {
                self.on_viewport_resize(width);
            }
            CarouselEvent::PointerEnter => self.on_pause_enter(),
            CarouselEvent::PointerLeave => self.on_pause_leave(),
            CarouselEvent::TouchStart { x } => self.on_touch_start(x),
            CarouselEvent::TouchMove { x } => {
                self.on_touch_move(x);
            }
            CarouselEvent::TouchEnd => self.on_touch_end(),
        }
        self.view() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;

    fn controller() -> CarouselController<char> {
        CarouselController::new(vec!['a', 'b', 'c', 'd'], CarouselConfig::default())
            .expect("non-empty")
    }

    #[test]
    fn next_changes_view_then_locked_next_does_not_move_cursor() {
        let mut c = controller();
        assert!(c.handle(&CarouselEvent::Next));
        assert_eq!(c.cursor(), 1);
        assert!(!c.handle(&CarouselEvent::Next));
        assert_eq!(c.cursor(), 1);
    }

    #[test]
    fn resize_reports_mode_change_only() {
        let mut c = controller();
        assert!(c.handle(&CarouselEvent::Resize { width: 400 }));
        assert!(!c.handle(&CarouselEvent::Resize { width: 500 }));
        assert!(c.handle(&CarouselEvent::Resize { width: 1024 }));
    }

    #[test]
    fn stray_touch_move_is_ignored() {
        let mut c = controller();
        assert!(!c.handle(&CarouselEvent::TouchMove { x: 0.0 }));
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn go_to_negative_wraps() {
        let mut c = controller();
        assert!(c.handle(&CarouselEvent::GoTo(-1)));
        assert_eq!(c.cursor(), 3);
    }

    #[test]
    fn pointer_enter_leave_toggle_pause() {
        let mut c = controller();
        assert!(c.handle(&CarouselEvent::PointerEnter));
        assert!(c.is_paused());
        assert!(!c.handle(&CarouselEvent::PointerEnter));
        assert!(c.handle(&CarouselEvent::PointerLeave));
        assert!(!c.is_paused());
    }
}
