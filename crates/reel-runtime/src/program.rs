#![forbid(unsafe_code)]

//! Single-threaded event loop for a carousel.
//!
//! [`CarouselProgram`] owns a [`CarouselController`] and a [`Clock`]. Each
//! loop iteration waits on an inbox for at most the controller's next
//! deadline, feeds the elapsed time into the controller, applies the event
//! (if any), and presents the view to a [`FrameSink`] when it changed.
//!
//! ```text
//!   host input ──▶ mpsc inbox ──▶ run() ──▶ controller ──▶ FrameSink
//!                                  ▲   │
//!                                  └───┘ recv_timeout(next_deadline)
//! ```
//!
//! The controller is only ever touched by the thread running the loop.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use reel_core::{CarouselController, CarouselEvent, CarouselView};
use web_time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// How long to wait for input when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_secs(1);

/// Message delivered to a running program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgramMsg {
    /// An input event for the controller.
    Event(CarouselEvent),
    /// Stop the loop and tear the controller down.
    Shutdown,
}

impl From<CarouselEvent> for ProgramMsg {
    fn from(event: CarouselEvent) -> Self {
        Self::Event(event)
    }
}

/// Receives every changed view from a running program.
pub trait FrameSink {
    /// Present a new view.
    fn present(&mut self, view: &CarouselView);
}

impl FrameSink for Vec<CarouselView> {
    fn present(&mut self, view: &CarouselView) {
        self.push(view.clone());
    }
}

impl FrameSink for mpsc::Sender<CarouselView> {
    fn present(&mut self, view: &CarouselView) {
        if self.send(view.clone()).is_err() {
            tracing::debug!(message = "program.sink_disconnected", cursor = view.cursor);
        }
    }
}

/// Carousel event loop.
#[derive(Debug)]
pub struct CarouselProgram<T, C = SystemClock> {
    controller: CarouselController<T>,
    clock: C,
    last_pump: Instant,
    last_presented: Option<CarouselView>,
}

impl<T> CarouselProgram<T, SystemClock> {
    /// Create a program driven by wall-clock time.
    #[must_use]
    pub fn new(controller: CarouselController<T>) -> Self {
        Self::with_clock(controller, SystemClock)
    }
}

impl<T, C: Clock> CarouselProgram<T, C> {
    /// Create a program driven by the given clock.
    #[must_use]
    pub fn with_clock(controller: CarouselController<T>, clock: C) -> Self {
        let last_pump = clock.now();
        Self {
            controller,
            clock,
            last_pump,
            last_presented: None,
        }
    }

    /// The controller.
    #[must_use]
    pub fn controller(&self) -> &CarouselController<T> {
        &self.controller
    }

    /// Mutable access to the controller.
    pub fn controller_mut(&mut self) -> &mut CarouselController<T> {
        &mut self.controller
    }

    /// Consume the program, returning the controller.
    #[must_use]
    pub fn into_controller(self) -> CarouselController<T> {
        self.controller
    }

    /// Feed the time elapsed since the previous pump into the controller.
    pub fn pump(&mut self) {
        let now = self.clock.now();
        let delta = now.saturating_duration_since(self.last_pump);
        self.last_pump = now;
        self.controller.advance_time(delta);
    }

    /// Pump, then apply `event`. Returns `true` if the view changed.
    pub fn dispatch(&mut self, event: &CarouselEvent) -> bool {
        self.pump();
        self.controller.handle(event)
    }

    /// Present the current view if it differs from the last presented one.
    pub fn present_if_changed<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        let view = self.controller.view();
        if self.last_presented.as_ref() == Some(&view) {
            return false;
        }
        tracing::trace!(
            message = "program.present",
            cursor = view.cursor,
            offset = view.offset_percent
        );
        sink.present(&view);
        self.last_presented = Some(view);
        true
    }

    /// Run until [`ProgramMsg::Shutdown`] arrives or the inbox disconnects.
    ///
    /// Mounts the controller on entry and tears it down on exit. Returns the
    /// number of frames presented.
    pub fn run<S: FrameSink + ?Sized>(
        &mut self,
        inbox: &mpsc::Receiver<ProgramMsg>,
        sink: &mut S,
    ) -> usize {
        self.controller.mount();
        self.last_pump = self.clock.now();
        tracing::debug!(message = "program.start", items = self.controller.len());

        let mut presented = usize::from(self.present_if_changed(sink));
        loop {
            let wait = self.controller.next_deadline().unwrap_or(IDLE_WAIT);
            match inbox.recv_timeout(wait) {
                Ok(ProgramMsg::Event(event)) => {
                    self.dispatch(&event);
                }
                Ok(ProgramMsg::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => self.pump(),
            }
            presented += usize::from(self.present_if_changed(sink));
        }

        self.controller.teardown();
        tracing::debug!(message = "program.stop", presented);
        presented
    }
}

impl<T, C> CarouselProgram<T, C>
where
    T: Send + 'static,
    C: Clock + Send + 'static,
{
    /// Run the loop on a dedicated thread.
    pub fn spawn<S>(mut self, mut sink: S) -> ProgramHandle<T, C>
    where
        S: FrameSink + Send + 'static,
    {
        let (sender, inbox) = mpsc::channel();
        let thread = thread::spawn(move || {
            self.run(&inbox, &mut sink);
            self
        });
        ProgramHandle { sender, thread }
    }
}

/// Handle to a program running on its own thread.
#[derive(Debug)]
pub struct ProgramHandle<T, C> {
    sender: mpsc::Sender<ProgramMsg>,
    thread: thread::JoinHandle<CarouselProgram<T, C>>,
}

impl<T, C> ProgramHandle<T, C> {
    /// Send an event. Returns `false` if the loop has exited.
    pub fn send(&self, event: CarouselEvent) -> bool {
        self.sender.send(ProgramMsg::Event(event)).is_ok()
    }

    /// Stop the loop and return the program.
    pub fn shutdown(self) -> thread::Result<CarouselProgram<T, C>> {
        // The loop may already have exited; joining still returns it.
        let _ = self.sender.send(ProgramMsg::Shutdown);
        self.thread.join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use reel_core::CarouselConfig;

    fn program(clock: &ManualClock) -> CarouselProgram<char, ManualClock> {
        let controller =
            CarouselController::new(vec!['a', 'b', 'c', 'd'], CarouselConfig::default())
                .expect("non-empty");
        CarouselProgram::with_clock(controller, clock.clone())
    }

    #[test]
    fn pump_feeds_elapsed_time() {
        let clock = ManualClock::new();
        let mut p = program(&clock);
        clock.advance(Duration::from_millis(3000));
        p.pump();
        assert_eq!(p.controller().cursor(), 1);
        p.pump();
        assert_eq!(p.controller().cursor(), 1);
    }

    #[test]
    fn dispatch_pumps_before_handling() {
        let clock = ManualClock::new();
        let mut p = program(&clock);
        assert!(p.dispatch(&CarouselEvent::Next));
        clock.advance(Duration::from_millis(500));
        assert!(p.dispatch(&CarouselEvent::Next));
        assert_eq!(p.controller().cursor(), 2);
    }

    #[test]
    fn present_only_on_change() {
        let clock = ManualClock::new();
        let mut p = program(&clock);
        let mut frames: Vec<CarouselView> = Vec::new();
        assert!(p.present_if_changed(&mut frames));
        assert!(!p.present_if_changed(&mut frames));
        p.dispatch(&CarouselEvent::PointerEnter);
        assert!(p.present_if_changed(&mut frames));
        assert_eq!(frames.len(), 2);
        assert!(frames[1].paused);
    }

    #[test]
    fn run_drains_inbox_and_tears_down() {
        let clock = ManualClock::new();
        let mut p = program(&clock);
        let (tx, rx) = mpsc::channel();
        tx.send(CarouselEvent::Next.into()).expect("send");
        tx.send(CarouselEvent::Next.into()).expect("send");
        tx.send(ProgramMsg::Shutdown).expect("send");

        let mut frames: Vec<CarouselView> = Vec::new();
        let presented = p.run(&rx, &mut frames);

        assert_eq!(presented, 2);
        assert_eq!(frames[0].cursor, 0);
        assert_eq!(frames[1].cursor, 1);
        assert!(frames[1].locked);
        assert!(!p.controller().is_mounted());
    }

    #[test]
    fn run_exits_on_disconnect() {
        let clock = ManualClock::new();
        let mut p = program(&clock);
        let (tx, rx) = mpsc::channel::<ProgramMsg>();
        drop(tx);
        let mut frames: Vec<CarouselView> = Vec::new();
        assert_eq!(p.run(&rx, &mut frames), 1);
    }

    #[test]
    fn sender_sink_forwards_views() {
        let clock = ManualClock::new();
        let mut p = program(&clock);
        let (tx, rx) = mpsc::channel();
        let mut sink = tx;
        p.present_if_changed(&mut sink);
        assert_eq!(rx.try_recv().expect("frame").cursor, 0);
    }
}
