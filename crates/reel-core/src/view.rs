#![forbid(unsafe_code)]

//! Render-facing snapshot of the carousel.

use crate::viewport::ViewportMode;

/// Everything the rendering layer reads from the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    /// Active logical index.
    pub cursor: usize,
    /// Number of logical items.
    pub len: usize,
    /// Track translation in percent of the viewport width.
    pub offset_percent: f64,
    /// Current layout mode.
    pub mode: ViewportMode,
    /// Items visible at once.
    pub items_per_view: usize,
    /// Width of one item in percent of the viewport width.
    pub item_width_percent: f64,
    /// Whether a manual transition is settling.
    pub locked: bool,
    /// Whether the pointer is hovering the carousel.
    pub paused: bool,
    /// Whether a touch sequence is being tracked.
    pub touching: bool,
}

impl CarouselView {
    /// Position indicators, one per logical item.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> {
        let cursor = self.cursor;
        (0..self.len).map(move |index| Indicator {
            index,
            active: index == cursor,
        })
    }
}

/// A position indicator ("dot") below the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Logical index this indicator jumps to.
    pub index: usize,
    /// Whether this is the active position.
    pub active: bool,
}

impl Indicator {
    /// Accessible label, 1-based.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Go to slide {}", self.index + 1)
    }
}

/// The arrow buttons on either side of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    /// Left arrow.
    Previous,
    /// Right arrow.
    Next,
}

impl NavButton {
    /// Accessible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous slide",
            Self::Next => "Next slide",
        }
    }
}
