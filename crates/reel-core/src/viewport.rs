#![forbid(unsafe_code)]

//! Viewport classification.
//!
//! The carousel only distinguishes two layouts: a single card per view on
//! narrow screens and three cards per view otherwise.

/// Layout mode derived from the viewport width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    /// One item per view.
    Mobile,
    /// Three items per view.
    #[default]
    Desktop,
}

impl ViewportMode {
    /// Classify a viewport width (logical pixels) against a breakpoint.
    ///
    /// Widths strictly below the breakpoint are mobile.
    #[must_use]
    pub const fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Number of items visible at once.
    #[must_use]
    pub const fn items_per_view(self) -> usize {
        match self {
            Self::Mobile => 1,
            Self::Desktop => 3,
        }
    }

    /// Width of one item as a percentage of the viewport.
    #[must_use]
    pub fn item_width_percent(self) -> f64 {
        100.0 / self.items_per_view() as f64
    }

    /// Horizontal track translation (percent) that brings `cursor` to the
    /// left edge of the viewport.
    #[must_use]
    pub fn offset_percent(self, cursor: usize) -> f64 {
        -(cursor as f64 * self.item_width_percent())
    }

    /// Whether this is the mobile layout.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}
