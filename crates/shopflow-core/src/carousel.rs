//! # Banner Carousel
//!
//! Index math for the auto-scrolling product banner.
//!
//! The banner shows the first [`BANNER_SIZE`](crate::BANNER_SIZE) products
//! and an external timer moves it forward every
//! [`BANNER_INTERVAL_MS`](crate::BANNER_INTERVAL_MS). This module owns no
//! timer; the caller ticks it.
//!
//! ```text
//!   tick        tick        tick              tick
//!  ──┼───────────┼───────────┼─────  ...  ─────┼──────►
//!    0 ────────► 1 ────────► 2 ──  ...  ─► 5 ──► 0
//! ```

/// Returns the index after `current` in a list of `length` items, wrapping
/// at the end.
///
/// An empty list has no valid index, so `length == 0` yields `None`.
///
/// ```rust
/// use shopflow_core::next_index;
///
/// assert_eq!(next_index(0, 6), Some(1));
/// assert_eq!(next_index(5, 6), Some(0));
/// assert_eq!(next_index(0, 0), None);
/// ```
pub fn next_index(current: usize, length: usize) -> Option<usize> {
    if length == 0 {
        return None;
    }
    Some((current % length + 1) % length)
}

/// Position of the banner over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerCarousel {
    len: usize,
    current: usize,
}

impl BannerCarousel {
    /// Creates a banner over `len` slides, starting at the first.
    pub fn new(len: usize) -> Self {
        BannerCarousel { len, current: 0 }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The slide currently in view, `None` for an empty banner.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Moves to the next slide and returns it. No-op on an empty banner.
    pub fn advance(&mut self) -> Option<usize> {
        let next = next_index(self.current, self.len)?;
        self.current = next;
        Some(next)
    }
}
