//! Cyclic index navigation for listing image carousels.
//!
//! A carousel is an ordered, cyclically-navigable sequence of images. The
//! state is just a size and a current index; it is created at zero, mutated
//! only via [`Carousel::advance`], [`Carousel::back`], and [`Carousel::jump`],
//! and discarded when the card disappears.
//!
//! # Edge Cases
//! - Advancing or going back wraps cyclically; there is no terminal state.
//! - On an empty carousel, `advance` and `back` are defined no-ops (not
//!   errors); `jump` always fails because no target can be in range.

use crate::core::error::{PresenterError, Result};

/// Navigation state for one image carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    size: usize,
    index: usize,
}

impl Carousel {
    /// Create a carousel over `size` images, positioned at the first one.
    ///
    /// When `size == 0` the index is inapplicable; navigation is a no-op.
    pub fn new(size: usize) -> Self {
        Self { size, index: 0 }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Current image index, in `0..size` when the carousel is non-empty
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Move to the next image, wrapping from the last back to the first.
    pub fn advance(&mut self) {
        if self.size > 0 {
            self.index = (self.index + 1) % self.size;
        }
    }

    /// Move to the previous image, wrapping from the first to the last.
    pub fn back(&mut self) {
        if self.size > 0 {
            self.index = (self.index + self.size - 1) % self.size;
        }
    }

    /// Jump directly to `target` (a dot click).
    ///
    /// Fails with `IndexOutOfRange` unless `0 <= target < size`; on an empty
    /// carousel every jump fails, as no target can be in range.
    pub fn jump(&mut self, target: usize) -> Result<()> {
        if self.size == 0 {
            return Err(PresenterError::EmptyCarouselJump);
        }
        if target >= self.size {
            return Err(PresenterError::index_out_of_range(target, self.size));
        }
        self.index = target;
        Ok(())
    }
}
