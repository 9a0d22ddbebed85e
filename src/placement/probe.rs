//! Layout capability used by the placement engine

use super::rect::{Rect, Size};

/// Live layout queries. Implementations must read fresh values on every call.
pub trait LayoutProbe {
    /// Current viewport size
    fn viewport(&self) -> Size;
    /// Current size of the button being placed
    fn control_size(&self) -> Size;
    /// Current bounding box of the region the button must stay away from
    fn avoid_region(&self) -> Rect;
}

/// Static layout for headless runs and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLayout {
    pub viewport: Size,
    pub control: Size,
    pub avoid: Rect,
}

impl FixedLayout {
    /// Viewport with a card of `card` size centered in it
    pub fn centered(viewport: Size, control: Size, card: Size) -> Self {
        let left = (viewport.width - card.width) / 2.0;
        let top = (viewport.height - card.height) / 2.0;
        Self {
            viewport,
            control,
            avoid: Rect::at(left, top, card),
        }
    }
}

impl LayoutProbe for FixedLayout {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn control_size(&self) -> Size {
        self.control
    }

    fn avoid_region(&self) -> Rect {
        self.avoid
    }
}
