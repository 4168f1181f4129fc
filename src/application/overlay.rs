use derive_more::Constructor;

use crate::domain::transform::{Point, Size};

/// Client-space rectangle, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Where a tooltip goes so it stays glued to the element it was opened on.
///
/// The pointer offset inside the element is remembered when the tooltip is
/// stuck; after every geometry change the tooltip is put back at the same
/// spot relative to the (moved) element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipAnchor {
    pointer_offset: Point,
}

impl TooltipAnchor {
    pub fn at_pointer(element: Rect, pointer: Point) -> Self {
        Self {
            pointer_offset: Point::new(pointer.x - element.left, pointer.y - element.top),
        }
    }

    pub fn pointer_offset(&self) -> Point {
        self.pointer_offset
    }

    /// Top-left corner for a tooltip of `size` next to `element`.
    pub fn place(&self, element: Rect, size: Size, viewport: Rect) -> Point {
        clamp_into_viewport(
            Point::new(element.left + self.pointer_offset.x, element.top + self.pointer_offset.y),
            size,
            viewport,
        )
    }
}

/// Keep a box inside the viewport. When it does not fit, the left and
/// bottom edges win.
pub fn clamp_into_viewport(position: Point, size: Size, viewport: Rect) -> Point {
    let left = position.x.min(viewport.right() - size.width).max(viewport.left);
    let top = position.y.max(viewport.top).min(viewport.bottom() - size.height);
    Point::new(left, top)
}
