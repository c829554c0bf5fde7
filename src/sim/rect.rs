//! Integer axis-aligned rectangles
//!
//! Every entity keeps continuous float position as the source of truth; the
//! `Rect` it exposes is a rounded, recomputed projection used for collision
//! tests and handed to the renderer. Rects are never mutated independently of
//! the position they were derived from - edge snaps go through the owning
//! entity, which reconciles its float position afterwards.

/// An axis-aligned rectangle with integer coordinates
///
/// `right`/`bottom` are exclusive (`x + w` / `y + h`), so two rects that merely
/// share an edge do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move the rect so its right edge sits at `right`
    #[inline]
    pub fn with_right(mut self, right: i32) -> Self {
        self.x = right - self.w;
        self
    }

    /// Move the rect so its left edge sits at `left`
    #[inline]
    pub fn with_left(mut self, left: i32) -> Self {
        self.x = left;
        self
    }

    /// Move the rect so its bottom edge sits at `bottom`
    #[inline]
    pub fn with_bottom(mut self, bottom: i32) -> Self {
        self.y = bottom - self.h;
        self
    }

    /// Move the rect so its top edge sits at `top`
    #[inline]
    pub fn with_top(mut self, top: i32) -> Self {
        self.y = top;
        self
    }

    /// Strict overlap test (shared edges do not count)
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
