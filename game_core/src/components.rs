use glam::IVec2;

/// Axis-aligned rectangle with an integer top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Shift by a direction vector
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Separating-axis test; touching edges do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Which side a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    /// Left paddle, W/S keys
    One,
    /// Right paddle, Up/Down keys
    Two,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub player: Player,
    pub rect: Rect,
    pub dir: IVec2, // set by input, only y is ever non-zero
}

impl Paddle {
    pub fn new(player: Player, rect: Rect) -> Self {
        Self {
            player,
            rect,
            dir: IVec2::ZERO,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    pub dir: IVec2,
}

impl Ball {
    pub fn new(rect: Rect, dir: IVec2) -> Self {
        Self { rect, dir }
    }
}
