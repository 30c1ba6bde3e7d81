use glam::Vec2;

/// Axis-aligned box shared by paddles and the ball.
/// `pos` is the top-left corner; `size` never changes after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

pub fn center(body: &Body) -> Vec2 {
    body.pos + body.size * 0.5
}

/// Inclusive overlap of the vertical extents of two boxes
pub fn overlaps_vertically(a: &Body, b: &Body) -> bool {
    a.bottom() >= b.top() && a.top() <= b.bottom()
}
