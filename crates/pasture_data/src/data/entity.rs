use serde::{Deserialize, Serialize};

/// World position, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Display color of a creature or food pellet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

/// A player or bot creature: an ordered chain of body segments plus mass,
/// heading, and boost state.
///
/// `segments[0]` is the head; the tail is the last element. `mass` is the
/// the target body length; it only ever grows, and the segment chain catches
/// up to it lazily, one segment per movement step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Body positions, head first. Insertion order is meaningful.
    pub segments: Vec<Vec2>,
    /// Target segment count; monotonically non-decreasing while alive.
    pub mass: usize,
    /// Current heading in radians.
    pub angle: f64,
    /// Boosted speed this tick. Always false for bots.
    pub boosting: bool,
    pub color: Rgb,
    pub name: String,
    pub is_player: bool,
}

impl Creature {
    /// Builds a creature at `(x, y)` with its body trailing the head along
    /// the negative x axis at `segment_spacing` intervals.
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        initial_length: usize,
        segment_spacing: f64,
        angle: f64,
        color: Rgb,
        name: impl Into<String>,
        is_player: bool,
    ) -> Self {
        let segments = (0..initial_length)
            .map(|i| Vec2::new(x - i as f64 * segment_spacing, y))
            .collect();
        Self {
            segments,
            mass: initial_length,
            angle,
            boosting: false,
            color,
            name: name.into(),
            is_player,
        }
    }

    /// The head segment.
    ///
    /// A creature always has at least one segment; construction guarantees it
    /// and movement only ever prepends.
    #[must_use]
    pub fn head(&self) -> Vec2 {
        self.segments[0]
    }
}
