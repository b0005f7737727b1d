//! Movement engine: advances a creature's segment chain toward a steering
//! target and realizes growth lazily.

use pasture_data::{Creature, Vec2};

/// Locomotion behavior for a creature body chain.
pub trait Locomotion {
    /// Advances one step toward `target`.
    ///
    /// The heading turns to face the target unless the target coincides with
    /// the head exactly, in which case the prior heading is kept (a
    /// zero-length vector has no direction; turning would mean dividing by
    /// zero). The new head is prepended and, if the chain now exceeds
    /// `mass`, exactly one tail segment is dropped, so a raised `mass`
    /// lengthens the body over the following ticks rather than instantly.
    fn advance(&mut self, target: Vec2, base_speed: f64, boost_speed: f64);

    /// Raises the target body length. Never shrinks it; the segment chain
    /// catches up through subsequent `advance` calls.
    fn grow(&mut self, amount: usize);
}

impl Locomotion for Creature {
    fn advance(&mut self, target: Vec2, base_speed: f64, boost_speed: f64) {
        let head = self.head();
        let dx = target.x - head.x;
        let dy = target.y - head.y;
        if dx != 0.0 || dy != 0.0 {
            self.angle = dy.atan2(dx);
        }

        let speed = if self.boosting { boost_speed } else { base_speed };
        let new_head = Vec2::new(
            head.x + self.angle.cos() * speed,
            head.y + self.angle.sin() * speed,
        );

        self.segments.insert(0, new_head);
        if self.segments.len() > self.mass {
            self.segments.pop();
        }
    }

    fn grow(&mut self, amount: usize) {
        self.mass += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasture_data::Rgb;

    fn creature() -> Creature {
        Creature::new(0.0, 0.0, 5, 8.0, 0.0, Rgb::default(), "Bessie", false)
    }

    #[test]
    fn test_advance_moves_toward_target() {
        let mut c = creature();
        c.advance(Vec2::new(100.0, 0.0), 3.0, 6.0);
        assert_eq!(c.head(), Vec2::new(3.0, 0.0));
        assert_eq!(c.angle, 0.0);
        assert_eq!(c.segments.len(), 5);
    }

    #[test]
    fn test_boost_doubles_step() {
        let mut c = creature();
        c.boosting = true;
        c.advance(Vec2::new(100.0, 0.0), 3.0, 6.0);
        assert_eq!(c.head(), Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_zero_length_target_keeps_heading() {
        let mut c = creature();
        c.angle = 1.25;
        let head = c.head();
        c.advance(head, 3.0, 6.0);
        assert_eq!(c.angle, 1.25);
        assert!(c.head().x.is_finite() && c.head().y.is_finite());
        assert!((c.head().distance(head) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_realized_lazily() {
        let mut c = creature();
        c.grow(3);
        assert_eq!(c.mass, 8);
        assert_eq!(c.segments.len(), 5, "grow alone must not touch the body");

        // One segment per tick until the chain catches up, then trimming
        // resumes.
        for expected in [6, 7, 8, 8, 8] {
            c.advance(Vec2::new(1000.0, 0.0), 3.0, 6.0);
            assert_eq!(c.segments.len(), expected);
        }
    }

    #[test]
    fn test_grow_is_exact_and_monotonic() {
        let mut c = creature();
        c.grow(2);
        c.grow(0);
        c.grow(7);
        assert_eq!(c.mass, 14);
    }
}
