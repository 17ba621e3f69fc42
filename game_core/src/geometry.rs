use glam::Vec2;

use crate::{Ball, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Strict overlap: boxes that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.max.y > other.min.y
            && self.min.x < other.max.x
            && self.min.y < other.max.y
    }
}

/// Ball vs paddle test on bounding boxes.
///
/// The ball is treated as its square `pos ± radius`, so a contact near a paddle
/// corner can register even where the circle itself would miss.
pub fn intersects(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().overlaps(&paddle.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Controller;
    use proptest::prelude::*;

    fn paddle_at(x: f32, y: f32) -> Paddle {
        Paddle::new(Controller::Heuristic, x, y, 10.0, 100.0)
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::ZERO, 10.0, 5.0)
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let b = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let b = Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(4.0, 2.0));
        assert!(!a.overlaps(&b), "Touching edges must not count");
    }

    #[test]
    fn test_ball_inside_paddle_span_collides() {
        let paddle = paddle_at(590.0, 150.0);
        let ball = ball_at(585.0, 200.0);
        assert!(intersects(&ball, &paddle));
    }

    #[test]
    fn test_ball_at_paddle_top_left_corner_does_not_collide() {
        let paddle = paddle_at(590.0, 150.0);
        // Ball box bottom-right corner sits exactly on the paddle's top-left corner
        let ball = ball_at(580.0, 140.0);
        assert!(!intersects(&ball, &paddle));
    }

    #[test]
    fn test_ball_just_past_corner_collides() {
        let paddle = paddle_at(590.0, 150.0);
        let ball = ball_at(580.5, 140.5);
        assert!(intersects(&ball, &paddle));
    }

    #[test]
    fn test_ball_box_corner_hit_outside_circle_still_collides() {
        let paddle = paddle_at(590.0, 150.0);
        // Circle would miss the corner (distance ~11.3 > 10), the box does not
        let ball = ball_at(582.0, 142.0);
        assert!(intersects(&ball, &paddle));
    }

    #[test]
    fn test_ball_far_from_paddle() {
        let paddle = paddle_at(0.0, 150.0);
        let ball = ball_at(300.0, 200.0);
        assert!(!intersects(&ball, &paddle));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            w in 0.5f32..50.0, h in 0.5f32..50.0,
        ) {
            let a = Aabb::from_top_left_size(Vec2::new(ax, ay), Vec2::new(w, h));
            let b = Aabb::from_top_left_size(Vec2::new(bx, by), Vec2::new(h, w));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_edge_contact_never_collides(y in 0.0f32..400.0) {
            // Ball's left edge exactly on the human paddle's right edge
            let paddle = Paddle::new(Controller::Human, 0.0, 150.0, 10.0, 100.0);
            let ball = ball_at(20.0, y);
            prop_assert!(!intersects(&ball, &paddle));
        }
    }
}
