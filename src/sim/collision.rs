//! Wall reflection and barrier distance
//!
//! The geometric half of the step: elastic reflection off the window edges
//! and the point-to-line distance that drives the barrier stop.

use glam::Vec2;

/// Reflect the ball off the window edges.
///
/// Per axis: crossing the high edge clamps to `extent - radius` and negates
/// that velocity component; crossing the low edge clamps to `radius` and
/// negates. The `else if` means at most one edge per axis reacts in a given
/// frame, so a ball exactly in a corner can take two frames to fully
/// reflect. That matches the original toy and is left as-is.
pub fn reflect_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32, bounds: Vec2) {
    if pos.x + radius >= bounds.x {
        pos.x = bounds.x - radius;
        vel.x = -vel.x;
    } else if pos.x - radius < 0.0 {
        pos.x = radius;
        vel.x = -vel.x;
    }

    if pos.y + radius >= bounds.y {
        pos.y = bounds.y - radius;
        vel.y = -vel.y;
    } else if pos.y - radius < 0.0 {
        pos.y = radius;
        vel.y = -vel.y;
    }
}

/// Perpendicular distance from `p` to the infinite line through `start`
/// and `end`, via `|a*x + b*y + c| / sqrt(a^2 + b^2)` with
/// `a = y2 - y1`, `b = x1 - x2`, `c = x2*y1 - x1*y2`.
///
/// Infinite-line on purpose: contact anywhere along the line's extension
/// counts, not just between the endpoints.
pub fn line_point_distance(start: Vec2, end: Vec2, p: Vec2) -> f32 {
    let a = end.y - start.y;
    let b = start.x - end.x;
    let c = end.x * start.y - start.x * end.y;

    let denom_sq = a * a + b * b;
    if denom_sq < 0.0001 {
        // Degenerate line: fall back to point distance
        return p.distance(start);
    }

    (a * p.x + b * p.y + c).abs() / denom_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_high_x_edge() {
        let mut pos = Vec2::new(635.0, 240.0);
        let mut vel = Vec2::new(100.0, 50.0);
        reflect_walls(&mut pos, &mut vel, 20.0, Vec2::new(640.0, 480.0));

        assert_eq!(pos, Vec2::new(620.0, 240.0));
        assert_eq!(vel, Vec2::new(-100.0, 50.0));
    }

    #[test]
    fn test_reflect_low_y_edge() {
        let mut pos = Vec2::new(320.0, 5.0);
        let mut vel = Vec2::new(0.0, -80.0);
        reflect_walls(&mut pos, &mut vel, 20.0, Vec2::new(640.0, 480.0));

        assert_eq!(pos, Vec2::new(320.0, 20.0));
        assert_eq!(vel, Vec2::new(0.0, 80.0));
    }

    #[test]
    fn test_reflect_interior_untouched() {
        let mut pos = Vec2::new(320.0, 240.0);
        let mut vel = Vec2::new(100.0, -100.0);
        reflect_walls(&mut pos, &mut vel, 20.0, Vec2::new(640.0, 480.0));

        assert_eq!(pos, Vec2::new(320.0, 240.0));
        assert_eq!(vel, Vec2::new(100.0, -100.0));
    }

    #[test]
    fn test_corner_reflects_both_axes_same_frame() {
        // Each axis has its own if/else if, so a corner hit still flips
        // both components in one call.
        let mut pos = Vec2::new(639.0, 479.0);
        let mut vel = Vec2::new(60.0, 60.0);
        reflect_walls(&mut pos, &mut vel, 20.0, Vec2::new(640.0, 480.0));

        assert_eq!(pos, Vec2::new(620.0, 460.0));
        assert_eq!(vel, Vec2::new(-60.0, -60.0));
    }

    #[test]
    fn test_line_distance_horizontal() {
        let d = line_point_distance(
            Vec2::new(0.0, 100.0),
            Vec2::new(50.0, 100.0),
            Vec2::new(25.0, 130.0),
        );
        assert!((d - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_line_distance_point_on_line() {
        let d = line_point_distance(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(40.0, 40.0),
        );
        assert!(d.abs() < 1e-4);
    }

    #[test]
    fn test_line_distance_beyond_segment_extent() {
        // The formula is for the infinite line: a point past the endpoints
        // but on the line still measures zero.
        let d = line_point_distance(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(500.0, 0.0),
        );
        assert!(d.abs() < 1e-4);
    }

    #[test]
    fn test_line_distance_degenerate() {
        let p = Vec2::new(3.0, 4.0);
        let d = line_point_distance(Vec2::ZERO, Vec2::ZERO, p);
        assert!((d - 5.0).abs() < 1e-4);
        assert!(d.is_finite());
    }
}
