//! Touch input: point-in-rectangle hit testing and target resolution.
//!
//! The simulator forwards mouse clicks as pixel coordinates; on hardware the
//! touch controller would do the same. Either way a press is resolved by
//! testing the point against the button rectangles from [`crate::config`].
//!
//! # Closed Bounds
//!
//! `point_in_rect` treats the rectangle as closed: a point exactly on any
//! edge (including the bottom/right) counts as inside. This intentionally
//! differs from `Rectangle::contains`, which excludes the far edges - a
//! finger landing on the last pixel row of a button should still press it.

use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;

use crate::config::{DOWN_BUTTON, UP_BUTTON};

/// On-screen controls a press can land on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TouchTarget {
    /// Up arrow: raise the setpoint.
    SetpointUp,
    /// Down arrow: lower the setpoint.
    SetpointDown,
}

/// True iff the point lies within the closed rectangle
/// `[x, x+w] x [y, y+h]`. Inclusive on all four boundaries.
pub fn point_in_rect(point: Point, rect: &Rectangle) -> bool {
    point.x >= rect.top_left.x
        && point.x <= rect.top_left.x + rect.size.width as i32
        && point.y >= rect.top_left.y
        && point.y <= rect.top_left.y + rect.size.height as i32
}

/// Resolve a press position to the control under it, if any.
pub fn target_at(point: Point) -> Option<TouchTarget> {
    if point_in_rect(point, &UP_BUTTON) {
        Some(TouchTarget::SetpointUp)
    } else if point_in_rect(point, &DOWN_BUTTON) {
        Some(TouchTarget::SetpointDown)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Size;

    // -------------------------------------------------------------------------
    // point_in_rect Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_point_inside() {
        let rect = Rectangle::new(Point::new(10, 20), Size::new(30, 40));
        assert!(point_in_rect(Point::new(25, 40), &rect), "Interior point should be inside");
    }

    #[test]
    fn test_point_on_edges_is_inside() {
        // Bounds are closed on all four edges
        let rect = Rectangle::new(Point::new(10, 20), Size::new(30, 40));
        assert!(point_in_rect(Point::new(10, 40), &rect), "Left edge should be inside");
        assert!(point_in_rect(Point::new(40, 40), &rect), "Right edge (x+w) should be inside");
        assert!(point_in_rect(Point::new(25, 20), &rect), "Top edge should be inside");
        assert!(point_in_rect(Point::new(25, 60), &rect), "Bottom edge (y+h) should be inside");
    }

    #[test]
    fn test_point_on_corners_is_inside() {
        let rect = Rectangle::new(Point::new(10, 20), Size::new(30, 40));
        assert!(point_in_rect(Point::new(10, 20), &rect), "Top-left corner should be inside");
        assert!(point_in_rect(Point::new(40, 60), &rect), "Bottom-right corner should be inside");
    }

    #[test]
    fn test_point_outside() {
        let rect = Rectangle::new(Point::new(10, 20), Size::new(30, 40));
        assert!(!point_in_rect(Point::new(9, 40), &rect), "Left of rect should be outside");
        assert!(!point_in_rect(Point::new(41, 40), &rect), "Right of rect should be outside");
        assert!(!point_in_rect(Point::new(25, 19), &rect), "Above rect should be outside");
        assert!(!point_in_rect(Point::new(25, 61), &rect), "Below rect should be outside");
    }

    #[test]
    fn test_zero_size_rect_contains_its_origin() {
        // Degenerate but closed: the single point [x, x] x [y, y]
        let rect = Rectangle::new(Point::new(5, 5), Size::new(0, 0));
        assert!(point_in_rect(Point::new(5, 5), &rect), "Zero-size rect should contain its origin");
        assert!(!point_in_rect(Point::new(6, 5), &rect), "Anything else should be outside");
    }

    // -------------------------------------------------------------------------
    // target_at Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_target_at_button_centers() {
        let up_center = UP_BUTTON.top_left
            + Point::new(UP_BUTTON.size.width as i32 / 2, UP_BUTTON.size.height as i32 / 2);
        let down_center = DOWN_BUTTON.top_left
            + Point::new(DOWN_BUTTON.size.width as i32 / 2, DOWN_BUTTON.size.height as i32 / 2);

        assert_eq!(target_at(up_center), Some(TouchTarget::SetpointUp), "Up button center");
        assert_eq!(target_at(down_center), Some(TouchTarget::SetpointDown), "Down button center");
    }

    #[test]
    fn test_target_at_misses_readout_area() {
        assert_eq!(target_at(Point::new(90, 100)), None, "Readout column is not a control");
        assert_eq!(target_at(Point::new(0, 0)), None, "Header is not a control");
    }
}
