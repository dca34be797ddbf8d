//! Up/down arrow buttons for setpoint adjustment.
//!
//! Each button is a background-filled rectangle with a half-arrow triangle
//! centered in it: two primitive draws, nothing else. The caller picks the
//! background color, which is how the brief press highlight works - the main
//! loop swaps in the pressed fill for a few frames after a hit.
//!
//! The triangle is inset from the top and bottom edges by 22% of the button
//! width; its apex sits on the horizontal center line. [`arrow_triangle`]
//! computes the geometry as a pure function so orientation is testable.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics_simulator::SimulatorDisplay;

/// Fraction of the button width used as the triangle inset.
const ARROW_MARGIN: f32 = 0.22;

/// Which way the arrow points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    /// Apex at the top: raise the setpoint.
    Up,
    /// Apex at the bottom: lower the setpoint.
    Down,
}

/// The arrow triangle for a button rectangle.
///
/// Apex at the horizontal center on the near margin; base spanning from
/// `margin` to `width - margin` on the far margin.
pub fn arrow_triangle(area: &Rectangle, direction: ArrowDirection) -> Triangle {
    let x = area.top_left.x;
    let y = area.top_left.y;
    let w = area.size.width as i32;
    let h = area.size.height as i32;

    let margin = (area.size.width as f32 * ARROW_MARGIN) as i32;
    let top_y = y + margin;
    let bottom_y = y + h - margin;
    let apex_x = x + w / 2;
    let left_x = x + margin;
    let right_x = x + w - margin;

    match direction {
        ArrowDirection::Up => Triangle::new(
            Point::new(apex_x, top_y),
            Point::new(left_x, bottom_y),
            Point::new(right_x, bottom_y),
        ),
        ArrowDirection::Down => Triangle::new(
            Point::new(apex_x, bottom_y),
            Point::new(left_x, top_y),
            Point::new(right_x, top_y),
        ),
    }
}

/// Draw an arrow button: background fill, then the arrow triangle.
pub fn draw_arrow_button(
    display: &mut SimulatorDisplay<Rgb565>,
    area: &Rectangle,
    direction: ArrowDirection,
    arrow_color: Rgb565,
    bg_color: Rgb565,
) {
    area.into_styled(PrimitiveStyle::with_fill(bg_color)).draw(display).ok();
    arrow_triangle(area, direction)
        .into_styled(PrimitiveStyle::with_fill(arrow_color))
        .draw(display)
        .ok();
}
