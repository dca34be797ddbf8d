//! HVAC status icon rendering: flame, snowflake, or checkmark.
//!
//! The icon is the panel's one-glance answer to "what is the system doing":
//! heating draws a stylized flame, cooling a four-pointed snowflake, and a
//! satisfied room a green checkmark. Selection reuses
//! [`HvacDemand::for_gap`](crate::state::HvacDemand::for_gap), so the icon
//! can never disagree with the simulated heater.
//!
//! # Geometry
//!
//! The icon is sized to 35% of the shorter side of its area and centered.
//! Shape geometry is computed by pure helpers (`flame_shapes`,
//! `snowflake_bars`, `check_squares`) and drawn with plain primitive fills;
//! the split keeps the fiddly coordinate math testable without a display.
//!
//! - **Flame**: a large circle shifted slightly below center, a brighter
//!   core circle at 65% radius, and a small square at the base.
//! - **Snowflake**: two crossed bars plus four end caps.
//! - **Checkmark**: a staircase of small squares - 4 stepping down-right,
//!   then 6 stepping up-right, spaced at 1.1x the square size.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::Vec;

use crate::colors::{CHECK, HEAT_INNER, HEAT_OUTER, SNOW};
use crate::state::HvacDemand;

/// Squares in the checkmark: 4 on the short stroke, 6 on the long one.
const CHECK_SQUARE_COUNT: usize = 10;

/// Spacing between checkmark squares, as a multiple of the square size.
const CHECK_SPACING: f32 = 1.1;

// =============================================================================
// Demand Presentation
// =============================================================================

/// Accent color for a demand: matches the icon drawn for it.
pub fn demand_color(demand: HvacDemand) -> Rgb565 {
    match demand {
        HvacDemand::Heating => HEAT_OUTER,
        HvacDemand::Cooling => SNOW,
        HvacDemand::Satisfied => CHECK,
    }
}

/// Short status word shown under the icon.
pub fn status_word(demand: HvacDemand) -> &'static str {
    match demand {
        HvacDemand::Heating => "HEAT",
        HvacDemand::Cooling => "COOL",
        HvacDemand::Satisfied => "OK",
    }
}

// =============================================================================
// Icon Geometry (pure)
// =============================================================================

/// Icon size in pixels: 35% of the shorter side of the area.
fn icon_size(area: &Rectangle) -> f32 {
    area.size.width.min(area.size.height) as f32 * 0.35
}

/// Flame geometry: (outer circle, core circle, base square).
fn flame_shapes(center: Point, size: f32) -> (Circle, Circle, Rectangle) {
    let outer = Circle::with_center(
        center + Point::new(0, (size * 0.25) as i32),
        (size * 2.0) as u32,
    );
    let core = Circle::with_center(center, (size * 1.3) as u32);
    let base = Rectangle::new(
        center + Point::new((-size * 0.25) as i32, (size * 0.4) as i32),
        Size::new((size * 0.5) as u32, (size * 0.5) as u32),
    );
    (outer, core, base)
}

/// Snowflake geometry: crossed bars first, then left/right/top/bottom caps.
fn snowflake_bars(center: Point, size: f32) -> [Rectangle; 6] {
    let arm = size * 0.45;
    let thickness = size * 0.12;
    let offset = arm * 0.7;

    let bar = |x: f32, y: f32, w: f32, h: f32| {
        Rectangle::new(
            center + Point::new(x as i32, y as i32),
            Size::new(w as u32, h as u32),
        )
    };

    [
        bar(-thickness * 0.5, -arm, thickness, arm * 2.0), // vertical bar
        bar(-arm, -thickness * 0.5, arm * 2.0, thickness), // horizontal bar
        bar(-offset - thickness, -thickness, thickness, thickness * 2.0), // left cap
        bar(offset, -thickness, thickness, thickness * 2.0), // right cap
        bar(-thickness, -offset - thickness, thickness * 2.0, thickness), // top cap
        bar(-thickness, offset, thickness * 2.0, thickness), // bottom cap
    ]
}

/// Checkmark geometry: the staircase of small squares, in draw order.
///
/// Four squares step down-right from the start, then six step up-right from
/// where the short stroke landed.
fn check_squares(center: Point, size: f32) -> Vec<Rectangle, CHECK_SQUARE_COUNT> {
    let dot = size * 0.1;
    let start_x = center.x as f32 - size * 0.35;
    let start_y = center.y as f32 + size * 0.05;
    let dot_size = Size::new(dot as u32, dot as u32);

    let mut squares: Vec<Rectangle, CHECK_SQUARE_COUNT> = Vec::new();

    for i in 0..4 {
        let step = i as f32 * dot * CHECK_SPACING;
        let _ = squares.push(Rectangle::new(
            Point::new((start_x + step) as i32, (start_y + step) as i32),
            dot_size,
        ));
    }

    let mid_x = start_x + 3.0 * dot * CHECK_SPACING;
    let mid_y = start_y + 3.0 * dot * CHECK_SPACING;
    for i in 0..6 {
        let step = i as f32 * dot * CHECK_SPACING;
        let _ = squares.push(Rectangle::new(
            Point::new((mid_x + step) as i32, (mid_y - step) as i32),
            dot_size,
        ));
    }

    squares
}

// =============================================================================
// Drawing Functions
// =============================================================================

fn draw_flame(display: &mut SimulatorDisplay<Rgb565>, center: Point, size: f32) {
    let (outer, core, base) = flame_shapes(center, size);
    outer.into_styled(PrimitiveStyle::with_fill(HEAT_OUTER)).draw(display).ok();
    core.into_styled(PrimitiveStyle::with_fill(HEAT_INNER)).draw(display).ok();
    base.into_styled(PrimitiveStyle::with_fill(HEAT_OUTER)).draw(display).ok();
}

fn draw_snowflake(display: &mut SimulatorDisplay<Rgb565>, center: Point, size: f32) {
    let style = PrimitiveStyle::with_fill(SNOW);
    for bar in snowflake_bars(center, size) {
        bar.into_styled(style).draw(display).ok();
    }
}

fn draw_checkmark(display: &mut SimulatorDisplay<Rgb565>, center: Point, size: f32) {
    let style = PrimitiveStyle::with_fill(CHECK);
    for square in check_squares(center, size) {
        square.into_styled(style).draw(display).ok();
    }
}

/// Draw the status icon for a setpoint/room pair, centered in `area`.
///
/// Exactly one of the three icons is drawn for every input pair; the
/// selection is [`HvacDemand::for_gap`] with its ±0.25 degree band.
pub fn draw_status_icon(
    display: &mut SimulatorDisplay<Rgb565>,
    area: &Rectangle,
    setpoint: f32,
    room: f32,
) {
    let center = area.top_left
        + Point::new(area.size.width as i32 / 2, area.size.height as i32 / 2);
    let size = icon_size(area);

    match HvacDemand::for_gap(setpoint, room) {
        HvacDemand::Heating => draw_flame(display, center, size),
        HvacDemand::Cooling => draw_snowflake(display, center, size),
        HvacDemand::Satisfied => draw_checkmark(display, center, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Presentation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_status_words() {
        assert_eq!(status_word(HvacDemand::Heating), "HEAT");
        assert_eq!(status_word(HvacDemand::Cooling), "COOL");
        assert_eq!(status_word(HvacDemand::Satisfied), "OK");
    }

    #[test]
    fn test_demand_colors_match_icons() {
        assert_eq!(demand_color(HvacDemand::Heating), HEAT_OUTER);
        assert_eq!(demand_color(HvacDemand::Cooling), SNOW);
        assert_eq!(demand_color(HvacDemand::Satisfied), CHECK);
    }

    // -------------------------------------------------------------------------
    // Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_icon_size_is_35_percent_of_short_side() {
        let tall = Rectangle::new(Point::zero(), Size::new(72, 140));
        assert_eq!(icon_size(&tall), 72.0 * 0.35, "Width is the short side here");

        let wide = Rectangle::new(Point::zero(), Size::new(200, 60));
        assert_eq!(icon_size(&wide), 60.0 * 0.35, "Height is the short side here");
    }

    #[test]
    fn test_flame_core_is_concentric() {
        let center = Point::new(220, 116);
        let (outer, core, _) = flame_shapes(center, 25.0);

        // The core circle sits exactly on the icon center; the outer circle
        // is shifted a quarter radius below it
        assert_eq!(core.center(), center, "Core circle should be centered");
        assert_eq!(outer.center().x, center.x, "Outer circle stays on the vertical axis");
        assert!(outer.center().y > center.y, "Outer circle shifts below center");
        assert!(outer.diameter > core.diameter, "Core must fit inside the outer circle");
    }

    #[test]
    fn test_snowflake_bars_cross_at_center() {
        let center = Point::new(100, 100);
        let bars = snowflake_bars(center, 25.0);

        let [vertical, horizontal, left, right, top, bottom] = bars;

        // The two main bars are transposes of each other
        assert_eq!(vertical.size.width, horizontal.size.height, "Bar thickness should match");
        assert_eq!(vertical.size.height, horizontal.size.width, "Bar length should match");

        // Caps come in mirrored pairs
        assert_eq!(left.size, right.size, "Horizontal caps should match");
        assert_eq!(top.size, bottom.size, "Vertical caps should match");
        assert!(left.top_left.x < center.x && right.top_left.x > center.x);
        assert!(top.top_left.y < center.y && bottom.top_left.y > center.y);
    }

    #[test]
    fn test_check_staircase_shape() {
        let squares = check_squares(Point::new(100, 100), 40.0);
        assert_eq!(squares.len(), CHECK_SQUARE_COUNT, "Checkmark is 4 + 6 squares");

        // All squares are the same size
        for square in &squares {
            assert_eq!(square.size, squares[0].size, "Checkmark squares should be uniform");
        }

        // Short stroke descends (screen y grows downward)
        for i in 1..4 {
            assert!(squares[i].top_left.x > squares[i - 1].top_left.x, "Short stroke moves right");
            assert!(squares[i].top_left.y > squares[i - 1].top_left.y, "Short stroke moves down");
        }

        // Long stroke rises from where the short one landed
        for i in 5..10 {
            assert!(squares[i].top_left.x > squares[i - 1].top_left.x, "Long stroke moves right");
            assert!(squares[i].top_left.y < squares[i - 1].top_left.y, "Long stroke moves up");
        }
    }

    #[test]
    fn test_check_geometry_is_deterministic() {
        // Same inputs, same squares - the draw sequence is a pure function
        let a = check_squares(Point::new(50, 60), 30.0);
        let b = check_squares(Point::new(50, 60), 30.0);
        assert_eq!(a, b, "Identical inputs should produce identical geometry");
    }
}
