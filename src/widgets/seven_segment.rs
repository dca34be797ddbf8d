//! Seven-segment temperature numeral rendering.
//!
//! Digits are drawn LED-style from up to seven filled segment rectangles,
//! selected per digit by a 7-bit mask. No font is involved; the readout is
//! pure `Rectangle` fills, which keeps it crisp at any panel color.
//!
//! # Segment Layout
//!
//! ```text
//!  AAAA
//! F    B
//! F    B
//!  GGGG
//! E    C
//! E    C
//!  DDDD
//! ```
//!
//! Segment rectangles are fixed geometry inside an 18x32 digit cell with
//! 3px strokes; segment G sits centered vertically. Bit i of a digit mask
//! selects segment i, with A at bit 0.
//!
//! # Value Handling
//!
//! [`draw_temperature_value`] rounds to the nearest integer (half away from
//! zero), clamps to [-99, 99], and centers the assembled numeral in the
//! target area. A leading minus sign occupies a full digit cell. Out-of-range
//! values clamp silently and an out-of-range digit draws nothing - a
//! malformed value should degrade visually, not crash the render loop.
//!
//! # Optimization
//!
//! Layout is computed once per call by the pure [`layout_numeral`] helper;
//! the draw pass is a straight walk over at most three glyphs. Pure layout
//! also keeps the centering and clamping rules testable without a display.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;

// =============================================================================
// Digit Cell Geometry
// =============================================================================

/// Width of one digit cell in pixels.
pub const DIGIT_WIDTH: i32 = 18;

/// Height of one digit cell in pixels.
pub const DIGIT_HEIGHT: i32 = 32;

/// Stroke thickness of each segment in pixels.
pub const SEGMENT_THICKNESS: i32 = 3;

/// Horizontal gap between glyphs in pixels.
pub const DIGIT_SPACING: i32 = 6;

// =============================================================================
// Digit Masks
// =============================================================================

/// Per-digit segment masks, indexed by digit value.
/// Bit order: A, B, C, D, E, F, G (A = bit 0).
const DIGIT_MASKS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// The seven segment rectangles of a digit cell at `origin` (its top-left).
///
/// Indexed A through G to match the mask bit order. G is centered vertically.
fn digit_segments(origin: Point) -> [Rectangle; 7] {
    let w = DIGIT_WIDTH;
    let h = DIGIT_HEIGHT;
    let t = SEGMENT_THICKNESS;
    let half = h / 2 - t; // Vertical bar length above/below the midline

    let seg = |x: i32, y: i32, sw: i32, sh: i32| {
        Rectangle::new(origin + Point::new(x, y), Size::new(sw as u32, sh as u32))
    };

    [
        seg(t, 0, w - 2 * t, t),           // A - top bar
        seg(w - t, t, t, half),            // B - upper right
        seg(w - t, h / 2, t, half),        // C - lower right
        seg(t, h - t, w - 2 * t, t),       // D - bottom bar
        seg(0, h / 2, t, half),            // E - lower left
        seg(0, t, t, half),                // F - upper left
        seg(t, (h - t) / 2, w - 2 * t, t), // G - middle bar, centered
    ]
}

// =============================================================================
// Numeral Layout
// =============================================================================

/// Where a numeral lands inside its target area, and which glyphs it needs.
///
/// Computed by [`layout_numeral`]; pure data so the rounding, clamping and
/// centering rules can be asserted without a display.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NumeralLayout {
    /// Top-left of the first glyph cell.
    pub origin: Point,
    /// Leading minus sign present (value negative after rounding).
    pub negative: bool,
    /// Tens digit, present only for two-digit magnitudes.
    pub tens: Option<u8>,
    /// Ones digit, always present.
    pub ones: u8,
}

impl NumeralLayout {
    /// Number of glyph cells the numeral occupies (sign counts as one).
    pub fn glyph_count(&self) -> i32 {
        1 + i32::from(self.tens.is_some()) + i32::from(self.negative)
    }

    /// Total pixel width of the assembled numeral.
    pub fn width(&self) -> i32 {
        let glyphs = self.glyph_count();
        glyphs * DIGIT_WIDTH + (glyphs - 1) * DIGIT_SPACING
    }
}

/// Round, clamp and center a temperature value inside `area`.
///
/// The value is rounded half away from zero, then clamped to [-99, 99].
/// The glyph row is centered horizontally; the fixed digit height is
/// centered vertically.
pub fn layout_numeral(value: f32, area: &Rectangle) -> NumeralLayout {
    let rounded = (value.round() as i32).clamp(-99, 99);
    let negative = rounded < 0;
    let magnitude = rounded.abs();
    let tens = if magnitude >= 10 { Some((magnitude / 10) as u8) } else { None };
    let ones = (magnitude % 10) as u8;

    let layout = NumeralLayout {
        origin: Point::zero(),
        negative,
        tens,
        ones,
    };
    let origin = Point::new(
        area.top_left.x + (area.size.width as i32 - layout.width()) / 2,
        area.top_left.y + (area.size.height as i32 - DIGIT_HEIGHT) / 2,
    );

    NumeralLayout { origin, ..layout }
}

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw a single digit glyph with its top-left at `origin`.
///
/// A digit above 9 draws nothing. Unreachable through the public numeral
/// path, which decomposes a clamped value, but kept total anyway.
pub fn draw_digit(
    display: &mut SimulatorDisplay<Rgb565>,
    origin: Point,
    digit: u8,
    color: Rgb565,
) {
    if digit > 9 {
        return;
    }
    let mask = DIGIT_MASKS[digit as usize];

    let style = PrimitiveStyle::with_fill(color);
    for (i, segment) in digit_segments(origin).into_iter().enumerate() {
        if mask & (1 << i) != 0 {
            segment.into_styled(style).draw(display).ok();
        }
    }
}

/// Draw a minus sign: the G segment alone in a digit cell at `origin`.
pub fn draw_minus(
    display: &mut SimulatorDisplay<Rgb565>,
    origin: Point,
    color: Rgb565,
) {
    // Index 6 is segment G
    digit_segments(origin)[6]
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a temperature value as a centered seven-segment numeral.
///
/// Rounds to the nearest integer, clamps to [-99, 99], then draws left to
/// right: optional minus sign, optional tens digit, ones digit.
pub fn draw_temperature_value(
    display: &mut SimulatorDisplay<Rgb565>,
    value: f32,
    area: &Rectangle,
    color: Rgb565,
) {
    let layout = layout_numeral(value, area);
    let mut cursor = layout.origin;

    if layout.negative {
        draw_minus(display, cursor, color);
        cursor.x += DIGIT_WIDTH + DIGIT_SPACING;
    }

    if let Some(tens) = layout.tens {
        draw_digit(display, cursor, tens, color);
        cursor.x += DIGIT_WIDTH + DIGIT_SPACING;
    }

    draw_digit(display, cursor, layout.ones, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Digit Mask Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_mask_segment_counts() {
        // Classic seven-segment lit counts per digit
        let expected = [6, 2, 5, 5, 4, 5, 6, 3, 7, 6];
        for (digit, want) in expected.iter().enumerate() {
            assert_eq!(
                DIGIT_MASKS[digit].count_ones(),
                *want,
                "Digit {digit} should light {want} segments"
            );
        }
    }

    #[test]
    fn test_mask_eight_lights_everything() {
        assert_eq!(DIGIT_MASKS[8], 0b111_1111, "8 should light all seven segments");
    }

    #[test]
    fn test_mask_one_is_right_column() {
        // Segments B and C only (bits 1 and 2)
        assert_eq!(DIGIT_MASKS[1], 0b000_0110, "1 should light only B and C");
    }

    // -------------------------------------------------------------------------
    // Segment Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_segment_geometry() {
        let segs = digit_segments(Point::new(100, 50));

        // Horizontal bars span the cell width minus both vertical strokes
        let bar_width = (DIGIT_WIDTH - 2 * SEGMENT_THICKNESS) as u32;
        assert_eq!(segs[0].size.width, bar_width, "A should span between the vertical strokes");
        assert_eq!(segs[3].size.width, bar_width, "D should span between the vertical strokes");
        assert_eq!(segs[6].size.width, bar_width, "G should span between the vertical strokes");

        // B and C share the right column, E and F the left
        assert_eq!(segs[1].top_left.x, 100 + DIGIT_WIDTH - SEGMENT_THICKNESS, "B x");
        assert_eq!(segs[2].top_left.x, 100 + DIGIT_WIDTH - SEGMENT_THICKNESS, "C x");
        assert_eq!(segs[4].top_left.x, 100, "E x");
        assert_eq!(segs[5].top_left.x, 100, "F x");

        // G is centered on the midline
        assert_eq!(
            segs[6].top_left.y,
            50 + (DIGIT_HEIGHT - SEGMENT_THICKNESS) / 2,
            "G should sit centered vertically"
        );

        // D hugs the cell bottom
        assert_eq!(segs[3].top_left.y, 50 + DIGIT_HEIGHT - SEGMENT_THICKNESS, "D y");
    }

    // -------------------------------------------------------------------------
    // Layout Tests
    // -------------------------------------------------------------------------

    fn area() -> Rectangle {
        Rectangle::new(Point::new(0, 48), Size::new(184, 94))
    }

    #[test]
    fn test_layout_single_digit() {
        // 7.6 rounds to 8: one digit, no sign
        let layout = layout_numeral(7.6, &area());
        assert!(!layout.negative, "7.6 should not carry a sign");
        assert_eq!(layout.tens, None, "7.6 should have no tens digit");
        assert_eq!(layout.ones, 8, "7.6 should round to 8");
        assert_eq!(layout.glyph_count(), 1);
    }

    #[test]
    fn test_layout_negative_two_digits() {
        // -15.4 rounds to -15: sign + two digits
        let layout = layout_numeral(-15.4, &area());
        assert!(layout.negative, "-15.4 should carry a sign");
        assert_eq!(layout.tens, Some(1), "-15.4 tens digit");
        assert_eq!(layout.ones, 5, "-15.4 ones digit");
        assert_eq!(layout.glyph_count(), 3);
    }

    #[test]
    fn test_layout_rounds_half_up_to_two_digits() {
        // 9.5 rounds away from zero to 10, gaining a tens digit
        let layout = layout_numeral(9.5, &area());
        assert_eq!(layout.tens, Some(1), "9.5 should round up to 10");
        assert_eq!(layout.ones, 0);
    }

    #[test]
    fn test_layout_small_negative_rounds_to_unsigned_zero() {
        // -0.2 rounds to 0: no sign glyph
        let layout = layout_numeral(-0.2, &area());
        assert!(!layout.negative, "-0.2 rounds to 0 and loses the sign");
        assert_eq!(layout.ones, 0);
    }

    #[test]
    fn test_layout_clamps_out_of_range() {
        // Out-of-range values render identically to the range limits
        assert_eq!(layout_numeral(150.0, &area()), layout_numeral(99.0, &area()), "150 renders as 99");
        assert_eq!(
            layout_numeral(-200.0, &area()),
            layout_numeral(-99.0, &area()),
            "-200 renders as -99"
        );
    }

    #[test]
    fn test_layout_centers_in_area() {
        let a = area();

        // Two digits: 2 cells + 1 gap
        let layout = layout_numeral(21.0, &a);
        let total = 2 * DIGIT_WIDTH + DIGIT_SPACING;
        assert_eq!(layout.width(), total);
        assert_eq!(
            layout.origin.x,
            a.top_left.x + (a.size.width as i32 - total) / 2,
            "Numeral should center horizontally"
        );
        assert_eq!(
            layout.origin.y,
            a.top_left.y + (a.size.height as i32 - DIGIT_HEIGHT) / 2,
            "Numeral should center vertically"
        );

        // The sign widens the numeral and shifts the origin left
        let signed = layout_numeral(-21.0, &a);
        assert_eq!(signed.width(), total + DIGIT_WIDTH + DIGIT_SPACING);
        assert!(signed.origin.x < layout.origin.x, "Signed numeral should start further left");
    }
}
