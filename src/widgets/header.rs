//! Header bar and region divider rendering.
//!
//! # Optimizations Applied
//!
//! - All fixed positions are `const Point` / `const Size`, so there is no
//!   per-frame coordinate arithmetic
//! - `PrimitiveStyle::with_fill` and `with_stroke` are const fn in
//!   embedded-graphics 0.8, so the fill and stroke styles are computed at
//!   compile time
//! - The FPS readout uses `heapless::String` with `core::fmt::Write`
//!   instead of `format!()`, avoiding heap allocation

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::{
    colors::{GRAY, SLATE},
    config::{HEADER_HEIGHT, READOUT_SPLIT_Y, READOUT_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_WIDTH},
    styles::{CENTERED, LABEL_STYLE_WHITE, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

// =============================================================================
// Header Layout Constants (Optimization: computed at compile time)
// =============================================================================

/// Position of the "Thermostat" title text (centered horizontally).
const HEADER_TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 19);

/// Position of the FPS counter (right-aligned, 5px from edge).
const HEADER_FPS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);

/// Header bar rectangle (full width, 26px tall).
const HEADER_RECT: Rectangle =
    Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

// =============================================================================
// Divider Line Endpoints (Optimization: pre-computed from layout constants)
// =============================================================================
//
// Note: Endpoints use SCREEN_HEIGHT - 1 because valid pixel rows are 0..239
// (exclusive upper bound).

/// Divider between the readout column and the status column - start point.
const DIV_V1_START: Point = Point::new(READOUT_WIDTH as i32, HEADER_HEIGHT as i32);
/// Divider between the readout column and the status column - end point.
const DIV_V1_END: Point = Point::new(READOUT_WIDTH as i32, (SCREEN_HEIGHT - 1) as i32);

/// Divider between the status column and the button column - start point.
const DIV_V2_START: Point = Point::new((READOUT_WIDTH + STATUS_WIDTH) as i32, HEADER_HEIGHT as i32);
/// Divider between the status column and the button column - end point.
const DIV_V2_END: Point = Point::new((READOUT_WIDTH + STATUS_WIDTH) as i32, (SCREEN_HEIGHT - 1) as i32);

/// Divider between the room and setpoint cells - start point.
const DIV_H_START: Point = Point::new(0, READOUT_SPLIT_Y);
/// Divider between the room and setpoint cells - end point (inside the readout column).
const DIV_H_END: Point = Point::new(READOUT_WIDTH as i32 - 1, READOUT_SPLIT_Y);

// =============================================================================
// Pre-computed Primitive Styles (Optimization: const fn in embedded-graphics 0.8)
// =============================================================================

/// Gray stroke style for divider lines (1px wide).
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Slate fill style for the header background.
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar with title and optional FPS counter.
pub fn draw_header(display: &mut SimulatorDisplay<Rgb565>, show_fps: bool, fps: f32) {
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style("Thermostat", HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    if show_fps {
        // Optimization: heapless::String avoids format! heap allocation
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        Text::with_text_style(&fps_str, HEADER_FPS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Draw the divider lines between panel regions.
///
/// Two vertical lines separate the readout, status and button columns; one
/// horizontal line splits the room and setpoint cells.
pub fn draw_dividers(display: &mut SimulatorDisplay<Rgb565>) {
    Line::new(DIV_V1_START, DIV_V1_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    Line::new(DIV_V2_START, DIV_V2_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    Line::new(DIV_H_START, DIV_H_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
