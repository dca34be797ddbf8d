//! Panel layout and timing constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! All region rectangles are computed at compile time as `const`, avoiding
//! per-frame arithmetic. `Rectangle::new`, `Point::new` and `Size::new` are
//! const fn in embedded-graphics 0.8, so the whole panel layout lives in the
//! binary's read-only data section.
//!
//! # Panel Layout
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │           Thermostat (header)          │  26px
//! ├───────────────────────┬───────┬────────┤
//! │         ROOM          │STATUS │  ▲ UP  │
//! │      (7-segment)      │       │        │
//! ├───────────────────────┤ icon  ├────────┤
//! │          SET          │       │ ▼ DOWN │
//! │      (7-segment)      │ word  │        │
//! └───────────────────────┴───────┴────────┘
//!          184px            72px     64px
//! ```

use std::time::Duration;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 class panel: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long a pressed button keeps its highlight fill.
pub const PRESS_FLASH: Duration = Duration::from_millis(150);

// =============================================================================
// Pre-computed Layout Constants (Optimization)
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Width of the readout column (room + setpoint cells).
pub const READOUT_WIDTH: u32 = 184;

/// Width of the status column (icon + status word).
pub const STATUS_WIDTH: u32 = 72;

/// Width of the button column (up/down arrows).
pub const BUTTON_WIDTH: u32 = SCREEN_WIDTH - READOUT_WIDTH - STATUS_WIDTH;

/// Y coordinate where the room/setpoint split falls in the readout column.
pub const READOUT_SPLIT_Y: i32 = 150;

/// Room temperature numeral area (below the "ROOM" label).
pub const ROOM_NUMERAL_AREA: Rectangle = Rectangle::new(Point::new(0, 48), Size::new(READOUT_WIDTH, 94));

/// Setpoint numeral area (below the "SET" label).
pub const SET_NUMERAL_AREA: Rectangle = Rectangle::new(Point::new(0, 168), Size::new(READOUT_WIDTH, 56));

/// Area the status icon is centered in (leaves room for the status word below).
pub const STATUS_ICON_AREA: Rectangle =
    Rectangle::new(Point::new(READOUT_WIDTH as i32, 46), Size::new(STATUS_WIDTH, 140));

/// Up button hit/draw rectangle (top half of the button column).
pub const UP_BUTTON: Rectangle = Rectangle::new(
    Point::new((READOUT_WIDTH + STATUS_WIDTH) as i32, HEADER_HEIGHT as i32),
    Size::new(BUTTON_WIDTH, (SCREEN_HEIGHT - HEADER_HEIGHT) / 2),
);

/// Down button hit/draw rectangle (bottom half of the button column).
pub const DOWN_BUTTON: Rectangle = Rectangle::new(
    Point::new(
        (READOUT_WIDTH + STATUS_WIDTH) as i32,
        HEADER_HEIGHT as i32 + ((SCREEN_HEIGHT - HEADER_HEIGHT) / 2) as i32,
    ),
    Size::new(BUTTON_WIDTH, (SCREEN_HEIGHT - HEADER_HEIGHT) / 2),
);

/// Center X of the readout column. Used for the ROOM/SET labels.
pub const READOUT_CENTER_X: i32 = (READOUT_WIDTH / 2) as i32;

/// Center X of the status column. Used for the STATUS label and word.
pub const STATUS_CENTER_X: i32 = (READOUT_WIDTH + STATUS_WIDTH / 2) as i32;
