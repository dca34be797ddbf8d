//! Color constants for the thermostat panel.
//!
//! # Optimization: Using Built-in `RgbColor` Trait Constants
//!
//! The `embedded_graphics` crate provides pre-defined color constants through the
//! `RgbColor` trait. Using these instead of manually constructing `Rgb565::new(r, g, b)`
//! ensures optimal values and improves code clarity.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to many embedded displays (including ST7789) and requires
//! no conversion when writing to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Used for backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Used for text and button arrows.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Amber for the room temperature readout. Classic LED display tone.
/// RGB565: (31, 44, 0) - between yellow and orange.
pub const AMBER: Rgb565 = Rgb565::new(31, 44, 0);

/// Dimmed amber for the setpoint readout, so the room readout dominates.
/// RGB565: (20, 28, 0).
pub const AMBER_DIM: Rgb565 = Rgb565::new(20, 28, 0);

/// Outer flame color for the heating icon.
/// RGB565: (30, 29, 9) - warm red-orange.
pub const HEAT_OUTER: Rgb565 = Rgb565::new(30, 29, 9);

/// Inner flame color for the heating icon.
/// RGB565: (31, 42, 10) - brighter orange core.
pub const HEAT_INNER: Rgb565 = Rgb565::new(31, 42, 10);

/// Snowflake color for the cooling icon.
/// RGB565: (20, 54, 30) - pale ice blue.
pub const SNOW: Rgb565 = Rgb565::new(20, 54, 30);

/// Checkmark color for the satisfied icon.
/// RGB565: (12, 58, 18) - soft green.
pub const CHECK: Rgb565 = Rgb565::new(12, 58, 18);

/// Dark slate fill for the header bar.
/// RGB565: (3, 10, 8) - dark enough for white title text.
pub const SLATE: Rgb565 = Rgb565::new(3, 10, 8);

/// Dark gray for divider lines. Subtle enough to not distract from data.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Resting background for the up/down buttons.
/// RGB565: (6, 12, 6) - a step above the panel background.
pub const BUTTON_BG: Rgb565 = Rgb565::new(6, 12, 6);

/// Background flash while a button press is registered.
/// RGB565: (12, 24, 12) - twice the resting brightness.
pub const BUTTON_BG_PRESSED: Rgb565 = Rgb565::new(12, 24, 12);
