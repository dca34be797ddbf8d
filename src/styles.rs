//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! # Optimization: Static Style Constants
//!
//! `MonoTextStyle` and `TextStyle` construction involves copying font
//! references and building style structs. Defining the fixed combinations as
//! `const` lets the compiler compute them once and store them in the binary's
//! read-only data section.
//!
//! # Dynamic Color Styles
//!
//! The status word changes color with the HVAC demand (orange / ice blue /
//! green), so its style cannot be fully const. `STATUS_FONT` is exposed for
//! callers to build `MonoTextStyle::new(STATUS_FONT, color)` with minimal
//! overhead - just the color varies, the font reference is shared.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for cell labels, the status word, and the title.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for console output in the boot screen.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the FPS counter in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Status word font (`ProFont` 18pt). Exposed for creating dynamic-color styles:
/// `MonoTextStyle::new(STATUS_FONT, demand_color)`.
pub const STATUS_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text for the ROOM/SET/STATUS cell labels.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for secondary readouts (exact setpoint under the numeral).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Medium white text for the header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
