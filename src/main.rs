// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Thermostat touch panel simulator.
//!
//! A 320x240 wall-panel UI: seven-segment readouts for the room temperature
//! and the setpoint, an HVAC status icon (flame / snowflake / checkmark)
//! chosen from the gap between them, and up/down arrow buttons that move the
//! setpoint in half-degree steps.
//!
//! The panel is stateless below `main`: every widget is a pure function of
//! its arguments, the whole screen redraws every frame, and the only
//! retained state is the [`Thermostat`] itself plus a little input
//! bookkeeping. In simulator mode the room temperature is faked by a demo
//! simulation that obeys the panel's own demand decision, so pressing the
//! up arrow visibly heats the room until the checkmark returns.
//!
//! # Controls (Simulator Mode)
//!
//! | Input | Action |
//! |-------|--------|
//! | Click ▲ / `Up` key | Raise setpoint by 0.5 |
//! | Click ▼ / `Down` key | Lower setpoint by 0.5 |
//! | `F` | Toggle FPS display |
//!
//! Clicks are resolved with the same closed-bounds hit test a touch
//! controller would use; key repeat is honored for the arrows (hold to
//! scrub) but ignored for the FPS toggle.
//!
//! # Architecture
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

mod colors;
mod config;
mod input;
mod screens;
mod state;
mod styles;
mod widgets;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use colors::{AMBER, AMBER_DIM, BLACK, BUTTON_BG, BUTTON_BG_PRESSED, WHITE};
use config::{
    DOWN_BUTTON, FRAME_TIME, HEADER_HEIGHT, PRESS_FLASH, READOUT_CENTER_X, ROOM_NUMERAL_AREA, SCREEN_HEIGHT,
    SCREEN_WIDTH, SET_NUMERAL_AREA, STATUS_CENTER_X, STATUS_ICON_AREA, UP_BUTTON,
};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use input::{TouchTarget, target_at};
use screens::run_boot_screen;
use state::Thermostat;
use styles::{CENTERED, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, STATUS_FONT};
use widgets::{
    ArrowDirection, demand_color, draw_arrow_button, draw_dividers, draw_header, draw_status_icon,
    draw_temperature_value, status_word,
};

// =============================================================================
// Cell Layout (Optimization: computed at compile time)
// =============================================================================

/// Background of the readout column, cleared every frame (numerals change).
const READOUT_COLUMN_BG: Rectangle = Rectangle::new(
    Point::new(0, HEADER_HEIGHT as i32),
    Size::new(config::READOUT_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT),
);

/// Background of the status column, cleared every frame (icon changes).
const STATUS_COLUMN_BG: Rectangle = Rectangle::new(
    Point::new(config::READOUT_WIDTH as i32, HEADER_HEIGHT as i32),
    Size::new(config::STATUS_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT),
);

/// "ROOM" label position (baseline, centered in the readout column).
const ROOM_LABEL_POS: Point = Point::new(READOUT_CENTER_X, 42);

/// "SET" label position.
const SET_LABEL_POS: Point = Point::new(READOUT_CENTER_X, 164);

/// Exact setpoint readout position (the numeral shows whole degrees only).
const SET_FINE_POS: Point = Point::new(READOUT_CENTER_X, 236);

/// "STATUS" label position.
const STATUS_LABEL_POS: Point = Point::new(STATUS_CENTER_X, 42);

/// Status word position, below the icon.
const STATUS_WORD_POS: Point = Point::new(STATUS_CENTER_X, 214);

/// Black fill for the per-frame cell background clears.
const CELL_CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Thermostat Panel", &output_settings);

    // Initial clear before the boot sequence
    display.clear(BLACK).ok();
    window.update(&display);

    // Boot sequence; returns false if the user closes the window during boot
    if !run_boot_screen(&mut display, &mut window) {
        return;
    }
    display.clear(BLACK).ok();

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut thermostat = Thermostat::new();

    // Last pressed control and when, for the brief button highlight
    let mut pressed: Option<(TouchTarget, Instant)> = None;

    // FPS counter state (F key toggles)
    let mut show_fps = true;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, clicks, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    // Same closed-bounds hit test a touch controller would run
                    if let Some(target) = target_at(point) {
                        apply_press(&mut thermostat, target);
                        pressed = Some((target, Instant::now()));
                    }
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    // Key repeat is welcome here: hold to scrub the setpoint
                    Keycode::Up => {
                        apply_press(&mut thermostat, TouchTarget::SetpointUp);
                        pressed = Some((TouchTarget::SetpointUp, Instant::now()));
                    }
                    Keycode::Down => {
                        apply_press(&mut thermostat, TouchTarget::SetpointDown);
                        pressed = Some((TouchTarget::SetpointDown, Instant::now()));
                    }
                    // Ignore OS key repeat to prevent toggle spam when holding F
                    Keycode::F if !repeat => {
                        show_fps = !show_fps;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Expire the press highlight
        if let Some((_, at)) = pressed
            && at.elapsed() >= PRESS_FLASH
        {
            pressed = None;
        }

        // Advance the demo room simulation one frame
        thermostat.step();

        // ======================================================================
        // FPS Calculation (updated once per second)
        // ======================================================================

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // ======================================================================
        // Render (full panel, every frame)
        // ======================================================================

        draw_header(&mut display, show_fps, current_fps);
        draw_readout_cells(&mut display, &thermostat);
        draw_status_cell(&mut display, &thermostat);
        draw_buttons(&mut display, pressed);
        draw_dividers(&mut display);

        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Route a resolved press to the thermostat.
fn apply_press(thermostat: &mut Thermostat, target: TouchTarget) {
    match target {
        TouchTarget::SetpointUp => thermostat.raise_setpoint(),
        TouchTarget::SetpointDown => thermostat.lower_setpoint(),
    }
}

/// Draw the room and setpoint cells: labels plus seven-segment numerals.
///
/// The setpoint moves in half-degree steps but the numeral shows whole
/// degrees, so the exact value is echoed in small text under the numeral.
fn draw_readout_cells(display: &mut SimulatorDisplay<Rgb565>, thermostat: &Thermostat) {
    // Numerals change every frame; clear the whole column behind them
    READOUT_COLUMN_BG.into_styled(CELL_CLEAR_STYLE).draw(display).ok();

    Text::with_text_style("ROOM", ROOM_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    draw_temperature_value(display, thermostat.room(), &ROOM_NUMERAL_AREA, AMBER);

    Text::with_text_style("SET", SET_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    draw_temperature_value(display, thermostat.setpoint(), &SET_NUMERAL_AREA, AMBER_DIM);

    // Optimization: heapless::String avoids format! heap allocation
    let mut fine: String<16> = String::new();
    let _ = write!(fine, "{:.1}", thermostat.setpoint());
    Text::with_text_style(&fine, SET_FINE_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the status cell: label, demand icon, and the matching status word.
fn draw_status_cell(display: &mut SimulatorDisplay<Rgb565>, thermostat: &Thermostat) {
    STATUS_COLUMN_BG.into_styled(CELL_CLEAR_STYLE).draw(display).ok();

    Text::with_text_style("STATUS", STATUS_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    draw_status_icon(display, &STATUS_ICON_AREA, thermostat.setpoint(), thermostat.room());

    // The word picks up the icon's color; dynamic color needs a runtime style
    let demand = thermostat.demand();
    let word_style = MonoTextStyle::new(STATUS_FONT, demand_color(demand));
    Text::with_text_style(status_word(demand), STATUS_WORD_POS, word_style, CENTERED)
        .draw(display)
        .ok();
}

/// Draw both arrow buttons, flashing the background of a recent press.
fn draw_buttons(display: &mut SimulatorDisplay<Rgb565>, pressed: Option<(TouchTarget, Instant)>) {
    let bg_for = |target: TouchTarget| {
        if pressed.is_some_and(|(t, _)| t == target) {
            BUTTON_BG_PRESSED
        } else {
            BUTTON_BG
        }
    };

    draw_arrow_button(
        display,
        &UP_BUTTON,
        ArrowDirection::Up,
        WHITE,
        bg_for(TouchTarget::SetpointUp),
    );
    draw_arrow_button(
        display,
        &DOWN_BUTTON,
        ArrowDirection::Down,
        WHITE,
        bg_for(TouchTarget::SetpointDown),
    );
}
