//! Screen modules shown outside the main panel loop.
//!
//! Currently just the boot sequence:
//!
//! 1. **Boot Screen** ([`boot`]): console-style init messages with spinner
//! 2. Main panel (handled in `main.rs`)
//!
//! Boot screens return `false` if the window is closed during boot,
//! allowing the application to exit cleanly without entering the main loop.

mod boot;

pub use boot::run_boot_screen;
