// Theme resolution: maps the session's light/dark flag onto a fixed palette.
// Pure data, no I/O. Handlers live here because the palette endpoint needs no session.

pub mod handlers;
pub mod palette;

pub use palette::{resolve, Palette, Theme, ACCENT_GOLD};
