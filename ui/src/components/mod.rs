//! Shared building blocks for the screens.
pub mod detail_row;
pub mod pico;
