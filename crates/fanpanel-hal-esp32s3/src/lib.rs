//! Board layer for the fan panel: button sampling, SSD1306 bring-up and the
//! embedded-graphics renderer for the core's screens.

#![cfg_attr(not(test), no_std)]

pub mod input;
pub mod platform;
pub mod render;
