//! Input and navigation engine for the fan panel HMI.
//!
//! Everything in this crate is hardware-agnostic and runs on the host, so the
//! gesture timing, menu navigation and settings staging can be unit tested
//! without a board attached.

#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod app;
pub mod input;
pub mod menu;
pub mod password;
pub mod queue;
pub mod render;
pub mod settings;
pub mod telemetry;
pub mod time;
