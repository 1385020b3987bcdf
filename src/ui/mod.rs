//! GUI module
//!
//! A native egui/eframe front end. It renders only from [`crate::Session`]
//! state and events, and forwards clicks as cell indices.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
