//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 90, 130);
pub const CELL_BG: Color32 = Color32::from_rgb(135, 206, 235); // Sky blue
pub const CELL_BORDER: Color32 = Color32::from_rgb(60, 110, 150);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const YELLOW_STONE: Color32 = Color32::from_rgb(250, 215, 40);
pub const YELLOW_STONE_SHADOW: Color32 = Color32::from_rgb(200, 160, 20);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn hover_yellow() -> Color32 {
    Color32::from_rgba_unmultiplied(250, 215, 40, 110)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 2.0;
pub const STONE_RADIUS_RATIO: f32 = 0.38;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Countdown color by seconds left
pub fn timer_color(remaining: u32) -> Color32 {
    match remaining {
        0..=3 => TIMER_CRITICAL,
        4..=7 => TIMER_WARNING,
        _ => TIMER_NORMAL,
    }
}
