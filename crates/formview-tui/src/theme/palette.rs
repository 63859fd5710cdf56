//! Color palette.

use ratatui::style::Color;

// --- Surfaces ---
pub const SCREEN_BG: Color = Color::Black;
pub const HEADER_BG: Color = Color::Black;
pub const SELECTED_ROW_BG: Color = Color::Rgb(30, 34, 42);

// --- Frames ---
pub const FRAME_DIM: Color = Color::DarkGray;
pub const FRAME_FOCUSED: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const ACCENT_DIM: Color = Color::DarkGray;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Footer ---
pub const HINT_KEY: Color = Color::Yellow;
pub const STATUS_OK: Color = Color::Green;
pub const STATUS_ERROR: Color = Color::Red;

// --- Form values ---
pub const PILL_FG: Color = Color::LightBlue;
pub const PILL_BG: Color = Color::Rgb(24, 38, 56);
