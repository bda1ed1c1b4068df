//! Color palette: saffron and gold on a deep indigo night.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(14, 12, 28);
pub const CARD_BG: Color = Color::Rgb(24, 20, 44);
pub const POPUP_BG: Color = Color::Rgb(36, 30, 62);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(70, 62, 102);
pub const BORDER_ACTIVE: Color = Color::Rgb(255, 170, 51);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(255, 170, 51); // Saffron
pub const GOLD: Color = Color::Rgb(240, 200, 90);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(232, 228, 245);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 162, 200);
pub const TEXT_MUTED: Color = Color::Rgb(110, 102, 140);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 4, 10);
