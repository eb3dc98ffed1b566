//! Theme configuration

use iced::Color;

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.07, 0.08, 0.12);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.13, 0.18);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.26, 0.32);
    pub const PRIMARY: Color = Color::from_rgb(0.55, 0.65, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.93, 0.93, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.56, 0.62);
    pub const ERROR: Color = Color::from_rgb(0.95, 0.4, 0.4);
}
