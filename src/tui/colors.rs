//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Focus highlight and the Edit button
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Completed status button and the Add Todo button
pub const SUCCESS_GREEN: Color = Color::Rgb(25, 135, 84);
/// Not completed status button, Delete button and alerts
pub const DANGER_RED: Color = Color::Rgb(220, 53, 69);
/// Save button
pub const PRIMARY_BLUE: Color = Color::Rgb(13, 110, 253);
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Status bar background
pub const SLATE: Color = Color::Rgb(52, 58, 64);
