//! Midnight theme and color utilities.

use crate::notifications::NotificationLevel;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct MidnightTheme {
    pub bg: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl MidnightTheme {
    pub fn midnight() -> Self {
        Self {
            bg: Color::Rgb(17, 24, 39),
            primary: Color::Rgb(34, 211, 238),
            primary_dim: Color::Rgb(14, 116, 144),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(34, 211, 238),
            text: Color::Rgb(229, 231, 235),
            text_dim: Color::Rgb(156, 163, 175),
            text_muted: Color::Rgb(75, 85, 99),
            border: Color::Rgb(55, 65, 81),
            border_focus: Color::Rgb(34, 211, 238),
        }
    }
}

/// Color for a skill proficiency bar.
pub fn skill_level_color(level: u8, theme: &MidnightTheme) -> Color {
    if level < 50 {
        theme.warning
    } else if level < 75 {
        theme.primary
    } else {
        theme.success
    }
}

pub fn notification_color(level: NotificationLevel, theme: &MidnightTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
