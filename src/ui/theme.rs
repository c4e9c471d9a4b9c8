// ============================================================================
// Thème : couleurs et styles partagés
// ============================================================================
// Palette sombre teintée de violet, reprise sur tous les écrans.
// ============================================================================

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY: Color = Color::Rgb(124, 58, 237); // violet électrique
pub const PRIMARY_DARK: Color = Color::Rgb(76, 29, 149);
pub const TEXT: Color = Color::Rgb(241, 240, 255);
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
pub const ERROR: Color = Color::Rgb(248, 113, 113);
pub const WARNING: Color = Color::Rgb(245, 158, 11);
pub const BORDER: Color = Color::Rgb(31, 31, 46);
pub const SOL: Color = Color::Rgb(153, 69, 255);
pub const USDC: Color = Color::Rgb(39, 117, 202);

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn title() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn key_hint() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Vert si hausse, rouge si baisse
pub fn trend(is_up: bool) -> Style {
    Style::default().fg(if is_up { SUCCESS } else { ERROR })
}

pub fn selected() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(PRIMARY_DARK)
        .add_modifier(Modifier::BOLD)
}
