//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::GOLD)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection ---
pub fn selected_highlight() -> Style {
    Style::default()
        .fg(palette::DEEPEST_BG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(palette::BORDER_ACTIVE)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Braille spinner frame for `frame`.
pub fn spinner(frame: u64) -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    FRAMES[(frame / 2 % FRAMES.len() as u64) as usize]
}
