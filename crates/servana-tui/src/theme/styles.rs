//! Semantic style builders over [`ThemeColors`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use servana_core::OrderStatus;

use super::palette::{ThemeColors, CONTRAST_FG};

// --- Text styles ---
pub fn text(c: &ThemeColors) -> Style {
    Style::default().fg(c.text)
}

pub fn text_muted(c: &ThemeColors) -> Style {
    Style::default().fg(c.text_muted)
}

pub fn text_bold(c: &ThemeColors) -> Style {
    text(c).add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(c: &ThemeColors) -> Style {
    Style::default().fg(c.primary)
}

pub fn accent_bold(c: &ThemeColors) -> Style {
    accent(c).add_modifier(Modifier::BOLD)
}

pub fn error(c: &ThemeColors) -> Style {
    Style::default().fg(c.error)
}

// --- Keybinding hint style ---
pub fn keybinding(c: &ThemeColors) -> Style {
    Style::default()
        .fg(c.secondary)
        .add_modifier(Modifier::BOLD)
}

// --- Selection styles ---
/// Highlighted row or focused button
pub fn focused_selected(c: &ThemeColors) -> Style {
    Style::default()
        .fg(CONTRAST_FG)
        .bg(c.primary)
        .add_modifier(Modifier::BOLD)
}

/// Toggle switch; on uses the primary color
pub fn switch(c: &ThemeColors, on: bool) -> Style {
    Style::default()
        .fg(CONTRAST_FG)
        .bg(if on { c.primary } else { c.text_muted })
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
/// Rounded card on the card background
pub fn card_block(c: &ThemeColors, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { c.primary } else { c.border }))
        .style(Style::default().bg(c.card).fg(c.text))
}

pub fn modal_block<'a>(c: &ThemeColors, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(accent_bold(c))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent(c))
        .style(Style::default().bg(c.card).fg(c.text))
}

// --- Order status mapping ---

/// Badge style for an order status
pub fn status_badge(c: &ThemeColors, status: OrderStatus) -> Style {
    let bg = match status {
        OrderStatus::Pending => c.text_muted,
        OrderStatus::Confirmed => c.primary,
        OrderStatus::Completed => c.success,
        OrderStatus::Cancelled => c.error,
    };
    Style::default()
        .fg(CONTRAST_FG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}
