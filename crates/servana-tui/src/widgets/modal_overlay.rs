//! Shared modal overlay utilities.
//!
//! Centering, background dimming and drop shadows for modal dialogs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette::{self, ThemeColors};

/// Center a `width` x `height` rect in `area`, clamped to the area size.
///
/// ```
/// use ratatui::layout::Rect;
/// use servana_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area with the palette's muted text on its
/// background color.
pub fn dim_background(buf: &mut Buffer, area: Rect, colors: &ThemeColors) {
    let dim_style = Style::default().fg(colors.text_muted).bg(colors.background);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Draw a one-cell drop shadow along the right and bottom edges of `modal_rect`
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset every cell in `area` before drawing modal content
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use servana_app::theme::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        let result = centered_rect(40, 10, area);
        assert_eq!(result, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let result = centered_rect(40, 10, area);
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        let result = centered_rect(40, 10, area);
        assert_eq!(result, Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_covers_area() {
        let colors = ThemeColors::from(&DARK_PALETTE);
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area, &colors);
        for y in 0..5 {
            for x in 0..10 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.fg, colors.text_muted);
                assert_eq!(cell.bg, colors.background);
            }
        }
    }

    #[test]
    fn test_dim_background_offset_area() {
        let colors = ThemeColors::from(&LIGHT_PALETTE);
        let area = Rect::new(5, 3, 10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, area, &colors);
        assert_eq!(buf[(5, 3)].bg, colors.background);
        assert_eq!(buf[(14, 7)].bg, colors.background);
        assert_ne!(buf[(4, 3)].bg, colors.background);
    }

    #[test]
    fn test_render_shadow_offset() {
        let area = Rect::new(0, 0, 20, 10);
        let modal = Rect::new(5, 2, 10, 6);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, modal);

        // Cell at (15, 3) should be shadow (right edge, offset by 1)
        let right_shadow = &buf[(15, 3)];
        assert_eq!(right_shadow.fg, palette::SHADOW);
        assert_eq!(right_shadow.bg, palette::SHADOW);
        assert_eq!(right_shadow.symbol(), " ");

        // Cell at (6, 8) should be shadow (bottom edge, offset by 1)
        let bottom_shadow = &buf[(6, 8)];
        assert_eq!(bottom_shadow.fg, palette::SHADOW);
        assert_eq!(bottom_shadow.bg, palette::SHADOW);
        assert_eq!(bottom_shadow.symbol(), " ");
    }

    #[test]
    fn test_render_shadow_no_overflow() {
        let area = Rect::new(0, 0, 10, 10);
        let modal = Rect::new(8, 8, 2, 2); // Near edge
        let mut buf = Buffer::empty(area);
        // Should not panic with out-of-bounds access
        render_shadow(&mut buf, modal);
    }

    #[test]
    fn test_clear_area() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);

        // Fill buffer with content first
        for y in 0..5 {
            for x in 0..10 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('X');
                }
            }
        }

        // Clear a portion of it
        let clear_rect = Rect::new(2, 2, 5, 2);
        clear_area(&mut buf, clear_rect);

        // Cleared cells should be reset
        for y in 2..4 {
            for x in 2..7 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.symbol(), " ");
            }
        }
    }
}
