//! Header bar showing the route title and the theme indicator

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, ThemeColors};

pub struct MainHeader<'a> {
    title: &'a str,
    is_dark: bool,
    colors: ThemeColors,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, is_dark: bool, colors: ThemeColors) -> Self {
        Self {
            title,
            is_dark,
            colors,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.colors, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("● ", styles::accent(&self.colors)),
            Span::styled(self.title, styles::text_bold(&self.colors)),
        ]);
        Paragraph::new(title).render(inner, buf);

        let mode = if self.is_dark { "☾ Dark" } else { "☀ Light" };
        Paragraph::new(Line::from(Span::styled(mode, styles::text_muted(&self.colors))))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
