//! One-line key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, ThemeColors};

/// (key, action) pairs rendered as `[key] action · [key] action`
pub struct HintBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    colors: ThemeColors,
}

impl<'a> HintBar<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], colors: ThemeColors) -> Self {
        Self { hints, colors }
    }
}

impl Widget for HintBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted(&self.colors)));
            }
            spans.push(Span::styled(
                format!("[{key}]"),
                styles::keybinding(&self.colors),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted(&self.colors)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
