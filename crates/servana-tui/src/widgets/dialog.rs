//! Blocking alert dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use servana_app::dialog::DialogState;

use super::modal_overlay;
use crate::theme::{styles, ThemeColors};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 8;

/// Renders over whatever screen is already in the buffer
pub struct AlertDialog<'a> {
    state: &'a DialogState,
    colors: ThemeColors,
}

impl<'a> AlertDialog<'a> {
    pub fn new(state: &'a DialogState, colors: ThemeColors) -> Self {
        Self { state, colors }
    }

    fn button_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, option) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if i == self.state.selected {
                styles::focused_selected(&self.colors)
            } else {
                styles::accent(&self.colors)
            };
            spans.push(Span::styled(format!(" {} ", option.label), style));
        }
        Line::from(spans)
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area, &self.colors);

        let dialog_area = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        modal_overlay::render_shadow(buf, dialog_area);
        modal_overlay::clear_area(buf, dialog_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&self.colors, &title);
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let [message_area, buttons_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::text(&self.colors))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message_area.inner(Margin::new(1, 1)), buf);

        Paragraph::new(self.button_line())
            .alignment(Alignment::Right)
            .render(buttons_area, buf);
    }
}
