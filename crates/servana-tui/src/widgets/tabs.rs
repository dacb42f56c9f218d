//! Bottom tab bar with the Orders badge

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};
use servana_app::navigation::Tab;

use crate::theme::{styles, ThemeColors};

pub struct TabBar {
    active: Tab,
    orders_badge: Option<usize>,
    colors: ThemeColors,
}

impl TabBar {
    pub fn new(active: Tab, orders_badge: Option<usize>, colors: ThemeColors) -> Self {
        Self {
            active,
            orders_badge,
            colors,
        }
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        Tab::ALL
            .iter()
            .map(|tab| {
                let mut spans = vec![Span::raw(format!(" {} {} ", tab.index() + 1, tab.label()))];
                if let (Tab::Orders, Some(count)) = (tab, self.orders_badge) {
                    spans.push(Span::styled(
                        format!("({count})"),
                        Style::default().fg(self.colors.notification),
                    ));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.colors, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Tabs::new(self.tab_titles())
            .select(self.active.index())
            .style(styles::text_muted(&self.colors))
            .highlight_style(styles::focused_selected(&self.colors))
            .divider("│")
            .render(inner, buf);
    }
}
