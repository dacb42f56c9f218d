//! Order list and order detail screens

use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use servana_core::{Order, OrderStatus};

use crate::theme::{styles, ThemeColors};

fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d %b %Y, %H:%M").to_string()
}

fn status_badge(status: OrderStatus, colors: &ThemeColors) -> Span<'static> {
    Span::styled(
        format!(" {} ", status.label()),
        styles::status_badge(colors, status),
    )
}

pub struct OrderList<'a> {
    orders: Vec<&'a Order>,
    selected: usize,
    colors: ThemeColors,
}

impl<'a> OrderList<'a> {
    pub fn new(orders: impl Iterator<Item = &'a Order>, selected: usize, colors: ThemeColors) -> Self {
        Self {
            orders: orders.collect(),
            selected,
            colors,
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.colors, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let top = inner.height.saturating_sub(2) / 2;
        let lines = vec![
            Line::from(Span::styled("No orders yet", styles::text_bold(&self.colors))),
            Line::from(Span::styled(
                "Book a service to see your orders here",
                styles::text_muted(&self.colors),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(
                Rect::new(inner.x, inner.y + top, inner.width, inner.height - top),
                buf,
            );
    }

    fn order_item(&self, order: &Order) -> ListItem<'static> {
        let c = &self.colors;
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(order.service_name.clone(), styles::text_bold(c)),
                Span::raw("  "),
                status_badge(order.status, c),
            ]),
            Line::from(vec![
                Span::styled(order.provider.name, styles::text(c)),
                Span::styled(
                    format!(" · {}", format_date(order.created_at)),
                    styles::text_muted(c),
                ),
                Span::raw("  "),
                Span::styled(order.amount_display(), styles::accent(c)),
            ]),
            Line::default(),
        ])
    }
}

impl Widget for OrderList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.orders.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.orders.iter().map(|o| self.order_item(o)).collect();
        let list = List::new(items)
            .block(styles::card_block(&self.colors, true))
            .highlight_style(styles::focused_selected(&self.colors))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

/// Detail of one order, resolved live from the store
pub struct OrderDetail<'a> {
    order: Option<&'a Order>,
    colors: ThemeColors,
}

impl<'a> OrderDetail<'a> {
    pub fn new(order: Option<&'a Order>, colors: ThemeColors) -> Self {
        Self { order, colors }
    }

    fn row(&self, label: &'static str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<18}"), styles::text_muted(&self.colors)),
            value,
        ])
    }
}

impl Widget for OrderDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let c = self.colors;
        let block = styles::card_block(&c, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(order) = self.order else {
            Paragraph::new("Order not found")
                .style(styles::error(&c))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        };

        let [details_area, actions_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        let details = vec![
            Line::from(Span::styled(order.service_name.clone(), styles::accent_bold(&c))),
            Line::default(),
            self.row("Provider", Span::styled(order.provider.name, styles::text(&c))),
            self.row(
                "Date",
                Span::styled(format_date(order.created_at), styles::text(&c)),
            ),
            self.row(
                "Amount",
                Span::styled(order.amount_display(), styles::text(&c)),
            ),
            self.row("Status", status_badge(order.status, &c)),
            self.row(
                "Payment Reference",
                Span::styled(order.payment_reference.clone(), styles::text(&c)),
            ),
        ];
        Paragraph::new(details).render(details_area, buf);

        let transitions = order.status.available_transitions();
        if transitions.is_empty() {
            return;
        }
        let mut spans = Vec::new();
        for status in transitions {
            let (key, label) = match status {
                OrderStatus::Completed => ("c", "Complete"),
                OrderStatus::Cancelled => ("x", "Cancel"),
                _ => continue,
            };
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("[{key}]"), styles::keybinding(&c)));
            spans.push(Span::styled(
                format!(" {label} "),
                styles::status_badge(&c, *status),
            ));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(actions_area, buf);
    }
}
