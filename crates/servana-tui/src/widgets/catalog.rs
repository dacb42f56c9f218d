//! Service and provider lists for the Home stack

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use servana_core::{Provider, Service};

use crate::theme::{styles, ThemeColors};

const EMPTY_PROVIDERS: &str = "No providers available for this service";

pub struct ServiceList<'a> {
    services: &'a [Service],
    selected: usize,
    colors: ThemeColors,
}

impl<'a> ServiceList<'a> {
    pub fn new(services: &'a [Service], selected: usize, colors: ThemeColors) -> Self {
        Self {
            services,
            selected,
            colors,
        }
    }
}

impl Widget for ServiceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let c = &self.colors;
        let items: Vec<ListItem> = self
            .services
            .iter()
            .map(|service| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(service.name, styles::text_bold(c)),
                        Span::raw("  "),
                        Span::styled(service.price.to_string(), styles::accent(c)),
                    ]),
                    Line::from(Span::styled(service.description, styles::text_muted(c))),
                    Line::default(),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(styles::card_block(c, true))
            .highlight_style(styles::focused_selected(c))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

pub struct ProviderList<'a> {
    providers: &'a [&'static Provider],
    selected: usize,
    colors: ThemeColors,
}

impl<'a> ProviderList<'a> {
    pub fn new(providers: &'a [&'static Provider], selected: usize, colors: ThemeColors) -> Self {
        Self {
            providers,
            selected,
            colors,
        }
    }

    fn provider_item(&self, provider: &Provider) -> ListItem<'static> {
        let c = &self.colors;
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(provider.name, styles::text_bold(c)),
                Span::raw("  "),
                Span::styled(format!("★ {:.1}", provider.rating), styles::keybinding(c)),
                Span::raw("  "),
                Span::styled(provider.price.to_string(), styles::accent(c)),
            ]),
            Line::from(Span::styled(
                format!("{} experience · {}", provider.experience, provider.location),
                styles::text_muted(c),
            )),
            Line::from(Span::styled(provider.skills.join(", "), styles::text(c))),
            Line::default(),
        ])
    }
}

impl Widget for ProviderList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.colors, true);

        if self.providers.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(EMPTY_PROVIDERS)
                .style(styles::text_muted(&self.colors))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .providers
            .iter()
            .map(|p| self.provider_item(p))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(styles::focused_selected(&self.colors))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
