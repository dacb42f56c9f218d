//! Payment confirmation screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use servana_core::Provider;

use crate::theme::{styles, ThemeColors};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct PaymentView<'a> {
    provider: Option<&'a Provider>,
    processing: bool,
    animation_frame: u64,
    colors: ThemeColors,
}

impl<'a> PaymentView<'a> {
    pub fn new(provider: Option<&'a Provider>, colors: ThemeColors) -> Self {
        Self {
            provider,
            processing: false,
            animation_frame: 0,
            colors,
        }
    }

    /// Show the in-flight spinner in place of the pay button
    pub fn processing(mut self, processing: bool, animation_frame: u64) -> Self {
        self.processing = processing;
        self.animation_frame = animation_frame;
        self
    }

    fn detail_line(&self, label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), styles::text_muted(&self.colors)),
            Span::styled(value, styles::text(&self.colors)),
        ])
    }

    fn action_line(&self, provider: &Provider) -> Line<'static> {
        let c = &self.colors;
        if self.processing {
            let frame = SPINNER[(self.animation_frame as usize) % SPINNER.len()];
            Line::from(vec![
                Span::styled(frame, styles::accent(c)),
                Span::styled(" Processing payment...", styles::text_muted(c)),
            ])
        } else {
            Line::from(Span::styled(
                format!("  Pay {}  ", provider.price.money),
                styles::focused_selected(c),
            ))
        }
    }
}

impl Widget for PaymentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.colors, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(provider) = self.provider else {
            Paragraph::new("Provider not found")
                .style(styles::error(&self.colors))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        };

        let [details_area, action_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        let details = vec![
            Line::from(Span::styled(
                format!("Book {}", provider.service_name),
                styles::accent_bold(&self.colors),
            )),
            Line::default(),
            self.detail_line("Provider", provider.name.to_string()),
            self.detail_line("Service", provider.service_name.to_string()),
            self.detail_line("Rate", provider.price.to_string()),
            self.detail_line("Rating", format!("★ {:.1}", provider.rating)),
            self.detail_line("Experience", provider.experience.to_string()),
            self.detail_line("Location", provider.location.to_string()),
        ];
        Paragraph::new(details).render(details_area, buf);

        Paragraph::new(self.action_line(provider))
            .alignment(Alignment::Center)
            .render(action_area, buf);
    }
}
