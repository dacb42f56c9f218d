//! FAQ chat: transcript, typing status, input line and quick replies

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use servana_app::chat_bot::{ChatState, QUICK_REPLIES};
use servana_core::ChatMessage;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{styles, ThemeColors};

/// Bubbles take at most this share of the transcript width
const BUBBLE_WIDTH_PERCENT: usize = 75;

pub struct ChatView<'a> {
    chat: &'a ChatState,
    colors: ThemeColors,
}

impl<'a> ChatView<'a> {
    pub fn new(chat: &'a ChatState, colors: ThemeColors) -> Self {
        Self { chat, colors }
    }

    fn status_line(&self) -> Line<'static> {
        let c = &self.colors;
        let dot_style = if self.chat.is_typing() {
            styles::keybinding(c)
        } else {
            Style::default().fg(c.success)
        };
        Line::from(vec![
            Span::styled("● ", dot_style),
            Span::styled(self.chat.status_label(), styles::text_muted(c)),
        ])
    }

    fn bubble_lines(&self, message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
        let c = &self.colors;
        let (style, alignment) = if message.is_user() {
            (styles::focused_selected(c), Alignment::Right)
        } else {
            (styles::text(c).bg(c.background), Alignment::Left)
        };

        let mut lines: Vec<Line<'static>> = wrap_text(&message.text, width)
            .into_iter()
            .map(|row| Line::from(Span::styled(format!(" {row} "), style)).alignment(alignment))
            .collect();
        lines.push(
            Line::from(Span::styled(message.time_label(), styles::text_muted(c)))
                .alignment(alignment),
        );
        lines.push(Line::default());
        lines
    }

    fn render_transcript(&self, area: Rect, buf: &mut Buffer) {
        let bubble_width =
            (usize::from(area.width) * BUBBLE_WIDTH_PERCENT / 100).saturating_sub(2);
        let lines: Vec<Line> = self
            .chat
            .transcript
            .iter()
            .flat_map(|m| self.bubble_lines(m, bubble_width.max(1)))
            .collect();

        // Stick to the newest messages
        let overflow = lines.len().saturating_sub(usize::from(area.height));
        Paragraph::new(lines)
            .scroll((u16::try_from(overflow).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }

    fn input_line(&self) -> Line<'static> {
        let c = &self.colors;
        let mut spans = vec![Span::styled("> ", styles::accent_bold(c))];
        if self.chat.input.is_empty() {
            spans.push(Span::styled("Type your message...", styles::text_muted(c)));
        } else {
            spans.push(Span::styled(self.chat.input.clone(), styles::text(c)));
            spans.push(Span::styled("▏", styles::accent(c)));
        }
        Line::from(spans)
    }

    fn quick_reply_line(&self) -> Line<'static> {
        let c = &self.colors;
        let mut spans = Vec::new();
        for (i, quick) in QUICK_REPLIES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!("[F{}]", i + 1), styles::keybinding(c)));
            spans.push(Span::styled(format!(" {}", quick.label), styles::text(c)));
        }
        Line::from(spans)
    }
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.colors, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [status_area, transcript_area, quick_area, input_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.status_line()).render(status_area, buf);
        self.render_transcript(transcript_area, buf);
        Paragraph::new(self.quick_reply_line()).render(quick_area, buf);
        Paragraph::new(self.input_line()).render(input_area, buf);
    }
}

/// Greedy word wrap by display width.
///
/// Line breaks in `text` are kept and blank lines become empty rows. Words
/// longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.lines() {
        wrap_line(line, width, &mut rows);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

fn wrap_line(line: &str, width: usize, rows: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;
    let mut emitted = false;

    for word in line.split_whitespace() {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            emitted = true;
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    emitted = true;
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() || !emitted {
        rows.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use servana_app::chat_bot::{reply_for, DEFAULT_REPLY};
    use servana_app::theme::LIGHT_PALETTE;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("How much does it cost?", 10),
            vec!["How much", "does it", "cost?"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_empty_yields_one_row() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_text_respects_wide_chars() {
        assert_eq!(wrap_text("₹50 両替", 4), vec!["₹50", "両替"]);
    }

    #[test]
    fn test_wrap_text_keeps_line_breaks() {
        let rows = wrap_text(reply_for("what do you offer"), 60);

        assert_eq!(rows[0], "We offer various home services including:");
        assert!(rows.iter().any(|r| r == "- Plumbing"));
        assert!(rows.iter().any(|r| r == "- Painting"));
        assert!(rows.iter().any(|r| r.is_empty()));
        assert_eq!(rows.last().unwrap(), "Which service are you interested in?");
    }

    #[test]
    fn test_wrap_text_wraps_each_line_separately() {
        let rows = wrap_text(DEFAULT_REPLY, 20);

        assert!(rows.iter().any(|r| r == "- Pricing"));
        assert!(rows.iter().all(|r| r.width() <= 20));
    }

    #[test]
    fn test_chat_view_renders_bullet_rows() {
        let mut chat = ChatState::new();
        chat.input = "what services do you offer".to_string();
        let (ticket, reply) = chat.submit().unwrap();
        chat.deliver(ticket, reply);

        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(ChatView::new(&chat, (&LIGHT_PALETTE).into()), term.area());

        assert!(term.buffer_contains(" - Plumbing "));
        assert!(term.buffer_contains(" - Carpentry "));
    }

    #[test]
    fn test_chat_view_survives_very_wide_terminal() {
        let chat = ChatState::new();
        let mut term = TestTerminal::with_size(1000, 10);
        term.render_widget(ChatView::new(&chat, (&LIGHT_PALETTE).into()), term.area());

        assert!(term.buffer_contains("Online"));
    }

    #[test]
    fn test_chat_view_initial_state() {
        let chat = ChatState::new();
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(ChatView::new(&chat, (&LIGHT_PALETTE).into()), term.area());

        assert!(term.buffer_contains("Online"));
        assert!(term.buffer_contains("Hello! I'm your Home Services Assistant."));
        assert!(term.buffer_contains("Type your message..."));
        assert!(term.buffer_contains("[F1] Services"));
        assert!(term.buffer_contains("[F5] Support"));
    }

    #[test]
    fn test_chat_view_typing_status() {
        let mut chat = ChatState::new();
        chat.input = "hello".to_string();
        chat.submit();

        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(ChatView::new(&chat, (&LIGHT_PALETTE).into()), term.area());

        assert!(term.buffer_contains("Typing..."));
        assert!(term.buffer_contains(" hello "));
    }

    #[test]
    fn test_chat_view_shows_input() {
        let mut chat = ChatState::new();
        chat.input = "How do I pay".to_string();

        let mut term = TestTerminal::new();
        term.render_widget(ChatView::new(&chat, (&LIGHT_PALETTE).into()), term.area());

        assert!(term.buffer_contains("> How do I pay"));
    }
}
