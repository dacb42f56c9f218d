//! Profile screen: session, theme switch and identity errors

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use servana_app::state::ProfileState;
use servana_app::theme::ThemeState;

use crate::theme::{styles, ThemeColors};

pub struct ProfileView<'a> {
    profile: &'a ProfileState,
    theme: &'a ThemeState,
    colors: ThemeColors,
}

impl<'a> ProfileView<'a> {
    pub fn new(profile: &'a ProfileState, theme: &'a ThemeState, colors: ThemeColors) -> Self {
        Self {
            profile,
            theme,
            colors,
        }
    }

    fn session_lines(&self) -> Vec<Line<'static>> {
        let c = &self.colors;
        match self.profile.session.user() {
            Some(user) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("Welcome, {}", user.name),
                        styles::accent_bold(c),
                    )),
                    Line::from(Span::styled(user.email.clone(), styles::text(c))),
                ];
                if let Some(picture) = &user.picture {
                    lines.push(Line::from(Span::styled(
                        picture.clone(),
                        styles::text_muted(c),
                    )));
                }
                lines
            }
            None => vec![Line::from(Span::styled(
                "Please log in to view your profile",
                styles::text(c),
            ))],
        }
    }

    fn theme_line(&self) -> Line<'static> {
        let c = &self.colors;
        let is_dark = self.theme.is_dark_mode();
        let switch = Span::styled(
            if is_dark { " ON " } else { " OFF " },
            styles::switch(c, is_dark),
        );
        let source = if self.theme.follows_system() {
            "following system"
        } else {
            "manual"
        };
        Line::from(vec![
            Span::styled("Dark Mode  ", styles::text(c)),
            switch,
            Span::styled(format!("  ({source})"), styles::text_muted(c)),
        ])
    }

    fn action_line(&self) -> Line<'static> {
        let c = &self.colors;
        if self.profile.loading {
            return Line::from(Span::styled("Please wait...", styles::text_muted(c)));
        }
        let label = if self.profile.session.is_logged_in() {
            " Log Out "
        } else {
            " Log In "
        };
        Line::from(Span::styled(label, styles::focused_selected(c)))
    }
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.colors, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::default()];
        lines.extend(self.session_lines());
        lines.push(Line::default());
        lines.push(self.theme_line());
        lines.push(Line::default());
        lines.push(self.action_line());

        if let Some(error) = &self.profile.last_error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                error.clone(),
                styles::error(&self.colors),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use servana_app::config::ThemePreference;
    use servana_app::theme::{Appearance, LIGHT_PALETTE};
    use servana_core::{AuthSession, UserProfile};

    fn render(profile: &ProfileState, theme: &ThemeState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(
            ProfileView::new(profile, theme, (&LIGHT_PALETTE).into()),
            term.area(),
        );
        term
    }

    #[test]
    fn test_logged_out_prompt() {
        let term = render(&ProfileState::default(), &ThemeState::default());

        assert!(term.buffer_contains("Please log in to view your profile"));
        assert!(term.buffer_contains("Log In"));
        assert!(term.buffer_contains("Dark Mode"));
    }

    #[test]
    fn test_logged_in_shows_user() {
        let profile = ProfileState {
            session: AuthSession::LoggedIn(UserProfile {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                picture: Some("https://example.com/john.png".to_string()),
            }),
            ..ProfileState::default()
        };
        let theme = ThemeState::new(ThemePreference::Dark, Appearance::Light);
        let term = render(&profile, &theme);

        assert!(term.buffer_contains("Welcome, John Doe"));
        assert!(term.buffer_contains("john@example.com"));
        assert!(term.buffer_contains("https://example.com/john.png"));
        assert!(term.buffer_contains("Log Out"));
        assert!(term.buffer_contains(" ON "));
    }

    #[test]
    fn test_loading_and_error() {
        let profile = ProfileState {
            loading: true,
            last_error: Some("Login cancelled".to_string()),
            ..ProfileState::default()
        };
        let term = render(&profile, &ThemeState::default());

        assert!(term.buffer_contains("Please wait..."));
        assert!(term.buffer_contains("Login cancelled"));
        assert!(!term.buffer_contains("Log In"));
    }
}
