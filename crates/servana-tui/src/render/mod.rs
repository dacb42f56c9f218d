//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use servana_app::navigation::Route;
use servana_app::AppState;

use super::{layout, widgets};
use crate::theme::ThemeColors;

/// Render the complete UI (View function in TEA).
///
/// Colors are re-derived from the dark-mode flag on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let colors = ThemeColors::from(state.palette());

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background)),
        area,
    );

    let areas = layout::create(area);
    let route = state.nav.current();

    let title = route.title();
    frame.render_widget(
        widgets::MainHeader::new(&title, state.theme.is_dark_mode(), colors),
        areas.header,
    );

    render_screen(frame, areas.body, state, route, colors);

    frame.render_widget(
        widgets::HintBar::new(hints_for(state, route), colors),
        areas.hints,
    );
    frame.render_widget(
        widgets::TabBar::new(state.active_tab(), state.orders_badge(), colors),
        areas.tab_bar,
    );

    // Dialogs draw last, over the whole screen
    if let Some(dialog) = &state.dialog {
        frame.render_widget(widgets::AlertDialog::new(dialog, colors), area);
    }
}

fn render_screen(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    route: &Route,
    colors: ThemeColors,
) {
    match route {
        Route::Services => frame.render_widget(
            widgets::ServiceList::new(state.services(), state.selection.services, colors),
            area,
        ),
        Route::ServiceProviders { .. } => {
            let providers = state.visible_providers();
            frame.render_widget(
                widgets::ProviderList::new(&providers, state.selection.providers, colors),
                area,
            );
        }
        Route::Payment { .. } => frame.render_widget(
            widgets::PaymentView::new(state.payment_provider(), colors)
                .processing(state.payment.is_processing(), state.animation_frame),
            area,
        ),
        Route::OrdersList => frame.render_widget(
            widgets::OrderList::new(state.orders.iter(), state.selection.orders, colors),
            area,
        ),
        Route::OrderDetails { .. } => frame.render_widget(
            widgets::OrderDetail::new(state.detail_order(), colors),
            area,
        ),
        Route::SupportHome => {
            frame.render_widget(widgets::ChatView::new(&state.chat, colors), area)
        }
        Route::Profile => frame.render_widget(
            widgets::ProfileView::new(&state.profile, &state.theme, colors),
            area,
        ),
    }
}

/// Key hints for the active screen
fn hints_for(state: &AppState, route: &Route) -> &'static [(&'static str, &'static str)] {
    if state.dialog.is_some() {
        return &[("Enter", "confirm"), ("←→", "choose"), ("Esc", "cancel")];
    }
    match route {
        Route::Services => &[
            ("↑↓", "select"),
            ("Enter", "open"),
            ("Tab", "next tab"),
            ("q", "quit"),
        ],
        Route::ServiceProviders { .. } => &[
            ("↑↓", "select"),
            ("Enter", "book"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
        Route::Payment { .. } => &[("Enter", "pay"), ("Esc", "back"), ("q", "quit")],
        Route::OrdersList => &[
            ("↑↓", "select"),
            ("Enter", "details"),
            ("Tab", "next tab"),
            ("q", "quit"),
        ],
        Route::OrderDetails { .. } => match state.detail_order() {
            Some(order) if !order.status.available_transitions().is_empty() => &[
                ("c", "complete"),
                ("x", "cancel"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
            _ => &[("Esc", "back"), ("q", "quit")],
        },
        Route::SupportHome => &[
            ("Enter", "send"),
            ("F1-F5", "quick reply"),
            ("Ctrl+R", "reset"),
            ("Esc", "home"),
        ],
        Route::Profile if state.profile.session.is_logged_in() => &[
            ("Enter", "log out"),
            ("d", "dark mode"),
            ("s", "follow system"),
            ("q", "quit"),
        ],
        Route::Profile => &[
            ("Enter", "log in"),
            ("d", "dark mode"),
            ("s", "follow system"),
            ("q", "quit"),
        ],
    }
}
