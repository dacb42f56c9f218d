//! Tab switching, back navigation and list selection

use crate::message::Message;
use crate::navigation::{Route, Tab};
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_select_tab(state: &mut AppState, tab: Tab) -> UpdateResult {
    state.nav.select_tab(tab);
    UpdateResult::none()
}

/// Pop the active stack. Leaving the payment screen detaches it from any
/// in-flight checkout.
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    let leaving_payment = matches!(state.nav.current(), Route::Payment { .. });
    if state.nav.pop() && leaving_payment {
        if state.payment.is_processing() {
            tracing::info!("Left payment screen with checkout still in flight");
        }
        state.payment.reset();
    }
    UpdateResult::none()
}

/// Number of rows in the list on the current screen
fn list_len(state: &AppState) -> usize {
    match state.nav.current() {
        Route::Services => state.services().len(),
        Route::ServiceProviders { .. } => state.visible_providers().len(),
        Route::OrdersList => state.orders.len(),
        _ => 0,
    }
}

fn cursor_mut(state: &mut AppState) -> Option<&mut usize> {
    match state.nav.current() {
        Route::Services => Some(&mut state.selection.services),
        Route::ServiceProviders { .. } => Some(&mut state.selection.providers),
        Route::OrdersList => Some(&mut state.selection.orders),
        _ => None,
    }
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let len = list_len(state);
    if let Some(cursor) = cursor_mut(state) {
        if len > 0 {
            *cursor = (*cursor + 1).min(len - 1);
        }
    }
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    if let Some(cursor) = cursor_mut(state) {
        *cursor = cursor.saturating_sub(1);
    }
    UpdateResult::none()
}

/// Open the highlighted row
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let message = match state.nav.current() {
        Route::Services => state
            .services()
            .get(state.selection.services)
            .map(|service| Message::SelectService {
                service_name: service.name.to_string(),
            }),
        Route::ServiceProviders { .. } => state
            .visible_providers()
            .get(state.selection.providers)
            .map(|provider| Message::SelectProvider {
                provider_id: provider.id,
            }),
        Route::OrdersList => state
            .orders
            .get_index(state.selection.orders)
            .map(|order| Message::OpenOrder {
                order_id: order.id.clone(),
            }),
        Route::Payment { .. } => Some(Message::Pay),
        _ => None,
    };
    message.map(UpdateResult::message).unwrap_or_default()
}
