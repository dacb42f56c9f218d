//! Order list and detail handlers

use servana_core::{OrderId, OrderStatus};

use crate::dialog::DialogState;
use crate::navigation::{Route, Tab};
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_open_order(state: &mut AppState, order_id: OrderId) -> UpdateResult {
    if state.orders.get(&order_id).is_none() {
        tracing::warn!(order_id = %order_id, "Cannot open unknown order");
        return UpdateResult::none();
    }
    state.nav.select_tab(Tab::Orders);
    state.nav.push(Route::OrderDetails { order_id });
    UpdateResult::none()
}

/// Apply a status change offered by the detail view.
///
/// Only transitions the current status offers are applied; the store itself
/// does not check legality.
pub fn handle_update_status(
    state: &mut AppState,
    order_id: OrderId,
    status: OrderStatus,
) -> UpdateResult {
    let Some(current) = state.orders.get(&order_id).map(|o| o.status) else {
        return UpdateResult::none();
    };
    if !current.available_transitions().contains(&status) {
        tracing::debug!(order_id = %order_id, "{} -> {} not offered", current, status);
        return UpdateResult::none();
    }

    state.orders.update_order_status(&order_id, status);
    state.show_dialog(DialogState::status_updated(status));
    UpdateResult::none()
}
