//! Booking flow handlers: service list → provider list → payment

use chrono::Utc;
use servana_core::{find_provider, Order};

use crate::checkout::{CheckoutOptions, PaymentFailure, Prefill};
use crate::dialog::DialogState;
use crate::message::AttemptId;
use crate::navigation::{Route, Tab};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_select_service(state: &mut AppState, service_name: String) -> UpdateResult {
    state.selection.providers = 0;
    state.nav.select_tab(Tab::Home);
    state.nav.push(Route::ServiceProviders { service_name });
    UpdateResult::none()
}

pub fn handle_select_provider(state: &mut AppState, provider_id: u32) -> UpdateResult {
    if find_provider(provider_id).is_none() {
        tracing::warn!("Unknown provider id {}", provider_id);
        return UpdateResult::none();
    }
    state.payment.reset();
    state.nav.select_tab(Tab::Home);
    state.nav.push(Route::Payment { provider_id });
    UpdateResult::none()
}

/// Open the checkout for the provider on the payment screen.
///
/// Ignored while a checkout from this screen is still in flight.
pub fn handle_pay(state: &mut AppState) -> UpdateResult {
    let Some(provider) = state.payment_provider() else {
        return UpdateResult::none();
    };
    if state.payment.is_processing() {
        tracing::debug!("Pay ignored: checkout already in progress");
        return UpdateResult::none();
    }

    let prefill = Prefill::for_user(state.profile.session.user(), &state.settings.payment);
    let options =
        CheckoutOptions::for_provider(provider, prefill, state.palette(), &state.settings.payment);

    let attempt = state.next_attempt_id();
    state.payment.begin(attempt);
    tracing::info!(
        attempt,
        provider = provider.name,
        amount = options.amount,
        "Starting checkout"
    );

    UpdateResult::action(UpdateAction::StartCheckout {
        attempt,
        provider_id: provider.id,
        options: Box::new(options),
    })
}

/// Record the order; navigate only if the user is still on that payment screen
pub fn handle_payment_succeeded(
    state: &mut AppState,
    attempt: AttemptId,
    provider_id: u32,
    payment_reference: String,
) -> UpdateResult {
    let Some(provider) = find_provider(provider_id) else {
        tracing::error!(
            "Payment {} succeeded for unknown provider {}",
            payment_reference,
            provider_id
        );
        return UpdateResult::none();
    };

    let created_at = state.next_order_time(Utc::now());
    state
        .orders
        .add_order(Order::confirmed(provider, payment_reference, created_at));

    if state.payment.settle(attempt) {
        state.show_dialog(DialogState::payment_success(provider.service_name));
    } else {
        tracing::info!(attempt, "Payment settled after leaving the payment screen");
    }
    UpdateResult::none()
}

pub fn handle_payment_failed(
    state: &mut AppState,
    attempt: AttemptId,
    description: Option<String>,
) -> UpdateResult {
    let failure = PaymentFailure { description };
    tracing::warn!(attempt, "Payment failed: {}", failure.user_message());

    if state.payment.settle(attempt) {
        state.show_dialog(DialogState::payment_error(failure.user_message()));
    }
    UpdateResult::none()
}

/// Payment success OK: leave the booking flow for the order list
pub fn handle_go_to_orders(state: &mut AppState) -> UpdateResult {
    state.payment.reset();
    state.nav.pop_to_root(Tab::Home);
    state.nav.pop_to_root(Tab::Orders);
    state.nav.select_tab(Tab::Orders);
    state.selection.orders = 0;
    UpdateResult::none()
}
