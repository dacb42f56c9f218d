//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{booking, chat, keys::handle_key, navigation, orders, profile, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => navigation::handle_select_tab(state, tab),
        Message::NextTab => {
            let tab = state.active_tab().next();
            navigation::handle_select_tab(state, tab)
        }
        Message::PreviousTab => {
            let tab = state.active_tab().previous();
            navigation::handle_select_tab(state, tab)
        }
        Message::Back => navigation::handle_back(state),
        Message::SelectNext => navigation::handle_select_next(state),
        Message::SelectPrevious => navigation::handle_select_previous(state),
        Message::Activate => navigation::handle_activate(state),

        // ─────────────────────────────────────────────────────────
        // Booking Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectService { service_name } => {
            booking::handle_select_service(state, service_name)
        }
        Message::SelectProvider { provider_id } => {
            booking::handle_select_provider(state, provider_id)
        }
        Message::Pay => booking::handle_pay(state),
        Message::PaymentSucceeded {
            attempt,
            provider_id,
            payment_reference,
        } => booking::handle_payment_succeeded(state, attempt, provider_id, payment_reference),
        Message::PaymentFailed {
            attempt,
            description,
        } => booking::handle_payment_failed(state, attempt, description),
        Message::GoToOrders => booking::handle_go_to_orders(state),

        // ─────────────────────────────────────────────────────────
        // Order Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenOrder { order_id } => orders::handle_open_order(state, order_id),
        Message::UpdateOrderStatus { order_id, status } => {
            orders::handle_update_status(state, order_id, status)
        }

        // ─────────────────────────────────────────────────────────
        // Chat Messages
        // ─────────────────────────────────────────────────────────
        Message::ChatInput(c) => {
            state.chat.input.push(c);
            UpdateResult::none()
        }
        Message::ChatBackspace => {
            state.chat.input.pop();
            UpdateResult::none()
        }
        Message::ChatSubmit => chat::handle_submit(state),
        Message::QuickReply(index) => chat::handle_quick_reply(state, index),
        Message::ChatReplyReady { ticket, text } => chat::handle_reply_ready(state, ticket, text),
        Message::ResetChat => chat::handle_reset(state),

        // ─────────────────────────────────────────────────────────
        // Theme Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => profile::handle_toggle_theme(state),
        Message::FollowSystemTheme => profile::handle_follow_system(state),
        Message::SystemAppearanceChanged(appearance) => {
            profile::handle_system_appearance_changed(state, appearance)
        }

        // ─────────────────────────────────────────────────────────
        // Identity Messages
        // ─────────────────────────────────────────────────────────
        Message::Login => profile::handle_login(state),
        Message::Logout => profile::handle_logout(state),
        Message::LoginCompleted(user) => profile::handle_login_completed(state, user),
        Message::LogoutCompleted => profile::handle_logout_completed(state),
        Message::IdentityFailed { message } => profile::handle_identity_failed(state, message),
        Message::IdentityCancelled => profile::handle_identity_cancelled(state),

        // ─────────────────────────────────────────────────────────
        // Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::DialogNext => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.select_next();
            }
            UpdateResult::none()
        }
        Message::DialogPrevious => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.select_previous();
            }
            UpdateResult::none()
        }
        Message::DialogConfirm => match state.dialog.take() {
            Some(dialog) => dialog
                .selected_message()
                .map(UpdateResult::message)
                .unwrap_or_default(),
            None => UpdateResult::none(),
        },
        Message::DialogCancel => match state.dialog.take() {
            Some(dialog) => dialog
                .cancel_message()
                .map(UpdateResult::message)
                .unwrap_or_default(),
            None => UpdateResult::none(),
        },
        Message::DismissDialog => {
            state.dialog = None;
            UpdateResult::none()
        }
    }
}
