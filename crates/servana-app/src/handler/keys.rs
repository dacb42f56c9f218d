//! Key event handlers for each screen

use servana_core::OrderStatus;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::{Route, Tab};
use crate::state::AppState;

/// Convert key events to messages based on the dialog and current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit - Ctrl+C works everywhere, including dialogs
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.dialog.is_some() {
        return handle_key_dialog(key);
    }

    match key {
        InputKey::Tab => return Some(Message::NextTab),
        InputKey::BackTab => return Some(Message::PreviousTab),
        _ => {}
    }

    match state.nav.current() {
        Route::SupportHome => handle_key_chat(key),
        Route::Payment { .. } => handle_key_payment(key),
        Route::OrderDetails { .. } => handle_key_order_details(state, key),
        Route::Profile => handle_key_profile(state, key),
        Route::Services | Route::ServiceProviders { .. } | Route::OrdersList => {
            handle_key_list(key)
        }
    }
}

/// Dialogs block every other key
fn handle_key_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ' | 'y' | 'o') => Some(Message::DialogConfirm),
        InputKey::Esc => Some(Message::DialogCancel),
        InputKey::Left | InputKey::Char('h') => Some(Message::DialogPrevious),
        InputKey::Right | InputKey::Char('l') | InputKey::Tab => Some(Message::DialogNext),
        InputKey::BackTab => Some(Message::DialogPrevious),
        _ => None,
    }
}

/// Keys shared by every screen except the chat input
fn handle_key_common(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('h') => {
            Some(Message::Back)
        }
        InputKey::Char(c @ '1'..='4') => {
            let index = (*c as usize) - ('1' as usize);
            Tab::from_index(index).map(Message::SelectTab)
        }
        _ => None,
    }
}

/// Services, providers and the order list
fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter | InputKey::Right | InputKey::Char('l') => Some(Message::Activate),
        other => handle_key_common(&other),
    }
}

fn handle_key_payment(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('p') => Some(Message::Pay),
        other => handle_key_common(&other),
    }
}

fn handle_key_order_details(state: &AppState, key: InputKey) -> Option<Message> {
    let status = match key {
        InputKey::Char('c') => OrderStatus::Completed,
        InputKey::Char('x') => OrderStatus::Cancelled,
        other => return handle_key_common(&other),
    };
    let order = state.detail_order()?;
    order
        .status
        .available_transitions()
        .contains(&status)
        .then(|| Message::UpdateOrderStatus {
            order_id: order.id.clone(),
            status,
        })
}

fn handle_key_profile(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('l') => {
            if state.profile.session.is_logged_in() {
                Some(Message::Logout)
            } else {
                Some(Message::Login)
            }
        }
        InputKey::Char('d') => Some(Message::ToggleTheme),
        InputKey::Char('s') => Some(Message::FollowSystemTheme),
        other => handle_key_common(&other),
    }
}

/// Support tab: printable keys go to the chat input
fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::ChatSubmit),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::Char(c) => Some(Message::ChatInput(c)),
        InputKey::F(n @ 1..=5) => Some(Message::QuickReply(usize::from(n - 1))),
        InputKey::CharCtrl('r') => Some(Message::ResetChat),
        InputKey::Esc => Some(Message::SelectTab(Tab::Home)),
        _ => None,
    }
}
