//! Profile screen handlers: identity session and theme switch

use servana_core::{AuthSession, UserProfile};

use crate::state::AppState;
use crate::theme::{detect_system_appearance, Appearance};

use super::{UpdateAction, UpdateResult};

pub fn handle_login(state: &mut AppState) -> UpdateResult {
    if state.profile.loading || state.profile.session.is_logged_in() {
        return UpdateResult::none();
    }
    state.profile.loading = true;
    UpdateResult::action(UpdateAction::Authorize)
}

pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    if state.profile.loading || !state.profile.session.is_logged_in() {
        return UpdateResult::none();
    }
    state.profile.loading = true;
    UpdateResult::action(UpdateAction::ClearSession)
}

pub fn handle_login_completed(state: &mut AppState, user: UserProfile) -> UpdateResult {
    tracing::info!("Logged in as {}", user.email);
    state.profile.loading = false;
    state.profile.last_error = None;
    state.profile.session = AuthSession::LoggedIn(user);
    UpdateResult::none()
}

pub fn handle_logout_completed(state: &mut AppState) -> UpdateResult {
    tracing::info!("Logged out");
    state.profile.loading = false;
    state.profile.last_error = None;
    state.profile.session = AuthSession::LoggedOut;
    UpdateResult::none()
}

/// Identity errors are logged and kept for display; the session is unchanged
pub fn handle_identity_failed(state: &mut AppState, message: String) -> UpdateResult {
    tracing::warn!("Identity call failed: {}", message);
    state.profile.loading = false;
    state.profile.last_error = Some(message);
    UpdateResult::none()
}

/// A dismissed prompt is not an error: nothing is shown and the session stays
pub fn handle_identity_cancelled(state: &mut AppState) -> UpdateResult {
    tracing::info!("Identity prompt cancelled");
    state.profile.loading = false;
    UpdateResult::none()
}

pub fn handle_toggle_theme(state: &mut AppState) -> UpdateResult {
    state.theme.toggle();
    tracing::debug!(dark = state.theme.is_dark_mode(), "Theme toggled");
    UpdateResult::none()
}

pub fn handle_follow_system(state: &mut AppState) -> UpdateResult {
    state.theme.follow_system(detect_system_appearance());
    UpdateResult::none()
}

pub fn handle_system_appearance_changed(
    state: &mut AppState,
    appearance: Appearance,
) -> UpdateResult {
    if state.theme.system_appearance_changed(appearance) {
        tracing::debug!("Theme followed system appearance to {:?}", appearance);
    }
    UpdateResult::none()
}
