//! Application state (Model in TEA pattern)

use chrono::{DateTime, TimeDelta, Utc};
use servana_core::{
    find_provider, providers_for_service, AuthSession, Order, Provider, Service, SERVICES,
};

use crate::chat_bot::ChatState;
use crate::config::Settings;
use crate::dialog::DialogState;
use crate::message::AttemptId;
use crate::navigation::{Navigation, Route, Tab};
use crate::order_store::OrderStore;
use crate::theme::{Appearance, Palette, ThemeState};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Highlighted row of each list screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSelection {
    pub services: usize,
    pub providers: usize,
    pub orders: usize,
}

/// Payment screen state.
///
/// `attempt` is the checkout currently owned by the screen. A result for any
/// other attempt belongs to a screen the user already left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentScreenState {
    processing: bool,
    attempt: Option<AttemptId>,
}

impl PaymentScreenState {
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn attempt(&self) -> Option<AttemptId> {
        self.attempt
    }

    /// Mark `attempt` as in flight
    pub fn begin(&mut self, attempt: AttemptId) {
        self.processing = true;
        self.attempt = Some(attempt);
    }

    /// Settle `attempt`; returns `false` if the screen no longer owns it
    pub fn settle(&mut self, attempt: AttemptId) -> bool {
        if self.attempt != Some(attempt) {
            return false;
        }
        self.processing = false;
        true
    }

    /// Detach from any in-flight attempt
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Identity session plus the state of the last identity call
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub session: AuthSession,
    /// An authorize or clear-session call is in flight
    pub loading: bool,
    pub last_error: Option<String>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    pub theme: ThemeState,

    pub orders: OrderStore,

    pub nav: Navigation,

    pub selection: ListSelection,

    pub payment: PaymentScreenState,

    pub chat: ChatState,

    pub profile: ProfileState,

    /// Modal dialog; blocks all other input while present
    pub dialog: Option<DialogState>,

    /// Animation frame counter for spinners
    pub animation_frame: u64,

    next_attempt: AttemptId,

    /// Creation time of the newest order; keeps order ids strictly increasing
    last_order_at: Option<DateTime<Utc>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings and a light host appearance
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Appearance::Light)
    }

    /// Create state from settings and the host appearance sampled at startup
    pub fn with_settings(settings: Settings, system: Appearance) -> Self {
        let theme = ThemeState::new(settings.ui.theme, system);
        Self {
            phase: AppPhase::Running,
            settings,
            theme,
            orders: OrderStore::new(),
            nav: Navigation::new(),
            selection: ListSelection::default(),
            payment: PaymentScreenState::default(),
            chat: ChatState::new(),
            profile: ProfileState::default(),
            dialog: None,
            animation_frame: 0,
            next_attempt: 1,
            last_order_at: None,
        }
    }

    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn active_tab(&self) -> Tab {
        self.nav.active_tab()
    }

    /// Allocate an id for a new checkout attempt
    pub fn next_attempt_id(&mut self) -> AttemptId {
        let id = self.next_attempt;
        self.next_attempt += 1;
        id
    }

    /// Creation time for a new order.
    ///
    /// Order ids are epoch milliseconds, so two orders recorded within the same
    /// millisecond are pushed apart by one millisecond.
    pub fn next_order_time(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let at = match self.last_order_at {
            Some(last) if now <= last => last + TimeDelta::milliseconds(1),
            _ => now,
        };
        self.last_order_at = Some(at);
        at
    }

    pub fn show_dialog(&mut self, dialog: DialogState) {
        self.dialog = Some(dialog);
    }

    // ─────────────────────────────────────────────────────────
    // Screen Data
    // ─────────────────────────────────────────────────────────

    pub fn services(&self) -> &'static [Service] {
        SERVICES
    }

    /// Providers listed on the Home stack's provider screen
    pub fn visible_providers(&self) -> Vec<&'static Provider> {
        match self.nav.current_in(Tab::Home) {
            Route::ServiceProviders { service_name } => providers_for_service(service_name),
            _ => Vec::new(),
        }
    }

    /// Provider being paid for on the Home stack's payment screen
    pub fn payment_provider(&self) -> Option<&'static Provider> {
        match self.nav.current_in(Tab::Home) {
            Route::Payment { provider_id } => find_provider(*provider_id),
            _ => None,
        }
    }

    /// Order shown on the Orders stack's detail screen, read live from the store
    pub fn detail_order(&self) -> Option<&Order> {
        match self.nav.current_in(Tab::Orders) {
            Route::OrderDetails { order_id } => self.orders.get(order_id),
            _ => None,
        }
    }

    /// Badge for the Orders tab; `None` when there are no orders
    pub fn orders_badge(&self) -> Option<usize> {
        match self.orders.len() {
            0 => None,
            n => Some(n),
        }
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}
