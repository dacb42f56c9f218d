//! Message types for the application (TEA pattern)

use servana_core::{OrderId, OrderStatus, UserProfile};

use crate::chat_bot::ReplyTicket;
use crate::input_key::InputKey;
use crate::navigation::Tab;
use crate::theme::Appearance;

/// Identifies one press of the pay button
pub type AttemptId = u64;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    SelectTab(Tab),
    NextTab,
    PreviousTab,
    /// Pop the active tab's stack
    Back,
    /// Move the highlighted row of the current list down
    SelectNext,
    /// Move the highlighted row of the current list up
    SelectPrevious,
    /// Open the highlighted row of the current list
    Activate,

    // ─────────────────────────────────────────────────────────
    // Booking Messages
    // ─────────────────────────────────────────────────────────
    /// Show the providers for a service
    SelectService { service_name: String },
    /// Open the payment screen for a provider
    SelectProvider { provider_id: u32 },
    /// Pay button on the payment screen
    Pay,
    /// Checkout returned a payment reference
    PaymentSucceeded {
        attempt: AttemptId,
        provider_id: u32,
        payment_reference: String,
    },
    /// Checkout failed or was dismissed
    PaymentFailed {
        attempt: AttemptId,
        description: Option<String>,
    },
    /// Leave the booking flow for the order list
    GoToOrders,

    // ─────────────────────────────────────────────────────────
    // Order Messages
    // ─────────────────────────────────────────────────────────
    OpenOrder { order_id: OrderId },
    UpdateOrderStatus {
        order_id: OrderId,
        status: OrderStatus,
    },

    // ─────────────────────────────────────────────────────────
    // Chat Messages
    // ─────────────────────────────────────────────────────────
    ChatInput(char),
    ChatBackspace,
    ChatSubmit,
    /// Pre-fill the input with a quick reply prompt
    QuickReply(usize),
    /// A scheduled bot reply is due
    ChatReplyReady { ticket: ReplyTicket, text: String },
    /// Start a fresh conversation
    ResetChat,

    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    FollowSystemTheme,
    /// Host appearance changed while running
    SystemAppearanceChanged(Appearance),

    // ─────────────────────────────────────────────────────────
    // Identity Messages
    // ─────────────────────────────────────────────────────────
    Login,
    Logout,
    LoginCompleted(UserProfile),
    LogoutCompleted,
    IdentityFailed { message: String },
    /// The user dismissed the login or logout prompt
    IdentityCancelled,

    // ─────────────────────────────────────────────────────────
    // Dialog Messages
    // ─────────────────────────────────────────────────────────
    DialogNext,
    DialogPrevious,
    /// Run the highlighted dialog option
    DialogConfirm,
    /// Run the dialog's cancel option
    DialogCancel,
    /// Close the dialog without further effect
    DismissDialog,
}
