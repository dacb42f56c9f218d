//! Modal dialog state
//!
//! A dialog blocks every other key until one of its options is chosen. Each
//! option carries the [`Message`] dispatched when it is confirmed.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct DialogOption {
    pub label: String,
    pub message: Message,
}

impl DialogOption {
    pub fn new(label: impl Into<String>, message: Message) -> Self {
        Self {
            label: label.into(),
            message,
        }
    }
}

/// Alert-style dialog with one or more buttons
#[derive(Debug, Clone)]
pub struct DialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<DialogOption>,
    pub selected: usize,
}

impl DialogState {
    /// Dialog with a single OK button dispatching `on_ok`
    pub fn alert(title: impl Into<String>, message: impl Into<String>, on_ok: Message) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: vec![DialogOption::new("OK", on_ok)],
            selected: 0,
        }
    }

    /// Booking confirmation; OK goes to the order list
    pub fn payment_success(service_name: &str) -> Self {
        Self::alert(
            "Payment Success",
            format!("Your {service_name} service has been booked!"),
            Message::GoToOrders,
        )
    }

    pub fn payment_error(message: &str) -> Self {
        Self::alert("Payment Error", message, Message::DismissDialog)
    }

    pub fn status_updated(status: servana_core::OrderStatus) -> Self {
        Self::alert(
            "Status Updated",
            format!("Order status changed to {status}"),
            Message::DismissDialog,
        )
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    /// Message of the highlighted option
    pub fn selected_message(&self) -> Option<Message> {
        self.options.get(self.selected).map(|o| o.message.clone())
    }

    /// Message for Esc; the last option acts as cancel
    pub fn cancel_message(&self) -> Option<Message> {
        self.options.last().map(|o| o.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servana_core::OrderStatus;

    #[test]
    fn test_payment_success_text() {
        let dialog = DialogState::payment_success("Electrician");
        assert_eq!(dialog.title, "Payment Success");
        assert_eq!(dialog.message, "Your Electrician service has been booked!");
        assert!(matches!(dialog.selected_message(), Some(Message::GoToOrders)));
    }

    #[test]
    fn test_status_updated_text() {
        let dialog = DialogState::status_updated(OrderStatus::Completed);
        assert_eq!(dialog.message, "Order status changed to Completed");
    }

    #[test]
    fn test_selection_wraps() {
        let mut dialog = DialogState::alert("Title", "Body", Message::DismissDialog);
        dialog.options.push(DialogOption::new("Cancel", Message::Quit));

        dialog.select_next();
        assert_eq!(dialog.selected, 1);
        dialog.select_next();
        assert_eq!(dialog.selected, 0);
        dialog.select_previous();
        assert_eq!(dialog.selected, 1);
        assert!(matches!(dialog.cancel_message(), Some(Message::Quit)));
    }
}
