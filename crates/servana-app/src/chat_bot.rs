//! Scripted FAQ assistant.
//!
//! Single-turn keyword matching: each user message is classified on its own,
//! with no memory of earlier turns.

use std::collections::BTreeSet;
use std::time::Duration;

use rand::Rng;
use servana_core::ChatMessage;

use crate::config::ChatSettings;

pub const GREETING: &str =
    "Hello! I'm your Home Services Assistant. How can I help you today?";

pub const DEFAULT_REPLY: &str = "I'm sorry, I didn't understand that. Could you rephrase or ask about:\n- Services we offer\n- Pricing\n- Booking process\n- Payment methods\n- Support options";

/// Keyword groups in match precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Services,
    Pricing,
    Booking,
    Payment,
    Help,
    Thanks,
}

impl Topic {
    pub const PRECEDENCE: [Topic; 7] = [
        Topic::Greeting,
        Topic::Services,
        Topic::Pricing,
        Topic::Booking,
        Topic::Payment,
        Topic::Help,
        Topic::Thanks,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Greeting => &["hello", "hi"],
            Topic::Services => &["service", "offer"],
            Topic::Pricing => &["price", "cost"],
            Topic::Booking => &["book", "schedule"],
            Topic::Payment => &["pay", "payment"],
            Topic::Help => &["help", "support"],
            Topic::Thanks => &["thank"],
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Topic::Greeting => "Hello there! How can I assist you with your home services today?",
            Topic::Services => "We offer various home services including:\n- Plumbing\n- Electrical\n- Cleaning\n- Carpentry\n- Painting\n\nWhich service are you interested in?",
            Topic::Pricing => "Our pricing varies based on the service and provider. Could you specify which service you'd like pricing for?",
            Topic::Booking => "To book a service, please go to the Home tab and select the service you need. Then choose a provider and complete the payment.",
            Topic::Payment => "We accept all major credit/debit cards, UPI, and net banking through our secure checkout.",
            Topic::Help => "For immediate support, you can call our 24/7 helpline at +1 (800) 123-4567 or email us at support@homeservices.com",
            Topic::Thanks => "You're welcome! Is there anything else I can help you with?",
        }
    }
}

/// First topic whose keyword occurs anywhere in the lower-cased input
pub fn classify(input: &str) -> Option<Topic> {
    let lower = input.to_lowercase();
    Topic::PRECEDENCE
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|k| lower.contains(k)))
}

/// Canned reply for `input`
pub fn reply_for(input: &str) -> &'static str {
    classify(input).map_or(DEFAULT_REPLY, |topic| topic.reply())
}

/// Prompt button that pre-fills the input without sending it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReply {
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_REPLIES: [QuickReply; 5] = [
    QuickReply {
        label: "Services",
        prompt: "What services do you offer?",
    },
    QuickReply {
        label: "Pricing",
        prompt: "How much does it cost?",
    },
    QuickReply {
        label: "Booking",
        prompt: "How do I book a service?",
    },
    QuickReply {
        label: "Payments",
        prompt: "What payment methods do you accept?",
    },
    QuickReply {
        label: "Support",
        prompt: "I need help with my order",
    },
];

/// Pseudo-random typing delay in `[min_delay_ms, max_delay_ms)`
pub fn reply_delay(settings: &ChatSettings, rng: &mut impl Rng) -> Duration {
    let ms = if settings.max_delay_ms > settings.min_delay_ms {
        rng.gen_range(settings.min_delay_ms..settings.max_delay_ms)
    } else {
        settings.min_delay_ms
    };
    Duration::from_millis(ms)
}

/// Handle for one scheduled bot reply
pub type ReplyTicket = u64;

/// Transcript, input line and pending replies of the chat widget
#[derive(Debug, Clone)]
pub struct ChatState {
    pub transcript: Vec<ChatMessage>,
    pub input: String,
    pending: BTreeSet<ReplyTicket>,
    next_ticket: ReplyTicket,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// Fresh conversation: one bot greeting
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::bot(GREETING)],
            input: String::new(),
            pending: BTreeSet::new(),
            next_ticket: 1,
        }
    }

    /// Bot is "typing" while any reply is outstanding
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_typing() {
            "Typing..."
        } else {
            "Online"
        }
    }

    /// Input is sendable when it has non-whitespace content
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Append the current input as a user message and open a reply ticket.
    ///
    /// Returns the ticket and the reply text to deliver later, or `None` if the
    /// input is blank.
    pub fn submit(&mut self) -> Option<(ReplyTicket, &'static str)> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        let reply = reply_for(&text);
        self.transcript.push(ChatMessage::user(text));

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending.insert(ticket);
        Some((ticket, reply))
    }

    /// Deliver a reply; stale or cancelled tickets are dropped.
    ///
    /// Returns `true` if the reply was appended.
    pub fn deliver(&mut self, ticket: ReplyTicket, text: impl Into<String>) -> bool {
        if !self.pending.remove(&ticket) {
            return false;
        }
        self.transcript.push(ChatMessage::bot(text));
        true
    }

    /// Restart the conversation, returning the tickets that must be cancelled
    pub fn reset(&mut self) -> Vec<ReplyTicket> {
        let cancelled: Vec<ReplyTicket> = std::mem::take(&mut self.pending).into_iter().collect();
        self.transcript = vec![ChatMessage::bot(GREETING)];
        self.input.clear();
        cancelled
    }

    pub fn apply_quick_reply(&mut self, index: usize) -> bool {
        match QUICK_REPLIES.get(index) {
            Some(quick) => {
                self.input = quick.prompt.to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use servana_core::Sender;

    #[test]
    fn test_greeting_keywords_anywhere_case_insensitive() {
        assert_eq!(classify("hello"), Some(Topic::Greeting));
        assert_eq!(classify("HI"), Some(Topic::Greeting));
        assert_eq!(classify("Oh, Hello there"), Some(Topic::Greeting));
        // substring match, so "this" contains "hi"
        assert_eq!(classify("this"), Some(Topic::Greeting));
        assert_eq!(
            reply_for("Hi!"),
            "Hello there! How can I assist you with your home services today?"
        );
    }

    #[test]
    fn test_unmatched_input_gets_default_reply() {
        assert_eq!(classify("xyz"), None);
        assert_eq!(reply_for("xyz"), DEFAULT_REPLY);
        assert_eq!(reply_for(""), DEFAULT_REPLY);
    }

    #[test]
    fn test_each_group_matches_its_keywords() {
        assert_eq!(classify("what do you OFFER"), Some(Topic::Services));
        assert_eq!(classify("what's the price"), Some(Topic::Pricing));
        assert_eq!(classify("cost?"), Some(Topic::Pricing));
        assert_eq!(classify("can I book"), Some(Topic::Booking));
        assert_eq!(classify("schedule a visit"), Some(Topic::Booking));
        assert_eq!(classify("pay by card"), Some(Topic::Payment));
        assert_eq!(classify("need support"), Some(Topic::Help));
        assert_eq!(classify("thanks a lot"), Some(Topic::Thanks));
    }

    #[test]
    fn test_first_matching_group_wins() {
        // greeting beats services
        assert_eq!(classify("hello, which service"), Some(Topic::Greeting));
        // services beats pricing
        assert_eq!(classify("service price"), Some(Topic::Services));
        // pricing beats booking
        assert_eq!(classify("cost to book"), Some(Topic::Pricing));
        // booking beats payment
        assert_eq!(classify("book and pay"), Some(Topic::Booking));
        // payment beats help
        assert_eq!(classify("pay support"), Some(Topic::Payment));
        // help beats thanks
        assert_eq!(classify("thank you for the help"), Some(Topic::Help));
    }

    #[test]
    fn test_quick_reply_prompts_classify_as_expected() {
        // "What services do you offer?" contains "hat" not "hi"; services wins
        assert_eq!(classify(QUICK_REPLIES[0].prompt), Some(Topic::Services));
        assert_eq!(classify(QUICK_REPLIES[1].prompt), Some(Topic::Pricing));
        // "How do I book a service?" matches services before booking
        assert_eq!(classify(QUICK_REPLIES[2].prompt), Some(Topic::Services));
        assert_eq!(classify(QUICK_REPLIES[3].prompt), Some(Topic::Payment));
        assert_eq!(classify(QUICK_REPLIES[4].prompt), Some(Topic::Help));
    }

    #[test]
    fn test_new_chat_starts_with_greeting() {
        let chat = ChatState::new();
        assert_eq!(chat.transcript.len(), 1);
        assert_eq!(chat.transcript[0].text, GREETING);
        assert_eq!(chat.transcript[0].sender, Sender::Bot);
        assert!(!chat.is_typing());
        assert_eq!(chat.status_label(), "Online");
    }

    #[test]
    fn test_submit_appends_user_message_and_opens_ticket() {
        let mut chat = ChatState::new();
        chat.input = "What is the price?".to_string();

        let (ticket, reply) = chat.submit().unwrap();

        assert_eq!(reply, Topic::Pricing.reply());
        assert!(chat.input.is_empty());
        assert_eq!(chat.transcript.len(), 2);
        assert!(chat.transcript[1].is_user());
        assert!(chat.is_typing());
        assert_eq!(chat.status_label(), "Typing...");

        assert!(chat.deliver(ticket, reply));
        assert_eq!(chat.transcript.len(), 3);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut chat = ChatState::new();
        chat.input = "   \n".to_string();
        assert!(chat.submit().is_none());
        assert_eq!(chat.transcript.len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_deliver_drops_unknown_and_duplicate_tickets() {
        let mut chat = ChatState::new();
        chat.input = "hi".to_string();
        let (ticket, reply) = chat.submit().unwrap();

        assert!(!chat.deliver(ticket + 100, "stray"));
        assert!(chat.deliver(ticket, reply));
        assert!(!chat.deliver(ticket, reply));
        assert_eq!(chat.transcript.len(), 3);
    }

    #[test]
    fn test_reset_cancels_pending_and_restores_greeting() {
        let mut chat = ChatState::new();
        chat.input = "hi".to_string();
        let (t1, _) = chat.submit().unwrap();
        chat.input = "price".to_string();
        let (t2, _) = chat.submit().unwrap();
        chat.input = "draft".to_string();

        let cancelled = chat.reset();

        assert_eq!(cancelled, vec![t1, t2]);
        assert_eq!(chat.transcript.len(), 1);
        assert!(chat.input.is_empty());
        assert!(!chat.is_typing());
        assert!(!chat.deliver(t1, "late"));
    }

    #[test]
    fn test_quick_reply_fills_but_does_not_send() {
        let mut chat = ChatState::new();
        assert!(chat.apply_quick_reply(3));
        assert_eq!(chat.input, "What payment methods do you accept?");
        assert_eq!(chat.transcript.len(), 1);
        assert!(!chat.apply_quick_reply(9));
    }

    #[test]
    fn test_reply_delay_within_bounds() {
        let settings = ChatSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let d = reply_delay(&settings, &mut rng);
            assert!(d >= Duration::from_millis(1000));
            assert!(d < Duration::from_millis(3000));
        }
    }

    #[test]
    fn test_reply_delay_degenerate_range_uses_min() {
        let settings = ChatSettings {
            min_delay_ms: 50,
            max_delay_ms: 50,
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(reply_delay(&settings, &mut rng), Duration::from_millis(50));
    }
}
