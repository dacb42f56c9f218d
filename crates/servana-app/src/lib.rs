//! servana-app - Application state and orchestration for Servana
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction for shared orchestration, configuration loading, and the
//! checkout and identity SDK seams with their local stand-ins.

pub mod actions;
pub mod chat_bot;
pub mod checkout;
pub mod config;
pub mod dialog;
pub mod engine;
pub mod handler;
pub mod identity;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod order_store;
pub mod process;
pub mod signals;
pub mod state;
pub mod theme;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::AppState;
