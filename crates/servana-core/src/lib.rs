//! # servana-core - Core Domain Types
//!
//! Foundation crate for Servana. Provides the static catalogs, money values,
//! order and chat records, identity session types, error handling and logging.
//!
//! This crate has **zero internal dependencies** and performs no I/O apart from
//! logging setup.
//!
//! ## Public API
//!
//! ### Catalogs (`catalog`)
//! - [`Service`], [`Provider`] - Static catalog records
//! - [`SERVICES`], [`PROVIDERS`] - The compiled-in tables
//! - [`providers_for_service()`] - Exact, case-sensitive provider filter
//!
//! ### Money (`money`)
//! - [`Money`] - Amount in minor units with a [`Currency`]
//! - [`Rate`] - Money per [`RateUnit`], displayed as `₹50/hr`
//!
//! ### Orders (`order`)
//! - [`Order`], [`OrderId`], [`OrderStatus`]
//!
//! ### Chat (`chat`)
//! - [`ChatMessage`], [`Sender`]
//!
//! ### Identity (`identity`)
//! - [`UserProfile`], [`AuthSession`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use servana_core::prelude::*;
//! ```

pub mod catalog;
pub mod chat;
pub mod error;
pub mod identity;
pub mod logging;
pub mod money;
pub mod order;
pub mod prelude;

pub use catalog::{
    find_provider, find_service, providers_for_service, Provider, Service, PROVIDERS, SERVICES,
};
pub use chat::{ChatMessage, Sender};
pub use error::{Error, Result, ResultExt};
pub use identity::{AuthSession, UserProfile};
pub use money::{Currency, Money, Rate, RateUnit};
pub use order::{Order, OrderId, OrderStatus};
