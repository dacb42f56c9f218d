//! Custom widget components

mod catalog;
mod chat;
mod dialog;
mod header;
mod hints;
pub mod modal_overlay;
mod orders;
mod payment;
mod profile;
mod tabs;

pub use catalog::{ProviderList, ServiceList};
pub use chat::{wrap_text, ChatView};
pub use dialog::AlertDialog;
pub use header::MainHeader;
pub use hints::HintBar;
pub use orders::{OrderDetail, OrderList};
pub use payment::PaymentView;
pub use profile::ProfileView;
pub use tabs::TabBar;
