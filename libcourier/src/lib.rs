//! Courier client core
//!
//! The client-side state layer of the Courier team chat: action functions
//! that issue server API requests and translate their outcomes into atomic
//! batches of store changes. The store applies changes through a pure
//! reducer and broadcasts every applied batch to subscribers.

pub mod actions;
pub mod change;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use change::Change;
pub use client::ServerApi;
pub use config::CourierConfig;
pub use error::{ClientError, CourierError, Result, UserFacingError};
pub use state::{AppState, RequestStatus};
pub use store::{Store, StoreUpdate};
pub use types::Credentials;
