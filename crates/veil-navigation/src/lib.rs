//! Veil Navigation
//!
//! Address bar input resolution:
//!   1. Empty input → home page
//!   2. Explicit scheme or `www.` prefix → navigate
//!   3. Multi-word or dot-less text → search
//!   4. Anything else → navigate over https
//!
//! Visited URLs are kept in a JSON history log partitioned by calendar date.
//! [`SessionHistory`] tracks back/forward availability for hosts that cannot report it.

mod error;
mod history;
mod input;
mod session;

pub use error::HistoryError;
pub use history::{HistoryEntry, HistoryLog, HistoryStore};
pub use input::{AddressResolver, NavigationTarget};
pub use session::SessionHistory;

pub type Result<T> = std::result::Result<T, HistoryError>;
