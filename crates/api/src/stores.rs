//! Ephemeral stores (in-memory).
//!
//! All state lives in process memory and dies with the process. The only
//! store is the mailbox store: per-username queues of expiring messages,
//! written by many concurrent senders and cleared by a single consuming
//! read per username.
//!
//! ## Usage in Handlers
//!
//! Stores are accessed via `state.stores`:
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
//!     let id = state.stores.mailboxes.deposit(&username, &text, timeout, now)?;
//! }
//! ```

mod mailbox;

pub use mailbox::{DepositError, DrainOutcome, MailboxStore, MemoryMailboxStore};

#[cfg(test)]
pub use mailbox::MockMailboxStore;

use std::sync::Arc;

/// Collection of all ephemeral stores.
#[derive(Clone)]
pub struct Stores {
    pub mailboxes: Arc<dyn MailboxStore>,
}
