//! Per-recipient mailbox storage.
//!
//! Each username owns an ordered queue of pending messages. Senders append
//! concurrently; a single consuming read removes the whole queue and
//! returns the entries that have not yet expired. Delivery is exactly-once:
//! once a drain has removed a queue, no later drain can observe any of its
//! messages.
//!
//! ## Locking
//!
//! One process-wide mutex guards the whole map. Both operations acquire it
//! inside the store, mutate, and release; neither performs I/O or blocks on
//! anything but the lock itself. Expiration filtering happens on the
//! removed queue after the lock is released, never against stored state.
//!
//! ## Expiration
//!
//! Messages are reaped lazily: an expired message is dropped at the next
//! drain for its username, or stays resident forever if that username is
//! never drained again.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use shared::api::{DeliveredMessage, DEFAULT_TIMEOUT_SECS};

use crate::models::StoredMessage;

/// Rejected deposit arguments. Nothing is stored when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DepositError {
    /// Negative TTLs are a caller error; the transport rejects them before
    /// the store ever sees one.
    #[error("invalid ttl: {0}")]
    NegativeTtl(i64),
}

/// Result of draining a username's mailbox.
///
/// The transport maps both empty variants to the same not-found response;
/// they stay distinct here so callers and tests can tell a recipient that
/// was never written to from one whose messages all expired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrainOutcome {
    /// Live messages, in insertion order. The whole queue is gone from the
    /// store, including any expired entries that were filtered out.
    Delivered(Vec<DeliveredMessage>),
    /// The mailbox existed but every message had expired. The entry is
    /// removed all the same.
    AllExpired,
    /// No deposits since the last drain (or ever) for this username.
    UnknownRecipient,
}

/// Store for per-recipient mailboxes.
#[cfg_attr(test, mockall::automock)]
pub trait MailboxStore: Send + Sync {
    /// Append a message to `username`'s mailbox, expiring `ttl_secs` after
    /// `now`. A TTL of zero is the sentinel for the default of
    /// [`DEFAULT_TIMEOUT_SECS`]. Returns the assigned message id.
    fn deposit(
        &self,
        username: &str,
        text: &str,
        ttl_secs: i64,
        now: DateTime<Utc>,
    ) -> Result<i64, DepositError>;

    /// Atomically remove `username`'s mailbox and return the messages still
    /// live at `now`, in insertion order. A message is live iff
    /// `now <= expires_at` (the expiration instant itself still delivers).
    fn drain(&self, username: &str, now: DateTime<Utc>) -> DrainOutcome;
}

/// In-memory implementation of [`MailboxStore`].
///
/// Ids come from a monotonic counter, so they are unique for the lifetime
/// of the process. There is no capacity bound and no duplicate detection.
pub struct MemoryMailboxStore {
    mailboxes: Mutex<HashMap<String, Vec<StoredMessage>>>,
    next_id: AtomicI64,
}

impl MemoryMailboxStore {
    pub fn new() -> Self {
        Self {
            mailboxes: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryMailboxStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MailboxStore for MemoryMailboxStore {
    fn deposit(
        &self,
        username: &str,
        text: &str,
        ttl_secs: i64,
        now: DateTime<Utc>,
    ) -> Result<i64, DepositError> {
        if ttl_secs < 0 {
            return Err(DepositError::NegativeTtl(ttl_secs));
        }
        let ttl_secs = if ttl_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            ttl_secs
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let message = StoredMessage {
            id,
            text: text.to_string(),
            expires_at: now + Duration::seconds(ttl_secs),
        };

        self.mailboxes
            .lock()
            .entry(username.to_string())
            .or_default()
            .push(message);

        Ok(id)
    }

    fn drain(&self, username: &str, now: DateTime<Utc>) -> DrainOutcome {
        // Remove the entry while holding the lock; a concurrent drain for
        // the same username sees either the full queue or nothing.
        let Some(messages) = self.mailboxes.lock().remove(username) else {
            return DrainOutcome::UnknownRecipient;
        };

        let live: Vec<DeliveredMessage> = messages
            .into_iter()
            .filter(|m| now <= m.expires_at)
            .map(|m| DeliveredMessage {
                id: m.id,
                text: m.text,
            })
            .collect();

        if live.is_empty() {
            DrainOutcome::AllExpired
        } else {
            DrainOutcome::Delivered(live)
        }
    }
}
