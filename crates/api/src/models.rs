//! Internal storage types.

use chrono::{DateTime, Utc};

/// A message held in a recipient's mailbox until drained or expired.
///
/// Immutable once created. Removed from the store only when the owning
/// username's mailbox is drained, whether or not this message is still
/// live at that point.
#[derive(Debug, Clone)]
pub struct StoredMessage {
    pub id: i64,
    pub text: String,
    pub expires_at: DateTime<Utc>,
}
