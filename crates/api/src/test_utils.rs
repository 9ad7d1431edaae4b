//! Shared test utilities for API handler tests.
//!
//! Handler tests call the handler functions directly with a mock-backed
//! `AppState` instead of going through a router.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::test_utils::test_state;
//!
//! let mut mailboxes = MockMailboxStore::new();
//! mailboxes.expect_deposit().returning(|_, _, _, _| Ok(1));
//!
//! let state = test_state(mailboxes);
//! ```

use std::sync::Arc;

use crate::state::AppState;
use crate::stores::{MockMailboxStore, Stores};

/// Builds an `AppState` backed by the given mailbox mock.
pub fn test_state(mailboxes: MockMailboxStore) -> AppState {
    AppState {
        stores: Stores {
            mailboxes: Arc::new(mailboxes),
        },
    }
}
