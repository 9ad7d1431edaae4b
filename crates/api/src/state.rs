use crate::stores::Stores;

#[derive(Clone)]
pub struct AppState {
    /// Ephemeral stores (in-memory).
    pub stores: Stores,
}
