//! Shared application state

use crate::info::Prober;

/// Shared application state
///
/// Holds no per-request data; every handler builds its snapshot from scratch.
#[derive(Clone)]
pub struct AppState {
    pub prober: Prober,
}

impl AppState {
    pub fn new(prober: Prober) -> Self {
        Self { prober }
    }
}
