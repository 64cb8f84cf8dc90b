//! Server shared state
//!
//! Holds the gateway and startup time. Nothing here is mutated after
//! startup, so requests share it without locks.

use crate::gateway::Gateway;
use chrono::{DateTime, Utc};

/// Shared state for the HTTP server
pub struct AppState<B> {
    /// Gateway over the geocoding backend
    pub gateway: Gateway<B>,

    started_at: DateTime<Utc>,
}

impl<B> AppState<B> {
    /// Create new application state
    pub fn new(gateway: Gateway<B>) -> Self {
        Self {
            gateway,
            started_at: Utc::now(),
        }
    }

    /// Whole seconds since startup
    pub fn uptime_secs(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::fake::FakeBackend;

    #[test]
    fn test_uptime_starts_near_zero() {
        let state = AppState::new(Gateway::new(FakeBackend::with_features(vec![])));
        assert!(state.uptime_secs() < 5);
    }
}
