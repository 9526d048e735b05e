//! Application state for the HTTP server.

use std::sync::Arc;

use crate::clock::Clock;
use crate::services::GeneratorSettings;

/// Shared application state passed to all handlers.
///
/// Only immutable settings and the clock are shared; every request builds its
/// periods from scratch.
#[derive(Clone)]
pub struct AppState {
    /// Fallback timezone/locale and range limit
    pub settings: Arc<GeneratorSettings>,
    /// Source of the reference instant
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(settings: GeneratorSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            settings: Arc::new(settings),
            clock,
        }
    }
}
