use std::sync::Arc;

use crate::config::Config;
use crate::lexicon::Lexicon;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only reference data. Replacing it means building a new `Arc`,
    /// never mutating this one.
    pub lexicon: Arc<Lexicon>,
}
