//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AxumContext`; handlers reach storage only
/// through the services it holds.
pub type AppState = Arc<AxumContext>;
