// crates/thaiaddr-core/src/config.rs
use crate::model::Locale;
use crate::traits::DEFAULT_SUGGESTION_LIMIT;
use serde::{Deserialize, Serialize};

/// Per-session settings for an [`crate::engine::Engine`].
///
/// Deserializable so adapters can pass it straight from their own config
/// (a JS object, CLI flags, a JSON file). Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Locale used for option ordering, labels and snapshots.
    pub locale: Locale,
    /// Maximum number of distinct postal codes in the suggestion list.
    pub suggestion_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Th,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl EngineConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }
}
