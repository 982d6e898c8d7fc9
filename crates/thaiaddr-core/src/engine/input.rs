// crates/thaiaddr-core/src/engine/input.rs
use super::form::AddressField;
use crate::model::{AreaCode, Level, Locale};
use serde::{Deserialize, Serialize};

/// One adapter-to-engine input, for adapters that queue or replay them.
///
/// ```rust
/// use thaiaddr_core::engine::EngineInput;
///
/// let input: EngineInput =
///     serde_json::from_str(r#"{"kind":"select","level":"district","code":1004}"#).unwrap();
/// assert!(matches!(input, EngineInput::Select { user_initiated: true, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EngineInput {
    EditPostalText {
        text: String,
    },
    ChooseSuggestion {
        postal_code: String,
    },
    Select {
        level: Level,
        #[serde(default)]
        code: Option<AreaCode>,
        #[serde(default = "by_user")]
        user_initiated: bool,
    },
    SetLocale {
        locale: Locale,
    },
    SetAddressLine {
        field: AddressField,
        value: String,
    },
    Reset,
}

fn by_user() -> bool {
    true
}
