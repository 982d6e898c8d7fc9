// crates/thaiaddr-core/src/engine/event.rs
use super::state::Mode;
use crate::error::PostalCodeError;
use crate::model::{AreaCode, Level, Locale, PostalCode, PostalSuggestion};
use serde::Serialize;

/// Why a selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    /// The dropdown is inert (no postal code entered yet, or parent unset).
    Disabled,
    /// The code is not among the dropdown's current options.
    UnknownCode,
}

/// Observable outcome of a transition, in the order it happened.
///
/// Adapters render from these (or from a fresh [`super::EngineView`]);
/// tests assert on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EngineEvent {
    /// State went back to its initial, empty form.
    Reset,
    Suggestions {
        prefix: String,
        items: Vec<PostalSuggestion>,
    },
    PostalConfirmed {
        postal_code: PostalCode,
        records: usize,
    },
    /// A confirmed postal code has no records; nothing else changed.
    NoMatch { postal_code: PostalCode },
    /// The postal text does not form a valid code; no cascade happened.
    InvalidFormat {
        text: String,
        #[serde(serialize_with = "serialize_display")]
        reason: PostalCodeError,
    },
    ModeChanged { from: Mode, to: Mode },
    OptionsPopulated { level: Level, count: usize },
    Selected {
        level: Level,
        code: Option<AreaCode>,
        user_initiated: bool,
    },
    /// The only candidate of a freshly populated list was picked.
    AutoSelected { level: Level, code: AreaCode },
    LevelCleared { level: Level },
    /// A subdistrict pick overwrote the postal field.
    PostalSynced { postal_code: PostalCode },
    Rejected {
        level: Level,
        code: Option<AreaCode>,
        reason: RejectReason,
    },
    LocaleChanged { locale: Locale },
}

fn serialize_display<S: serde::Serializer>(
    value: &PostalCodeError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
