// crates/thaiaddr-core/src/engine/mod.rs

//! # Resolution Engine
//!
//! Keeps the postal code and the province → district → subdistrict selection
//! consistent with each other, one input event at a time.
//!
//! ```text
//!  edit_postal_text ──(5 digits)──► confirm ──► provinces ──(1)──► districts ──(1)──► subdistricts
//!                                                   ▲                  ▲                   │
//!                               select_province ────┘  select_district ┘   select_subdistrict ──► postal sync
//! ```
//!
//! Two modes decide where option lists come from:
//!
//! - [`Mode::ZipDriven`]: the records matching the confirmed postal code.
//! - [`Mode::Manual`]: the whole table. Entered as soon as the user picks a
//!   province or district directly, and only left by a new postal-code
//!   confirmation or a reset.
//!
//! A freshly populated list with exactly one candidate selects it and
//! cascades one level down; zero or several candidates leave the level
//! unselected. Every transition runs to completion and returns the
//! [`EngineEvent`]s it produced, rejected input included.

mod event;
mod form;
mod input;
mod state;

pub use event::{EngineEvent, RejectReason};
pub use input::EngineInput;
pub use form::{
    validate_snapshot, AddressField, AddressLines, AddressSnapshot, FieldIssue, FormField,
};
pub use state::{ListOrigin, Mode, OptionList, OptionLists, ResolutionState, Selection, SubsetKind};

use crate::config::EngineConfig;
use crate::model::{
    AreaCode, GeographyRecord, Level, Locale, PostalCode, PostalSuggestion, ReferenceTable,
};
use crate::text::digits_only;
use crate::traits::{AddressQuery, AreaLabel};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A dropdown entry rendered for the active locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub code: AreaCode,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelView {
    pub enabled: bool,
    pub selected: Option<AreaCode>,
    pub options: Vec<OptionView>,
}

/// Everything an adapter needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineView {
    pub mode: Mode,
    pub locale: Locale,
    pub postal_text: String,
    /// Records behind the last *confirmed* postal code. A postal sync from a
    /// subdistrict changes `postal_text` but not this count.
    pub zip_record_count: usize,
    pub provinces: LevelView,
    pub districts: LevelView,
    pub subdistricts: LevelView,
}

/// One form session over a shared reference table.
#[derive(Debug, Clone)]
pub struct Engine {
    table: Arc<ReferenceTable>,
    config: EngineConfig,
    state: ResolutionState,
    lines: AddressLines,
}

impl Engine {
    pub fn new(table: Arc<ReferenceTable>, config: EngineConfig) -> Self {
        let mut engine = Self {
            table,
            config,
            state: ResolutionState::default(),
            lines: AddressLines::default(),
        };
        engine.reset_state();
        engine
    }

    pub fn with_defaults(table: Arc<ReferenceTable>) -> Self {
        Self::new(table, EngineConfig::default())
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn options(&self) -> &OptionLists {
        &self.state.options
    }

    pub fn address_lines(&self) -> &AddressLines {
        &self.lines
    }

    /// The records option lists are currently derived from: the full table
    /// in manual mode or when no postal code is confirmed, else the
    /// zip-matched records.
    pub fn active_subset(&self) -> &[GeographyRecord] {
        match self.effective_subset_kind() {
            SubsetKind::Full => self.table.records(),
            SubsetKind::Postal => &self.state.zip_records,
        }
    }

    // -----------------------------------------------------------------------
    // ADAPTER INPUTS
    // -----------------------------------------------------------------------

    /// The postal field changed. Non-digits are dropped first; an empty
    /// field resets the session, five digits confirm the code, anything
    /// shorter only refreshes suggestions.
    pub fn edit_postal_text(&mut self, raw: &str) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        let text = digits_only(raw);

        if text.is_empty() {
            self.reset_into(&mut events);
            return events;
        }

        self.state.selection.postal_text = text.clone();
        events.push(EngineEvent::Suggestions {
            items: self.suggestions_for(&text),
            prefix: text.clone(),
        });

        if text.len() >= crate::model::postal::POSTAL_CODE_LEN {
            match PostalCode::parse(&text) {
                Ok(code) => self.confirm_postal(code, &mut events),
                Err(reason) => {
                    warn!(%text, %reason, "postal text rejected");
                    events.push(EngineEvent::InvalidFormat { text, reason });
                }
            }
        }
        events
    }

    /// The user picked an entry from the suggestion list.
    pub fn choose_suggestion(&mut self, postal_code: &str) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        match PostalCode::parse(postal_code.trim()) {
            Ok(code) => {
                self.state.selection.postal_text = code.as_str().to_owned();
                self.confirm_postal(code, &mut events);
            }
            Err(reason) => events.push(EngineEvent::InvalidFormat {
                text: postal_code.to_owned(),
                reason,
            }),
        }
        events
    }

    pub fn select_province(
        &mut self,
        code: Option<AreaCode>,
        user_initiated: bool,
    ) -> Vec<EngineEvent> {
        self.select(Level::Province, code, user_initiated)
    }

    pub fn select_district(
        &mut self,
        code: Option<AreaCode>,
        user_initiated: bool,
    ) -> Vec<EngineEvent> {
        self.select(Level::District, code, user_initiated)
    }

    pub fn select_subdistrict(
        &mut self,
        code: Option<AreaCode>,
        user_initiated: bool,
    ) -> Vec<EngineEvent> {
        self.select(Level::Subdistrict, code, user_initiated)
    }

    /// Switches the display locale. Lists are re-derived from the same
    /// records they came from; selections and mode stay as they are.
    pub fn set_locale(&mut self, locale: Locale) -> Vec<EngineEvent> {
        self.config.locale = locale;
        self.relabel();
        info!(%locale, "locale changed");
        vec![EngineEvent::LocaleChanged { locale }]
    }

    /// Back to the initial state. Free-text address lines are kept.
    pub fn reset(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        self.reset_into(&mut events);
        events
    }

    pub fn set_address_line(&mut self, field: AddressField, value: impl Into<String>) {
        self.lines.set(field, value);
    }

    /// Routes a queued input to its handler. Address lines produce no events.
    pub fn dispatch(&mut self, input: EngineInput) -> Vec<EngineEvent> {
        match input {
            EngineInput::EditPostalText { text } => self.edit_postal_text(&text),
            EngineInput::ChooseSuggestion { postal_code } => self.choose_suggestion(&postal_code),
            EngineInput::Select {
                level,
                code,
                user_initiated,
            } => self.select(level, code, user_initiated),
            EngineInput::SetLocale { locale } => self.set_locale(locale),
            EngineInput::SetAddressLine { field, value } => {
                self.set_address_line(field, value);
                Vec::new()
            }
            EngineInput::Reset => self.reset(),
        }
    }

    // -----------------------------------------------------------------------
    // ENGINE OUTPUTS
    // -----------------------------------------------------------------------

    /// Suggestions for the current postal text.
    pub fn suggestions(&self) -> Vec<PostalSuggestion> {
        self.suggestions_for(&self.state.selection.postal_text)
    }

    pub fn view(&self) -> EngineView {
        let locale = self.config.locale;
        let opts = &self.state.options;
        let sel = &self.state.selection;

        EngineView {
            mode: self.state.mode,
            locale,
            postal_text: sel.postal_text.clone(),
            zip_record_count: self.state.zip_records.len(),
            provinces: LevelView {
                enabled: opts.provinces.enabled,
                selected: sel.province,
                options: opts.provinces.items.iter().map(|o| option_view(o, locale, None)).collect(),
            },
            districts: LevelView {
                enabled: opts.districts.enabled,
                selected: sel.district,
                options: opts.districts.items.iter().map(|o| option_view(o, locale, None)).collect(),
            },
            subdistricts: LevelView {
                enabled: opts.subdistricts.enabled,
                selected: sel.subdistrict,
                options: opts
                    .subdistricts
                    .items
                    .iter()
                    .map(|o| option_view(o, locale, Some(o.postal_code.to_string())))
                    .collect(),
            },
        }
    }

    /// Current selection as a submission/preview record.
    pub fn snapshot(&self) -> AddressSnapshot {
        let locale = self.config.locale;
        let opts = &self.state.options;
        let sel = &self.state.selection;

        AddressSnapshot {
            house_no: self.lines.house_no.trim().to_owned(),
            soi: self.lines.soi.trim().to_owned(),
            moo: self.lines.moo.trim().to_owned(),
            building_name: self.lines.building_name.trim().to_owned(),
            street_name: self.lines.street_name.trim().to_owned(),
            subdistrict_name: selected_label(&opts.subdistricts.items, sel.subdistrict, locale),
            district_name: selected_label(&opts.districts.items, sel.district, locale),
            province_name: selected_label(&opts.provinces.items, sel.province, locale),
            postal_code: sel.postal_text.trim().to_owned(),
        }
    }

    /// Submission check; an empty list means the address is complete.
    pub fn validate(&self) -> Vec<FieldIssue> {
        validate_snapshot(&self.snapshot())
    }

    // -----------------------------------------------------------------------
    // TRANSITIONS
    // -----------------------------------------------------------------------

    fn confirm_postal(&mut self, code: PostalCode, events: &mut Vec<EngineEvent>) {
        let matches = self.table.records().records_matching_postal(code.as_str());
        if matches.is_empty() {
            warn!(postal_code = %code, "no records for postal code");
            events.push(EngineEvent::NoMatch { postal_code: code });
            return;
        }

        self.set_mode(Mode::ZipDriven, events);
        debug!(postal_code = %code, records = matches.len(), "postal code confirmed");
        events.push(EngineEvent::PostalConfirmed {
            postal_code: code,
            records: matches.len(),
        });
        self.state.zip_records = matches;

        let provinces = self.state.zip_records.unique_provinces(self.config.locale);
        let count = provinces.len();
        self.state.options.provinces = OptionList::populated(
            provinces,
            ListOrigin {
                subset: SubsetKind::Postal,
                parent: None,
            },
        );
        self.state.selection.province = None;
        events.push(EngineEvent::OptionsPopulated {
            level: Level::Province,
            count,
        });

        match self.only_candidate(Level::Province) {
            Some(only) => {
                debug!(code = only, "auto-selected province");
                events.push(EngineEvent::AutoSelected {
                    level: Level::Province,
                    code: only,
                });
                self.apply_selection(Level::Province, Some(only), false, events);
            }
            None => {
                self.clear_level(Level::District, events);
                self.clear_level(Level::Subdistrict, events);
            }
        }
    }

    /// Validates an adapter-issued selection, then applies it.
    fn select(
        &mut self,
        level: Level,
        code: Option<AreaCode>,
        user_initiated: bool,
    ) -> Vec<EngineEvent> {
        let mut events = Vec::new();

        let reason = if !self.state.options.is_enabled(level) {
            Some(RejectReason::Disabled)
        } else if code.is_some_and(|c| !self.state.options.contains(level, c)) {
            Some(RejectReason::UnknownCode)
        } else {
            None
        };
        if let Some(reason) = reason {
            warn!(%level, ?code, ?reason, "selection rejected");
            events.push(EngineEvent::Rejected {
                level,
                code,
                reason,
            });
            return events;
        }

        events.push(EngineEvent::Selected {
            level,
            code,
            user_initiated,
        });
        self.apply_selection(level, code, user_initiated, &mut events);
        events
    }

    /// Applies a selection at `level` and cascades downwards.
    fn apply_selection(
        &mut self,
        level: Level,
        code: Option<AreaCode>,
        user_initiated: bool,
        events: &mut Vec<EngineEvent>,
    ) {
        // A direct pick of a province or district always wins over the zip.
        if user_initiated && code.is_some() && level != Level::Subdistrict {
            self.set_mode(Mode::Manual, events);
        }
        self.state.selection.set(level, code);

        let next = match level {
            Level::Province => Level::District,
            Level::District => Level::Subdistrict,
            Level::Subdistrict => {
                if let Some(code) = code {
                    self.sync_postal_from_subdistrict(code, events);
                }
                return;
            }
        };

        let Some(parent) = code else {
            self.clear_level(next, events);
            if next == Level::District {
                self.clear_level(Level::Subdistrict, events);
            }
            return;
        };

        self.populate(next, parent, events);

        match self.only_candidate(next) {
            Some(only) => {
                debug!(level = %next, code = only, "auto-selected");
                events.push(EngineEvent::AutoSelected {
                    level: next,
                    code: only,
                });
                self.apply_selection(next, Some(only), false, events);
            }
            None if next == Level::District => self.clear_level(Level::Subdistrict, events),
            None => {}
        }
    }

    /// Fills the district or subdistrict list under `parent` from the
    /// effective subset; the level's selection goes back to the placeholder.
    fn populate(&mut self, level: Level, parent: AreaCode, events: &mut Vec<EngineEvent>) {
        let origin = ListOrigin {
            subset: self.effective_subset_kind(),
            parent: Some(parent),
        };
        let count = self.derive(level, origin);
        self.state.selection.set(level, None);
        debug!(%level, parent, count, "populated");
        events.push(EngineEvent::OptionsPopulated { level, count });
    }

    /// Re-runs the query behind `origin` for `level` and stores the result.
    fn derive(&mut self, level: Level, origin: ListOrigin) -> usize {
        let locale = self.config.locale;
        let records = match origin.subset {
            SubsetKind::Full => self.table.records(),
            SubsetKind::Postal => &self.state.zip_records,
        };
        let opts = &mut self.state.options;
        match level {
            Level::Province => {
                opts.provinces = OptionList::populated(records.unique_provinces(locale), origin);
                opts.provinces.len()
            }
            Level::District => {
                opts.districts =
                    OptionList::populated(records.districts_of(origin.parent, locale), origin);
                opts.districts.len()
            }
            Level::Subdistrict => {
                opts.subdistricts =
                    OptionList::populated(records.subdistricts_of(origin.parent, locale), origin);
                opts.subdistricts.len()
            }
        }
    }

    fn sync_postal_from_subdistrict(&mut self, code: AreaCode, events: &mut Vec<EngineEvent>) {
        // Same records the subdistrict list was built from, so the first hit
        // is the option's own postal code.
        let source = match self.state.options.subdistricts.origin.map(|o| o.subset) {
            Some(SubsetKind::Postal) => &self.state.zip_records[..],
            _ => self.table.records(),
        };
        let Some(postal_code) = source.find_subdistrict(code).map(|r| r.postal_code.clone()) else {
            return;
        };

        if postal_code.as_str() != self.state.selection.postal_text {
            debug!(%postal_code, "postal code synced from subdistrict");
            self.state.selection.postal_text = postal_code.as_str().to_owned();
            events.push(EngineEvent::PostalSynced { postal_code });
        }
    }

    fn clear_level(&mut self, level: Level, events: &mut Vec<EngineEvent>) {
        let opts = &mut self.state.options;
        match level {
            Level::Province => opts.provinces = OptionList::cleared(),
            Level::District => opts.districts = OptionList::cleared(),
            Level::Subdistrict => opts.subdistricts = OptionList::cleared(),
        }
        self.state.selection.set(level, None);
        events.push(EngineEvent::LevelCleared { level });
    }

    fn relabel(&mut self) {
        let origins = [
            (Level::Province, self.state.options.provinces.origin),
            (Level::District, self.state.options.districts.origin),
            (Level::Subdistrict, self.state.options.subdistricts.origin),
        ];
        let province_enabled = self.state.options.provinces.enabled;
        for (level, origin) in origins {
            if let Some(origin) = origin {
                self.derive(level, origin);
            }
        }
        // The initial province list is populated but inert.
        self.state.options.provinces.enabled = province_enabled;
    }

    fn reset_into(&mut self, events: &mut Vec<EngineEvent>) {
        self.reset_state();
        info!("resolution state reset");
        events.push(EngineEvent::Reset);
    }

    fn reset_state(&mut self) {
        self.state = ResolutionState::default();
        self.derive(
            Level::Province,
            ListOrigin {
                subset: SubsetKind::Full,
                parent: None,
            },
        );
        // Inert until a postal code is entered.
        self.state.options.provinces.enabled = false;
    }

    // -----------------------------------------------------------------------
    // HELPERS
    // -----------------------------------------------------------------------

    fn set_mode(&mut self, mode: Mode, events: &mut Vec<EngineEvent>) {
        let from = self.state.mode;
        if from != mode {
            info!(?from, to = ?mode, "mode changed");
            self.state.mode = mode;
            events.push(EngineEvent::ModeChanged { from, to: mode });
        }
    }

    fn effective_subset_kind(&self) -> SubsetKind {
        if self.state.mode == Mode::Manual || self.state.zip_records.is_empty() {
            SubsetKind::Full
        } else {
            SubsetKind::Postal
        }
    }

    fn only_candidate(&self, level: Level) -> Option<AreaCode> {
        let opts = &self.state.options;
        match level {
            Level::Province => single(opts.provinces.items.iter().map(|o| o.code)),
            Level::District => single(opts.districts.items.iter().map(|o| o.code)),
            Level::Subdistrict => single(opts.subdistricts.items.iter().map(|o| o.code)),
        }
    }

    fn suggestions_for(&self, prefix: &str) -> Vec<PostalSuggestion> {
        self.table
            .records()
            .postal_code_suggestions(prefix, self.config.suggestion_limit)
    }
}

fn option_view<T: AreaLabel>(o: &T, locale: Locale, postal_code: Option<String>) -> OptionView {
    OptionView {
        code: o.code(),
        display_name: o.label(locale).to_owned(),
        postal_code,
    }
}

/// Label of the selected entry, or an empty string when nothing is selected.
fn selected_label<T: AreaLabel>(items: &[T], code: Option<AreaCode>, locale: Locale) -> String {
    code.and_then(|c| items.iter().find(|o| o.code() == c))
        .map(|o| o.label(locale).to_owned())
        .unwrap_or_default()
}

/// `Some(code)` iff the iterator yields exactly one code.
fn single(mut codes: impl Iterator<Item = AreaCode>) -> Option<AreaCode> {
    match (codes.next(), codes.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}
